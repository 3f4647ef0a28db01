//! Scene-descriptor chunks
//!
//! The payload is a depth-first tree of `sll` records (name, relation code,
//! child count). Each record is followed directly by its children, so the
//! only way to find where a subtree ends is to walk it. The relation code of
//! a child says how it hangs off its parent:
//!
//! - 4 (transform) or 11 (bone): the child node becomes a child of the parent
//! - 2 (mesh): the named mesh is attached to the parent node
//!
//! Other codes are ignored. The walk keeps its own stack so a corrupt,
//! very deep tree fails cleanly instead of overflowing the call stack.

use super::DecodeSession;
use crate::chunk::TagId;
use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use log::{debug, trace};

/// One open record: its node name and how many children remain unread
struct Frame {
    name: String,
    remaining: u32,
}

fn read_record(cursor: &mut ByteCursor<'_>) -> Result<(String, u32, u32)> {
    let record = cursor.read_format("sll")?;
    Ok((record.string(0)?.to_string(), record.u32(1)?, record.u32(2)?))
}

pub(super) fn decode_scene_descriptor(
    session: &mut DecodeSession<'_>,
    payload: &[u8],
) -> Result<usize> {
    let max_depth = session.config.max_hierarchy_depth();
    let mut cursor = session.cursor(payload);

    let (root, code, count) = read_record(&mut cursor)?;
    debug!("-{}({})", root, code);
    let mut stack = vec![Frame {
        name: root,
        remaining: count,
    }];

    while let Some(top) = stack.last_mut() {
        if top.remaining == 0 {
            stack.pop();
            continue;
        }
        top.remaining -= 1;
        let parent = top.name.clone();

        let (child, code, count) = read_record(&mut cursor)?;
        let depth = stack.len();
        if depth >= max_depth {
            return Err(Error::malformed_hierarchy(format!(
                "'{}' is nested deeper than {} levels",
                child, max_depth
            )));
        }
        debug!("{:indent$}-{}({})", "", child, code, indent = depth * 2);

        match TagId::from_raw(code) {
            TagId::Transform | TagId::Bone => link_child(session, &parent, &child)?,
            TagId::Mesh => attach_mesh(session, &parent, &child)?,
            _ => trace!("'{}' under '{}': relation {} ignored", child, parent, code),
        }

        stack.push(Frame {
            name: child,
            remaining: count,
        });
    }
    Ok(cursor.offset())
}

/// Make node `child` a child of node `parent`
///
/// Linking the same pair twice is a no-op. A node may have only one parent
/// and may not become its own ancestor.
fn link_child(session: &mut DecodeSession<'_>, parent: &str, child: &str) -> Result<()> {
    let parent_index = *session.tables.transforms.resolve(parent)?;
    let child_index = *session.tables.transforms.resolve(child)?;
    if parent_index == child_index {
        return Err(Error::malformed_hierarchy(format!(
            "'{}' is listed as its own child",
            child
        )));
    }

    match session.parents.get(&child_index) {
        Some(&existing) if existing == parent_index => return Ok(()),
        Some(&existing) => {
            return Err(Error::malformed_hierarchy(format!(
                "'{}' is a child of '{}' and '{}'",
                child, session.document.nodes[existing].name, parent
            )));
        }
        None => {}
    }

    let mut ancestor = Some(parent_index);
    while let Some(index) = ancestor {
        if index == child_index {
            return Err(Error::malformed_hierarchy(format!(
                "'{}' cannot be a child of its descendant '{}'",
                child, parent
            )));
        }
        ancestor = session.parents.get(&index).copied();
    }

    session.parents.insert(child_index, parent_index);
    session.document.nodes[parent_index].children.push(child_index);
    Ok(())
}

/// Attach mesh `mesh` to node `parent`
fn attach_mesh(session: &mut DecodeSession<'_>, parent: &str, mesh: &str) -> Result<()> {
    let mesh_index = *session.tables.meshes.resolve(mesh)?;
    let node_index = *session.tables.transforms.resolve(parent)?;
    session.document.nodes[node_index].mesh = Some(mesh_index);
    Ok(())
}
