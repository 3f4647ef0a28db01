//! Transform and bone chunks (`slfffffffff`): name, an opaque integer,
//! translation, Euler rotation in degrees and scale.

use super::DecodeSession;
use crate::error::Result;
use crate::model::{Node, NodeKind};
use log::debug;
use nalgebra::UnitQuaternion;

/// Rotation quaternion `[x, y, z, w]` for Euler angles in degrees
///
/// The angles rotate about X, then Y, then Z (the quaternion is
/// `Rz * Ry * Rx`).
pub(crate) fn euler_degrees_to_quaternion(euler: [f32; 3]) -> [f32; 4] {
    let rotation = UnitQuaternion::from_euler_angles(
        euler[0].to_radians(),
        euler[1].to_radians(),
        euler[2].to_radians(),
    );
    let q = rotation.into_inner();
    [q.i, q.j, q.k, q.w]
}

pub(super) fn decode_node(
    session: &mut DecodeSession<'_>,
    payload: &[u8],
    kind: NodeKind,
) -> Result<usize> {
    let mut cursor = session.cursor(payload);
    let record = cursor.read_format("slfffffffff")?;
    let name = record.string(0)?.to_string();
    let euler = record.vec3(5)?;

    let node = Node {
        name: name.clone(),
        kind,
        unknown: record.u32(1)?,
        translation: record.vec3(2)?,
        rotation: euler_degrees_to_quaternion(euler),
        scale: record.vec3(8)?,
        children: Vec::new(),
        mesh: None,
    };
    let index = session.document.add_node(node);
    if !session.tables.transforms.register(&name, index) {
        debug!("{:?} '{}' redeclared, keeping the first", kind, name);
    }
    debug!("{:?} '{}' -> {}", kind, name, index);
    Ok(cursor.offset())
}
