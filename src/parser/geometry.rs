//! Geometry chunks
//!
//! ```text
//! s     name
//! ffff  unused
//! l     unused flag
//! l     vertex attribute mask (low 16 bits)
//! l     skip flag; when non-zero nothing else follows
//! l     vertex count
//! ..    vertex count * stride bytes of interleaved vertex data
//! l     index stream count (always 1)
//! l     index format (unused)
//! l     index count
//! ..    index count * 2 bytes of u16 indices
//! ```

use super::DecodeSession;
use super::lookup::GeometryEntry;
use crate::error::{Error, Result};
use crate::layout::{AttributeMask, attribute_streams, index_bounds};
use crate::model::{Accessor, AccessorType, BufferTarget, BufferView, ComponentType};
use log::{debug, trace};

const INDEX_SIZE: usize = 2;

pub(super) fn decode_geometry(session: &mut DecodeSession<'_>, payload: &[u8]) -> Result<usize> {
    let mut cursor = session.cursor(payload);
    let header = cursor.read_format("sfffflll")?;
    let name = header.string(0)?.to_string();
    let mask = AttributeMask::new((header.u32(6)? & 0xFFFF) as u16);
    let skip = header.u32(7)?;
    trace!(
        "geometry '{}': flag {:#x}, mask {:#06x}, skip {}",
        name,
        header.u32(5)?,
        mask.bits(),
        skip
    );

    if skip != 0 {
        debug!("geometry '{}' declared without data", name);
        register_geometry(session, &name, GeometryEntry::default());
        return Ok(cursor.offset());
    }

    let vertex_count = cursor.read_u32("vertex count")? as usize;
    let stride = mask.stride();
    let vertex_len = stride
        .checked_mul(vertex_count)
        .ok_or_else(|| Error::truncated("vertex data", usize::MAX, cursor.remaining()))?;
    let vertex_data = cursor.take(vertex_len, "vertex data")?;

    let stream_count = cursor.read_u32("index stream count")?;
    if stream_count != 1 {
        return Err(Error::unsupported(format!(
            "geometry '{}' has {} index streams, expected 1",
            name, stream_count
        )));
    }
    let index_format = cursor.read_u32("index format")?;
    let index_count = cursor.read_u32("index count")? as usize;
    let index_len = index_count
        .checked_mul(INDEX_SIZE)
        .ok_or_else(|| Error::truncated("index data", usize::MAX, cursor.remaining()))?;
    let index_data = cursor.take(index_len, "index data")?;
    trace!(
        "geometry '{}': {} vertices of {} bytes, {} indices (format {})",
        name, vertex_count, stride, index_count, index_format
    );

    let streams = attribute_streams(mask, vertex_data, vertex_count)?;
    let document = &mut session.document;
    let mut entry = GeometryEntry::default();

    if vertex_len > 0 {
        let buffer = document.add_buffer(format!("{}: Vertices", name), vertex_data.to_vec());
        let view = document.add_buffer_view(BufferView {
            name: Some(format!("{}: VertexView", name)),
            buffer,
            byte_offset: 0,
            byte_length: vertex_len,
            byte_stride: Some(stride),
            target: Some(BufferTarget::ArrayBuffer),
        });
        for stream in streams {
            let accessor = document.add_accessor(Accessor {
                buffer_view: view,
                byte_offset: stream.layout.offset,
                component_type: stream.component_type,
                count: stream.count,
                accessor_type: stream.layout.accessor_type,
                min: stream.min,
                max: stream.max,
            });
            entry.attributes.push((stream.layout.semantic, accessor));
        }
    }

    if index_len > 0 {
        let buffer = document.add_buffer(format!("{}: Indices", name), index_data.to_vec());
        let view = document.add_buffer_view(BufferView {
            name: Some(format!("{}: IndexView", name)),
            buffer,
            byte_offset: 0,
            byte_length: index_len,
            byte_stride: None,
            target: Some(BufferTarget::ElementArrayBuffer),
        });
        let (min, max) = index_bounds(index_data);
        entry.indices = Some(document.add_accessor(Accessor {
            buffer_view: view,
            byte_offset: 0,
            component_type: ComponentType::U16,
            count: index_count,
            accessor_type: AccessorType::Scalar,
            min,
            max,
        }));
    }

    debug!(
        "geometry '{}': {} attribute streams, indices {:?}",
        name,
        entry.attributes.len(),
        entry.indices
    );
    register_geometry(session, &name, entry);
    Ok(cursor.offset())
}

/// A redefined geometry replaces the earlier one for meshes decoded later
fn register_geometry(session: &mut DecodeSession<'_>, name: &str, entry: GeometryEntry) {
    if session.tables.geometries.replace(name, entry).is_some() {
        debug!("geometry '{}' redefined, later meshes use the new one", name);
    }
}
