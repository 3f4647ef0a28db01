//! Mesh chunks: a name, a submesh count, then `(material, geometry)` name
//! pairs. Every pair becomes one triangle-strip primitive.

use super::DecodeSession;
use crate::error::Result;
use crate::model::{Mesh, Primitive, PrimitiveMode};
use log::{debug, trace};

pub(super) fn decode_mesh(session: &mut DecodeSession<'_>, payload: &[u8]) -> Result<usize> {
    let mut cursor = session.cursor(payload);
    let name = cursor.read_string("mesh name")?;
    let submesh_count = cursor.read_u32("submesh count")?;

    let mut primitives = Vec::new();
    for i in 0..submesh_count {
        let pair = cursor.read_format("ss")?;
        let material_name = pair.string(0)?;
        let geometry_name = pair.string(1)?;
        trace!(
            "mesh '{}' {}: material '{}', geometry '{}'",
            name, i, material_name, geometry_name
        );

        let geometry = session.tables.geometries.resolve(geometry_name)?;
        let material = *session.tables.materials.resolve(material_name)?;
        primitives.push(Primitive {
            attributes: geometry.attributes.clone(),
            indices: geometry.indices,
            material: Some(material),
            mode: PrimitiveMode::TriangleStrip,
        });
    }

    let index = session.document.add_mesh(Mesh {
        name: name.clone(),
        primitives,
    });
    session.tables.meshes.register(&name, index);
    debug!("mesh '{}' -> {} ({} primitives)", name, index, submesh_count);
    Ok(cursor.offset())
}
