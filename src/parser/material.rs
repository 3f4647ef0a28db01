//! Material chunks
//!
//! ```text
//! s     name
//! l     class
//! s     texture name, or "__NOTEX__"
//! ffff  base color
//! ffff  second color (class > 0 only)
//! l     name count (classes 2, 3, 4, 6 and 7 only)
//! s..   that many names
//! ```

use super::DecodeSession;
use crate::error::Result;
use crate::model::{KHR_MATERIALS_UNLIT, Material, Texture};
use log::{debug, trace};

/// Texture name meaning "no texture"
pub const NO_TEXTURE: &str = "__NOTEX__";

/// Classes whose records end with a counted list of names
const NAME_LIST_CLASSES: [u32; 5] = [2, 3, 4, 6, 7];

pub(super) fn decode_material(session: &mut DecodeSession<'_>, payload: &[u8]) -> Result<usize> {
    let mut cursor = session.cursor(payload);
    let header = cursor.read_format("sl")?;
    let name = header.string(0)?.to_string();
    let class = header.u32(1)?;
    let texture_name = cursor.read_string("texture name")?;
    let base_color = cursor.read_format("ffff")?.vec4(0)?;

    let secondary_color = if class > 0 {
        Some(cursor.read_format("ffff")?.vec4(0)?)
    } else {
        None
    };

    if NAME_LIST_CLASSES.contains(&class) {
        let count = cursor.read_u32("material name count")?;
        for _ in 0..count {
            let extra = cursor.read_string("material name")?;
            trace!("material '{}': extra name '{}'", name, extra);
        }
    }

    let base_color_texture = if texture_name == NO_TEXTURE {
        None
    } else {
        Some(texture_slot(session, &texture_name))
    };

    let index = session.document.add_material(Material {
        name: name.clone(),
        class,
        base_color_factor: base_color,
        base_color_texture,
        secondary_color,
        ..Material::default()
    });
    session.document.use_extension(KHR_MATERIALS_UNLIT);
    session.tables.materials.register(&name, index);
    debug!(
        "material '{}' -> {} (class {}, texture {:?})",
        name, index, class, base_color_texture
    );
    Ok(cursor.offset())
}

/// Index of the texture named `name`, adding a placeholder if it is new
fn texture_slot(session: &mut DecodeSession<'_>, name: &str) -> usize {
    if let Some(&index) = session.tables.textures.get(name) {
        return index;
    }
    let index = session.document.add_texture(Texture {
        name: Some(name.to_string()),
        source: None,
    });
    session.tables.textures.register(name, index);
    debug!("texture '{}' -> {} (placeholder)", name, index);
    index
}
