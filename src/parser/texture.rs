//! Texture chunks: display name, source file name and six unused integers
//! (`ssllllll`). The image bytes come from the texture provider.

use super::DecodeSession;
use crate::error::Result;
use crate::model::{BufferView, DecodeConfig, Image, Texture};
use log::debug;

/// Logical path of a texture referenced from the model at `logical_name`
///
/// The model's directory is reused with every segment equal to the model
/// root replaced by the texture root. The file name is upper-cased and its
/// extension replaced by the configured one.
///
/// # Example
///
/// ```
/// use tsuhan::{DecodeConfig, texture_path_for};
///
/// let path = texture_path_for("model/common/CONGA.hgm", "conga_skin.bmp", &DecodeConfig::default());
/// assert_eq!(path, "texture/common/CONGA_SKIN.tga");
/// ```
pub fn texture_path_for(logical_name: &str, file_name: &str, config: &DecodeConfig) -> String {
    let mut segments: Vec<&str> = logical_name.split(['/', '\\']).collect();
    segments.pop();
    let directory = segments
        .iter()
        .map(|&segment| {
            if segment == config.model_root_segment() {
                config.texture_root_segment()
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    let upper = file_name.to_ascii_uppercase();
    let stem = match upper.rfind('.') {
        Some(dot) if dot > 0 => &upper[..dot],
        _ => upper.as_str(),
    };
    let file = format!("{}{}", stem, config.texture_extension());
    if directory.is_empty() {
        file
    } else {
        format!("{}/{}", directory, file)
    }
}

pub(super) fn decode_texture(session: &mut DecodeSession<'_>, payload: &[u8]) -> Result<usize> {
    let mut cursor = session.cursor(payload);
    let names = cursor.read_format("ss")?;
    cursor.read_format("llllll")?;
    let name = names.string(0)?.to_string();
    let path = texture_path_for(session.logical_name, names.string(1)?, session.config);

    let bytes = session.provider.texture_bytes(&path)?;
    let file_name = path.rsplit('/').next().unwrap_or(&path).to_string();

    let document = &mut session.document;
    let byte_length = bytes.len();
    let buffer = document.add_buffer(format!("{}: Buffer", file_name), bytes);
    let view = document.add_buffer_view(BufferView {
        name: Some(format!("{}: BufferView", file_name)),
        buffer,
        byte_offset: 0,
        byte_length,
        byte_stride: None,
        target: None,
    });
    let image = document.add_image(Image {
        name: name.clone(),
        file_name,
        mime_type: session.config.texture_mime_type().to_string(),
        buffer_view: view,
    });
    let texture = Texture {
        name: Some(name.clone()),
        source: Some(image),
    };

    let index = match session.tables.textures.get(&name).copied() {
        Some(index) => {
            document.textures[index] = texture;
            index
        }
        None => {
            let index = document.add_texture(texture);
            session.tables.textures.register(&name, index);
            index
        }
    };
    debug!("texture '{}' -> {} ({}, {} bytes)", name, index, path, byte_length);
    Ok(cursor.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_path_swaps_root_segment() {
        let config = DecodeConfig::default();
        assert_eq!(
            texture_path_for("model/osaka/OSAKA.hgm", "osaka_skinleg.tga", &config),
            "texture/osaka/OSAKA_SKINLEG.tga"
        );
    }

    #[test]
    fn test_texture_path_keeps_other_segments() {
        let config = DecodeConfig::default();
        // Only whole segments are swapped
        assert_eq!(
            texture_path_for("dump/models/model/X.hgm", "a", &config),
            "dump/models/texture/A.tga"
        );
        assert_eq!(texture_path_for("X.hgm", "wood.png", &config), "WOOD.tga");
    }

    #[test]
    fn test_texture_path_with_custom_roots() {
        let config = DecodeConfig::new()
            .with_texture_roots("mdl", "tex")
            .with_texture_extension("png");
        assert_eq!(
            texture_path_for("mdl\\ending\\END.hgm", "Flower.TGA", &config),
            "tex/ending/FLOWER.png"
        );
    }

    #[test]
    fn test_hidden_file_name_keeps_leading_dot() {
        let config = DecodeConfig::default();
        assert_eq!(texture_path_for("model/a/B.hgm", ".x", &config), "texture/a/.X.tga");
    }
}
