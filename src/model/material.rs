//! Materials, textures and images

/// Extension name marking a material as unlit
pub const KHR_MATERIALS_UNLIT: &str = "KHR_materials_unlit";

/// Surface material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Classification code from the material record
    pub class: u32,
    /// Base color factor (RGBA)
    pub base_color_factor: [f32; 4],
    /// Base color texture index
    pub base_color_texture: Option<usize>,
    /// Second color quadruple carried by extended material records
    pub secondary_color: Option<[f32; 4]>,
    /// Metallic factor
    pub metallic_factor: f32,
    /// Render both faces
    pub double_sided: bool,
    /// Shade without lighting
    pub unlit: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            class: 0,
            base_color_factor: [1.0; 4],
            base_color_texture: None,
            secondary_color: None,
            metallic_factor: 0.0,
            double_sided: true,
            unlit: true,
        }
    }
}

/// Texture referencing an image
///
/// A texture without a source is a placeholder: a material referred to it
/// before its texture record was decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Texture {
    /// Texture name
    pub name: Option<String>,
    /// Image index
    pub source: Option<usize>,
}

impl Texture {
    /// True if no texture record has filled this entry yet
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

/// Image embedded in a buffer view
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Image name
    pub name: String,
    /// Upper-cased source file name
    pub file_name: String,
    /// MIME type of the embedded bytes
    pub mime_type: String,
    /// Buffer view holding the image bytes
    pub buffer_view: usize,
}
