//! Decoder configuration

use crate::chunk::ChunkSizeMode;
use crate::cursor::DEFAULT_MAX_STRING_LEN;

/// Default bound on scene-descriptor nesting
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 10_000;

/// Configuration for decoding HGM model files
///
/// The defaults match the retail packs; most callers never change them.
///
/// # Example
///
/// ```
/// use tsuhan::{ChunkSizeMode, DecodeConfig};
///
/// let config = DecodeConfig::new()
///     .with_chunk_size_mode(ChunkSizeMode::IncludesHeader)
///     .with_texture_extension("png");
/// assert_eq!(config.texture_extension(), ".png");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeConfig {
    max_string_len: usize,
    max_hierarchy_depth: usize,
    chunk_size_mode: ChunkSizeMode,
    model_root_segment: String,
    texture_root_segment: String,
    texture_extension: String,
    texture_mime_type: String,
    generator: Option<String>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
            chunk_size_mode: ChunkSizeMode::PayloadOnly,
            model_root_segment: "model".to_string(),
            texture_root_segment: "texture".to_string(),
            texture_extension: ".tga".to_string(),
            texture_mime_type: "image/tga".to_string(),
            generator: Some(format!("tsuhan {}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl DecodeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string buffer size; decoded strings must be shorter
    pub fn with_max_string_len(mut self, max_string_len: usize) -> Self {
        self.max_string_len = max_string_len;
        self
    }

    /// Set the scene-descriptor nesting bound
    pub fn with_max_hierarchy_depth(mut self, max_hierarchy_depth: usize) -> Self {
        self.max_hierarchy_depth = max_hierarchy_depth;
        self
    }

    /// Set how chunk header sizes are measured
    pub fn with_chunk_size_mode(mut self, mode: ChunkSizeMode) -> Self {
        self.chunk_size_mode = mode;
        self
    }

    /// Set the path segments swapped when deriving texture paths
    pub fn with_texture_roots(
        mut self,
        model_root: impl Into<String>,
        texture_root: impl Into<String>,
    ) -> Self {
        self.model_root_segment = model_root.into();
        self.texture_root_segment = texture_root.into();
        self
    }

    /// Set the texture file extension (a leading dot is added if missing)
    ///
    /// The MIME type follows the extension for `tga`, `png`, `jpg`/`jpeg`
    /// and `dds`; other extensions keep the current MIME type.
    pub fn with_texture_extension(mut self, extension: &str) -> Self {
        let bare = extension.trim_start_matches('.');
        self.texture_extension = format!(".{}", bare);
        let mime = match bare.to_ascii_lowercase().as_str() {
            "tga" => Some("image/tga"),
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "dds" => Some("image/vnd-ms.dds"),
            _ => None,
        };
        if let Some(mime) = mime {
            self.texture_mime_type = mime.to_string();
        }
        self
    }

    /// Set the MIME type recorded for embedded texture images
    pub fn with_texture_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.texture_mime_type = mime_type.into();
        self
    }

    /// Set the generator string written to the document (None to omit)
    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    /// String buffer size; decoded strings must be shorter
    pub fn max_string_len(&self) -> usize {
        self.max_string_len
    }

    /// Scene-descriptor nesting bound
    pub fn max_hierarchy_depth(&self) -> usize {
        self.max_hierarchy_depth
    }

    /// Chunk size convention
    pub fn chunk_size_mode(&self) -> ChunkSizeMode {
        self.chunk_size_mode
    }

    /// Model root path segment
    pub fn model_root_segment(&self) -> &str {
        &self.model_root_segment
    }

    /// Texture root path segment
    pub fn texture_root_segment(&self) -> &str {
        &self.texture_root_segment
    }

    /// Texture file extension, including the leading dot
    pub fn texture_extension(&self) -> &str {
        &self.texture_extension
    }

    /// MIME type of embedded texture images
    pub fn texture_mime_type(&self) -> &str {
        &self.texture_mime_type
    }

    /// Generator string
    pub fn generator(&self) -> Option<&str> {
        self.generator.as_deref()
    }
}
