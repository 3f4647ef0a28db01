//! Error types for pack and HGM decoding
//!
//! Every error carries a stable code so callers can categorize failures
//! without matching on message text.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O, pack and texture source errors
//! - **E2xxx**: Byte-level format errors (truncation, bad strings)
//! - **E3xxx**: Cross-reference and hierarchy errors
//! - **E4xxx**: Unsupported features
//! - **E5xxx**: Output serialization errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error
//! - `E1002`: Texture bytes not available
//! - `E1003`: Unknown pack or pack entry
//! - `E2001`: Field extends past the end of its payload
//! - `E2002`: Chunk extends past the end of the file
//! - `E2003`: Invalid string field
//! - `E2004`: Record field read back as the wrong kind
//! - `E3001`: Name lookup failed
//! - `E3002`: Malformed scene-descriptor hierarchy
//! - `E4001`: Unsupported feature
//! - `E5001`: JSON serialization error

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of named entity a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Geometry (vertex/index buffers)
    Geometry,
    /// Material
    Material,
    /// Mesh
    Mesh,
    /// Texture
    Texture,
    /// Transform or bone scene node
    Transform,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Geometry => "geometry",
            EntityKind::Material => "material",
            EntityKind::Mesh => "mesh",
            EntityKind::Texture => "texture",
            EntityKind::Transform => "transform",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while unpacking and decoding model files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading or writing a file
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The texture provider could not supply bytes for a texture path
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - The texture pack was not extracted before the model pack
    /// - The texture file name in the model does not match any pack entry
    #[error("[E1002] Texture not available: {0}")]
    MissingTexture(String),

    /// Unknown pack file or pack entry
    ///
    /// **Error Code**: E1003
    #[error("[E1003] Missing file: {0}")]
    MissingFile(String),

    /// Fewer bytes remain than a field declares
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Corrupted or truncated model file
    /// - Wrong XOR key used to decrypt the pack
    #[error("[E2001] Truncated data reading {field}: needed {needed} bytes, {available} available")]
    TruncatedData {
        /// Field being decoded
        field: &'static str,
        /// Bytes the field requires
        needed: usize,
        /// Bytes left in the payload
        available: usize,
    },

    /// A chunk declares more payload than the file holds
    ///
    /// **Error Code**: E2002
    #[error("[E2002] Truncated chunk (tag {tag}): declared {declared} bytes, {available} available")]
    TruncatedChunk {
        /// Raw tag value of the chunk
        tag: u32,
        /// Declared payload size
        declared: usize,
        /// Bytes left in the file after the header
        available: usize,
    },

    /// String field is unterminated or longer than the configured cap
    ///
    /// **Error Code**: E2003
    #[error("[E2003] Invalid string: {0}")]
    InvalidString(String),

    /// A decoded record field was requested as a different kind
    ///
    /// **Error Code**: E2004
    #[error("[E2004] Field mismatch: {0}")]
    FieldMismatch(String),

    /// A name lookup failed while resolving a cross-reference
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - A mesh references a geometry or material that appears later in the file
    /// - A scene descriptor names a node that was never declared
    #[error("[E3001] Unresolved {kind} reference '{name}'")]
    UnresolvedReference {
        /// Table the lookup was made against
        kind: EntityKind,
        /// Name that was looked up
        name: String,
    },

    /// Scene-descriptor hierarchy is too deep or inconsistent
    ///
    /// **Error Code**: E3002
    #[error("[E3002] Malformed hierarchy: {0}")]
    MalformedHierarchy(String),

    /// Format feature that is known to exist but is not supported
    ///
    /// **Error Code**: E4001
    #[error("[E4001] Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// glTF JSON serialization error
    ///
    /// **Error Code**: E5001
    #[cfg(feature = "gltf")]
    #[error("[E5001] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a TruncatedData error
    ///
    /// # Arguments
    /// * `field` - Name of the field being decoded
    /// * `needed` - Bytes the field requires
    /// * `available` - Bytes remaining
    pub fn truncated(field: &'static str, needed: usize, available: usize) -> Self {
        Error::TruncatedData {
            field,
            needed,
            available,
        }
    }

    /// Create an UnresolvedReference error
    pub fn unresolved(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::UnresolvedReference {
            kind,
            name: name.into(),
        }
    }

    /// Create a MalformedHierarchy error
    pub fn malformed_hierarchy(message: impl Into<String>) -> Self {
        Error::MalformedHierarchy(message.into())
    }

    /// Create an UnsupportedFeature error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Error::UnsupportedFeature(message.into())
    }

    /// Stable error code, e.g. `"E2001"`
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "E1001",
            Error::MissingTexture(_) => "E1002",
            Error::MissingFile(_) => "E1003",
            Error::TruncatedData { .. } => "E2001",
            Error::TruncatedChunk { .. } => "E2002",
            Error::InvalidString(_) => "E2003",
            Error::FieldMismatch(_) => "E2004",
            Error::UnresolvedReference { .. } => "E3001",
            Error::MalformedHierarchy(_) => "E3002",
            Error::UnsupportedFeature(_) => "E4001",
            #[cfg(feature = "gltf")]
            Error::Json(_) => "E5001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let truncated = Error::truncated("vertex data", 48, 12);
        assert!(truncated.to_string().contains("[E2001]"));
        assert!(truncated.to_string().contains("vertex data"));

        let chunk = Error::TruncatedChunk {
            tag: 2,
            declared: 64,
            available: 8,
        };
        assert!(chunk.to_string().contains("[E2002]"));

        let unresolved = Error::unresolved(EntityKind::Geometry, "BODY");
        assert!(unresolved.to_string().contains("[E3001]"));
        assert!(unresolved.to_string().contains("geometry reference 'BODY'"));

        let unsupported = Error::unsupported("2 index streams");
        assert!(unsupported.to_string().contains("[E4001]"));
    }

    #[test]
    fn test_code_matches_display_prefix() {
        let errors = [
            Error::MissingTexture("texture/common/A.tga".to_string()),
            Error::MissingFile("model09.bin".to_string()),
            Error::InvalidString("unterminated".to_string()),
            Error::FieldMismatch("field 0".to_string()),
            Error::malformed_hierarchy("too deep"),
        ];
        for err in errors {
            let prefix = format!("[{}]", err.code());
            assert!(err.to_string().starts_with(&prefix), "{}", err);
        }
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Material.to_string(), "material");
        assert_eq!(EntityKind::Transform.to_string(), "transform");
    }
}
