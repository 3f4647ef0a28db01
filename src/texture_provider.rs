//! Texture byte sources
//!
//! Model files only name their textures. The decoder derives a logical
//! texture path such as `texture/common/CONGA_SKIN.tga` and asks a
//! [`TextureProvider`] for the raw bytes.

use crate::error::{Error, Result};
use crate::pack::Pack;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies raw texture bytes for a logical texture path
///
/// Any `Fn(&str) -> Result<Vec<u8>>` closure is a provider.
///
/// # Example
///
/// ```
/// use tsuhan::{Error, Result, TextureProvider};
///
/// struct Checkerboard;
///
/// impl TextureProvider for Checkerboard {
///     fn texture_bytes(&self, path: &str) -> Result<Vec<u8>> {
///         if path.ends_with(".tga") {
///             Ok(vec![0xFF; 16])
///         } else {
///             Err(Error::MissingTexture(path.to_string()))
///         }
///     }
/// }
///
/// assert_eq!(Checkerboard.texture_bytes("texture/common/A.tga")?.len(), 16);
/// # Ok::<(), tsuhan::Error>(())
/// ```
pub trait TextureProvider {
    /// Bytes of the texture at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Logical path using `/` separators, e.g. `texture/osaka/OSAKA_SKINLEG.tga`
    ///
    /// # Returns
    ///
    /// The raw file bytes, or [`Error::MissingTexture`] if there is no such texture
    fn texture_bytes(&self, path: &str) -> Result<Vec<u8>>;
}

impl<F> TextureProvider for F
where
    F: Fn(&str) -> Result<Vec<u8>>,
{
    fn texture_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self(path)
    }
}

/// Reads textures from an extracted dump directory
#[derive(Debug, Clone)]
pub struct DirectoryTextureProvider {
    root: PathBuf,
}

impl DirectoryTextureProvider {
    /// Resolve logical paths relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextureProvider for DirectoryTextureProvider {
    fn texture_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let full = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        match std::fs::read(&full) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::MissingTexture(path.to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// In-memory textures keyed by logical path
///
/// Usually filled from decrypted texture packs so models can be converted
/// without writing textures to disk first.
#[derive(Debug, Clone, Default)]
pub struct PackTextureProvider {
    textures: HashMap<String, Vec<u8>>,
}

impl PackTextureProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider holding every entry of `packs`
    pub fn from_packs<'a>(packs: impl IntoIterator<Item = &'a Pack>) -> Self {
        let mut provider = Self::new();
        for pack in packs {
            provider.add_pack(pack);
        }
        provider
    }

    /// Add every entry of `pack` under its logical path
    pub fn add_pack(&mut self, pack: &Pack) {
        for entry in pack.entries() {
            self.insert(entry.logical_path(), entry.data.to_vec());
        }
    }

    /// Add one texture
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.textures.insert(path.into(), bytes);
    }

    /// Number of textures held
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// True if no textures are held
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureProvider for PackTextureProvider {
    fn texture_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.textures
            .get(path)
            .cloned()
            .ok_or_else(|| Error::MissingTexture(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_provider() {
        let provider = |path: &str| -> Result<Vec<u8>> { Ok(path.as_bytes().to_vec()) };
        assert_eq!(provider.texture_bytes("a/B.tga").unwrap(), b"a/B.tga");
    }

    #[test]
    fn test_pack_provider_lookup() {
        let mut provider = PackTextureProvider::new();
        provider.insert("texture/common/WOOD.tga", vec![1, 2, 3]);
        assert_eq!(provider.len(), 1);
        assert_eq!(
            provider.texture_bytes("texture/common/WOOD.tga").unwrap(),
            vec![1, 2, 3]
        );
        assert!(matches!(
            provider.texture_bytes("texture/common/STONE.tga"),
            Err(Error::MissingTexture(_))
        ));
    }

    #[test]
    fn test_directory_provider() {
        let dir = tempfile::tempdir().unwrap();
        let texture_dir = dir.path().join("texture").join("common");
        std::fs::create_dir_all(&texture_dir).unwrap();
        std::fs::write(texture_dir.join("WOOD.tga"), [9u8; 4]).unwrap();

        let provider = DirectoryTextureProvider::new(dir.path());
        assert_eq!(
            provider.texture_bytes("texture/common/WOOD.tga").unwrap(),
            vec![9; 4]
        );
        assert!(matches!(
            provider.texture_bytes("texture/common/NONE.tga"),
            Err(Error::MissingTexture(_))
        ));
    }
}
