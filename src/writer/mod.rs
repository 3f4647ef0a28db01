//! Scene document output
//!
//! A [`DocumentSink`] accepts a finished [`SceneDocument`]. With the `gltf`
//! feature, [`GltfWriter`] serializes documents as glTF 2.0 JSON with every
//! buffer embedded.

#[cfg(feature = "gltf")]
mod gltf;

use crate::error::Result;
use crate::model::SceneDocument;

#[cfg(feature = "gltf")]
pub use gltf::{GltfWriter, to_gltf_string};

/// Consumer of decoded scene documents
pub trait DocumentSink {
    /// Accept one fully decoded document
    fn write_document(&mut self, document: &SceneDocument) -> Result<()>;
}

/// Collects documents in memory
impl DocumentSink for Vec<SceneDocument> {
    fn write_document(&mut self, document: &SceneDocument) -> Result<()> {
        self.push(document.clone());
        Ok(())
    }
}
