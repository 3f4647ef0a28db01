//! HGM model decoding
//!
//! Decoding is a single pass over the chunk stream of one decrypted file.
//! Each chunk is handed to the builder for its tag; builders register what
//! they decode by name so later chunks can refer to it. References must
//! point backwards: a mesh naming a geometry that appears later in the file
//! fails with [`Error::UnresolvedReference`]. Textures are the exception,
//! since a material may name a texture before its chunk, in which case a
//! placeholder entry is created and filled in later.
//!
//! [`Error::UnresolvedReference`]: crate::Error::UnresolvedReference

mod geometry;
mod lookup;
mod material;
mod mesh;
mod scene;
mod texture;
mod transform;

use crate::chunk::{Chunk, ChunkWalker, TagId};
use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::model::{DecodeConfig, NodeKind, Scene, SceneDocument};
use crate::texture_provider::TextureProvider;
use log::{debug, trace, warn};
use lookup::LookupTables;
use std::collections::HashMap;

pub use material::NO_TEXTURE;
pub use texture::texture_path_for;

/// Decode one HGM model file with the default configuration
///
/// # Arguments
///
/// * `bytes` - Decrypted file contents
/// * `logical_name` - Logical path of the file, e.g. `model/common/CHAIR.hgm`;
///   used to derive texture paths and to name the scene
/// * `provider` - Source of texture bytes
pub fn decode_model(
    bytes: &[u8],
    logical_name: &str,
    provider: &dyn TextureProvider,
) -> Result<SceneDocument> {
    decode_model_with_config(bytes, logical_name, provider, &DecodeConfig::default())
}

/// Decode one HGM model file
///
/// Any error aborts the decode; no partial document is returned.
pub fn decode_model_with_config(
    bytes: &[u8],
    logical_name: &str,
    provider: &dyn TextureProvider,
    config: &DecodeConfig,
) -> Result<SceneDocument> {
    debug!("Decoding {} ({} bytes)", logical_name, bytes.len());
    let mut session = DecodeSession::new(logical_name, provider, config);
    for chunk in ChunkWalker::with_mode(bytes, config.chunk_size_mode()) {
        session.decode_chunk(&chunk?)?;
    }
    Ok(session.finish())
}

/// State shared by the builders while one file is decoded
pub(crate) struct DecodeSession<'a> {
    logical_name: &'a str,
    provider: &'a dyn TextureProvider,
    config: &'a DecodeConfig,
    document: SceneDocument,
    tables: LookupTables,
    /// Parent of every node linked by a scene descriptor
    parents: HashMap<usize, usize>,
}

impl<'a> DecodeSession<'a> {
    pub(crate) fn new(
        logical_name: &'a str,
        provider: &'a dyn TextureProvider,
        config: &'a DecodeConfig,
    ) -> Self {
        let mut document = SceneDocument::new();
        document.asset.generator = config.generator().map(str::to_string);
        Self {
            logical_name,
            provider,
            config,
            document,
            tables: LookupTables::default(),
            parents: HashMap::new(),
        }
    }

    /// The document built so far
    #[cfg(test)]
    pub(crate) fn document(&self) -> &SceneDocument {
        &self.document
    }

    /// Cursor over a chunk payload honoring the configured string cap
    fn cursor<'p>(&self, payload: &'p [u8]) -> ByteCursor<'p> {
        ByteCursor::new(payload).with_max_string_len(self.config.max_string_len())
    }

    pub(crate) fn decode_chunk(&mut self, chunk: &Chunk<'_>) -> Result<()> {
        let tag = chunk.tag();
        debug!("{}({})", tag, chunk.payload.len());
        let consumed = match tag {
            TagId::Geometry => geometry::decode_geometry(self, chunk.payload)?,
            TagId::Material => material::decode_material(self, chunk.payload)?,
            TagId::Mesh => mesh::decode_mesh(self, chunk.payload)?,
            TagId::Texture => texture::decode_texture(self, chunk.payload)?,
            TagId::Transform => transform::decode_node(self, chunk.payload, NodeKind::Transform)?,
            TagId::Bone => transform::decode_node(self, chunk.payload, NodeKind::Bone)?,
            TagId::SceneDescriptor => scene::decode_scene_descriptor(self, chunk.payload)?,
            TagId::Reserved7 | TagId::Reserved8 | TagId::Reserved9 | TagId::Unrecognized(_) => {
                trace!("skipping {} payload bytes", chunk.payload.len());
                chunk.payload.len()
            }
        };
        if consumed < chunk.payload.len() {
            trace!(
                "{} at offset {}: {} trailing bytes left unread",
                tag,
                chunk.offset,
                chunk.payload.len() - consumed
            );
        }
        Ok(())
    }

    /// Close the session: add the root scene and hand out the document
    pub(crate) fn finish(mut self) -> SceneDocument {
        for texture in self.document.placeholder_textures() {
            warn!(
                "{}: texture '{}' is referenced but never defined",
                self.logical_name,
                texture.name.as_deref().unwrap_or("")
            );
        }
        let name = self
            .logical_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.logical_name)
            .to_string();
        let nodes = if self.document.nodes.is_empty() {
            Vec::new()
        } else {
            vec![0]
        };
        self.document.scenes.push(Scene { name, nodes });
        self.document.scene = Some(0);
        self.document
    }
}
