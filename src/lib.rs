//! # tsuhan
//!
//! A pure Rust decoder for the resource packs of the TsuHan game and the HGM
//! model files inside them.
//!
//! A pack is a single XOR-encrypted file whose sub-files are located through
//! a static table. Model sub-files use HGM, a flat stream of tagged chunks
//! describing geometry, materials, meshes, textures, transforms, bones and a
//! scene hierarchy. This crate decrypts packs, decodes HGM into a linked
//! [`SceneDocument`] and writes that document as glTF 2.0.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Bounds-checked decoding: corrupt input yields an [`Error`], never a panic
//! - Pluggable texture sources through [`TextureProvider`]
//! - glTF 2.0 output with embedded buffers (`gltf` feature, on by default)
//!
//! ## Example
//!
//! ```no_run
//! use tsuhan::pack::Pack;
//! use tsuhan::{PackTextureProvider, SceneDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let textures = Pack::open("texture00.bin", std::fs::read("texture00.bin")?)?;
//! let models = Pack::open("model00.bin", std::fs::read("model00.bin")?)?;
//! let provider = PackTextureProvider::from_packs([&textures]);
//!
//! let chair = models.entry("CHAIR")?;
//! let document = SceneDocument::from_hgm(chair.data, &chair.logical_path(), &provider)?;
//! println!("{} nodes, {} meshes", document.nodes.len(), document.meshes.len());
//! document.write_gltf_file("CHAIR.gltf")?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chunk;
pub mod cursor;
pub mod error;
pub mod layout;
pub mod model;
pub mod pack;
mod parser;
pub mod texture_provider;
mod writer;

pub use chunk::{ChunkSizeMode, ChunkWalker, TagId};
pub use error::{EntityKind, Error, Result};
pub use model::{
    Accessor, AccessorType, AttributeSemantic, Buffer, BufferView, DecodeConfig, Image, Material,
    Mesh, Node, NodeKind, Primitive, PrimitiveMode, Scene, SceneDocument, Texture,
};
pub use parser::{NO_TEXTURE, decode_model, decode_model_with_config, texture_path_for};
pub use texture_provider::{DirectoryTextureProvider, PackTextureProvider, TextureProvider};
pub use writer::DocumentSink;
#[cfg(feature = "gltf")]
pub use writer::{GltfWriter, to_gltf_string};

impl SceneDocument {
    /// Decode an HGM model file with the default configuration
    ///
    /// # Arguments
    ///
    /// * `bytes` - Decrypted file contents
    /// * `logical_name` - Logical path such as `model/common/CHAIR.hgm`
    /// * `provider` - Source of texture bytes
    pub fn from_hgm(
        bytes: &[u8],
        logical_name: &str,
        provider: &dyn TextureProvider,
    ) -> Result<Self> {
        decode_model(bytes, logical_name, provider)
    }

    /// Decode an HGM model file with a custom configuration
    pub fn from_hgm_with_config(
        bytes: &[u8],
        logical_name: &str,
        provider: &dyn TextureProvider,
        config: &DecodeConfig,
    ) -> Result<Self> {
        decode_model_with_config(bytes, logical_name, provider, config)
    }

    /// Hand this document to a sink
    pub fn write_to<S: DocumentSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.write_document(self)
    }

    /// Serialize this document as pretty-printed glTF JSON to a writer
    #[cfg(feature = "gltf")]
    pub fn to_gltf_writer<W: std::io::Write>(&self, writer: W) -> Result<()> {
        GltfWriter::new(writer).write_document(self)
    }

    /// Serialize this document as glTF JSON to a file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tsuhan::SceneDocument;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// SceneDocument::new().write_gltf_file("empty.gltf")?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "gltf")]
    pub fn write_gltf_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_gltf_writer(std::io::BufWriter::new(file))
    }
}
