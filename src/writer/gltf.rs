//! glTF 2.0 JSON serialization

use super::DocumentSink;
use crate::error::Result;
use crate::model::{
    Accessor, Buffer, BufferView, Image, KHR_MATERIALS_UNLIT, Material, Mesh, Node, NodeKind,
    Scene, SceneDocument, Texture,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Writes documents as glTF 2.0 JSON
///
/// # Example
///
/// ```
/// use tsuhan::{DocumentSink, GltfWriter, SceneDocument};
///
/// let mut out = Vec::new();
/// GltfWriter::new(&mut out).write_document(&SceneDocument::new())?;
/// assert!(String::from_utf8(out).unwrap().contains("\"version\": \"2.0\""));
/// # Ok::<(), tsuhan::Error>(())
/// ```
#[derive(Debug)]
pub struct GltfWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> GltfWriter<W> {
    /// Pretty-printing writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Switch to compact single-line output
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DocumentSink for GltfWriter<W> {
    fn write_document(&mut self, document: &SceneDocument) -> Result<()> {
        let root = GltfRoot::from_document(document);
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &root)?;
        } else {
            serde_json::to_writer(&mut self.writer, &root)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Serialize a document to a compact glTF JSON string
pub fn to_gltf_string(document: &SceneDocument) -> Result<String> {
    Ok(serde_json::to_string(&GltfRoot::from_document(document))?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfRoot<'a> {
    asset: GltfAsset<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extensions_used: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scenes: Vec<GltfScene<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<GltfNode<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    meshes: Vec<GltfMesh<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    materials: Vec<GltfMaterial<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    textures: Vec<GltfTexture<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<GltfImage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    accessors: Vec<GltfAccessor<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    buffer_views: Vec<GltfBufferView<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    buffers: Vec<GltfBuffer<'a>>,
}

impl<'a> GltfRoot<'a> {
    fn from_document(doc: &'a SceneDocument) -> Self {
        Self {
            asset: GltfAsset {
                version: &doc.asset.version,
                generator: doc.asset.generator.as_deref(),
            },
            extensions_used: doc.extensions_used.iter().map(String::as_str).collect(),
            scene: doc.scene,
            scenes: doc.scenes.iter().map(GltfScene::from).collect(),
            nodes: doc.nodes.iter().map(GltfNode::from).collect(),
            meshes: doc.meshes.iter().map(GltfMesh::from).collect(),
            materials: doc.materials.iter().map(GltfMaterial::from).collect(),
            textures: doc.textures.iter().map(GltfTexture::from).collect(),
            images: doc.images.iter().map(GltfImage::from).collect(),
            accessors: doc.accessors.iter().map(GltfAccessor::from).collect(),
            buffer_views: doc.buffer_views.iter().map(GltfBufferView::from).collect(),
            buffers: doc.buffers.iter().map(GltfBuffer::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct GltfAsset<'a> {
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generator: Option<&'a str>,
}

#[derive(Serialize)]
struct GltfScene<'a> {
    name: &'a str,
    nodes: &'a [usize],
}

impl<'a> From<&'a Scene> for GltfScene<'a> {
    fn from(scene: &'a Scene) -> Self {
        Self {
            name: &scene.name,
            nodes: &scene.nodes,
        }
    }
}

#[derive(Serialize)]
struct GltfNode<'a> {
    name: &'a str,
    translation: [f32; 3],
    rotation: [f32; 4],
    scale: [f32; 3],
    #[serde(skip_serializing_if = "<[usize]>::is_empty")]
    children: &'a [usize],
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<usize>,
    extras: NodeExtras,
}

#[derive(Serialize)]
struct NodeExtras {
    kind: &'static str,
    unknown: u32,
}

impl<'a> From<&'a Node> for GltfNode<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            name: &node.name,
            translation: node.translation,
            rotation: node.rotation,
            scale: node.scale,
            children: &node.children,
            mesh: node.mesh,
            extras: NodeExtras {
                kind: match node.kind {
                    NodeKind::Transform => "transform",
                    NodeKind::Bone => "bone",
                },
                unknown: node.unknown,
            },
        }
    }
}

#[derive(Serialize)]
struct GltfMesh<'a> {
    name: &'a str,
    primitives: Vec<GltfPrimitive>,
}

#[derive(Serialize)]
struct GltfPrimitive {
    attributes: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    material: Option<usize>,
    mode: u32,
}

impl<'a> From<&'a Mesh> for GltfMesh<'a> {
    fn from(mesh: &'a Mesh) -> Self {
        Self {
            name: &mesh.name,
            primitives: mesh
                .primitives
                .iter()
                .map(|p| GltfPrimitive {
                    attributes: p
                        .attributes
                        .iter()
                        .map(|(semantic, accessor)| (semantic.gltf_name(), *accessor))
                        .collect(),
                    indices: p.indices,
                    material: p.material,
                    mode: p.mode.gl_code(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfMaterial<'a> {
    name: &'a str,
    pbr_metallic_roughness: PbrMetallicRoughness,
    double_sided: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    extensions: BTreeMap<&'static str, EmptyObject>,
    extras: MaterialExtras,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PbrMetallicRoughness {
    base_color_factor: [f32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    base_color_texture: Option<TextureInfo>,
    metallic_factor: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextureInfo {
    index: usize,
    tex_coord: usize,
}

#[derive(Serialize)]
struct EmptyObject {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialExtras {
    class: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_color: Option<[f32; 4]>,
}

impl<'a> From<&'a Material> for GltfMaterial<'a> {
    fn from(material: &'a Material) -> Self {
        let mut extensions = BTreeMap::new();
        if material.unlit {
            extensions.insert(KHR_MATERIALS_UNLIT, EmptyObject {});
        }
        Self {
            name: &material.name,
            pbr_metallic_roughness: PbrMetallicRoughness {
                base_color_factor: material.base_color_factor,
                base_color_texture: material
                    .base_color_texture
                    .map(|index| TextureInfo { index, tex_coord: 0 }),
                metallic_factor: material.metallic_factor,
            },
            double_sided: material.double_sided,
            extensions,
            extras: MaterialExtras {
                class: material.class,
                secondary_color: material.secondary_color,
            },
        }
    }
}

#[derive(Serialize)]
struct GltfTexture<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<usize>,
}

impl<'a> From<&'a Texture> for GltfTexture<'a> {
    fn from(texture: &'a Texture) -> Self {
        Self {
            name: texture.name.as_deref(),
            source: texture.source,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfImage<'a> {
    name: &'a str,
    mime_type: &'a str,
    buffer_view: usize,
}

impl<'a> From<&'a Image> for GltfImage<'a> {
    fn from(image: &'a Image) -> Self {
        Self {
            name: &image.name,
            mime_type: &image.mime_type,
            buffer_view: image.buffer_view,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfAccessor<'a> {
    buffer_view: usize,
    byte_offset: usize,
    component_type: u32,
    count: usize,
    #[serde(rename = "type")]
    accessor_type: &'static str,
    #[serde(skip_serializing_if = "<[f64]>::is_empty")]
    min: &'a [f64],
    #[serde(skip_serializing_if = "<[f64]>::is_empty")]
    max: &'a [f64],
}

impl<'a> From<&'a Accessor> for GltfAccessor<'a> {
    fn from(accessor: &'a Accessor) -> Self {
        Self {
            buffer_view: accessor.buffer_view,
            byte_offset: accessor.byte_offset,
            component_type: accessor.component_type.gl_code(),
            count: accessor.count,
            accessor_type: accessor.accessor_type.name(),
            min: &accessor.min,
            max: &accessor.max,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfBufferView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    buffer: usize,
    byte_offset: usize,
    byte_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    byte_stride: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<u32>,
}

impl<'a> From<&'a BufferView> for GltfBufferView<'a> {
    fn from(view: &'a BufferView) -> Self {
        Self {
            name: view.name.as_deref(),
            buffer: view.buffer,
            byte_offset: view.byte_offset,
            byte_length: view.byte_length,
            byte_stride: view.byte_stride,
            target: view.target.map(|t| t.gl_code()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GltfBuffer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    byte_length: usize,
    uri: String,
}

impl<'a> From<&'a Buffer> for GltfBuffer<'a> {
    fn from(buffer: &'a Buffer) -> Self {
        Self {
            name: buffer.name.as_deref(),
            byte_length: buffer.data.len(),
            uri: format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(&buffer.data)),
        }
    }
}
