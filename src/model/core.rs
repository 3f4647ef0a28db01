//! Core scene document types
//!
//! The document follows the glTF 2.0 object model: raw bytes live in
//! buffers, buffer views slice them, and accessors type those slices.
//! Meshes, materials and nodes refer to each other by index.

use super::material::{Image, Material, Texture};

/// Document metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Format version, always `"2.0"`
    pub version: String,
    /// Tool that produced the document
    pub generator: Option<String>,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            version: "2.0".to_string(),
            generator: None,
        }
    }
}

/// A block of binary data owned by the document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    /// Display name
    pub name: Option<String>,
    /// Buffer contents
    pub data: Vec<u8>,
}

/// Intended GPU binding of a buffer view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attributes
    ArrayBuffer,
    /// Vertex indices
    ElementArrayBuffer,
}

impl BufferTarget {
    /// OpenGL enum value
    pub fn gl_code(&self) -> u32 {
        match self {
            BufferTarget::ArrayBuffer => 34962,
            BufferTarget::ElementArrayBuffer => 34963,
        }
    }
}

/// A contiguous slice of a buffer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BufferView {
    /// Display name
    pub name: Option<String>,
    /// Index of the underlying buffer
    pub buffer: usize,
    /// Start of the slice within the buffer
    pub byte_offset: usize,
    /// Length of the slice
    pub byte_length: usize,
    /// Distance between interleaved elements, if interleaved
    pub byte_stride: Option<usize>,
    /// GPU binding hint
    pub target: Option<BufferTarget>,
}

/// Scalar type of accessor components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// 16-bit unsigned integer (indices)
    U16,
    /// 32-bit float (vertex attributes)
    F32,
}

impl ComponentType {
    /// OpenGL enum value
    pub fn gl_code(&self) -> u32 {
        match self {
            ComponentType::U16 => 5123,
            ComponentType::F32 => 5126,
        }
    }

    /// Size of one component in bytes
    pub fn size(&self) -> usize {
        match self {
            ComponentType::U16 => 2,
            ComponentType::F32 => 4,
        }
    }
}

/// Element shape of an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorType {
    /// One component
    Scalar,
    /// Two components
    Vec2,
    /// Three components
    Vec3,
    /// Four components
    Vec4,
}

impl AccessorType {
    /// Element type for `components` components (1 to 4, larger values clamp)
    pub fn with_components(components: usize) -> Self {
        match components {
            0 | 1 => AccessorType::Scalar,
            2 => AccessorType::Vec2,
            3 => AccessorType::Vec3,
            _ => AccessorType::Vec4,
        }
    }

    /// Number of components per element
    pub fn components(&self) -> usize {
        match self {
            AccessorType::Scalar => 1,
            AccessorType::Vec2 => 2,
            AccessorType::Vec3 => 3,
            AccessorType::Vec4 => 4,
        }
    }

    /// glTF type name
    pub fn name(&self) -> &'static str {
        match self {
            AccessorType::Scalar => "SCALAR",
            AccessorType::Vec2 => "VEC2",
            AccessorType::Vec3 => "VEC3",
            AccessorType::Vec4 => "VEC4",
        }
    }
}

/// Typed view over a buffer view
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Index of the buffer view
    pub buffer_view: usize,
    /// Offset of the first element within the view
    pub byte_offset: usize,
    /// Component scalar type
    pub component_type: ComponentType,
    /// Number of elements
    pub count: usize,
    /// Element shape
    pub accessor_type: AccessorType,
    /// Per-component minimum
    pub min: Vec<f64>,
    /// Per-component maximum
    pub max: Vec<f64>,
}

/// Named vertex attribute streams a primitive can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeSemantic {
    /// `POSITION`
    Position,
    /// `NORMAL`
    Normal,
    /// `TANGENT`
    Tangent,
    /// `COLOR_0`
    Color,
    /// `WEIGHTS_0`
    Weights,
    /// `JOINTS_0`
    Joints,
    /// `TEXCOORD_0`
    TexCoord,
}

impl AttributeSemantic {
    /// glTF attribute name
    pub fn gltf_name(&self) -> &'static str {
        match self {
            AttributeSemantic::Position => "POSITION",
            AttributeSemantic::Normal => "NORMAL",
            AttributeSemantic::Tangent => "TANGENT",
            AttributeSemantic::Color => "COLOR_0",
            AttributeSemantic::Weights => "WEIGHTS_0",
            AttributeSemantic::Joints => "JOINTS_0",
            AttributeSemantic::TexCoord => "TEXCOORD_0",
        }
    }
}

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveMode {
    /// Independent triangles
    Triangles,
    /// Triangle strip
    #[default]
    TriangleStrip,
}

impl PrimitiveMode {
    /// glTF mode value
    pub fn gl_code(&self) -> u32 {
        match self {
            PrimitiveMode::Triangles => 4,
            PrimitiveMode::TriangleStrip => 5,
        }
    }
}

/// One drawable part of a mesh
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Primitive {
    /// Attribute accessors in stream order
    pub attributes: Vec<(AttributeSemantic, usize)>,
    /// Index accessor
    pub indices: Option<usize>,
    /// Material index
    pub material: Option<usize>,
    /// Topology
    pub mode: PrimitiveMode,
}

impl Primitive {
    /// Accessor bound to `semantic`, if any
    pub fn attribute(&self, semantic: AttributeSemantic) -> Option<usize> {
        self.attributes
            .iter()
            .find(|(s, _)| *s == semantic)
            .map(|(_, accessor)| *accessor)
    }
}

/// A named list of primitives
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Mesh name
    pub name: String,
    /// Primitives, one per submesh
    pub primitives: Vec<Primitive>,
}

/// Chunk kind a node was declared by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Plain transform
    #[default]
    Transform,
    /// Skeleton bone
    Bone,
}

/// A scene-graph node with a TRS transform
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node name
    pub name: String,
    /// Declaring chunk kind
    pub kind: NodeKind,
    /// Translation
    pub translation: [f32; 3],
    /// Rotation quaternion as `[x, y, z, w]`
    pub rotation: [f32; 4],
    /// Scale
    pub scale: [f32; 3],
    /// Child node indices
    pub children: Vec<usize>,
    /// Attached mesh
    pub mesh: Option<usize>,
    /// Opaque integer carried by the node record
    pub unknown: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Transform,
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            children: Vec::new(),
            mesh: None,
            unknown: 0,
        }
    }
}

/// A set of root nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Scene name
    pub name: String,
    /// Root node indices
    pub nodes: Vec<usize>,
}

/// A fully linked scene decoded from one model file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneDocument {
    /// Metadata
    pub asset: Asset,
    /// Binary buffers
    pub buffers: Vec<Buffer>,
    /// Buffer slices
    pub buffer_views: Vec<BufferView>,
    /// Typed buffer views
    pub accessors: Vec<Accessor>,
    /// Materials
    pub materials: Vec<Material>,
    /// Textures (possibly placeholders)
    pub textures: Vec<Texture>,
    /// Embedded images
    pub images: Vec<Image>,
    /// Meshes
    pub meshes: Vec<Mesh>,
    /// Scene nodes
    pub nodes: Vec<Node>,
    /// Scenes
    pub scenes: Vec<Scene>,
    /// Default scene
    pub scene: Option<usize>,
    /// Extensions referenced anywhere in the document
    pub extensions_used: Vec<String>,
}

impl SceneDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a buffer and return its index
    pub fn add_buffer(&mut self, name: impl Into<String>, data: Vec<u8>) -> usize {
        self.buffers.push(Buffer {
            name: Some(name.into()),
            data,
        });
        self.buffers.len() - 1
    }

    /// Append a buffer view and return its index
    pub fn add_buffer_view(&mut self, view: BufferView) -> usize {
        self.buffer_views.push(view);
        self.buffer_views.len() - 1
    }

    /// Append an accessor and return its index
    pub fn add_accessor(&mut self, accessor: Accessor) -> usize {
        self.accessors.push(accessor);
        self.accessors.len() - 1
    }

    /// Append a material and return its index
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Append a texture and return its index
    pub fn add_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Append an image and return its index
    pub fn add_image(&mut self, image: Image) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Append a mesh and return its index
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Append a node and return its index
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Record an extension name once
    pub fn use_extension(&mut self, name: &str) {
        if !self.extensions_used.iter().any(|e| e == name) {
            self.extensions_used.push(name.to_string());
        }
    }

    /// Find a node by name
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find a mesh by name
    pub fn mesh_by_name(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    /// Find a material by name
    pub fn material_by_name(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Textures still waiting for their texture chunk
    pub fn placeholder_textures(&self) -> impl Iterator<Item = &Texture> {
        self.textures.iter().filter(|t| t.is_placeholder())
    }

    /// Bytes addressed by a buffer view, if it lies inside its buffer
    pub fn view_bytes(&self, view: usize) -> Option<&[u8]> {
        let view = self.buffer_views.get(view)?;
        let buffer = self.buffers.get(view.buffer)?;
        buffer
            .data
            .get(view.byte_offset..view.byte_offset.checked_add(view.byte_length)?)
    }
}
