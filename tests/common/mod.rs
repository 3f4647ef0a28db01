//! Shared utilities for integration tests
//!
//! Builds synthetic HGM files chunk by chunk on top of the crate's own
//! field and chunk encoders.

#![allow(dead_code)]

use tsuhan::chunk::ChunkEncoder;
use tsuhan::cursor::FieldEncoder;
use tsuhan::{Error, Result, TagId};

/// Position + normal + texcoord
pub const MASK_PNT: u16 = 0b1000_0000_0011;

/// One record of a scene-descriptor tree
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub code: u32,
    pub children: Vec<SceneNode>,
}

/// Shorthand for a scene-descriptor record
pub fn node(name: &str, code: u32, children: Vec<SceneNode>) -> SceneNode {
    SceneNode {
        name: name.to_string(),
        code,
        children,
    }
}

fn encode_scene(fields: &mut FieldEncoder, node: &SceneNode) {
    fields
        .string(&node.name)
        .u32(node.code)
        .u32(node.children.len() as u32);
    for child in &node.children {
        encode_scene(fields, child);
    }
}

/// Builder for HGM chunk streams
#[derive(Debug, Default)]
pub struct HgmBuilder {
    chunks: ChunkEncoder,
}

impl HgmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk with an arbitrary payload
    pub fn raw(&mut self, tag: TagId, payload: &[u8]) -> &mut Self {
        self.chunks.chunk(tag, payload);
        self
    }

    fn geometry_header(fields: &mut FieldEncoder, name: &str, mask: u16, skip: u32) {
        fields
            .string(name)
            .f32(0.0)
            .f32(0.0)
            .f32(0.0)
            .f32(0.0)
            .u32(0)
            .u32(mask as u32)
            .u32(skip);
    }

    /// Geometry with one index stream; `vertices` holds the interleaved floats
    pub fn geometry(&mut self, name: &str, mask: u16, vertices: &[f32], indices: &[u16]) -> &mut Self {
        let stride_floats = tsuhan::layout::stride(mask) / 4;
        let vertex_count = if stride_floats == 0 {
            0
        } else {
            vertices.len() / stride_floats
        };
        self.geometry_with_streams(name, mask, vertex_count as u32, vertices, 1, indices)
    }

    /// Geometry with an explicit vertex count and index stream count
    pub fn geometry_with_streams(
        &mut self,
        name: &str,
        mask: u16,
        vertex_count: u32,
        vertices: &[f32],
        stream_count: u32,
        indices: &[u16],
    ) -> &mut Self {
        let mut fields = FieldEncoder::new();
        Self::geometry_header(&mut fields, name, mask, 0);
        fields.u32(vertex_count);
        for v in vertices {
            fields.f32(*v);
        }
        fields.u32(stream_count).u32(0).u32(indices.len() as u32);
        for i in indices {
            fields.bytes(&i.to_le_bytes());
        }
        self.raw(TagId::Geometry, fields.as_bytes())
    }

    /// Geometry with its skip flag set, followed by bytes that must be ignored
    pub fn skipped_geometry(&mut self, name: &str, trailing: &[u8]) -> &mut Self {
        let mut fields = FieldEncoder::new();
        Self::geometry_header(&mut fields, name, 0xFFFF, 1);
        fields.bytes(trailing);
        self.raw(TagId::Geometry, fields.as_bytes())
    }

    /// Class-0 material
    pub fn material(&mut self, name: &str, texture: &str, color: [f32; 4]) -> &mut Self {
        self.material_with_class(name, 0, texture, color, [0.0; 4], &[])
    }

    /// Material of any class; `secondary` and `names` are written only when
    /// the class calls for them
    pub fn material_with_class(
        &mut self,
        name: &str,
        class: u32,
        texture: &str,
        color: [f32; 4],
        secondary: [f32; 4],
        names: &[&str],
    ) -> &mut Self {
        let mut fields = FieldEncoder::new();
        fields.string(name).u32(class).string(texture);
        for c in color {
            fields.f32(c);
        }
        if class > 0 {
            for c in secondary {
                fields.f32(c);
            }
        }
        if [2, 3, 4, 6, 7].contains(&class) {
            fields.u32(names.len() as u32);
            for n in names {
                fields.string(n);
            }
        }
        self.raw(TagId::Material, fields.as_bytes())
    }

    /// Mesh from `(material, geometry)` pairs
    pub fn mesh(&mut self, name: &str, submeshes: &[(&str, &str)]) -> &mut Self {
        let mut fields = FieldEncoder::new();
        fields.string(name).u32(submeshes.len() as u32);
        for (material, geometry) in submeshes {
            fields.string(material).string(geometry);
        }
        self.raw(TagId::Mesh, fields.as_bytes())
    }

    pub fn texture(&mut self, name: &str, file_name: &str) -> &mut Self {
        let mut fields = FieldEncoder::new();
        fields.string(name).string(file_name);
        for _ in 0..6 {
            fields.u32(0);
        }
        self.raw(TagId::Texture, fields.as_bytes())
    }

    fn node_chunk(
        &mut self,
        tag: TagId,
        name: &str,
        translation: [f32; 3],
        euler: [f32; 3],
        scale: [f32; 3],
    ) -> &mut Self {
        let mut fields = FieldEncoder::new();
        fields.string(name).u32(7);
        for v in translation.iter().chain(&euler).chain(&scale) {
            fields.f32(*v);
        }
        self.raw(tag, fields.as_bytes())
    }

    pub fn transform(&mut self, name: &str, translation: [f32; 3], euler: [f32; 3], scale: [f32; 3]) -> &mut Self {
        self.node_chunk(TagId::Transform, name, translation, euler, scale)
    }

    /// Transform at the origin with no rotation and unit scale
    pub fn identity(&mut self, name: &str) -> &mut Self {
        self.transform(name, [0.0; 3], [0.0; 3], [1.0; 3])
    }

    pub fn bone(&mut self, name: &str, translation: [f32; 3], euler: [f32; 3], scale: [f32; 3]) -> &mut Self {
        self.node_chunk(TagId::Bone, name, translation, euler, scale)
    }

    pub fn scene(&mut self, root: &SceneNode) -> &mut Self {
        let mut fields = FieldEncoder::new();
        encode_scene(&mut fields, root);
        self.raw(TagId::SceneDescriptor, fields.as_bytes())
    }

    pub fn build(&self) -> Vec<u8> {
        self.chunks.as_bytes().to_vec()
    }
}

/// Route decoder logging to the test output; `RUST_LOG=debug` shows every chunk
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Texture provider answering every path with the path's own bytes
pub fn echo_textures(path: &str) -> Result<Vec<u8>> {
    Ok(path.as_bytes().to_vec())
}

/// Texture provider that has nothing
pub fn no_textures(path: &str) -> Result<Vec<u8>> {
    Err(Error::MissingTexture(path.to_string()))
}

/// Four vertices of position + normal + texcoord
pub fn quad_vertices() -> Vec<f32> {
    vec![
        -1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
        1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, //
        -1.0, 0.5, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, //
        1.0, 0.5, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0,
    ]
}

/// A small but complete model
///
/// - material `WOOD` names texture `wood_tex` before its texture chunk
/// - material `METAL` is class 2 with no texture
/// - geometry `SEAT` is a textured quad, geometry `LEGS` is skipped
/// - mesh `CHAIR_MESH` uses both
/// - nodes `ROOT`, `SEAT_NODE` and bone `BONE01`, linked by a scene descriptor
pub fn chair_model() -> Vec<u8> {
    let mut hgm = HgmBuilder::new();
    hgm.material("WOOD", "wood_tex", [1.0, 0.5, 0.25, 1.0])
        .material_with_class(
            "METAL",
            2,
            "__NOTEX__",
            [0.5, 0.5, 0.5, 1.0],
            [0.1, 0.2, 0.3, 0.4],
            &["SPEC", "ENVIRONMENT"],
        )
        .geometry("SEAT", MASK_PNT, &quad_vertices(), &[0, 1, 2, 3])
        .skipped_geometry("LEGS", &[0xEE; 12])
        .mesh("CHAIR_MESH", &[("WOOD", "SEAT"), ("METAL", "LEGS")])
        .raw(TagId::Reserved8, &[0; 8])
        .texture("wood_tex", "wood.bmp")
        .identity("ROOT")
        .transform("SEAT_NODE", [0.0, 0.5, 0.0], [0.0, 90.0, 0.0], [2.0, 2.0, 2.0])
        .bone("BONE01", [1.0, 2.0, 3.0], [0.0; 3], [1.0; 3])
        .scene(&node(
            "ROOT",
            4,
            vec![
                node("SEAT_NODE", 4, vec![node("CHAIR_MESH", 2, vec![])]),
                node("BONE01", 11, vec![]),
            ],
        ));
    hgm.build()
}
