//! Integration tests for HGM decoding

mod common;

use common::{
    HgmBuilder, MASK_PNT, chair_model, echo_textures, init_logging, no_textures, node,
    quad_vertices,
};
use tsuhan::chunk::{ChunkEncoder, ChunkSizeMode, ChunkWalker};
use tsuhan::cursor::FieldEncoder;
use tsuhan::{
    AccessorType, AttributeSemantic, DecodeConfig, EntityKind, Error, NodeKind, PrimitiveMode,
    SceneDocument, TagId, decode_model, decode_model_with_config,
};

const CHAIR: &str = "model/common/CHAIR.hgm";

fn decode(bytes: &[u8]) -> tsuhan::Result<SceneDocument> {
    init_logging();
    decode_model(bytes, CHAIR, &echo_textures)
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "{:?} != {:?}", actual, expected);
    }
}

/// A chain of `depth` nested records using an ignored relation code
fn chain_descriptor(depth: usize) -> Vec<u8> {
    let mut fields = FieldEncoder::new();
    for level in 0..depth {
        let children = if level + 1 < depth { 1 } else { 0 };
        fields.string(&format!("N{}", level)).u32(0).u32(children);
    }
    fields.into_bytes()
}

#[test]
fn test_decode_chair_model() {
    let doc = decode(&chair_model()).unwrap();

    // Materials
    assert_eq!(doc.materials.len(), 2);
    let wood = &doc.materials[0];
    assert_eq!(wood.name, "WOOD");
    assert_eq!(wood.base_color_factor, [1.0, 0.5, 0.25, 1.0]);
    assert_eq!(wood.base_color_texture, Some(0));
    assert!(wood.unlit && wood.double_sided);
    assert_eq!(wood.metallic_factor, 0.0);
    let metal = &doc.materials[1];
    assert_eq!(metal.class, 2);
    assert_eq!(metal.base_color_texture, None);
    assert_eq!(metal.secondary_color, Some([0.1, 0.2, 0.3, 0.4]));
    assert_eq!(doc.extensions_used, vec!["KHR_materials_unlit".to_string()]);

    // Geometry accessors: position, normal, texcoord, then indices
    assert_eq!(doc.accessors.len(), 4);
    let position = &doc.accessors[0];
    assert_eq!(position.count, 4);
    assert_eq!(position.accessor_type, AccessorType::Vec3);
    assert_eq!(position.min, vec![-1.0, 0.0, -1.0]);
    assert_eq!(position.max, vec![1.0, 0.5, 1.0]);
    let texcoord = &doc.accessors[2];
    assert_eq!(texcoord.byte_offset, 24);
    assert_eq!(texcoord.accessor_type, AccessorType::Vec2);
    let indices = &doc.accessors[3];
    assert_eq!(indices.count, 4);
    assert_eq!(indices.min, vec![0.0]);
    assert_eq!(indices.max, vec![3.0]);
    assert_eq!(doc.buffer_views[0].byte_stride, Some(32));
    assert_eq!(doc.buffers[0].data.len(), 4 * 32);

    // Mesh
    assert_eq!(doc.meshes.len(), 1);
    let mesh = &doc.meshes[0];
    assert_eq!(mesh.name, "CHAIR_MESH");
    assert_eq!(mesh.primitives.len(), 2);
    let seat = &mesh.primitives[0];
    assert_eq!(seat.attribute(AttributeSemantic::Position), Some(0));
    assert_eq!(seat.attribute(AttributeSemantic::Normal), Some(1));
    assert_eq!(seat.attribute(AttributeSemantic::TexCoord), Some(2));
    assert_eq!(seat.attribute(AttributeSemantic::Color), None);
    assert_eq!(seat.indices, Some(3));
    assert_eq!(seat.material, Some(0));
    assert_eq!(seat.mode, PrimitiveMode::TriangleStrip);
    let legs = &mesh.primitives[1];
    assert!(legs.attributes.is_empty());
    assert_eq!(legs.indices, None);
    assert_eq!(legs.material, Some(1));

    // Texture filled the placeholder created by WOOD
    assert_eq!(doc.textures.len(), 1);
    assert_eq!(doc.textures[0].name.as_deref(), Some("wood_tex"));
    assert_eq!(doc.textures[0].source, Some(0));
    let image = &doc.images[0];
    assert_eq!(image.name, "wood_tex");
    assert_eq!(image.file_name, "WOOD.tga");
    assert_eq!(image.mime_type, "image/tga");
    assert_eq!(doc.view_bytes(image.buffer_view), Some(&b"texture/common/WOOD.tga"[..]));

    // Nodes and hierarchy
    assert_eq!(doc.nodes.len(), 3);
    assert_eq!(doc.nodes[0].name, "ROOT");
    assert_eq!(doc.nodes[0].children, vec![1, 2]);
    let seat_node = &doc.nodes[1];
    assert_eq!(seat_node.mesh, Some(0));
    assert_eq!(seat_node.translation, [0.0, 0.5, 0.0]);
    assert_eq!(seat_node.scale, [2.0, 2.0, 2.0]);
    let h = std::f32::consts::FRAC_1_SQRT_2;
    assert_close(&seat_node.rotation, &[0.0, h, 0.0, h]);
    let bone = &doc.nodes[2];
    assert_eq!(bone.kind, NodeKind::Bone);
    assert_eq!(bone.unknown, 7);
    assert_eq!(bone.translation, [1.0, 2.0, 3.0]);
    assert_eq!(bone.mesh, None);

    // Scene
    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.scenes[0].name, "CHAIR.hgm");
    assert_eq!(doc.scenes[0].nodes, vec![0]);
    assert_eq!(doc.scene, Some(0));
}

#[test]
fn test_mesh_with_unknown_geometry_fails() {
    let mut hgm = HgmBuilder::new();
    hgm.material("WOOD", "__NOTEX__", [1.0; 4])
        .mesh("TABLE", &[("WOOD", "GHOST")]);
    match decode(&hgm.build()) {
        Err(Error::UnresolvedReference { kind, name }) => {
            assert_eq!(kind, EntityKind::Geometry);
            assert_eq!(name, "GHOST");
        }
        other => panic!("expected unresolved reference, got {:?}", other),
    }
}

#[test]
fn test_mesh_cannot_reference_later_geometry() {
    let mut hgm = HgmBuilder::new();
    hgm.material("WOOD", "__NOTEX__", [1.0; 4])
        .mesh("TABLE", &[("WOOD", "TOP")])
        .geometry("TOP", MASK_PNT, &quad_vertices(), &[0, 1, 2]);
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::UnresolvedReference {
            kind: EntityKind::Geometry,
            ..
        })
    ));
}

#[test]
fn test_mesh_with_unknown_material_fails() {
    let mut hgm = HgmBuilder::new();
    hgm.skipped_geometry("G", &[])
        .mesh("TABLE", &[("NOPE", "G")]);
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::UnresolvedReference {
            kind: EntityKind::Material,
            ..
        })
    ));
}

#[test]
fn test_no_texture_sentinel() {
    let mut hgm = HgmBuilder::new();
    hgm.material("PLAIN", "__NOTEX__", [0.2, 0.4, 0.6, 0.8]);
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.materials[0].base_color_texture, None);
    assert!(doc.textures.is_empty());
}

#[test]
fn test_skipped_geometry_has_no_accessors() {
    // The trailing bytes would decode as a huge vertex count if read
    let mut hgm = HgmBuilder::new();
    hgm.skipped_geometry("HIDDEN", &[0xFF; 32])
        .material("M", "__NOTEX__", [1.0; 4])
        .mesh("HIDDEN_MESH", &[("M", "HIDDEN")]);
    let doc = decode(&hgm.build()).unwrap();
    assert!(doc.accessors.is_empty());
    assert!(doc.buffers.is_empty());
    let primitive = &doc.meshes[0].primitives[0];
    assert!(primitive.attributes.is_empty());
    assert_eq!(primitive.indices, None);
}

#[test]
fn test_scene_attach_mesh() {
    let mut hgm = HgmBuilder::new();
    hgm.skipped_geometry("G", &[])
        .material("MAT", "__NOTEX__", [1.0; 4])
        .mesh("M", &[("MAT", "G")])
        .identity("A")
        .scene(&node("A", 2, vec![node("M", 2, vec![])]));
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.nodes[0].mesh, Some(0));
    assert!(doc.nodes[0].children.is_empty());
}

#[test]
fn test_scene_child_transform() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .identity("B")
        .scene(&node("A", 4, vec![node("B", 4, vec![])]));
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.nodes[0].children, vec![1]);
    assert!(doc.nodes[1].children.is_empty());
}

#[test]
fn test_scene_ignores_other_relation_codes() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .scene(&node("A", 4, vec![node("UNDECLARED", 9, vec![])]));
    let doc = decode(&hgm.build()).unwrap();
    assert!(doc.nodes[0].children.is_empty());
}

#[test]
fn test_scene_unknown_node_fails() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .scene(&node("A", 4, vec![node("B", 4, vec![])]));
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::UnresolvedReference {
            kind: EntityKind::Transform,
            ..
        })
    ));
}

#[test]
fn test_repeated_link_is_kept_once() {
    let mut hgm = HgmBuilder::new();
    let tree = node("A", 4, vec![node("B", 4, vec![])]);
    hgm.identity("A").identity("B").scene(&tree).scene(&tree);
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.nodes[0].children, vec![1]);
}

#[test]
fn test_self_parent_is_malformed() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .scene(&node("A", 4, vec![node("A", 4, vec![])]));
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::MalformedHierarchy(_))
    ));
}

#[test]
fn test_second_parent_is_malformed() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .identity("B")
        .identity("C")
        .scene(&node("A", 4, vec![node("C", 4, vec![])]))
        .scene(&node("B", 4, vec![node("C", 4, vec![])]));
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::MalformedHierarchy(_))
    ));
}

#[test]
fn test_cycle_is_malformed() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A")
        .identity("B")
        .scene(&node("A", 4, vec![node("B", 4, vec![])]))
        .scene(&node("B", 4, vec![node("A", 4, vec![])]));
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::MalformedHierarchy(_))
    ));
}

#[test]
fn test_hierarchy_depth_bound() {
    let config = DecodeConfig::new().with_max_hierarchy_depth(3);

    let mut ok = HgmBuilder::new();
    ok.raw(TagId::SceneDescriptor, &chain_descriptor(3));
    assert!(decode_model_with_config(&ok.build(), CHAIR, &no_textures, &config).is_ok());

    let mut deep = HgmBuilder::new();
    deep.raw(TagId::SceneDescriptor, &chain_descriptor(4));
    assert!(matches!(
        decode_model_with_config(&deep.build(), CHAIR, &no_textures, &config),
        Err(Error::MalformedHierarchy(_))
    ));
}

#[test]
fn test_deep_hierarchy_does_not_overflow_stack() {
    let mut hgm = HgmBuilder::new();
    hgm.raw(TagId::SceneDescriptor, &chain_descriptor(9_000));
    assert!(decode(&hgm.build()).is_ok());

    let mut hgm = HgmBuilder::new();
    hgm.raw(TagId::SceneDescriptor, &chain_descriptor(20_000));
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::MalformedHierarchy(_))
    ));
}

#[test]
fn test_placeholders_keep_their_indices() {
    let mut hgm = HgmBuilder::new();
    hgm.material("X", "T2", [1.0; 4])
        .material("Y", "T1", [1.0; 4])
        .texture("T1", "one.tga")
        .texture("T2", "two.tga")
        .texture("T3", "three.tga");
    let doc = decode(&hgm.build()).unwrap();

    assert_eq!(doc.materials[0].base_color_texture, Some(0));
    assert_eq!(doc.materials[1].base_color_texture, Some(1));
    assert_eq!(doc.textures.len(), 3);
    assert_eq!(doc.textures[0].name.as_deref(), Some("T2"));
    assert_eq!(doc.textures[0].source, Some(1));
    assert_eq!(doc.textures[1].name.as_deref(), Some("T1"));
    assert_eq!(doc.textures[1].source, Some(0));
    assert_eq!(doc.images[0].file_name, "ONE.tga");
    assert_eq!(doc.textures[2].source, Some(2));
}

#[test]
fn test_two_materials_share_one_placeholder() {
    let mut hgm = HgmBuilder::new();
    hgm.material("X", "SKIN", [1.0; 4])
        .material("Y", "SKIN", [1.0; 4]);
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.textures.len(), 1);
    assert!(doc.textures[0].is_placeholder());
    assert_eq!(doc.materials[1].base_color_texture, Some(0));
    assert_eq!(doc.placeholder_textures().count(), 1);
}

#[test]
fn test_missing_texture_bytes_fail_the_decode() {
    let mut hgm = HgmBuilder::new();
    hgm.texture("T", "gone.tga");
    match decode_model(&hgm.build(), CHAIR, &no_textures) {
        Err(Error::MissingTexture(path)) => assert_eq!(path, "texture/common/GONE.tga"),
        other => panic!("expected missing texture, got {:?}", other),
    }
}

#[test]
fn test_multiple_index_streams_are_unsupported() {
    for streams in [0, 2] {
        let mut hgm = HgmBuilder::new();
        hgm.geometry_with_streams("G", MASK_PNT, 4, &quad_vertices(), streams, &[0, 1, 2]);
        assert!(matches!(
            decode(&hgm.build()),
            Err(Error::UnsupportedFeature(_))
        ));
    }
}

#[test]
fn test_vertex_count_past_payload_is_truncated() {
    let mut hgm = HgmBuilder::new();
    hgm.geometry_with_streams("G", MASK_PNT, 1000, &quad_vertices(), 1, &[]);
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::TruncatedData {
            field: "vertex data",
            ..
        })
    ));
}

#[test]
fn test_weights_and_joints_streams() {
    // position + weights 0,1 + joints
    let mask = 0b0100_1100_0001;
    let vertices = [
        0.0, 0.0, 0.0, 0.25, 0.75, 0.0, 1.0, 2.0, 3.0, //
        1.0, 1.0, 1.0, 0.5, 0.5, 3.0, 2.0, 1.0, 0.0,
    ];
    let mut hgm = HgmBuilder::new();
    hgm.geometry("SKIN", mask, &vertices, &[0, 1]);
    let doc = decode(&hgm.build()).unwrap();

    assert_eq!(doc.accessors.len(), 4);
    let weights = &doc.accessors[1];
    // Always VEC4 from the lowest weight channel, overlapping the joints
    assert_eq!(weights.accessor_type, AccessorType::Vec4);
    assert_eq!(weights.byte_offset, 12);
    assert_eq!(weights.min, vec![0.25, 0.5, 0.0, 1.0]);
    assert_eq!(weights.max, vec![0.5, 0.75, 3.0, 2.0]);
    let joints = &doc.accessors[2];
    assert_eq!(joints.accessor_type, AccessorType::Vec4);
    assert_eq!(joints.byte_offset, 20);
    assert_eq!(joints.max, vec![3.0, 2.0, 2.0, 3.0]);
}

#[test]
fn test_weights_without_room_for_vec4_are_unsupported() {
    // position + weight 0: the weight stream would run 12 bytes past the vertex
    let mut hgm = HgmBuilder::new();
    hgm.geometry("SKIN", 0b0100_0001, &[0.0, 0.0, 0.0, 1.0], &[0]);
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::UnsupportedFeature(_))
    ));
}

#[test]
fn test_nan_components_do_not_poison_bounds() {
    let mut hgm = HgmBuilder::new();
    hgm.geometry("ODD", 0b1, &[f32::NAN, 1.0, 2.0], &[0])
        .geometry("MIXED", 0b1, &[f32::NAN, 1.0, 2.0, 4.0, -1.0, 2.0], &[0, 1]);
    let doc = decode(&hgm.build()).unwrap();

    let odd = &doc.accessors[0];
    assert!(odd.min.is_empty() && odd.max.is_empty());
    let mixed = &doc.accessors[2];
    assert_eq!(mixed.min, vec![4.0, -1.0, 2.0]);
    assert_eq!(mixed.max, vec![4.0, 1.0, 2.0]);
}

#[test]
fn test_redefined_geometry_replaces_the_first() {
    let mut hgm = HgmBuilder::new();
    hgm.geometry("G", 0b1, &[0.0, 0.0, 0.0], &[0])
        .geometry("G", 0b1, &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], &[0, 1])
        .material("M", "__NOTEX__", [1.0; 4])
        .mesh("MESH", &[("M", "G")]);
    let doc = decode(&hgm.build()).unwrap();

    let primitive = &doc.meshes[0].primitives[0];
    assert_eq!(primitive.attribute(AttributeSemantic::Position), Some(2));
    assert_eq!(primitive.indices, Some(3));
    assert_eq!(doc.accessors[2].count, 2);
}

#[test]
fn test_empty_geometry_creates_no_buffers() {
    let mut hgm = HgmBuilder::new();
    hgm.geometry("EMPTY", 0, &[], &[])
        .material("M", "__NOTEX__", [1.0; 4])
        .mesh("E", &[("M", "EMPTY")]);
    let doc = decode(&hgm.build()).unwrap();
    assert!(doc.buffers.is_empty());
    assert!(doc.accessors.is_empty());
    assert!(doc.meshes[0].primitives[0].attributes.is_empty());
}

#[test]
fn test_truncated_chunk() {
    let mut bytes = chair_model();
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&100u32.to_le_bytes());
    bytes.extend_from_slice(&[0; 10]);
    assert!(matches!(
        decode(&bytes),
        Err(Error::TruncatedChunk {
            tag: 1,
            declared: 100,
            available: 10
        })
    ));
}

#[test]
fn test_truncated_material_payload() {
    let mut fields = FieldEncoder::new();
    fields.string("HALF").u32(0).string("__NOTEX__").f32(1.0);
    let mut hgm = HgmBuilder::new();
    hgm.raw(TagId::Material, fields.as_bytes());
    assert!(matches!(
        decode(&hgm.build()),
        Err(Error::TruncatedData { .. })
    ));
}

#[test]
fn test_string_cap_is_configurable() {
    let mut hgm = HgmBuilder::new();
    hgm.identity("A_RATHER_LONG_NODE_NAME");
    let bytes = hgm.build();

    let strict = DecodeConfig::new().with_max_string_len(8);
    assert!(matches!(
        decode_model_with_config(&bytes, CHAIR, &no_textures, &strict),
        Err(Error::InvalidString(_))
    ));
    assert!(decode(&bytes).is_ok());
}

#[test]
fn test_reserved_and_unknown_chunks_between_entities() {
    let mut hgm = HgmBuilder::new();
    hgm.raw(TagId::Reserved7, &[1; 24])
        .identity("A")
        .raw(TagId::Unrecognized(200), &[0xFF; 5])
        .raw(TagId::Reserved9, &[])
        .identity("B");
    let doc = decode(&hgm.build()).unwrap();
    assert_eq!(doc.nodes.len(), 2);
    assert_eq!(doc.scenes[0].nodes, vec![0]);
}

#[test]
fn test_header_inclusive_chunk_sizes() {
    let payload_only = chair_model();
    let mut encoder = ChunkEncoder::with_mode(ChunkSizeMode::IncludesHeader);
    for chunk in ChunkWalker::new(&payload_only) {
        let chunk = chunk.unwrap();
        encoder.chunk(chunk.tag(), chunk.payload);
    }

    let config = DecodeConfig::new().with_chunk_size_mode(ChunkSizeMode::IncludesHeader);
    let doc = decode_model_with_config(encoder.as_bytes(), CHAIR, &echo_textures, &config).unwrap();
    assert_eq!(doc, decode(&payload_only).unwrap());
}

#[test]
fn test_from_hgm_matches_decode_model() {
    let bytes = chair_model();
    let doc = SceneDocument::from_hgm(&bytes, CHAIR, &echo_textures).unwrap();
    assert_eq!(doc, decode(&bytes).unwrap());
}
