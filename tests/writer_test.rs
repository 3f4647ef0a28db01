//! glTF output of decoded models

mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::{chair_model, echo_textures, init_logging};
use serde_json::Value;
use tempfile::tempdir;
use tsuhan::{DecodeConfig, DocumentSink, GltfWriter, SceneDocument, to_gltf_string};

const CHAIR: &str = "model/common/CHAIR.hgm";

fn decoded_chair() -> SceneDocument {
    init_logging();
    SceneDocument::from_hgm(&chair_model(), CHAIR, &echo_textures).unwrap()
}

fn decode_uri(uri: &str) -> Vec<u8> {
    let data = uri
        .strip_prefix("data:application/octet-stream;base64,")
        .expect("embedded buffer");
    STANDARD.decode(data).unwrap()
}

#[test]
fn test_write_gltf_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("CHAIR.gltf");
    decoded_chair().write_gltf_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["asset"]["version"], "2.0");
    assert!(
        value["asset"]["generator"]
            .as_str()
            .unwrap()
            .starts_with("tsuhan")
    );
    assert_eq!(value["scene"], 0);
    assert_eq!(value["scenes"][0]["name"], "CHAIR.hgm");
    assert_eq!(value["scenes"][0]["nodes"], serde_json::json!([0]));
    assert_eq!(value["extensionsUsed"], serde_json::json!(["KHR_materials_unlit"]));
}

#[test]
fn test_chair_document_shape() {
    let value: Value = serde_json::from_str(&to_gltf_string(&decoded_chair()).unwrap()).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["children"], serde_json::json!([1, 2]));
    assert_eq!(nodes[1]["mesh"], 0);
    assert_eq!(nodes[2]["extras"]["kind"], "bone");
    assert!(nodes[2].get("children").is_none());

    let primitives = value["meshes"][0]["primitives"].as_array().unwrap();
    assert_eq!(primitives.len(), 2);
    assert_eq!(primitives[0]["attributes"]["NORMAL"], 1);
    assert_eq!(primitives[0]["mode"], 5);
    assert!(primitives[1]["attributes"].as_object().unwrap().is_empty());
    assert!(primitives[1].get("indices").is_none());

    let metal = &value["materials"][1];
    assert_eq!(metal["extras"]["class"], 2);
    assert!(metal["extras"]["secondaryColor"].is_array());
    assert!(metal["pbrMetallicRoughness"].get("baseColorTexture").is_none());

    let image = &value["images"][0];
    assert_eq!(image["mimeType"], "image/tga");
    assert_eq!(image["bufferView"], 2);

    let position = &value["accessors"][0];
    assert_eq!(position["type"], "VEC3");
    assert_eq!(position["componentType"], 5126);
    assert_eq!(value["accessors"][3]["componentType"], 5123);
    assert_eq!(value["bufferViews"][0]["byteStride"], 32);
    assert_eq!(value["bufferViews"][0]["target"], 34962);
    assert_eq!(value["bufferViews"][1]["target"], 34963);
}

#[test]
fn test_buffers_round_trip_through_data_uris() {
    let doc = decoded_chair();
    let value: Value = serde_json::from_str(&to_gltf_string(&doc).unwrap()).unwrap();

    let buffers = value["buffers"].as_array().unwrap();
    assert_eq!(buffers.len(), doc.buffers.len());
    for (json, buffer) in buffers.iter().zip(&doc.buffers) {
        assert_eq!(json["byteLength"], buffer.data.len());
        assert_eq!(decode_uri(json["uri"].as_str().unwrap()), buffer.data);
    }
    assert_eq!(
        decode_uri(buffers[2]["uri"].as_str().unwrap()),
        b"texture/common/WOOD.tga"
    );
}

#[test]
fn test_generator_can_be_omitted() {
    let config = DecodeConfig::new().with_generator(None);
    let doc =
        SceneDocument::from_hgm_with_config(&chair_model(), CHAIR, &echo_textures, &config).unwrap();
    let value: Value = serde_json::from_str(&to_gltf_string(&doc).unwrap()).unwrap();
    assert!(value["asset"].get("generator").is_none());
}

#[test]
fn test_writer_and_collector_sinks() {
    let doc = decoded_chair();

    let mut collected: Vec<SceneDocument> = Vec::new();
    doc.write_to(&mut collected).unwrap();
    assert_eq!(collected, vec![doc.clone()]);

    let mut writer = GltfWriter::new(Vec::new()).compact();
    writer.write_document(&doc).unwrap();
    let compact = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(compact, to_gltf_string(&doc).unwrap());
}

#[test]
fn test_partial_weights_are_written_as_vec4() {
    // position + weights 0,1 + joints
    let mut hgm = common::HgmBuilder::new();
    hgm.geometry(
        "SKIN",
        0b0100_1100_0001,
        &[0.0, 0.0, 0.0, 0.25, 0.75, 0.0, 1.0, 2.0, 3.0],
        &[0],
    );
    let doc = SceneDocument::from_hgm(&hgm.build(), CHAIR, &echo_textures).unwrap();
    let value: Value = serde_json::from_str(&to_gltf_string(&doc).unwrap()).unwrap();

    assert_eq!(value["accessors"][1]["type"], "VEC4");
    assert_eq!(value["accessors"][2]["type"], "VEC4");
}

#[test]
fn test_nan_only_component_writes_no_bounds() {
    let mut hgm = common::HgmBuilder::new();
    hgm.geometry("ODD", 0b1, &[f32::NAN, 1.0, 2.0], &[0]);
    let doc = SceneDocument::from_hgm(&hgm.build(), CHAIR, &echo_textures).unwrap();
    let value: Value = serde_json::from_str(&to_gltf_string(&doc).unwrap()).unwrap();

    let position = &value["accessors"][0];
    assert!(position.get("min").is_none());
    assert!(position.get("max").is_none());
}
