#![no_main]

use libfuzzer_sys::fuzz_target;
use tsuhan::chunk::ChunkEncoder;
use tsuhan::{Error, Result, TagId, decode_model};

fn no_textures(path: &str) -> Result<Vec<u8>> {
    Err(Error::MissingTexture(path.to_string()))
}

fuzz_target!(|data: &[u8]| {
    // Wrap the input as a scene descriptor so the hierarchy walk sees it directly
    let mut chunks = ChunkEncoder::new();
    chunks.chunk(TagId::SceneDescriptor, data);
    let _ = decode_model(chunks.as_bytes(), "model/common/FUZZ.hgm", &no_textures);
});
