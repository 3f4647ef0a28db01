#![no_main]

use libfuzzer_sys::fuzz_target;
use tsuhan::{DecodeConfig, Result, decode_model_with_config};

fn echo(path: &str) -> Result<Vec<u8>> {
    Ok(path.as_bytes().to_vec())
}

fuzz_target!(|data: &[u8]| {
    // Whole decode pipeline: chunk walk -> builders -> scene assembly
    let config = DecodeConfig::default();
    let _ = decode_model_with_config(data, "model/common/FUZZ.hgm", &echo, &config);
});
