//! TsuHan pack extractor
//!
//! Decrypts the given pack files, writes every sub-file under the output
//! directory at its logical path, then converts each extracted model to a
//! `.gltf` file next to it. Textures are taken from the texture packs given
//! on the same command line.

#![forbid(unsafe_code)]

use clap::Parser;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tsuhan::pack::{self, Pack, PackKind};
use tsuhan::{PackTextureProvider, SceneDocument};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to extract into
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,

    /// Pack files, e.g. model00.bin texture00.bin
    #[arg(value_name = "PACK", required = true)]
    packs: Vec<PathBuf>,

    /// Extract only, skip glTF conversion
    #[arg(short, long)]
    no_convert: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut packs = Vec::new();
    for path in &args.packs {
        let name = path.to_string_lossy();
        if pack::find(&name).is_none() {
            warn!("{}: not a known pack, skipped", path.display());
            continue;
        }
        let pack = Pack::open(&name, fs::read(path)?)?;
        extract(&pack, &args.out_dir)?;
        packs.push(pack);
    }

    if args.no_convert {
        return Ok(());
    }

    let provider = PackTextureProvider::from_packs(
        packs.iter().filter(|p| p.info().kind == PackKind::Texture),
    );
    let mut converted = 0;
    let mut failed = 0;
    for pack in packs.iter().filter(|p| p.info().kind == PackKind::Model) {
        for entry in pack.entries() {
            let logical = entry.logical_path();
            let target = args.out_dir.join(&logical).with_extension("gltf");
            match SceneDocument::from_hgm(entry.data, &logical, &provider)
                .and_then(|doc| doc.write_gltf_file(&target))
            {
                Ok(()) => {
                    info!("{} -> {}", logical, target.display());
                    converted += 1;
                }
                Err(e) => {
                    error!("{}: {}", logical, e);
                    failed += 1;
                }
            }
        }
    }

    println!("Converted {} models, {} failed", converted, failed);
    Ok(())
}

/// Write every sub-file of `pack` under `out_dir`
fn extract(pack: &Pack, out_dir: &Path) -> std::io::Result<()> {
    let info = pack.info();
    fs::create_dir_all(out_dir.join(info.root))?;
    for entry in pack.entries() {
        fs::write(out_dir.join(entry.logical_path()), entry.data)?;
    }
    println!(
        "{}: extracted {} files to {}",
        info.file_name,
        info.files.len(),
        out_dir.join(info.root).display()
    );
    Ok(())
}
