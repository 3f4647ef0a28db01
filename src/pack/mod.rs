//! Resource pack unwrapping
//!
//! A pack is one monolithic file XOR-encrypted with a 32-bit key. Once
//! decrypted, its sub-files are addressed by a static `(name, offset, size)`
//! table; the pack itself carries no directory.

mod table;

pub use table::PACKS;

use crate::error::{Error, Result};
use log::debug;

/// What a pack holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackKind {
    /// HGM model files
    Model,
    /// TGA texture files
    Texture,
}

/// One sub-file span within a decrypted pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpan {
    /// Sub-file name without extension
    pub name: &'static str,
    /// Byte offset within the pack
    pub offset: u32,
    /// Byte length
    pub size: u32,
}

impl FileSpan {
    /// Create a span
    pub const fn new(name: &'static str, offset: u32, size: u32) -> Self {
        Self { name, offset, size }
    }

    /// Byte range within the pack
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.size as usize
    }
}

/// Static description of one pack file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackInfo {
    /// Pack file name, e.g. `model00.bin`
    pub file_name: &'static str,
    /// XOR key
    pub key: u32,
    /// Logical directory of extracted files
    pub root: &'static str,
    /// Extension of extracted files
    pub extension: &'static str,
    /// Content kind
    pub kind: PackKind,
    /// Sub-file table
    pub files: &'static [FileSpan],
}

impl PackInfo {
    /// Logical path of a sub-file, e.g. `model/common/CHAIR.hgm`
    pub fn logical_path(&self, span: &FileSpan) -> String {
        format!("{}/{}{}", self.root, span.name, self.extension)
    }
}

/// Look up a pack by file name
///
/// Only the final path component is compared, so full paths are accepted.
pub fn find(file_name: &str) -> Option<&'static PackInfo> {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    PACKS.iter().find(|info| info.file_name == base)
}

/// XOR every whole little-endian 32-bit word with `key`
///
/// Trailing bytes that do not fill a word are left unchanged. The operation
/// is its own inverse.
pub fn decrypt(data: &mut [u8], key: u32) {
    let key = key.to_le_bytes();
    for word in data.chunks_exact_mut(4) {
        for (byte, k) in word.iter_mut().zip(key) {
            *byte ^= k;
        }
    }
}

/// One extracted sub-file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackEntry<'a> {
    /// Sub-file name without extension
    pub name: &'static str,
    /// Decrypted bytes
    pub data: &'a [u8],
    info: &'static PackInfo,
}

impl PackEntry<'_> {
    /// Logical path, e.g. `texture/common/CONGA_SKIN.tga`
    pub fn logical_path(&self) -> String {
        self.info.logical_path(&FileSpan::new(self.name, 0, 0))
    }
}

/// A decrypted pack file
#[derive(Debug, Clone)]
pub struct Pack {
    info: &'static PackInfo,
    data: Vec<u8>,
}

impl Pack {
    /// Decrypt a pack given its file name and encrypted bytes
    ///
    /// Fails with [`Error::MissingFile`] if the name is not a known pack and
    /// with [`Error::TruncatedData`] if a table span runs past the end.
    pub fn open(file_name: &str, encrypted: Vec<u8>) -> Result<Self> {
        let info = find(file_name).ok_or_else(|| Error::MissingFile(file_name.to_string()))?;
        Self::with_info(info, encrypted)
    }

    /// Decrypt a pack described by `info`
    pub fn with_info(info: &'static PackInfo, mut data: Vec<u8>) -> Result<Self> {
        if let Some(end) = info.files.iter().map(|span| span.range().end).max() {
            if end > data.len() {
                return Err(Error::truncated("pack file table", end, data.len()));
            }
        }
        decrypt(&mut data, info.key);
        debug!(
            "{}: {} bytes, {} files",
            info.file_name,
            data.len(),
            info.files.len()
        );
        Ok(Self { info, data })
    }

    /// Static description of this pack
    pub fn info(&self) -> &'static PackInfo {
        self.info
    }

    /// Decrypted pack bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Every sub-file, in table order
    pub fn entries(&self) -> impl Iterator<Item = PackEntry<'_>> + '_ {
        self.info.files.iter().map(move |span| PackEntry {
            name: span.name,
            data: &self.data[span.range()],
            info: self.info,
        })
    }

    /// Sub-file by name
    pub fn entry(&self, name: &str) -> Result<PackEntry<'_>> {
        self.entries()
            .find(|entry| entry.name == name)
            .ok_or_else(|| Error::MissingFile(format!("{}:{}", self.info.file_name, name)))
    }
}
