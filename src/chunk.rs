//! Tagged chunk container walking
//!
//! An HGM file is a flat sequence of chunks. Each chunk starts with an
//! 8-byte header (`tag: u32`, `size: u32`, little-endian) followed by its
//! payload. Chunk boundaries are self-describing, so walking never looks
//! inside a payload.

use crate::error::{Error, Result};
use std::fmt;

/// Size of a chunk header in bytes
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Chunk tag identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagId {
    /// Interleaved vertex data and index streams
    Geometry,
    /// Material with optional texture reference
    Material,
    /// Mesh made of (material, geometry) submeshes
    Mesh,
    /// Texture name and source file
    Texture,
    /// Transform node
    Transform,
    /// Reserved tag 7, not interpreted
    Reserved7,
    /// Reserved tag 8, not interpreted
    Reserved8,
    /// Reserved tag 9, not interpreted
    Reserved9,
    /// Nested node hierarchy
    SceneDescriptor,
    /// Bone node (same layout as a transform)
    Bone,
    /// Any other tag value; skipped
    Unrecognized(u32),
}

impl TagId {
    /// Map a raw tag value
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => TagId::Geometry,
            1 => TagId::Material,
            2 => TagId::Mesh,
            3 => TagId::Texture,
            4 => TagId::Transform,
            7 => TagId::Reserved7,
            8 => TagId::Reserved8,
            9 => TagId::Reserved9,
            10 => TagId::SceneDescriptor,
            11 => TagId::Bone,
            other => TagId::Unrecognized(other),
        }
    }

    /// Raw tag value
    pub fn raw(&self) -> u32 {
        match self {
            TagId::Geometry => 0,
            TagId::Material => 1,
            TagId::Mesh => 2,
            TagId::Texture => 3,
            TagId::Transform => 4,
            TagId::Reserved7 => 7,
            TagId::Reserved8 => 8,
            TagId::Reserved9 => 9,
            TagId::SceneDescriptor => 10,
            TagId::Bone => 11,
            TagId::Unrecognized(raw) => *raw,
        }
    }

    /// Human-readable tag name
    pub fn name(&self) -> &'static str {
        match self {
            TagId::Geometry => "Geometry",
            TagId::Material => "Material",
            TagId::Mesh => "Mesh",
            TagId::Texture => "Texture",
            TagId::Transform => "Transform",
            TagId::Reserved7 => "Reserved7",
            TagId::Reserved8 => "Reserved8",
            TagId::Reserved9 => "Reserved9",
            TagId::SceneDescriptor => "SceneDescriptor",
            TagId::Bone => "Bone",
            TagId::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagId::Unrecognized(raw) => write!(f, "Unrecognized({})", raw),
            other => f.write_str(other.name()),
        }
    }
}

/// How the `size` field of a chunk header is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkSizeMode {
    /// `size` counts only the payload following the header
    #[default]
    PayloadOnly,
    /// `size` counts the 8 header bytes as well
    IncludesHeader,
}

/// Decoded chunk header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk tag
    pub tag: TagId,
    /// Raw declared size
    pub size: u32,
}

/// One chunk: header plus borrowed payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Chunk header
    pub header: ChunkHeader,
    /// Offset of the header within the file
    pub offset: usize,
    /// Payload bytes
    pub payload: &'a [u8],
}

impl Chunk<'_> {
    /// Chunk tag
    pub fn tag(&self) -> TagId {
        self.header.tag
    }
}

/// Iterator over the chunks of one decrypted file
///
/// Yields `Err` once and then stops if a header or payload runs past the
/// end of the buffer.
#[derive(Debug, Clone)]
pub struct ChunkWalker<'a> {
    data: &'a [u8],
    offset: usize,
    mode: ChunkSizeMode,
    failed: bool,
}

impl<'a> ChunkWalker<'a> {
    /// Walk `data` with payload-only chunk sizes
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_mode(data, ChunkSizeMode::PayloadOnly)
    }

    /// Walk `data` with the given size convention
    pub fn with_mode(data: &'a [u8], mode: ChunkSizeMode) -> Self {
        Self {
            data,
            offset: 0,
            mode,
            failed: false,
        }
    }

    /// Bytes not yet walked
    pub fn remainder(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    fn next_chunk(&mut self) -> Result<Chunk<'a>> {
        let rest = self.remainder();
        if rest.len() < CHUNK_HEADER_SIZE {
            return Err(Error::truncated("chunk header", CHUNK_HEADER_SIZE, rest.len()));
        }
        let raw_tag = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
        let size = u32::from_le_bytes([rest[4], rest[5], rest[6], rest[7]]);
        let available = rest.len() - CHUNK_HEADER_SIZE;

        let payload_len = match self.mode {
            ChunkSizeMode::PayloadOnly => size as usize,
            ChunkSizeMode::IncludesHeader => (size as usize)
                .checked_sub(CHUNK_HEADER_SIZE)
                .ok_or(Error::TruncatedChunk {
                    tag: raw_tag,
                    declared: size as usize,
                    available,
                })?,
        };
        if payload_len > available {
            return Err(Error::TruncatedChunk {
                tag: raw_tag,
                declared: payload_len,
                available,
            });
        }

        let chunk = Chunk {
            header: ChunkHeader {
                tag: TagId::from_raw(raw_tag),
                size,
            },
            offset: self.offset,
            payload: &rest[CHUNK_HEADER_SIZE..CHUNK_HEADER_SIZE + payload_len],
        };
        self.offset += CHUNK_HEADER_SIZE + payload_len;
        Ok(chunk)
    }
}

impl<'a> Iterator for ChunkWalker<'a> {
    type Item = Result<Chunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.data.len() {
            return None;
        }
        let result = self.next_chunk();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

/// Builds a chunk stream, the inverse of [`ChunkWalker`]
#[derive(Debug, Clone, Default)]
pub struct ChunkEncoder {
    buf: Vec<u8>,
    mode: ChunkSizeMode,
}

impl ChunkEncoder {
    /// Create an encoder writing payload-only sizes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given size convention
    pub fn with_mode(mode: ChunkSizeMode) -> Self {
        Self {
            buf: Vec::new(),
            mode,
        }
    }

    /// Append one chunk
    pub fn chunk(&mut self, tag: TagId, payload: &[u8]) -> &mut Self {
        let size = match self.mode {
            ChunkSizeMode::PayloadOnly => payload.len(),
            ChunkSizeMode::IncludesHeader => payload.len() + CHUNK_HEADER_SIZE,
        };
        self.buf.extend_from_slice(&tag.raw().to_le_bytes());
        self.buf.extend_from_slice(&(size as u32).to_le_bytes());
        self.buf.extend_from_slice(payload);
        self
    }

    /// Borrow the encoded stream
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the encoded stream
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
