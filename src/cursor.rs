//! Tagged-field reader for HGM chunk payloads
//!
//! HGM payloads are sequences of 4-byte aligned fields. A field format is a
//! short descriptor such as `"sfffflll"` where every character names one
//! field:
//!
//! - `s`: null-terminated string, padded so the field occupies
//!   `4 * (len / 4) + 4` bytes (a string whose length is already a multiple
//!   of four still gets a full group of padding)
//! - `l`: 4-byte little-endian unsigned integer
//! - `f`: 4-byte little-endian IEEE-754 float
//!
//! Any other character is ignored, so descriptors copied from format notes
//! may carry separators.
//!
//! # Example
//!
//! ```
//! use tsuhan::cursor::{ByteCursor, FieldEncoder};
//!
//! let mut encoder = FieldEncoder::new();
//! encoder.string("CHAIR").u32(7).f32(1.5);
//! let bytes = encoder.into_bytes();
//!
//! let mut cursor = ByteCursor::new(&bytes);
//! let record = cursor.read_format("slf")?;
//! assert_eq!(record.string(0)?, "CHAIR");
//! assert_eq!(record.u32(1)?, 7);
//! assert_eq!(record.f32(2)?, 1.5);
//! assert!(cursor.is_empty());
//! # Ok::<(), tsuhan::Error>(())
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// Default string buffer size; decoded strings must be shorter, leaving
/// room for the terminator
pub const DEFAULT_MAX_STRING_LEN: usize = 256;

/// Width in bytes of a string field holding `len` characters
///
/// The terminator is always followed by padding up to the next 4-byte
/// group, so `"ABCD"` (4 chars) takes 8 bytes and `"ABC"` takes 4.
pub const fn string_field_width(len: usize) -> usize {
    4 * (len / 4) + 4
}

/// Kind of a single field in a field format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Null-terminated, 4-byte padded string (`s`)
    String,
    /// 32-bit unsigned integer (`l`)
    U32,
    /// 32-bit float (`f`)
    F32,
}

impl FieldKind {
    /// Map a descriptor character to a field kind (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' => Some(FieldKind::String),
            'l' => Some(FieldKind::U32),
            'f' => Some(FieldKind::F32),
            _ => None,
        }
    }

    /// Descriptor character for this kind
    pub fn as_char(&self) -> char {
        match self {
            FieldKind::String => 's',
            FieldKind::U32 => 'l',
            FieldKind::F32 => 'f',
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "string field",
            FieldKind::U32 => "integer field",
            FieldKind::F32 => "float field",
        }
    }
}

/// Ordered list of field kinds parsed from a descriptor string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldFormat {
    kinds: Vec<FieldKind>,
}

impl FieldFormat {
    /// Parse a descriptor such as `"slfffffffff"`
    ///
    /// Unrecognized characters are skipped rather than rejected.
    pub fn parse(format: &str) -> Self {
        Self {
            kinds: format.chars().filter_map(FieldKind::from_char).collect(),
        }
    }

    /// Field kinds in reading order
    pub fn kinds(&self) -> &[FieldKind] {
        &self.kinds
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True if the format has no fields
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl From<&str> for FieldFormat {
    fn from(format: &str) -> Self {
        Self::parse(format)
    }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.kinds {
            write!(f, "{}", kind.as_char())?;
        }
        Ok(())
    }
}

/// A single decoded field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Decoded string, without terminator or padding
    String(String),
    /// Unsigned integer
    U32(u32),
    /// Float, reinterpreted from its raw bits
    F32(f32),
}

impl FieldValue {
    /// Kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::U32(_) => FieldKind::U32,
            FieldValue::F32(_) => FieldKind::F32,
        }
    }
}

/// Fields decoded from one field format, in order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: Vec<FieldValue>,
}

impl Record {
    /// Create a record from decoded values
    pub fn new(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    /// All values in order
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, index: usize, kind: FieldKind) -> Result<&FieldValue> {
        let value = self.values.get(index).ok_or_else(|| {
            Error::FieldMismatch(format!(
                "record has {} fields, field {} requested",
                self.values.len(),
                index
            ))
        })?;
        if value.kind() != kind {
            return Err(Error::FieldMismatch(format!(
                "field {} is '{}', requested as '{}'",
                index,
                value.kind().as_char(),
                kind.as_char()
            )));
        }
        Ok(value)
    }

    /// String field at `index`
    pub fn string(&self, index: usize) -> Result<&str> {
        match self.get(index, FieldKind::String)? {
            FieldValue::String(s) => Ok(s),
            _ => unreachable!("kind checked by get"),
        }
    }

    /// Integer field at `index`
    pub fn u32(&self, index: usize) -> Result<u32> {
        match self.get(index, FieldKind::U32)? {
            FieldValue::U32(v) => Ok(*v),
            _ => unreachable!("kind checked by get"),
        }
    }

    /// Float field at `index`
    pub fn f32(&self, index: usize) -> Result<f32> {
        match self.get(index, FieldKind::F32)? {
            FieldValue::F32(v) => Ok(*v),
            _ => unreachable!("kind checked by get"),
        }
    }

    /// Three consecutive float fields starting at `index`
    pub fn vec3(&self, index: usize) -> Result<[f32; 3]> {
        Ok([self.f32(index)?, self.f32(index + 1)?, self.f32(index + 2)?])
    }

    /// Four consecutive float fields starting at `index`
    pub fn vec4(&self, index: usize) -> Result<[f32; 4]> {
        Ok([
            self.f32(index)?,
            self.f32(index + 1)?,
            self.f32(index + 2)?,
            self.f32(index + 3)?,
        ])
    }

    /// The field format this record would be read with
    pub fn format(&self) -> FieldFormat {
        FieldFormat {
            kinds: self.values.iter().map(FieldValue::kind).collect(),
        }
    }
}

/// Forward-only reader over a borrowed byte payload
///
/// The cursor never reads past the end of its slice: every read checks the
/// remaining length first and reports [`Error::TruncatedData`] instead.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
    max_string_len: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// Set the string buffer size; strings of this length or longer are rejected
    pub fn with_max_string_len(mut self, max_string_len: usize) -> Self {
        self.max_string_len = max_string_len;
        self
    }

    /// Bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// True once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread part of the payload
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    /// Consume exactly `len` bytes
    pub fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(Error::truncated(field, len, available));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Consume a 4-byte unsigned integer
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        let bytes = self.take(4, field)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consume a 4-byte float
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        self.read_u32(field).map(f32::from_bits)
    }

    /// Consume a padded null-terminated string
    pub fn read_string(&mut self, field: &'static str) -> Result<String> {
        let rest = self.rest();
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            // No terminator: at least one more byte would be needed
            return Err(Error::truncated(field, rest.len() + 1, rest.len()));
        };
        if len >= self.max_string_len {
            return Err(Error::InvalidString(format!(
                "{} is {} bytes long, must be shorter than {}",
                field, len, self.max_string_len
            )));
        }
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.take(string_field_width(len), field)?;
        Ok(text)
    }

    /// Consume one field of the given kind
    pub fn read_field(&mut self, kind: FieldKind) -> Result<FieldValue> {
        let field = kind.label();
        Ok(match kind {
            FieldKind::String => FieldValue::String(self.read_string(field)?),
            FieldKind::U32 => FieldValue::U32(self.read_u32(field)?),
            FieldKind::F32 => FieldValue::F32(self.read_f32(field)?),
        })
    }

    /// Consume every field of `format`, left to right
    pub fn read_record(&mut self, format: &FieldFormat) -> Result<Record> {
        let mut values = Vec::with_capacity(format.len());
        for &kind in format.kinds() {
            values.push(self.read_field(kind)?);
        }
        Ok(Record::new(values))
    }

    /// Parse `format` and consume its fields
    pub fn read_format(&mut self, format: &str) -> Result<Record> {
        self.read_record(&FieldFormat::parse(format))
    }
}

/// Builds HGM field bytes, the inverse of [`ByteCursor`]
#[derive(Debug, Clone, Default)]
pub struct FieldEncoder {
    buf: Vec<u8>,
}

impl FieldEncoder {
    /// Create an empty encoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string field with terminator and zero padding
    pub fn string(&mut self, value: &str) -> &mut Self {
        let bytes = value.as_bytes();
        let width = string_field_width(bytes.len());
        self.buf.extend_from_slice(bytes);
        self.buf.resize(self.buf.len() + (width - bytes.len()), 0);
        self
    }

    /// Append an integer field
    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Append a float field
    pub fn f32(&mut self, value: f32) -> &mut Self {
        self.u32(value.to_bits())
    }

    /// Append raw bytes
    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append one decoded value
    pub fn value(&mut self, value: &FieldValue) -> &mut Self {
        match value {
            FieldValue::String(s) => self.string(s),
            FieldValue::U32(v) => self.u32(*v),
            FieldValue::F32(v) => self.f32(*v),
        }
    }

    /// Append every value of a record
    pub fn record(&mut self, record: &Record) -> &mut Self {
        for value in record.values() {
            self.value(value);
        }
        self
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing was written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
