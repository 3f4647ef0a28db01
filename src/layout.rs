//! Interleaved vertex layout
//!
//! A geometry's vertex records interleave up to fifteen optional attributes.
//! A 16-bit mask selects which are present; attribute `i` is enabled by bit
//! `i` and always has the same width, so the stride and every attribute
//! offset follow from the mask alone.
//!
//! | Bit | Attribute | Bytes |
//! |---|---|---|
//! | 0 | position | 12 |
//! | 1 | normal | 12 |
//! | 2 | tangent | 12 |
//! | 3 | tangent (alternate) | 12 |
//! | 4 | color | 16 |
//! | 5 | padding | 16 |
//! | 6-9 | bone weight 0-3 | 4 each |
//! | 10 | joint indices | 16 |
//! | 11 | texcoord | 8 |
//! | 12-14 | reserved | 8 each |
//!
//! Bit 15 is unused and contributes nothing.

use crate::error::{Error, Result};
use crate::model::{AccessorType, AttributeSemantic, ComponentType};

/// Per-vertex byte width of each attribute bit
pub const ATTRIBUTE_WIDTHS: [usize; 15] = [12, 12, 12, 12, 16, 16, 4, 4, 4, 4, 16, 8, 8, 8, 8];

/// Mask bits of the four bone-weight channels
pub const WEIGHT_BITS: u16 = 0b0000_0011_1100_0000;

/// Attributes selectable in a vertex mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    /// Bit 0
    Position,
    /// Bit 1
    Normal,
    /// Bit 2
    Tangent,
    /// Bit 3
    TangentAlt,
    /// Bit 4
    Color,
    /// Bit 5
    Padding,
    /// Bits 6-9
    Weight(u8),
    /// Bit 10
    Joints,
    /// Bit 11
    TexCoord,
    /// Bits 12-14
    Reserved(u8),
}

impl VertexAttribute {
    /// Attribute for mask bit `bit` (0..15)
    pub fn from_bit(bit: u8) -> Option<Self> {
        Some(match bit {
            0 => VertexAttribute::Position,
            1 => VertexAttribute::Normal,
            2 => VertexAttribute::Tangent,
            3 => VertexAttribute::TangentAlt,
            4 => VertexAttribute::Color,
            5 => VertexAttribute::Padding,
            6..=9 => VertexAttribute::Weight(bit - 6),
            10 => VertexAttribute::Joints,
            11 => VertexAttribute::TexCoord,
            12..=14 => VertexAttribute::Reserved(bit),
            _ => return None,
        })
    }

    /// Mask bit index of this attribute
    pub fn bit(&self) -> u8 {
        match self {
            VertexAttribute::Position => 0,
            VertexAttribute::Normal => 1,
            VertexAttribute::Tangent => 2,
            VertexAttribute::TangentAlt => 3,
            VertexAttribute::Color => 4,
            VertexAttribute::Padding => 5,
            VertexAttribute::Weight(channel) => 6 + channel,
            VertexAttribute::Joints => 10,
            VertexAttribute::TexCoord => 11,
            VertexAttribute::Reserved(bit) => *bit,
        }
    }

    /// Single-bit mask value
    pub fn mask(&self) -> u16 {
        1 << self.bit()
    }

    /// Per-vertex byte width
    pub fn width(&self) -> usize {
        ATTRIBUTE_WIDTHS[self.bit() as usize]
    }
}

/// Sum of the widths of every set bit in `mask`
pub fn stride(mask: u16) -> usize {
    ATTRIBUTE_WIDTHS
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, width)| width)
        .sum()
}

/// Byte offset within one vertex of the attribute selected by `attribute_bit`
///
/// `attribute_bit` is the single-bit mask value (`1 << i`); the offset is the
/// stride contributed by all lower bits present in `mask`.
pub fn attribute_offset(mask: u16, attribute_bit: u16) -> usize {
    stride(mask & attribute_bit.wrapping_sub(1))
}

/// Vertex attribute mask of one geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeMask(pub u16);

impl AttributeMask {
    /// Wrap a raw mask
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw mask value
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// True if `attribute` is present
    pub fn contains(&self, attribute: VertexAttribute) -> bool {
        self.0 & attribute.mask() != 0
    }

    /// Bytes per vertex record
    pub fn stride(&self) -> usize {
        stride(self.0)
    }

    /// Byte offset of `attribute` within a vertex record
    pub fn offset_of(&self, attribute: VertexAttribute) -> usize {
        attribute_offset(self.0, attribute.mask())
    }

    /// Number of bone-weight channels present
    pub fn weight_count(&self) -> usize {
        (self.0 & WEIGHT_BITS).count_ones() as usize
    }

    /// Present attributes in bit order
    pub fn attributes(&self) -> impl Iterator<Item = VertexAttribute> + '_ {
        (0..15u8)
            .filter_map(VertexAttribute::from_bit)
            .filter(|attribute| self.contains(*attribute))
    }

    /// The semantic streams this mask produces, in output order
    ///
    /// Weight channels merge into one VEC4 stream starting at the lowest
    /// weight present. Tangent (alternate), padding and reserved slots take space
    /// but produce no stream.
    pub fn streams(&self) -> Vec<StreamLayout> {
        let stride = self.stride();
        let mut streams = Vec::new();
        let mut single = |attribute: VertexAttribute, semantic, accessor_type| {
            if self.contains(attribute) {
                streams.push(StreamLayout {
                    semantic,
                    offset: self.offset_of(attribute),
                    stride,
                    accessor_type,
                });
            }
        };
        single(
            VertexAttribute::Position,
            AttributeSemantic::Position,
            AccessorType::Vec3,
        );
        single(
            VertexAttribute::Normal,
            AttributeSemantic::Normal,
            AccessorType::Vec3,
        );
        single(
            VertexAttribute::Tangent,
            AttributeSemantic::Tangent,
            AccessorType::Vec3,
        );
        single(
            VertexAttribute::Color,
            AttributeSemantic::Color,
            AccessorType::Vec4,
        );

        // The weight channels share one VEC4 stream starting at the lowest
        // present channel, whatever their count
        if self.weight_count() > 0 {
            let first = self.0 & WEIGHT_BITS;
            let lowest = first & first.wrapping_neg();
            streams.push(StreamLayout {
                semantic: AttributeSemantic::Weights,
                offset: attribute_offset(self.0, lowest),
                stride,
                accessor_type: AccessorType::Vec4,
            });
        }

        let mut single = |attribute: VertexAttribute, semantic, accessor_type| {
            if self.contains(attribute) {
                streams.push(StreamLayout {
                    semantic,
                    offset: self.offset_of(attribute),
                    stride,
                    accessor_type,
                });
            }
        };
        single(
            VertexAttribute::Joints,
            AttributeSemantic::Joints,
            AccessorType::Vec4,
        );
        single(
            VertexAttribute::TexCoord,
            AttributeSemantic::TexCoord,
            AccessorType::Vec2,
        );
        streams
    }
}

/// Where one semantic stream lives inside interleaved vertex data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamLayout {
    /// Semantic of the stream
    pub semantic: AttributeSemantic,
    /// Byte offset within a vertex record
    pub offset: usize,
    /// Vertex record size
    pub stride: usize,
    /// Element type (all components are 32-bit floats)
    pub accessor_type: AccessorType,
}

impl StreamLayout {
    /// True if the stream's elements lie inside one vertex record
    pub fn fits(&self) -> bool {
        self.offset + self.accessor_type.components() * 4 <= self.stride
    }
}

/// A semantic stream with its observed bounds
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeStream {
    /// Layout of the stream
    pub layout: StreamLayout,
    /// Number of elements
    pub count: usize,
    /// Component type
    pub component_type: ComponentType,
    /// Per-component minimum
    pub min: Vec<f64>,
    /// Per-component maximum
    pub max: Vec<f64>,
}

/// Slice interleaved vertex data into semantic streams with exact bounds
///
/// `vertex_data` must hold exactly `count` records of `mask.stride()` bytes.
/// A stream that would read past the end of its vertex record (a weight
/// stream with too few channels behind it) is reported as unsupported.
pub fn attribute_streams(
    mask: AttributeMask,
    vertex_data: &[u8],
    count: usize,
) -> Result<Vec<AttributeStream>> {
    let needed = mask
        .stride()
        .checked_mul(count)
        .ok_or_else(|| Error::truncated("vertex data", usize::MAX, vertex_data.len()))?;
    if vertex_data.len() < needed {
        return Err(Error::truncated("vertex data", needed, vertex_data.len()));
    }

    let mut streams = Vec::new();
    for layout in mask.streams() {
        if !layout.fits() {
            return Err(Error::unsupported(format!(
                "{} stream at offset {} overruns the {}-byte vertex of mask {:#06x}",
                layout.semantic.gltf_name(),
                layout.offset,
                layout.stride,
                mask.bits()
            )));
        }
        let (min, max) = float_bounds(vertex_data, &layout, count);
        streams.push(AttributeStream {
            layout,
            count,
            component_type: ComponentType::F32,
            min,
            max,
        });
    }
    Ok(streams)
}

/// Exact per-component bounds of a float stream
///
/// Non-finite values are skipped. If some component has no finite value at
/// all, the stream gets no bounds.
fn float_bounds(data: &[u8], layout: &StreamLayout, count: usize) -> (Vec<f64>, Vec<f64>) {
    let components = layout.accessor_type.components();
    let mut bounds: Vec<Option<(f32, f32)>> = vec![None; components];
    for vertex in 0..count {
        let base = vertex * layout.stride + layout.offset;
        for (component, slot) in bounds.iter_mut().enumerate() {
            let at = base + component * 4;
            let value = f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
            if !value.is_finite() {
                continue;
            }
            *slot = Some(match *slot {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
    }
    match bounds.into_iter().collect::<Option<Vec<_>>>() {
        Some(bounds) if !bounds.is_empty() => bounds
            .into_iter()
            .map(|(lo, hi)| (f64::from(lo), f64::from(hi)))
            .unzip(),
        _ => (Vec::new(), Vec::new()),
    }
}

/// Exact bounds of a u16 index stream; empty for an empty stream
pub fn index_bounds(indices: &[u8]) -> (Vec<f64>, Vec<f64>) {
    let values = indices
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let bounds = values.fold(None, |acc: Option<(u16, u16)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    });
    match bounds {
        Some((lo, hi)) => (vec![f64::from(lo)], vec![f64::from(hi)]),
        None => (Vec::new(), Vec::new()),
    }
}
