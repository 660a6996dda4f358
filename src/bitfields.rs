//! Bit-field extraction.
//!
//! This module contains [`Field`], which describes where a navigation
//! parameter is located inside a bit container and how its raw value is
//! converted to physical units. Fields are declared as constants in the
//! [`layout`](crate::layout) module and read with the methods of [`Field`].
//!
//! A field can be made of several [`Segment`]s. The segments are concatenated
//! in the order in which they are listed, with the first segment giving the
//! most significant bits, before the value is interpreted.

use crate::types::BitSlice;
use bitvec::prelude::*;

/// Contiguous run of bits inside a container.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Segment {
    start: usize,
    len: usize,
}

impl Segment {
    /// Constructs a segment that starts at bit `start` and is `len` bits long.
    ///
    /// Bit 0 is the MSB of the first byte of the container.
    pub const fn new(start: usize, len: usize) -> Segment {
        Segment { start, len }
    }

    /// Returns the index of the first bit of the segment.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the length of the segment in bits.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the segment has length zero.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bits<'a>(&self, bits: &'a BitSlice) -> &'a BitSlice {
        debug_assert!(!self.is_empty());
        &bits[self.start..self.start + self.len]
    }
}

/// Navigation parameter field map.
///
/// A `Field` lists the segments where the bits of a parameter are found and
/// the affine transformation `raw * scale + offset` that gives the parameter
/// in physical units.
///
/// # Examples
///
/// ```
/// use galileo_inav::bitfields::{Field, Segment};
/// use galileo_inav::types::BitSlice;
///
/// const SPLIT: Field = Field::new(&[Segment::new(4, 4), Segment::new(12, 4)]).scaled(0.5);
///
/// let data = [0x0a, 0x0b];
/// let bits = BitSlice::from_slice(&data);
/// assert_eq!(SPLIT.read_unsigned(bits), 0xab);
/// assert_eq!(SPLIT.read_signed(bits), -0x55);
/// assert_eq!(SPLIT.read_unsigned_scaled(bits), 85.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    segments: &'static [Segment],
    scale: f64,
    offset: f64,
}

impl Field {
    /// Constructs a field from its segments, with unit scale and zero offset.
    pub const fn new(segments: &'static [Segment]) -> Field {
        Field {
            segments,
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Returns the field with its scale factor replaced by `scale`.
    pub const fn scaled(self, scale: f64) -> Field {
        Field { scale, ..self }
    }

    /// Returns the field with its additive offset replaced by `offset`.
    pub const fn with_offset(self, offset: f64) -> Field {
        Field { offset, ..self }
    }

    /// Returns the segments of the field.
    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns the scale factor of the field.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the additive offset of the field.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the total length of the field in bits.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.len).sum()
    }

    /// Returns `true` if the field has no bits.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a single-bit field as a boolean.
    ///
    /// # Panics
    ///
    /// Panics if the field is not exactly one bit long or if it falls outside
    /// `bits`.
    pub fn read_bool(&self, bits: &BitSlice) -> bool {
        assert_eq!(self.len(), 1, "boolean fields must be 1 bit long");
        self.segments.iter().any(|s| s.bits(bits)[0])
    }

    /// Reads the field as an unsigned integer.
    ///
    /// # Panics
    ///
    /// Panics if the field is longer than 64 bits or if any of its segments
    /// falls outside `bits`.
    pub fn read_unsigned(&self, bits: &BitSlice) -> u64 {
        assert!(self.len() <= 64, "fields are at most 64 bits long");
        self.segments.iter().fold(0, |acc: u64, s| {
            let shifted = acc.checked_shl(s.len as u32).unwrap_or(0);
            shifted | s.bits(bits).load_be::<u64>()
        })
    }

    /// Reads the field as a two's complement signed integer.
    ///
    /// The sign bit is the most significant bit of the assembled field (the
    /// first bit of the first segment).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Field::read_unsigned`].
    pub fn read_signed(&self, bits: &BitSlice) -> i64 {
        let raw = self.read_unsigned(bits);
        let unused = 64 - self.len() as u32;
        // sign extension through an arithmetic shift
        (raw << unused) as i64 >> unused
    }

    /// Reads the field as an unsigned integer and applies the scale and offset.
    pub fn read_unsigned_scaled(&self, bits: &BitSlice) -> f64 {
        self.apply_scale(self.read_unsigned(bits) as f64)
    }

    /// Reads the field as a signed integer and applies the scale and offset.
    pub fn read_signed_scaled(&self, bits: &BitSlice) -> f64 {
        self.apply_scale(self.read_signed(bits) as f64)
    }

    fn apply_scale(&self, raw: f64) -> f64 {
        raw * self.scale + self.offset
    }

    /// Copies the concatenated segments of the field into `dest`.
    ///
    /// This is used for fields that are too long to be read as integers, such
    /// as the data of a page pair.
    ///
    /// # Panics
    ///
    /// Panics if the length of `dest` is not the length of the field.
    pub fn copy_to(&self, bits: &BitSlice, dest: &mut BitSlice) {
        assert_eq!(dest.len(), self.len());
        let mut pos = 0;
        for s in self.segments.iter() {
            dest[pos..pos + s.len].copy_from_bitslice(s.bits(bits));
            pos += s.len;
        }
    }

    /// Spreads `src` over the segments of the field.
    ///
    /// This is the inverse of [`Field::copy_to`].
    ///
    /// # Panics
    ///
    /// Panics if the length of `src` is not the length of the field.
    pub fn copy_from(&self, src: &BitSlice, bits: &mut BitSlice) {
        assert_eq!(src.len(), self.len());
        let mut pos = 0;
        for s in self.segments.iter() {
            bits[s.start..s.start + s.len].copy_from_bitslice(&src[pos..pos + s.len]);
            pos += s.len;
        }
    }

    /// Writes an unsigned integer into the field.
    ///
    /// Only the `len()` least significant bits of `value` are written. Signed
    /// values can be written by passing their two's complement representation.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Field::read_unsigned`].
    pub fn write_unsigned(&self, bits: &mut BitSlice, value: u64) {
        assert!(self.len() <= 64, "fields are at most 64 bits long");
        let mut remaining = self.len();
        for s in self.segments.iter() {
            remaining -= s.len;
            let chunk = value.checked_shr(remaining as u32).unwrap_or(0);
            let mask = u64::MAX.checked_shr(64 - s.len as u32).unwrap_or(0);
            bits[s.start..s.start + s.len].store_be::<u64>(chunk & mask);
        }
    }
}
