//! Growable bit buffer written one bit (or one value) at a time.

use crate::{
    bit_reader::BitReader,
    bits::{self, bytes_for, sign_extend},
    errors::{ReadError, WriteError},
    order::{BitOrder, WriteConfig},
    primitive::Primitive,
};

/// Upper bound on the bytes allocated up front; the rest is allocated as bits are written.
const MAX_PREALLOC_BYTES: usize = 8 * 1024;

/// Sequential bit writer.
///
/// Every write lands at the next free bit; writing past [BitWriter::size] grows the buffer,
/// so writes never fail. Unwritten bits are always zero.
///
/// # Example
///
/// ```
/// use bits::bit_writer::BitWriter;
///
/// let mut writer = BitWriter::new();
/// writer.write_bit(true).write_u8(0x7f).write_i16(-2);
/// assert_eq!(writer.used_size(), 25);
///
/// let mut reader = writer.to_reader();
/// assert!(reader.read_bit().unwrap());
/// assert_eq!(reader.read_u8().unwrap(), 0x7f);
/// assert_eq!(reader.read_i16().unwrap(), -2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::serde::BitBufferDef",
        into = "crate::serde::BitBufferDef"
    )
)]
pub struct BitWriter {
    data: Vec<u8>,
    len: usize,
    capacity: usize,
    order: BitOrder,
}

impl PartialEq for BitWriter {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BitWriter {}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Room for one `u64` (64 bits) in the default [BitOrder].
    pub fn new() -> Self {
        Self::from_config(&WriteConfig::default())
    }

    /// `capacity_bits` bits are available before the buffer grows.
    pub fn with_capacity(capacity_bits: usize) -> Self {
        Self::from_config(&WriteConfig {
            capacity_bits,
            ..Default::default()
        })
    }

    pub fn with_order(order: BitOrder) -> Self {
        Self::from_config(&WriteConfig {
            bit_order: order,
            ..Default::default()
        })
    }

    pub fn from_config(config: &WriteConfig) -> Self {
        BitWriter {
            data: Vec::with_capacity(bytes_for(config.capacity_bits).min(MAX_PREALLOC_BYTES)),
            len: 0,
            capacity: config.capacity_bits,
            order: config.bit_order,
        }
    }

    /// Rebuilds a writer from raw bytes holding `len_bits` written bits.
    ///
    /// Bits of `data` past `len_bits` are discarded.
    pub fn from_bytes(data: &[u8], len_bits: usize, order: BitOrder) -> Result<Self, ReadError> {
        let mut reader = BitReader::from_bits(data, len_bits, order)?;
        let mut writer = BitWriter::from_config(&WriteConfig {
            bit_order: order,
            capacity_bits: len_bits,
        });
        writer.write_bits(&mut reader, len_bits)?;

        Ok(writer)
    }

    /// Raises [BitWriter::size] so that `additional` more bits fit. Memory is only allocated
    /// once the bits are actually written.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len.saturating_add(additional);
        if needed <= self.capacity {
            return;
        }

        let capacity = needed.max(self.capacity.saturating_mul(2));
        log::trace!(
            "growing bit buffer from {} to {} bits",
            self.capacity,
            capacity
        );
        self.capacity = capacity;
    }

    /// Backs the first `bits` bits with zeroed bytes.
    fn ensure_bytes(&mut self, bits: usize) {
        let bytes = bytes_for(bits);
        if self.data.len() < bytes {
            self.data.resize(bytes, 0);
        }
    }

    /// Writes the next bit.
    pub fn write_bit(&mut self, bit: bool) -> &mut Self {
        self.reserve(1);
        self.ensure_bytes(self.len + 1);
        bits::write_bit_at(&mut self.data, self.len, bit, self.order);
        self.len += 1;
        self
    }

    /// Copies the next `len` bits of `reader` into this writer.
    ///
    /// Fails without writing anything if the reader has fewer than `len` unread bits.
    pub fn write_bits(
        &mut self,
        reader: &mut BitReader<'_>,
        len: usize,
    ) -> Result<&mut Self, ReadError> {
        if reader.unread_size() < len {
            return Err(ReadError::OutOfBounds);
        }

        self.reserve(len);
        for _ in 0..len {
            let bit = reader.read_bit()?;
            self.write_bit(bit);
        }

        Ok(self)
    }

    /// Writes the low `n` bits of `value`.
    pub fn write_uint(&mut self, value: u64, n: usize) -> Result<&mut Self, WriteError> {
        if n > 64 {
            return Err(WriteError::TooManyBits(n));
        }

        Ok(self.push_bits(value, n))
    }

    /// Writes the whole value, [Primitive::BITS] bits.
    pub fn write_value<T: Primitive>(&mut self, value: T) -> &mut Self {
        self.push_bits(value.to_bits(), T::BITS)
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.write_value(value)
    }

    /// Writes the char's scalar value (32 bits).
    pub fn write_char(&mut self, value: char) -> &mut Self {
        self.write_value(value)
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_bit(value)
    }

    /// Writes every byte as 8 bits.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.reserve(bytes.len().saturating_mul(8));
        for &byte in bytes {
            self.push_bits(byte as u64, 8);
        }
        self
    }

    /// Writes the UTF-8 encoding of `s`, 8 bits per byte.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.write_bytes(s.as_bytes())
    }

    fn push_bits(&mut self, value: u64, n: usize) -> &mut Self {
        self.reserve(n);
        self.ensure_bytes(self.len + n);
        bits::write_bits_at(&mut self.data, self.len, value, n, self.order);
        self.len += n;
        self
    }

    /// `n` bits (max 64) starting at `start`; bits past the written end read as zero.
    fn padded_bits(&self, start: usize, n: usize) -> u64 {
        let n = n.min(64);
        let mut value = 0u64;

        for i in 0..n {
            let pos = start.saturating_add(i);
            let bit = pos < self.len
                && bits::read_bit_at(&self.data, pos, self.order).unwrap_or(false);
            let bit = bit as u64;
            match self.order {
                BitOrder::MsbFirst => value = (value << 1) | bit,
                BitOrder::LsbFirst => value |= bit << i,
            }
        }

        value
    }

    /// The first [Primitive::BITS] written bits as a value. Missing bits are zero and bits
    /// that do not fit are ignored.
    pub fn to_value<T: Primitive>(&self) -> Result<T, ReadError> {
        T::from_bits(self.padded_bits(0, T::BITS))
    }

    pub fn to_u8(&self) -> u8 {
        self.padded_bits(0, 8) as u8
    }

    pub fn to_i8(&self) -> i8 {
        sign_extend(self.padded_bits(0, 8), 8) as i8
    }

    pub fn to_u16(&self) -> u16 {
        self.padded_bits(0, 16) as u16
    }

    pub fn to_i16(&self) -> i16 {
        sign_extend(self.padded_bits(0, 16), 16) as i16
    }

    pub fn to_u32(&self) -> u32 {
        self.padded_bits(0, 32) as u32
    }

    pub fn to_i32(&self) -> i32 {
        sign_extend(self.padded_bits(0, 32), 32) as i32
    }

    pub fn to_u64(&self) -> u64 {
        self.padded_bits(0, 64)
    }

    pub fn to_i64(&self) -> i64 {
        self.padded_bits(0, 64) as i64
    }

    /// Written bits as bytes; the last byte is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..bytes_for(self.len)]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.truncate(bytes_for(self.len));
        self.data
    }

    /// Written bits as 64-bit blocks, each assembled in this writer's [BitOrder].
    /// The last block is zero-padded.
    pub fn to_words(&self) -> Vec<u64> {
        (0..self.len)
            .step_by(64)
            .map(|start| self.padded_bits(start, 64))
            .collect()
    }

    /// Written bytes decoded as UTF-8.
    pub fn to_utf8(&self) -> Result<String, ReadError> {
        Ok(String::from_utf8(self.to_bytes())?)
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// A reader over the written bits, starting at bit 0.
    pub fn to_reader(&self) -> BitReader<'_> {
        BitReader::from_writer(self)
    }

    /// Written plus free bits.
    pub fn size(&self) -> usize {
        self.capacity
    }

    pub fn used_size(&self) -> usize {
        self.len
    }

    pub fn free_size(&self) -> usize {
        self.capacity - self.len
    }

    pub fn has_free_bits(&self) -> bool {
        self.free_size() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Forgets all written bits; the capacity is kept.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.len = 0;
    }
}

impl Extend<bool> for BitWriter {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.write_bit(bit);
        }
    }
}

impl FromIterator<bool> for BitWriter {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut writer = BitWriter::new();
        writer.extend(iter);
        writer
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::BitBufferDef> for BitWriter {
    type Error = ReadError;

    fn try_from(value: crate::serde::BitBufferDef) -> Result<Self, Self::Error> {
        BitWriter::from_bytes(&value.bytes, value.len_bits, value.bit_order.into())
    }
}

#[cfg(feature = "serde")]
impl From<BitWriter> for crate::serde::BitBufferDef {
    fn from(value: BitWriter) -> Self {
        crate::serde::BitBufferDef {
            bit_order: value.order.into(),
            len_bits: value.len,
            bytes: value.into_bytes(),
        }
    }
}
