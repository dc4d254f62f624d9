//! Sequential bit reader over borrowed or owned bytes.

use std::{borrow::Cow, io::Read};

use crate::{
    bit_writer::BitWriter,
    bits::{self, bytes_for, sign_extend},
    errors::ReadError,
    order::{BitOrder, WriteConfig},
    primitive::Primitive,
};

/// Reads bits front to back.
///
/// Typed reads (`read_u32`, `read_value`, ...) either consume all of their bits or fail with
/// [ReadError::OutOfBounds] and leave the cursor where it was. The bulk reads (`read_bits`,
/// `read_bytes`, `read_string`, ...) return fewer bits when the buffer runs out.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: Cow<'a, [u8]>,
    len: usize,
    bit_pos: usize,
    order: BitOrder,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_order(data, BitOrder::default())
    }

    pub fn with_order(data: &'a [u8], order: BitOrder) -> Self {
        BitReader {
            len: data.len() * 8,
            data: Cow::Borrowed(data),
            bit_pos: 0,
            order,
        }
    }

    /// Reads only the first `len_bits` bits of `data`.
    pub fn from_bits(data: &'a [u8], len_bits: usize, order: BitOrder) -> Result<Self, ReadError> {
        if len_bits > data.len() * 8 {
            return Err(ReadError::OutOfBounds);
        }

        Ok(BitReader {
            data: Cow::Borrowed(data),
            len: len_bits,
            bit_pos: 0,
            order,
        })
    }

    /// Reads the UTF-8 bytes of `text`.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Reads the bits written so far by `writer`, in its [BitOrder].
    pub fn from_writer(writer: &'a BitWriter) -> Self {
        BitReader {
            data: Cow::Borrowed(writer.as_bytes()),
            len: writer.used_size(),
            bit_pos: 0,
            order: writer.bit_order(),
        }
    }

    /// Reads 64-bit blocks; bit 0 is the first bit of `words[0]` in the given order.
    pub fn from_words(words: &[u64], order: BitOrder) -> BitReader<'static> {
        let data: Vec<u8> = words
            .iter()
            .flat_map(|word| match order {
                BitOrder::MsbFirst => word.to_be_bytes(),
                BitOrder::LsbFirst => word.to_le_bytes(),
            })
            .collect();

        BitReader::from_vec(data, order)
    }

    fn from_vec(data: Vec<u8>, order: BitOrder) -> BitReader<'static> {
        BitReader {
            len: data.len() * 8,
            data: Cow::Owned(data),
            bit_pos: 0,
            order,
        }
    }

    /// Drains `source` and reads its bytes.
    pub fn from_read<R: Read>(
        mut source: R,
        order: BitOrder,
    ) -> Result<BitReader<'static>, ReadError> {
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;
        log::debug!("loaded {} bytes into bit reader", data.len());

        Ok(BitReader::from_vec(data, order))
    }

    /// Detaches the reader from borrowed data, keeping its position.
    pub fn into_owned(self) -> BitReader<'static> {
        BitReader {
            data: Cow::Owned(self.data.into_owned()),
            len: self.len,
            bit_pos: self.bit_pos,
            order: self.order,
        }
    }

    /// Reads the next bit.
    pub fn read_bit(&mut self) -> Result<bool, ReadError> {
        if self.bit_pos >= self.len {
            return Err(ReadError::OutOfBounds);
        }

        let bit = bits::read_bit_at(&self.data, self.bit_pos, self.order)?;
        self.bit_pos += 1;

        Ok(bit)
    }

    /// Reads up to `n` bits into a new writer; fewer if not enough bits are left.
    pub fn read_bits(&mut self, n: usize) -> BitWriter {
        let take = n.min(self.unread_size());
        if take < n {
            log::trace!("requested {} bits, only {} left", n, take);
        }

        let mut writer = BitWriter::from_config(&WriteConfig {
            bit_order: self.order,
            capacity_bits: take,
        });

        for _ in 0..take {
            match self.read_bit() {
                Ok(bit) => writer.write_bit(bit),
                Err(_) => break,
            };
        }

        writer
    }

    /// Reads `n` bits (max 64) as an unsigned value.
    pub fn read_uint(&mut self, n: usize) -> Result<u64, ReadError> {
        let value = self.peek_uint(self.bit_pos, n)?;
        self.bit_pos += n;

        Ok(value)
    }

    /// Reads `n` bits (max 64) as a two's complement value.
    pub fn read_int(&mut self, n: usize) -> Result<i64, ReadError> {
        Ok(sign_extend(self.read_uint(n)?, n))
    }

    /// Reads `n` bits (max 64) at `bit_pos` without moving the cursor.
    pub fn peek_uint(&self, bit_pos: usize, n: usize) -> Result<u64, ReadError> {
        if n > 64 {
            return Err(ReadError::TooManyBitsRead);
        }

        if bit_pos.checked_add(n).is_none_or(|end| end > self.len) {
            return Err(ReadError::OutOfBounds);
        }

        bits::read_bits_at(&self.data, bit_pos, n, self.order)
    }

    /// Reads the next [Primitive::BITS] bits as a `T`.
    pub fn read_value<T: Primitive>(&mut self) -> Result<T, ReadError> {
        let value = T::from_bits(self.peek_uint(self.bit_pos, T::BITS)?)?;
        self.bit_pos += T::BITS;

        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        self.read_value()
    }

    pub fn read_i8(&mut self) -> Result<i8, ReadError> {
        self.read_value()
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.read_value()
    }

    pub fn read_i16(&mut self) -> Result<i16, ReadError> {
        self.read_value()
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.read_value()
    }

    pub fn read_i32(&mut self) -> Result<i32, ReadError> {
        self.read_value()
    }

    pub fn read_u64(&mut self) -> Result<u64, ReadError> {
        self.read_value()
    }

    pub fn read_i64(&mut self) -> Result<i64, ReadError> {
        self.read_value()
    }

    pub fn read_char(&mut self) -> Result<char, ReadError> {
        self.read_value()
    }

    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        self.read_bit()
    }

    /// Reads up to `n` bits as bytes, the last one zero-padded.
    pub fn read_bytes(&mut self, n: usize) -> Vec<u8> {
        self.read_bits(n).into_bytes()
    }

    /// Reads up to `n` bits as 64-bit blocks, the last one zero-padded.
    pub fn read_words(&mut self, n: usize) -> Vec<u64> {
        self.read_bits(n).to_words()
    }

    /// Reads up to `n` bits and decodes them as UTF-8.
    pub fn read_string(&mut self, n: usize) -> Result<String, ReadError> {
        self.read_bits(n).to_utf8()
    }

    pub fn skip_bits(&mut self, n: usize) {
        self.bit_pos = self.bit_pos.saturating_add(n).min(self.len);
    }

    /// Moves the cursor forward to the next multiple of `bits`.
    pub fn align_to(&mut self, bits: usize) {
        if bits == 0 {
            return;
        }

        let rem = self.bit_pos % bits;
        if rem != 0 {
            self.skip_bits(bits - rem);
        }
    }

    pub fn seek(&mut self, bit_pos: usize) -> Result<(), ReadError> {
        if bit_pos > self.len {
            return Err(ReadError::OutOfBounds);
        }

        self.bit_pos = bit_pos;
        Ok(())
    }

    /// All bits, read and unread.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn read_size(&self) -> usize {
        self.bit_pos
    }

    pub fn unread_size(&self) -> usize {
        self.len - self.bit_pos
    }

    pub fn has_unread_bits(&self) -> bool {
        self.bit_pos < self.len
    }

    pub fn position(&self) -> usize {
        self.bit_pos
    }

    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Underlying bytes, including any read bits and padding past [BitReader::size].
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..bytes_for(self.len)]
    }
}

impl<'a> From<&'a [u8]> for BitReader<'a> {
    fn from(data: &'a [u8]) -> Self {
        BitReader::new(data)
    }
}

impl<'a> From<&'a BitWriter> for BitReader<'a> {
    fn from(writer: &'a BitWriter) -> Self {
        BitReader::from_writer(writer)
    }
}

impl From<Vec<u8>> for BitReader<'static> {
    fn from(data: Vec<u8>) -> Self {
        BitReader::from_vec(data, BitOrder::default())
    }
}

impl From<BitWriter> for BitReader<'static> {
    fn from(writer: BitWriter) -> Self {
        let len = writer.used_size();
        let order = writer.bit_order();
        BitReader {
            data: Cow::Owned(writer.into_bytes()),
            len,
            bit_pos: 0,
            order,
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unread = self.unread_size();
        (unread, Some(unread))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
