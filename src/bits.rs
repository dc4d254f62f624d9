//! Low-level bit read and write helpers for byte slices.
//!
//! Bit `i` lives in byte `i / 8`; which bit of that byte is decided by [BitOrder].
//! Multi-bit values follow the same order: `MsbFirst` emits the most significant bit first,
//! `LsbFirst` the least significant.

use crate::{errors::ReadError, order::BitOrder};

/// Number of bytes needed to hold `bits` bits.
pub fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Mask covering the low `n` bits of a `u64`.
pub fn mask(n: usize) -> u64 {
    if n >= 64 { u64::MAX } else { (1u64 << n) - 1 }
}

/// Reads a single bit at `bit_pos`.
pub fn read_bit_at(data: &[u8], bit_pos: usize, order: BitOrder) -> Result<bool, ReadError> {
    let byte = data.get(bit_pos / 8).ok_or(ReadError::OutOfBounds)?;

    Ok(byte & order.mask(bit_pos % 8) != 0)
}

/// Sets or clears the bit at `bit_pos`. Returns false if `bit_pos` is outside `data`.
pub fn write_bit_at(data: &mut [u8], bit_pos: usize, bit: bool, order: BitOrder) -> bool {
    let Some(byte) = data.get_mut(bit_pos / 8) else {
        return false;
    };

    let m = order.mask(bit_pos % 8);
    if bit {
        *byte |= m;
    } else {
        *byte &= !m;
    }

    true
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits).
pub fn read_bits_at(
    data: &[u8],
    bit_pos: usize,
    n: usize,
    order: BitOrder,
) -> Result<u64, ReadError> {
    if n > 64 {
        return Err(ReadError::TooManyBitsRead);
    }

    if bit_pos
        .checked_add(n)
        .is_none_or(|end| end > data.len() * 8)
    {
        return Err(ReadError::OutOfBounds);
    }

    let mut value = 0u64;

    for i in 0..n {
        let bit = read_bit_at(data, bit_pos + i, order)? as u64;
        match order {
            BitOrder::MsbFirst => value = (value << 1) | bit,
            BitOrder::LsbFirst => value |= bit << i,
        }
    }

    Ok(value)
}

/// Writes the low `n` bits of `value` starting at `bit_pos`. Returns false, leaving `data`
/// untouched, if the range does not fit.
pub fn write_bits_at(
    data: &mut [u8],
    bit_pos: usize,
    value: u64,
    n: usize,
    order: BitOrder,
) -> bool {
    let n = n.min(64);
    if bit_pos
        .checked_add(n)
        .is_none_or(|end| end > data.len() * 8)
    {
        return false;
    }

    for i in 0..n {
        let shift = match order {
            BitOrder::MsbFirst => n - 1 - i,
            BitOrder::LsbFirst => i,
        };
        write_bit_at(data, bit_pos + i, (value >> shift) & 1 == 1, order);
    }

    true
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return value as i64;
    }

    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bit_at() {
        let data = [0b1000_0000];
        assert!(read_bit_at(&data, 0, BitOrder::MsbFirst).unwrap());
        assert!(!read_bit_at(&data, 0, BitOrder::LsbFirst).unwrap());
        assert!(read_bit_at(&data, 7, BitOrder::LsbFirst).unwrap());
    }

    #[test]
    fn test_read_bits_at() {
        let data = [0b1111_0000];
        assert_eq!(read_bits_at(&data, 0, 8, BitOrder::MsbFirst).unwrap(), 0b1111_0000);
        assert_eq!(read_bits_at(&data, 0, 8, BitOrder::LsbFirst).unwrap(), 0b1111_0000);
        assert_eq!(read_bits_at(&data, 0, 4, BitOrder::MsbFirst).unwrap(), 0b1111);
        assert_eq!(read_bits_at(&data, 0, 4, BitOrder::LsbFirst).unwrap(), 0);
    }

    #[test]
    fn test_read_bits_little_endian_words() {
        let data = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_bits_at(&data, 0, 32, BitOrder::LsbFirst).unwrap(), 0x1234_5678);
        assert_eq!(read_bits_at(&data, 0, 32, BitOrder::MsbFirst).unwrap(), 0x7856_3412);
    }

    #[test]
    fn test_read_bits_out_of_bounds() {
        let data = [0b1111_1111];
        assert_eq!(
            read_bits_at(&data, 0, 9, BitOrder::MsbFirst).unwrap_err(),
            ReadError::OutOfBounds
        );
        assert_eq!(
            read_bits_at(&data, usize::MAX, 2, BitOrder::MsbFirst).unwrap_err(),
            ReadError::OutOfBounds
        );
    }

    #[test]
    fn test_read_bits_more_than_64() {
        let data = [0u8; 16];
        assert_eq!(
            read_bits_at(&data, 0, 65, BitOrder::LsbFirst).unwrap_err(),
            ReadError::TooManyBitsRead
        );
    }

    #[test]
    fn test_write_bits_at() {
        let mut data = [0u8; 2];
        assert!(write_bits_at(&mut data, 4, 0b1011, 4, BitOrder::MsbFirst));
        assert_eq!(data, [0b0000_1011, 0]);

        let mut data = [0u8; 2];
        assert!(write_bits_at(&mut data, 4, 0b1011, 4, BitOrder::LsbFirst));
        assert_eq!(data, [0b1011_0000, 0]);
    }

    #[test]
    fn test_write_bits_at_does_not_fit() {
        let mut data = [0u8; 1];
        assert!(!write_bits_at(&mut data, 4, 0xff, 8, BitOrder::LsbFirst));
        assert_eq!(data, [0]);
    }

    #[test]
    fn test_write_bit_at_clears() {
        let mut data = [0xff];
        assert!(write_bit_at(&mut data, 0, false, BitOrder::LsbFirst));
        assert_eq!(data, [0xfe]);
        assert!(!write_bit_at(&mut data, 8, true, BitOrder::LsbFirst));
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0b1111_1111, 8), -1);
        assert_eq!(sign_extend(0b0111_1111, 8), 127);
        assert_eq!(sign_extend(u64::MAX, 64), -1);
        assert_eq!(sign_extend(1, 0), 0);
    }

    #[test]
    fn test_mask_and_bytes_for() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(3), 0b111);
        assert_eq!(mask(64), u64::MAX);
        assert_eq!(bytes_for(0), 0);
        assert_eq!(bytes_for(9), 2);
    }
}
