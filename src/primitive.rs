//! Fixed-width values that can be written to and read from a bit buffer whole.

use crate::{
    bits::{mask, sign_extend},
    errors::ReadError,
};

/// A value that occupies exactly [Primitive::BITS] bits in a buffer.
///
/// Signed types are stored as two's complement truncated to their width.
pub trait Primitive: Sized + Copy {
    const BITS: usize;

    /// The value as the low [Primitive::BITS] bits of a `u64`.
    fn to_bits(self) -> u64;

    /// Rebuilds the value from the low [Primitive::BITS] bits of `bits`; higher bits are ignored.
    fn from_bits(bits: u64) -> Result<Self, ReadError>;
}

macro_rules! unsigned_primitive {
    ($($t:ty),*) => {$(
        impl Primitive for $t {
            const BITS: usize = <$t>::BITS as usize;

            fn to_bits(self) -> u64 {
                self as u64
            }

            fn from_bits(bits: u64) -> Result<Self, ReadError> {
                Ok((bits & mask(<Self as Primitive>::BITS)) as $t)
            }
        }
    )*};
}

macro_rules! signed_primitive {
    ($($t:ty),*) => {$(
        impl Primitive for $t {
            const BITS: usize = <$t>::BITS as usize;

            fn to_bits(self) -> u64 {
                (self as i64 as u64) & mask(<Self as Primitive>::BITS)
            }

            fn from_bits(bits: u64) -> Result<Self, ReadError> {
                let width = <Self as Primitive>::BITS;
                Ok(sign_extend(bits & mask(width), width) as $t)
            }
        }
    )*};
}

unsigned_primitive!(u8, u16, u32, u64);
signed_primitive!(i8, i16, i32, i64);

impl Primitive for bool {
    const BITS: usize = 1;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Result<Self, ReadError> {
        Ok(bits & 1 == 1)
    }
}

impl Primitive for char {
    const BITS: usize = 32;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Result<Self, ReadError> {
        let code = (bits & mask(Self::BITS)) as u32;
        char::from_u32(code).ok_or(ReadError::InvalidChar(code))
    }
}
