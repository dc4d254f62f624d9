//! Error types for bit reading and writing.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced when reading bits from a buffer
/// (e.g. during [crate::bit_reader::BitReader::read_u32]).
#[derive(Debug, Error)]
pub enum ReadError {
    /// Requested bit range is beyond the end of the data.
    #[error("requested bits are beyond the end of the buffer")]
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    #[error("cannot read more than 64 bits into a single value")]
    TooManyBitsRead,
    /// Decoded 32 bits are not a Unicode scalar value.
    #[error("{0:#x} is not a valid char")]
    InvalidChar(u32),
    /// Bytes read as text are not valid UTF-8.
    #[error(transparent)]
    InvalidUtf8(#[from] FromUtf8Error),
    /// The source stream failed while being drained.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for ReadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ReadError::OutOfBounds, ReadError::OutOfBounds) => true,
            (ReadError::TooManyBitsRead, ReadError::TooManyBitsRead) => true,
            (ReadError::InvalidChar(a), ReadError::InvalidChar(b)) => a == b,
            (ReadError::InvalidUtf8(a), ReadError::InvalidUtf8(b)) => a == b,
            (ReadError::Io(a), ReadError::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

/// Errors produced when writing raw values into a [crate::bit_writer::BitWriter].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// More than 64 bits were requested from a single value.
    #[error("cannot write {0} bits from a 64-bit value")]
    TooManyBits(usize),
}
