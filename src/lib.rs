//! # bits
//!
//! Sequential bit-level reading and writing.
//!
//! A [bit_writer::BitWriter] appends single bits or whole primitives (`u8` to `i64`, `bool`,
//! `char`), byte slices and strings to a growable buffer. A [bit_reader::BitReader] walks any
//! byte buffer, word buffer or writer front to back and reads the same things back.
//! Both share a [order::BitOrder] which decides how bits are laid out inside each byte.
//!
//! ## Example
//!
//! ```
//! use bits::bit_writer::BitWriter;
//!
//! let numbers = [-7, 26, 0, 5435];
//! let mut writer = BitWriter::with_capacity(numbers.len() * 32);
//! for n in numbers {
//!     writer.write_i32(n);
//! }
//! writer.write_str("ok");
//!
//! let mut reader = writer.to_reader();
//! for n in numbers {
//!     assert_eq!(reader.read_i32().unwrap(), n);
//! }
//! assert_eq!(reader.read_string(16).unwrap(), "ok");
//! assert!(!reader.has_unread_bits());
//! ```

pub mod bit_reader;
pub mod bit_writer;
pub mod bits;
pub mod errors;
pub mod order;
pub mod primitive;
#[cfg(feature = "serde")]
pub mod serde;
