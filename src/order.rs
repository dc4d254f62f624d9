//! Bit order and writer configuration.

/// Layout of bits inside a byte, and the order in which a value's bits are emitted.
///
/// With [BitOrder::LsbFirst] bit index 0 is the low bit of the first byte and values are
/// written least significant bit first, so a `u32` lands in little-endian byte order.
/// [BitOrder::MsbFirst] mirrors that: bit 0 is the high bit and values come out big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    MsbFirst,
    #[default]
    LsbFirst,
}

impl BitOrder {
    /// Mask selecting the physical bit that holds logical bit `index` (0..8) of a byte.
    pub(crate) fn mask(self, index: usize) -> u8 {
        match self {
            BitOrder::MsbFirst => 0x80 >> index,
            BitOrder::LsbFirst => 1 << index,
        }
    }
}

/// Settings used by [crate::bit_writer::BitWriter::from_config].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConfig {
    pub bit_order: BitOrder,
    /// Bits available before the writer has to grow.
    pub capacity_bits: usize,
}

impl Default for WriteConfig {
    fn default() -> Self {
        WriteConfig {
            bit_order: BitOrder::default(),
            capacity_bits: 64,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::BitOrderDef> for BitOrder {
    fn from(value: crate::serde::BitOrderDef) -> Self {
        match value {
            crate::serde::BitOrderDef::MsbFirst => BitOrder::MsbFirst,
            crate::serde::BitOrderDef::LsbFirst => BitOrder::LsbFirst,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::WriteConfigDef> for WriteConfig {
    fn from(value: crate::serde::WriteConfigDef) -> Self {
        let defaults = WriteConfig::default();
        WriteConfig {
            bit_order: value.bit_order.into(),
            capacity_bits: value.capacity_bits.unwrap_or(defaults.capacity_bits),
        }
    }
}
