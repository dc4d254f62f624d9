//! Serde-friendly descriptions of bit orders, writer settings and written buffers.
//!
//! These types are what goes over the wire or into a config file; convert them into the core
//! `bits` types with `From`/`TryFrom`. A [crate::bit_writer::BitWriter] serializes through
//! [BitBufferDef].

use serde::{Deserialize, Serialize};

/// Bit order inside a byte.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum BitOrderDef {
    /// Most‑significant bit first.
    MsbFirst,
    #[default]
    /// Least‑significant bit first.
    LsbFirst,
}

/// Writer settings, e.g. loaded from a JSON file.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WriteConfigDef {
    #[serde(default)]
    pub bit_order: BitOrderDef,
    /// Initial capacity in bits; 64 when omitted.
    #[serde(default)]
    pub capacity_bits: Option<usize>,
}

/// A written bit buffer: the bytes plus how many of their bits are in use.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BitBufferDef {
    pub bytes: Vec<u8>,
    pub len_bits: usize,
    #[serde(default)]
    pub bit_order: BitOrderDef,
}

impl From<crate::order::BitOrder> for BitOrderDef {
    fn from(value: crate::order::BitOrder) -> Self {
        match value {
            crate::order::BitOrder::MsbFirst => BitOrderDef::MsbFirst,
            crate::order::BitOrder::LsbFirst => BitOrderDef::LsbFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bit_writer::BitWriter,
        order::{BitOrder, WriteConfig},
    };

    use super::*;

    #[test]
    fn test_write_config_from_json() {
        let def: WriteConfigDef = serde_json::from_str(r#"{ "bit_order": "MsbFirst" }"#).unwrap();
        let config: WriteConfig = def.into();
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
        assert_eq!(config.capacity_bits, 64);

        let def: WriteConfigDef = serde_json::from_str(r#"{ "capacity_bits": 8 }"#).unwrap();
        let config: WriteConfig = def.into();
        assert_eq!(config.bit_order, BitOrder::LsbFirst);
        assert_eq!(BitWriter::from_config(&config).size(), 8);
    }

    #[test]
    fn test_huge_capacity_from_json() {
        let def: WriteConfigDef =
            serde_json::from_str(r#"{ "capacity_bits": 18446744073709551615 }"#).unwrap();
        let config: WriteConfig = def.into();
        let mut writer = BitWriter::from_config(&config);
        assert_eq!(writer.size(), u64::MAX as usize);

        writer.write_u8(0x5a);
        assert_eq!(writer.to_bytes(), vec![0x5a]);
    }

    #[test]
    fn test_writer_serializes_written_bits() {
        let mut writer = BitWriter::with_capacity(128);
        writer.write_u8(0xab).write_bit(true);

        let json = serde_json::to_value(&writer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "bytes": [0xab, 1], "len_bits": 9, "bit_order": "LsbFirst" })
        );

        let restored: BitWriter = serde_json::from_value(json).unwrap();
        assert_eq!(restored.used_size(), 9);
        assert_eq!(restored.to_bytes(), writer.to_bytes());
    }

    #[test]
    fn test_writer_rejects_short_buffer() {
        let json = r#"{ "bytes": [1], "len_bits": 12 }"#;
        assert!(serde_json::from_str::<BitWriter>(json).is_err());
    }
}
