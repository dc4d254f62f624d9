use bits::{bit_reader::BitReader, bit_writer::BitWriter, order::BitOrder};

#[test]
fn test_ints_written_and_read_back() {
    let source_numbers = [-7, 26, 0, 5435, -4, 1, 476, 0, 43, 16];

    let mut bit_writer = BitWriter::with_capacity(source_numbers.len() * 32);
    for n in source_numbers {
        bit_writer.write_i32(n);
    }
    assert!(!bit_writer.has_free_bits());

    let mut bit_reader = bit_writer.to_reader();
    assert_eq!(bit_reader.size(), bit_writer.used_size());

    for original_number in source_numbers {
        assert_eq!(bit_reader.read_i32().unwrap(), original_number);
    }
    assert!(!bit_reader.has_unread_bits());
}

#[test]
fn test_mixed_record() {
    let mut bit_writer = BitWriter::with_order(BitOrder::MsbFirst);
    bit_writer
        .write_bool(true)
        .write_uint(5, 3)
        .unwrap()
        .write_i16(-1234)
        .write_char('é')
        .write_u64(u64::MAX - 1)
        .write_str("bits");

    let bytes = bit_writer.to_bytes();
    let mut bit_reader = BitReader::with_order(&bytes, BitOrder::MsbFirst);

    assert!(bit_reader.read_bool().unwrap());
    assert_eq!(bit_reader.read_uint(3).unwrap(), 5);
    assert_eq!(bit_reader.read_i16().unwrap(), -1234);
    assert_eq!(bit_reader.read_char().unwrap(), 'é');
    assert_eq!(bit_reader.read_u64().unwrap(), u64::MAX - 1);
    assert_eq!(bit_reader.read_string(32).unwrap(), "bits");

    // padding up to the byte boundary
    assert_eq!(bit_reader.unread_size(), 4);
}

#[test]
fn test_copy_bits_between_writers() {
    let mut first = BitWriter::new();
    first.write_u16(0xbeef);

    let mut second = BitWriter::new();
    second.write_bit(false);
    second.write_bits(&mut first.to_reader(), 16).unwrap();

    let mut bit_reader = BitReader::from(second);
    assert!(!bit_reader.read_bit().unwrap());
    assert_eq!(bit_reader.read_u16().unwrap(), 0xbeef);
}

#[test]
fn test_read_bits_into_writer_then_export() {
    let words = [0x1122_3344_5566_7788u64];
    let mut bit_reader = BitReader::from_words(&words, BitOrder::LsbFirst);

    let low = bit_reader.read_bits(32);
    assert_eq!(low.to_u32(), 0x5566_7788);
    assert_eq!(low.to_bytes(), vec![0x88, 0x77, 0x66, 0x55]);

    let high = bit_reader.read_words(64);
    assert_eq!(high, vec![0x1122_3344]);
}
