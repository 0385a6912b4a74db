//! Writer/reader interplay through the public API.

use neo_io::{helper, BinaryWriter, IoError, MemoryReader};

#[test]
fn test_compact_size_boundaries() {
    let cases: [(u64, &[u8]); 6] = [
        (0xFC, &[0xFC]),
        (0xFD, &[0xFD, 0xFD, 0x00]),
        (0xFFFF, &[0xFD, 0xFF, 0xFF]),
        (0x1_0000, &[0xFE, 0x00, 0x00, 0x01, 0x00]),
        (0xFFFF_FFFF, &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
        (0x1_0000_0000, &[0xFF, 0, 0, 0, 0, 1, 0, 0, 0]),
    ];
    for (value, expected) in cases {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value);
        assert_eq!(writer.to_bytes(), expected, "value {value:#x}");
        assert_eq!(helper::get_var_size(value), expected.len());
    }
}

#[test]
fn test_mixed_record() {
    let mut writer = BinaryWriter::new();
    writer.write_u8(0);
    writer.write_u32(0xDEAD_BEEF);
    writer.write_i64(-1);
    writer.write_var_string("neo");
    writer.write_bool(true);
    let bytes = writer.into_bytes();

    let mut reader = MemoryReader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0);
    assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
    assert_eq!(reader.read_i64().unwrap(), -1);
    assert_eq!(reader.read_var_string(16).unwrap(), "neo");
    assert!(reader.read_bool().unwrap());
    assert!(reader.is_at_end());
}

#[test]
fn test_invalid_bool_and_utf8() {
    let mut reader = MemoryReader::new(&[0x02]);
    assert!(matches!(reader.read_bool(), Err(IoError::InvalidData { .. })));

    let mut reader = MemoryReader::new(&[0x02, 0xC3, 0x28]);
    assert!(matches!(
        reader.read_var_string(8),
        Err(IoError::InvalidData { .. })
    ));
}

#[test]
fn test_var_string_length_cap() {
    let mut writer = BinaryWriter::new();
    writer.write_var_string("too long for the cap");
    let bytes = writer.into_bytes();
    let mut reader = MemoryReader::new(&bytes);
    assert!(matches!(
        reader.read_var_string(4),
        Err(IoError::FormatTooLarge { max: 4, .. })
    ));
}
