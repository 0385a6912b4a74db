use crate::{IoError, IoResult};

/// A forward-only cursor over a byte slice.
///
/// Every read checks the remaining length first, so malformed input surfaces
/// as [`IoError::UnexpectedEof`] instead of a panic.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        if move_by > self.remaining() {
            Err(IoError::UnexpectedEof {
                position: self.pos,
                needed: move_by,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    #[inline(always)]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.memory.len()
    }

    #[inline(always)]
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure_position(1)?;
        Ok(self.memory[self.pos])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::invalid_data("boolean", other)),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_i8(&mut self) -> IoResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_i16(&mut self) -> IoResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_memory(N)?);
        Ok(out)
    }

    /// Reads a compact-size integer and rejects values above `max`.
    /// Only the shortest encoding of a value is accepted.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let b = self.read_u8()?;
        let (value, min) = match b {
            0xFD => (self.read_u16()? as u64, 0xFD),
            0xFE => (self.read_u32()? as u64, 0x1_0000),
            0xFF => (self.read_u64()?, 0x1_0000_0000),
            _ => (b as u64, 0),
        };
        if value < min {
            return Err(IoError::invalid_data(
                "var int",
                format!("non-canonical 0x{b:02X} prefix for {value}"),
            ));
        }
        if value > max {
            return Err(IoError::too_large("var int", value, max));
        }
        Ok(value)
    }

    #[inline(always)]
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    pub fn read_var_memory(&mut self, max: usize) -> IoResult<&'a [u8]> {
        let length = self.read_var_int(max as u64)? as usize;
        self.read_memory(length)
    }

    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_var_memory(max)?.to_vec())
    }

    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let data = self.read_var_memory(max)?;
        String::from_utf8(data.to_vec()).map_err(|e| IoError::invalid_data("utf-8 string", e))
    }

    pub fn read_to_end(&mut self) -> &'a [u8] {
        let result = &self.memory[self.pos..];
        self.pos = self.memory.len();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryWriter;
    use proptest::prelude::*;

    #[test]
    fn test_reads_advance_cursor() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
        assert_eq!(reader.read_u32().unwrap(), 0x0706_0504);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_short_read_is_error_and_keeps_position() {
        let data = [0x01, 0x02];
        let mut reader = MemoryReader::new(&data);
        reader.read_u8().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            IoError::UnexpectedEof {
                position: 1,
                needed: 4,
                remaining: 1
            }
        );
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_var_int_rejects_non_canonical() {
        for data in [
            &[0xFD, 0x05, 0x00][..],
            &[0xFD, 0xFC, 0x00],
            &[0xFE, 0xFF, 0xFF, 0x00, 0x00],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
        ] {
            let mut reader = MemoryReader::new(data);
            assert!(matches!(
                reader.read_var_int(u64::MAX),
                Err(IoError::InvalidData { .. })
            ));
        }
        let data = [0xFD, 0xFD, 0x00, 0xFE, 0x00, 0x00, 0x01, 0x00];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0xFD);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1_0000);
    }

    #[test]
    fn test_var_int_max_enforced() {
        let data = [0xFD, 0x00, 0x01];
        let mut reader = MemoryReader::new(&data);
        assert!(matches!(
            reader.read_var_int(0xFF),
            Err(IoError::FormatTooLarge { actual: 0x100, .. })
        ));
    }

    #[test]
    fn test_var_bytes_truncated() {
        let data = [0x05, 0xAA, 0xBB];
        let mut reader = MemoryReader::new(&data);
        assert!(matches!(
            reader.read_var_bytes(16),
            Err(IoError::UnexpectedEof { needed: 5, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_var_int_matches_writer(value in any::<u64>()) {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value);
            let bytes = writer.into_bytes();
            prop_assert_eq!(bytes.len(), crate::helper::get_var_size(value));
            let mut reader = MemoryReader::new(&bytes);
            prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
            prop_assert!(reader.is_at_end());
        }
    }
}
