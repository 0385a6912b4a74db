//! The `Serializable` contract shared by every wire type, plus array helpers.

use crate::{BinaryWriter, IoError, IoResult, MemoryReader};

/// A value with a canonical binary encoding.
pub trait Serializable {
    /// Exact encoded length in bytes.
    fn size(&self) -> usize;

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Reads one value, leaving the reader just past it.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Whole-buffer conversions.
pub trait SerializableExt: Serializable {
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decodes exactly one value; leftover bytes are an error.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        if !reader.is_at_end() {
            return Err(IoError::invalid_data(
                "trailing data",
                format!("{} bytes", reader.remaining()),
            ));
        }
        Ok(value)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Length-prefixed arrays and size arithmetic.
pub mod helper {
    use super::Serializable;
    use crate::{BinaryWriter, IoResult, MemoryReader};

    pub fn serialize_array<T: Serializable>(
        items: &[T],
        writer: &mut BinaryWriter,
    ) -> IoResult<()> {
        writer.write_var_int(items.len() as u64);
        items.iter().try_for_each(|item| item.serialize(writer))
    }

    /// Reads a count, capped at `max`, followed by that many items.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int(max as u64)? as usize;
        (0..count).map(|_| T::deserialize(reader)).collect()
    }

    pub fn get_array_size<T: Serializable>(items: &[T]) -> usize {
        get_var_size(items.len() as u64) + items.iter().map(Serializable::size).sum::<usize>()
    }

    pub fn get_var_bytes_size(bytes: &[u8]) -> usize {
        get_var_size(bytes.len() as u64) + bytes.len()
    }

    /// Width of the compact-size prefix for `value`.
    pub fn get_var_size(value: u64) -> usize {
        match value {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x1_0000..=0xFFFF_FFFF => 5,
            _ => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(u8, Vec<u8>);

    impl Serializable for Pair {
        fn size(&self) -> usize {
            1 + helper::get_var_bytes_size(&self.1)
        }

        fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
            writer.write_u8(self.0);
            writer.write_var_bytes(&self.1);
            Ok(())
        }

        fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
            Ok(Pair(reader.read_u8()?, reader.read_var_bytes(8)?))
        }
    }

    #[test]
    fn test_array_helpers() {
        let items = vec![Pair(1, vec![0xAA]), Pair(2, vec![])];
        let mut writer = BinaryWriter::new();
        helper::serialize_array(&items, &mut writer).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes, vec![0x02, 0x01, 0x01, 0xAA, 0x02, 0x00]);
        assert_eq!(bytes.len(), helper::get_array_size(&items));

        let mut reader = MemoryReader::new(&bytes);
        let back: Vec<Pair> = helper::deserialize_array(&mut reader, 16).unwrap();
        assert_eq!(back, items);
    }

    #[test]
    fn test_array_count_limit() {
        let bytes = [0x03, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
        let mut reader = MemoryReader::new(&bytes);
        assert!(helper::deserialize_array::<Pair>(&mut reader, 2).is_err());
    }

    #[test]
    fn test_from_array_rejects_trailing_bytes() {
        let pair = Pair(7, vec![1, 2]);
        let mut bytes = pair.to_array().unwrap();
        assert_eq!(Pair::from_array(&bytes).unwrap(), pair);
        bytes.push(0);
        assert!(matches!(
            Pair::from_array(&bytes),
            Err(IoError::InvalidData { .. })
        ));
    }
}
