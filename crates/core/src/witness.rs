// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::UInt160;
use neo_io::serializable::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Maximum invocation script length accepted on the wire.
pub const MAX_INVOCATION_SCRIPT: usize = 1024;
/// Maximum verification script length accepted on the wire.
pub const MAX_VERIFICATION_SCRIPT: usize = 1024;

/// Authorization proof for one signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    pub invocation_script: Vec<u8>,
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// An unsigned witness carrying only the verification script.
    pub fn placeholder(verification_script: Vec<u8>) -> Self {
        Self::new(Vec::new(), verification_script)
    }

    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script)
    }

    pub fn is_signed(&self) -> bool {
        !self.invocation_script.is_empty()
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_bytes_size(&self.invocation_script) + get_var_bytes_size(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script);
        writer.write_var_bytes(&self.verification_script);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_INVOCATION_SCRIPT)?;
        let verification_script = reader.read_var_bytes(MAX_VERIFICATION_SCRIPT)?;
        Ok(Self {
            invocation_script,
            verification_script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::{IoError, SerializableExt};

    #[test]
    fn test_compact_size_prefixes() {
        let witness = Witness::new(vec![0xAA; 0xFC], vec![0xBB; 0xFD]);
        let bytes = witness.to_array().unwrap();
        assert_eq!(bytes[0], 0xFC);
        assert_eq!(&bytes[1 + 0xFC..1 + 0xFC + 3], &[0xFD, 0xFD, 0x00]);
        assert_eq!(bytes.len(), witness.size());
        assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
    }

    #[test]
    fn test_oversized_invocation_rejected() {
        let witness = Witness::new(vec![0; MAX_INVOCATION_SCRIPT + 1], vec![]);
        let bytes = witness.to_array().unwrap();
        assert!(matches!(
            Witness::from_array(&bytes),
            Err(IoError::FormatTooLarge { .. })
        ));
    }

    #[test]
    fn test_script_hash_of_empty_verification() {
        let witness = Witness::placeholder(vec![]);
        assert!(!witness.is_signed());
        assert_eq!(witness.script_hash(), UInt160::from_script(&[]));
    }
}
