// Copyright (C) 2015-2025 The Neo Project.
//
// uint256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! 256-bit hash, used for transaction identifiers.

use crate::{CoreError, CoreResult};
use neo_config::HASH_SIZE;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stored in wire (little-endian) order; displayed reversed with `0x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct UInt256([u8; HASH_SIZE]);

impl UInt256 {
    pub const fn zero() -> Self {
        Self([0u8; HASH_SIZE])
    }

    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; HASH_SIZE] = value.try_into().map_err(|_| {
            CoreError::Encoding(format!("UInt256 needs {HASH_SIZE} bytes, got {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn to_array(&self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_hex_string(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        format!("0x{}", hex::encode(reversed))
    }

    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        if trimmed.len() != HASH_SIZE * 2 {
            return Err(CoreError::Encoding(format!("invalid UInt256 hex: {s}")));
        }
        let mut bytes = hex::decode(trimmed)?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        HASH_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array()?))
    }
}

impl From<[u8; HASH_SIZE]> for UInt256 {
    fn from(data: [u8; HASH_SIZE]) -> Self {
        Self(data)
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_roundtrip() {
        let text = format!("0x{}01", "00".repeat(31));
        let value = UInt256::parse(&text).unwrap();
        assert_eq!(value.as_bytes()[0], 0x01);
        assert_eq!(value.to_string(), text);
        assert!(UInt256::parse("0x00").is_err());
    }
}
