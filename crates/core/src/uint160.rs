// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! 160-bit scripthash.

use crate::crypto::{hash160, sha256};
use crate::{CoreError, CoreResult};
use neo_config::ADDRESS_SIZE;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use neo_vm::{ContractParameter, PushValue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A 20-byte scripthash identifying an account or contract.
///
/// Bytes are stored in wire (little-endian) order. The display form is the
/// reversed, `0x`-prefixed hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UInt160([u8; ADDRESS_SIZE]);

impl UInt160 {
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_SIZE])
    }

    /// Wraps bytes that are already in little-endian order.
    pub const fn from_le_bytes(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] = value.try_into().map_err(|_| {
            CoreError::Encoding(format!(
                "UInt160 needs {ADDRESS_SIZE} bytes, got {}",
                value.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Scripthash of a verification or contract script.
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Wire (little-endian) bytes.
    pub fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Wire-order hex without prefix.
    pub fn to_le_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Display-order hex with `0x` prefix.
    pub fn to_hex_string(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        format!("0x{}", hex::encode(reversed))
    }

    /// Parses the display (big-endian) form, with or without `0x`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        if trimmed.len() != ADDRESS_SIZE * 2 {
            return Err(CoreError::Encoding(format!("invalid UInt160 hex: {s}")));
        }
        let mut bytes = hex::decode(trimmed)?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Base58Check address with the given version byte.
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(25);
        data.push(version);
        data.extend_from_slice(&self.0);
        let checksum = sha256(&sha256(&data));
        data.extend_from_slice(&checksum[..4]);
        bs58::encode(data).into_string()
    }

    pub fn from_address(address: &str, version: u8) -> CoreResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| CoreError::InvalidAddress(format!("{address}: {e}")))?;
        if decoded.len() != 25 {
            return Err(CoreError::InvalidAddress(format!(
                "{address}: decoded length {}",
                decoded.len()
            )));
        }
        if decoded[0] != version {
            return Err(CoreError::InvalidAddress(format!(
                "{address}: version 0x{:02x}, expected 0x{version:02x}",
                decoded[0]
            )));
        }
        let checksum = sha256(&sha256(&decoded[..21]));
        if checksum[..4] != decoded[21..] {
            return Err(CoreError::InvalidAddress(format!("{address}: bad checksum")));
        }
        Self::from_bytes(&decoded[1..21])
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        ADDRESS_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array()?))
    }
}

/// Orders by numeric value, most significant byte first.
impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; ADDRESS_SIZE]> for UInt160 {
    fn from(data: [u8; ADDRESS_SIZE]) -> Self {
        Self(data)
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        ContractParameter::Hash160(value.0)
    }
}

impl From<UInt160> for PushValue {
    fn from(value: UInt160) -> Self {
        PushValue::Param(value.into())
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
