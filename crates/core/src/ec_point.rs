// Copyright (C) 2015-2025 The Neo Project.
//
// ec_point.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! secp256r1 public keys in compressed form.

use crate::{CoreError, CoreResult};
use neo_config::PUBLIC_KEY_SIZE;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_vm::{ContractParameter, PushValue};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use std::cmp::Ordering;
use std::fmt;

/// A validated point on secp256r1, held as its 33-byte SEC1 compressed
/// encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ECPoint([u8; PUBLIC_KEY_SIZE]);

impl ECPoint {
    /// Accepts compressed (33-byte) or uncompressed (65-byte) SEC1 input.
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let key = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| CoreError::InvalidPublicKey(hex::encode(bytes)))?;
        Ok(Self::from(&key))
    }

    pub fn from_hex(text: &str) -> CoreResult<Self> {
        let bytes = hex::decode(text.strip_prefix("0x").unwrap_or(text))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_array(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_verifying_key(&self) -> CoreResult<p256::ecdsa::VerifyingKey> {
        p256::ecdsa::VerifyingKey::from_sec1_bytes(&self.0)
            .map_err(|_| CoreError::InvalidPublicKey(self.to_hex()))
    }
}

impl From<&p256::PublicKey> for ECPoint {
    fn from(key: &p256::PublicKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(encoded.as_bytes());
        Self(bytes)
    }
}

impl From<&p256::ecdsa::VerifyingKey> for ECPoint {
    fn from(key: &p256::ecdsa::VerifyingKey) -> Self {
        Self::from(&p256::PublicKey::from(key))
    }
}

/// Orders by X coordinate, then by the parity prefix.
impl Ord for ECPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0[1..]
            .cmp(&other.0[1..])
            .then_with(|| self.0[0].cmp(&other.0[0]))
    }
}

impl PartialOrd for ECPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serializable for ECPoint {
    fn size(&self) -> usize {
        PUBLIC_KEY_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let prefix = reader.peek()?;
        if prefix != 0x02 && prefix != 0x03 {
            return Err(IoError::invalid_data("public key prefix", format!("0x{prefix:02x}")));
        }
        let bytes: [u8; PUBLIC_KEY_SIZE] = reader.read_array()?;
        Self::from_bytes(&bytes).map_err(|e| IoError::invalid_data("public key", e))
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ECPoint({})", self.to_hex())
    }
}

impl From<ECPoint> for ContractParameter {
    fn from(value: ECPoint) -> Self {
        ContractParameter::PublicKey(value.0)
    }
}

impl From<ECPoint> for PushValue {
    fn from(value: ECPoint) -> Self {
        PushValue::Param(value.into())
    }
}
