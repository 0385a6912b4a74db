// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes: a usage tag followed by a usage-specific payload.

use crate::error::{CoreError, CoreResult};
use crate::UInt256;
use neo_config::HASH_SIZE;
use neo_io::serializable::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use std::fmt;

/// Maximum length of an oracle response result.
pub const MAX_ATTRIBUTE_DATA: usize = u16::MAX as usize;

/// Recognised attribute usages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AttributeUsage {
    HighPriority = 0x01,
    OracleResponse = 0x11,
    NotValidBefore = 0x20,
    Conflicts = 0x21,
}

impl AttributeUsage {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::HighPriority),
            0x11 => Some(Self::OracleResponse),
            0x20 => Some(Self::NotValidBefore),
            0x21 => Some(Self::Conflicts),
            _ => None,
        }
    }

    /// Whether a transaction may carry more than one attribute of this usage.
    pub fn allows_multiple(self) -> bool {
        matches!(self, Self::Conflicts)
    }
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighPriority => "HighPriority",
            Self::OracleResponse => "OracleResponse",
            Self::NotValidBefore => "NotValidBefore",
            Self::Conflicts => "Conflicts",
        };
        f.write_str(name)
    }
}

/// Oracle response codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OracleResponseCode {
    Success = 0x00,
    ProtocolNotSupported = 0x10,
    ConsensusUnreachable = 0x12,
    NotFound = 0x14,
    Timeout = 0x16,
    Forbidden = 0x18,
    ResponseTooLarge = 0x1a,
    InsufficientFunds = 0x1c,
    ContentTypeNotSupported = 0x1f,
    Error = 0xff,
}

impl OracleResponseCode {
    pub fn from_byte(value: u8) -> Option<Self> {
        Some(match value {
            0x00 => Self::Success,
            0x10 => Self::ProtocolNotSupported,
            0x12 => Self::ConsensusUnreachable,
            0x14 => Self::NotFound,
            0x16 => Self::Timeout,
            0x18 => Self::Forbidden,
            0x1a => Self::ResponseTooLarge,
            0x1c => Self::InsufficientFunds,
            0x1f => Self::ContentTypeNotSupported,
            0xff => Self::Error,
            _ => return None,
        })
    }
}

/// A transaction attribute. Each usage has a fixed payload layout:
/// nothing for HighPriority, a little-endian height for NotValidBefore,
/// a hash for Conflicts, and id, code and a length-prefixed result for
/// OracleResponse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionAttribute {
    HighPriority,
    OracleResponse {
        id: u64,
        code: OracleResponseCode,
        result: Vec<u8>,
    },
    NotValidBefore {
        height: u32,
    },
    Conflicts {
        hash: UInt256,
    },
}

impl TransactionAttribute {
    pub fn high_priority() -> Self {
        Self::HighPriority
    }

    pub fn not_valid_before(height: u32) -> Self {
        Self::NotValidBefore { height }
    }

    pub fn conflicts(hash: &UInt256) -> Self {
        Self::Conflicts { hash: *hash }
    }

    pub fn oracle_response(id: u64, code: OracleResponseCode, result: &[u8]) -> CoreResult<Self> {
        let attribute = Self::OracleResponse {
            id,
            code,
            result: result.to_vec(),
        };
        attribute.validate()?;
        Ok(attribute)
    }

    pub fn usage(&self) -> AttributeUsage {
        match self {
            Self::HighPriority => AttributeUsage::HighPriority,
            Self::OracleResponse { .. } => AttributeUsage::OracleResponse,
            Self::NotValidBefore { .. } => AttributeUsage::NotValidBefore,
            Self::Conflicts { .. } => AttributeUsage::Conflicts,
        }
    }

    /// Rejects payloads that cannot be encoded.
    pub fn validate(&self) -> CoreResult<()> {
        if let Self::OracleResponse { result, .. } = self {
            if result.len() > MAX_ATTRIBUTE_DATA {
                return Err(CoreError::InvalidAttribute(format!(
                    "oracle result of {} bytes exceeds {MAX_ATTRIBUTE_DATA}",
                    result.len()
                )));
            }
        }
        Ok(())
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self {
            Self::HighPriority => 0,
            Self::OracleResponse { result, .. } => 8 + 1 + get_var_bytes_size(result),
            Self::NotValidBefore { .. } => 4,
            Self::Conflicts { .. } => HASH_SIZE,
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.usage() as u8);
        match self {
            Self::HighPriority => {}
            Self::OracleResponse { id, code, result } => {
                if result.len() > MAX_ATTRIBUTE_DATA {
                    return Err(IoError::too_large(
                        "oracle result",
                        result.len() as u64,
                        MAX_ATTRIBUTE_DATA as u64,
                    ));
                }
                writer.write_u64(*id);
                writer.write_u8(*code as u8);
                writer.write_var_bytes(result);
            }
            Self::NotValidBefore { height } => writer.write_u32(*height),
            Self::Conflicts { hash } => hash.serialize(writer)?,
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let position = reader.position();
        let byte = reader.read_u8()?;
        let usage = AttributeUsage::from_byte(byte).ok_or_else(|| {
            IoError::invalid_data("attribute usage", format!("0x{byte:02x} at {position}"))
        })?;
        Ok(match usage {
            AttributeUsage::HighPriority => Self::HighPriority,
            AttributeUsage::OracleResponse => {
                let id = reader.read_u64()?;
                let byte = reader.read_u8()?;
                let code = OracleResponseCode::from_byte(byte).ok_or_else(|| {
                    IoError::invalid_data("oracle response code", format!("0x{byte:02x}"))
                })?;
                let result = reader.read_var_bytes(MAX_ATTRIBUTE_DATA)?;
                Self::OracleResponse { id, code, result }
            }
            AttributeUsage::NotValidBefore => Self::NotValidBefore {
                height: reader.read_u32()?,
            },
            AttributeUsage::Conflicts => Self::Conflicts {
                hash: UInt256::deserialize(reader)?,
            },
        })
    }
}
