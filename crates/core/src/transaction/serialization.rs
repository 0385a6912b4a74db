// Copyright (C) 2015-2025 The Neo Project.
//
// serialization.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Canonical wire encoding of a transaction.

use crate::signer::Signer;
use crate::witness::Witness;
use crate::CoreResult;
use neo_config::{MAX_SCRIPT_LENGTH, MAX_TRANSACTION_ATTRIBUTES};
use neo_io::serializable::helper::{
    deserialize_array, get_array_size, get_var_bytes_size, serialize_array,
};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable, SerializableExt};
use parking_lot::Mutex;

use super::attributes::TransactionAttribute;
use super::core::{Transaction, TransactionState, HEADER_SIZE};

impl Transaction {
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        writer.write_u32(self.nonce);
        writer.write_i64(self.system_fee);
        writer.write_i64(self.network_fee);
        writer.write_u32(self.valid_until_block);
        serialize_array(&self.signers, writer)?;
        serialize_array(&self.attributes, writer)?;
        writer.write_var_bytes(&self.script);
        Ok(())
    }

    fn unsigned_size(&self) -> usize {
        HEADER_SIZE
            + get_array_size(&self.signers)
            + get_array_size(&self.attributes)
            + get_var_bytes_size(&self.script)
    }

    /// The unsigned payload: everything except the witnesses. This is what
    /// the transaction hash covers.
    pub fn hash_data(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    pub fn to_bytes(&self) -> CoreResult<Vec<u8>> {
        Ok(self.to_array()?)
    }

    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        Ok(Self::from_array(bytes)?)
    }

    pub fn to_hex(&self) -> CoreResult<String> {
        Ok(hex::encode(self.to_bytes()?))
    }

    pub fn from_hex(text: &str) -> CoreResult<Self> {
        let text = text.strip_prefix("0x").unwrap_or(text);
        Self::from_bytes(&hex::decode(text)?)
    }

    /// Lifecycle state implied by decoded content.
    fn infer_state(&self) -> TransactionState {
        if self.is_fully_signed() {
            TransactionState::Signed
        } else if self.system_fee > 0 || self.network_fee > 0 {
            TransactionState::FeeComputed
        } else {
            TransactionState::Draft
        }
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        serialize_array(&self.witnesses, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_u8()?;
        if version != 0 {
            return Err(IoError::invalid_data("version", version));
        }
        let nonce = reader.read_u32()?;
        let system_fee = reader.read_i64()?;
        if system_fee < 0 {
            return Err(IoError::invalid_data("system fee", system_fee));
        }
        let network_fee = reader.read_i64()?;
        if network_fee < 0 {
            return Err(IoError::invalid_data("network fee", network_fee));
        }
        let valid_until_block = reader.read_u32()?;

        let signers: Vec<Signer> = deserialize_array(reader, MAX_TRANSACTION_ATTRIBUTES)?;
        if signers.is_empty() {
            return Err(IoError::invalid_data("signers", "empty"));
        }
        for (i, signer) in signers.iter().enumerate() {
            if signers[..i].iter().any(|s| s.account == signer.account) {
                return Err(IoError::invalid_data("signers", format!("duplicate {}", signer.account)));
            }
        }

        let attributes: Vec<TransactionAttribute> =
            deserialize_array(reader, MAX_TRANSACTION_ATTRIBUTES - signers.len())?;

        let script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        if script.is_empty() {
            return Err(IoError::invalid_data("script", "empty"));
        }

        // Drafts may carry fewer witnesses than signers.
        let witnesses: Vec<Witness> = deserialize_array(reader, signers.len())?;

        let mut tx = Self {
            version,
            nonce,
            system_fee,
            network_fee,
            valid_until_block,
            signers,
            attributes,
            script,
            witnesses,
            state: TransactionState::Draft,
            hash_cache: Mutex::new(None),
        };
        tx.verify_structure()
            .map_err(|e| IoError::invalid_data("transaction", e))?;
        tx.state = tx.infer_state();
        Ok(tx)
    }
}
