// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction signer: an account plus the scope its witness covers.

use crate::{CoreError, CoreResult, ECPoint, UInt160, WitnessScope};
use neo_config::{ADDRESS_SIZE, MAX_TRANSACTION_ATTRIBUTES};
use neo_io::serializable::helper::{deserialize_array, get_array_size, serialize_array};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// Maximum entries in `allowed_contracts` or `allowed_groups`.
pub const MAX_SUBITEMS: usize = MAX_TRANSACTION_ATTRIBUTES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub account: UInt160,
    pub scopes: WitnessScope,
    pub allowed_contracts: Vec<UInt160>,
    pub allowed_groups: Vec<ECPoint>,
}

impl Signer {
    pub fn new(account: UInt160, scopes: WitnessScope) -> Self {
        Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
        }
    }

    pub fn called_by_entry(account: UInt160) -> Self {
        Self::new(account, WitnessScope::CalledByEntry)
    }

    pub fn global(account: UInt160) -> Self {
        Self::new(account, WitnessScope::Global)
    }

    /// Checks scope bits against the allow lists.
    pub fn validate(&self) -> CoreResult<()> {
        WitnessScope::from_byte(self.scopes.to_byte())?;
        if !self.allowed_contracts.is_empty()
            && !self.scopes.has_flag(WitnessScope::CustomContracts)
        {
            return Err(CoreError::InvalidSigner(format!(
                "{}: allowed contracts without CustomContracts scope",
                self.account
            )));
        }
        if !self.allowed_groups.is_empty() && !self.scopes.has_flag(WitnessScope::CustomGroups) {
            return Err(CoreError::InvalidSigner(format!(
                "{}: allowed groups without CustomGroups scope",
                self.account
            )));
        }
        if self.allowed_contracts.len() > MAX_SUBITEMS || self.allowed_groups.len() > MAX_SUBITEMS
        {
            return Err(CoreError::InvalidSigner(format!(
                "{}: more than {MAX_SUBITEMS} allowed contracts or groups",
                self.account
            )));
        }
        Ok(())
    }

    /// Folds another signer for the same account into this one: scopes are
    /// OR-ed and allow lists unioned in first-seen order.
    pub fn merge(&mut self, other: &Signer) -> CoreResult<()> {
        if other.account != self.account {
            return Err(CoreError::InvalidSigner(format!(
                "cannot merge {} into {}",
                other.account, self.account
            )));
        }
        let mut merged = self.clone();
        merged.scopes = self.scopes.combine(other.scopes)?;
        for contract in &other.allowed_contracts {
            if !merged.allowed_contracts.contains(contract) {
                merged.allowed_contracts.push(*contract);
            }
        }
        for group in &other.allowed_groups {
            if !merged.allowed_groups.contains(group) {
                merged.allowed_groups.push(*group);
            }
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = ADDRESS_SIZE + 1;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            size += get_array_size(&self.allowed_contracts);
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            size += get_array_size(&self.allowed_groups);
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.account.serialize(writer)?;
        writer.write_u8(self.scopes.to_byte());
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            serialize_array(&self.allowed_contracts, writer)?;
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            serialize_array(&self.allowed_groups, writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let account = UInt160::deserialize(reader)?;
        let scope_byte = reader.read_u8()?;
        let scopes = WitnessScope::from_byte(scope_byte)
            .map_err(|e| IoError::invalid_data("witness scope", e))?;

        let allowed_contracts = if scopes.has_flag(WitnessScope::CustomContracts) {
            deserialize_array(reader, MAX_SUBITEMS)?
        } else {
            Vec::new()
        };
        let allowed_groups = if scopes.has_flag(WitnessScope::CustomGroups) {
            deserialize_array(reader, MAX_SUBITEMS)?
        } else {
            Vec::new()
        };

        Ok(Self {
            account,
            scopes,
            allowed_contracts,
            allowed_groups,
        })
    }
}
