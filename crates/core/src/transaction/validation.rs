// Copyright (C) 2015-2025 The Neo Project.
//
// validation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Structural checks and the pre-broadcast checklist.

use super::core::{Transaction, TransactionState};
use crate::{CoreError, CoreResult};
use neo_config::{ProtocolSettings, MAX_SCRIPT_LENGTH, MAX_TRANSACTION_ATTRIBUTES};
use neo_io::Serializable;

impl Transaction {
    /// Checks the bounds every transaction must satisfy, signed or not.
    pub fn verify_structure(&self) -> CoreResult<()> {
        if self.version != 0 {
            return Err(CoreError::InvalidTransaction(format!(
                "unsupported version {}",
                self.version
            )));
        }
        self.validate_signers()?;
        self.validate_attributes()?;
        self.validate_script()?;
        if self.witnesses.len() > self.signers.len() {
            return Err(CoreError::InvalidTransaction(format!(
                "{} witnesses for {} signers",
                self.witnesses.len(),
                self.signers.len()
            )));
        }
        Ok(())
    }

    fn validate_signers(&self) -> CoreResult<()> {
        if self.signers.is_empty() {
            return Err(CoreError::InvalidSigner("transaction has no signers".into()));
        }
        if self.signers.len() > MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::InvalidSigner(format!(
                "{} signers exceeds {MAX_TRANSACTION_ATTRIBUTES}",
                self.signers.len()
            )));
        }
        for (i, signer) in self.signers.iter().enumerate() {
            signer.validate()?;
            if self.signers[..i].iter().any(|s| s.account == signer.account) {
                return Err(CoreError::InvalidSigner(format!(
                    "duplicate signer {}",
                    signer.account
                )));
            }
        }
        Ok(())
    }

    fn validate_attributes(&self) -> CoreResult<()> {
        let budget = MAX_TRANSACTION_ATTRIBUTES.saturating_sub(self.signers.len());
        if self.attributes.len() > budget {
            return Err(CoreError::InvalidAttribute(format!(
                "{} attributes with {} signers exceeds {MAX_TRANSACTION_ATTRIBUTES}",
                self.attributes.len(),
                self.signers.len()
            )));
        }
        for (i, attribute) in self.attributes.iter().enumerate() {
            attribute.validate()?;
            let usage = attribute.usage();
            let repeated = self.attributes[..i].iter().any(|a| a.usage() == usage);
            if repeated && !usage.allows_multiple() {
                return Err(CoreError::InvalidAttribute(format!(
                    "duplicate {usage} attribute"
                )));
            }
        }
        Ok(())
    }

    fn validate_script(&self) -> CoreResult<()> {
        if self.script.is_empty() {
            return Err(CoreError::InvalidTransaction("script is empty".into()));
        }
        if self.script.len() > MAX_SCRIPT_LENGTH {
            return Err(CoreError::InvalidTransaction(format!(
                "script of {} bytes exceeds {MAX_SCRIPT_LENGTH}",
                self.script.len()
            )));
        }
        Ok(())
    }

    /// `valid_until_block` must lie in `(current_height, current_height + max_increment]`.
    pub fn check_validity_window(&self, current_height: u32, max_increment: u32) -> CoreResult<()> {
        let upper = current_height.saturating_add(max_increment);
        if self.valid_until_block <= current_height || self.valid_until_block > upper {
            return Err(CoreError::StaleValidityWindow {
                valid_until_block: self.valid_until_block,
                current_height,
                max_increment,
            });
        }
        Ok(())
    }

    /// Everything that must hold before a transaction is handed to a node.
    pub fn validate_for_broadcast(
        &self,
        current_height: u32,
        settings: &ProtocolSettings,
    ) -> CoreResult<()> {
        if self.state == TransactionState::Terminal {
            return Err(CoreError::Immutable(self.state));
        }
        self.verify_structure()?;
        self.check_validity_window(current_height, settings.max_valid_until_block_increment)?;

        if self.witnesses.len() != self.signers.len() {
            return Err(CoreError::SignatureMismatch(format!(
                "{} witnesses for {} signers",
                self.witnesses.len(),
                self.signers.len()
            )));
        }
        for (signer, witness) in self.signers.iter().zip(&self.witnesses) {
            let hash = witness.script_hash();
            if hash != signer.account {
                return Err(CoreError::SignatureMismatch(format!(
                    "witness hashes to {hash}, signer is {}",
                    signer.account
                )));
            }
            if !witness.is_signed() {
                return Err(CoreError::SignatureMismatch(format!(
                    "signer {} has no signature",
                    signer.account
                )));
            }
        }

        let size = self.size();
        if size > settings.max_transaction_size {
            return Err(CoreError::InvalidTransaction(format!(
                "size {size} exceeds {}",
                settings.max_transaction_size
            )));
        }
        Ok(())
    }
}
