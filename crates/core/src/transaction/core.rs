// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Core Transaction struct, its hash and its lifecycle.

use crate::crypto::hash256;
use crate::signer::Signer;
use crate::witness::Witness;
use crate::{CoreError, CoreResult, UInt160, UInt256};
use neo_config::MAX_SCRIPT_LENGTH;
use neo_vm::VmError;
use parking_lot::Mutex;
use std::fmt;

use super::attributes::TransactionAttribute;

/// The size of a transaction header in bytes.
pub const HEADER_SIZE: usize = 1 +  // Version (byte)
    4 +  // Nonce (uint32)
    8 +  // SystemFee (int64)
    8 +  // NetworkFee (int64)
    4; // ValidUntilBlock (uint32)

/// Where a transaction object is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionState {
    /// Assembled, fees not yet computed.
    Draft,
    /// Fees populated; still mutable.
    FeeComputed,
    /// Every signer has a witness. Mutation drops the signatures.
    Signed,
    /// Handed to the network. No further mutation.
    Terminal,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "draft",
            Self::FeeComputed => "fee-computed",
            Self::Signed => "signed",
            Self::Terminal => "terminal",
        };
        f.write_str(name)
    }
}

/// A Neo N3 transaction.
///
/// Fields are private so that every mutation passes through the lifecycle
/// checks: a terminal transaction rejects changes, and a signed one loses
/// its signatures.
#[derive(Debug)]
pub struct Transaction {
    pub(crate) version: u8,
    pub(crate) nonce: u32,
    /// In datoshi, 1 datoshi = 1e-8 GAS.
    pub(crate) system_fee: i64,
    /// In datoshi.
    pub(crate) network_fee: i64,
    pub(crate) valid_until_block: u32,
    pub(crate) signers: Vec<Signer>,
    pub(crate) attributes: Vec<TransactionAttribute>,
    pub(crate) script: Vec<u8>,
    pub(crate) witnesses: Vec<Witness>,
    pub(crate) state: TransactionState,
    pub(crate) hash_cache: Mutex<Option<UInt256>>,
}

impl Transaction {
    /// Creates a draft with the given script and signers; the first signer
    /// pays the fees.
    pub fn new(script: Vec<u8>, signers: Vec<Signer>) -> CoreResult<Self> {
        let tx = Self {
            version: 0,
            nonce: 0,
            system_fee: 0,
            network_fee: 0,
            valid_until_block: 0,
            signers,
            attributes: Vec::new(),
            script,
            witnesses: Vec::new(),
            state: TransactionState::Draft,
            hash_cache: Mutex::new(None),
        };
        tx.verify_structure()?;
        Ok(tx)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn attributes(&self) -> &[TransactionAttribute] {
        &self.attributes
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// The fee-paying account, `signers[0]`.
    pub fn sender(&self) -> Option<UInt160> {
        self.signers.first().map(|s| s.account)
    }

    /// Verification script attached for `account`, if any.
    pub fn verification_script_for(&self, account: &UInt160) -> Option<&[u8]> {
        self.witnesses
            .iter()
            .find(|w| !w.verification_script.is_empty() && w.script_hash() == *account)
            .map(|w| w.verification_script.as_slice())
    }

    /// Double SHA-256 of the unsigned payload. Cached until the next mutation.
    pub fn hash(&self) -> CoreResult<UInt256> {
        let mut cache = self.hash_cache.lock();
        if let Some(hash) = *cache {
            return Ok(hash);
        }
        let hash = UInt256::from(hash256(&self.hash_data()?));
        *cache = Some(hash);
        Ok(hash)
    }

    /// Bytes that a witness signs: network magic then the transaction hash.
    pub fn sign_data(&self, network: u32) -> CoreResult<Vec<u8>> {
        let hash = self.hash()?;
        let mut data = Vec::with_capacity(4 + 32);
        data.extend_from_slice(&network.to_le_bytes());
        data.extend_from_slice(hash.as_bytes());
        Ok(data)
    }

    /// Prepares for a field change: rejects terminal transactions, drops
    /// every signature collected so far and clears the hash cache.
    fn begin_mutation(&mut self) -> CoreResult<()> {
        if self.state == TransactionState::Terminal {
            return Err(CoreError::Immutable(self.state));
        }
        let signed = self.witnesses.iter().filter(|w| w.is_signed()).count();
        if signed > 0 {
            tracing::debug!(signed, state = ?self.state, "mutation invalidates witnesses");
            self.invalidate_witnesses();
        }
        if self.state == TransactionState::Signed {
            self.state = TransactionState::FeeComputed;
        }
        *self.hash_cache.lock() = None;
        Ok(())
    }

    /// Clears every invocation script, keeping verification scripts as
    /// placeholders.
    fn invalidate_witnesses(&mut self) {
        for witness in &mut self.witnesses {
            witness.invocation_script.clear();
        }
    }

    pub fn set_nonce(&mut self, nonce: u32) -> CoreResult<()> {
        self.begin_mutation()?;
        self.nonce = nonce;
        Ok(())
    }

    pub fn set_valid_until_block(&mut self, valid_until_block: u32) -> CoreResult<()> {
        self.begin_mutation()?;
        self.valid_until_block = valid_until_block;
        Ok(())
    }

    pub fn set_script(&mut self, script: Vec<u8>) -> CoreResult<()> {
        if script.is_empty() {
            return Err(CoreError::InvalidTransaction("script is empty".into()));
        }
        if script.len() > MAX_SCRIPT_LENGTH {
            return Err(VmError::ScriptTooLarge {
                size: script.len(),
                max: MAX_SCRIPT_LENGTH,
            }
            .into());
        }
        self.begin_mutation()?;
        self.script = script;
        Ok(())
    }

    /// Replaces the signer list. Witnesses for accounts no longer present
    /// are dropped.
    pub fn set_signers(&mut self, signers: Vec<Signer>) -> CoreResult<()> {
        let previous = std::mem::replace(&mut self.signers, signers);
        if let Err(err) = self.verify_structure() {
            self.signers = previous;
            return Err(err);
        }
        let candidate = std::mem::replace(&mut self.signers, previous);
        self.begin_mutation()?;
        self.signers = candidate;
        let accounts: Vec<UInt160> = self.signers.iter().map(|s| s.account).collect();
        self.witnesses
            .retain(|w| accounts.contains(&w.script_hash()));
        self.align_witnesses();
        Ok(())
    }

    pub fn add_attribute(&mut self, attribute: TransactionAttribute) -> CoreResult<()> {
        self.attributes.push(attribute);
        if let Err(err) = self.verify_structure() {
            self.attributes.pop();
            return Err(err);
        }
        let attribute = self.attributes.pop();
        self.begin_mutation()?;
        self.attributes.extend(attribute);
        Ok(())
    }

    /// Records computed fees and moves the transaction to fee-computed.
    pub fn set_fees(&mut self, system_fee: i64, network_fee: i64) -> CoreResult<()> {
        if system_fee < 0 || network_fee < 0 {
            return Err(CoreError::InvalidTransaction(format!(
                "negative fee: system {system_fee}, network {network_fee}"
            )));
        }
        self.begin_mutation()?;
        self.system_fee = system_fee;
        self.network_fee = network_fee;
        self.state = TransactionState::FeeComputed;
        Ok(())
    }

    /// Attaches an unsigned witness for one of the signers, replacing any
    /// previous witness for that account. The hash is unaffected, so other
    /// signatures stay valid.
    pub fn add_placeholder(&mut self, verification_script: Vec<u8>) -> CoreResult<()> {
        let placeholder = Witness::placeholder(verification_script);
        let account = placeholder.script_hash();
        if !self.signers.iter().any(|s| s.account == account) {
            return Err(CoreError::SignatureMismatch(format!(
                "verification script hashes to {account}, which is not a signer"
            )));
        }
        if self.state == TransactionState::Terminal {
            return Err(CoreError::Immutable(self.state));
        }
        self.witnesses.retain(|w| w.script_hash() != account);
        self.witnesses.push(placeholder);
        self.align_witnesses();
        if self.state == TransactionState::Signed && !self.is_fully_signed() {
            self.state = TransactionState::FeeComputed;
        }
        Ok(())
    }

    /// Attaches a signed witness. The transaction becomes signed once every
    /// signer has one. The hash is unaffected.
    pub fn add_witness(&mut self, witness: Witness) -> CoreResult<()> {
        if self.state == TransactionState::Terminal {
            return Err(CoreError::Immutable(self.state));
        }
        let account = witness.script_hash();
        if !self.signers.iter().any(|s| s.account == account) {
            return Err(CoreError::SignatureMismatch(format!(
                "witness for {account} does not belong to any signer"
            )));
        }
        if !witness.is_signed() {
            return Err(CoreError::SignatureMismatch(format!(
                "witness for {account} has an empty invocation script"
            )));
        }
        self.witnesses.retain(|w| w.script_hash() != account);
        self.witnesses.push(witness);
        self.align_witnesses();
        if self.is_fully_signed() {
            self.state = TransactionState::Signed;
        }
        Ok(())
    }

    /// Attaches a full set of signed witnesses, one per signer.
    pub fn attach_witnesses(&mut self, witnesses: Vec<Witness>) -> CoreResult<()> {
        if witnesses.len() != self.signers.len() {
            return Err(CoreError::SignatureMismatch(format!(
                "{} witnesses for {} signers",
                witnesses.len(),
                self.signers.len()
            )));
        }
        for witness in witnesses {
            self.add_witness(witness)?;
        }
        Ok(())
    }

    /// Every signer, in order, has a signed witness whose verification
    /// script hashes to its account.
    pub fn is_fully_signed(&self) -> bool {
        self.witnesses.len() == self.signers.len()
            && self
                .signers
                .iter()
                .zip(&self.witnesses)
                .all(|(s, w)| w.is_signed() && w.script_hash() == s.account)
    }

    /// Orders witnesses to match the signer list. Witnesses that match no
    /// signer keep their relative order at the end.
    pub(crate) fn align_witnesses(&mut self) {
        let mut pending = std::mem::take(&mut self.witnesses);
        let mut aligned = Vec::with_capacity(pending.len());
        for signer in &self.signers {
            if let Some(pos) = pending.iter().position(|w| w.script_hash() == signer.account) {
                aligned.push(pending.remove(pos));
            }
        }
        aligned.append(&mut pending);
        self.witnesses = aligned;
    }

    /// Marks the transaction as handed to the network.
    pub fn mark_sent(&mut self) -> CoreResult<()> {
        if self.state != TransactionState::Signed {
            return Err(CoreError::InvalidTransaction(format!(
                "cannot send a {} transaction",
                self.state
            )));
        }
        self.state = TransactionState::Terminal;
        Ok(())
    }

    /// Copy for resubmission with a different nonce, so the new transaction
    /// hashes differently. Signatures are dropped and must be redone.
    pub fn to_resend(&self, nonce: u32) -> CoreResult<Transaction> {
        if nonce == self.nonce {
            return Err(CoreError::InvalidTransaction(format!(
                "resend must change the nonce (still {nonce})"
            )));
        }
        let mut copy = self.clone();
        copy.invalidate_witnesses();
        copy.nonce = nonce;
        copy.state = match self.state {
            TransactionState::Draft => TransactionState::Draft,
            _ => TransactionState::FeeComputed,
        };
        *copy.hash_cache.lock() = None;
        Ok(copy)
    }
}

impl Clone for Transaction {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            nonce: self.nonce,
            system_fee: self.system_fee,
            network_fee: self.network_fee,
            valid_until_block: self.valid_until_block,
            signers: self.signers.clone(),
            attributes: self.attributes.clone(),
            script: self.script.clone(),
            witnesses: self.witnesses.clone(),
            state: self.state,
            hash_cache: Mutex::new(*self.hash_cache.lock()),
        }
    }
}

/// Equality over the wire fields; lifecycle state and caches are ignored.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.nonce == other.nonce
            && self.system_fee == other.system_fee
            && self.network_fee == other.network_fee
            && self.valid_until_block == other.valid_until_block
            && self.signers == other.signers
            && self.attributes == other.attributes
            && self.script == other.script
            && self.witnesses == other.witnesses
    }
}

impl Eq for Transaction {}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hash = self
            .hash()
            .map_or_else(|err| format!("<{err}>"), |hash| hash.to_string());
        write!(
            f,
            "Transaction {{ hash: {}, state: {}, nonce: {}, system_fee: {}, network_fee: {}, valid_until_block: {} }}",
            hash,
            self.state,
            self.nonce,
            self.system_fee,
            self.network_fee,
            self.valid_until_block
        )
    }
}
