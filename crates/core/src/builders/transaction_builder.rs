// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fluent assembly of draft transactions from contract-call intents.

use crate::smart_contract::{Contract, NativeContract};
use crate::transaction::TransactionAttribute;
use crate::{CoreError, CoreResult, ECPoint, Signer, Transaction, UInt160};
use neo_vm::{ContractParameter, PushValue, ScriptBuilder};
use num_bigint::BigInt;
use tracing::debug;

/// One contract call: target, method and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptIntent {
    pub contract_hash: UInt160,
    pub operation: String,
    pub args: Vec<PushValue>,
}

impl ScriptIntent {
    pub fn new(contract_hash: UInt160, operation: impl Into<String>, args: Vec<PushValue>) -> Self {
        Self {
            contract_hash,
            operation: operation.into(),
            args,
        }
    }

    /// NEP-17 `transfer(from, to, amount, data)` with null data.
    pub fn transfer(token: UInt160, from: UInt160, to: UInt160, amount: BigInt) -> Self {
        Self::new(
            token,
            "transfer",
            vec![
                from.into(),
                to.into(),
                PushValue::Int(amount),
                ContractParameter::Any.into(),
            ],
        )
    }

    pub fn emit(&self, builder: &mut ScriptBuilder) -> CoreResult<()> {
        builder.emit_contract_call(self.contract_hash.as_bytes(), &self.operation, &self.args)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum ScriptPart {
    Intent(ScriptIntent),
    Raw(Vec<u8>),
}

/// Accumulates script parts, signers and placeholder witnesses, then
/// produces a draft [`Transaction`].
///
/// The first signer added pays the fees and stays first; the remaining
/// signers are ordered by ascending account when the draft is built.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    parts: Vec<ScriptPart>,
    signers: Vec<Signer>,
    placeholders: Vec<Vec<u8>>,
    attributes: Vec<TransactionAttribute>,
    nonce: Option<u32>,
    valid_until_block: u32,
    system_fee: i64,
    network_fee: i64,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the nonce. A random nonce is used otherwise.
    pub fn nonce(&mut self, nonce: u32) -> &mut Self {
        self.nonce = Some(nonce);
        self
    }

    /// Zero leaves the window for the transaction manager to fill.
    pub fn valid_until_block(&mut self, height: u32) -> &mut Self {
        self.valid_until_block = height;
        self
    }

    pub fn system_fee(&mut self, fee: i64) -> &mut Self {
        self.system_fee = fee;
        self
    }

    pub fn network_fee(&mut self, fee: i64) -> &mut Self {
        self.network_fee = fee;
        self
    }

    pub fn add_attribute(&mut self, attribute: TransactionAttribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    pub fn add_intent(&mut self, intent: ScriptIntent) -> &mut Self {
        self.parts.push(ScriptPart::Intent(intent));
        self
    }

    /// Appends a raw script fragment after the parts added so far.
    pub fn add_script(&mut self, script: Vec<u8>) -> &mut Self {
        self.parts.push(ScriptPart::Raw(script));
        self
    }

    /// Adds a signer, merging it into an existing signer for the same
    /// account instead of duplicating the entry.
    pub fn add_signer(&mut self, signer: Signer) -> CoreResult<&mut Self> {
        signer.validate()?;
        match self.signers.iter_mut().find(|s| s.account == signer.account) {
            Some(existing) => {
                existing.merge(&signer)?;
                debug!(account = %signer.account, scopes = %existing.scopes, "merged signer");
            }
            None => self.signers.push(signer),
        }
        Ok(self)
    }

    /// Adds an unsigned witness for the account whose verification script
    /// this is. Repeated calls for the same script are ignored.
    pub fn add_placeholder(&mut self, verification_script: Vec<u8>) -> &mut Self {
        if !self.placeholders.contains(&verification_script) {
            self.placeholders.push(verification_script);
        }
        self
    }

    /// Adds `account` as a CalledByEntry signer with a placeholder witness.
    fn add_account(&mut self, account: &Contract) -> CoreResult<()> {
        self.add_signer(Signer::called_by_entry(account.script_hash()))?;
        self.add_placeholder(account.script.clone());
        Ok(())
    }

    /// NEP-17 token transfer signed by `from`.
    pub fn transfer(
        &mut self,
        token: UInt160,
        from: &Contract,
        to: UInt160,
        amount: impl Into<BigInt>,
    ) -> CoreResult<&mut Self> {
        let intent = ScriptIntent::transfer(token, from.script_hash(), to, amount.into());
        self.add_intent(intent);
        self.add_account(from)?;
        Ok(self)
    }

    /// Claims unclaimed GAS by transferring zero NEO from the account to itself.
    pub fn claim_gas(&mut self, account: &Contract) -> CoreResult<&mut Self> {
        let hash = account.script_hash();
        self.transfer(NativeContract::NeoToken.hash(), account, hash, 0)
    }

    /// Votes for `candidate`, or withdraws the vote when `None`.
    pub fn vote(&mut self, account: &Contract, candidate: Option<ECPoint>) -> CoreResult<&mut Self> {
        let candidate = match candidate {
            Some(key) => PushValue::from(key),
            None => ContractParameter::Any.into(),
        };
        self.add_intent(ScriptIntent::new(
            NativeContract::NeoToken.hash(),
            "vote",
            vec![account.script_hash().into(), candidate],
        ));
        self.add_account(account)?;
        Ok(self)
    }

    /// Emits every part, in insertion order, into one script.
    pub fn script(&self) -> CoreResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        for part in &self.parts {
            match part {
                ScriptPart::Intent(intent) => intent.emit(&mut builder)?,
                ScriptPart::Raw(bytes) => {
                    builder.emit_raw(bytes);
                }
            }
        }
        Ok(builder.to_array()?)
    }

    /// Builds the draft.
    pub fn build(&self) -> CoreResult<Transaction> {
        let script = self.script()?;
        if script.is_empty() {
            return Err(CoreError::InvalidTransaction("no script parts added".into()));
        }
        let mut signers = self.signers.clone();
        if signers.len() > 1 {
            signers[1..].sort_by(|a, b| a.account.cmp(&b.account));
        }

        let mut tx = Transaction::new(script, signers)?;
        tx.nonce = self.nonce.unwrap_or_else(rand::random);
        tx.valid_until_block = self.valid_until_block;
        if self.system_fee < 0 || self.network_fee < 0 {
            return Err(CoreError::InvalidTransaction("negative fee".into()));
        }
        tx.system_fee = self.system_fee;
        tx.network_fee = self.network_fee;
        for attribute in &self.attributes {
            tx.add_attribute(attribute.clone())?;
        }
        for verification in &self.placeholders {
            tx.add_placeholder(verification.clone())?;
        }
        debug!(
            signers = tx.signers().len(),
            script_len = tx.script().len(),
            "built draft transaction"
        );
        Ok(tx)
    }
}
