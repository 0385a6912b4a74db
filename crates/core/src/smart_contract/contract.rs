// Copyright (C) 2015-2025 The Neo Project.
//
// contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Verification contracts for standard accounts.

use super::helper::{classify, VerificationKind};
use crate::{CoreError, CoreResult, ECPoint, UInt160};
use neo_config::MAX_MULTISIG_KEYS;
use neo_vm::interop::{CHECK_MULTISIG_SECP256R1_ID, VERIFY_SECP256R1_ID};
use neo_vm::{OpCode, ScriptBuilder};
use num_bigint::BigInt;

/// An account's verification script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub script: Vec<u8>,
}

impl Contract {
    pub fn new(script: Vec<u8>) -> Self {
        Self { script }
    }

    /// The account scripthash.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    pub fn address(&self, version: u8) -> String {
        self.script_hash().to_address(version)
    }

    /// Recognised shape of the script, if any.
    pub fn kind(&self) -> Option<VerificationKind> {
        classify(&self.script)
    }

    pub fn create_signature_contract(public_key: &ECPoint) -> CoreResult<Self> {
        Ok(Self::new(Self::create_signature_redeem_script(public_key)?))
    }

    /// `PUSHDATA1 33 <key> PUSHNULL SYSCALL <verify id>`.
    pub fn create_signature_redeem_script(public_key: &ECPoint) -> CoreResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bytes(public_key.as_bytes())?;
        builder.emit_opcode(OpCode::PUSHNULL);
        builder.emit_syscall(VERIFY_SECP256R1_ID);
        Ok(builder.to_array()?)
    }

    pub fn create_multi_sig_contract(m: usize, public_keys: &[ECPoint]) -> CoreResult<Self> {
        Ok(Self::new(Self::create_multi_sig_redeem_script(m, public_keys)?))
    }

    /// `<m> <keys sorted> <n> PUSHNULL SYSCALL <multisig id>`.
    pub fn create_multi_sig_redeem_script(m: usize, public_keys: &[ECPoint]) -> CoreResult<Vec<u8>> {
        let n = public_keys.len();
        if !(1..=n).contains(&m) || n > MAX_MULTISIG_KEYS {
            return Err(CoreError::InvalidPublicKey(format!(
                "invalid multi-sig parameters: m={m}, n={n}"
            )));
        }
        let mut sorted_keys = public_keys.to_vec();
        sorted_keys.sort();
        sorted_keys.dedup();
        if sorted_keys.len() != n {
            return Err(CoreError::InvalidPublicKey(
                "duplicate key in multi-sig set".into(),
            ));
        }

        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(&BigInt::from(m))?;
        for key in &sorted_keys {
            builder.emit_push_bytes(key.as_bytes())?;
        }
        builder.emit_push_int(&BigInt::from(n))?;
        builder.emit_opcode(OpCode::PUSHNULL);
        builder.emit_syscall(CHECK_MULTISIG_SECP256R1_ID);
        Ok(builder.to_array()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart_contract::helper::{is_multi_sig_contract, is_signature_contract};

    const KEYS: [&str; 3] = [
        "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        "037cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
        "025ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c",
    ];

    fn keys() -> Vec<ECPoint> {
        KEYS.iter().map(|k| ECPoint::from_hex(k).unwrap()).collect()
    }

    #[test]
    fn test_signature_contract_layout() {
        let key = &keys()[0];
        let contract = Contract::create_signature_contract(key).unwrap();
        assert_eq!(contract.script.len(), 41);
        assert_eq!(
            hex::encode(&contract.script),
            format!("0c21{}0b41{}", KEYS[0], "95440d78")
        );
        assert!(is_signature_contract(&contract.script));
        assert_eq!(contract.kind(), Some(VerificationKind::SingleSig));
    }

    #[test]
    fn test_multi_sig_two_of_three() {
        let contract = Contract::create_multi_sig_contract(2, &keys()).unwrap();
        assert_eq!(is_multi_sig_contract(&contract.script), Some((2, 3)));
        let truncated = &contract.script[..contract.script.len() - 1];
        assert!(is_multi_sig_contract(truncated).is_none());
        // Keys appear in ascending X-coordinate order regardless of input order.
        let mut reversed = keys();
        reversed.reverse();
        let again = Contract::create_multi_sig_contract(2, &reversed).unwrap();
        assert_eq!(again.script_hash(), contract.script_hash());
    }

    #[test]
    fn test_multi_sig_parameter_checks() {
        assert!(Contract::create_multi_sig_contract(0, &keys()).is_err());
        assert!(Contract::create_multi_sig_contract(4, &keys()).is_err());
        let dup = vec![keys()[0], keys()[0]];
        assert!(Contract::create_multi_sig_contract(1, &dup).is_err());
    }
}
