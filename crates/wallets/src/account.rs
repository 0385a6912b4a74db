//! Accounts: a verification contract plus the keys held for it.

use crate::{KeyPair, Result};
use neo_core::smart_contract::{Contract, VerificationKind};
use neo_core::{ECPoint, Signer, UInt160};

#[derive(Debug, Clone)]
pub struct Account {
    contract: Contract,
    keys: Vec<KeyPair>,
}

impl Account {
    /// Single-signature account for `key`.
    pub fn from_key_pair(key: KeyPair) -> Result<Self> {
        Ok(Self {
            contract: key.contract()?,
            keys: vec![key],
        })
    }

    pub fn from_wif(wif: &str) -> Result<Self> {
        Self::from_key_pair(KeyPair::from_wif(wif)?)
    }

    /// m-of-n account. Keys for any of the members can be added later with
    /// [`Account::add_key`].
    pub fn multi_sig(threshold: usize, public_keys: &[ECPoint]) -> Result<Self> {
        Ok(Self {
            contract: Contract::create_multi_sig_contract(threshold, public_keys)?,
            keys: Vec::new(),
        })
    }

    /// Account for an arbitrary verification script, holding no keys.
    pub fn watch_only(contract: Contract) -> Self {
        Self {
            contract,
            keys: Vec::new(),
        }
    }

    pub fn add_key(&mut self, key: KeyPair) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn keys(&self) -> &[KeyPair] {
        &self.keys
    }

    pub fn script_hash(&self) -> UInt160 {
        self.contract.script_hash()
    }

    pub fn address(&self, version: u8) -> String {
        self.contract.address(version)
    }

    pub fn is_multi_sig(&self) -> bool {
        matches!(self.contract.kind(), Some(VerificationKind::MultiSig { .. }))
    }

    /// Signer entry with CalledByEntry scope.
    pub fn signer(&self) -> Signer {
        Signer::called_by_entry(self.script_hash())
    }
}
