// Copyright (C) 2015-2025 The Neo Project.
//
// signer_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Builder for transaction signers.

use crate::{CoreResult, ECPoint, Signer, UInt160, WitnessScope};

/// Builder for transaction signers.
///
/// Scope bits accumulate as they are added; `allow_contract` and
/// `allow_group` set the matching custom scope bit. The result is
/// validated once, in [`SignerBuilder::build`].
#[derive(Debug, Clone)]
pub struct SignerBuilder {
    signer: Signer,
}

impl SignerBuilder {
    /// Creates a builder for `account` with no scope.
    pub fn new(account: UInt160) -> Self {
        Self {
            signer: Signer::new(account, WitnessScope::None),
        }
    }

    /// Sets the account for the signer.
    pub fn account(mut self, script_hash: UInt160) -> Self {
        self.signer.account = script_hash;
        self
    }

    /// Allows a specific contract to use the witness.
    pub fn allow_contract(mut self, contract_hash: UInt160) -> Self {
        self.signer.scopes = self.signer.scopes | WitnessScope::CustomContracts;
        if !self.signer.allowed_contracts.contains(&contract_hash) {
            self.signer.allowed_contracts.push(contract_hash);
        }
        self
    }

    /// Allows contracts of a group to use the witness.
    pub fn allow_group(mut self, public_key: ECPoint) -> Self {
        self.signer.scopes = self.signer.scopes | WitnessScope::CustomGroups;
        if !self.signer.allowed_groups.contains(&public_key) {
            self.signer.allowed_groups.push(public_key);
        }
        self
    }

    /// Adds a witness scope.
    pub fn add_witness_scope(mut self, scope: WitnessScope) -> Self {
        self.signer.scopes = self.signer.scopes | scope;
        self
    }

    /// Builds and validates the signer.
    pub fn build(self) -> CoreResult<Signer> {
        self.signer.validate()?;
        Ok(self.signer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_allow_contract_sets_scope() {
        let signer = SignerBuilder::new(UInt160::from([1; 20]))
            .add_witness_scope(WitnessScope::CalledByEntry)
            .allow_contract(UInt160::from([2; 20]))
            .allow_contract(UInt160::from([2; 20]))
            .build()
            .unwrap();
        assert_eq!(
            signer.scopes,
            WitnessScope::CalledByEntry | WitnessScope::CustomContracts
        );
        assert_eq!(signer.allowed_contracts.len(), 1);
    }

    #[test]
    fn test_global_with_custom_rejected() {
        let result = SignerBuilder::new(UInt160::from([3; 20]))
            .add_witness_scope(WitnessScope::Global)
            .allow_contract(UInt160::from([4; 20]))
            .build();
        assert!(matches!(result, Err(CoreError::InvalidScope(_))));
    }
}
