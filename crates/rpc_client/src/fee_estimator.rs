// Copyright (C) 2015-2025 The Neo Project.
//
// fee_estimator.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! System and network fee computation.

use crate::api::{InvocationApi, PolicyApi};
use crate::{FeeKind, TransactionError, TransactionResult};
use neo_core::smart_contract::{classify, invocation_size, verification_cost};
use neo_core::{Transaction, Witness};
use tracing::{debug, warn};

/// Caller-supplied fees. `None` uses the computed minimum.
///
/// An override below the minimum is rejected unless `autofix` is set, in
/// which case the minimum is used and the change is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeOverrides {
    pub system_fee: Option<i64>,
    pub network_fee: Option<i64>,
    pub autofix: bool,
}

impl FeeOverrides {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A below-minimum override that was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeAdjustment {
    pub kind: FeeKind,
    pub requested: i64,
    pub applied: i64,
}

/// Fees written to a transaction together with the minima they were checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeReport {
    pub system_fee: i64,
    pub network_fee: i64,
    pub minimum_system_fee: i64,
    pub minimum_network_fee: i64,
    pub adjustments: Vec<FeeAdjustment>,
}

impl FeeReport {
    pub fn total(&self) -> i64 {
        self.system_fee.saturating_add(self.network_fee)
    }
}

/// Network fee for `tx` given the policy values.
///
/// Every signer needs an attached verification script (a placeholder is
/// enough) that the classifier recognises. Size is measured with invocation
/// scripts of the exact length real signatures will have.
pub fn calculate_network_fee(
    tx: &Transaction,
    fee_per_byte: i64,
    exec_fee_factor: u32,
) -> TransactionResult<i64> {
    let mut sized = tx.clone();
    let mut witnesses = Vec::with_capacity(tx.signers().len());
    let mut verification = 0i64;
    for signer in tx.signers() {
        let script = tx
            .verification_script_for(&signer.account)
            .ok_or(TransactionError::UnsupportedWitness(signer.account))?;
        let kind = classify(script).ok_or(TransactionError::UnsupportedWitness(signer.account))?;
        verification = verification.saturating_add(
            verification_cost(kind).saturating_mul(i64::from(exec_fee_factor)),
        );
        witnesses.push(Witness::new(vec![0u8; invocation_size(kind)], script.to_vec()));
    }
    sized.attach_witnesses(witnesses)?;
    let size = sized.to_bytes()?.len() as i64;
    let fee = size.saturating_mul(fee_per_byte).saturating_add(verification);
    debug!(size, fee_per_byte, exec_fee_factor, verification, fee, "network fee");
    Ok(fee)
}

/// Computes fees against a node.
pub struct FeeEstimator<'a, N: ?Sized> {
    node: &'a N,
}

impl<'a, N> FeeEstimator<'a, N>
where
    N: InvocationApi + PolicyApi + ?Sized,
{
    pub fn new(node: &'a N) -> Self {
        Self { node }
    }

    /// Gas consumed by simulating the script with the transaction's signers.
    pub async fn system_fee(&self, tx: &Transaction) -> TransactionResult<i64> {
        let result = self.node.invoke_script(tx.script(), tx.signers()).await?;
        if result.is_fault() {
            warn!(
                exception = result.exception.as_deref().unwrap_or_default(),
                "script simulation faulted"
            );
            return Err(TransactionError::ScriptExecutionFault {
                exception: result.exception,
            });
        }
        debug!(gas = result.gas_consumed, "system fee");
        Ok(result.gas_consumed)
    }

    pub async fn network_fee(&self, tx: &Transaction) -> TransactionResult<i64> {
        let fee_per_byte = self.node.get_fee_per_byte().await?;
        let exec_fee_factor = self.node.get_exec_fee_factor().await?;
        calculate_network_fee(tx, fee_per_byte, exec_fee_factor)
    }

    /// Computes both fees, applies `overrides` and writes the result into
    /// `tx`, moving it to fee-computed. On error `tx` is left unchanged.
    pub async fn estimate(
        &self,
        tx: &mut Transaction,
        overrides: &FeeOverrides,
    ) -> TransactionResult<FeeReport> {
        let minimum_system_fee = self.system_fee(tx).await?;
        let minimum_network_fee = self.network_fee(tx).await?;

        let mut adjustments = Vec::new();
        let system_fee = apply_override(
            FeeKind::System,
            overrides.system_fee,
            minimum_system_fee,
            overrides.autofix,
            &mut adjustments,
        )?;
        let network_fee = apply_override(
            FeeKind::Network,
            overrides.network_fee,
            minimum_network_fee,
            overrides.autofix,
            &mut adjustments,
        )?;
        tx.set_fees(system_fee, network_fee)?;

        Ok(FeeReport {
            system_fee,
            network_fee,
            minimum_system_fee,
            minimum_network_fee,
            adjustments,
        })
    }
}

fn apply_override(
    kind: FeeKind,
    requested: Option<i64>,
    minimum: i64,
    autofix: bool,
    adjustments: &mut Vec<FeeAdjustment>,
) -> TransactionResult<i64> {
    match requested {
        None => Ok(minimum),
        Some(fee) if fee >= minimum => Ok(fee),
        Some(fee) if autofix => {
            warn!(%kind, requested = fee, applied = minimum, "fee override raised to minimum");
            adjustments.push(FeeAdjustment {
                kind,
                requested: fee,
                applied: minimum,
            });
            Ok(minimum)
        }
        Some(fee) => Err(TransactionError::InsufficientFee {
            kind,
            supplied: fee,
            minimum,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_rules() {
        let mut adjustments = Vec::new();
        assert_eq!(
            apply_override(FeeKind::System, None, 100, false, &mut adjustments).unwrap(),
            100
        );
        // Overpaying is the caller's choice.
        assert_eq!(
            apply_override(FeeKind::System, Some(150), 100, false, &mut adjustments).unwrap(),
            150
        );
        assert_eq!(
            apply_override(FeeKind::Network, Some(99), 100, false, &mut adjustments),
            Err(TransactionError::InsufficientFee {
                kind: FeeKind::Network,
                supplied: 99,
                minimum: 100
            })
        );
        assert!(adjustments.is_empty());

        assert_eq!(
            apply_override(FeeKind::Network, Some(99), 100, true, &mut adjustments).unwrap(),
            100
        );
        assert_eq!(
            adjustments,
            vec![FeeAdjustment {
                kind: FeeKind::Network,
                requested: 99,
                applied: 100
            }]
        );
    }
}
