// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::api::NodeApi;
use crate::fee_estimator::{FeeEstimator, FeeOverrides, FeeReport};
use crate::{RpcResult, TransactionResult};
use neo_config::ProtocolSettings;
use neo_core::{Transaction, TransactionBuilder, UInt256};
use neo_wallets::{sign_transaction, Account};
use tracing::{info, warn};

/// Drives a transaction from draft to broadcast against one node.
///
/// Draft (from the builder) -> fee-computed ([`Self::make_transaction`]) ->
/// signed ([`Self::sign`]) -> terminal ([`Self::send`]).
pub struct TransactionManager<'a, N: ?Sized> {
    node: &'a N,
    settings: ProtocolSettings,
}

impl<'a, N> TransactionManager<'a, N>
where
    N: NodeApi + ?Sized,
{
    pub fn new(node: &'a N, settings: ProtocolSettings) -> Self {
        Self { node, settings }
    }

    pub fn settings(&self) -> &ProtocolSettings {
        &self.settings
    }

    /// Height of the latest block.
    pub async fn current_height(&self) -> RpcResult<u32> {
        Ok(self.node.get_block_count().await?.saturating_sub(1))
    }

    /// Builds the draft, fills an unset `valid_until_block` with the widest
    /// window the network allows, and computes fees.
    pub async fn make_transaction(
        &self,
        builder: &TransactionBuilder,
        overrides: &FeeOverrides,
    ) -> TransactionResult<(Transaction, FeeReport)> {
        let mut tx = builder.build()?;
        if tx.valid_until_block() == 0 {
            let height = self.current_height().await?;
            tx.set_valid_until_block(
                height.saturating_add(self.settings.max_valid_until_block_increment),
            )?;
        }
        let report = FeeEstimator::new(self.node).estimate(&mut tx, overrides).await?;
        Ok((tx, report))
    }

    /// Signs for every signer with the network magic from the settings.
    pub fn sign(&self, tx: &mut Transaction, accounts: &[Account]) -> TransactionResult<()> {
        sign_transaction(tx, accounts, self.settings.network)?;
        Ok(())
    }

    /// Checks the transaction locally, submits it and marks it terminal.
    pub async fn send(&self, tx: &mut Transaction) -> TransactionResult<UInt256> {
        let height = self.current_height().await?;
        tx.validate_for_broadcast(height, &self.settings)?;
        let expected = tx.hash()?;
        let accepted = self.node.send_raw_transaction(tx).await?;
        if accepted != expected {
            warn!(%expected, %accepted, "node reported a different transaction hash");
        }
        tx.mark_sent()?;
        info!(tx = %accepted, height, "transaction sent");
        Ok(accepted)
    }

    /// Copies `tx` with a new nonce, signs it again and sends it. Fees and
    /// the validity window are kept.
    pub async fn resend(
        &self,
        tx: &Transaction,
        nonce: u32,
        accounts: &[Account],
    ) -> TransactionResult<Transaction> {
        let mut copy = tx.to_resend(nonce)?;
        self.sign(&mut copy, accounts)?;
        self.send(&mut copy).await?;
        Ok(copy)
    }
}
