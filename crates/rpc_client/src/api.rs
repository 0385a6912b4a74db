// Copyright (C) 2015-2025 The Neo Project.
//
// api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The narrow node surface the fee estimator and transaction manager need.
//!
//! [`crate::RpcClient`] implements all of these over JSON-RPC; tests and
//! alternative transports implement them directly.

use crate::models::RpcInvokeResult;
use crate::RpcResult;
use async_trait::async_trait;
use neo_core::{Signer, Transaction, UInt256};

/// Chain height and transaction submission.
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// Number of blocks in the main chain; the current height is one less.
    async fn get_block_count(&self) -> RpcResult<u32>;

    /// Submits a signed transaction and returns the hash the node accepted.
    async fn send_raw_transaction(&self, tx: &Transaction) -> RpcResult<UInt256>;
}

/// Stateless script simulation.
#[async_trait]
pub trait InvocationApi: Send + Sync {
    async fn invoke_script(&self, script: &[u8], signers: &[Signer]) -> RpcResult<RpcInvokeResult>;
}

/// Fee parameters of the Policy contract.
#[async_trait]
pub trait PolicyApi: Send + Sync {
    /// Datoshi charged per transaction byte.
    async fn get_fee_per_byte(&self) -> RpcResult<i64>;

    /// Multiplier applied to opcode prices.
    async fn get_exec_fee_factor(&self) -> RpcResult<u32>;
}

/// Everything needed to take a transaction from draft to broadcast.
pub trait NodeApi: ChainApi + InvocationApi + PolicyApi {}

impl<T: ChainApi + InvocationApi + PolicyApi + ?Sized> NodeApi for T {}
