// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo RPC Client Library
//!
//! Node access for the transaction engine. The node is reached through the
//! capability traits in [`api`]; [`RpcClient`] implements them over
//! JSON-RPC. [`FeeEstimator`] prices a draft and [`TransactionManager`]
//! takes it through signing to broadcast.

pub mod api;
mod config;
mod error;
pub mod fee_estimator;
pub mod models;
mod rpc_client;
mod transaction_manager;
pub mod utility;

pub use api::{ChainApi, InvocationApi, NodeApi, PolicyApi};
pub use config::{BasicAuth, RpcClientConfig, DEFAULT_TIMEOUT};
pub use error::{FeeKind, RpcError, RpcResult, TransactionError, TransactionResult};
pub use fee_estimator::{calculate_network_fee, FeeAdjustment, FeeEstimator, FeeOverrides, FeeReport};
pub use models::{RpcInvokeResult, RpcStackItem, VmState};
pub use rpc_client::RpcClient;
pub use transaction_manager::TransactionManager;
