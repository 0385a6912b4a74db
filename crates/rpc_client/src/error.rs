// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_core::{CoreError, UInt160};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Transport failure. Retrying against another node may succeed.
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node answered with something that does not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RpcError {
    /// Whether the same request may succeed against a different node.
    pub fn is_retriable(&self) -> bool {
        matches!(self, RpcError::Network(_) | RpcError::Timeout(_))
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::InvalidResponse(err.to_string())
    }
}

pub type RpcResult<T> = Result<T, RpcError>;

/// Which of the two fee fields a fee error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    System,
    Network,
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeKind::System => f.write_str("system fee"),
            FeeKind::Network => f.write_str("network fee"),
        }
    }
}

/// Failures while estimating fees for, signing or sending a transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// The node simulated the script and it faulted. No fee is guessed.
    #[error("script execution faulted: {}", .exception.as_deref().unwrap_or("no exception message"))]
    ScriptExecutionFault { exception: Option<String> },

    #[error("{kind} {supplied} is below the required minimum {minimum}")]
    InsufficientFee {
        kind: FeeKind,
        supplied: i64,
        minimum: i64,
    },

    /// The verification script of this signer cannot be priced.
    #[error("cannot price the witness of {0}")]
    UnsupportedWitness(UInt160),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Wallet(#[from] neo_wallets::Error),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

pub type TransactionResult<T> = Result<T, TransactionError>;
