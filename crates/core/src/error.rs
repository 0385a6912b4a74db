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

use crate::transaction::TransactionState;
use neo_io::IoError;
use neo_vm::VmError;
use thiserror::Error;

/// Errors raised while building, encoding or checking transactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid witness scope: {0}")]
    InvalidScope(String),

    #[error("invalid signer: {0}")]
    InvalidSigner(String),

    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error(
        "stale validity window: valid_until_block {valid_until_block} not in ({current_height}, {}]",
        current_height.saturating_add(*max_increment)
    )]
    StaleValidityWindow {
        valid_until_block: u32,
        current_height: u32,
        max_increment: u32,
    },

    #[error("signature mismatch: {0}")]
    SignatureMismatch(String),

    #[error("transaction is {0} and cannot be modified")]
    Immutable(TransactionState),
}

impl From<hex::FromHexError> for CoreError {
    fn from(err: hex::FromHexError) -> Self {
        CoreError::Encoding(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
