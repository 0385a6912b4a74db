//! Neo Wallets Library
//!
//! Signing support for the transaction engine:
//! - secp256r1 key pairs with WIF import and export
//! - accounts pairing a verification contract with the keys that can satisfy it
//! - turning a fee-computed transaction into a signed one
//!
//! Wallet files and key encryption are not handled here.

pub mod account;
pub mod key_pair;
pub mod signing;

pub use account::Account;
pub use key_pair::KeyPair;
pub use signing::{invocation_script, sign_transaction, signature_witness};

use neo_core::{CoreError, UInt160};
use neo_vm::VmError;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid WIF: {0}")]
    InvalidWif(String),

    #[error("No key available to sign for {0}")]
    MissingKey(UInt160),

    #[error("Not enough keys for {account}: {available} of {required} signatures")]
    InsufficientSignatures {
        account: UInt160,
        available: usize,
        required: usize,
    },

    #[error("Unsupported verification script for {0}")]
    UnsupportedWitness(UInt160),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("VM error: {0}")]
    Vm(#[from] VmError),
}
