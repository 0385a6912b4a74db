//! # Neo SDK: Neo N3 transaction construction in Rust
//!
//! Builds, prices, signs and broadcasts Neo N3 transactions without running
//! a node:
//!
//! - Script assembly and the opcode price table ([`vm`])
//! - Signers, witnesses, attributes and the transaction lifecycle ([`core`])
//! - Key pairs, accounts and witness signing ([`wallets`])
//! - Node access, fee estimation and broadcast ([`rpc_client`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_sdk::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RpcClient::new(RpcClientConfig::new("http://seed1t5.neo.org:20332")?)?;
//! let manager = TransactionManager::new(&client, ProtocolSettings::testnet());
//! let sender = Account::from_wif("KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHH")?;
//!
//! let mut builder = TransactionBuilder::new();
//! builder.transfer(
//!     NativeContract::GasToken.hash(),
//!     sender.contract(),
//!     UInt160::from_address("NdtB8RXRmJ7Nhw1FPTm7E6HoDZGnDw37nf", 0x35)?,
//!     100_000_000,
//! )?;
//!
//! let (mut tx, fees) = manager.make_transaction(&builder, &FeeOverrides::none()).await?;
//! manager.sign(&mut tx, &[sender])?;
//! let hash = manager.send(&mut tx).await?;
//! println!("sent {hash}, paid {} datoshi", fees.total());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_io as io;
pub use neo_rpc_client as rpc_client;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

pub mod logging;

/// Common imports for building and sending transactions
pub mod prelude {
    pub use crate::config::{NetworkType, ProtocolSettings};
    pub use crate::core::{
        Contract, CoreError, ECPoint, NativeContract, ScriptIntent, Signer, SignerBuilder,
        Transaction, TransactionAttribute, TransactionBuilder, TransactionState, UInt160,
        UInt256, Witness, WitnessScope,
    };
    pub use crate::rpc_client::{
        FeeEstimator, FeeOverrides, FeeReport, NodeApi, RpcClient, RpcClientConfig, RpcError,
        TransactionError, TransactionManager,
    };
    pub use crate::vm::{OpCode, PushValue, ScriptBuilder};
    pub use crate::wallets::{Account, KeyPair};
}
