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

//! # Neo Core
//!
//! The transaction model of Neo N3 and the pieces needed to assemble one
//! without a node:
//!
//! - **Primitives**: [`UInt160`], [`UInt256`], [`ECPoint`] and hashing helpers
//! - **Authorization**: [`Signer`], [`WitnessScope`], [`Witness`]
//! - **Transaction**: canonical encoding, hashing and lifecycle state
//! - **Smart contract helpers**: verification-script construction and
//!   classification, plus the cost model used for network fees
//! - **Builders**: [`SignerBuilder`] and [`TransactionBuilder`]

pub mod builders;
pub mod crypto;
pub mod ec_point;
pub mod error;
pub mod signer;
pub mod smart_contract;
pub mod transaction;
pub mod uint160;
pub mod uint256;
pub mod witness;
pub mod witness_scope;

pub use builders::{ScriptIntent, SignerBuilder, TransactionBuilder};
pub use ec_point::ECPoint;
pub use error::{CoreError, CoreResult};
pub use signer::Signer;
pub use smart_contract::{Contract, NativeContract};
pub use transaction::{AttributeUsage, Transaction, TransactionAttribute, TransactionState};
pub use uint160::UInt160;
pub use uint256::UInt256;
pub use witness::Witness;
pub use witness_scope::WitnessScope;
