// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction module, split into logical components:
//!
//! - `core` - the Transaction struct, hashing and lifecycle state
//! - `attributes` - transaction attributes (HighPriority, Conflicts, etc.)
//! - `serialization` - canonical wire encoding
//! - `validation` - structural checks and the pre-broadcast checklist

pub mod attributes;
pub mod core;
pub mod serialization;
pub mod validation;

pub use attributes::{AttributeUsage, OracleResponseCode, TransactionAttribute};
pub use core::{Transaction, TransactionState, HEADER_SIZE};
