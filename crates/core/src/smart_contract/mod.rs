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

//! Verification contracts, their classification and native contract hashes.

pub mod contract;
pub mod helper;
pub mod native;

pub use contract::Contract;
pub use helper::{
    classify, invocation_size, is_multi_sig_contract, is_signature_contract,
    multi_signature_contract_cost, parse_multi_sig_contract, signature_contract_cost,
    verification_cost, VerificationKind,
};
pub use native::NativeContract;
