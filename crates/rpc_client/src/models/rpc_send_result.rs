// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_send_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{RpcError, RpcResult};
use neo_core::UInt256;
use serde::{Deserialize, Serialize};

/// Result of `sendrawtransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcSendResult {
    pub hash: String,
}

impl RpcSendResult {
    pub fn hash(&self) -> RpcResult<UInt256> {
        UInt256::parse(&self.hash)
            .map_err(|e| RpcError::InvalidResponse(format!("transaction hash {:?}: {e}", self.hash)))
    }
}
