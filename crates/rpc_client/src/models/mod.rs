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

//! JSON shapes exchanged with a node.

mod rpc_invoke_result;
mod rpc_request;
mod rpc_send_result;

pub use rpc_invoke_result::{RpcInvokeResult, RpcStackItem, VmState};
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
pub use rpc_send_result::RpcSendResult;
