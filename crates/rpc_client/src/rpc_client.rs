// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::api::{ChainApi, InvocationApi, PolicyApi};
use crate::models::{RpcInvokeResult, RpcRequest, RpcResponse, RpcSendResult};
use crate::utility::{signer_to_json, to_base64};
use crate::{RpcClientConfig, RpcError, RpcResult};
use async_trait::async_trait;
use neo_core::{NativeContract, ScriptIntent, Signer, Transaction, UInt256};
use neo_vm::ScriptBuilder;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// JSON-RPC client for a single Neo node.
pub struct RpcClient {
    config: RpcClientConfig,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(config: RpcClientConfig) -> RpcResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RpcError::Config(e.to_string()))?;
        Ok(Self::with_client(http_client, config))
    }

    /// Uses an existing HTTP client; its own timeout settings apply.
    pub fn with_client(http_client: Client, config: RpcClientConfig) -> Self {
        Self {
            config,
            http_client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &RpcClientConfig {
        &self.config
    }

    fn map_transport_error(&self, err: reqwest::Error) -> RpcError {
        if err.is_timeout() {
            RpcError::Timeout(self.config.timeout)
        } else {
            RpcError::Network(err.to_string())
        }
    }

    /// Sends one request and returns the raw response envelope.
    pub async fn send(&self, request: &RpcRequest) -> RpcResult<RpcResponse> {
        debug!(method = %request.method, id = request.id, "rpc request");
        let mut http_request = self.http_client.post(self.config.url.clone()).json(request);
        if let Some(auth) = &self.config.auth {
            http_request = http_request.basic_auth(&auth.username, Some(&auth.password));
        }
        let response = http_request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        // Nodes report JSON-RPC errors with non-2xx codes too, so try the body first.
        match serde_json::from_str::<RpcResponse>(&content) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => {
                Err(RpcError::Network(format!("HTTP {status} from {}", self.config.url)))
            }
            Err(e) => Err(RpcError::InvalidResponse(format!("{e}: {content}"))),
        }
    }

    /// Calls `method` and decodes its `result`.
    pub async fn rpc_send<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> RpcResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let response = self.send(&RpcRequest::new(id, method, params)).await?;
        if let Some(error) = response.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        let result = response
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: no result returned")))?;
        Ok(serde_json::from_value(result)?)
    }

    /// Runs a read-only call on the Policy contract and returns the integer it leaves.
    async fn policy_integer(&self, operation: &str) -> RpcResult<i64> {
        let mut builder = ScriptBuilder::new();
        ScriptIntent::new(NativeContract::Policy.hash(), operation, vec![])
            .emit(&mut builder)
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        let script = builder
            .to_array()
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        let result = self.invoke_script(&script, &[]).await?;
        if result.is_fault() {
            return Err(RpcError::InvalidResponse(format!(
                "{operation} faulted: {}",
                result.exception.unwrap_or_default()
            )));
        }
        result
            .stack
            .first()
            .and_then(|item| item.as_i64())
            .ok_or_else(|| RpcError::InvalidResponse(format!("{operation}: expected an integer")))
    }
}

#[async_trait]
impl ChainApi for RpcClient {
    async fn get_block_count(&self) -> RpcResult<u32> {
        self.rpc_send("getblockcount", vec![]).await
    }

    async fn send_raw_transaction(&self, tx: &Transaction) -> RpcResult<UInt256> {
        let bytes = tx
            .to_bytes()
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        let result: RpcSendResult = self
            .rpc_send("sendrawtransaction", vec![json!(to_base64(&bytes))])
            .await?;
        let hash = result.hash()?;
        info!(tx = %hash, node = %self.config.url, "transaction accepted");
        Ok(hash)
    }
}

#[async_trait]
impl InvocationApi for RpcClient {
    async fn invoke_script(&self, script: &[u8], signers: &[Signer]) -> RpcResult<RpcInvokeResult> {
        let mut params = vec![json!(to_base64(script))];
        if !signers.is_empty() {
            params.push(Value::Array(signers.iter().map(signer_to_json).collect()));
        }
        self.rpc_send("invokescript", params).await
    }
}

#[async_trait]
impl PolicyApi for RpcClient {
    async fn get_fee_per_byte(&self) -> RpcResult<i64> {
        self.policy_integer("getFeePerByte").await
    }

    async fn get_exec_fee_factor(&self) -> RpcResult<u32> {
        let value = self.policy_integer("getExecFeeFactor").await?;
        u32::try_from(value)
            .map_err(|_| RpcError::InvalidResponse(format!("exec fee factor {value} out of range")))
    }
}
