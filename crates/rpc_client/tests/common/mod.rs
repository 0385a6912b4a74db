//! In-memory node used by the fee and manager tests.

#![allow(dead_code)]

use async_trait::async_trait;
use neo_core::{Signer, Transaction, UInt256};
use neo_rpc_client::models::RpcInvokeResult;
use neo_rpc_client::{ChainApi, InvocationApi, PolicyApi, RpcError, RpcResult, VmState};
use std::sync::Mutex;

pub const FEE_PER_BYTE: i64 = 1000;
pub const EXEC_FEE_FACTOR: u32 = 30;

pub struct MockNode {
    pub block_count: u32,
    pub state: VmState,
    pub gas_consumed: i64,
    pub exception: Option<String>,
    pub offline: bool,
    pub invoked_signers: Mutex<Vec<Vec<Signer>>>,
    pub sent: Mutex<Vec<Vec<u8>>>,
}

impl MockNode {
    pub fn halting(gas_consumed: i64) -> Self {
        Self {
            block_count: 1_000,
            state: VmState::Halt,
            gas_consumed,
            exception: None,
            offline: false,
            invoked_signers: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn faulting(message: &str) -> Self {
        Self {
            state: VmState::Fault,
            exception: Some(message.to_string()),
            ..Self::halting(0)
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::halting(0)
        }
    }

    fn check_online(&self) -> RpcResult<()> {
        if self.offline {
            return Err(RpcError::Network("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainApi for MockNode {
    async fn get_block_count(&self) -> RpcResult<u32> {
        self.check_online()?;
        Ok(self.block_count)
    }

    async fn send_raw_transaction(&self, tx: &Transaction) -> RpcResult<UInt256> {
        self.check_online()?;
        let bytes = tx
            .to_bytes()
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        self.sent.lock().unwrap().push(bytes);
        tx.hash().map_err(|e| RpcError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl InvocationApi for MockNode {
    async fn invoke_script(&self, _script: &[u8], signers: &[Signer]) -> RpcResult<RpcInvokeResult> {
        self.check_online()?;
        self.invoked_signers.lock().unwrap().push(signers.to_vec());
        Ok(RpcInvokeResult {
            script: String::new(),
            state: self.state,
            gas_consumed: self.gas_consumed,
            exception: self.exception.clone(),
            stack: Vec::new(),
            session: None,
        })
    }
}

#[async_trait]
impl PolicyApi for MockNode {
    async fn get_fee_per_byte(&self) -> RpcResult<i64> {
        self.check_online()?;
        Ok(FEE_PER_BYTE)
    }

    async fn get_exec_fee_factor(&self) -> RpcResult<u32> {
        self.check_online()?;
        Ok(EXEC_FEE_FACTOR)
    }
}
