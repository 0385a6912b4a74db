//! Builder to wire bytes, across every crate.

use async_trait::async_trait;
use neo_sdk::prelude::*;
use neo_sdk::rpc_client::models::RpcInvokeResult;
use neo_sdk::rpc_client::{ChainApi, InvocationApi, PolicyApi, RpcResult, VmState};
use neo_sdk::wallets::sign_transaction;
use std::sync::Mutex;

const RECIPIENT: &str = "NNzehZ6b58uW7EjwnTYT1CmD5a45CZQpTt";

const GOLDEN_SCRIPT: &str = "0b00640c1421cb068f790bef2666fc8e465231c5b1b75393260c14f0c9174ab87450f3189399bb0855fa0aee46262814c01f0c087472616e736665720c14cf76e28bd0062c4a478ee35561011319f3cfa4d241627d5b52";

const GOLDEN_HASH: &str = "0xb082c60dbaea0e0d8a883a5cacd6543c58b5ec745267e9ca390e165dc36dc9d4";

const GOLDEN_TX: &str = "00010000008f390f0000000000eec21200000000008813000001f0c9174ab87450f3189399bb0855fa0aee4626280100570b00640c1421cb068f790bef2666fc8e465231c5b1b75393260c14f0c9174ab87450f3189399bb0855fa0aee46262814c01f0c087472616e736665720c14cf76e28bd0062c4a478ee35561011319f3cfa4d241627d5b5201420c4024fb60587f99b67b86e7d3ff2842ea81e82205216402b15702f7f888929c2b0757104a58c34a776a5b65777d481db3314a8ef34e45d8bd9e0ee01534eb8ad5f3290c21026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca160b4195440d78";

fn sender() -> Account {
    Account::from_key_pair(KeyPair::from_private_key(&[0x01; 32]).unwrap()).unwrap()
}

fn golden_builder(sender: &Account) -> TransactionBuilder {
    let recipient = UInt160::from_address(RECIPIENT, 0x35).unwrap();
    let mut builder = TransactionBuilder::new();
    builder
        .nonce(1)
        .valid_until_block(5_000)
        .transfer(
            NativeContract::GasToken.hash(),
            sender.contract(),
            recipient,
            100,
        )
        .unwrap();
    builder
}

#[test]
fn test_golden_transfer() {
    let sender = sender();
    let settings = ProtocolSettings::mainnet();
    assert_eq!(settings.network, 860_833_102);

    let mut tx = golden_builder(&sender).build().unwrap();
    assert_eq!(hex::encode(tx.script()), GOLDEN_SCRIPT);
    tx.set_fees(997_775, 1_229_550).unwrap();
    assert_eq!(tx.hash().unwrap().to_hex_string(), GOLDEN_HASH);

    sign_transaction(&mut tx, &[sender], settings.network).unwrap();
    assert_eq!(tx.state(), TransactionState::Signed);
    assert_eq!(tx.to_hex().unwrap(), GOLDEN_TX);

    let decoded = Transaction::from_hex(GOLDEN_TX).unwrap();
    assert_eq!(decoded, tx);
    assert_eq!(decoded.state(), TransactionState::Signed);
    assert_eq!(decoded.hash().unwrap(), tx.hash().unwrap());
    assert_eq!(decoded.to_hex().unwrap(), GOLDEN_TX);
}

struct FixedNode {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl ChainApi for FixedNode {
    async fn get_block_count(&self) -> RpcResult<u32> {
        Ok(4_000)
    }

    async fn send_raw_transaction(&self, tx: &Transaction) -> RpcResult<UInt256> {
        self.sent.lock().unwrap().push(tx.to_hex().unwrap());
        Ok(tx.hash().unwrap())
    }
}

#[async_trait]
impl InvocationApi for FixedNode {
    async fn invoke_script(&self, _script: &[u8], _signers: &[Signer]) -> RpcResult<RpcInvokeResult> {
        Ok(RpcInvokeResult {
            script: String::new(),
            state: VmState::Halt,
            gas_consumed: 997_775,
            exception: None,
            stack: Vec::new(),
            session: None,
        })
    }
}

#[async_trait]
impl PolicyApi for FixedNode {
    async fn get_fee_per_byte(&self) -> RpcResult<i64> {
        Ok(1_000)
    }

    async fn get_exec_fee_factor(&self) -> RpcResult<u32> {
        Ok(30)
    }
}

#[tokio::test]
async fn test_manager_reproduces_golden_bytes() {
    let _ = neo_sdk::logging::init("neo_rpc_client=debug");
    let node = FixedNode {
        sent: Mutex::new(Vec::new()),
    };
    let manager = TransactionManager::new(&node, ProtocolSettings::mainnet());
    let sender = sender();

    let (mut tx, report) = manager
        .make_transaction(&golden_builder(&sender), &FeeOverrides::none())
        .await
        .unwrap();
    assert_eq!(report.minimum_system_fee, 997_775);
    // 246 bytes signed, plus one single-signature check at factor 30.
    assert_eq!(report.minimum_network_fee, 246 * 1_000 + 30 * 32_785);
    assert_eq!(report.network_fee, 1_229_550);
    assert!(report.adjustments.is_empty());

    manager.sign(&mut tx, &[sender]).unwrap();
    let hash = manager.send(&mut tx).await.unwrap();
    assert_eq!(hash.to_hex_string(), GOLDEN_HASH);
    assert_eq!(node.sent.lock().unwrap().as_slice(), &[GOLDEN_TX.to_string()]);
}
