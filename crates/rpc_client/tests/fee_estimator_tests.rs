//! Fee estimation against an in-memory node.

mod common;

use common::{MockNode, EXEC_FEE_FACTOR, FEE_PER_BYTE};
use neo_core::smart_contract::{multi_signature_contract_cost, signature_contract_cost};
use neo_core::{
    Contract, ECPoint, NativeContract, Signer, Transaction, TransactionAttribute,
    TransactionBuilder, TransactionState, UInt160, UInt256,
};
use neo_rpc_client::{
    calculate_network_fee, FeeEstimator, FeeKind, FeeOverrides, TransactionError,
};
use neo_wallets::KeyPair;

fn key(seed: u8) -> KeyPair {
    KeyPair::from_private_key(&[seed; 32]).unwrap()
}

fn transfer_from(account: &Contract) -> TransactionBuilder {
    let mut builder = TransactionBuilder::new();
    builder
        .nonce(1)
        .valid_until_block(1_500)
        .transfer(
            NativeContract::GasToken.hash(),
            account,
            UInt160::zero(),
            100,
        )
        .unwrap();
    builder
}

#[test]
fn test_single_sig_network_fee_formula() {
    let account = key(1).contract().unwrap();
    let tx = transfer_from(&account).build().unwrap();
    let unsigned = tx.to_bytes().unwrap().len() as i64;

    let fee = calculate_network_fee(&tx, FEE_PER_BYTE, EXEC_FEE_FACTOR).unwrap();
    let expected =
        (unsigned + 66) * FEE_PER_BYTE + i64::from(EXEC_FEE_FACTOR) * signature_contract_cost();
    assert_eq!(fee, expected);
    // Pricing works on a copy.
    assert_eq!(tx.state(), TransactionState::Draft);
    assert!(tx.witnesses()[0].invocation_script.is_empty());
}

#[test]
fn test_multi_sig_network_fee_formula() {
    let members: Vec<ECPoint> = (1..=3).map(|i| key(i).public_key()).collect();
    let account = Contract::create_multi_sig_contract(2, &members).unwrap();
    let tx = transfer_from(&account).build().unwrap();
    let unsigned = tx.to_bytes().unwrap().len() as i64;

    let fee = calculate_network_fee(&tx, FEE_PER_BYTE, EXEC_FEE_FACTOR).unwrap();
    let expected = (unsigned + 132) * FEE_PER_BYTE
        + i64::from(EXEC_FEE_FACTOR) * multi_signature_contract_cost(2, 3);
    assert_eq!(fee, expected);
}

#[test]
fn test_network_fee_grows_with_attribute_payload() {
    let account = key(1).contract().unwrap();
    let base = transfer_from(&account);

    let mut small = base.clone();
    small.add_attribute(TransactionAttribute::high_priority());
    let mut large = base.clone();
    large.add_attribute(TransactionAttribute::conflicts(&UInt256::zero()));

    let small_fee =
        calculate_network_fee(&small.build().unwrap(), FEE_PER_BYTE, EXEC_FEE_FACTOR).unwrap();
    let large_fee =
        calculate_network_fee(&large.build().unwrap(), FEE_PER_BYTE, EXEC_FEE_FACTOR).unwrap();
    assert!(large_fee >= small_fee);
    assert_eq!(large_fee - small_fee, 32 * FEE_PER_BYTE);
}

#[test]
fn test_signer_without_recognised_script_is_unsupported() {
    let contract_account = UInt160::from_script(&[0x11]);
    let mut builder = TransactionBuilder::new();
    builder
        .nonce(1)
        .valid_until_block(10)
        .add_script(vec![0x40])
        .add_signer(Signer::called_by_entry(contract_account))
        .unwrap();
    let tx = builder.build().unwrap();
    assert_eq!(
        calculate_network_fee(&tx, FEE_PER_BYTE, EXEC_FEE_FACTOR),
        Err(TransactionError::UnsupportedWitness(contract_account))
    );

    builder.add_placeholder(vec![0x11]);
    let tx = builder.build().unwrap();
    assert_eq!(
        calculate_network_fee(&tx, FEE_PER_BYTE, EXEC_FEE_FACTOR),
        Err(TransactionError::UnsupportedWitness(contract_account))
    );
}

#[tokio::test]
async fn test_estimate_writes_minimum_fees() {
    let node = MockNode::halting(997_775);
    let account = key(1).contract().unwrap();
    let mut tx = transfer_from(&account).build().unwrap();

    let report = FeeEstimator::new(&node)
        .estimate(&mut tx, &FeeOverrides::none())
        .await
        .unwrap();
    assert_eq!(report.system_fee, 997_775);
    assert_eq!(report.minimum_system_fee, 997_775);
    assert_eq!(
        report.network_fee,
        calculate_network_fee(&tx, FEE_PER_BYTE, EXEC_FEE_FACTOR).unwrap()
    );
    assert!(report.adjustments.is_empty());
    assert_eq!(tx.system_fee(), report.system_fee);
    assert_eq!(tx.network_fee(), report.network_fee);
    assert_eq!(tx.state(), TransactionState::FeeComputed);

    // Simulation sees the real signer set.
    let invoked = node.invoked_signers.lock().unwrap();
    assert_eq!(invoked[0], tx.signers().to_vec());
}

#[tokio::test]
async fn test_fault_never_guesses_a_fee() {
    let node = MockNode::faulting("ASSERT is executed with false result.");
    let account = key(1).contract().unwrap();
    let mut tx = transfer_from(&account).build().unwrap();

    let err = FeeEstimator::new(&node)
        .estimate(&mut tx, &FeeOverrides::none())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransactionError::ScriptExecutionFault {
            exception: Some("ASSERT is executed with false result.".into())
        }
    );
    assert_eq!(tx.state(), TransactionState::Draft);
    assert_eq!(tx.system_fee(), 0);
}

#[tokio::test]
async fn test_below_minimum_override_rejected() {
    let node = MockNode::halting(1_000_000);
    let account = key(1).contract().unwrap();
    let mut tx = transfer_from(&account).build().unwrap();
    let overrides = FeeOverrides {
        system_fee: Some(999_999),
        ..FeeOverrides::none()
    };

    let err = FeeEstimator::new(&node)
        .estimate(&mut tx, &overrides)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransactionError::InsufficientFee {
            kind: FeeKind::System,
            supplied: 999_999,
            minimum: 1_000_000
        }
    );
    assert_eq!(tx.state(), TransactionState::Draft);
}

#[tokio::test]
async fn test_autofix_raises_override_and_reports_it() {
    let node = MockNode::halting(1_000_000);
    let account = key(1).contract().unwrap();
    let mut tx = transfer_from(&account).build().unwrap();
    let overrides = FeeOverrides {
        system_fee: Some(5_000_000),
        network_fee: Some(1),
        autofix: true,
    };

    let report = FeeEstimator::new(&node)
        .estimate(&mut tx, &overrides)
        .await
        .unwrap();
    assert_eq!(report.system_fee, 5_000_000);
    assert_eq!(report.network_fee, report.minimum_network_fee);
    assert_eq!(report.adjustments.len(), 1);
    assert_eq!(report.adjustments[0].kind, FeeKind::Network);
    assert_eq!(report.adjustments[0].requested, 1);
    assert_eq!(tx.network_fee(), report.minimum_network_fee);
}

#[tokio::test]
async fn test_unreachable_node_is_retriable() {
    let node = MockNode::offline();
    let account = key(1).contract().unwrap();
    let mut tx: Transaction = transfer_from(&account).build().unwrap();

    match FeeEstimator::new(&node)
        .estimate(&mut tx, &FeeOverrides::none())
        .await
    {
        Err(TransactionError::Rpc(err)) => assert!(err.is_retriable()),
        other => panic!("expected a network error, got {other:?}"),
    }
}
