//! Transaction encoding and lifecycle tests.

use neo_core::transaction::{OracleResponseCode, TransactionState};
use neo_core::{
    CoreError, Signer, Transaction, TransactionAttribute, UInt160, UInt256, Witness, WitnessScope,
};
use neo_config::ProtocolSettings;
use neo_io::Serializable;
use proptest::prelude::*;

fn verification(seed: u8) -> Vec<u8> {
    vec![0x0C, 0x01, seed, 0x40]
}

fn signer_for(seed: u8) -> Signer {
    Signer::called_by_entry(UInt160::from_script(&verification(seed)))
}

fn draft(seeds: &[u8]) -> Transaction {
    let signers = seeds.iter().map(|s| signer_for(*s)).collect();
    let mut tx = Transaction::new(vec![0x11, 0x40], signers).unwrap();
    tx.set_valid_until_block(500).unwrap();
    tx
}

fn sign(tx: &mut Transaction, seed: u8) {
    tx.add_witness(Witness::new(vec![0x0C, 0x40].into_iter().chain([seed; 64]).collect(), verification(seed)))
        .unwrap();
}

#[test]
fn test_lifecycle_draft_to_terminal() {
    let mut tx = draft(&[1]);
    assert_eq!(tx.state(), TransactionState::Draft);
    tx.set_fees(1_000, 2_000).unwrap();
    assert_eq!(tx.state(), TransactionState::FeeComputed);
    sign(&mut tx, 1);
    assert_eq!(tx.state(), TransactionState::Signed);
    tx.mark_sent().unwrap();
    assert_eq!(tx.state(), TransactionState::Terminal);
    assert!(matches!(tx.set_nonce(9), Err(CoreError::Immutable(_))));
    assert!(matches!(
        tx.add_attribute(TransactionAttribute::high_priority()),
        Err(CoreError::Immutable(_))
    ));
}

#[test]
fn test_mutation_after_signing_invalidates_witnesses() {
    let mut tx = draft(&[1]);
    tx.set_fees(10, 20).unwrap();
    sign(&mut tx, 1);
    let signed_hash = tx.hash().unwrap();

    tx.set_fees(10, 25).unwrap();
    assert_eq!(tx.state(), TransactionState::FeeComputed);
    assert_ne!(tx.hash().unwrap(), signed_hash);
    assert_eq!(tx.witnesses().len(), 1);
    assert!(!tx.witnesses()[0].is_signed());
    assert_eq!(tx.witnesses()[0].verification_script, verification(1));
}

#[test]
fn test_mutation_drops_partial_signatures() {
    let mut tx = draft(&[1, 2]);
    sign(&mut tx, 1);
    assert!(tx.witnesses()[0].is_signed());
    assert_eq!(tx.state(), TransactionState::Draft);

    tx.set_fees(10, 999).unwrap();
    tx.set_nonce(42).unwrap();
    assert!(!tx.witnesses()[0].is_signed());

    sign(&mut tx, 2);
    assert!(!tx.witnesses()[0].is_signed());
    assert!(tx.witnesses()[1].is_signed());
    assert_ne!(tx.state(), TransactionState::Signed);
    assert!(matches!(
        tx.validate_for_broadcast(100, &ProtocolSettings::default()),
        Err(CoreError::SignatureMismatch(_))
    ));
}

#[test]
fn test_placeholder_keeps_other_signatures() {
    let mut tx = draft(&[1, 2]);
    tx.set_fees(10, 20).unwrap();
    sign(&mut tx, 1);
    sign(&mut tx, 2);
    assert_eq!(tx.state(), TransactionState::Signed);

    tx.add_placeholder(verification(2)).unwrap();
    assert_eq!(tx.state(), TransactionState::FeeComputed);
    assert!(tx.witnesses()[0].is_signed());
    assert!(!tx.witnesses()[1].is_signed());
}

#[test]
fn test_oversized_attribute_rejected() {
    let mut tx = draft(&[1]);
    let oversized = TransactionAttribute::OracleResponse {
        id: 1,
        code: OracleResponseCode::Success,
        result: vec![0; 70_000],
    };
    assert!(matches!(
        tx.add_attribute(oversized),
        Err(CoreError::InvalidAttribute(_))
    ));
    assert!(tx.attributes().is_empty());
    assert!(tx.hash_data().is_ok());
}

#[test]
fn test_resend_requires_new_nonce() {
    let mut tx = draft(&[1]);
    tx.set_nonce(5).unwrap();
    tx.set_fees(1, 1).unwrap();
    sign(&mut tx, 1);
    tx.mark_sent().unwrap();

    assert!(tx.to_resend(5).is_err());
    let resend = tx.to_resend(6).unwrap();
    assert_eq!(resend.nonce(), 6);
    assert_eq!(resend.state(), TransactionState::FeeComputed);
    assert_ne!(resend.hash().unwrap(), tx.hash().unwrap());
    assert!(!resend.is_fully_signed());
}

#[test]
fn test_witnesses_follow_signer_order() {
    let mut tx = draft(&[1, 2, 3]);
    sign(&mut tx, 3);
    sign(&mut tx, 1);
    sign(&mut tx, 2);
    let order: Vec<UInt160> = tx.witnesses().iter().map(Witness::script_hash).collect();
    let signers: Vec<UInt160> = tx.signers().iter().map(|s| s.account).collect();
    assert_eq!(order, signers);
    assert_eq!(tx.state(), TransactionState::Signed);
}

#[test]
fn test_foreign_witness_rejected() {
    let mut tx = draft(&[1]);
    let stranger = Witness::new(vec![0x0C, 0x00], verification(7));
    assert!(matches!(
        tx.add_witness(stranger),
        Err(CoreError::SignatureMismatch(_))
    ));
    assert!(matches!(
        tx.attach_witnesses(vec![]),
        Err(CoreError::SignatureMismatch(_))
    ));
}

#[test]
fn test_signed_roundtrip_is_idempotent() {
    let mut tx = draft(&[1, 2]);
    tx.add_attribute(TransactionAttribute::conflicts(&UInt256::from([3; 32])))
        .unwrap();
    tx.add_attribute(
        TransactionAttribute::oracle_response(1, OracleResponseCode::Success, b"{}").unwrap(),
    )
    .unwrap();
    tx.set_fees(100, 200).unwrap();
    sign(&mut tx, 1);
    sign(&mut tx, 2);

    let bytes = tx.to_bytes().unwrap();
    let decoded = Transaction::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.hash().unwrap(), tx.hash().unwrap());
    assert_eq!(decoded.state(), TransactionState::Signed);
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
    assert_eq!(decoded.size(), bytes.len());
}

#[test]
fn test_signer_limit_with_attributes() {
    let seeds: Vec<u8> = (0..16).collect();
    let mut tx = draft(&seeds);
    assert!(tx.add_attribute(TransactionAttribute::high_priority()).is_err());
    let seeds: Vec<u8> = (0..17).collect();
    let signers = seeds.iter().map(|s| signer_for(*s)).collect();
    assert!(Transaction::new(vec![0x40], signers).is_err());
}

fn arb_scope() -> impl Strategy<Value = WitnessScope> {
    prop_oneof![
        Just(WitnessScope::None),
        Just(WitnessScope::CalledByEntry),
        Just(WitnessScope::Global),
        Just(WitnessScope::CalledByEntry | WitnessScope::CustomContracts),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_hash(
        nonce in any::<u32>(),
        system_fee in 0i64..i64::MAX,
        network_fee in 0i64..1_000_000_000,
        valid_until_block in any::<u32>(),
        script in proptest::collection::vec(any::<u8>(), 1..300),
        scope in arb_scope(),
        contracts in proptest::collection::vec(any::<[u8; 20]>(), 1..4),
    ) {
        let account = UInt160::from([0xAA; 20]);
        let mut signer = Signer::new(account, scope);
        if scope.has_flag(WitnessScope::CustomContracts) {
            signer.allowed_contracts = contracts.into_iter().map(UInt160::from).collect();
            signer.allowed_contracts.dedup();
        }
        let mut tx = Transaction::new(script, vec![signer]).unwrap();
        tx.set_nonce(nonce).unwrap();
        tx.set_valid_until_block(valid_until_block).unwrap();
        tx.set_fees(system_fee, network_fee).unwrap();

        let bytes = tx.to_bytes().unwrap();
        let decoded = Transaction::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.hash().unwrap(), tx.hash().unwrap());
        prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }
}
