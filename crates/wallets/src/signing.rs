//! Turning transactions into signed ones.

use crate::{Account, Error, KeyPair, Result};
use neo_config::SIGNATURE_SIZE;
use neo_core::smart_contract::{parse_multi_sig_contract, VerificationKind};
use neo_core::transaction::TransactionState;
use neo_core::{Transaction, Witness};
use neo_vm::ScriptBuilder;
use tracing::{debug, warn};

/// `PUSHDATA1 64 <signature>` for each signature, in order.
pub fn invocation_script(signatures: &[[u8; SIGNATURE_SIZE]]) -> Result<Vec<u8>> {
    let mut builder = ScriptBuilder::new();
    for signature in signatures {
        builder.emit_push_bytes(signature)?;
    }
    Ok(builder.to_array()?)
}

/// Single-signature witness of `key` over the transaction.
pub fn signature_witness(tx: &Transaction, key: &KeyPair, network: u32) -> Result<Witness> {
    let signature = key.sign(&tx.sign_data(network)?);
    Ok(Witness::new(
        invocation_script(&[signature])?,
        key.contract()?.script,
    ))
}

/// Signs for every signer of `tx` using the matching accounts.
///
/// All witnesses are produced before any is attached, so a missing key
/// leaves the transaction untouched. Multi-signature witnesses carry
/// exactly `m` signatures, ordered by key position in the script.
pub fn sign_transaction(tx: &mut Transaction, accounts: &[Account], network: u32) -> Result<()> {
    let hash = tx.hash()?;
    if tx.state() == TransactionState::Draft {
        warn!(tx = %hash, "signing a transaction whose fees were never computed");
    }
    let sign_data = tx.sign_data(network)?;
    let mut witnesses = Vec::with_capacity(tx.signers().len());

    for signer in tx.signers() {
        let account = accounts
            .iter()
            .find(|a| a.script_hash() == signer.account)
            .ok_or(Error::MissingKey(signer.account))?;
        let verification = account.contract().script.clone();
        let signatures = match account.contract().kind() {
            Some(VerificationKind::SingleSig) => {
                let key = account
                    .keys()
                    .first()
                    .ok_or(Error::MissingKey(signer.account))?;
                vec![key.sign(&sign_data)]
            }
            Some(VerificationKind::MultiSig { threshold, .. }) => {
                let (_, members) = parse_multi_sig_contract(&verification)
                    .ok_or(Error::UnsupportedWitness(signer.account))?;
                let signatures: Vec<[u8; SIGNATURE_SIZE]> = members
                    .iter()
                    .filter_map(|member| {
                        account
                            .keys()
                            .iter()
                            .find(|k| k.public_key().as_bytes() == member)
                    })
                    .take(threshold)
                    .map(|key| key.sign(&sign_data))
                    .collect();
                if signatures.len() < threshold {
                    return Err(Error::InsufficientSignatures {
                        account: signer.account,
                        available: signatures.len(),
                        required: threshold,
                    });
                }
                signatures
            }
            None => return Err(Error::UnsupportedWitness(signer.account)),
        };
        witnesses.push(Witness::new(invocation_script(&signatures)?, verification));
    }

    tx.attach_witnesses(witnesses)?;
    debug!(tx = %hash, network, "transaction signed");
    Ok(())
}
