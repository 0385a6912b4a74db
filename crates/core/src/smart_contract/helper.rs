// Copyright (C) 2015-2025 The Neo Project.
//
// helper.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Verification-script classification and its verification-cost model.
//!
//! Classification never executes the script: it walks the bytes with a
//! bounds-checked cursor and rejects on the first structural mismatch.
//! A mismatch is a negative answer, not an error.

use neo_config::{MAX_MULTISIG_KEYS, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_io::MemoryReader;
use neo_vm::interop::{CHECK_MULTISIG_SECP256R1_ID, CHECK_SIG_PRICE, VERIFY_SECP256R1_ID};
use neo_vm::OpCode;

/// Length of a single-signature verification script.
pub const SIGNATURE_CONTRACT_SIZE: usize = 41;

/// Length of one `PUSHDATA1 64 <signature>` in an invocation script.
pub const SIGNATURE_INVOCATION_SIZE: usize = 2 + SIGNATURE_SIZE;

/// The shape of a recognised verification script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationKind {
    SingleSig,
    MultiSig { threshold: usize, key_count: usize },
}

/// Recognises `PUSHDATA1 33 <key> PUSHNULL SYSCALL <verify id>`.
pub fn is_signature_contract(script: &[u8]) -> bool {
    if script.len() != SIGNATURE_CONTRACT_SIZE {
        return false;
    }
    let mut reader = MemoryReader::new(script);
    read_key(&mut reader).is_some() && read_syscall_tail(&mut reader, VERIFY_SECP256R1_ID)
}

/// Recognises an m-of-n multi-signature script, returning `(m, n)`.
pub fn is_multi_sig_contract(script: &[u8]) -> Option<(usize, usize)> {
    parse_multi_sig_contract(script).map(|(m, keys)| (m, keys.len()))
}

/// Like [`is_multi_sig_contract`] but also returns the keys in script order.
pub fn parse_multi_sig_contract(script: &[u8]) -> Option<(usize, Vec<[u8; PUBLIC_KEY_SIZE]>)> {
    let mut reader = MemoryReader::new(script);

    let m = read_count(&mut reader)?;
    if !(1..=MAX_MULTISIG_KEYS).contains(&m) {
        return None;
    }

    let mut keys = Vec::new();
    while reader.peek().ok()? == OpCode::PUSHDATA1 as u8 {
        keys.push(read_key(&mut reader)?);
        if keys.len() > MAX_MULTISIG_KEYS {
            return None;
        }
    }
    let n = keys.len();
    if n < m {
        return None;
    }

    if read_count(&mut reader)? != n {
        return None;
    }
    if !read_syscall_tail(&mut reader, CHECK_MULTISIG_SECP256R1_ID) {
        return None;
    }
    Some((m, keys))
}

/// Classifies a verification script.
pub fn classify(script: &[u8]) -> Option<VerificationKind> {
    if is_signature_contract(script) {
        return Some(VerificationKind::SingleSig);
    }
    is_multi_sig_contract(script).map(|(threshold, key_count)| VerificationKind::MultiSig {
        threshold,
        key_count,
    })
}

/// `PUSHDATA1 33 <33 bytes>`.
fn read_key(reader: &mut MemoryReader) -> Option<[u8; PUBLIC_KEY_SIZE]> {
    if reader.read_u8().ok()? != OpCode::PUSHDATA1 as u8 {
        return None;
    }
    if reader.read_u8().ok()? as usize != PUBLIC_KEY_SIZE {
        return None;
    }
    reader.read_array::<PUBLIC_KEY_SIZE>().ok()
}

/// A non-negative count pushed as PUSHINT8, PUSHINT16 or PUSH0..PUSH16.
fn read_count(reader: &mut MemoryReader) -> Option<usize> {
    let op = OpCode::from_u8(reader.read_u8().ok()?)?;
    let value = match op {
        OpCode::PUSHINT8 => reader.read_i8().ok()? as i64,
        OpCode::PUSHINT16 => reader.read_i16().ok()? as i64,
        other => other.small_int_value()?,
    };
    usize::try_from(value).ok()
}

/// `PUSHNULL SYSCALL <id>` followed by the end of the script.
fn read_syscall_tail(reader: &mut MemoryReader, interop_id: u32) -> bool {
    read_syscall(reader, interop_id).unwrap_or(false) && reader.is_at_end()
}

fn read_syscall(reader: &mut MemoryReader, interop_id: u32) -> Option<bool> {
    Some(
        reader.read_u8().ok()? == OpCode::PUSHNULL as u8
            && reader.read_u8().ok()? == OpCode::SYSCALL as u8
            && reader.read_u32().ok()? == interop_id,
    )
}

/// Base cost of verifying a single-signature witness, before the
/// execution fee factor is applied.
pub fn signature_contract_cost() -> i64 {
    OpCode::PUSHDATA1.price() * 2
        + OpCode::PUSHNULL.price()
        + OpCode::SYSCALL.price()
        + CHECK_SIG_PRICE
}

/// Base cost of verifying an m-of-n witness, before the execution fee
/// factor is applied.
pub fn multi_signature_contract_cost(m: usize, n: usize) -> i64 {
    OpCode::PUSHDATA1.price() * (m + n) as i64
        + push_count_price(m)
        + push_count_price(n)
        + OpCode::PUSHNULL.price()
        + OpCode::SYSCALL.price()
        + CHECK_SIG_PRICE * n as i64
}

/// Price of the opcode that pushes `value` in a multi-signature script.
fn push_count_price(value: usize) -> i64 {
    let op = match i64::try_from(value) {
        Ok(v) if v <= 16 => OpCode::small_int(v).unwrap_or(OpCode::PUSHINT8),
        Ok(v) if v <= i8::MAX as i64 => OpCode::PUSHINT8,
        _ => OpCode::PUSHINT16,
    };
    op.price()
}

/// Base verification cost of a recognised script.
pub fn verification_cost(kind: VerificationKind) -> i64 {
    match kind {
        VerificationKind::SingleSig => signature_contract_cost(),
        VerificationKind::MultiSig {
            threshold,
            key_count,
        } => multi_signature_contract_cost(threshold, key_count),
    }
}

/// Exact invocation-script length a real signature set will have.
pub fn invocation_size(kind: VerificationKind) -> usize {
    match kind {
        VerificationKind::SingleSig => SIGNATURE_INVOCATION_SIZE,
        VerificationKind::MultiSig { threshold, .. } => SIGNATURE_INVOCATION_SIZE * threshold,
    }
}
