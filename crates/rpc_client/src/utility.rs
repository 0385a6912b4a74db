// Copyright (C) 2015-2025 The Neo Project.
//
// utility.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Conversions between SDK values and their JSON-RPC representations.

use crate::{RpcError, RpcResult};
use base64::{engine::general_purpose, Engine as _};
use neo_config::GAS_FACTOR;
use neo_core::{Signer, UInt160};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use std::str::FromStr;

/// Parses a gas amount reported by a node into datoshi.
///
/// An integer string is already datoshi. A decimal string is GAS; it is
/// scaled by 10^8 and rounded up so a fee is never under-reported.
pub fn parse_gas(text: &str) -> RpcResult<i64> {
    let text = text.trim();
    let invalid = |reason: &str| RpcError::InvalidResponse(format!("gas amount {text:?}: {reason}"));
    let datoshi = if text.contains('.') {
        let gas = Decimal::from_str(text).map_err(|e| invalid(&e.to_string()))?;
        gas.checked_mul(Decimal::from(GAS_FACTOR))
            .ok_or_else(|| invalid("out of range"))?
            .ceil()
            .to_i64()
            .ok_or_else(|| invalid("out of range"))?
    } else {
        text.parse::<i64>().map_err(|e| invalid(&e.to_string()))?
    };
    if datoshi < 0 {
        return Err(invalid("negative"));
    }
    Ok(datoshi)
}

/// Accepts either an address or a `0x`-prefixed scripthash.
pub fn to_script_hash(address_or_script_hash: &str, address_version: u8) -> RpcResult<UInt160> {
    let parsed = if address_or_script_hash.starts_with("0x") || address_or_script_hash.len() == 40 {
        UInt160::parse(address_or_script_hash)
    } else {
        UInt160::from_address(address_or_script_hash, address_version)
    };
    parsed.map_err(|e| RpcError::Config(format!("{address_or_script_hash}: {e}")))
}

/// Signer in the form `invokescript` accepts.
pub fn signer_to_json(signer: &Signer) -> Value {
    let mut object = Map::new();
    object.insert("account".into(), json!(signer.account.to_hex_string()));
    object.insert("scopes".into(), json!(signer.scopes.to_string()));
    if !signer.allowed_contracts.is_empty() {
        let contracts: Vec<String> = signer
            .allowed_contracts
            .iter()
            .map(UInt160::to_hex_string)
            .collect();
        object.insert("allowedcontracts".into(), json!(contracts));
    }
    if !signer.allowed_groups.is_empty() {
        let groups: Vec<String> = signer.allowed_groups.iter().map(|g| g.to_hex()).collect();
        object.insert("allowedgroups".into(), json!(groups));
    }
    Value::Object(object)
}

pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
