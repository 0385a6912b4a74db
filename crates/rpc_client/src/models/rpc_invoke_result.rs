// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::utility::parse_gas;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Final state of a simulated execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VmState {
    None,
    Halt,
    Fault,
    Break,
}

impl FromStr for VmState {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(VmState::None),
            "HALT" => Ok(VmState::Halt),
            "FAULT" => Ok(VmState::Fault),
            "BREAK" => Ok(VmState::Break),
            _ => Err(format!("unknown VM state {value:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for VmState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VmState::None => "NONE",
            VmState::Halt => "HALT",
            VmState::Fault => "FAULT",
            VmState::Break => "BREAK",
        };
        f.write_str(name)
    }
}

/// One result stack entry as the node reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcStackItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub value: Value,
}

impl RpcStackItem {
    /// Integer items carry their value as a decimal string.
    pub fn as_i64(&self) -> Option<i64> {
        if self.item_type != "Integer" {
            return None;
        }
        match &self.value {
            Value::String(text) => text.parse().ok(),
            Value::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match (self.item_type.as_str(), &self.value) {
            ("Boolean", Value::Bool(value)) => Some(*value),
            ("Integer", _) => self.as_i64().map(|v| v != 0),
            _ => None,
        }
    }
}

/// Result of `invokescript`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcInvokeResult {
    pub script: String,
    pub state: VmState,
    /// Datoshi consumed by the simulation, rounded up.
    #[serde(rename = "gasconsumed", deserialize_with = "deserialize_gas")]
    pub gas_consumed: i64,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub stack: Vec<RpcStackItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl RpcInvokeResult {
    pub fn is_fault(&self) -> bool {
        self.state == VmState::Fault
    }
}

fn deserialize_gas<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "gasconsumed must be a string or number, got {other}"
            )))
        }
    };
    parse_gas(&text).map_err(serde::de::Error::custom)
}
