//! Typed contract-call arguments.

use num_bigint::BigInt;

/// A typed argument for a contract method.
///
/// Hash and key variants hold bytes in wire order, which is how they are
/// pushed onto the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160([u8; 20]),
    Hash256([u8; 32]),
    PublicKey([u8; 33]),
    Signature([u8; 64]),
    Array(Vec<ContractParameter>),
    Map(Vec<(ContractParameter, ContractParameter)>),
}

impl ContractParameter {
    pub fn integer<T: Into<BigInt>>(value: T) -> Self {
        Self::Integer(value.into())
    }

    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::String(value.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::ByteArray(_) => "ByteArray",
            Self::String(_) => "String",
            Self::Hash160(_) => "Hash160",
            Self::Hash256(_) => "Hash256",
            Self::PublicKey(_) => "PublicKey",
            Self::Signature(_) => "Signature",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
        }
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteArray(value)
    }
}
