//! Errors raised while assembling or decoding VM bytecode.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("script too large: {size} bytes exceeds maximum {max}")]
    ScriptTooLarge { size: usize, max: usize },

    #[error("push item too large: {size} bytes exceeds maximum {max}")]
    ItemTooLarge { size: usize, max: usize },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid opcode 0x{value:02x} at {position}")]
    InvalidOpCode { position: usize, value: u8 },

    #[error("operand of {opcode} truncated at {position}")]
    TruncatedOperand { position: usize, opcode: &'static str },
}

impl VmError {
    pub fn invalid_operation_msg<S: Into<String>>(msg: S) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

impl From<hex::FromHexError> for VmError {
    fn from(err: hex::FromHexError) -> Self {
        VmError::InvalidEncoding(err.to_string())
    }
}

pub type VmResult<T> = Result<T, VmError>;
