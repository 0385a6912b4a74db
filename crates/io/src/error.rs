use thiserror::Error;

/// Errors raised while encoding or decoding binary data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("unexpected end of data: needed {needed} bytes at position {position}, {remaining} remaining")]
    UnexpectedEof {
        position: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid {context}: {value}")]
    InvalidData { context: String, value: String },

    #[error("{context} too large: {actual} exceeds maximum {max}")]
    FormatTooLarge {
        context: String,
        actual: u64,
        max: u64,
    },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl IoError {
    pub fn invalid_data(context: impl Into<String>, value: impl ToString) -> Self {
        IoError::InvalidData {
            context: context.into(),
            value: value.to_string(),
        }
    }

    pub fn too_large(context: impl Into<String>, actual: u64, max: u64) -> Self {
        IoError::FormatTooLarge {
            context: context.into(),
            actual,
            max,
        }
    }
}

impl From<hex::FromHexError> for IoError {
    fn from(err: hex::FromHexError) -> Self {
        IoError::InvalidHex(err.to_string())
    }
}

pub type IoResult<T> = Result<T, IoError>;
