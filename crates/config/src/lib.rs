//! Neo Configuration Module
//!
//! Protocol constants shared by every layer of the SDK, and the explicit
//! [`ProtocolSettings`] value that carries per-network parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Blockchain timing constants
pub const SECONDS_PER_BLOCK: u64 = 15;
pub const MILLISECONDS_PER_BLOCK: u64 = SECONDS_PER_BLOCK * 1000;

/// Network limits constants
pub const MAX_TRANSACTION_SIZE: usize = 102_400; // 100KB
/// Maximum number of blocks that can be traced (about 1 year)
pub const MAX_TRACEABLE_BLOCKS: u32 = 2_102_400;
/// Upper bound on `valid_until_block - current_height`.
pub const MAX_VALID_UNTIL_BLOCK_INCREMENT: u32 = 5_760;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a compressed secp256r1 public key
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of a raw `r || s` signature
pub const SIGNATURE_SIZE: usize = 64;

/// Maximum length of a transaction script.
pub const MAX_SCRIPT_LENGTH: usize = u16::MAX as usize;
/// Maximum size of a single VM stack item, and therefore of one push.
pub const MAX_ITEM_SIZE: usize = 1024 * 1024;
/// Maximum number of signers, and of signers plus attributes together.
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Maximum number of keys in a multi-signature contract.
pub const MAX_MULTISIG_KEYS: usize = 1024;

/// Fixed-point precision of GAS, in decimal places.
pub const GAS_DECIMALS: u32 = 8;
/// One whole GAS in datoshi.
pub const GAS_FACTOR: i64 = 100_000_000;

/// Default address version byte for N3 networks.
pub const ADDRESS_VERSION: u8 = 0x35;

/// Default policy values applied when a node cannot be queried.
pub const DEFAULT_FEE_PER_BYTE: i64 = 1000;
pub const DEFAULT_EXEC_FEE_FACTOR: u32 = 30;

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("unknown network type: {0}")]
    UnknownNetwork(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e, // "NEO3" in little endian
            NetworkType::TestNet => 0x3254334e, // "N3T2" in little endian
            NetworkType::Private => 0x00000000,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Per-network protocol parameters.
///
/// Passed explicitly to the components that need them; there is no global
/// registry of settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolSettings {
    /// Network magic, part of every signed payload.
    pub network: u32,
    pub address_version: u8,
    pub max_valid_until_block_increment: u32,
    pub max_transaction_size: usize,
    pub max_traceable_blocks: u32,
    pub milliseconds_per_block: u64,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::for_network(NetworkType::default())
    }
}

impl ProtocolSettings {
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network: network.magic(),
            address_version: ADDRESS_VERSION,
            max_valid_until_block_increment: MAX_VALID_UNTIL_BLOCK_INCREMENT,
            max_transaction_size: MAX_TRANSACTION_SIZE,
            max_traceable_blocks: MAX_TRACEABLE_BLOCKS,
            milliseconds_per_block: MILLISECONDS_PER_BLOCK,
        }
    }

    pub fn mainnet() -> Self {
        Self::for_network(NetworkType::MainNet)
    }

    pub fn testnet() -> Self {
        Self::for_network(NetworkType::TestNet)
    }

    /// Parses settings from TOML text. Missing keys take testnet defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks that the limits are internally consistent.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_valid_until_block_increment == 0 {
            return Err(ConfigError::Invalid {
                field: "max_valid_until_block_increment",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_transaction_size == 0 {
            return Err(ConfigError::Invalid {
                field: "max_transaction_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_valid_until_block_increment > self.max_traceable_blocks {
            return Err(ConfigError::Invalid {
                field: "max_valid_until_block_increment",
                reason: format!(
                    "{} exceeds max_traceable_blocks {}",
                    self.max_valid_until_block_increment, self.max_traceable_blocks
                ),
            });
        }
        Ok(())
    }
}
