//! Interop service identifiers.
//!
//! A SYSCALL operand is the first four bytes of SHA-256 over the ASCII
//! service name, read as a little-endian `u32`.

use sha2::{Digest, Sha256};

pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";
pub const NEO_CRYPTO_VERIFY_SECP256R1: &str = "Neo.Crypto.VerifyWithECDsaSecp256r1";
pub const NEO_CRYPTO_CHECK_MULTISIG_SECP256R1: &str = "Neo.Crypto.CheckMultisigWithECDsaSecp256r1";

/// `System.Contract.Call`, script bytes `62 7d 5b 52`.
pub const SYSTEM_CONTRACT_CALL_ID: u32 = 0x525b_7d62;
/// Single-signature verification, script bytes `95 44 0d 78`.
pub const VERIFY_SECP256R1_ID: u32 = 0x780d_4495;
/// Multi-signature verification, script bytes `13 8d ef af`.
pub const CHECK_MULTISIG_SECP256R1_ID: u32 = 0xafef_8d13;

/// Fixed price of one signature check, before the exec fee factor.
pub const CHECK_SIG_PRICE: i64 = 1 << 15;

/// Computes the SYSCALL identifier for a service name.
pub fn interop_hash(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers() {
        assert_eq!(interop_hash(SYSTEM_CONTRACT_CALL), SYSTEM_CONTRACT_CALL_ID);
        assert_eq!(interop_hash(NEO_CRYPTO_VERIFY_SECP256R1), VERIFY_SECP256R1_ID);
        assert_eq!(
            interop_hash(NEO_CRYPTO_CHECK_MULTISIG_SECP256R1),
            CHECK_MULTISIG_SECP256R1_ID
        );
        assert_eq!(SYSTEM_CONTRACT_CALL_ID.to_le_bytes(), [0x62, 0x7d, 0x5b, 0x52]);
    }
}
