//! secp256r1 key pair.

use crate::{Error, Result};
use neo_config::SIGNATURE_SIZE;
use neo_core::crypto::hash256;
use neo_core::smart_contract::Contract;
use neo_core::{ECPoint, UInt160};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey};
use std::fmt;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED: u8 = 0x01;

/// A private key and its compressed public key.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    public_key: ECPoint,
}

impl KeyPair {
    /// Generates a fresh random key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self::from_signing_key(signing_key)
    }

    pub fn from_private_key(private_key: &[u8]) -> Result<Self> {
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| Error::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_signing_key(signing_key))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key = ECPoint::from(signing_key.verifying_key());
        Self {
            signing_key,
            public_key,
        }
    }

    /// Imports a compressed-key WIF string.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let data = bs58::decode(wif)
            .into_vec()
            .map_err(|e| Error::InvalidWif(e.to_string()))?;
        if data.len() != 38 {
            return Err(Error::InvalidWif(format!("decoded length {}", data.len())));
        }
        if data[0] != WIF_VERSION || data[33] != WIF_COMPRESSED {
            return Err(Error::InvalidWif("bad version or compression flag".into()));
        }
        if hash256(&data[..34])[..4] != data[34..] {
            return Err(Error::InvalidWif("bad checksum".into()));
        }
        Self::from_private_key(&data[1..33])
    }

    pub fn to_wif(&self) -> String {
        let mut data = Vec::with_capacity(38);
        data.push(WIF_VERSION);
        data.extend_from_slice(&self.private_key());
        data.push(WIF_COMPRESSED);
        let checksum = hash256(&data);
        data.extend_from_slice(&checksum[..4]);
        bs58::encode(data).into_string()
    }

    pub fn private_key(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.signing_key.to_bytes());
        bytes
    }

    pub fn public_key(&self) -> ECPoint {
        self.public_key
    }

    /// The single-signature verification contract of this key.
    pub fn contract(&self) -> Result<Contract> {
        Ok(Contract::create_signature_contract(&self.public_key)?)
    }

    /// Scripthash of the single-signature account.
    pub fn script_hash(&self) -> Result<UInt160> {
        Ok(self.contract()?.script_hash())
    }

    /// Deterministic (RFC 6979) ECDSA over SHA-256 of `message`, normalised
    /// to low-S.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_SIZE] {
        let signature: Signature = self.signing_key.sign(message);
        let signature = signature.normalize_s().unwrap_or(signature);
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(&signature.to_bytes());
        bytes
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_signature(&self.public_key, message, signature)
    }
}

/// Checks a 64-byte `r || s` signature over SHA-256 of `message`.
pub fn verify_signature(public_key: &ECPoint, message: &[u8], signature: &[u8]) -> bool {
    let Ok(verifying_key) = public_key.to_verifying_key() else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify(message, &signature).is_ok()
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.public_key)
    }
}
