//! Minimal two's-complement codec for VM integers.
//!
//! Zero encodes as the empty byte string. Every other value uses the fewest
//! little-endian bytes whose top bit carries the sign.

use num_bigint::BigInt;
use num_traits::Zero;

pub fn to_twos(value: &BigInt) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_signed_bytes_le()
    }
}

pub fn from_twos(bytes: &[u8]) -> BigInt {
    if bytes.is_empty() {
        BigInt::zero()
    } else {
        BigInt::from_signed_bytes_le(bytes)
    }
}

/// Sign-extends a two's-complement encoding to `width` bytes.
///
/// Callers guarantee `bytes.len() <= width`.
pub(crate) fn sign_extend(bytes: &[u8], width: usize) -> Vec<u8> {
    let negative = bytes.last().is_some_and(|b| b & 0x80 != 0);
    let fill = if negative { 0xFF } else { 0x00 };
    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(bytes);
    out.resize(width, fill);
    out
}
