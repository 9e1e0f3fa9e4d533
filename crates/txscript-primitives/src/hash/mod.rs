//! Hash function primitives used by the script builders.
//!
//! Provides SHA-256, RIPEMD-160 and Hash160, the digests that P2PKH, P2SH
//! and segwit v0 witness programs commit to.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length in bytes of a SHA-256 digest.
pub const SHA256_LEN: usize = 32;

/// Length in bytes of a RIPEMD-160 or Hash160 digest.
pub const HASH160_LEN: usize = 20;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; HASH160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// Used for public key hashes (P2PKH, P2WPKH) and script hashes (P2SH).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte Hash160 digest.
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    ripemd160(&sha256(data))
}
