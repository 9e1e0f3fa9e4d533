//! Size limits and fixed lengths used by the script templates.

pub use txscript_primitives::hash::{HASH160_LEN, SHA256_LEN};

use txscript_primitives::ec::signature::{
    COMPACT_SIGNATURE_LEN, DER_SIGNATURE_MAX_LEN, DER_SIGNATURE_MIN_LEN,
};

/// Length of a compressed secp256k1 public key.
pub const EC_PUBLIC_KEY_LEN: usize = 33;

/// Length of an uncompressed secp256k1 public key.
pub const EC_PUBLIC_KEY_UNCOMPRESSED_LEN: usize = 65;

/// Length of a compact `r || s` signature.
pub const EC_SIGNATURE_LEN: usize = COMPACT_SIGNATURE_LEN;

/// Maximum length of a DER encoded signature, excluding the sighash byte.
pub const EC_SIGNATURE_DER_MAX_LEN: usize = DER_SIGNATURE_MAX_LEN;

/// Minimum length of a DER encoded signature, excluding the sighash byte.
pub const EC_SIGNATURE_DER_MIN_LEN: usize = DER_SIGNATURE_MIN_LEN;

/// Length of a P2PKH scriptPubKey.
pub const SCRIPTPUBKEY_P2PKH_LEN: usize = 25;

/// Length of a P2SH scriptPubKey.
pub const SCRIPTPUBKEY_P2SH_LEN: usize = 23;

/// Length of a P2WPKH scriptPubKey.
pub const SCRIPTPUBKEY_P2WPKH_LEN: usize = 22;

/// Length of a P2WSH scriptPubKey.
pub const SCRIPTPUBKEY_P2WSH_LEN: usize = 34;

/// Maximum number of public keys in a multisig script.
pub const MAX_MULTISIG_KEYS: usize = 16;

/// Largest relative timelock accepted by the CSV templates.
pub const MAX_CSV_BLOCKS: u32 = 0xffff;

/// Maximum payload of a standard OP_RETURN output.
pub const MAX_OP_RETURN_LEN: usize = 80;

/// Maximum length of a standard OP_RETURN scriptPubKey
/// (`OP_RETURN OP_PUSHDATA1 <len> <80 bytes>`).
pub const SCRIPTPUBKEY_OP_RETURN_MAX_LEN: usize = 1 + 2 + MAX_OP_RETURN_LEN;

/// Largest push a single direct-length opcode can encode.
pub const MAX_DIRECT_PUSH_LEN: usize = 75;
