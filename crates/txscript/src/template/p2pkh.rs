//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use tracing::debug;
use txscript_primitives::ec::signature::compact_to_der;
use txscript_primitives::hash::hash160;

use crate::flags::BuildFlags;
use crate::limits::{
    EC_SIGNATURE_DER_MAX_LEN, EC_SIGNATURE_DER_MIN_LEN, EC_SIGNATURE_LEN, HASH160_LEN,
    SCRIPTPUBKEY_P2PKH_LEN,
};
use crate::opcodes::*;
use crate::push::push_size;
use crate::sighash::sighash_byte;
use crate::template::{check_pubkey, ensure_capacity, fits};
use crate::writer::ScriptWriter;
use crate::{Result, ScriptError};

/// Create a P2PKH locking script for a public key hash.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn lock(hash: &[u8; HASH160_LEN]) -> [u8; SCRIPTPUBKEY_P2PKH_LEN] {
    let mut script = [0u8; SCRIPTPUBKEY_P2PKH_LEN];
    script[0] = OP_DUP;
    script[1] = OP_HASH160;
    script[2] = OP_DATA_20;
    script[3..23].copy_from_slice(hash);
    script[23] = OP_EQUALVERIFY;
    script[24] = OP_CHECKSIG;
    script
}

/// Write a P2PKH locking script for a public key or its hash.
///
/// # Arguments
/// * `bytes` - A 33/65-byte public key when `flags` is `HASH160`, otherwise
///   the 20-byte public key hash.
/// * `flags` - `HASH160` or `NONE`. Any other bit is rejected.
/// * `out` - Destination, at least 25 bytes.
///
/// # Returns
/// The number of bytes written (always 25).
pub fn lock_from_bytes(bytes: &[u8], flags: BuildFlags, out: &mut [u8]) -> Result<usize> {
    flags.ensure_only(BuildFlags::HASH160)?;

    let hash: [u8; HASH160_LEN] = if flags.has_flag(BuildFlags::HASH160) {
        check_pubkey(bytes)?;
        hash160(bytes)
    } else if bytes.is_empty() {
        return Err(ScriptError::EmptyInput("hash160"));
    } else {
        bytes
            .try_into()
            .map_err(|_| ScriptError::InvalidLength { what: "hash160", len: bytes.len() })?
    };

    ensure_capacity(SCRIPTPUBKEY_P2PKH_LEN, out)?;
    out[..SCRIPTPUBKEY_P2PKH_LEN].copy_from_slice(&lock(&hash));
    Ok(SCRIPTPUBKEY_P2PKH_LEN)
}

/// Write a P2PKH unlocking script from a DER signature.
///
/// Produces: `<sig> <pubkey>`
///
/// # Arguments
/// * `pubkey` - The 33 or 65-byte public key.
/// * `sig` - DER signature with the sighash byte already appended.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn unlock_from_der(pubkey: &[u8], sig: &[u8], out: &mut [u8]) -> Result<usize> {
    check_pubkey(pubkey)?;
    if sig.is_empty() {
        return Err(ScriptError::EmptyInput("signature"));
    }
    if !(EC_SIGNATURE_DER_MIN_LEN + 1..=EC_SIGNATURE_DER_MAX_LEN + 1).contains(&sig.len()) {
        return Err(ScriptError::InvalidLength { what: "der signature", len: sig.len() });
    }

    let needed = push_size(sig.len())? + push_size(pubkey.len())?;
    if !fits("p2pkh scriptSig", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.push(sig)?.push(pubkey)?;
    Ok(w.finish())
}

/// Write a P2PKH unlocking script from a compact signature.
///
/// The 64-byte `r || s` signature is converted to DER and `sighash` appended
/// before encoding as [`unlock_from_der`] does.
///
/// # Arguments
/// * `pubkey` - The 33 or 65-byte public key.
/// * `sig` - Compact signature; r and s must be non-zero and below the curve order.
/// * `sighash` - Sighash flag in `0x01..=0xff`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn unlock_from_sig(pubkey: &[u8], sig: &[u8], sighash: u32, out: &mut [u8]) -> Result<usize> {
    check_pubkey(pubkey)?;
    match sig.len() {
        0 => return Err(ScriptError::EmptyInput("signature")),
        EC_SIGNATURE_LEN => {}
        len => return Err(ScriptError::InvalidLength { what: "compact signature", len }),
    }
    let sighash = sighash_byte(sighash)?;

    let mut der = compact_to_der(sig).map_err(|e| {
        debug!(error = %e, "p2pkh: compact signature rejected");
        e
    })?;
    der.push(sighash);
    unlock_from_der(pubkey, &der, out)
}
