//! Bare multisig locking scripts and P2SH-multisig unlocking scripts.
//!
//! Locking: `OP_m <pubkey>... OP_n OP_CHECKMULTISIG`.
//! Unlocking: `OP_0 <sig>... <redeem script>`. The leading OP_0 is the dummy
//! element OP_CHECKMULTISIG pops in addition to its arguments.

use tracing::debug;
use txscript_primitives::ec::signature::compact_to_der;

use crate::flags::BuildFlags;
use crate::limits::{EC_PUBLIC_KEY_LEN, EC_SIGNATURE_LEN, MAX_MULTISIG_KEYS};
use crate::opcodes::{OP_0, OP_CHECKMULTISIG};
use crate::push::push_size;
use crate::sighash::sighash_byte;
use crate::template::{fits, split_pubkeys};
use crate::writer::ScriptWriter;
use crate::{Result, ScriptError};

/// Size of an m-of-n locking script with `n` compressed keys.
pub fn lock_len(n: usize) -> usize {
    3 + (EC_PUBLIC_KEY_LEN + 1) * n
}

/// Write an m-of-n multisig locking script.
///
/// # Arguments
/// * `keys` - Concatenated 33-byte compressed public keys, 1 to 16 of them.
/// * `threshold` - Number of signatures required, 1 to the number of keys.
/// * `flags` - Must be `NONE`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn lock_from_bytes(
    keys: &[u8],
    threshold: u32,
    flags: BuildFlags,
    out: &mut [u8],
) -> Result<usize> {
    flags.ensure_only(BuildFlags::NONE)?;
    let pubkeys = split_pubkeys(keys)?;
    let n = pubkeys.len();
    if n > MAX_MULTISIG_KEYS {
        return Err(ScriptError::InvalidKeyCount(n));
    }
    let m = threshold as usize;
    if m == 0 || m > n {
        return Err(ScriptError::InvalidThreshold { threshold, keys: n });
    }

    let needed = lock_len(n);
    if !fits("multisig", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.small_int(m)?;
    for key in &pubkeys {
        w.push(key)?;
    }
    w.small_int(n)?.op(OP_CHECKMULTISIG)?;
    Ok(w.finish())
}

/// Write a multisig unlocking script from compact signatures.
///
/// Each signature is converted to DER and its sighash byte appended. The
/// redeem script is pushed last, as spending a P2SH output requires.
///
/// # Arguments
/// * `redeem_script` - The multisig redeem script. Must not be empty.
/// * `sigs` - Concatenated 64-byte compact signatures, 1 to 16 of them.
/// * `sighashes` - One sighash flag per signature, each in `0x01..=0xff`.
/// * `flags` - Must be `NONE`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn unlock_from_bytes(
    redeem_script: &[u8],
    sigs: &[u8],
    sighashes: &[u32],
    flags: BuildFlags,
    out: &mut [u8],
) -> Result<usize> {
    flags.ensure_only(BuildFlags::NONE)?;
    if redeem_script.is_empty() {
        return Err(ScriptError::EmptyInput("redeem script"));
    }
    if sigs.is_empty() {
        return Err(ScriptError::EmptyInput("signatures"));
    }
    if sigs.len() % EC_SIGNATURE_LEN != 0 {
        return Err(ScriptError::InvalidLength { what: "signatures", len: sigs.len() });
    }
    let count = sigs.len() / EC_SIGNATURE_LEN;
    if count > MAX_MULTISIG_KEYS {
        return Err(ScriptError::InvalidSignatureCount(count));
    }
    if sighashes.len() != count {
        return Err(ScriptError::SigHashCountMismatch { expected: count, got: sighashes.len() });
    }

    let ders = sigs
        .chunks_exact(EC_SIGNATURE_LEN)
        .zip(sighashes)
        .enumerate()
        .map(|(i, (sig, &sighash))| -> Result<Vec<u8>> {
            let sighash = sighash_byte(sighash)?;
            let mut der = compact_to_der(sig).map_err(|e| {
                debug!(index = i, error = %e, "multisig: compact signature rejected");
                e
            })?;
            der.push(sighash);
            Ok(der)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut needed = 1 + push_size(redeem_script.len())?;
    for der in &ders {
        needed += push_size(der.len())?;
    }
    if !fits("multisig scriptSig", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.op(OP_0)?;
    for der in &ders {
        w.push(der)?;
    }
    w.push(redeem_script)?;
    Ok(w.finish())
}
