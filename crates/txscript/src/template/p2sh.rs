//! Pay-to-Script-Hash (P2SH) script template.

use txscript_primitives::hash::hash160;

use crate::flags::BuildFlags;
use crate::limits::{HASH160_LEN, SCRIPTPUBKEY_P2SH_LEN};
use crate::opcodes::*;
use crate::template::ensure_capacity;
use crate::{Result, ScriptError};

/// Create a P2SH locking script for a script hash.
///
/// Produces: `OP_HASH160 <20-byte script hash> OP_EQUAL`
pub fn lock(hash: &[u8; HASH160_LEN]) -> [u8; SCRIPTPUBKEY_P2SH_LEN] {
    let mut script = [0u8; SCRIPTPUBKEY_P2SH_LEN];
    script[0] = OP_HASH160;
    script[1] = OP_DATA_20;
    script[2..22].copy_from_slice(hash);
    script[22] = OP_EQUAL;
    script
}

/// Write a P2SH locking script for a redeem script or its hash.
///
/// # Arguments
/// * `bytes` - The redeem script when `flags` is `HASH160`, otherwise its
///   20-byte HASH160.
/// * `flags` - `HASH160` or `NONE`. Any other bit is rejected.
/// * `out` - Destination, at least 23 bytes.
///
/// # Returns
/// The number of bytes written (always 23).
pub fn lock_from_bytes(bytes: &[u8], flags: BuildFlags, out: &mut [u8]) -> Result<usize> {
    flags.ensure_only(BuildFlags::HASH160)?;
    if bytes.is_empty() {
        return Err(ScriptError::EmptyInput("redeem script"));
    }

    let hash: [u8; HASH160_LEN] = if flags.has_flag(BuildFlags::HASH160) {
        hash160(bytes)
    } else {
        bytes
            .try_into()
            .map_err(|_| ScriptError::InvalidLength { what: "hash160", len: bytes.len() })?
    };

    ensure_capacity(SCRIPTPUBKEY_P2SH_LEN, out)?;
    out[..SCRIPTPUBKEY_P2SH_LEN].copy_from_slice(&lock(&hash));
    Ok(SCRIPTPUBKEY_P2SH_LEN)
}
