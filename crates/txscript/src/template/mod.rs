//! Standard script templates.
//!
//! Each builder validates every argument before touching `out`. Fixed-size
//! templates (P2PKH, P2SH) reject a short `out` with `BufferTooSmall`;
//! variable-size templates write nothing and return the size they need.

pub mod csv;
pub mod multisig;
pub mod op_return;
pub mod p2pkh;
pub mod p2sh;
pub mod witness;

use tracing::trace;

use crate::limits::{EC_PUBLIC_KEY_LEN, EC_PUBLIC_KEY_UNCOMPRESSED_LEN};
use crate::{Result, ScriptError};

/// Whether a variable-size script of `needed` bytes fits in `out`.
pub(crate) fn fits(template: &'static str, needed: usize, out: &[u8]) -> bool {
    if out.len() < needed {
        trace!(template, needed, got = out.len(), "output too small, reporting required size");
        return false;
    }
    true
}

/// Fail unless `out` can hold a fixed-size script of `needed` bytes.
pub(crate) fn ensure_capacity(needed: usize, out: &[u8]) -> Result<()> {
    if out.len() < needed {
        return Err(ScriptError::BufferTooSmall { needed, got: out.len() });
    }
    Ok(())
}

/// Accept a compressed or uncompressed public key.
pub(crate) fn check_pubkey(pubkey: &[u8]) -> Result<()> {
    match pubkey.len() {
        0 => Err(ScriptError::EmptyInput("public key")),
        EC_PUBLIC_KEY_LEN | EC_PUBLIC_KEY_UNCOMPRESSED_LEN => Ok(()),
        len => Err(ScriptError::InvalidLength { what: "public key", len }),
    }
}

/// Split concatenated compressed public keys.
pub(crate) fn split_pubkeys(keys: &[u8]) -> Result<Vec<&[u8]>> {
    if keys.is_empty() {
        return Err(ScriptError::EmptyInput("public keys"));
    }
    if keys.len() % EC_PUBLIC_KEY_LEN != 0 {
        return Err(ScriptError::InvalidLength { what: "public keys", len: keys.len() });
    }
    Ok(keys.chunks_exact(EC_PUBLIC_KEY_LEN).collect())
}
