//! Sighash flag constants and validation.
//!
//! The sighash byte is appended to every DER signature pushed by a scriptSig
//! builder. Values are accepted as `u32` so that out-of-range inputs (such
//! as the historical `0x100` sentinel) can be rejected instead of truncated.

use tracing::debug;

use crate::{Result, ScriptError};

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs, allowing outputs to be modified.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with another flag: only sign the current input, allowing other
/// inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u32 = 0x1f;

/// Validate a sighash value and return the byte appended to signatures.
///
/// Any non-zero value that fits in one byte is accepted.
pub fn sighash_byte(sighash: u32) -> Result<u8> {
    match u8::try_from(sighash) {
        Ok(byte) if byte != 0 => Ok(byte),
        _ => {
            debug!(sighash, "rejecting sighash outside 0x01..=0xff");
            Err(ScriptError::InvalidSigHash(sighash))
        }
    }
}
