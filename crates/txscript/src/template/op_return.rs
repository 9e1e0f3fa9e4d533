//! OP_RETURN data carrier outputs.
//!
//! Produces: `OP_RETURN <data>`, or `OP_RETURN OP_0` for an empty payload.
//! Such outputs are provably unspendable.

use crate::flags::BuildFlags;
use crate::limits::MAX_OP_RETURN_LEN;
use crate::opcodes::{OP_0, OP_RETURN};
use crate::push::push_size;
use crate::template::fits;
use crate::writer::ScriptWriter;
use crate::{Result, ScriptError};

/// Write an OP_RETURN output carrying `data`.
///
/// # Arguments
/// * `data` - Up to 80 bytes of payload. May be empty.
/// * `flags` - Must be `NONE`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn lock_from_bytes(data: &[u8], flags: BuildFlags, out: &mut [u8]) -> Result<usize> {
    flags.ensure_only(BuildFlags::NONE)?;
    if data.len() > MAX_OP_RETURN_LEN {
        return Err(ScriptError::InvalidLength { what: "op_return data", len: data.len() });
    }

    let needed = if data.is_empty() { 2 } else { 1 + push_size(data.len())? };
    if !fits("op_return", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.op(OP_RETURN)?;
    if data.is_empty() {
        w.op(OP_0)?;
    } else {
        w.push(data)?;
    }
    Ok(w.finish())
}
