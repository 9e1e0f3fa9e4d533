//! Push data encoding.
//!
//! Every data element in a script is preceded by the shortest prefix able to
//! describe its length: the length itself for up to 75 bytes, then
//! OP_PUSHDATA1/2/4 followed by a little-endian length.

use tracing::trace;

use crate::flags::BuildFlags;
use crate::limits::MAX_DIRECT_PUSH_LEN;
use crate::opcodes::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use crate::{Result, ScriptError};

/// Number of prefix bytes needed to push `data_len` bytes.
///
/// # Arguments
/// * `data_len` - The length of the data to be pushed.
///
/// # Returns
/// 1, 2, 3 or 5, or `DataTooBig` if the length does not fit in 32 bits.
pub fn push_prefix_len(data_len: usize) -> Result<usize> {
    if data_len <= MAX_DIRECT_PUSH_LEN {
        Ok(1)
    } else if data_len <= 0xFF {
        Ok(2)
    } else if data_len <= 0xFFFF {
        Ok(3)
    } else if u32::try_from(data_len).is_ok() {
        Ok(5)
    } else {
        Err(ScriptError::DataTooBig)
    }
}

/// Compute the prefix bytes for a push of `data_len` bytes.
///
/// # Arguments
/// * `data_len` - The length of the data to be pushed.
///
/// # Returns
/// A byte vector containing the prefix, or `DataTooBig` if the length does
/// not fit in 32 bits.
pub fn push_prefix(data_len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; push_prefix_len(data_len)?];
    write_prefix(data_len, &mut buf);
    Ok(buf)
}

/// Total size of a push of `data_len` bytes, prefix included.
pub fn push_size(data_len: usize) -> Result<usize> {
    Ok(push_prefix_len(data_len)? + data_len)
}

/// Write the prefix for `data_len` into the front of `out`.
///
/// `out` must hold at least `push_prefix_len(data_len)` bytes and `data_len`
/// must fit in 32 bits. Returns the number of bytes written.
pub(crate) fn write_prefix(data_len: usize, out: &mut [u8]) -> usize {
    if data_len <= MAX_DIRECT_PUSH_LEN {
        out[0] = data_len as u8;
        1
    } else if data_len <= 0xFF {
        out[0] = OP_PUSHDATA1;
        out[1] = data_len as u8;
        2
    } else if data_len <= 0xFFFF {
        out[0] = OP_PUSHDATA2;
        out[1..3].copy_from_slice(&(data_len as u16).to_le_bytes());
        3
    } else {
        out[0] = OP_PUSHDATA4;
        out[1..5].copy_from_slice(&(data_len as u32).to_le_bytes());
        5
    }
}

/// Write `data` as a single push, optionally hashing it first.
///
/// `flags` may be `NONE` (push `data` as is), `HASH160` (push its 20-byte
/// HASH160) or `SHA256` (push its 32-byte SHA-256). Combining the two or
/// setting any other bit is rejected.
///
/// If `out` cannot hold the push, nothing is written and the required size
/// is returned instead.
///
/// # Arguments
/// * `data` - The bytes to push (or to hash and push). Must not be empty.
/// * `flags` - Hashing mode.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn push_from_bytes(data: &[u8], flags: BuildFlags, out: &mut [u8]) -> Result<usize> {
    let mode = flags.hash_mode()?;
    if data.is_empty() {
        return Err(ScriptError::EmptyInput("push data"));
    }

    let payload = mode.apply(data);
    let prefix_len = push_prefix_len(payload.len())?;
    let total = prefix_len + payload.len();
    if out.len() < total {
        trace!(needed = total, got = out.len(), "push: reporting required size");
        return Ok(total);
    }

    write_prefix(payload.len(), out);
    out[prefix_len..total].copy_from_slice(&payload);
    Ok(total)
}
