//! Script chunk parsing.
//!
//! A script chunk is either an opcode or a data push with its associated
//! bytes. Decoding borrows from the script, so walking an output script to
//! classify or print it does not allocate per element.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptChunk<'a> {
    /// The opcode byte. For direct pushes (1-75 bytes), this is the length.
    pub op: u8,
    /// The pushed bytes, if this chunk is a push operation.
    pub data: Option<&'a [u8]>,
}

impl ScriptChunk<'_> {
    /// Whether this chunk only places data on the stack.
    pub fn is_push(&self) -> bool {
        is_push_only_op(self.op)
    }

    /// Convert this chunk to its ASM string representation.
    ///
    /// Data push chunks are rendered as hex strings; other opcodes use their
    /// canonical OP_xxx name.
    pub fn to_asm_string(&self) -> String {
        match self.data {
            Some(data) if self.op > OP_0 && self.op <= OP_PUSHDATA4 => hex::encode(data),
            _ => opcode_to_string(self.op).to_string(),
        }
    }
}

/// Read a push of `length` bytes starting at `pos`.
fn take(bytes: &[u8], pos: usize, length: usize) -> Result<&[u8], ScriptError> {
    pos.checked_add(length)
        .and_then(|end| bytes.get(pos..end))
        .ok_or(ScriptError::DataTooSmall)
}

/// Decode raw script bytes into a vector of borrowed chunks.
///
/// Handles OP_DATA_1..OP_DATA_75 (direct push) and OP_PUSHDATA1/2/4
/// (extended push). Every other byte becomes a bare opcode chunk.
///
/// # Arguments
/// * `bytes` - The raw script bytes to decode.
///
/// # Returns
/// The parsed chunks, or `DataTooSmall` if a push runs past the end.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk<'_>>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];
        let (header, length) = match op {
            OP_DATA_1..=OP_DATA_75 => (1, op as usize),
            OP_PUSHDATA1 => {
                let len = take(bytes, pos + 1, 1)?;
                (2, len[0] as usize)
            }
            OP_PUSHDATA2 => {
                let len = take(bytes, pos + 1, 2)?;
                (3, u16::from_le_bytes([len[0], len[1]]) as usize)
            }
            OP_PUSHDATA4 => {
                let len = take(bytes, pos + 1, 4)?;
                (5, u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize)
            }
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
                continue;
            }
        };

        let data = take(bytes, pos + header, length)?;
        chunks.push(ScriptChunk { op, data: Some(data) });
        pos += header + length;
    }

    Ok(chunks)
}
