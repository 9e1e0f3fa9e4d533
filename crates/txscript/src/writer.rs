//! Bounds-checked opcode assembler over a caller-supplied buffer.

use crate::opcodes::small_int_op;
use crate::push::{push_prefix_len, write_prefix};
use crate::{Result, ScriptError};

/// Appends opcodes and pushes to a mutable byte slice.
///
/// Templates size the script first and hand the writer exactly that many
/// bytes, so running past the end means the size computation was wrong. It
/// is still reported as `BufferTooSmall` rather than panicking.
#[derive(Debug)]
pub struct ScriptWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ScriptWriter<'a> {
    /// Create a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        ScriptWriter { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining capacity.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn reserve(&mut self, n: usize) -> Result<&mut [u8]> {
        if n > self.remaining() {
            return Err(ScriptError::BufferTooSmall {
                needed: self.pos + n,
                got: self.buf.len(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..start + n])
    }

    /// Append a single opcode.
    pub fn op(&mut self, op: u8) -> Result<&mut Self> {
        self.reserve(1)?[0] = op;
        Ok(self)
    }

    /// Append a sequence of opcodes.
    pub fn ops(&mut self, ops: &[u8]) -> Result<&mut Self> {
        self.reserve(ops.len())?.copy_from_slice(ops);
        Ok(self)
    }

    /// Append `data` with its minimal push prefix.
    pub fn push(&mut self, data: &[u8]) -> Result<&mut Self> {
        let prefix_len = push_prefix_len(data.len())?;
        let dst = self.reserve(prefix_len + data.len())?;
        write_prefix(data.len(), dst);
        dst[prefix_len..].copy_from_slice(data);
        Ok(self)
    }

    /// Append OP_0 or OP_1..OP_16 for `n`.
    pub fn small_int(&mut self, n: usize) -> Result<&mut Self> {
        let op = u8::try_from(n)
            .ok()
            .and_then(small_int_op)
            .ok_or(ScriptError::InvalidKeyCount(n))?;
        self.op(op)
    }

    /// Finish writing and return the number of bytes written.
    pub fn finish(self) -> usize {
        self.pos
    }
}
