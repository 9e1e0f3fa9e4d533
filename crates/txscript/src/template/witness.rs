//! Segwit version 0 witness programs.

use crate::flags::{BuildFlags, HashMode};
use crate::limits::{HASH160_LEN, SHA256_LEN};
use crate::opcodes::OP_0;
use crate::template::fits;
use crate::writer::ScriptWriter;
use crate::{Result, ScriptError};

/// Write a version 0 witness program: `OP_0 <program>`.
///
/// With `flags` set to `NONE`, `bytes` is taken as the program and must be a
/// 20-byte key hash or a 32-byte script hash. `HASH160` hashes `bytes` into a
/// P2WPKH program and `SHA256` into a P2WSH program.
///
/// # Arguments
/// * `bytes` - The program, or the key/script to hash into one.
/// * `flags` - `NONE`, `HASH160` or `SHA256`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written (22 or 34), or required when `out` is too small.
pub fn program_from_bytes(bytes: &[u8], flags: BuildFlags, out: &mut [u8]) -> Result<usize> {
    let mode = flags.hash_mode()?;
    if bytes.is_empty() {
        return Err(ScriptError::EmptyInput("witness program"));
    }
    if mode == HashMode::None && bytes.len() != HASH160_LEN && bytes.len() != SHA256_LEN {
        return Err(ScriptError::InvalidLength { what: "witness program", len: bytes.len() });
    }

    let program = mode.apply(bytes);
    let needed = 2 + program.len();
    if !fits("witness program", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.op(OP_0)?.push(&program)?;
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script_type::{classify, ScriptType};
    use txscript_primitives::hash::{hash160, sha256};

    #[test]
    fn test_program_passthrough() {
        let mut out = [0u8; 34];
        assert_eq!(program_from_bytes(&[0x11; 20], BuildFlags::NONE, &mut out), Ok(22));
        assert_eq!(&out[..2], &[0x00, 0x14]);
        assert_eq!(classify(&out[..22]), Ok(ScriptType::P2wpkh));

        assert_eq!(program_from_bytes(&[0x22; 32], BuildFlags::NONE, &mut out), Ok(34));
        assert_eq!(&out[..2], &[0x00, 0x20]);
        assert_eq!(classify(&out), Ok(ScriptType::P2wsh));
    }

    /// A 50-byte input needs a hashing flag.
    #[test]
    fn test_program_hashed() {
        let data = [0x33u8; 50];
        let mut out = [0u8; 34];
        assert_eq!(
            program_from_bytes(&data, BuildFlags::NONE, &mut out),
            Err(ScriptError::InvalidLength { what: "witness program", len: 50 })
        );

        assert_eq!(program_from_bytes(&data, BuildFlags::HASH160, &mut out), Ok(22));
        assert_eq!(&out[2..22], &hash160(&data));

        assert_eq!(program_from_bytes(&data, BuildFlags::SHA256, &mut out), Ok(34));
        assert_eq!(&out[2..34], &sha256(&data));
    }

    #[test]
    fn test_program_size_query() {
        let mut out = [0xeeu8; 21];
        assert_eq!(program_from_bytes(&[0x11; 20], BuildFlags::NONE, &mut out), Ok(22));
        assert_eq!(program_from_bytes(&[0x11; 7], BuildFlags::SHA256, &mut []), Ok(34));
        assert_eq!(out, [0xee; 21]);
    }

    #[test]
    fn test_program_invalid_args() {
        let both = BuildFlags::HASH160 | BuildFlags::SHA256;
        let mut out = [0xeeu8; 34];
        assert!(program_from_bytes(&[], BuildFlags::NONE, &mut out).is_err());
        assert!(program_from_bytes(&[], BuildFlags::SHA256, &mut out).is_err());
        assert!(program_from_bytes(&[0u8; 21], BuildFlags::NONE, &mut out).is_err());
        assert!(program_from_bytes(&[0u8; 50], BuildFlags::NONE, &mut out).is_err());
        assert!(program_from_bytes(&[0u8; 20], both, &mut out).is_err());
        assert!(program_from_bytes(&[0u8; 20], BuildFlags(0x10), &mut out).is_err());
        assert_eq!(out, [0xee; 34]);
    }
}
