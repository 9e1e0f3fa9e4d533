//! CSV-timelocked multisig locking scripts.
//!
//! Both templates branch on the stack depth at execution time: a full set
//! of signatures takes the first branch, a reduced set takes the second,
//! which also requires the input's relative timelock (BIP-112 CHECKSEQUENCEVERIFY)
//! to have matured.

use crate::flags::BuildFlags;
use crate::limits::{EC_PUBLIC_KEY_LEN, MAX_CSV_BLOCKS};
use crate::opcodes::*;
use crate::scriptnum::ScriptNum;
use crate::template::{fits, split_pubkeys};
use crate::writer::ScriptWriter;
use crate::{Result, ScriptError};

/// Validate the relative timelock and return its script number encoding.
fn csv_operand(csv_blocks: u32) -> Result<Vec<u8>> {
    if csv_blocks == 0 || csv_blocks > MAX_CSV_BLOCKS {
        return Err(ScriptError::InvalidCsv(csv_blocks));
    }
    Ok(ScriptNum::from(csv_blocks).to_bytes())
}

/// Split `keys` and require exactly `expected` of them.
fn exact_pubkeys(keys: &[u8], expected: usize) -> Result<Vec<&[u8]>> {
    let pubkeys = split_pubkeys(keys)?;
    if pubkeys.len() != expected {
        return Err(ScriptError::InvalidKeyCount(pubkeys.len()));
    }
    Ok(pubkeys)
}

/// Write a script spendable by both keys, or by the second key alone once
/// `csv_blocks` have passed.
///
/// Produces:
/// `OP_DEPTH OP_1SUB OP_IF <key0> OP_CHECKSIGVERIFY OP_ELSE <csv>
/// OP_CHECKSEQUENCEVERIFY OP_DROP OP_ENDIF <key1> OP_CHECKSIG`
///
/// # Arguments
/// * `keys` - Two concatenated 33-byte compressed public keys.
/// * `csv_blocks` - Relative timelock, 1 to 0xffff.
/// * `flags` - Must be `NONE`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn lock_2of2_then_1_from_bytes(
    keys: &[u8],
    csv_blocks: u32,
    flags: BuildFlags,
    out: &mut [u8],
) -> Result<usize> {
    flags.ensure_only(BuildFlags::NONE)?;
    let pubkeys = exact_pubkeys(keys, 2)?;
    let csv = csv_operand(csv_blocks)?;

    let needed = 2 * (EC_PUBLIC_KEY_LEN + 1) + 9 + 1 + csv.len();
    if !fits("csv 2of2 then 1", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    w.ops(&[OP_DEPTH, OP_1SUB, OP_IF])?
        .push(pubkeys[0])?
        .ops(&[OP_CHECKSIGVERIFY, OP_ELSE])?
        .push(&csv)?
        .ops(&[OP_CHECKSEQUENCEVERIFY, OP_DROP, OP_ENDIF])?
        .push(pubkeys[1])?
        .op(OP_CHECKSIG)?;
    Ok(w.finish())
}

/// Write a script spendable by all three keys, or by any two of them once
/// `csv_blocks` have passed.
///
/// Produces:
/// `OP_DEPTH OP_1SUB OP_1SUB OP_1SUB OP_IF OP_3 OP_ELSE <csv>
/// OP_CHECKSEQUENCEVERIFY OP_DROP OP_2 OP_ENDIF <key0> <key1> <key2> OP_3
/// OP_CHECKMULTISIG`
///
/// # Arguments
/// * `keys` - Three concatenated 33-byte compressed public keys.
/// * `csv_blocks` - Relative timelock, 1 to 0xffff.
/// * `flags` - Must be `NONE`.
/// * `out` - Destination buffer.
///
/// # Returns
/// The number of bytes written, or required when `out` is too small.
pub fn lock_2of3_then_2_from_bytes(
    keys: &[u8],
    csv_blocks: u32,
    flags: BuildFlags,
    out: &mut [u8],
) -> Result<usize> {
    flags.ensure_only(BuildFlags::NONE)?;
    let pubkeys = exact_pubkeys(keys, 3)?;
    let csv = csv_operand(csv_blocks)?;

    let needed = 3 * (EC_PUBLIC_KEY_LEN + 1) + 13 + 1 + csv.len();
    if !fits("csv 2of3 then 2", needed, out) {
        return Ok(needed);
    }

    let mut w = ScriptWriter::new(&mut out[..needed]);
    // Stack depth is the dummy plus the signatures: four with every key.
    w.ops(&[OP_DEPTH, OP_1SUB, OP_1SUB, OP_1SUB, OP_IF, OP_3, OP_ELSE])?
        .push(&csv)?
        .ops(&[OP_CHECKSEQUENCEVERIFY, OP_DROP, OP_2, OP_ENDIF])?;
    for key in &pubkeys {
        w.push(key)?;
    }
    w.ops(&[OP_3, OP_CHECKMULTISIG])?;
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<u8> {
        (0..n)
            .flat_map(|i| {
                let mut key = [0xa0 + i as u8; 33];
                key[0] = 0x03;
                key
            })
            .collect()
    }

    fn csv_len(v: u32) -> usize {
        1 + usize::from(v > 0x7f) + usize::from(v > 0x7fff)
    }

    // -----------------------------------------------------------------------
    // 2-of-2 then 1
    // -----------------------------------------------------------------------

    /// Byte-exact layout with a one-byte timelock.
    #[test]
    fn test_2of2_layout() {
        let keys = keys(2);
        let mut out = [0u8; 79];
        let n = lock_2of2_then_1_from_bytes(&keys, 1, BuildFlags::NONE, &mut out)
            .expect("should lock");
        assert_eq!(n, 79);

        let expected = format!(
            "748c6321{}ad670101b2756821{}ac",
            hex::encode(&keys[..33]),
            hex::encode(&keys[33..])
        );
        assert_eq!(hex::encode(out), expected);
    }

    /// Length grows with the minimal encoding of the timelock.
    #[test]
    fn test_2of2_lengths() {
        let keys = keys(2);
        for csv in [1u32, 0x10, 0x7f, 0x80, 0x7fff, 0x8000, 0xffff] {
            let mut out = [0u8; 128];
            let n = lock_2of2_then_1_from_bytes(&keys, csv, BuildFlags::NONE, &mut out)
                .expect("should lock");
            assert_eq!(n, 2 * 34 + 9 + 1 + csv_len(csv), "csv {csv:#x}");
        }
    }

    /// 0x8000 needs a padding byte to stay positive.
    #[test]
    fn test_2of2_sign_padding() {
        let keys = keys(2);
        let mut out = [0u8; 128];
        let n = lock_2of2_then_1_from_bytes(&keys, 0x8000, BuildFlags::NONE, &mut out)
            .expect("should lock");
        assert_eq!(n, 81);
        assert_eq!(&out[39..43], &[0x03, 0x00, 0x80, 0x00]);
        assert_eq!(out[43], OP_CHECKSEQUENCEVERIFY);
    }

    // -----------------------------------------------------------------------
    // 2-of-3 then 2
    // -----------------------------------------------------------------------

    #[test]
    fn test_2of3_layout() {
        let keys = keys(3);
        let mut out = [0u8; 130];
        let n = lock_2of3_then_2_from_bytes(&keys, 0x90, BuildFlags::NONE, &mut out)
            .expect("should lock");
        assert_eq!(n, 3 * 34 + 13 + 1 + 2);

        let expected = format!(
            "748c8c8c635367029000b275526821{}21{}21{}53ae",
            hex::encode(&keys[..33]),
            hex::encode(&keys[33..66]),
            hex::encode(&keys[66..])
        );
        assert_eq!(hex::encode(&out[..n]), expected);
    }

    #[test]
    fn test_2of3_lengths() {
        let keys = keys(3);
        for csv in [1u32, 0x7f, 0x80, 0x7fff, 0x8000, 0xffff] {
            let mut out = [0u8; 160];
            let n = lock_2of3_then_2_from_bytes(&keys, csv, BuildFlags::NONE, &mut out)
                .expect("should lock");
            assert_eq!(n, 3 * 34 + 13 + 1 + csv_len(csv), "csv {csv:#x}");
        }
    }

    // -----------------------------------------------------------------------
    // Shared validation
    // -----------------------------------------------------------------------

    #[test]
    fn test_size_query() {
        let none = BuildFlags::NONE;
        let mut out = [0xeeu8; 16];
        assert_eq!(lock_2of2_then_1_from_bytes(&keys(2), 0xffff, none, &mut out), Ok(81));
        assert_eq!(lock_2of3_then_2_from_bytes(&keys(3), 1, none, &mut out), Ok(117));
        assert_eq!(out, [0xee; 16]);
    }

    /// Rejected calls leave a buffer large enough for either template untouched.
    #[test]
    fn test_invalid_args() {
        let none = BuildFlags::NONE;
        let mut out = [0xeeu8; 160];
        assert_eq!(
            lock_2of2_then_1_from_bytes(&keys(2), 0, none, &mut out),
            Err(ScriptError::InvalidCsv(0))
        );
        assert_eq!(
            lock_2of3_then_2_from_bytes(&keys(3), 0x10000, none, &mut out),
            Err(ScriptError::InvalidCsv(0x10000))
        );
        assert_eq!(
            lock_2of2_then_1_from_bytes(&keys(3), 1, none, &mut out),
            Err(ScriptError::InvalidKeyCount(3))
        );
        assert!(lock_2of3_then_2_from_bytes(&keys(2), 1, none, &mut out).is_err());
        assert!(lock_2of2_then_1_from_bytes(&[], 1, none, &mut out).is_err());
        assert!(lock_2of2_then_1_from_bytes(&keys(2)[..65], 1, none, &mut out).is_err());
        assert!(lock_2of2_then_1_from_bytes(&keys(2), 1, BuildFlags::HASH160, &mut out).is_err());
        assert!(lock_2of3_then_2_from_bytes(&keys(3), 1, BuildFlags::SHA256, &mut out).is_err());
        assert_eq!(out, [0xee; 160]);
    }
}
