//! Output script classification.
//!
//! Classification matches exact byte shapes only. Key and hash contents are
//! never validated, so any 20 bytes in the right position make a P2PKH.

use std::fmt;

use tracing::debug;

use crate::chunk::decode_script;
use crate::limits::{
    EC_PUBLIC_KEY_LEN, EC_PUBLIC_KEY_UNCOMPRESSED_LEN, SCRIPTPUBKEY_OP_RETURN_MAX_LEN,
    SCRIPTPUBKEY_P2PKH_LEN, SCRIPTPUBKEY_P2SH_LEN, SCRIPTPUBKEY_P2WPKH_LEN,
    SCRIPTPUBKEY_P2WSH_LEN,
};
use crate::opcodes::*;
use crate::{Result, ScriptError};

/// The recognised kinds of output script.
///
/// The numeric codes returned by [`ScriptType::code`] are stable and may be
/// stored or sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScriptType {
    /// Unknown or unrecognized script type.
    Unknown,
    /// OP_RETURN data carrier script.
    OpReturn,
    /// Standard Pay-to-Public-Key-Hash script.
    P2pkh,
    /// Pay-to-Script-Hash script.
    P2sh,
    /// Segwit v0 Pay-to-Witness-Public-Key-Hash program.
    P2wpkh,
    /// Segwit v0 Pay-to-Witness-Script-Hash program.
    P2wsh,
    /// Bare m-of-n multisig script.
    Multisig,
}

impl ScriptType {
    /// Stable numeric code of this script type.
    pub fn code(self) -> u32 {
        match self {
            ScriptType::Unknown => 0x00,
            ScriptType::OpReturn => 0x01,
            ScriptType::P2pkh => 0x02,
            ScriptType::P2sh => 0x04,
            ScriptType::P2wpkh => 0x08,
            ScriptType::P2wsh => 0x10,
            ScriptType::Multisig => 0x20,
        }
    }

    /// Look up a script type by its numeric code.
    pub fn from_code(code: u32) -> Option<ScriptType> {
        RULES
            .iter()
            .map(|&(_, t)| t)
            .chain(std::iter::once(ScriptType::Unknown))
            .find(|t| t.code() == code)
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptType::Unknown => write!(f, "Unknown"),
            ScriptType::OpReturn => write!(f, "OP_RETURN"),
            ScriptType::P2pkh => write!(f, "P2PKH"),
            ScriptType::P2sh => write!(f, "P2SH"),
            ScriptType::P2wpkh => write!(f, "P2WPKH"),
            ScriptType::P2wsh => write!(f, "P2WSH"),
            ScriptType::Multisig => write!(f, "Multisig"),
        }
    }
}

type Rule = (fn(&[u8]) -> bool, ScriptType);

/// Classification rules, tried in order. The first match wins.
const RULES: &[Rule] = &[
    (is_p2pkh, ScriptType::P2pkh),
    (is_p2sh, ScriptType::P2sh),
    (is_p2wpkh, ScriptType::P2wpkh),
    (is_p2wsh, ScriptType::P2wsh),
    (is_op_return, ScriptType::OpReturn),
    (is_multisig, ScriptType::Multisig),
];

/// Classify a serialized output script.
///
/// # Arguments
/// * `script` - The scriptPubKey bytes. Must not be empty.
///
/// # Returns
/// The first matching [`ScriptType`], or `ScriptType::Unknown`.
pub fn classify(script: &[u8]) -> Result<ScriptType> {
    if script.is_empty() {
        debug!("classify: rejecting empty script");
        return Err(ScriptError::EmptyInput("script"));
    }
    let script_type = RULES
        .iter()
        .find(|(matches, _)| matches(script))
        .map_or(ScriptType::Unknown, |&(_, t)| t);
    Ok(script_type)
}

/// `OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG`
pub fn is_p2pkh(b: &[u8]) -> bool {
    b.len() == SCRIPTPUBKEY_P2PKH_LEN
        && b[0] == OP_DUP
        && b[1] == OP_HASH160
        && b[2] == OP_DATA_20
        && b[23] == OP_EQUALVERIFY
        && b[24] == OP_CHECKSIG
}

/// `OP_HASH160 <20> OP_EQUAL`
pub fn is_p2sh(b: &[u8]) -> bool {
    b.len() == SCRIPTPUBKEY_P2SH_LEN
        && b[0] == OP_HASH160
        && b[1] == OP_DATA_20
        && b[22] == OP_EQUAL
}

/// `OP_0 <20>`
pub fn is_p2wpkh(b: &[u8]) -> bool {
    b.len() == SCRIPTPUBKEY_P2WPKH_LEN && b[0] == OP_0 && b[1] == OP_DATA_20
}

/// `OP_0 <32>`
pub fn is_p2wsh(b: &[u8]) -> bool {
    b.len() == SCRIPTPUBKEY_P2WSH_LEN && b[0] == OP_0 && b[1] == OP_DATA_32
}

/// `OP_RETURN` followed only by data pushes, within the standard size.
pub fn is_op_return(b: &[u8]) -> bool {
    if b.first() != Some(&OP_RETURN) || b.len() > SCRIPTPUBKEY_OP_RETURN_MAX_LEN {
        return false;
    }
    match decode_script(&b[1..]) {
        Ok(chunks) => chunks.iter().all(|c| c.is_push()),
        Err(_) => false,
    }
}

/// `OP_m <key>{n} OP_n OP_CHECKMULTISIG` with `1 <= m <= n <= 16`.
///
/// Keys must be pushed directly as 33 or 65 bytes and the key count must
/// equal `n`.
pub fn is_multisig(b: &[u8]) -> bool {
    let (Some(&first), Some(&last)) = (b.first(), b.last()) else {
        return false;
    };
    if last != OP_CHECKMULTISIG || b.len() < 3 {
        return false;
    }
    let threshold = match first {
        OP_1..=OP_16 => first - OP_1 + 1,
        _ => return false,
    };

    let body = &b[1..b.len() - 2];
    let mut pos = 0;
    let mut keys = 0usize;
    while pos < body.len() {
        let len = body[pos] as usize;
        if len != EC_PUBLIC_KEY_LEN && len != EC_PUBLIC_KEY_UNCOMPRESSED_LEN {
            return false;
        }
        pos += 1 + len;
        keys += 1;
    }
    if pos != body.len() {
        return false;
    }

    match small_int_value(b[b.len() - 2]) {
        Some(n) if n >= 1 => usize::from(n) == keys && threshold <= n,
        _ => false,
    }
}
