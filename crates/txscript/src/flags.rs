//! Builder flags (bitmask).

use std::borrow::Cow;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use txscript_primitives::hash::{hash160, sha256};

use crate::{Result, ScriptError};

/// Flags selecting how a builder treats its input bytes.
///
/// `HASH160` and `SHA256` ask the builder to hash the input before
/// embedding it; with neither set the input is taken as an already computed
/// hash or program. Each builder documents the subset it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildFlags(pub u32);

impl BuildFlags {
    pub const NONE: BuildFlags = BuildFlags(0);
    pub const HASH160: BuildFlags = BuildFlags(1 << 0);
    pub const SHA256: BuildFlags = BuildFlags(1 << 1);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has_flag(self, flag: BuildFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Fail with `UnsupportedFlags` if any bit outside `allowed` is set.
    pub fn ensure_only(self, allowed: BuildFlags) -> Result<()> {
        if self.0 & !allowed.0 != 0 {
            return Err(ScriptError::UnsupportedFlags(self.0));
        }
        Ok(())
    }

    /// Resolve the hashing mode of a builder that accepts both hashes.
    ///
    /// Setting both `HASH160` and `SHA256` is rejected.
    pub(crate) fn hash_mode(self) -> Result<HashMode> {
        self.ensure_only(BuildFlags::HASH160 | BuildFlags::SHA256)?;
        match (self.has_flag(BuildFlags::HASH160), self.has_flag(BuildFlags::SHA256)) {
            (false, false) => Ok(HashMode::None),
            (true, false) => Ok(HashMode::Hash160),
            (false, true) => Ok(HashMode::Sha256),
            (true, true) => Err(ScriptError::UnsupportedFlags(self.0)),
        }
    }
}

/// The hashing step requested by a set of [`BuildFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HashMode {
    None,
    Hash160,
    Sha256,
}

impl HashMode {
    /// Hash `data` as requested, or borrow it unchanged.
    pub(crate) fn apply(self, data: &[u8]) -> Cow<'_, [u8]> {
        match self {
            HashMode::None => Cow::Borrowed(data),
            HashMode::Hash160 => Cow::Owned(hash160(data).to_vec()),
            HashMode::Sha256 => Cow::Owned(sha256(data).to_vec()),
        }
    }
}

impl BitOr for BuildFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BuildFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for BuildFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BuildFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BuildFlags(self.0 & rhs.0)
    }
}
