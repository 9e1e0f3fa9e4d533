/// Error types for script construction and classification.
///
/// Every variant is an invalid-argument condition: builders return one of
/// these before touching the output buffer, so a failed call never leaves a
/// partial script behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A required input was empty.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// An input has a length the template does not accept.
    #[error("invalid {what} length: {len}")]
    InvalidLength {
        /// Which argument was rejected.
        what: &'static str,
        /// The length that was supplied.
        len: usize,
    },

    /// A flag bit outside the template's supported set was given.
    #[error("unsupported flags: {0:#x}")]
    UnsupportedFlags(u32),

    /// The number of public keys is outside the template's range.
    #[error("invalid public key count: {0}")]
    InvalidKeyCount(usize),

    /// The number of signatures is outside the template's range.
    #[error("invalid signature count: {0}")]
    InvalidSignatureCount(usize),

    /// The multisig threshold is zero or exceeds the number of keys.
    #[error("invalid threshold {threshold} for {keys} keys")]
    InvalidThreshold {
        /// The requested threshold.
        threshold: u32,
        /// The number of keys supplied.
        keys: usize,
    },

    /// The relative timelock is zero or does not fit in 16 bits.
    #[error("csv blocks out of range: {0}")]
    InvalidCsv(u32),

    /// A sighash value is not a single non-zero byte.
    #[error("invalid sighash: {0:#x}")]
    InvalidSigHash(u32),

    /// The sighash list does not match the number of signatures.
    #[error("expected {expected} sighash values, got {got}")]
    SigHashCountMismatch {
        /// Number of signatures supplied.
        expected: usize,
        /// Number of sighash values supplied.
        got: usize,
    },

    /// The output buffer cannot hold a fixed-size script.
    #[error("output buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Exact size of the script.
        needed: usize,
        /// Size of the buffer supplied.
        got: usize,
    },

    /// Push data exceeds the largest encodable push.
    #[error("data too big")]
    DataTooBig,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Error from primitives crate, e.g. an out-of-range compact signature.
    #[error("primitives error: {0}")]
    Primitives(#[from] txscript_primitives::PrimitivesError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScriptError>;
