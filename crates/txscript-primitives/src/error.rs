/// Unified error type for all primitives operations.
///
/// Covers compact signature decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid signature length: expected {expected}, got {got}")]
    InvalidSignatureLength { expected: usize, got: usize },
}
