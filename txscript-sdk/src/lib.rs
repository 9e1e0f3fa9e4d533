#![deny(missing_docs)]

//! txscript SDK - Complete SDK.
//!
//! Re-exports the script engine and its primitives for convenient
//! single-crate usage.

pub use txscript_primitives as primitives;
pub use txscript as script;
