//! txscript - Cryptographic primitives consumed by the script engine.
//!
//! This crate provides the narrow collaborator interfaces the script
//! builders call into:
//! - Hash functions (SHA-256, RIPEMD-160, Hash160)
//! - ECDSA signature conversion between compact and DER encodings

pub mod hash;
pub mod ec;

mod error;
pub use error::PrimitivesError;
