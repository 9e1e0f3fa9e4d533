/// Elliptic curve signature encodings on secp256k1.
///
/// Provides the compact (`r || s`) and DER signature codecs the scriptSig
/// builders use.

pub mod signature;

pub use signature::Signature;
