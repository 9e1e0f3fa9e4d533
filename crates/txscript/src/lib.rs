//! txscript - Canonical Bitcoin script construction and classification.
//!
//! Builds standard scriptPubKeys (P2PKH, P2SH, multisig, CSV-timelocked
//! multisig, segwit v0 witness programs, OP_RETURN), scriptSigs (P2PKH and
//! multisig) and generic data pushes directly into caller-supplied buffers,
//! and recovers the type of an already serialized scriptPubKey.
//!
//! Every builder follows the same contract: validate all arguments, then
//! write into `out` and return the number of bytes written. Templates with a
//! fixed size (P2PKH, P2SH) reject a short `out`; all other templates return
//! the required length without writing, so callers can size a buffer first.

pub mod chunk;
pub mod flags;
pub mod limits;
pub mod opcodes;
pub mod push;
pub mod script;
pub mod script_type;
pub mod scriptnum;
pub mod sighash;
pub mod template;
pub mod writer;

mod error;
pub use chunk::ScriptChunk;
pub use error::{Result, ScriptError};
pub use flags::BuildFlags;
pub use push::push_from_bytes;
pub use script::Script;
pub use script_type::{classify, ScriptType};
