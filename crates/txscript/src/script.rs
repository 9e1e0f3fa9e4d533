//! Owned script value.
//!
//! The builders write into caller buffers; `Script` is the convenience type
//! for callers that want an owned, printable, serializable result instead.

use std::fmt;

use tracing::trace;

use crate::chunk::{decode_script, ScriptChunk};
use crate::script_type::{classify, ScriptType};
use crate::ScriptError;

/// A serialized script, represented as a byte vector newtype.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or `InvalidHex`.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Run a builder twice: once to size the script, once to fill it.
    ///
    /// `build` receives an output buffer and returns the number of bytes
    /// written, following the builder convention: variable-size templates
    /// report their size for a short buffer, fixed-size ones fail with
    /// `BufferTooSmall`. Both are handled here.
    ///
    /// # Arguments
    /// * `build` - A closure calling one of the template builders.
    ///
    /// # Returns
    /// The built script, or the builder's validation error.
    pub fn build<F>(mut build: F) -> Result<Self, ScriptError>
    where
        F: FnMut(&mut [u8]) -> Result<usize, ScriptError>,
    {
        let needed = match build(&mut []) {
            Ok(needed) => needed,
            Err(ScriptError::BufferTooSmall { needed, .. }) => needed,
            Err(e) => return Err(e),
        };
        trace!(needed, "allocating script");

        let mut buf = vec![0u8; needed];
        let written = build(&mut buf)?;
        buf.truncate(written);
        Ok(Script(buf))
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Convert the script to its ASM representation.
    ///
    /// Data pushes appear as their hex encoding; opcodes appear by name.
    /// Returns an empty string for empty or malformed scripts.
    pub fn to_asm(&self) -> String {
        match decode_script(&self.0) {
            Ok(chunks) => chunks
                .iter()
                .map(ScriptChunk::to_asm_string)
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the script and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Decode the script into borrowed chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk<'_>>, ScriptError> {
        decode_script(&self.0)
    }

    /// Classify the script as an output script.
    ///
    /// Fails only for an empty script.
    pub fn script_type(&self) -> Result<ScriptType, ScriptError> {
        classify(&self.0)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
