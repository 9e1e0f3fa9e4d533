//! Minimal script number encoding.
//!
//! Numbers on the script stack are little-endian byte arrays with the sign
//! carried in the most significant bit of the last byte. Zero encodes as the
//! empty array.

/// A script number, encodable to its minimal byte form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptNum(pub i64);

impl ScriptNum {
    /// Serialize to minimal little-endian bytes with sign bit.
    pub fn to_bytes(self) -> Vec<u8> {
        if self.0 == 0 {
            return vec![];
        }

        let is_negative = self.0 < 0;
        let mut abs_val = self.0.unsigned_abs();
        let mut result = Vec::with_capacity(9);
        while abs_val > 0 {
            result.push((abs_val & 0xff) as u8);
            abs_val >>= 8;
        }

        let last = result.len() - 1;
        if result[last] & 0x80 != 0 {
            // The top bit is taken by the magnitude; the sign needs its own byte.
            result.push(if is_negative { 0x80 } else { 0x00 });
        } else if is_negative {
            result[last] |= 0x80;
        }

        result
    }

    /// Length of [`ScriptNum::to_bytes`] without allocating.
    pub fn encoded_len(self) -> usize {
        if self.0 == 0 {
            return 0;
        }
        let abs_val = self.0.unsigned_abs();
        let magnitude_len = (u64::BITS - abs_val.leading_zeros()).div_ceil(8) as usize;
        let top = (abs_val >> ((magnitude_len - 1) * 8)) as u8;
        magnitude_len + usize::from(top & 0x80 != 0)
    }
}

impl From<u32> for ScriptNum {
    fn from(v: u32) -> Self {
        ScriptNum(i64::from(v))
    }
}
