//! ECDSA signature codec between compact and DER encodings.
//!
//! Script signatures are pushed in DER form while callers frequently hold
//! the 64-byte compact `r || s` form. This module converts compact
//! signatures to DER without altering the signature values.

use k256::ecdsa;

use crate::PrimitivesError;

/// Length in bytes of a compact `r || s` signature.
pub const COMPACT_SIGNATURE_LEN: usize = 64;

/// Maximum length in bytes of a DER-encoded secp256k1 signature.
pub const DER_SIGNATURE_MAX_LEN: usize = 72;

/// Minimum length in bytes of a DER-encoded signature (one-byte R and S).
pub const DER_SIGNATURE_MIN_LEN: usize = 8;

/// An ECDSA signature with R and S components.
///
/// Both components are guaranteed non-zero and below the curve order once
/// constructed through [`Signature::from_compact`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The R component of the signature (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component of the signature (32 bytes, big-endian).
    s: [u8; 32],
}

impl Signature {
    /// Parse a 64-byte compact signature (`r || s`, both big-endian).
    ///
    /// Rejects signatures whose R or S is zero or not below the curve order,
    /// which is what secp256k1 implementations refuse to load.
    ///
    /// # Arguments
    /// * `bytes` - 64-byte compact signature.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the length or range is invalid.
    pub fn from_compact(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != COMPACT_SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidSignatureLength {
                expected: COMPACT_SIGNATURE_LEN,
                got: bytes.len(),
            });
        }

        // k256 enforces 0 < r, s < N for us.
        let k256_sig = ecdsa::Signature::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        let (r_bytes, s_bytes) = k256_sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);
        Ok(Signature { r, s })
    }

    /// Serialize the signature in DER format.
    ///
    /// Output format: 0x30 <len> 0x02 <r_len> <r_bytes> 0x02 <s_len> <s_bytes>
    ///
    /// The S value is written as-is, so a high-S signature stays high-S.
    ///
    /// # Returns
    /// A byte vector of at most [`DER_SIGNATURE_MAX_LEN`] bytes.
    pub fn to_der(&self) -> Vec<u8> {
        let rb = canonicalize_int(&self.r);
        let sb = canonicalize_int(&self.s);

        let total_len = 6 + rb.len() + sb.len();
        let mut out = Vec::with_capacity(total_len);
        out.push(0x30);
        out.push((total_len - 2) as u8);
        out.push(0x02);
        out.push(rb.len() as u8);
        out.extend_from_slice(&rb);
        out.push(0x02);
        out.push(sb.len() as u8);
        out.extend_from_slice(&sb);
        out
    }
}

/// Convert a 64-byte compact signature straight to its DER encoding.
///
/// # Arguments
/// * `compact` - 64-byte `r || s` signature.
///
/// # Returns
/// The DER bytes (no sighash byte), or an error if the signature is invalid.
pub fn compact_to_der(compact: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
    Ok(Signature::from_compact(compact)?.to_der())
}

/// Canonicalize an integer for DER encoding.
///
/// Strips leading zeros from the big-endian representation and adds
/// a 0x00 padding byte if the high bit is set (to prevent interpretation
/// as a negative number).
fn canonicalize_int(val: &[u8; 32]) -> Vec<u8> {
    let mut start = 0;
    while start < 31 && val[start] == 0 {
        start += 1;
    }
    let trimmed = &val[start..];

    if trimmed[0] & 0x80 != 0 {
        let mut out = Vec::with_capacity(trimmed.len() + 1);
        out.push(0x00);
        out.extend_from_slice(trimmed);
        out
    } else {
        trimmed.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact signature used as a fixture throughout the script tests.
    fn fake_compact() -> Vec<u8> {
        vec![0x11; 64]
    }

    #[test]
    fn test_compact_to_der_fixture() {
        let der = compact_to_der(&fake_compact()).unwrap();
        let expected = format!("30440220{}0220{}", "11".repeat(32), "11".repeat(32));
        assert_eq!(hex::encode(&der), expected);
        assert_eq!(der.len(), 70);
    }

    /// High-bit R needs a 0x00 pad byte, growing the encoding to 71 bytes.
    #[test]
    fn test_compact_to_der_high_bit_padding() {
        let mut compact = fake_compact();
        compact[0] = 0x80;
        let der = compact_to_der(&compact).unwrap();
        assert_eq!(der.len(), 71);
        assert_eq!(&der[..5], &[0x30, 0x45, 0x02, 0x21, 0x00]);
    }

    /// Leading zero bytes are stripped from both integers.
    #[test]
    fn test_compact_to_der_strips_leading_zeros() {
        let mut compact = fake_compact();
        compact[0] = 0x00;
        compact[32] = 0x00;
        let der = compact_to_der(&compact).unwrap();
        assert_eq!(der.len(), 68);
        assert_eq!(der[3], 31);
    }

    #[test]
    fn test_from_compact_rejects_out_of_range() {
        let result = Signature::from_compact(&[0xff; 64]);
        assert!(matches!(result, Err(PrimitivesError::InvalidSignature(_))));
    }

    #[test]
    fn test_from_compact_rejects_zero() {
        assert!(Signature::from_compact(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_from_compact_rejects_bad_length() {
        let result = Signature::from_compact(&[0x11; 65]);
        assert_eq!(
            result,
            Err(PrimitivesError::InvalidSignatureLength { expected: 64, got: 65 })
        );
    }

    /// A high S value is encoded unchanged rather than normalized.
    #[test]
    fn test_to_der_preserves_high_s() {
        let compact = hex::decode(
            "a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404\
             971729c7fa944b465b35250c6570a2f31acbb14b13d1565fab7330dcb2b3dfb1",
        )
        .unwrap();
        let der = compact_to_der(&compact).unwrap();
        assert_eq!(der.len(), DER_SIGNATURE_MAX_LEN);
        assert_eq!(
            hex::encode(der),
            "3046022100a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404\
             022100971729c7fa944b465b35250c6570a2f31acbb14b13d1565fab7330dcb2b3dfb1"
        );
    }
}
