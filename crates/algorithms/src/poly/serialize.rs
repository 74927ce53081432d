//! Canonical polynomial serialization
//!
//! The in-memory hash pre-image produced by [`Polynomial::to_bytes`] is
//! host-endian and must never leave the process. Callers that persist or
//! transmit polynomials use this canonical little-endian encoding instead:
//!
//! ```text
//! u32 ring dimension | u64 modulus | ring_dim x u64 coefficients
//! ```
//!
//! Decoding validates the header, the exact payload length, and that every
//! coefficient is canonical (below the modulus).

use super::polynomial::Polynomial;
use crate::error::{Error, Result};

/// Header size: u32 dimension plus u64 modulus.
const HEADER_LEN: usize = 4 + 8;

/// Encodes a polynomial in the canonical little-endian format.
pub fn to_canonical_bytes(poly: &Polynomial) -> Vec<u8> {
    let n = poly.ring_dim();
    let mut bytes = Vec::with_capacity(HEADER_LEN + 8 * n);
    bytes.extend_from_slice(&(n as u32).to_le_bytes());
    bytes.extend_from_slice(&poly.modulus().to_le_bytes());
    for &c in poly.coeffs() {
        bytes.extend_from_slice(&c.to_le_bytes());
    }
    bytes
}

/// Decodes a polynomial from the canonical little-endian format.
pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Polynomial> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::param(
            "encoded polynomial",
            format!("{} bytes is shorter than the {}-byte header", bytes.len(), HEADER_LEN),
        ));
    }

    let n = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let q = u64::from_le_bytes([
        bytes[4], bytes[5], bytes[6], bytes[7], bytes[8], bytes[9], bytes[10], bytes[11],
    ]);

    if n == 0 {
        return Err(Error::param("encoded polynomial", "ring dimension is zero"));
    }
    if q < 2 {
        return Err(Error::param(
            "encoded polynomial",
            format!("modulus {} is below the minimum of 2", q),
        ));
    }

    let expected_len = HEADER_LEN + 8 * n;
    if bytes.len() != expected_len {
        return Err(Error::param(
            "encoded polynomial",
            format!("expected {} bytes for n={}, got {}", expected_len, n, bytes.len()),
        ));
    }

    let mut coeffs = Vec::with_capacity(n);
    for chunk in bytes[HEADER_LEN..].chunks_exact(8) {
        let c = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        if c >= q {
            return Err(Error::param(
                "encoded polynomial",
                format!("coefficient {} is not canonical for modulus {}", c, q),
            ));
        }
        coeffs.push(c);
    }
    Ok(Polynomial::from_coeffs(coeffs, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::sampling::{DefaultSamplers, UniformSampler};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_roundtrip() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for (n, q) in [(8usize, 7681u64), (32, 12289), (256, 18433)] {
            let poly = DefaultSamplers::sample_uniform(&mut rng, n, q).unwrap();
            let bytes = to_canonical_bytes(&poly);
            assert_eq!(bytes.len(), 12 + 8 * n);
            let decoded = from_canonical_bytes(&bytes).unwrap();
            assert_eq!(decoded, poly);
        }
    }

    #[test]
    fn test_rejects_truncated_and_padded() {
        let poly = Polynomial::from_coeffs(vec![1, 2, 3, 4], 7681);
        let bytes = to_canonical_bytes(&poly);

        assert!(from_canonical_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(from_canonical_bytes(&bytes[..4]).is_err());

        let mut padded = bytes.clone();
        padded.push(0);
        assert!(from_canonical_bytes(&padded).is_err());
    }

    #[test]
    fn test_rejects_non_canonical_coefficient() {
        let poly = Polynomial::from_coeffs(vec![1, 2, 3, 4], 7681);
        let mut bytes = to_canonical_bytes(&poly);
        // Overwrite the first coefficient with the modulus itself.
        bytes[12..20].copy_from_slice(&7681u64.to_le_bytes());
        assert!(from_canonical_bytes(&bytes).is_err());
    }

    #[test]
    fn test_rejects_degenerate_header() {
        let mut bytes = vec![0u8; 12];
        // n = 0.
        assert!(from_canonical_bytes(&bytes).is_err());
        // n = 1, q = 0.
        bytes[0..4].copy_from_slice(&1u32.to_le_bytes());
        let mut with_coeff = bytes.clone();
        with_coeff.extend_from_slice(&0u64.to_le_bytes());
        assert!(from_canonical_bytes(&with_coeff).is_err());
    }
}
