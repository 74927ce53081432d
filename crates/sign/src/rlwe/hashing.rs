//! Counter-mode SHA-256 expansion of messages into ring elements
//!
//! Each coefficient is one bit of the stream SHA-256(0 || m),
//! SHA-256(1 || m), ... mapped to {0, floor(q/2)}. Bits are consumed
//! most-significant-first within each digest byte. The 4-byte counter is
//! serialized in host byte order, matching the in-memory hash pre-image
//! convention used everywhere in this workspace: the expansion is
//! deterministic on one host but not portable across endianness.

use algorithms::hash::{HashFunction, Sha256};
use algorithms::poly::Polynomial;

use crate::error::{Error, Result};

/// Hashes an arbitrary byte string to a polynomial in R_q with every
/// coefficient in {0, floor(q/2)}.
pub fn hash_to_polynomial(message: &[u8], n: usize, q: u64) -> Result<Polynomial> {
    if n == 0 {
        return Err(Error::from_algo(algorithms::Error::param(
            "n",
            "ring dimension must be nonzero",
        )));
    }
    if q < 2 {
        return Err(Error::from_algo(algorithms::Error::param(
            "q",
            format!("{} is below the minimum modulus 2", q),
        )));
    }
    let half = q / 2;
    let mut coeffs = vec![0u64; n];
    let mut idx = 0usize;
    let mut counter: u32 = 0;

    while idx < n {
        let mut hasher = Sha256::new();
        hasher
            .update(&counter.to_ne_bytes())
            .map_err(Error::from_algo)?;
        hasher.update(message).map_err(Error::from_algo)?;
        let digest = hasher.finalize().map_err(Error::from_algo)?;

        'digest: for byte in digest {
            for bit in (0..8).rev() {
                if idx == n {
                    break 'digest;
                }
                if (byte >> bit) & 1 == 1 {
                    coeffs[idx] = half;
                }
                idx += 1;
            }
        }
        counter += 1;
    }

    Ok(Polynomial::from_coeffs(coeffs, q))
}
