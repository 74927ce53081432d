//! Sampling of random ring elements
//!
//! Every entry point is generic over `R: RngCore + CryptoRng`, so callers
//! choose the randomness source: `OsRng` in production, a seeded ChaCha
//! generator in tests. [`os_random_bytes`] is the front door to the OS
//! entropy pool for callers that need raw bytes.
//!
//! The Gaussian sampler is a Box-Muller discretization. It is neither
//! constant-time nor a statistically exact discrete Gaussian; a CDT- or
//! Karney-style sampler is required before any production use.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::polynomial::Polynomial;
use crate::error::{Error, Result};

/// Fills a buffer from the operating system entropy source.
///
/// Failure to obtain entropy is fatal to the caller: there is no fallback
/// source and nothing is retried.
pub fn os_random_bytes(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| Error::Random { source: "OsRng" })
}

/// Sampling of polynomials with uniformly random coefficients.
pub trait UniformSampler {
    /// Samples a polynomial with n coefficients uniform in `[0, q)`.
    fn sample_uniform<R: RngCore + CryptoRng>(rng: &mut R, n: usize, q: u64)
        -> Result<Polynomial>;
}

/// Sampling of polynomials from a discretized Gaussian distribution.
pub trait GaussianSampler {
    /// Samples a polynomial whose coefficients approximate a centered
    /// Gaussian with standard deviation `sigma`, reduced into `[0, q)`.
    fn sample_gaussian<R: RngCore + CryptoRng>(
        rng: &mut R,
        n: usize,
        q: u64,
        sigma: f64,
    ) -> Result<Polynomial>;
}

/// Default implementation of the samplers.
pub struct DefaultSamplers;

fn check_ring(n: usize, q: u64) -> Result<()> {
    if n == 0 {
        return Err(Error::param("n", "ring dimension must be nonzero"));
    }
    if q < 2 {
        return Err(Error::param("q", format!("{} is below the minimum modulus 2", q)));
    }
    Ok(())
}

impl UniformSampler for DefaultSamplers {
    fn sample_uniform<R: RngCore + CryptoRng>(
        rng: &mut R,
        n: usize,
        q: u64,
    ) -> Result<Polynomial> {
        check_ring(n, q)?;

        // Rejection sampling: accept draws below the largest multiple of q
        // that fits in 64 bits, so the reduction is exactly uniform.
        let bound = (1u128 << 64) / q as u128 * q as u128;
        let mut coeffs = Vec::with_capacity(n);
        for _ in 0..n {
            loop {
                let x = rng.next_u64();
                if (x as u128) < bound {
                    coeffs.push(x % q);
                    break;
                }
            }
        }
        Ok(Polynomial::from_coeffs(coeffs, q))
    }
}

impl GaussianSampler for DefaultSamplers {
    fn sample_gaussian<R: RngCore + CryptoRng>(
        rng: &mut R,
        n: usize,
        q: u64,
        sigma: f64,
    ) -> Result<Polynomial> {
        check_ring(n, q)?;
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(Error::param("sigma", format!("{} is not a positive width", sigma)));
        }

        let m = q as i64;
        let mut coeffs = Vec::with_capacity(n);
        for _ in 0..n {
            let z = standard_normal(rng) * sigma;
            let rounded = z.round() as i64;
            coeffs.push(rounded.rem_euclid(m) as u64);
        }
        Ok(Polynomial::from_coeffs(coeffs, q))
    }
}

/// One draw from the standard normal distribution via Box-Muller.
///
/// A zero first uniform would blow up the logarithm, so that draw is
/// rejected and retried.
fn standard_normal<R: RngCore + CryptoRng>(rng: &mut R) -> f64 {
    loop {
        let u1 = rng.next_u64() as f64 / u64::MAX as f64;
        let u2 = rng.next_u64() as f64 / u64::MAX as f64;
        if u1 > 0.0 {
            let radius = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f64::consts::PI * u2;
            return radius * theta.cos();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_uniform_coefficients_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for q in [2u64, 17, 7681, 12289, 18433] {
            let poly = DefaultSamplers::sample_uniform(&mut rng, 64, q).unwrap();
            assert_eq!(poly.ring_dim(), 64);
            assert!(poly.coeffs().iter().all(|&c| c < q));
        }
    }

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let a = DefaultSamplers::sample_uniform(&mut ChaCha20Rng::seed_from_u64(9), 32, 7681)
            .unwrap();
        let b = DefaultSamplers::sample_uniform(&mut ChaCha20Rng::seed_from_u64(9), 32, 7681)
            .unwrap();
        let c = DefaultSamplers::sample_uniform(&mut ChaCha20Rng::seed_from_u64(10), 32, 7681)
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_uniform_mean_is_plausible() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let q = 7681u64;
        let poly = DefaultSamplers::sample_uniform(&mut rng, 4096, q).unwrap();
        let mean = poly.coeffs().iter().sum::<u64>() as f64 / 4096.0;
        // Expected mean is (q-1)/2 = 3840; std of the mean is ~35.
        assert!((mean - 3840.0).abs() < 300.0, "mean {} is implausible", mean);
    }

    #[test]
    fn test_gaussian_stays_small() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let q = 7681u64;
        let sigma = 3.0;
        let poly = DefaultSamplers::sample_gaussian(&mut rng, 1024, q, sigma).unwrap();
        for &c in poly.coeffs() {
            // Centered magnitude; 12 sigma leaves astronomically little mass.
            let centered = c.min(q - c);
            assert!(centered <= (12.0 * sigma) as u64, "outlier coefficient {}", c);
        }
    }

    #[test]
    fn test_gaussian_spread_is_plausible() {
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let q = 7681u64;
        let sigma = 3.0;
        let poly = DefaultSamplers::sample_gaussian(&mut rng, 4096, q, sigma).unwrap();
        let mut sum_sq = 0.0;
        for &c in poly.coeffs() {
            let centered = if c > q / 2 { c as f64 - q as f64 } else { c as f64 };
            sum_sq += centered * centered;
        }
        let empirical = (sum_sq / 4096.0).sqrt();
        assert!(
            empirical > 0.5 * sigma && empirical < 2.0 * sigma,
            "empirical sigma {} is implausible",
            empirical
        );
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(DefaultSamplers::sample_gaussian(&mut rng, 8, 7681, 0.0).is_err());
        assert!(DefaultSamplers::sample_gaussian(&mut rng, 8, 7681, -1.0).is_err());
        assert!(DefaultSamplers::sample_gaussian(&mut rng, 8, 7681, f64::NAN).is_err());
    }

    #[test]
    fn test_samplers_reject_bad_ring() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(DefaultSamplers::sample_uniform(&mut rng, 0, 7681).is_err());
        assert!(DefaultSamplers::sample_uniform(&mut rng, 8, 1).is_err());
        assert!(DefaultSamplers::sample_gaussian(&mut rng, 0, 7681, 3.0).is_err());
    }

    #[test]
    fn test_os_random_bytes_fills() {
        let mut buf = [0u8; 64];
        os_random_bytes(&mut buf).unwrap();
        // 64 zero bytes from a healthy OS RNG is a 2^-512 event.
        assert!(buf.iter().any(|&b| b != 0));
    }
}
