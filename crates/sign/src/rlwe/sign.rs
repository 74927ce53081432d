//! Core key generation, blinding, signing, unblinding, and verification
//!
//! The protocol algebra, with all polynomials in R_q = Z_q[x]/(x^n + 1):
//!
//! - keys: a uniform, s and e Gaussian, b = a*s + e
//! - client blinds: r Gaussian, sends Y + a*r for Y = H(m)
//! - server signs blind: s*(Y + a*r) + e1
//! - client unblinds: C - r*b = s*Y + e1 - r*e
//! - verification recomputes s*H(m) and compares signal roundings, so the
//!   residual noise e1 - r*e must stay below q/4 per coefficient
//!
//! Internal module; the public surface lives in [`super`].

use algorithms::poly::{DefaultSamplers, GaussianSampler, Polynomial, UniformSampler};
use params::rlwe::RlweParams;
use rand::{CryptoRng, RngCore};

use super::hashing::hash_to_polynomial;
use super::{RlweKeyPair, RlwePublicKey, RlweSecretKey};
use crate::error::{Error, Result};

/// Samples a fresh key pair: a uniform, s and e Gaussian, b = a*s + e.
pub(crate) fn keypair_internal<R>(params: &RlweParams, rng: &mut R) -> Result<RlweKeyPair>
where
    R: RngCore + CryptoRng,
{
    let a = DefaultSamplers::sample_uniform(rng, params.n, params.q).map_err(Error::from_algo)?;
    let s = DefaultSamplers::sample_gaussian(rng, params.n, params.q, params.sigma)
        .map_err(Error::from_algo)?;
    let e = DefaultSamplers::sample_gaussian(rng, params.n, params.q, params.sigma)
        .map_err(Error::from_algo)?;

    let b = a
        .mul(&s)
        .and_then(|a_s| a_s.add(&e))
        .map_err(Error::from_algo)?;

    Ok(RlweKeyPair {
        public: RlwePublicKey { a, b },
        secret: RlweSecretKey(s),
    })
}

/// Client side: hash the message to Y and hide it as Y + a*r. The caller
/// keeps r for unblinding; it never travels.
pub(crate) fn blind_message_internal<R>(
    params: &RlweParams,
    a: &Polynomial,
    message: &[u8],
    rng: &mut R,
) -> Result<(Polynomial, Polynomial)>
where
    R: RngCore + CryptoRng,
{
    let r = DefaultSamplers::sample_gaussian(rng, params.n, params.q, params.sigma)
        .map_err(Error::from_algo)?;
    let y = hash_to_polynomial(message, params.n, params.q)?;

    let blinded = a
        .mul(&r)
        .and_then(|a_r| y.add(&a_r))
        .map_err(Error::from_algo)?;

    Ok((blinded, r))
}

/// Server side: sign a blinded message as s*blinded + e1. The server sees
/// neither Y nor r.
pub(crate) fn blind_sign_internal<R>(
    params: &RlweParams,
    s: &Polynomial,
    blinded: &Polynomial,
    rng: &mut R,
) -> Result<Polynomial>
where
    R: RngCore + CryptoRng,
{
    let e1 = DefaultSamplers::sample_gaussian(rng, params.n, params.q, params.sigma)
        .map_err(Error::from_algo)?;
    s.mul(blinded)
        .and_then(|signed| signed.add(&e1))
        .map_err(Error::from_algo)
}

/// Client side: strip the blinding, C - r*b.
pub(crate) fn unblind_internal(
    c: &Polynomial,
    r: &Polynomial,
    b: &Polynomial,
) -> Result<Polynomial> {
    r.mul(b)
        .and_then(|r_b| c.sub(&r_b))
        .map_err(Error::from_algo)
}

/// Key-holder verification: recompute s*H(m) and compare signal roundings
/// coefficient by coefficient, rejecting on the first mismatch.
///
/// A cryptographic mismatch is a `false` return, not an error; errors are
/// reserved for signatures from the wrong ring.
pub(crate) fn verify_internal(
    params: &RlweParams,
    s: &Polynomial,
    message: &[u8],
    signature: &Polynomial,
) -> Result<bool> {
    if signature.ring_dim() != params.n {
        return Err(Error::from_algo(algorithms::Error::Dimension {
            context: "signature verification",
            expected: params.n,
            actual: signature.ring_dim(),
        }));
    }
    if signature.modulus() != params.q {
        return Err(Error::from_algo(algorithms::Error::Modulus {
            context: "signature verification",
            expected: params.q,
            actual: signature.modulus(),
        }));
    }

    let y = hash_to_polynomial(message, params.n, params.q)?;
    let expected = s.mul(&y).map_err(Error::from_algo)?;

    let expected_signal = expected.signal();
    let actual_signal = signature.signal();
    for (e, a) in expected_signal
        .coeffs()
        .iter()
        .zip(actual_signal.coeffs())
    {
        if e != a {
            return Ok(false);
        }
    }
    Ok(true)
}
