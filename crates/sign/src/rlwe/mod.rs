//! RLWE blind signatures over Z_q[x]/(x^n + 1)
//!
//! A three-party protocol: a client obtains a signature on a secret
//! message without revealing it, and the key holder later verifies the
//! unblinded signature. Keys are an RLWE sample (a, b = a*s + e); the
//! message is hashed to a {0, q/2}-coefficient polynomial Y; blinding adds
//! a*r for a small Gaussian r; verification recomputes s*H(m) and compares
//! noise-tolerant signal roundings.
//!
//! Verification consults the secret s, so from the key holder's vantage
//! this is a symmetric-style check, not a publicly verifiable signature.
//! That property is inherent to the construction: the API never exposes s,
//! and verification is only offered on the signer.
//!
//! This is a research construction. The Gaussian sampler is not
//! constant-time, the catalog's test levels are deliberately insecure, and
//! no parameter set here has seen real cryptanalysis.
//!
//! Submodules:
//! - `hashing`: counter-mode SHA-256 expansion of messages into R_q
//! - `sign`: the internal key generation, blinding, signing, unblinding,
//!   and verification routines

mod hashing;
mod sign;

pub use hashing::hash_to_polynomial;

use algorithms::poly::Polynomial;
use api::BlindSignature;
use params::rlwe::{ParameterWarning, RlweParams, SecurityLevel, DEFAULT_SIGMA};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error;

/// Public key (a, b) with b = a*s + e.
#[derive(Clone, Debug, PartialEq)]
pub struct RlwePublicKey {
    pub(crate) a: Polynomial,
    pub(crate) b: Polynomial,
}

impl RlwePublicKey {
    /// The uniform component a.
    pub fn a(&self) -> &Polynomial {
        &self.a
    }

    /// The RLWE sample b = a*s + e.
    pub fn b(&self) -> &Polynomial {
        &self.b
    }
}

/// Secret key s. Wiped on drop and never returned by any public method.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RlweSecretKey(pub(crate) Polynomial);

/// A generated key pair, owned by the signer.
#[derive(Clone)]
pub struct RlweKeyPair {
    pub(crate) public: RlwePublicKey,
    pub(crate) secret: RlweSecretKey,
}

/// Client-side blinding factor r. Must never be transmitted; wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RlweBlindingFactor(pub(crate) Polynomial);

/// A blinded message Y + a*r, safe to hand to the signer.
#[derive(Clone, Debug, PartialEq)]
pub struct RlweBlindedMessage(pub(crate) Polynomial);

impl RlweBlindedMessage {
    /// Wraps a received polynomial as a blinded message.
    pub fn new(poly: Polynomial) -> Self {
        Self(poly)
    }

    /// The underlying ring element.
    pub fn as_polynomial(&self) -> &Polynomial {
        &self.0
    }
}

/// Signature material: either the server's blind signature or the
/// client's unblinded signature, both elements of R_q.
#[derive(Clone, Debug, PartialEq)]
pub struct RlweSignature(pub(crate) Polynomial);

impl RlweSignature {
    /// Wraps a received polynomial as signature material.
    pub fn new(poly: Polynomial) -> Self {
        Self(poly)
    }

    /// The underlying ring element.
    pub fn as_polynomial(&self) -> &Polynomial {
        &self.0
    }
}

/// The RLWE blind signature scheme.
///
/// Holds the active parameter set and, after [`BlindSignature::generate_keys`],
/// the key pair. One instance plays whichever protocol roles the caller
/// needs; in a real deployment the client side would only ever receive
/// (a, b) and use [`BlindSignature::blind_message`] / [`BlindSignature::unblind`].
pub struct RlweBlindSigner {
    params: RlweParams,
    keys: Option<RlweKeyPair>,
}

impl RlweBlindSigner {
    /// Creates a signer for a named security level from the catalog.
    pub fn new(level: SecurityLevel) -> api::Result<Self> {
        Self::from_params(RlweParams::for_level(level))
    }

    /// Creates a signer for explicit parameters. The security estimate in
    /// the resulting record is heuristic. A non-positive or non-finite
    /// sigma falls back to [`DEFAULT_SIGMA`].
    pub fn with_parameters(n: usize, q: u64, sigma: f64) -> api::Result<Self> {
        let sigma = if sigma > 0.0 && sigma.is_finite() {
            sigma
        } else {
            DEFAULT_SIGMA
        };
        Self::from_params(RlweParams::estimate(n, q, sigma))
    }

    fn from_params(params: RlweParams) -> api::Result<Self> {
        if params.n == 0 || !params.n.is_power_of_two() {
            return Err(api::Error::InvalidParameter {
                context: "signer construction",
                message: format!("ring dimension {} is not a power of two", params.n),
            });
        }
        if params.q < 2 {
            return Err(api::Error::InvalidParameter {
                context: "signer construction",
                message: format!("modulus {} is below the minimum of 2", params.q),
            });
        }
        Ok(Self { params, keys: None })
    }

    /// The active parameter record.
    pub fn parameters(&self) -> &RlweParams {
        &self.params
    }

    /// Advisory warnings about the active parameters, returned as data.
    pub fn parameter_warnings(&self) -> Vec<ParameterWarning> {
        self.params.warnings()
    }

    /// Hashes a message into R_q with coefficients in {0, q/2}; the
    /// client-side target Y.
    pub fn hash_message(&self, message: &[u8]) -> api::Result<Polynomial> {
        hash_to_polynomial(message, self.params.n, self.params.q).map_err(api::Error::from)
    }

    fn key_pair(&self, context: &'static str) -> Result<&RlweKeyPair, Error> {
        self.keys.as_ref().ok_or(Error::Key { context })
    }
}

impl BlindSignature for RlweBlindSigner {
    type PublicKey = RlwePublicKey;
    type BlindingFactor = RlweBlindingFactor;
    type BlindedMessage = RlweBlindedMessage;
    type SignatureData = RlweSignature;

    fn name(&self) -> &'static str {
        self.params.name
    }

    fn generate_keys<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> api::Result<()> {
        let keys = sign::keypair_internal(&self.params, rng).map_err(api::Error::from)?;
        self.keys = Some(keys);
        Ok(())
    }

    fn public_key(&self) -> api::Result<RlwePublicKey> {
        Ok(self
            .key_pair("public key access")
            .map_err(api::Error::from)?
            .public
            .clone())
    }

    fn blind_message<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> api::Result<(RlweBlindedMessage, RlweBlindingFactor)> {
        let keys = self.key_pair("message blinding").map_err(api::Error::from)?;
        let (blinded, r) =
            sign::blind_message_internal(&self.params, &keys.public.a, message, rng)
                .map_err(api::Error::from)?;
        Ok((RlweBlindedMessage(blinded), RlweBlindingFactor(r)))
    }

    fn blind_sign<R: CryptoRng + RngCore>(
        &self,
        blinded: &RlweBlindedMessage,
        rng: &mut R,
    ) -> api::Result<RlweSignature> {
        let keys = self.key_pair("blind signing").map_err(api::Error::from)?;
        let signed = sign::blind_sign_internal(&self.params, &keys.secret.0, &blinded.0, rng)
            .map_err(api::Error::from)?;
        Ok(RlweSignature(signed))
    }

    fn unblind(
        &self,
        blind_signature: &RlweSignature,
        blinding: &RlweBlindingFactor,
    ) -> api::Result<RlweSignature> {
        let keys = self.key_pair("unblinding").map_err(api::Error::from)?;
        let unblinded = sign::unblind_internal(&blind_signature.0, &blinding.0, &keys.public.b)
            .map_err(api::Error::from)?;
        Ok(RlweSignature(unblinded))
    }

    fn verify(&self, message: &[u8], signature: &RlweSignature) -> api::Result<bool> {
        let keys = self.key_pair("verification").map_err(api::Error::from)?;
        sign::verify_internal(&self.params, &keys.secret.0, message, &signature.0)
            .map_err(api::Error::from)
    }
}
