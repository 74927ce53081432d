//! Blind signature traits
//!
//! The trait models the three-party flow: the server generates keys and
//! signs blinded messages; the client blinds its message, keeps the
//! blinding factor, and unblinds the server's response; verification is
//! performed by the key holder.
//!
//! Methods take `&self` rather than being associated functions because a
//! scheme instance carries runtime parameters (ring dimension, modulus,
//! noise width) that every operation consults.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for blind signature schemes.
///
/// # Type Safety
///
/// The secret key never appears among the associated types: it is owned by
/// the implementor and cannot be extracted through this interface. The
/// blinding factor must be zeroizable so clients can destroy it after
/// unblinding.
pub trait BlindSignature {
    /// Public key material handed to clients.
    type PublicKey: Clone;

    /// Client-side blinding factor. Must never be transmitted; it is the
    /// only thing that links a blinded message to the final signature.
    type BlindingFactor: Zeroize;

    /// A message after blinding, safe to show to the signer.
    type BlindedMessage: Clone;

    /// Signature material, both the blind signature produced by the
    /// server and the unblinded signature held by the client.
    type SignatureData: Clone;

    /// Returns the name of the active parameter set.
    fn name(&self) -> &'static str;

    /// Generate a fresh key pair, replacing any previous one.
    ///
    /// # Security Requirements
    ///
    /// Implementations must draw all randomness from the provided
    /// cryptographically secure RNG.
    fn generate_keys<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()>;

    /// Returns a copy of the public key.
    ///
    /// Fails with [`crate::Error::InvalidKey`] before the first
    /// [`Self::generate_keys`] call.
    fn public_key(&self) -> Result<Self::PublicKey>;

    /// Client: blind a message, returning the blinded message to send to
    /// the signer and the blinding factor to retain for unblinding.
    fn blind_message<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<(Self::BlindedMessage, Self::BlindingFactor)>;

    /// Server: sign a blinded message without learning its content.
    fn blind_sign<R: CryptoRng + RngCore>(
        &self,
        blinded: &Self::BlindedMessage,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Client: strip the blinding from a blind signature.
    fn unblind(
        &self,
        blind_signature: &Self::SignatureData,
        blinding: &Self::BlindingFactor,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature on a message.
    ///
    /// A cryptographic mismatch is not an error: the result is
    /// `Ok(false)`. Errors are reserved for malformed inputs and missing
    /// keys. Implementations must not reveal which coefficients mismatched.
    fn verify(&self, message: &[u8], signature: &Self::SignatureData) -> Result<bool>;
}
