//! Polynomials over the quotient ring Z_q[x]/(x^n + 1)
//!
//! A polynomial stores its coefficients in ascending degree order, every
//! value kept in the canonical range `[0, q)`. The ring parameters are
//! runtime values: the parameter catalog is selected when a signer is
//! constructed, not at compile time, so binary operations check that both
//! operands live in the same ring and fail with a shape error otherwise.
//!
//! Operations return new values; nothing mutates its receiver except
//! [`Polynomial::set_coefficients`], which exists for transform code that
//! works on raw coefficient vectors.

use zeroize::Zeroize;

use super::arithmetic::{add_mod, mul_mod, sub_mod};
use super::ntt::Ntt;
use crate::error::{Error, Result};

/// An element of R_q = Z_q[x]/(x^n + 1).
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    coeffs: Vec<u64>,
    modulus: u64,
}

impl Polynomial {
    /// Creates the zero polynomial of the given ring.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or `q < 2`; ring parameters are validated by the
    /// layers that choose them, and a zero-sized ring is never meaningful.
    pub fn zero(n: usize, q: u64) -> Self {
        assert!(n > 0, "ring dimension must be nonzero");
        assert!(q >= 2, "modulus must be at least 2");
        Self {
            coeffs: vec![0; n],
            modulus: q,
        }
    }

    /// Creates a polynomial from a coefficient vector, reducing every
    /// value into `[0, q)`. The ring dimension is the vector length.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty or `q < 2`.
    pub fn from_coeffs(mut coeffs: Vec<u64>, q: u64) -> Self {
        assert!(!coeffs.is_empty(), "ring dimension must be nonzero");
        assert!(q >= 2, "modulus must be at least 2");
        for c in coeffs.iter_mut() {
            *c %= q;
        }
        Self { coeffs, modulus: q }
    }

    /// The ring dimension n.
    pub fn ring_dim(&self) -> usize {
        self.coeffs.len()
    }

    /// The coefficient modulus q.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The coefficients in ascending degree order.
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Replaces the coefficients, reducing each value into `[0, q)`.
    ///
    /// The new vector must match the current ring dimension.
    pub fn set_coefficients(&mut self, mut coeffs: Vec<u64>) -> Result<()> {
        if coeffs.len() != self.coeffs.len() {
            return Err(Error::Dimension {
                context: "set_coefficients",
                expected: self.coeffs.len(),
                actual: coeffs.len(),
            });
        }
        for c in coeffs.iter_mut() {
            *c %= self.modulus;
        }
        self.coeffs = coeffs;
        Ok(())
    }

    fn check_same_ring(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.coeffs.len() != other.coeffs.len() {
            return Err(Error::Dimension {
                context,
                expected: self.coeffs.len(),
                actual: other.coeffs.len(),
            });
        }
        if self.modulus != other.modulus {
            return Err(Error::Modulus {
                context,
                expected: self.modulus,
                actual: other.modulus,
            });
        }
        Ok(())
    }

    /// Coefficient-wise addition modulo q.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "polynomial addition")?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| add_mod(a, b, self.modulus))
            .collect();
        Ok(Self {
            coeffs,
            modulus: self.modulus,
        })
    }

    /// Coefficient-wise subtraction modulo q.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "polynomial subtraction")?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| sub_mod(a, b, self.modulus))
            .collect();
        Ok(Self {
            coeffs,
            modulus: self.modulus,
        })
    }

    /// Coefficient-wise negation modulo q.
    pub fn neg(&self) -> Self {
        let q = self.modulus;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| if c == 0 { 0 } else { q - c })
            .collect();
        Self { coeffs, modulus: q }
    }

    /// Multiplies every coefficient by a scalar modulo q.
    pub fn scalar_mul(&self, scalar: u64) -> Self {
        let q = self.modulus;
        let scalar = scalar % q;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| mul_mod(c, scalar, q))
            .collect();
        Self { coeffs, modulus: q }
    }

    /// Multiplies two polynomials in R_q.
    ///
    /// Uses the negacyclic NTT when the ring appears in the precomputed
    /// root catalog, and falls back to schoolbook convolution otherwise so
    /// that small test rings outside the catalog still work. Both paths
    /// compute the identical product modulo x^n + 1 and q.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "polynomial multiplication")?;
        match Ntt::new(self.ring_dim(), self.modulus) {
            Ok(ntt) => ntt.multiply(self, other),
            Err(Error::Parameter { .. }) => self.schoolbook_mul(other),
            Err(e) => Err(e),
        }
    }

    /// Schoolbook multiplication: the full 2n-1 term convolution reduced
    /// by x^n = -1. Quadratic, and kept public so the NTT path can be
    /// checked against it.
    pub fn schoolbook_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "polynomial multiplication")?;
        let n = self.coeffs.len();
        let q = self.modulus;

        let mut conv = vec![0u64; 2 * n - 1];
        for i in 0..n {
            for j in 0..n {
                let prod = mul_mod(self.coeffs[i], other.coeffs[j], q);
                conv[i + j] = add_mod(conv[i + j], prod, q);
            }
        }

        let mut coeffs = vec![0u64; n];
        for i in 0..n {
            let mut c = conv[i];
            // x^(i+n) = -x^i, so the upper half folds in with a sign flip.
            if i + n < conv.len() {
                c = sub_mod(c, conv[i + n], q);
            }
            coeffs[i] = c;
        }
        Ok(Self { coeffs, modulus: q })
    }

    /// Rounds every coefficient to the nearer of {0, floor(q/2)} in the
    /// cyclic metric on Z_q, ties broken toward 0.
    ///
    /// This is the noise-tolerant representation compared during
    /// signature verification.
    pub fn signal(&self) -> Self {
        let q = self.modulus;
        let half = q / 2;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let dist_zero = c.min(q - c);
                let dist_half = if c >= half {
                    (c - half).min(q - c + half)
                } else {
                    (half - c).min(q - half + c)
                };
                if dist_zero <= dist_half {
                    0
                } else {
                    half
                }
            })
            .collect();
        Self { coeffs, modulus: q }
    }

    /// Serializes the polynomial for hashing: ring dimension (native
    /// `usize`), modulus (`u64`), then every coefficient, all in host byte
    /// order.
    ///
    /// This encoding is only ever a SHA-256 pre-image; it is not portable
    /// across hosts and must not be persisted. See
    /// [`super::serialize`] for the canonical wire encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            core::mem::size_of::<usize>() + 8 + 8 * self.coeffs.len(),
        );
        bytes.extend_from_slice(&self.coeffs.len().to_ne_bytes());
        bytes.extend_from_slice(&self.modulus.to_ne_bytes());
        for &c in &self.coeffs {
            bytes.extend_from_slice(&c.to_ne_bytes());
        }
        bytes
    }
}
