//! Negacyclic Number Theoretic Transform for Z_q[x]/(x^n + 1)
//!
//! For the supported parameter sets, where q = 1 (mod 2n), products in R_q
//! are computed with a length-n transform and no padding to 2n: the inputs
//! are "twisted" coefficient-wise by powers of a primitive 2n-th root of
//! unity psi with psi^n = -1 (mod q), run through a standard Cooley-Tukey
//! radix-2 NTT with root omega = psi^2, multiplied pointwise, and
//! untwisted on the way back.
//!
//! The roots themselves are looked up in a catalog baked at build time;
//! constructing a context for a ring outside the catalog fails, and
//! callers fall back to schoolbook multiplication.

mod tables;
#[cfg(test)]
mod tests;

use super::arithmetic::{add_mod, inv_mod, mul_mod, sub_mod};
use super::polynomial::Polynomial;
use crate::error::{Error, Result};

/// An immutable transform context for one (n, q) pair.
///
/// Contexts are cheap to build (two modular inversions and 2n
/// multiplications for the twist vectors) and safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Ntt {
    n: usize,
    q: u64,
    omega: u64,
    omega_inv: u64,
    n_inv: u64,
    psi: u64,
    psi_inv: u64,
    twist: Vec<u64>,
    twist_inv: Vec<u64>,
}

impl Ntt {
    /// Builds a transform context for the ring Z_q[x]/(x^n + 1).
    ///
    /// Fails with a parameter error if `n` is not a power of two, `q < 2`,
    /// `q != 1 (mod 2n)`, or no precomputed root exists for `(n, q)`.
    pub fn new(n: usize, q: u64) -> Result<Self> {
        if n == 0 || !n.is_power_of_two() {
            return Err(Error::param("n", format!("{} is not a power of two", n)));
        }
        if q < 2 {
            return Err(Error::param("q", format!("{} is below the minimum modulus 2", q)));
        }
        if (q - 1) % (2 * n as u64) != 0 {
            return Err(Error::param(
                "q",
                format!("negacyclic NTT requires q = 1 (mod 2n); got q={}, n={}", q, n),
            ));
        }
        let table = tables::lookup(n, q).ok_or_else(|| {
            Error::param("(n, q)", format!("no precomputed root table for n={}, q={}", n, q))
        })?;

        let psi = table.psi;
        let psi_inv = table.psi_inv;
        // The underlying length-n transform uses omega = psi^2, of order n.
        let omega = mul_mod(psi, psi, q);
        let omega_inv = inv_mod(omega, q)?;
        let n_inv = inv_mod(n as u64, q)?;

        // twist[i] = psi^i, twist_inv[i] = psi^-i. Folding the twist into
        // the inputs turns the length-n cyclic transform into a negacyclic
        // one, because h_i psi^i is the cyclic convolution of f_i psi^i
        // and g_i psi^i.
        let mut twist = Vec::with_capacity(n);
        let mut twist_inv = Vec::with_capacity(n);
        let mut fwd: u64 = 1;
        let mut inv: u64 = 1;
        for _ in 0..n {
            twist.push(fwd);
            twist_inv.push(inv);
            fwd = mul_mod(fwd, psi, q);
            inv = mul_mod(inv, psi_inv, q);
        }

        Ok(Self {
            n,
            q,
            omega,
            omega_inv,
            n_inv,
            psi,
            psi_inv,
            twist,
            twist_inv,
        })
    }

    /// Transform size n.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Modulus q.
    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// The primitive 2n-th root of unity in use.
    pub fn psi(&self) -> u64 {
        self.psi
    }

    /// The inverse of [`Self::psi`].
    pub fn psi_inv(&self) -> u64 {
        self.psi_inv
    }

    fn check_len(&self, len: usize, context: &'static str) -> Result<()> {
        if len != self.n {
            return Err(Error::Dimension {
                context,
                expected: self.n,
                actual: len,
            });
        }
        Ok(())
    }

    /// In-place forward transform of a coefficient vector in `[0, q)`:
    /// twist by psi^i, then the length-n NTT.
    pub fn forward(&self, a: &mut [u64]) -> Result<()> {
        self.check_len(a.len(), "NTT forward")?;
        for (x, &t) in a.iter_mut().zip(&self.twist) {
            *x = mul_mod(*x, t, self.q);
        }
        self.transform(a, false);
        Ok(())
    }

    /// In-place inverse transform, returning to the coefficient domain:
    /// the inverse NTT (scaled by n^-1), then the untwist by psi^-i.
    pub fn inverse(&self, a: &mut [u64]) -> Result<()> {
        self.check_len(a.len(), "NTT inverse")?;
        self.transform(a, true);
        for (x, &t) in a.iter_mut().zip(&self.twist_inv) {
            *x = mul_mod(*x, t, self.q);
        }
        Ok(())
    }

    /// Forward transform of a polynomial, checking that it lives in this
    /// context's ring.
    pub fn forward_polynomial(&self, poly: &mut Polynomial) -> Result<()> {
        self.check_ring(poly, "NTT forward")?;
        let mut coeffs = poly.coeffs().to_vec();
        self.forward(&mut coeffs)?;
        poly.set_coefficients(coeffs)
    }

    /// Inverse transform of a polynomial, checking that it lives in this
    /// context's ring.
    pub fn inverse_polynomial(&self, poly: &mut Polynomial) -> Result<()> {
        self.check_ring(poly, "NTT inverse")?;
        let mut coeffs = poly.coeffs().to_vec();
        self.inverse(&mut coeffs)?;
        poly.set_coefficients(coeffs)
    }

    /// Multiplies two polynomials of this ring: forward both, pointwise
    /// product, inverse.
    pub fn multiply(&self, f: &Polynomial, g: &Polynomial) -> Result<Polynomial> {
        self.check_ring(f, "NTT multiplication")?;
        self.check_ring(g, "NTT multiplication")?;

        let mut a = f.coeffs().to_vec();
        let mut b = g.coeffs().to_vec();
        self.forward(&mut a)?;
        self.forward(&mut b)?;
        for (x, &y) in a.iter_mut().zip(&b) {
            *x = mul_mod(*x, y, self.q);
        }
        self.inverse(&mut a)?;
        Ok(Polynomial::from_coeffs(a, self.q))
    }

    fn check_ring(&self, poly: &Polynomial, context: &'static str) -> Result<()> {
        self.check_len(poly.ring_dim(), context)?;
        if poly.modulus() != self.q {
            return Err(Error::Modulus {
                context,
                expected: self.q,
                actual: poly.modulus(),
            });
        }
        Ok(())
    }

    /// Radix-2 Cooley-Tukey butterflies over the bit-reversed input. The
    /// inverse direction runs the same network with omega^-1 and scales by
    /// n^-1 at the end.
    fn transform(&self, a: &mut [u64], inverse: bool) {
        let n = self.n;
        let q = self.q;

        bit_reverse(a);

        let mut len = 2;
        while len <= n {
            // Root of order `len`: square the full-order root down.
            let mut wlen = if inverse { self.omega_inv } else { self.omega };
            let mut i = len;
            while i < n {
                wlen = mul_mod(wlen, wlen, q);
                i <<= 1;
            }

            for start in (0..n).step_by(len) {
                let mut w: u64 = 1;
                for j in 0..len / 2 {
                    let u = a[start + j];
                    let v = mul_mod(a[start + j + len / 2], w, q);
                    a[start + j] = add_mod(u, v, q);
                    a[start + j + len / 2] = sub_mod(u, v, q);
                    w = mul_mod(w, wlen, q);
                }
            }
            len <<= 1;
        }

        if inverse {
            for x in a.iter_mut() {
                *x = mul_mod(*x, self.n_inv, q);
            }
        }
    }
}

/// In-place bit-reversal permutation of a power-of-two-length slice.
fn bit_reverse(a: &mut [u64]) {
    let n = a.len();
    let mut j = 0usize;
    for i in 1..n.saturating_sub(1) {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            a.swap(i, j);
        }
    }
}
