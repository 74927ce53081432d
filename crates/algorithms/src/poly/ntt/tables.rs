//! Precomputed primitive 2n-th roots of unity for the supported rings.
//!
//! Each entry holds psi with psi^n = -1 (mod q) and exact order 2n,
//! together with its inverse. The values were produced offline by
//! searching candidates g = 2, 3, ... and raising them to (q-1)/(2n);
//! nothing is searched at runtime. A unit test revalidates order and sign
//! of every entry.

/// One catalog entry: the root pair for a single (n, q) ring.
pub(crate) struct PsiTable {
    /// Ring dimension.
    pub n: usize,
    /// Coefficient modulus, with q = 1 (mod 2n).
    pub q: u64,
    /// Primitive 2n-th root of unity with psi^n = q - 1.
    pub psi: u64,
    /// Modular inverse of psi.
    pub psi_inv: u64,
}

pub(crate) const PSI_TABLES: &[PsiTable] = &[
    PsiTable { n: 8, q: 7681, psi: 7154, psi_inv: 7098 },
    PsiTable { n: 32, q: 7681, psi: 2645, psi_inv: 5413 },
    PsiTable { n: 256, q: 7681, psi: 4055, psi_inv: 2811 },
    PsiTable { n: 512, q: 12289, psi: 10302, psi_inv: 8974 },
    PsiTable { n: 1024, q: 18433, psi: 17660, psi_inv: 18123 },
];

/// Looks up the root pair for (n, q); `None` when the ring is unsupported.
pub(crate) fn lookup(n: usize, q: u64) -> Option<&'static PsiTable> {
    PSI_TABLES.iter().find(|t| t.n == n && t.q == q)
}
