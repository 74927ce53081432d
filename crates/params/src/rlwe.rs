//! Parameter sets for the RLWE blind signature scheme
//!
//! Each set fixes the ring dimension `n` (a power of two), the coefficient
//! modulus `q`, and the standard deviation `sigma` of the discrete Gaussian
//! used for secret, error, and blinding polynomials. The security estimates
//! are advisory; the test levels exist purely so that the full protocol can
//! be exercised cheaply.

/// Gaussian standard deviation used when a caller passes a non-positive
/// value to a custom-parameter constructor.
pub const DEFAULT_SIGMA: f64 = 3.2;

/// Noise ratio sigma/q above which correctness of verification degrades.
pub const NOISE_RATIO_LIMIT: f64 = 0.01;

/// Named security levels for the blind signature scheme.
///
/// The test levels are far below any meaningful security margin and are
/// flagged as insecure in their parameter records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    /// Tiny insecure parameters for functional tests (n = 8).
    TestTiny,
    /// Small insecure parameters for functional tests (n = 32).
    TestSmall,
    /// Parameters in the neighborhood of NIST Kyber-512 (n = 256).
    Kyber512,
    /// Moderate security margin (n = 512).
    Moderate,
    /// High security margin (n = 1024).
    High,
}

/// A concrete RLWE parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RlweParams {
    /// Ring dimension (number of coefficients; a power of two).
    pub n: usize,
    /// Coefficient modulus.
    pub q: u64,
    /// Standard deviation of the discrete Gaussian noise.
    pub sigma: f64,
    /// Human-readable name of the parameter set.
    pub name: &'static str,
    /// Estimated classical security in bits.
    pub classical_bits: u32,
    /// Estimated quantum security in bits.
    pub quantum_bits: u32,
    /// Whether this set is considered cryptographically secure.
    pub is_secure: bool,
}

/// Tiny test parameters. 8 coefficients, no security whatsoever.
pub const TEST_TINY: RlweParams = RlweParams {
    n: 8,
    q: 7681,
    sigma: 3.0,
    name: "TEST_TINY (INSECURE)",
    classical_bits: 4,
    quantum_bits: 2,
    is_secure: false,
};

/// Small test parameters. Still far below any security margin.
pub const TEST_SMALL: RlweParams = RlweParams {
    n: 32,
    q: 7681,
    sigma: 3.0,
    name: "TEST_SMALL (INSECURE)",
    classical_bits: 16,
    quantum_bits: 8,
    is_secure: false,
};

/// Parameters in the neighborhood of Kyber-512. The modulus is the
/// NTT-friendly 7681 so that the ring matches the precomputed root catalog.
pub const KYBER512: RlweParams = RlweParams {
    n: 256,
    q: 7681,
    sigma: 3.0,
    name: "KYBER512",
    classical_bits: 128,
    quantum_bits: 64,
    is_secure: true,
};

/// Moderate security parameters.
pub const MODERATE: RlweParams = RlweParams {
    n: 512,
    q: 12289,
    sigma: 3.2,
    name: "MODERATE",
    classical_bits: 192,
    quantum_bits: 96,
    is_secure: true,
};

/// High security parameters.
pub const HIGH: RlweParams = RlweParams {
    n: 1024,
    q: 18433,
    sigma: 3.2,
    name: "HIGH",
    classical_bits: 256,
    quantum_bits: 128,
    is_secure: true,
};

/// Advisory findings about a parameter set.
///
/// These are returned as data; nothing in the workspace logs them.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterWarning {
    /// The set is flagged insecure in the catalog or by estimation.
    InsecureParameters {
        /// Estimated classical security in bits.
        classical_bits: u32,
    },
    /// The ring dimension is below the recommended minimum of 256.
    SmallRingDimension {
        /// The offending dimension.
        n: usize,
    },
    /// sigma/q exceeds [`NOISE_RATIO_LIMIT`]; verification may fail.
    LargeNoiseRatio {
        /// The observed ratio.
        ratio: f64,
    },
}

impl core::fmt::Display for ParameterWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsecureParameters { classical_bits } => write!(
                f,
                "parameters provide only ~{} bits of classical security; do not use in production",
                classical_bits
            ),
            Self::SmallRingDimension { n } => {
                write!(f, "ring dimension n={} is below the recommended minimum of 256", n)
            }
            Self::LargeNoiseRatio { ratio } => {
                write!(f, "noise ratio sigma/q={:.6} may affect correctness", ratio)
            }
        }
    }
}

impl RlweParams {
    /// Returns the catalog entry for a named security level.
    pub fn for_level(level: SecurityLevel) -> Self {
        match level {
            SecurityLevel::TestTiny => TEST_TINY,
            SecurityLevel::TestSmall => TEST_SMALL,
            SecurityLevel::Kyber512 => KYBER512,
            SecurityLevel::Moderate => MODERATE,
            SecurityLevel::High => HIGH,
        }
    }

    /// Builds a record for custom parameters, estimating the security
    /// margin from the ring dimension.
    ///
    /// The estimate is a coarse heuristic: dimensions below 128 earn n/2
    /// classical bits, dimensions below 256 are capped at 80 bits, and
    /// larger rings are credited 0.6 bits per coefficient.
    pub fn estimate(n: usize, q: u64, sigma: f64) -> Self {
        let (classical_bits, quantum_bits, is_secure) = if n < 128 {
            ((n / 2) as u32, (n / 4) as u32, false)
        } else if n < 256 {
            (80, 40, false)
        } else {
            ((n as f64 * 0.6) as u32, (n as f64 * 0.3) as u32, true)
        };
        RlweParams {
            n,
            q,
            sigma,
            name: "Custom",
            classical_bits,
            quantum_bits,
            is_secure,
        }
    }

    /// The noise ratio sigma/q.
    pub fn noise_ratio(&self) -> f64 {
        self.sigma / self.q as f64
    }

    /// True when q admits a negacyclic NTT of length n, i.e. q = 1 (mod 2n).
    pub fn is_ntt_friendly(&self) -> bool {
        self.n > 0 && (self.q - 1) % (2 * self.n as u64) == 0
    }

    /// Collects advisory warnings for this parameter set.
    pub fn warnings(&self) -> Vec<ParameterWarning> {
        let mut warnings = Vec::new();
        if !self.is_secure {
            warnings.push(ParameterWarning::InsecureParameters {
                classical_bits: self.classical_bits,
            });
        }
        if self.n < 256 {
            warnings.push(ParameterWarning::SmallRingDimension { n: self.n });
        }
        let ratio = self.noise_ratio();
        if ratio > NOISE_RATIO_LIMIT {
            warnings.push(ParameterWarning::LargeNoiseRatio { ratio });
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        assert_eq!(KYBER512.n, 256);
        assert_eq!(KYBER512.q, 7681);
        assert!(KYBER512.is_secure);
        assert_eq!(MODERATE.n, 512);
        assert_eq!(MODERATE.q, 12289);
        assert_eq!(HIGH.n, 1024);
        assert_eq!(HIGH.q, 18433);
        assert!(!TEST_TINY.is_secure);
        assert!(!TEST_SMALL.is_secure);
    }

    #[test]
    fn test_catalog_is_ntt_friendly() {
        for level in [
            SecurityLevel::TestTiny,
            SecurityLevel::TestSmall,
            SecurityLevel::Kyber512,
            SecurityLevel::Moderate,
            SecurityLevel::High,
        ] {
            let params = RlweParams::for_level(level);
            assert!(params.n.is_power_of_two(), "{}: n not a power of two", params.name);
            assert!(params.is_ntt_friendly(), "{}: q != 1 (mod 2n)", params.name);
        }
    }

    #[test]
    fn test_insecure_sets_warn() {
        let warnings = TEST_TINY.warnings();
        assert!(warnings
            .iter()
            .any(|w| matches!(w, ParameterWarning::InsecureParameters { .. })));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, ParameterWarning::SmallRingDimension { n: 8 })));
        assert!(KYBER512.warnings().is_empty());
    }

    #[test]
    fn test_noise_ratio_warning() {
        let params = RlweParams::estimate(256, 257, 3.0);
        assert!(params
            .warnings()
            .iter()
            .any(|w| matches!(w, ParameterWarning::LargeNoiseRatio { .. })));
    }

    #[test]
    fn test_estimate_heuristic() {
        let tiny = RlweParams::estimate(8, 7681, 3.0);
        assert_eq!(tiny.classical_bits, 4);
        assert!(!tiny.is_secure);

        let mid = RlweParams::estimate(128, 7681, 3.0);
        assert_eq!(mid.classical_bits, 80);
        assert!(!mid.is_secure);

        let big = RlweParams::estimate(256, 7681, 3.0);
        assert_eq!(big.classical_bits, 153);
        assert!(big.is_secure);
    }
}
