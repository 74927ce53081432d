use super::tables;
use super::Ntt;
use crate::error::Error;
use crate::poly::arithmetic::{mul_mod, pow_mod};
use crate::poly::polynomial::Polynomial;
use crate::poly::sampling::{DefaultSamplers, UniformSampler};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SUPPORTED: [(usize, u64); 5] = [
    (8, 7681),
    (32, 7681),
    (256, 7681),
    (512, 12289),
    (1024, 18433),
];

#[test]
fn test_baked_roots_have_order_2n() {
    for table in tables::PSI_TABLES {
        let two_n = 2 * table.n as u64;
        assert_eq!(
            pow_mod(table.psi, two_n, table.q),
            1,
            "psi^2n != 1 for n={}, q={}",
            table.n,
            table.q
        );
        // 2n is a power of two, so exact order 2n is equivalent to
        // psi^n != 1; the negacyclic construction needs psi^n = -1.
        assert_eq!(
            pow_mod(table.psi, table.n as u64, table.q),
            table.q - 1,
            "psi^n != -1 for n={}, q={}",
            table.n,
            table.q
        );
        assert_eq!(
            mul_mod(table.psi, table.psi_inv, table.q),
            1,
            "psi * psi_inv != 1 for n={}, q={}",
            table.n,
            table.q
        );
        assert_eq!((table.q - 1) % two_n, 0);
    }
}

#[test]
fn test_construction_rejects_bad_parameters() {
    // n not a power of two.
    assert!(matches!(Ntt::new(12, 7681), Err(Error::Parameter { .. })));
    assert!(matches!(Ntt::new(0, 7681), Err(Error::Parameter { .. })));
    // q below 2.
    assert!(matches!(Ntt::new(8, 1), Err(Error::Parameter { .. })));
    // q != 1 (mod 2n).
    assert!(matches!(Ntt::new(8, 7687), Err(Error::Parameter { .. })));
    // NTT-friendly but absent from the catalog (17 = 1 mod 16).
    assert!(matches!(Ntt::new(8, 17), Err(Error::Parameter { .. })));
    assert!(matches!(Ntt::new(16, 7681), Err(Error::Parameter { .. })));
}

#[test]
fn test_forward_rejects_wrong_length() {
    let ntt = Ntt::new(8, 7681).unwrap();
    let mut short = vec![0u64; 4];
    assert!(matches!(
        ntt.forward(&mut short),
        Err(Error::Dimension { .. })
    ));
    assert!(matches!(
        ntt.inverse(&mut short),
        Err(Error::Dimension { .. })
    ));
}

#[test]
fn test_roundtrip_structured_inputs() {
    for (n, q) in SUPPORTED {
        let ntt = Ntt::new(n, q).unwrap();

        // Zero vector.
        let mut zero = vec![0u64; n];
        ntt.forward(&mut zero).unwrap();
        ntt.inverse(&mut zero).unwrap();
        assert_eq!(zero, vec![0u64; n], "zero roundtrip failed for n={}", n);

        // Delta basis vectors (a sample for larger rings).
        let step = if n <= 32 { 1 } else { n / 16 };
        for k in (0..n).step_by(step) {
            let mut delta = vec![0u64; n];
            delta[k] = 1;
            let expected = delta.clone();
            ntt.forward(&mut delta).unwrap();
            ntt.inverse(&mut delta).unwrap();
            assert_eq!(delta, expected, "delta_{} roundtrip failed for n={}", k, n);
        }

        // Ascending ramp 0, 1, ..., n-1 (mod q).
        let mut ramp: Vec<u64> = (0..n as u64).map(|i| i % q).collect();
        let expected = ramp.clone();
        ntt.forward(&mut ramp).unwrap();
        ntt.inverse(&mut ramp).unwrap();
        assert_eq!(ramp, expected, "ramp roundtrip failed for n={}", n);
    }
}

#[test]
fn test_roundtrip_random_inputs() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for (n, q) in SUPPORTED {
        let ntt = Ntt::new(n, q).unwrap();
        for _ in 0..4 {
            let poly = DefaultSamplers::sample_uniform(&mut rng, n, q).unwrap();
            let mut coeffs = poly.coeffs().to_vec();
            ntt.forward(&mut coeffs).unwrap();
            ntt.inverse(&mut coeffs).unwrap();
            assert_eq!(coeffs, poly.coeffs(), "random roundtrip failed for n={}", n);
        }
    }
}

#[test]
fn test_polynomial_roundtrip() {
    let ntt = Ntt::new(32, 7681).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let original = DefaultSamplers::sample_uniform(&mut rng, 32, 7681).unwrap();
    let mut poly = original.clone();
    ntt.forward_polynomial(&mut poly).unwrap();
    assert_ne!(poly, original);
    ntt.inverse_polynomial(&mut poly).unwrap();
    assert_eq!(poly, original);
}

#[test]
fn test_polynomial_ring_checks() {
    let ntt = Ntt::new(8, 7681).unwrap();
    let mut wrong_dim = Polynomial::zero(16, 7681);
    assert!(matches!(
        ntt.forward_polynomial(&mut wrong_dim),
        Err(Error::Dimension { .. })
    ));
    let mut wrong_q = Polynomial::zero(8, 12289);
    assert!(matches!(
        ntt.forward_polynomial(&mut wrong_q),
        Err(Error::Modulus { .. })
    ));
}

#[test]
fn test_multiply_matches_schoolbook() {
    let mut rng = ChaCha20Rng::seed_from_u64(1234);
    for (n, q) in [(8, 7681), (32, 7681), (256, 7681)] {
        let ntt = Ntt::new(n, q).unwrap();
        for _ in 0..4 {
            let f = DefaultSamplers::sample_uniform(&mut rng, n, q).unwrap();
            let g = DefaultSamplers::sample_uniform(&mut rng, n, q).unwrap();
            let fast = ntt.multiply(&f, &g).unwrap();
            let slow = f.schoolbook_mul(&g).unwrap();
            assert_eq!(
                fast.coeffs(),
                slow.coeffs(),
                "NTT and schoolbook disagree for n={}, q={}",
                n,
                q
            );
        }
    }
}

#[test]
fn test_multiply_known_wraparound() {
    // (1 + x) * x^7 = x^7 + x^8 = -1 + x^7 in Z_q[x]/(x^8 + 1).
    let q = 7681;
    let ntt = Ntt::new(8, q).unwrap();
    let f = Polynomial::from_coeffs(vec![1, 1, 0, 0, 0, 0, 0, 0], q);
    let g = Polynomial::from_coeffs(vec![0, 0, 0, 0, 0, 0, 0, 1], q);
    let prod = ntt.multiply(&f, &g).unwrap();
    assert_eq!(prod.coeffs(), &[q - 1, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_context_reports_root() {
    let ntt = Ntt::new(8, 7681).unwrap();
    assert_eq!(ntt.size(), 8);
    assert_eq!(ntt.modulus(), 7681);
    assert_eq!(mul_mod(ntt.psi(), ntt.psi_inv(), 7681), 1);
    assert_eq!(pow_mod(ntt.psi(), 8, 7681), 7680);
}
