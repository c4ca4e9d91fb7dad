//! Property-based tests for normalization, validation and formatting.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "cpf", feature = "cnpj"))]

use brdoc::{Cnpj, Cpf, cnpj, cpf, normalize};
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn to_digit_string(values: &[u8]) -> String {
    values.iter().map(|&d| char::from(b'0' + d)).collect()
}

fn is_repeated(s: &str) -> bool {
    s.bytes().all(|b| b == s.as_bytes()[0])
}

/// A valid CPF digit string built from a random payload.
fn arb_cpf() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, cpf::PAYLOAD_LEN)
        .prop_map(|mut payload| {
            let check = cpf::check_digits(&payload).unwrap();
            payload.extend(check);
            to_digit_string(&payload)
        })
        .prop_filter("repeated digits are never valid", |s| !is_repeated(s))
}

/// A valid CNPJ digit string built from a random payload.
fn arb_cnpj() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, cnpj::PAYLOAD_LEN)
        .prop_map(|mut payload| {
            let check = cnpj::check_digits(&payload).unwrap();
            payload.extend(check);
            to_digit_string(&payload)
        })
        .prop_filter("repeated digits are never valid", |s| !is_repeated(s))
}

/// Replace the digit at `idx` with a different one.
fn corrupt(digits: &str, idx: usize, delta: u8) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    bytes[idx] = b'0' + (bytes[idx] - b'0' + delta) % 10;
    String::from_utf8(bytes).unwrap()
}

/// Interleave noise after every digit.
fn decorate(digits: &str, noise: &[String]) -> String {
    digits
        .chars()
        .zip(noise.iter().cycle())
        .map(|(c, n)| format!("{c}{n}"))
        .collect()
}

// ── Normalization ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_keeps_only_ascii_digits(s in ".*") {
        prop_assert!(normalize(&s).bytes().all(|b| b.is_ascii_digit()));
    }
}

// ── CPF ─────────────────────────────────────────────────────────────────────

proptest! {
    /// Formatting and stripping do not change validity.
    #[test]
    fn cpf_format_roundtrip(digits in arb_cpf()) {
        let formatted = cpf::format(&digits).unwrap();
        prop_assert!(cpf::is_valid(&formatted));
        prop_assert!(cpf::is_valid(&digits));
        prop_assert_eq!(normalize(&formatted), digits);
    }

    #[test]
    fn cpf_corrupted_check_digit_is_invalid(
        digits in arb_cpf(),
        idx in 9usize..11,
        delta in 1u8..10,
    ) {
        let corrupted = corrupt(&digits, idx, delta);
        prop_assert!(!cpf::is_valid(&corrupted));
        prop_assert!(Cpf::parse(&corrupted).is_err());
    }

    #[test]
    fn cpf_noise_is_ignored(
        digits in arb_cpf(),
        noise in prop::collection::vec("[ .\\-/a-zA-Z]{0,2}", 1..4),
    ) {
        let noisy = decorate(&digits, &noise);
        prop_assert!(cpf::is_valid(&noisy));
        prop_assert_eq!(Cpf::new(noisy), Cpf::new(digits));
    }

    #[test]
    fn cpf_format_rejects_other_lengths(digits in "[0-9]{0,20}") {
        let result = cpf::format(&digits);
        if digits.len() == 11 {
            let out = result.unwrap();
            prop_assert_eq!(out.len(), 14);
            prop_assert_eq!(normalize(&out), digits);
        } else {
            prop_assert!(result.is_err());
        }
    }
}

// ── CNPJ ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cnpj_format_roundtrip(digits in arb_cnpj()) {
        let formatted = cnpj::format(&digits).unwrap();
        prop_assert!(cnpj::is_valid(&formatted));
        prop_assert!(cnpj::is_valid(&digits));
        prop_assert_eq!(normalize(&formatted), digits);
    }

    #[test]
    fn cnpj_corrupted_check_digit_is_invalid(
        digits in arb_cnpj(),
        idx in 12usize..14,
        delta in 1u8..10,
    ) {
        prop_assert!(!cnpj::is_valid(&corrupt(&digits, idx, delta)));
    }

    #[test]
    fn cnpj_format_rejects_other_lengths(digits in "[0-9]{0,20}") {
        let result = cnpj::format(&digits);
        if digits.len() == 14 {
            prop_assert_eq!(result.unwrap().len(), 18);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn cnpj_display_never_loses_digits(s in ".{0,30}") {
        let cnpj = Cnpj::new(s.as_str());
        prop_assert_eq!(normalize(&cnpj.to_string()), cnpj.digits());
    }
}

// ── Generation ──────────────────────────────────────────────────────────────

#[cfg(feature = "generate")]
proptest! {
    #[test]
    fn seeded_generation_is_reproducible(seed in any::<u64>()) {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let a = cpf::generate_with(&mut StdRng::seed_from_u64(seed));
        let b = cpf::generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(&a, &b);
        prop_assert!(a.is_valid());

        let c = cnpj::generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(c.is_valid());
    }
}
