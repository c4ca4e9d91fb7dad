//! CNPJ (Cadastro Nacional da Pessoa Jurídica): the 14-digit company number.
//!
//! Twelve payload digits (eight for the company root, four for the branch)
//! are followed by two check digits computed with the fixed weight tables
//! published by the Receita Federal.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cnpj;
//!
//! assert!(cnpj::is_valid("11.222.333/0001-81"));
//! assert!(!cnpj::is_valid("11.222.333/0001-82"));
//! assert_eq!(cnpj::format("11222333000181").unwrap(), "11.222.333/0001-81");
//! ```

mod document;

pub use crate::core::normalize;
pub use document::Cnpj;

use crate::core::{DocumentError, DocumentKind, check_digit, check_payload};

/// Number of payload digits before the check digits.
pub const PAYLOAD_LEN: usize = 12;

/// Weights for the first check digit.
pub const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (payload plus first check digit).
pub const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute both check digits for a 12-digit payload given as values 0-9.
///
/// Fails with [`DocumentError::InvalidLength`] (counting payload digits)
/// when `payload` is not [`PAYLOAD_LEN`] long, and with
/// [`DocumentError::InvalidDocument`] when a value is above 9.
pub fn check_digits(payload: &[u8]) -> Result<[u8; 2], DocumentError> {
    check_payload(DocumentKind::Cnpj, payload, PAYLOAD_LEN)?;
    Ok(payload_check_digits(payload))
}

/// Check digits for a payload already known to hold 12 values in 0-9.
fn payload_check_digits(payload: &[u8]) -> [u8; 2] {
    let first = check_digit(payload, &FIRST_WEIGHTS);
    let mut extended = [0u8; PAYLOAD_LEN + 1];
    extended[..PAYLOAD_LEN].copy_from_slice(payload);
    extended[PAYLOAD_LEN] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

/// Whether `input` normalizes to a valid CNPJ.
pub fn is_valid(input: &str) -> bool {
    Cnpj::validate(input)
}

/// Format `input` as `XX.XXX.XXX/XXXX-XX`.
///
/// Fails with [`DocumentError::InvalidLength`] unless the input normalizes
/// to exactly 14 digits. Check digits are not verified.
pub fn format(input: &str) -> Result<String, DocumentError> {
    document::format_digits(&normalize(input))
}

/// Generate a random valid CNPJ using the thread-local RNG.
#[cfg(feature = "generate")]
pub fn generate() -> Cnpj {
    Cnpj::generate()
}

/// Generate a random valid CNPJ from the given RNG.
#[cfg(feature = "generate")]
pub fn generate_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Cnpj {
    Cnpj::generate_with(rng)
}

/// Generate a random valid CNPJ, already formatted.
#[cfg(feature = "generate")]
pub fn generate_formatted() -> String {
    Cnpj::generate().to_string()
}
