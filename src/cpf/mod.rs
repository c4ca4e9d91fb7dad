//! CPF (Cadastro de Pessoas Físicas): the 11-digit individual taxpayer number.
//!
//! Nine payload digits are followed by two check digits. The first check
//! digit weights the payload 10 down to 2; the second weights the payload
//! plus the first check digit 11 down to 2.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cpf;
//!
//! assert!(cpf::is_valid("111.444.777-35"));
//! assert!(!cpf::is_valid("111.111.111-11"));
//! assert_eq!(cpf::format("11144477735").unwrap(), "111.444.777-35");
//! assert_eq!(cpf::check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), Ok([3, 5]));
//! ```

mod document;

pub use crate::core::normalize;
pub use document::Cpf;

use crate::core::{DocumentError, DocumentKind, check_digit, check_payload};

/// Number of payload digits before the check digits.
pub const PAYLOAD_LEN: usize = 9;

/// Weights for the first check digit (10 down to 2).
pub const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (payload plus first check digit, 11 down to 2).
pub const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute both check digits for a 9-digit payload given as values 0-9.
///
/// Fails with [`DocumentError::InvalidLength`] (counting payload digits)
/// when `payload` is not [`PAYLOAD_LEN`] long, and with
/// [`DocumentError::InvalidDocument`] when a value is above 9.
pub fn check_digits(payload: &[u8]) -> Result<[u8; 2], DocumentError> {
    check_payload(DocumentKind::Cpf, payload, PAYLOAD_LEN)?;
    Ok(payload_check_digits(payload))
}

/// Check digits for a payload already known to hold 9 values in 0-9.
fn payload_check_digits(payload: &[u8]) -> [u8; 2] {
    let first = check_digit(payload, &FIRST_WEIGHTS);
    let mut extended = [0u8; PAYLOAD_LEN + 1];
    extended[..PAYLOAD_LEN].copy_from_slice(payload);
    extended[PAYLOAD_LEN] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

/// Whether `input` normalizes to a valid CPF.
pub fn is_valid(input: &str) -> bool {
    Cpf::validate(input)
}

/// Format `input` as `XXX.XXX.XXX-XX`.
///
/// Fails with [`DocumentError::InvalidLength`] unless the input normalizes
/// to exactly 11 digits. Check digits are not verified.
pub fn format(input: &str) -> Result<String, DocumentError> {
    document::format_digits(&normalize(input))
}

/// Generate a random valid CPF using the thread-local RNG.
#[cfg(feature = "generate")]
pub fn generate() -> Cpf {
    Cpf::generate()
}

/// Generate a random valid CPF from the given RNG.
#[cfg(feature = "generate")]
pub fn generate_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Cpf {
    Cpf::generate_with(rng)
}

/// Generate a random valid CPF, already formatted.
#[cfg(feature = "generate")]
pub fn generate_formatted() -> String {
    Cpf::generate().to_string()
}
