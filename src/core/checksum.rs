use super::error::{DocumentError, DocumentKind, Invalidity};
use super::normalize::{digit_values, is_repeated};

/// Compute one mod-11 check digit.
///
/// Multiplies each digit by the weight at the same position, sums, and
/// reduces modulo 11. Remainders 0 and 1 map to check digit 0; any other
/// remainder `r` maps to `11 - r`.
///
/// `digits` and `weights` must have the same length.
///
/// ```
/// use brdoc::core::check_digit;
///
/// // First CPF check digit of 111.444.777-35
/// let payload = [1, 1, 1, 4, 4, 4, 7, 7, 7];
/// assert_eq!(check_digit(&payload, &[10, 9, 8, 7, 6, 5, 4, 3, 2]), 3);
/// ```
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

/// Check that `payload` holds exactly `expected` values, each in 0-9.
///
/// A wrong length reports [`DocumentError::InvalidLength`] counting payload
/// digits only, without the two check digits.
pub(crate) fn check_payload(
    kind: DocumentKind,
    payload: &[u8],
    expected: usize,
) -> Result<(), DocumentError> {
    if payload.len() != expected {
        return Err(DocumentError::InvalidLength {
            kind,
            expected,
            found: payload.len(),
        });
    }
    if let Some((position, &value)) = payload.iter().enumerate().find(|&(_, &d)| d > 9) {
        return Err(DocumentError::InvalidDocument {
            kind,
            reason: Invalidity::NotADigit { position, value },
        });
    }
    Ok(())
}

/// Check a normalized digit string against its expected length and check digits.
///
/// `check_digits` receives the payload (everything but the last two digits)
/// and returns the two digits the document should end with.
pub(crate) fn verify(
    kind: DocumentKind,
    digits: &str,
    check_digits: fn(&[u8]) -> [u8; 2],
) -> Result<(), DocumentError> {
    let len = kind.digit_count();
    if digits.len() != len {
        return Err(DocumentError::length(kind, digits.len()));
    }
    if is_repeated(digits) {
        return Err(DocumentError::InvalidDocument {
            kind,
            reason: Invalidity::RepeatedDigits,
        });
    }

    let values = digit_values(digits);
    let expected = check_digits(&values[..len - 2]);
    let found = [values[len - 2], values[len - 1]];
    if expected != found {
        return Err(DocumentError::InvalidDocument {
            kind,
            reason: Invalidity::CheckDigitMismatch { expected, found },
        });
    }
    Ok(())
}
