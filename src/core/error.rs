use std::fmt;

use thiserror::Error;

/// Which Brazilian document a value or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in the normalized form, check digits included.
    pub const fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => f.write_str("CPF"),
            DocumentKind::Cnpj => f.write_str("CNPJ"),
        }
    }
}

/// Why a correctly sized document was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidity {
    /// Every digit is the same, e.g. "00000000000".
    RepeatedDigits,
    /// The trailing two digits differ from the recomputed ones.
    CheckDigitMismatch {
        /// Check digits computed from the payload.
        expected: [u8; 2],
        /// Check digits present in the input.
        found: [u8; 2],
    },
    /// A payload value passed to `check_digits` is above 9.
    NotADigit {
        /// Zero-based index of the value in the payload.
        position: usize,
        /// The offending value.
        value: u8,
    },
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalidity::RepeatedDigits => f.write_str("all digits are identical"),
            Invalidity::CheckDigitMismatch { expected, found } => write!(
                f,
                "check digits {}{} do not match expected {}{}",
                found[0], found[1], expected[0], expected[1]
            ),
            Invalidity::NotADigit { position, value } => {
                write!(f, "payload value {value} at position {position} is not a digit")
            }
        }
    }
}

/// Errors returned by the strict constructors and the formatters.
///
/// Validity checks (`is_valid`) never produce these; they answer `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The normalized input does not have the required number of digits.
    #[error("{kind} must have {expected} digits, got {found}")]
    InvalidLength {
        kind: DocumentKind,
        expected: usize,
        found: usize,
    },

    /// The input has the right length but is not a valid document.
    #[error("invalid {kind}: {reason}")]
    InvalidDocument {
        kind: DocumentKind,
        reason: Invalidity,
    },
}

impl DocumentError {
    /// Build an [`DocumentError::InvalidLength`] for `kind` with `found` digits.
    pub(crate) fn length(kind: DocumentKind, found: usize) -> Self {
        DocumentError::InvalidLength {
            kind,
            expected: kind.digit_count(),
            found,
        }
    }

    /// The document type the error refers to.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentError::InvalidLength { kind, .. }
            | DocumentError::InvalidDocument { kind, .. } => *kind,
        }
    }
}
