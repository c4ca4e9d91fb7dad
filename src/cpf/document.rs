use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::payload_check_digits;
use crate::core::{DocumentError, DocumentKind, normalize, verify};

/// A CPF number.
///
/// Holds the raw input alongside its normalized digits. Construction with
/// [`Cpf::new`] never fails; call [`Cpf::is_valid`] before relying on the
/// value, or use [`Cpf::parse`] to reject invalid input up front.
///
/// Equality, ordering and hashing use the normalized digits only, so
/// `"111.444.777-35"` and `"11144477735"` are the same CPF.
///
/// Serializes as the digit string.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Cpf {
    original: String,
    digits: String,
}

impl Cpf {
    /// Wrap `input`, keeping only its digits. Always succeeds.
    pub fn new(input: impl Into<String>) -> Self {
        let original = input.into();
        let digits = normalize(&original);
        Self { original, digits }
    }

    /// Wrap `input`, failing unless it is a valid CPF.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let cpf = Self::new(input);
        if let Err(err) = cpf.verify() {
            tracing::trace!(%err, "rejected CPF input");
            return Err(err);
        }
        Ok(cpf)
    }

    /// Shorthand for `Cpf::new(input).is_valid()`.
    pub fn validate(input: &str) -> bool {
        Self::new(input).is_valid()
    }

    /// The normalized digits, e.g. "11144477735".
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The input this value was built from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The digits as `XXX.XXX.XXX-XX`.
    ///
    /// Fails with [`DocumentError::InvalidLength`] when the value does not
    /// hold exactly 11 digits. A wrong checksum does not prevent formatting.
    pub fn formatted(&self) -> Result<String, DocumentError> {
        format_digits(&self.digits)
    }

    /// Whether the value is a valid CPF.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Like [`Cpf::is_valid`], but says why the value is invalid.
    pub fn verify(&self) -> Result<(), DocumentError> {
        verify(DocumentKind::Cpf, &self.digits, payload_check_digits)
    }

    /// Generate a random valid CPF using the thread-local RNG.
    #[cfg(feature = "generate")]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a random valid CPF from `rng`.
    #[cfg(feature = "generate")]
    pub fn generate_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let digits =
            crate::core::random::random_digits(rng, DocumentKind::Cpf, payload_check_digits);
        Self {
            original: digits.clone(),
            digits,
        }
    }
}

pub(super) fn format_digits(d: &str) -> Result<String, DocumentError> {
    if d.len() != DocumentKind::Cpf.digit_count() {
        return Err(DocumentError::length(DocumentKind::Cpf, d.len()));
    }
    Ok(format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]))
}

impl PartialEq for Cpf {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Cpf {}

impl Hash for Cpf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialOrd for Cpf {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cpf {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.digits.cmp(&other.digits)
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cpf({:?})", self.original)
    }
}

/// Formatted when the length allows it, bare digits otherwise.
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted() {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str(&self.digits),
        }
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for Cpf {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Cpf {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.digits
    }
}
