use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::payload_check_digits;
use crate::core::{DocumentError, DocumentKind, normalize, verify};

/// A CNPJ number.
///
/// Same contract as [`crate::Cpf`]: lenient construction, deferred
/// failure on [`Cnpj::formatted`], and identity defined by the normalized
/// digits.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Cnpj {
    original: String,
    digits: String,
}

impl Cnpj {
    /// Wrap `input`, keeping only its digits. Always succeeds.
    pub fn new(input: impl Into<String>) -> Self {
        let original = input.into();
        let digits = normalize(&original);
        Self { original, digits }
    }

    /// Wrap `input`, failing unless it is a valid CNPJ.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let cnpj = Self::new(input);
        if let Err(err) = cnpj.verify() {
            tracing::trace!(%err, "rejected CNPJ input");
            return Err(err);
        }
        Ok(cnpj)
    }

    /// Shorthand for `Cnpj::new(input).is_valid()`.
    pub fn validate(input: &str) -> bool {
        Self::new(input).is_valid()
    }

    /// The normalized digits, e.g. "11222333000181".
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The input this value was built from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The digits as `XX.XXX.XXX/XXXX-XX`.
    ///
    /// Fails with [`DocumentError::InvalidLength`] unless the value holds
    /// exactly 14 digits.
    pub fn formatted(&self) -> Result<String, DocumentError> {
        format_digits(&self.digits)
    }

    /// Whether the value is a valid CNPJ.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Like [`Cnpj::is_valid`], but says why the value is invalid.
    pub fn verify(&self) -> Result<(), DocumentError> {
        verify(DocumentKind::Cnpj, &self.digits, payload_check_digits)
    }

    /// The 8-digit company root shared by all branches, if the length is right.
    pub fn root(&self) -> Option<&str> {
        self.has_length().then(|| &self.digits[..8])
    }

    /// The 4-digit branch number ("0001" for the head office), if the length is right.
    pub fn branch(&self) -> Option<&str> {
        self.has_length().then(|| &self.digits[8..12])
    }

    fn has_length(&self) -> bool {
        self.digits.len() == DocumentKind::Cnpj.digit_count()
    }

    /// Generate a random valid CNPJ using the thread-local RNG.
    #[cfg(feature = "generate")]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a random valid CNPJ from `rng`.
    #[cfg(feature = "generate")]
    pub fn generate_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let digits =
            crate::core::random::random_digits(rng, DocumentKind::Cnpj, payload_check_digits);
        Self {
            original: digits.clone(),
            digits,
        }
    }
}

pub(super) fn format_digits(d: &str) -> Result<String, DocumentError> {
    if d.len() != DocumentKind::Cnpj.digit_count() {
        return Err(DocumentError::length(DocumentKind::Cnpj, d.len()));
    }
    Ok(format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    ))
}

impl PartialEq for Cnpj {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Cnpj {}

impl Hash for Cnpj {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialOrd for Cnpj {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cnpj {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.cmp(&other.digits)
    }
}

impl fmt::Debug for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cnpj({:?})", self.original)
    }
}

/// Formatted when the length allows it, bare digits otherwise.
impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted() {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str(&self.digits),
        }
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for Cnpj {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Cnpj {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.digits
    }
}
