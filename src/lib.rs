//! # brdoc
//!
//! Validation, formatting, and generation of Brazilian tax identifiers:
//! the 11-digit CPF (individuals) and the 14-digit CNPJ (legal entities).
//!
//! Both documents end in two mod-11 check digits. Input is normalized by
//! dropping every non-digit character, so `"111.444.777-35"` and
//! `"11144477735"` describe the same CPF.
//!
//! ## Quick Start
//!
//! ```rust
//! use brdoc::{Cnpj, Cpf};
//!
//! let cpf = Cpf::new("111.444.777-35");
//! assert!(cpf.is_valid());
//! assert_eq!(cpf.digits(), "11144477735");
//! assert_eq!(cpf.formatted().unwrap(), "111.444.777-35");
//!
//! assert!(brdoc::cnpj::is_valid("11.222.333/0001-81"));
//! assert_eq!(brdoc::cnpj::format("11222333000181").unwrap(), "11.222.333/0001-81");
//!
//! // Construction never fails; validity is checked afterwards.
//! let typo = Cpf::new("111.444.777-36");
//! assert!(!typo.is_valid());
//!
//! // The strict path rejects it up front.
//! assert!("11.222.333/0001-82".parse::<Cnpj>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cpf` | CPF type, validation, formatting |
//! | `cnpj` | CNPJ type, validation, formatting |
//! | `generate` | Random valid document generation (pulls in `rand`) |
//! | `all` (default) | Everything |

pub mod core;

#[cfg(feature = "cpf")]
pub mod cpf;

#[cfg(feature = "cnpj")]
pub mod cnpj;

pub use crate::core::{DocumentError, DocumentKind, Invalidity, normalize};

#[cfg(feature = "cpf")]
pub use crate::cpf::Cpf;

#[cfg(feature = "cnpj")]
pub use crate::cnpj::Cnpj;
