//! Shared building blocks: input normalization, the mod-11 check digit,
//! and the error types used by both document modules.

mod checksum;
mod error;
mod normalize;
#[cfg(feature = "generate")]
pub(crate) mod random;

pub use checksum::*;
pub use error::*;
pub use normalize::*;
