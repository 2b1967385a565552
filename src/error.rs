//! Error types for setlist.
//!
//! Expected failures (unknown ids, out-of-range indices, out-of-domain ratings)
//! are reported as `false`/`None` by the engines. This enum covers programmer
//! and configuration errors only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A rating tree was constructed with an empty or inverted key domain.
    #[error("invalid key domain: {min}..={max}")]
    InvalidKeyDomain { min: u8, max: u8 },

    /// A rating value outside `1..=5`.
    #[error("invalid rating: {0} (expected 1..=5)")]
    InvalidRating(u8),

    /// Settings loaded but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Settings could not be loaded or deserialized.
    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
