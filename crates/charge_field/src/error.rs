//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Field
//! evaluation and sampling never fail; errors only come from the configuration surface, the
//! charge store, and preset lookup.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid charge: {0}")]
    InvalidCharge(String),

    #[error("charge index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },
}
