//! Error types used by the crate.

use symbology_types::error::SymbologyTypesError;
use thiserror::Error;

/// Symbology error type.
#[derive(Debug, Error)]
pub enum SymbologyError {
    /// A required argument is missing or does not hold a usable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Symbol description could not be read or written.
    #[error("invalid symbol description: {0}")]
    Config(String),
}

impl From<SymbologyTypesError> for SymbologyError {
    fn from(value: SymbologyTypesError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for SymbologyError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
