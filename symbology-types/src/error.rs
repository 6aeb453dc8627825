//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum SymbologyTypesError {
    /// The coordinates do not describe a location on the globe.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
