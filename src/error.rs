//! Error types for ribbon3d.

use thiserror::Error;

/// Errors produced when validating meshing inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A dash pattern entry was zero, negative, or not finite.
    #[error("dash pattern entries must be positive and finite, got {0}")]
    InvalidDashLength(f32),
}

/// Result type alias for ribbon3d operations.
pub type Result<T> = std::result::Result<T, Error>;
