//! Error types for the simulation core

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Recoverable simulation errors, reported to the caller instead of
/// poisoning the live state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Query given a body that is not part of the roster
    #[error("body not found in roster: {0:?}")]
    BodyNotFound(BodyId),

    /// Two bodies at zero separation during force computation. The inverse
    /// square law is undefined here; reporting it beats storing NaN.
    #[error("zero separation between bodies {0:?} and {1:?}")]
    DegenerateDistance(BodyId, BodyId),

    /// Non-positive mass, zero step size, and similar bad inputs
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
