//! Routing-subsystem error type.

use thiserror::Error;

/// Errors produced while building the time graph.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("bus velocity must be positive, got {0} km/h")]
    InvalidVelocity(f64),

    #[error("no road distance between consecutive stops {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
