//! Catalog-build error type.

use thiserror::Error;

/// Errors produced while assembling or freezing a catalog.
///
/// All of these are fatal build-input defects: the caller gets no catalog.
/// Unknown names in *queries* are not errors — the query façade reports
/// those as "not found" results.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("stop {0:?} declared twice")]
    DuplicateStop(String),

    #[error("bus {0:?} declared twice")]
    DuplicateBus(String),

    #[error("stop {stop:?} has non-finite or out-of-range coordinates ({lat}, {lon})")]
    InvalidCoordinate { stop: String, lat: f64, lon: f64 },

    #[error("stop {0:?} is referenced but never declared with coordinates")]
    MissingCoordinates(String),

    #[error("bus {0:?} has no stops")]
    EmptyBus(String),

    #[error("round-trip bus {0:?} does not end at its first stop")]
    UnclosedRoundTrip(String),

    #[error("no road distance between consecutive stops {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },
}

/// Shorthand result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;
