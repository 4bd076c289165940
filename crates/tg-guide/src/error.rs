//! Façade error type.
//!
//! Wraps the subsystem errors so callers deal with a single failure enum.
//! Unknown names in queries are *not* errors — they surface as "not found"
//! result records.

use thiserror::Error;

use tg_catalog::CatalogError;
use tg_persist::PersistError;
use tg_routing::RoutingError;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub type GuideResult<T> = Result<T, GuideError>;
