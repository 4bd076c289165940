//! `tg-persist` — the binary catalog artifact.
//!
//! A built guide is frozen into a [`GuideSnapshot`] — catalog, routing
//! settings, edge-activity table, and the all-pairs route cache — and
//! written as one bincode file.  Query mode restores the snapshot and
//! answers everything from it; the original command stream is not needed
//! again.
//!
//! Render settings are deliberately *not* part of the artifact: they are
//! presentation input supplied afresh by the querying process.

pub mod error;
pub mod snapshot;


pub use error::{PersistError, PersistResult};
pub use snapshot::GuideSnapshot;
