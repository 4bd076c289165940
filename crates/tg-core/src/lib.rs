//! `tg-core` — foundational types for the transport-guide engine.
//!
//! This crate is a dependency of every other `tg-*` crate.  It intentionally
//! has no `tg-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `StopId`, `BusId`, `VertexId`, `EdgeId`, `RouteId`  |
//! | [`geo`]      | `GeoPoint`, great-circle distance, axis comparators |
//! | [`settings`] | `RoutingSettings`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required by `tg-persist`.                                 |

pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, RouteId, StopId, VertexId};
pub use settings::RoutingSettings;
