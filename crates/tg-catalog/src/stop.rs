//! Frozen stop record.

use tg_core::{BusId, GeoPoint};

/// A named stop with resolved coordinates.
///
/// During the build phase coordinates may be pending (forward references
/// create a stop by name only); by the time a `Stop` value exists the
/// position is guaranteed present.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name: String,
    pub position: GeoPoint,
    /// Buses serving this stop, sorted by bus name (dense `BusId` order).
    pub buses: Vec<BusId>,
}
