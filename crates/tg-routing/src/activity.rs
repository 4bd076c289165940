//! Edge-activity table entries and user-visible itinerary items.
//!
//! Every graph edge has exactly one activity, stored in a flat array
//! indexed by `EdgeId`: wait edges first (stop insertion order), then ride
//! edges (bus-name order, pair order).  Wait and ride are a closed sum —
//! every consumer matches exhaustively.

use tg_core::{BusId, StopId};

/// What travelling along one edge means to a passenger.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeActivity {
    /// Boarding delay at a stop.  The duration is the catalog-wide
    /// `bus_wait_time`, so only the stop is recorded.
    Wait { stop: StopId },
    /// Riding one bus across `span_count` consecutive canonical positions,
    /// starting at `start_position`.
    Ride { bus: BusId, time: f64, span_count: u32, start_position: u32 },
}

/// One element of a reconstructed itinerary.
///
/// A non-empty route strictly alternates `Wait`, `Ride`, `Wait`, `Ride`, …
/// It opens with the wait at the departure stop and ends on the ride that
/// arrives at the destination's waiting vertex, so waits and rides always
/// come in pairs.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteItem {
    Wait { stop: StopId, time: u32 },
    Ride { bus: BusId, time: f64, span_count: u32, start_position: u32 },
}
