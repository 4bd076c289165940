//! Frozen bus-route record and its derived statistics.
//!
//! # Canonical sequence
//!
//! A round trip is stored exactly as declared (the input must close back on
//! its first stop).  A non-round trip `[s₀ … s_{n−1}]` is stored doubled,
//! `[s₀ … s_{n−1}, s_{n−2} … s₀]`, so that every consumer — statistics,
//! ride-edge emission, map polylines — walks one flat list and never
//! special-cases the return leg.

use tg_core::StopId;

/// Derived route statistics, immutable after build.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusStats {
    /// Sum of road distances over consecutive canonical stops, metres.
    pub route_length: u32,
    /// Sum of great-circle distances over the same pairs, metres.
    pub direct_length: f64,
    /// `route_length / direct_length`; 1.0 for degenerate geometry.
    pub curvature: f64,
    /// Length of the canonical sequence.
    pub stop_count: u32,
    /// Distinct stops in the canonical sequence.
    pub unique_stop_count: u32,
}

/// A bus route over the canonical stop sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub name: String,
    pub round_trip: bool,
    /// The canonical stop sequence (see module docs).
    pub stops: Vec<StopId>,
    pub stats: BusStats,
}

impl Bus {
    /// The route's terminal stop(s): the first canonical stop, plus — for
    /// non-round trips whose far end differs from the start — the middle of
    /// the canonical sequence (the declared last stop).
    pub fn endpoints(&self) -> (StopId, Option<StopId>) {
        let first = self.stops[0];
        if self.round_trip {
            return (first, None);
        }
        let far = self.stops[self.stops.len() / 2];
        (first, (far != first).then_some(far))
    }

    /// `true` if `stop` is one of the route's terminals.
    pub fn is_endpoint(&self, stop: StopId) -> bool {
        let (first, far) = self.endpoints();
        stop == first || far == Some(stop)
    }

    /// `true` if the canonical sequence visits `stop` at least once.
    pub fn contains_stop(&self, stop: StopId) -> bool {
        self.stops.contains(&stop)
    }
}
