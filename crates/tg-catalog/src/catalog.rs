//! The immutable post-build catalog.

use rustc_hash::FxHashMap;

use tg_core::{BusId, StopId};

use crate::bus::Bus;
use crate::distance::DistanceTable;
use crate::stop::Stop;

/// Frozen view of the whole transport network.
///
/// All fields are `pub` for direct indexed access; nothing here mutates
/// after [`CatalogBuilder::finish`](crate::CatalogBuilder::finish).  The
/// router, renderer, and query façade all borrow a single `Catalog` value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Stops in first-mention order.  Indexed by `StopId`.
    pub stops: Vec<Stop>,
    pub stop_index: FxHashMap<String, StopId>,
    /// Buses in route-name order.  Indexed by `BusId`.
    pub buses: Vec<Bus>,
    pub bus_index: FxHashMap<String, BusId>,
    pub distances: DistanceTable,
}

impl Catalog {
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Road distance between two stops, if declared in either direction.
    #[inline]
    pub fn distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.get(from, to)
    }

    /// Stop ids sorted by stop name — the order map layers and per-stop
    /// output listings use.
    pub fn stops_by_name(&self) -> Vec<StopId> {
        let mut ids: Vec<StopId> = (0..self.stops.len() as u32).map(StopId).collect();
        ids.sort_by(|a, b| self.stops[a.index()].name.cmp(&self.stops[b.index()].name));
        ids
    }
}
