//! Incremental catalog construction, then freeze.
//!
//! The builder accepts `add_stop` / `add_bus` in any order.  A stop named by
//! a bus or by another stop's distance list before its own declaration is
//! created as a pending entry; its coordinates arrive later.  `finish()`
//! validates everything and produces the immutable [`Catalog`].

use rustc_hash::{FxHashMap, FxHashSet};

use tg_core::{BusId, GeoPoint, StopId};

use crate::bus::{Bus, BusStats};
use crate::catalog::Catalog;
use crate::distance::DistanceTable;
use crate::error::{CatalogError, CatalogResult};
use crate::stop::Stop;

struct PendingStop {
    name: String,
    position: Option<GeoPoint>,
}

struct PendingBus {
    name: String,
    round_trip: bool,
    /// Already canonicalised (doubled for non-round trips).
    stops: Vec<StopId>,
}

/// Construct a [`Catalog`] incrementally, then call [`finish`](Self::finish).
pub struct CatalogBuilder {
    stops: Vec<PendingStop>,
    stop_index: FxHashMap<String, StopId>,
    buses: Vec<PendingBus>,
    bus_names: FxHashSet<String>,
    distances: DistanceTable,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            stop_index: FxHashMap::default(),
            buses: Vec::new(),
            bus_names: FxHashSet::default(),
            distances: DistanceTable::new(),
        }
    }

    /// Look up a stop by name, creating a pending (coordinate-less) entry on
    /// first sight.  Stop ids follow first-mention order.
    fn intern_stop(&mut self, name: &str) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            return id;
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(PendingStop { name: name.to_owned(), position: None });
        self.stop_index.insert(name.to_owned(), id);
        id
    }

    /// Declare a stop with coordinates and its outgoing road distances.
    ///
    /// Redeclaring a stop that already has coordinates is an error; merely
    /// mentioning it earlier (forward reference) is not.
    pub fn add_stop(
        &mut self,
        name: &str,
        lat: f64,
        lon: f64,
        distances: &[(String, u32)],
    ) -> CatalogResult<()> {
        let position = GeoPoint::new(lat, lon);
        if !position.is_valid() {
            return Err(CatalogError::InvalidCoordinate { stop: name.to_owned(), lat, lon });
        }

        let id = self.intern_stop(name);
        let pending = &mut self.stops[id.index()];
        if pending.position.is_some() {
            return Err(CatalogError::DuplicateStop(name.to_owned()));
        }
        pending.position = Some(position);

        for (other, metres) in distances {
            let other_id = self.intern_stop(other);
            self.distances.insert_declared(id, other_id, *metres);
        }
        Ok(())
    }

    /// Declare a bus route over the given stop names.
    ///
    /// `round_trip` routes must close back on their first stop and are kept
    /// as declared; other routes are doubled into the canonical out-and-back
    /// sequence.
    pub fn add_bus(&mut self, name: &str, stops: &[String], round_trip: bool) -> CatalogResult<()> {
        if !self.bus_names.insert(name.to_owned()) {
            return Err(CatalogError::DuplicateBus(name.to_owned()));
        }
        let Some((first, rest)) = stops.split_first() else {
            return Err(CatalogError::EmptyBus(name.to_owned()));
        };
        if round_trip && rest.last().is_some_and(|last| last != first) {
            return Err(CatalogError::UnclosedRoundTrip(name.to_owned()));
        }

        let declared: Vec<StopId> = stops.iter().map(|s| self.intern_stop(s)).collect();
        let canonical = if round_trip {
            declared
        } else {
            let mut doubled = declared.clone();
            doubled.extend(declared.iter().rev().skip(1));
            doubled
        };

        self.buses.push(PendingBus { name: name.to_owned(), round_trip, stops: canonical });
        Ok(())
    }

    /// Validate the accumulated input and freeze it into a [`Catalog`].
    pub fn finish(self) -> CatalogResult<Catalog> {
        let CatalogBuilder { stops: pending_stops, stop_index, mut buses, distances, .. } = self;

        // Every stop mentioned anywhere must have been declared by now.
        let mut stops: Vec<Stop> = Vec::with_capacity(pending_stops.len());
        for pending in pending_stops {
            let position = pending
                .position
                .ok_or_else(|| CatalogError::MissingCoordinates(pending.name.clone()))?;
            stops.push(Stop { name: pending.name, position, buses: Vec::new() });
        }

        // Dense bus ids follow route-name order.
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let mut frozen_buses: Vec<Bus> = Vec::with_capacity(buses.len());
        let mut bus_index: FxHashMap<String, BusId> = FxHashMap::default();

        for (bus_pos, pending) in buses.into_iter().enumerate() {
            let bus_id = BusId(bus_pos as u32);

            let mut route_length = 0u32;
            let mut direct_length = 0.0f64;
            for pair in pending.stops.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let road = distances.get(from, to).ok_or_else(|| CatalogError::MissingDistance {
                    from: stops[from.index()].name.clone(),
                    to: stops[to.index()].name.clone(),
                })?;
                route_length += road;
                direct_length +=
                    stops[from.index()].position.distance_m(stops[to.index()].position);
            }
            let curvature =
                if direct_length > 0.0 { route_length as f64 / direct_length } else { 1.0 };

            let mut unique: FxHashSet<StopId> = FxHashSet::default();
            for &stop in &pending.stops {
                if unique.insert(stop) {
                    stops[stop.index()].buses.push(bus_id);
                }
            }

            let stats = BusStats {
                route_length,
                direct_length,
                curvature,
                stop_count: pending.stops.len() as u32,
                unique_stop_count: unique.len() as u32,
            };

            bus_index.insert(pending.name.clone(), bus_id);
            frozen_buses.push(Bus {
                name: pending.name,
                round_trip: pending.round_trip,
                stops: pending.stops,
                stats,
            });
        }

        log::info!(
            "catalog frozen: {} stops, {} buses, {} road distances",
            stops.len(),
            frozen_buses.len(),
            distances.len()
        );

        Ok(Catalog { stops, stop_index, buses: frozen_buses, bus_index, distances })
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
