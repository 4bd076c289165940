//! Routing parameters shared by the graph builder, the persisted catalog,
//! and the query façade.

/// How long boarding takes and how fast buses drive.
///
/// `bus_wait_time` is whole minutes; `bus_velocity` is km/h.  Both are fixed
/// per catalog: every wait edge weighs `bus_wait_time` and every ride edge
/// divides road metres by `bus_velocity · 1000 / 60`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Passenger wait time at any stop, in minutes.
    pub bus_wait_time: u32,
    /// Bus cruise speed in km/h.  Must be positive before a graph is built.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Speed expressed in metres per minute — the unit ride-edge weights
    /// are computed in.
    #[inline]
    pub fn metres_per_minute(self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }
}
