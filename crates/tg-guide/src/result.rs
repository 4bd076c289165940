//! Typed query results.
//!
//! On "not found" only `request_id` and `error_message` are meaningful; the
//! remaining fields stay at their typed defaults.  Serializing these records
//! into a response stream is the external responder's concern.

/// Answer to a stop query: which buses serve the stop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StopInfo {
    pub request_id: i64,
    /// Bus names in lexicographic order.
    pub buses: Vec<String>,
    pub error_message: Option<String>,
}

/// Answer to a bus query: the stored route statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusInfo {
    pub request_id: i64,
    pub route_length: u32,
    pub curvature: f64,
    pub stop_count: u32,
    pub unique_stop_count: u32,
    pub error_message: Option<String>,
}

/// One leg of a reconstructed route, with names resolved for output.
#[derive(Clone, Debug, PartialEq)]
pub enum ItineraryItem {
    Wait { stop_name: String, time: u32 },
    Ride { bus: String, time: f64, span_count: u32 },
}

/// Answer to a route query: the fastest itinerary and its route map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteInfo {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
    /// Route-annotated map document.
    pub map: String,
    pub error_message: Option<String>,
}

/// Answer to a map query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapInfo {
    pub request_id: i64,
    pub map: String,
}

pub(crate) const NOT_FOUND: &str = "not found";

impl StopInfo {
    pub(crate) fn not_found(request_id: i64) -> Self {
        Self { request_id, error_message: Some(NOT_FOUND.to_owned()), ..Self::default() }
    }
}

impl BusInfo {
    pub(crate) fn not_found(request_id: i64) -> Self {
        Self { request_id, error_message: Some(NOT_FOUND.to_owned()), ..Self::default() }
    }
}

impl RouteInfo {
    pub(crate) fn not_found(request_id: i64) -> Self {
        Self { request_id, error_message: Some(NOT_FOUND.to_owned()), ..Self::default() }
    }
}
