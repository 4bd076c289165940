//! Typed command records, as produced by the external request parser.

/// A build-mode command.  Applied in stream order; stops and buses may
/// reference each other forward.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseCommand {
    AddStop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Declared road distances to other stops, metres.
        distances: Vec<(String, u32)>,
    },
    AddBus {
        name: String,
        stops: Vec<String>,
        round_trip: bool,
    },
}

/// A query-mode request.  `request_id` is echoed verbatim into the result.
#[derive(Clone, Debug, PartialEq)]
pub enum StatRequest {
    Stop { name: String, request_id: i64 },
    Bus { name: String, request_id: i64 },
    Route { from: String, to: String, request_id: i64 },
    Map { request_id: i64 },
}
