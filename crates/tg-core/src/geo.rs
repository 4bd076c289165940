//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` stores degrees in `f64`.  Distances use the spherical law of
//! cosines on a 6,371 km sphere, which is what the rest of the engine (bus
//! curvature, ride-edge weights) is calibrated against.

use std::cmp::Ordering;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Mean Earth radius in metres.
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both fields are finite and within the usual degree ranges.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance in metres (spherical law of cosines).
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat_a = self.lat.to_radians();
        let lat_b = other.lat.to_radians();
        let lon_delta = (self.lon - other.lon).abs().to_radians();

        let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * lon_delta.cos();
        Self::EARTH_RADIUS_M * cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Total order by longitude, then latitude.  Used only as a map key by
    /// the scanline projector's x-axis sweep.
    #[inline]
    pub fn cmp_lon_lat(&self, other: &GeoPoint) -> Ordering {
        self.lon
            .total_cmp(&other.lon)
            .then(self.lat.total_cmp(&other.lat))
    }

    /// Total order by latitude, then longitude — the y-axis counterpart of
    /// [`cmp_lon_lat`](Self::cmp_lon_lat).
    #[inline]
    pub fn cmp_lat_lon(&self, other: &GeoPoint) -> Ordering {
        self.lat
            .total_cmp(&other.lat)
            .then(self.lon.total_cmp(&other.lon))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
