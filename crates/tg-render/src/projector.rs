//! Interference-aware coordinate compression.
//!
//! # Algorithm
//!
//! 1. Replace stop coordinates by *reference-aligned* coordinates: stops
//!    that anchor the drawing (route endpoints, stops traversed more than
//!    twice by one route, stops shared between routes) keep their position;
//!    every maximal run of other stops between two reference stops on a
//!    route is spread evenly along the straight line between them.
//! 2. Independently per axis, sweep the distinct aligned points in
//!    coordinate order and give each an integer bucket: one more than the
//!    highest bucket among earlier points that are *route-adjacent* to it,
//!    or zero if none are.  Non-adjacent stops may therefore collapse onto
//!    the same bucket, compressing long empty spans out of the canvas.
//! 3. A bucket maps linearly onto the padded canvas; the y axis is
//!    inverted so north is up.
//!
//! The catalog itself is never touched — alignment lives in a shadow table
//! owned by the projector.

use rustc_hash::{FxHashMap, FxHashSet};

use tg_catalog::Catalog;
use tg_core::{GeoPoint, StopId};

/// A projected point in SVG user units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Bit-exact map key for a geographic point (point equality is exact on
/// both fields).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct PointKey(u64, u64);

impl PointKey {
    fn of(p: GeoPoint) -> Self {
        Self(p.lon.to_bits(), p.lat.to_bits())
    }
}

/// Stops that anchor the map visually: route endpoints, stops a single
/// route passes more than twice, and stops served by several routes.
fn reference_flags(catalog: &Catalog) -> Vec<bool> {
    let mut is_ref = vec![false; catalog.stop_count()];

    for bus in &catalog.buses {
        let (first, far) = bus.endpoints();
        is_ref[first.index()] = true;
        if let Some(far) = far {
            is_ref[far.index()] = true;
        }

        let mut visits: FxHashMap<StopId, u32> = FxHashMap::default();
        for &stop in &bus.stops {
            *visits.entry(stop).or_insert(0) += 1;
        }
        for (stop, count) in visits {
            if count > 2 {
                is_ref[stop.index()] = true;
            }
        }
    }

    for (idx, stop) in catalog.stops.iter().enumerate() {
        if stop.buses.len() > 1 {
            is_ref[idx] = true;
        }
    }

    is_ref
}

/// Shadow coordinate table: reference stops keep their position, runs of
/// intermediate stops are interpolated between the enclosing references.
pub(crate) fn aligned_coordinates(catalog: &Catalog) -> Vec<GeoPoint> {
    let is_ref = reference_flags(catalog);
    let mut aligned: Vec<GeoPoint> = catalog.stops.iter().map(|s| s.position).collect();

    for bus in &catalog.buses {
        let anchors: Vec<usize> = (0..bus.stops.len())
            .filter(|&pos| is_ref[bus.stops[pos].index()])
            .collect();

        for pair in anchors.windows(2) {
            let (i, j) = (pair[0], pair[1]);
            if j <= i + 1 {
                continue;
            }
            let a = catalog.stop(bus.stops[i]).position;
            let b = catalog.stop(bus.stops[j]).position;
            for k in (i + 1)..j {
                let t = (k - i) as f64 / (j - i) as f64;
                aligned[bus.stops[k].index()] =
                    GeoPoint::new(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t);
            }
        }
    }

    aligned
}

/// Symmetric adjacency over aligned points: two points interfere iff some
/// bus visits them consecutively.
fn point_adjacency(
    catalog: &Catalog,
    aligned: &[GeoPoint],
) -> FxHashMap<PointKey, FxHashSet<PointKey>> {
    let mut adjacency: FxHashMap<PointKey, FxHashSet<PointKey>> = FxHashMap::default();
    for bus in &catalog.buses {
        for pair in bus.stops.windows(2) {
            let a = PointKey::of(aligned[pair[0].index()]);
            let b = PointKey::of(aligned[pair[1].index()]);
            adjacency.entry(a).or_default().insert(b);
            adjacency.entry(b).or_default().insert(a);
        }
    }
    adjacency
}

/// Sweep distinct points in `order` and assign interference buckets.
/// Returns the bucket map and the highest bucket assigned.
fn sweep(
    ordered: &[(PointKey, GeoPoint)],
    adjacency: &FxHashMap<PointKey, FxHashSet<PointKey>>,
) -> (FxHashMap<PointKey, u32>, u32) {
    let mut buckets: FxHashMap<PointKey, u32> = FxHashMap::default();
    let mut highest = 0u32;

    for (idx, (key, _)) in ordered.iter().enumerate() {
        let mut bucket = 0u32;
        if let Some(neighbours) = adjacency.get(key) {
            for (earlier, _) in &ordered[..idx] {
                if neighbours.contains(earlier) {
                    bucket = bucket.max(buckets.get(earlier).map_or(0, |b| b + 1));
                }
            }
        }
        buckets.insert(*key, bucket);
        highest = highest.max(bucket);
    }

    (buckets, highest)
}

/// Projects stops onto the padded canvas rectangle.
pub struct ScanlineProjector {
    aligned: Vec<GeoPoint>,
    x_bucket: FxHashMap<PointKey, u32>,
    y_bucket: FxHashMap<PointKey, u32>,
    x_step: f64,
    y_step: f64,
    height: f64,
    padding: f64,
}

impl ScanlineProjector {
    pub fn new(catalog: &Catalog, width: f64, height: f64, padding: f64) -> Self {
        let aligned = aligned_coordinates(catalog);
        let adjacency = point_adjacency(catalog, &aligned);

        let mut distinct: FxHashMap<PointKey, GeoPoint> = FxHashMap::default();
        for &point in &aligned {
            distinct.insert(PointKey::of(point), point);
        }
        let mut ordered: Vec<(PointKey, GeoPoint)> = distinct.into_iter().collect();

        ordered.sort_by(|a, b| a.1.cmp_lon_lat(&b.1));
        let (x_bucket, max_x) = sweep(&ordered, &adjacency);

        ordered.sort_by(|a, b| a.1.cmp_lat_lon(&b.1));
        let (y_bucket, max_y) = sweep(&ordered, &adjacency);

        let x_step = if max_x >= 1 { (width - 2.0 * padding) / max_x as f64 } else { 0.0 };
        let y_step = if max_y >= 1 { (height - 2.0 * padding) / max_y as f64 } else { 0.0 };

        Self { aligned, x_bucket, y_bucket, x_step, y_step, height, padding }
    }

    /// Canvas position of a stop.
    pub fn project(&self, stop: StopId) -> MapPoint {
        let key = PointKey::of(self.aligned[stop.index()]);
        let bx = self.x_bucket.get(&key).copied().unwrap_or(0) as f64;
        let by = self.y_bucket.get(&key).copied().unwrap_or(0) as f64;
        MapPoint {
            x: bx * self.x_step + self.padding,
            y: self.height - self.padding - by * self.y_step,
        }
    }
}
