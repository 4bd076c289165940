//! The time-weighted transit multigraph.
//!
//! # Data layout
//!
//! Edges live in a flat `Vec<TimeEdge>` indexed by `EdgeId` in *allocation*
//! order — the same order the edge-activity table uses, so the two stay in
//! lock-step.  Adjacency is a CSR built over a permutation array
//! (`out_edges[out_start[v] .. out_start[v+1]]` lists the `EdgeId`s leaving
//! vertex `v`), which keeps Dijkstra's inner loop a contiguous scan without
//! renumbering edges.

use tg_catalog::Catalog;
use tg_core::{BusId, EdgeId, RoutingSettings, StopId, VertexId};

use crate::activity::EdgeActivity;
use crate::error::{RoutingError, RoutingResult};

/// A directed edge weighted in minutes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Wait/ride multigraph over `2 · |stops|` vertices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGraph {
    vertex_count: usize,
    /// Indexed by `EdgeId`, allocation order.
    edges: Vec<TimeEdge>,
    /// CSR row pointer over `out_edges`.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,
    /// Edge ids grouped by source vertex, allocation order within a group.
    out_edges: Vec<EdgeId>,
}

impl TimeGraph {
    /// The "waiting at stop" vertex.
    #[inline]
    pub fn in_vertex(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2)
    }

    /// The "boarded at stop" vertex.
    #[inline]
    pub fn out_vertex(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2 + 1)
    }

    /// Build the graph and its activity table from a frozen catalog.
    ///
    /// Emits one wait edge per stop (insertion order), then for each bus in
    /// name order one ride edge per canonical position pair `i < j` with the
    /// cumulative road time as weight.  The returned activity vector is
    /// indexed by `EdgeId`.
    pub fn build(
        catalog: &Catalog,
        settings: RoutingSettings,
    ) -> RoutingResult<(TimeGraph, Vec<EdgeActivity>)> {
        if settings.bus_velocity <= 0.0 {
            return Err(RoutingError::InvalidVelocity(settings.bus_velocity));
        }
        let metres_per_minute = settings.metres_per_minute();

        let vertex_count = catalog.stop_count() * 2;
        let mut edges: Vec<TimeEdge> = Vec::new();
        let mut activities: Vec<EdgeActivity> = Vec::new();

        for stop_raw in 0..catalog.stop_count() as u32 {
            let stop = StopId(stop_raw);
            edges.push(TimeEdge {
                from: Self::in_vertex(stop),
                to: Self::out_vertex(stop),
                weight: settings.bus_wait_time as f64,
            });
            activities.push(EdgeActivity::Wait { stop });
        }

        for (bus_pos, bus) in catalog.buses.iter().enumerate() {
            let bus_id = BusId(bus_pos as u32);
            let stops = &bus.stops;
            for i in 0..stops.len() {
                let mut time_sum = 0.0f64;
                for j in (i + 1)..stops.len() {
                    let (prev, next) = (stops[j - 1], stops[j]);
                    let road = catalog.distance(prev, next).ok_or_else(|| {
                        RoutingError::MissingDistance {
                            from: catalog.stop(prev).name.clone(),
                            to: catalog.stop(next).name.clone(),
                        }
                    })?;
                    time_sum += road as f64 / metres_per_minute;

                    edges.push(TimeEdge {
                        from: Self::out_vertex(stops[i]),
                        to: Self::in_vertex(stops[j]),
                        weight: time_sum,
                    });
                    activities.push(EdgeActivity::Ride {
                        bus: bus_id,
                        time: time_sum,
                        span_count: (j - i) as u32,
                        start_position: i as u32,
                    });
                }
            }
        }

        log::info!(
            "time graph built: {} vertices, {} edges ({} wait, {} ride)",
            vertex_count,
            edges.len(),
            catalog.stop_count(),
            edges.len() - catalog.stop_count()
        );

        Ok((Self::from_edges(vertex_count, edges), activities))
    }

    fn from_edges(vertex_count: usize, edges: Vec<TimeEdge>) -> TimeGraph {
        // Counting sort by source vertex; stable, so edge ids inside each
        // adjacency group keep allocation order.
        let mut out_start = vec![0u32; vertex_count + 1];
        for e in &edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            out_start[i] += out_start[i - 1];
        }

        let mut cursor = out_start.clone();
        let mut out_edges = vec![EdgeId::INVALID; edges.len()];
        for (i, e) in edges.iter().enumerate() {
            out_edges[cursor[e.from.index()] as usize] = EdgeId(i as u32);
            cursor[e.from.index()] += 1;
        }
        debug_assert_eq!(out_start[vertex_count] as usize, edges.len());

        TimeGraph { vertex_count, edges, out_start, out_edges }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &TimeEdge {
        &self.edges[id.index()]
    }

    /// Iterator over the `EdgeId`s of all edges leaving `vertex`.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.out_start[vertex.index()] as usize;
        let end = self.out_start[vertex.index() + 1] as usize;
        self.out_edges[start..end].iter().copied()
    }
}
