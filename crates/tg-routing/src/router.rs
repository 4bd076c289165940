//! Offline Dijkstra and the all-pairs route cache.
//!
//! # Cost units
//!
//! All weights are minutes (`f64`).  The heap orders entries with
//! `f64::total_cmp` and breaks ties on the vertex id, so a given build
//! always settles vertices in the same order and the cached edge lists are
//! reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use tg_core::{EdgeId, RouteId, RoutingSettings, StopId, VertexId};

use crate::activity::{EdgeActivity, RouteItem};
use crate::graph::TimeGraph;

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone)]
struct HeapEntry {
    cost: f64,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost).then(self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest paths over the whole graph.
///
/// Returns per-vertex best cost (`f64::INFINITY` when unreachable) and the
/// edge that reached each vertex (`EdgeId::INVALID` for the source and
/// unreached vertices).
fn shortest_from(graph: &TimeGraph, source: VertexId) -> (Vec<f64>, Vec<EdgeId>) {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[source.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry { cost: 0.0, vertex: source }));

    while let Some(Reverse(HeapEntry { cost, vertex })) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for edge_id in graph.out_edges(vertex) {
            let edge = graph.edge(edge_id);
            let new_cost = cost + edge.weight;
            if new_cost < dist[edge.to.index()] {
                dist[edge.to.index()] = new_cost;
                prev_edge[edge.to.index()] = edge_id;
                heap.push(Reverse(HeapEntry { cost: new_cost, vertex: edge.to }));
            }
        }
    }

    (dist, prev_edge)
}

fn unwind(graph: &TimeGraph, prev_edge: &[EdgeId], target: VertexId) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut cur = target;
    loop {
        let e = prev_edge[cur.index()];
        if !e.is_valid() {
            break;
        }
        edges.push(e);
        cur = graph.edge(e).from;
    }
    edges.reverse();
    edges
}

// ── RouteCache ────────────────────────────────────────────────────────────────

/// One precomputed shortest route: total weight in minutes plus the ordered
/// edge ids to expand against the activity table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CachedRoute {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// A reconstructed itinerary: the route's total time and its alternating
/// wait/ride items.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// Shortest-time routes between every reachable ordered stop pair.
///
/// Built once after the graph; query mode never runs Dijkstra again, it only
/// expands the stored edge lists.  Route ids are dense and deterministic for
/// a given catalog.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCache {
    index: FxHashMap<(StopId, StopId), RouteId>,
    routes: Vec<CachedRoute>,
}

impl RouteCache {
    /// Run Dijkstra from every stop's *in* vertex and record the path to
    /// every other stop's *in* vertex — so the first wait is always part of
    /// the route and the itinerary ends in a waiting state.
    pub fn build(graph: &TimeGraph, stop_count: usize) -> RouteCache {
        let mut index: FxHashMap<(StopId, StopId), RouteId> = FxHashMap::default();
        let mut routes: Vec<CachedRoute> = Vec::new();

        for from_raw in 0..stop_count as u32 {
            let from = StopId(from_raw);
            let (dist, prev_edge) = shortest_from(graph, TimeGraph::in_vertex(from));

            for to_raw in 0..stop_count as u32 {
                let to = StopId(to_raw);
                let target = TimeGraph::in_vertex(to);
                let weight = dist[target.index()];
                if !weight.is_finite() {
                    continue;
                }
                let id = RouteId(routes.len() as u32);
                index.insert((from, to), id);
                routes.push(CachedRoute { weight, edges: unwind(graph, &prev_edge, target) });
            }
        }

        log::info!("route cache built: {} feasible pairs across {} stops", routes.len(), stop_count);
        RouteCache { index, routes }
    }

    /// Cache entry for an ordered stop pair, if a route exists.
    pub fn entry(&self, from: StopId, to: StopId) -> Option<(RouteId, &CachedRoute)> {
        let id = *self.index.get(&(from, to))?;
        Some((id, &self.routes[id.index()]))
    }

    #[inline]
    pub fn route(&self, id: RouteId) -> &CachedRoute {
        &self.routes[id.index()]
    }

    /// Number of feasible ordered pairs.
    pub fn pair_count(&self) -> usize {
        self.routes.len()
    }

    /// Expand the cached route into user-visible items.
    ///
    /// Returns `None` when no route exists.  Wait durations come from the
    /// catalog-wide settings; ride items carry their span and starting
    /// canonical position so the route-map renderer can trace them.
    pub fn itinerary(
        &self,
        from: StopId,
        to: StopId,
        activities: &[EdgeActivity],
        settings: RoutingSettings,
    ) -> Option<Itinerary> {
        let (_, cached) = self.entry(from, to)?;

        let items = cached
            .edges
            .iter()
            .map(|&edge| match activities[edge.index()] {
                EdgeActivity::Wait { stop } => {
                    RouteItem::Wait { stop, time: settings.bus_wait_time }
                }
                EdgeActivity::Ride { bus, time, span_count, start_position } => {
                    RouteItem::Ride { bus, time, span_count, start_position }
                }
            })
            .collect();

        Some(Itinerary { total_time: cached.weight, items })
    }
}
