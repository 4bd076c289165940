//! Unit tests for tg-routing.

#[cfg(test)]
mod helpers {
    use tg_catalog::{Catalog, CatalogBuilder};
    use tg_core::RoutingSettings;

    pub fn settings() -> RoutingSettings {
        // 40 km/h = 666.67 m/min; 1,000 m rides take 1.5 min.
        RoutingSettings { bus_wait_time: 6, bus_velocity: 40.0 }
    }

    /// Two lines meeting at X:
    ///
    ///   bus "1": A — X   (non-round trip)
    ///   bus "2": X — C   (non-round trip)
    ///
    /// All consecutive distances are 1,000 m, so every single-span ride
    /// weighs 1.5 min under [`settings`].
    pub fn transfer_network() -> Catalog {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.60, 37.20, &[("X".into(), 1000)]).unwrap();
        b.add_stop("X", 55.61, 37.21, &[("C".into(), 1000)]).unwrap();
        b.add_stop("C", 55.62, 37.22, &[]).unwrap();
        b.add_bus("1", &["A".into(), "X".into()], false).unwrap();
        b.add_bus("2", &["X".into(), "C".into()], false).unwrap();
        b.finish().unwrap()
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use tg_core::{EdgeId, StopId};

    use crate::{EdgeActivity, TimeGraph};

    #[test]
    fn vertex_numbering() {
        assert_eq!(TimeGraph::in_vertex(StopId(0)).0, 0);
        assert_eq!(TimeGraph::out_vertex(StopId(0)).0, 1);
        assert_eq!(TimeGraph::in_vertex(StopId(3)).0, 6);
        assert_eq!(TimeGraph::out_vertex(StopId(3)).0, 7);
    }

    #[test]
    fn wait_edges_come_first() {
        let cat = super::helpers::transfer_network();
        let (graph, activities) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();

        assert_eq!(graph.vertex_count(), 6);
        for stop_raw in 0..cat.stop_count() as u32 {
            let edge = graph.edge(EdgeId(stop_raw));
            assert_eq!(edge.from, TimeGraph::in_vertex(StopId(stop_raw)));
            assert_eq!(edge.to, TimeGraph::out_vertex(StopId(stop_raw)));
            assert_eq!(edge.weight, 6.0);
            assert!(matches!(activities[stop_raw as usize], EdgeActivity::Wait { stop } if stop == StopId(stop_raw)));
        }
    }

    #[test]
    fn ride_edges_cover_all_canonical_pairs() {
        let cat = super::helpers::transfer_network();
        let (graph, activities) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();

        // Each bus has canonical length 3 → 3 ride edges per bus.
        assert_eq!(graph.edge_count(), 3 + 2 * 3);

        // Spec invariant: every canonical pair (i, j) of every bus has a ride
        // edge whose weight is the per-segment sum and whose span is j − i.
        for (bus_pos, bus) in cat.buses.iter().enumerate() {
            for i in 0..bus.stops.len() {
                for j in (i + 1)..bus.stops.len() {
                    let expected: f64 = (i..j)
                        .map(|k| {
                            cat.distance(bus.stops[k], bus.stops[k + 1]).unwrap() as f64
                                / super::helpers::settings().metres_per_minute()
                        })
                        .sum();
                    let found = activities.iter().enumerate().any(|(edge_idx, act)| {
                        matches!(act, EdgeActivity::Ride { bus: b, time, span_count, start_position }
                            if b.index() == bus_pos
                                && *span_count == (j - i) as u32
                                && *start_position == i as u32
                                && (*time - expected).abs() < 1e-12
                                && (graph.edge(EdgeId(edge_idx as u32)).weight - expected).abs() < 1e-12)
                    });
                    assert!(found, "missing ride edge {i}→{j} for bus {}", bus.name);
                }
            }
        }
    }

    #[test]
    fn parallel_edges_are_kept() {
        use tg_catalog::CatalogBuilder;

        // Two different buses over the same two stops: both ride edges must
        // survive as distinct multigraph edges.
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 800)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[]).unwrap();
        b.add_bus("m", &["A".into(), "B".into()], false).unwrap();
        b.add_bus("n", &["A".into(), "B".into()], false).unwrap();
        let cat = b.finish().unwrap();

        let (graph, _) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();
        let a_out = TimeGraph::out_vertex(cat.stop_id("A").unwrap());
        let to_b: Vec<_> = graph
            .out_edges(a_out)
            .filter(|&e| graph.edge(e).to == TimeGraph::in_vertex(cat.stop_id("B").unwrap()))
            .collect();
        assert_eq!(to_b.len(), 2);
    }

    #[test]
    fn zero_velocity_rejected() {
        use tg_core::RoutingSettings;

        let cat = super::helpers::transfer_network();
        let err = TimeGraph::build(&cat, RoutingSettings { bus_wait_time: 6, bus_velocity: 0.0 });
        assert!(matches!(err, Err(crate::RoutingError::InvalidVelocity(_))));
    }
}

// ── Routing and reconstruction ────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use tg_core::StopId;

    use crate::{RouteCache, RouteItem, TimeGraph};

    fn built() -> (tg_catalog::Catalog, crate::TimeGraph, Vec<crate::EdgeActivity>, RouteCache) {
        let cat = super::helpers::transfer_network();
        let (graph, activities) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();
        let cache = RouteCache::build(&graph, cat.stop_count());
        (cat, graph, activities, cache)
    }

    #[test]
    fn transfer_route_alternates_and_sums() {
        let (cat, _, activities, cache) = built();
        let a = cat.stop_id("A").unwrap();
        let c = cat.stop_id("C").unwrap();

        let itinerary = cache.itinerary(a, c, &activities, super::helpers::settings()).unwrap();

        // Wait A, ride bus "1" to X, wait X, ride bus "2" to C.
        assert_eq!(itinerary.items.len(), 4);
        match &itinerary.items[0] {
            RouteItem::Wait { stop, time } => {
                assert_eq!(*stop, a);
                assert_eq!(*time, 6);
            }
            other => panic!("expected wait, got {other:?}"),
        }
        match &itinerary.items[1] {
            RouteItem::Ride { bus, time, span_count, .. } => {
                assert_eq!(cat.bus(*bus).name, "1");
                assert_eq!(*span_count, 1);
                assert!((time - 1.5).abs() < 1e-12);
            }
            other => panic!("expected ride, got {other:?}"),
        }
        match &itinerary.items[3] {
            RouteItem::Ride { bus, .. } => assert_eq!(cat.bus(*bus).name, "2"),
            other => panic!("expected ride, got {other:?}"),
        }

        // total = 6 + 1.5 + 6 + 1.5
        assert!((itinerary.total_time - 15.0).abs() < 1e-12);
        let item_sum: f64 = itinerary
            .items
            .iter()
            .map(|item| match item {
                RouteItem::Wait { time, .. } => *time as f64,
                RouteItem::Ride { time, .. } => *time,
            })
            .sum();
        assert!((itinerary.total_time - item_sum).abs() < 1e-12);
    }

    #[test]
    fn every_cached_route_alternates_wait_ride() {
        let (cat, _, activities, cache) = built();
        for from_raw in 0..cat.stop_count() as u32 {
            for to_raw in 0..cat.stop_count() as u32 {
                let (from, to) = (StopId(from_raw), StopId(to_raw));
                let Some(it) = cache.itinerary(from, to, &activities, super::helpers::settings())
                else {
                    continue;
                };
                for (pos, item) in it.items.iter().enumerate() {
                    let is_wait = matches!(item, RouteItem::Wait { .. });
                    assert_eq!(is_wait, pos % 2 == 0, "items must alternate starting with wait");
                }
                assert!(it.items.len() % 2 == 0, "routes end on a ride preceded by its wait");
            }
        }
    }

    #[test]
    fn same_stop_route_is_empty() {
        let (cat, _, activities, cache) = built();
        let a = cat.stop_id("A").unwrap();
        let it = cache.itinerary(a, a, &activities, super::helpers::settings()).unwrap();
        assert_eq!(it.total_time, 0.0);
        assert!(it.items.is_empty());
    }

    #[test]
    fn unreachable_pair_absent() {
        use tg_catalog::CatalogBuilder;

        // Two disconnected islands.
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 500)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[]).unwrap();
        b.add_stop("P", 56.0, 38.0, &[("Q".into(), 500)]).unwrap();
        b.add_stop("Q", 56.0, 38.1, &[]).unwrap();
        b.add_bus("1", &["A".into(), "B".into()], false).unwrap();
        b.add_bus("2", &["P".into(), "Q".into()], false).unwrap();
        let cat = b.finish().unwrap();

        let (graph, _) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();
        let cache = RouteCache::build(&graph, cat.stop_count());
        let a = cat.stop_id("A").unwrap();
        let q = cat.stop_id("Q").unwrap();
        assert!(cache.entry(a, q).is_none());
        assert!(cache.entry(a, cat.stop_id("B").unwrap()).is_some());
    }

    #[test]
    fn direct_beats_transfer_when_cheaper() {
        use tg_catalog::CatalogBuilder;

        // An express bus covers A→C in one ride; the shortest path must not
        // pay a second wait at B.
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 1000)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[("C".into(), 1000)]).unwrap();
        b.add_stop("C", 55.0, 37.2, &[]).unwrap();
        b.add_bus("e", &["A".into(), "B".into(), "C".into()], false).unwrap();
        let cat = b.finish().unwrap();

        let (graph, activities) = TimeGraph::build(&cat, super::helpers::settings()).unwrap();
        let cache = RouteCache::build(&graph, cat.stop_count());
        let it = cache
            .itinerary(
                cat.stop_id("A").unwrap(),
                cat.stop_id("C").unwrap(),
                &activities,
                super::helpers::settings(),
            )
            .unwrap();

        // One wait plus one two-span ride: 6 + 3.0 min.
        assert_eq!(it.items.len(), 2);
        assert!(matches!(&it.items[1], RouteItem::Ride { span_count: 2, .. }));
        assert!((it.total_time - 9.0).abs() < 1e-12);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let (_, graph, _, cache) = built();
        let again = RouteCache::build(&graph, 3);
        assert_eq!(cache, again);
    }
}
