//! Unit tests for tg-catalog.
//!
//! All fixtures are hand-crafted miniature networks; no input files.

#[cfg(test)]
mod helpers {
    use crate::{Catalog, CatalogBuilder};

    /// Three stops on one road, distances declared sparsely:
    /// `d(A,B)=600`, `d(B,C)=700`, `d(C,B)=900`.
    pub fn abc_catalog() -> Catalog {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 600)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[("C".into(), 700)]).unwrap();
        b.add_stop("C", 55.0, 37.2, &[("B".into(), 900)]).unwrap();
        b.add_bus("1", &["A".into(), "B".into(), "C".into()], false).unwrap();
        b.finish().unwrap()
    }
}

// ── Distance table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use tg_core::StopId;

    use crate::DistanceTable;

    #[test]
    fn mirror_fill() {
        let mut t = DistanceTable::new();
        t.insert_declared(StopId(0), StopId(1), 600);
        assert_eq!(t.get(StopId(0), StopId(1)), Some(600));
        assert_eq!(t.get(StopId(1), StopId(0)), Some(600));
    }

    #[test]
    fn explicit_reverse_wins() {
        let mut t = DistanceTable::new();
        t.insert_declared(StopId(1), StopId(2), 700);
        t.insert_declared(StopId(2), StopId(1), 900);
        assert_eq!(t.get(StopId(1), StopId(2)), Some(700));
        assert_eq!(t.get(StopId(2), StopId(1)), Some(900));
    }

    #[test]
    fn explicit_reverse_wins_regardless_of_order() {
        let mut t = DistanceTable::new();
        t.insert_declared(StopId(2), StopId(1), 900);
        t.insert_declared(StopId(1), StopId(2), 700);
        assert_eq!(t.get(StopId(1), StopId(2)), Some(700));
        assert_eq!(t.get(StopId(2), StopId(1)), Some(900));
    }

    #[test]
    fn zero_mirror_is_overwritten() {
        let mut t = DistanceTable::new();
        t.insert_declared(StopId(0), StopId(1), 0);
        t.insert_declared(StopId(1), StopId(0), 450);
        // The zero placeholder in the 0→1 direction is replaced by the
        // declared reverse distance.
        assert_eq!(t.get(StopId(0), StopId(1)), Some(450));
        assert_eq!(t.get(StopId(1), StopId(0)), Some(450));
    }

    #[test]
    fn symmetry_after_build() {
        let cat = super::helpers::abc_catalog();
        let a = cat.stop_id("A").unwrap();
        let b = cat.stop_id("B").unwrap();
        let c = cat.stop_id("C").unwrap();
        assert_eq!(cat.distance(a, b), Some(600));
        assert_eq!(cat.distance(b, a), Some(600));
        assert_eq!(cat.distance(b, c), Some(700));
        assert_eq!(cat.distance(c, b), Some(900));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{CatalogBuilder, CatalogError};

    #[test]
    fn duplicate_stop_rejected() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[]).unwrap();
        let err = b.add_stop("A", 55.1, 37.1, &[]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStop(name) if name == "A"));
    }

    #[test]
    fn duplicate_bus_rejected() {
        let mut b = CatalogBuilder::new();
        b.add_bus("7", &["A".into()], true).unwrap();
        let err = b.add_bus("7", &["A".into()], true).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBus(_)));
    }

    #[test]
    fn forward_reference_is_not_a_duplicate() {
        let mut b = CatalogBuilder::new();
        // "B" first appears in A's distance list, then gets declared.
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 500)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[]).unwrap();
        b.add_bus("9", &["A".into(), "B".into()], false).unwrap();
        assert!(b.finish().is_ok());
    }

    #[test]
    fn undeclared_stop_fails_at_finish() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("Ghost".into(), 500)]).unwrap();
        let err = b.finish().unwrap_err();
        assert!(matches!(err, CatalogError::MissingCoordinates(name) if name == "Ghost"));
    }

    #[test]
    fn invalid_coordinates_rejected() {
        let mut b = CatalogBuilder::new();
        assert!(matches!(
            b.add_stop("N", f64::NAN, 37.0, &[]),
            Err(CatalogError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            b.add_stop("P", 91.0, 37.0, &[]),
            Err(CatalogError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn empty_bus_rejected() {
        let mut b = CatalogBuilder::new();
        assert!(matches!(b.add_bus("0", &[], false), Err(CatalogError::EmptyBus(_))));
    }

    #[test]
    fn unclosed_round_trip_rejected() {
        let mut b = CatalogBuilder::new();
        let err = b.add_bus("5", &["A".into(), "B".into(), "C".into()], true).unwrap_err();
        assert!(matches!(err, CatalogError::UnclosedRoundTrip(_)));
    }

    #[test]
    fn missing_consecutive_distance_fails() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[]).unwrap();
        b.add_bus("1", &["A".into(), "B".into()], false).unwrap();
        let err = b.finish().unwrap_err();
        assert!(matches!(err, CatalogError::MissingDistance { .. }));
    }

    #[test]
    fn bus_ids_follow_name_order() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("A".into(), 0), ("B".into(), 100)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[]).unwrap();
        b.add_bus("zeta", &["A".into(), "B".into()], false).unwrap();
        b.add_bus("alpha", &["A".into(), "B".into()], false).unwrap();
        let cat = b.finish().unwrap();
        assert_eq!(cat.buses[0].name, "alpha");
        assert_eq!(cat.buses[1].name, "zeta");
        assert_eq!(cat.bus_id("alpha").unwrap().index(), 0);
    }
}

// ── Canonical sequences and statistics ────────────────────────────────────────

#[cfg(test)]
mod stats {
    use tg_core::GeoPoint;

    use crate::CatalogBuilder;

    #[test]
    fn out_and_back_statistics() {
        // Two stops 1,000 road-metres apart, one non-round-trip bus.
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.5, 37.5, &[("B".into(), 1000)]).unwrap();
        b.add_stop("B", 55.5, 37.6, &[]).unwrap();
        b.add_bus("99", &["A".into(), "B".into()], false).unwrap();
        let cat = b.finish().unwrap();

        let bus = &cat.buses[0];
        assert_eq!(bus.stats.stop_count, 3);
        assert_eq!(bus.stats.unique_stop_count, 2);
        assert_eq!(bus.stats.route_length, 2000);

        let direct = GeoPoint::new(55.5, 37.5).distance_m(GeoPoint::new(55.5, 37.6));
        let expected_curvature = 2000.0 / (2.0 * direct);
        assert!((bus.stats.curvature - expected_curvature).abs() < 1e-12);
        assert!(bus.stats.curvature >= 1.0);
    }

    #[test]
    fn round_trip_kept_as_declared() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 500)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[("C".into(), 600)]).unwrap();
        b.add_stop("C", 55.0, 37.2, &[("A".into(), 700)]).unwrap();
        b.add_bus("ring", &["A".into(), "B".into(), "C".into(), "A".into()], true).unwrap();
        let cat = b.finish().unwrap();

        let bus = &cat.buses[0];
        assert_eq!(bus.stats.stop_count, 4);
        assert_eq!(bus.stats.unique_stop_count, 3);
        assert_eq!(bus.stats.route_length, 500 + 600 + 700);
    }

    #[test]
    fn single_stop_ring_is_degenerate_but_legal() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[]).unwrap();
        b.add_bus("o", &["A".into()], true).unwrap();
        let cat = b.finish().unwrap();
        let bus = &cat.buses[0];
        assert_eq!(bus.stats.stop_count, 1);
        assert_eq!(bus.stats.route_length, 0);
        assert_eq!(bus.stats.curvature, 1.0);
    }

    #[test]
    fn stop_bus_lists_sorted_by_name() {
        let mut b = CatalogBuilder::new();
        b.add_stop("X", 55.0, 37.0, &[("Y".into(), 100)]).unwrap();
        b.add_stop("Y", 55.0, 37.1, &[]).unwrap();
        b.add_bus("30", &["X".into(), "Y".into()], false).unwrap();
        b.add_bus("11", &["X".into(), "Y".into()], false).unwrap();
        let cat = b.finish().unwrap();

        let x = cat.stop_id("X").unwrap();
        let names: Vec<&str> =
            cat.stop(x).buses.iter().map(|&id| cat.bus(id).name.as_str()).collect();
        assert_eq!(names, ["11", "30"]);
    }
}

// ── Endpoints ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod endpoints {
    use crate::CatalogBuilder;

    fn linear() -> crate::Catalog {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[("B".into(), 100)]).unwrap();
        b.add_stop("B", 55.0, 37.1, &[("C".into(), 100)]).unwrap();
        b.add_stop("C", 55.0, 37.2, &[("A".into(), 100)]).unwrap();
        b.add_bus("line", &["A".into(), "B".into(), "C".into()], false).unwrap();
        b.add_bus("ring", &["A".into(), "B".into(), "C".into(), "A".into()], true).unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn non_round_trip_has_two_endpoints() {
        let cat = linear();
        let bus = &cat.buses[cat.bus_id("line").unwrap().index()];
        let (first, far) = bus.endpoints();
        assert_eq!(cat.stop(first).name, "A");
        assert_eq!(cat.stop(far.unwrap()).name, "C");
        assert!(bus.is_endpoint(cat.stop_id("A").unwrap()));
        assert!(!bus.is_endpoint(cat.stop_id("B").unwrap()));
    }

    #[test]
    fn round_trip_has_one_endpoint() {
        let cat = linear();
        let bus = &cat.buses[cat.bus_id("ring").unwrap().index()];
        let (first, far) = bus.endpoints();
        assert_eq!(cat.stop(first).name, "A");
        assert_eq!(far, None);
    }

    #[test]
    fn out_and_back_to_same_stop_collapses() {
        let mut b = CatalogBuilder::new();
        b.add_stop("A", 55.0, 37.0, &[]).unwrap();
        b.add_bus("loop", &["A".into()], false).unwrap();
        let cat = b.finish().unwrap();
        let (_, far) = cat.buses[0].endpoints();
        assert_eq!(far, None);
    }
}
