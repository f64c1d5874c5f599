//! Unit tests for the proximity engine.

use prox_core::{GeoPoint, Venue, VenueCatalog};

fn venue(name: &str, lon: f64, lat: f64) -> Venue {
    Venue {
        position: GeoPoint::new(lon, lat),
        name:     name.into(),
        category: "restaurant".into(),
        address:  format!("{name} street"),
        phone:    "(6) 000 0000".into(),
    }
}

fn two_venue_catalog() -> VenueCatalog {
    VenueCatalog::new(vec![venue("A", 0.0, 0.0), venue("B", 0.01, 0.0)])
}

#[cfg(test)]
mod builder {
    use prox_core::VenueCatalog;

    use crate::{DEFAULT_RADIUS_KM, EngineBuilder, EngineError};

    use super::two_venue_catalog;

    #[test]
    fn rejects_empty_catalog() {
        let err = EngineBuilder::new(VenueCatalog::default()).build().unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog));
    }

    #[test]
    fn rejects_too_few_segments() {
        let err = EngineBuilder::new(two_venue_catalog())
            .segments(2)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = EngineBuilder::new(two_venue_catalog())
            .radius_km(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Geometry(_)));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = EngineBuilder::new(two_venue_catalog())
            .speed_kmh(-30.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn defaults_apply() {
        let engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        assert_eq!(engine.buffer_radius_km(), DEFAULT_RADIUS_KM);
        assert_eq!(engine.buffers().len(), 2);
    }

    #[test]
    fn engine_is_debug_printable() {
        // `unwrap_err` on `EngineResult<ProximityEngine>` needs the engine
        // to be `Debug`; pin the impl so it cannot regress.
        let engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        let dump = format!("{engine:?}");
        assert!(dump.contains("ProximityEngine"));
    }
}

#[cfg(test)]
mod idle {
    use crate::{EngineBuilder, EngineState};

    use super::two_venue_catalog;

    #[test]
    fn starts_idle_with_buffers_but_no_candidates() {
        let engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(engine.query_point().is_none());

        assert_eq!(engine.buffers().len(), 2);
        assert!(engine.envelope().perimeter_km > 0.0);

        assert_eq!(engine.candidate_set().count(), 0);
        assert!(engine.route_segments().is_empty());
        assert!(engine.nearest_route().is_none());
    }

    #[test]
    fn distances_absent_without_a_query() {
        let engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        for buf in engine.buffers() {
            assert!(buf.distance_km.is_none());
            assert!(buf.travel.is_none());
        }
    }

    #[test]
    fn radius_change_keeps_candidates_empty() {
        let mut engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        engine.set_buffer_radius(2.0).unwrap();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.candidate_set().count(), 0);
        assert!(engine.route_segments().is_empty());
        assert!(engine.nearest_route().is_none());
    }

    #[test]
    fn buffer_rings_enclose_their_venue() {
        let engine = EngineBuilder::new(two_venue_catalog()).build().unwrap();
        for buf in engine.buffers() {
            let pos = engine.venue(buf.venue).unwrap().position;
            assert!(buf.ring.contains(pos));
        }
    }
}

#[cfg(test)]
mod active {
    use prox_core::GeoPoint;

    use crate::{Emphasis, EngineBuilder, EngineState};

    use super::two_venue_catalog;

    #[test]
    fn nearby_query_ranks_both_venues() {
        // 2 km buffers at ~0.01° separation overlap; both contain the query.
        let mut engine = EngineBuilder::new(two_venue_catalog())
            .radius_km(2.0)
            .build()
            .unwrap();
        let query = GeoPoint::new(0.001, 0.0);
        engine.set_query_point(query);

        assert_eq!(engine.state(), EngineState::Active);

        let candidates: Vec<_> = engine.candidate_set().collect();
        assert_eq!(candidates.len(), 2);
        // A at lon 0.0 is 0.001° away, B at lon 0.01 is 0.009° away.
        assert_eq!(engine.venue(candidates[0].venue).unwrap().name, "A");
        assert_eq!(engine.venue(candidates[1].venue).unwrap().name, "B");

        let d0 = candidates[0].distance_km.unwrap();
        let d1 = candidates[1].distance_km.unwrap();
        assert!(d0 < d1);

        let nearest = engine.nearest_route().unwrap();
        assert!(nearest.from.approx_eq(query, 1e-12));
        assert!(nearest.to.approx_eq(GeoPoint::new(0.0, 0.0), 1e-12));
        assert_eq!(nearest.emphasis, Emphasis::Nearest);

        let routes = engine.route_segments();
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.emphasis == Emphasis::Normal));
        assert!(routes[0].to.approx_eq(GeoPoint::new(0.0, 0.0), 1e-12));
        assert!(routes[1].to.approx_eq(GeoPoint::new(0.01, 0.0), 1e-12));
    }

    #[test]
    fn tiny_radius_far_query_yields_nothing_but_envelope() {
        let mut engine = EngineBuilder::new(two_venue_catalog())
            .radius_km(0.001)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(5.0, 5.0));

        assert_eq!(engine.candidate_set().count(), 0);
        assert!(engine.route_segments().is_empty());
        assert!(engine.nearest_route().is_none());
        // The envelope still spans the (tiny) buffers around both venues.
        assert!(engine.envelope().perimeter_km > 0.0);
    }

    #[test]
    fn travel_estimates_populated() {
        let mut engine = EngineBuilder::new(two_venue_catalog())
            .radius_km(2.0)
            .speed_kmh(30.0)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(0.001, 0.0));

        for buf in engine.buffers() {
            let d = buf.distance_km.unwrap();
            let t = buf.travel.unwrap();
            assert!((t.minutes - d / 30.0 * 60.0).abs() < 1e-12);
        }
    }

    #[test]
    fn replacing_the_query_point_replaces_all_derived_state() {
        let mut engine = EngineBuilder::new(two_venue_catalog())
            .radius_km(2.0)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(0.001, 0.0));
        assert_eq!(engine.candidate_set().count(), 2);

        engine.set_query_point(GeoPoint::new(5.0, 5.0));
        assert_eq!(engine.candidate_set().count(), 0);
        assert!(engine.nearest_route().is_none());
    }

    #[test]
    fn clearing_the_query_point_returns_to_idle() {
        let mut engine = EngineBuilder::new(two_venue_catalog())
            .radius_km(2.0)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(0.001, 0.0));
        engine.clear_query_point();

        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.candidate_set().count(), 0);
        assert!(engine.route_segments().is_empty());
        assert!(engine.nearest_route().is_none());
        for buf in engine.buffers() {
            assert!(buf.distance_km.is_none());
        }
    }
}

#[cfg(test)]
mod radius {
    use prox_core::{GeoPoint, VenueCatalog, VenueId};

    use crate::EngineBuilder;

    use super::venue;

    #[test]
    fn growing_the_radius_never_shrinks_the_candidate_set() {
        // Query ~0.33 km from A, ~0.06 km from B.
        let catalog = VenueCatalog::new(vec![
            venue("A", 0.0, 0.0),
            venue("B", 0.0025, 0.0),
        ]);
        let mut engine = EngineBuilder::new(catalog)
            .radius_km(0.2)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(0.003, 0.0));

        let before: Vec<VenueId> = engine.candidate_set().map(|b| b.venue).collect();
        assert_eq!(before, vec![VenueId(1)]);

        engine.set_buffer_radius(0.5).unwrap();
        let after: Vec<VenueId> = engine.candidate_set().map(|b| b.venue).collect();
        assert!(before.iter().all(|id| after.contains(id)));
        assert_eq!(after, vec![VenueId(1), VenueId(0)]);
    }

    #[test]
    fn envelope_tracks_the_radius() {
        let catalog = VenueCatalog::new(vec![venue("A", 0.0, 0.0)]);
        let mut engine = EngineBuilder::new(catalog)
            .radius_km(0.2)
            .build()
            .unwrap();
        let small = engine.envelope().perimeter_km;
        engine.set_buffer_radius(0.5).unwrap();
        assert!(engine.envelope().perimeter_km > small);
    }

    #[test]
    fn invalid_radius_keeps_the_previous_generation() {
        let mut engine = EngineBuilder::new(super::two_venue_catalog())
            .radius_km(2.0)
            .build()
            .unwrap();
        engine.set_query_point(GeoPoint::new(0.001, 0.0));

        let candidates_before = engine.candidate_set().count();
        let vertex_before = engine.buffers()[0].ring.vertices()[0];
        let perimeter_before = engine.envelope().perimeter_km;

        assert!(engine.set_buffer_radius(-1.0).is_err());
        assert!(engine.set_buffer_radius(f64::NAN).is_err());

        assert_eq!(engine.buffer_radius_km(), 2.0);
        assert_eq!(engine.candidate_set().count(), candidates_before);
        assert!(engine.buffers()[0].ring.vertices()[0].approx_eq(vertex_before, 0.0));
        assert_eq!(engine.envelope().perimeter_km, perimeter_before);
    }
}

#[cfg(test)]
mod stability {
    use prox_core::{GeoPoint, VenueCatalog};

    use crate::EngineBuilder;

    use super::venue;

    #[test]
    fn tied_distances_follow_catalog_order() {
        // A and B are mirror images about the query; haversine gives them
        // bit-identical distances.
        let query = GeoPoint::new(0.0, 0.0);

        let forward = VenueCatalog::new(vec![
            venue("A", -0.001, 0.0),
            venue("B", 0.001, 0.0),
        ]);
        let mut engine = EngineBuilder::new(forward).radius_km(1.0).build().unwrap();
        engine.set_query_point(query);
        let names: Vec<String> = engine
            .candidate_set()
            .map(|b| engine.venue(b.venue).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["A", "B"]);

        // Reordering the catalog flips the tie-break the same way.
        let reversed = VenueCatalog::new(vec![
            venue("B", 0.001, 0.0),
            venue("A", -0.001, 0.0),
        ]);
        let mut engine = EngineBuilder::new(reversed).radius_km(1.0).build().unwrap();
        engine.set_query_point(query);
        let names: Vec<String> = engine
            .candidate_set()
            .map(|b| engine.venue(b.venue).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn ranking_is_sorted_non_decreasing() {
        let catalog = VenueCatalog::new(vec![
            venue("far", 0.008, 0.0),
            venue("near", 0.001, 0.0),
            venue("mid", 0.004, 0.0),
        ]);
        let mut engine = EngineBuilder::new(catalog).radius_km(2.0).build().unwrap();
        engine.set_query_point(GeoPoint::new(0.0, 0.0));

        let distances: Vec<f64> = engine
            .candidate_set()
            .map(|b| b.distance_km.unwrap())
            .collect();
        assert_eq!(distances.len(), 3);
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
