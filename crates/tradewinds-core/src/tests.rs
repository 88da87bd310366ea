//! Tests for path geometry, dataset validation, and value types.

use glam::DVec2;

use crate::constants::ARC_CURVATURE;
use crate::dataset::{CompassDirection, Dataset, EntityCategory, Route, RouteStyle, WindSample};
use crate::error::DatasetError;
use crate::path::{build_arc, point_at_progress};
use crate::types::{CanvasBounds, LatLng, SpeedBand};

// ---- build_arc ----

#[test]
fn test_arc_endpoints_exact_for_any_curvature() {
    let a = LatLng::new(51.5, -0.1);
    let b = LatLng::new(40.7, -74.0);
    for curvature in [0.0, 0.15, 1.0, 25.0, -3.0] {
        let path = build_arc(a, b, 60, curvature);
        assert_eq!(path.len(), 61);
        assert_eq!(path[0], a, "origin must be exact at curvature {curvature}");
        assert_eq!(
            path[60], b,
            "destination must be exact at curvature {curvature}"
        );
    }
}

#[test]
fn test_arc_midpoint_has_lateral_offset() {
    // Vertical leg: any curvature shows up purely in latitude.
    let a = LatLng::new(0.0, 0.0);
    let b = LatLng::new(0.0, 10.0);
    let path = build_arc(a, b, 2, ARC_CURVATURE);

    assert_eq!(path.len(), 3);
    assert_eq!(path[0], a);
    assert_eq!(path[2], b);

    // t = 0.5: offset is sin(π/2) · curvature · distance = 0.15 · 10.
    let mid = path[1];
    assert!((mid.lat - 1.5).abs() < 1e-12);
    assert!((mid.lng - 5.0).abs() < 1e-12);
}

#[test]
fn test_arc_zero_curvature_is_straight() {
    let a = LatLng::new(10.0, 20.0);
    let b = LatLng::new(30.0, 40.0);
    let path = build_arc(a, b, 10, 0.0);
    for (i, point) in path.iter().enumerate() {
        let t = i as f64 / 10.0;
        let expected = a.lerp(&b, t);
        assert!((point.lat - expected.lat).abs() < 1e-12);
        assert!((point.lng - expected.lng).abs() < 1e-12);
    }
}

#[test]
fn test_arc_single_segment() {
    let a = LatLng::new(1.0, 2.0);
    let b = LatLng::new(3.0, 4.0);
    let path = build_arc(a, b, 1, 0.5);
    assert_eq!(path, vec![a, b]);
}

// ---- point_at_progress ----

#[test]
fn test_progress_endpoints() {
    let path = vec![
        LatLng::new(0.0, 0.0),
        LatLng::new(5.0, 5.0),
        LatLng::new(10.0, 0.0),
    ];
    assert_eq!(point_at_progress(&path, 0.0), Some(path[0]));
    assert_eq!(point_at_progress(&path, 1.0), Some(path[2]));
}

#[test]
fn test_progress_midpoint_concrete() {
    // progress 0.5 on [[0,0],[10,0]] lands exactly halfway.
    let path = vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 0.0)];
    let mid = point_at_progress(&path, 0.5).unwrap();
    assert_eq!(mid, LatLng::new(5.0, 0.0));
}

#[test]
fn test_progress_clamps_out_of_range() {
    let path = vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 0.0)];
    assert_eq!(point_at_progress(&path, -0.5), Some(path[0]));
    assert_eq!(point_at_progress(&path, 1.5), Some(path[1]));
}

#[test]
fn test_progress_single_point_path() {
    let path = vec![LatLng::new(7.0, 8.0)];
    for p in [0.0, 0.3, 1.0] {
        assert_eq!(point_at_progress(&path, p), Some(path[0]));
    }
}

#[test]
fn test_progress_empty_path() {
    assert_eq!(point_at_progress(&[], 0.5), None);
}

#[test]
fn test_progress_is_continuous() {
    let path = build_arc(LatLng::new(0.0, 0.0), LatLng::new(20.0, 40.0), 60, 0.15);
    let eps = 1e-9;
    for i in 0..100 {
        let p = i as f64 / 100.0;
        let here = point_at_progress(&path, p).unwrap();
        let near = point_at_progress(&path, p + eps).unwrap();
        assert!((here.lat - near.lat).abs() < 1e-6);
        assert!((here.lng - near.lng).abs() < 1e-6);
    }
}

#[test]
fn test_progress_multi_segment_interpolation() {
    let path = vec![
        LatLng::new(0.0, 0.0),
        LatLng::new(10.0, 0.0),
        LatLng::new(10.0, 10.0),
    ];
    // progress 0.75 → segment 1 at remainder 0.5.
    let p = point_at_progress(&path, 0.75).unwrap();
    assert!((p.lat - 10.0).abs() < 1e-12);
    assert!((p.lng - 5.0).abs() < 1e-12);
}

// ---- dataset validation ----

#[test]
fn test_route_requires_two_waypoints() {
    let err = Route::new(
        "bad",
        "Bad Route",
        vec![LatLng::new(0.0, 0.0)],
        RouteStyle::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        DatasetError::TooFewWaypoints {
            route_id: "bad".to_string(),
            count: 1,
        }
    );

    let err = Route::new("empty", "Empty", vec![], RouteStyle::default()).unwrap_err();
    assert!(matches!(err, DatasetError::TooFewWaypoints { count: 0, .. }));
}

#[test]
fn test_route_two_waypoints_ok() {
    let route = Route::new(
        "ok",
        "Ok Route",
        vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        RouteStyle::default(),
    )
    .unwrap();
    assert_eq!(route.waypoints().len(), 2);
    assert_eq!(route.origin(), LatLng::new(0.0, 0.0));
    assert_eq!(route.destination(), LatLng::new(1.0, 1.0));
}

#[test]
fn test_dataset_route_lookup() {
    let route = Route::new(
        "suez",
        "Suez Canal Route",
        vec![LatLng::new(51.5, -0.1), LatLng::new(1.3, 103.8)],
        RouteStyle::default(),
    )
    .unwrap();
    let dataset = Dataset::new(vec![route], vec![], vec![]);
    assert!(dataset.route("suez").is_some());
    assert!(dataset.route("panama").is_none());
}

#[test]
fn test_dataset_serde_round_trip() {
    let route = Route::new(
        "r1",
        "Route 1",
        vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        RouteStyle::default(),
    )
    .unwrap();
    let wind = WindSample {
        region: "North Atlantic".to_string(),
        speed: 85.0,
        direction: CompassDirection::NW,
    };
    let dataset = Dataset::new(vec![route], vec![], vec![wind]);

    let json = serde_json::to_string(&dataset).unwrap();
    let back: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(back.routes(), dataset.routes());
    assert_eq!(back.wind(), dataset.wind());
}

// ---- value types ----

#[test]
fn test_speed_scales_per_category() {
    assert_eq!(EntityCategory::Vessel.speed_scale(), 100_000.0);
    assert_eq!(EntityCategory::Aircraft.speed_scale(), 50_000.0);
}

#[test]
fn test_compass_vectors_are_unit_length() {
    let directions = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];
    for dir in directions {
        let v = dir.unit_vector();
        assert!((v.length() - 1.0).abs() < 1e-12, "{dir:?} not unit length");
    }
    // North points up the screen (canvas y grows downward).
    assert_eq!(CompassDirection::N.unit_vector(), DVec2::new(0.0, -1.0));
}

#[test]
fn test_speed_band_thresholds() {
    assert_eq!(SpeedBand::classify(0.05), SpeedBand::Calm);
    assert_eq!(SpeedBand::classify(0.2), SpeedBand::Moderate);
    assert_eq!(SpeedBand::classify(0.39), SpeedBand::Moderate);
    assert_eq!(SpeedBand::classify(0.4), SpeedBand::Severe);
    assert_eq!(SpeedBand::classify(2.0), SpeedBand::Severe);
}

#[test]
fn test_canvas_bounds_containment() {
    let bounds = CanvasBounds::new(800.0, 600.0);
    assert!(bounds.contains(DVec2::new(0.0, 0.0)));
    assert!(bounds.contains(DVec2::new(800.0, 600.0)));
    assert!(!bounds.contains(DVec2::new(-0.1, 10.0)));
    assert!(!bounds.contains(DVec2::new(10.0, 600.1)));
}
