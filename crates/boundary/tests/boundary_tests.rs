//! End-to-end boundary extraction across projection families.

use boundary::{area_boundary, Boundary};
use projection::{Geostationary, LambertConformal, LatLong, Transform};
use swath_common::AreaDefinition;

fn global_latlong() -> AreaDefinition {
    // 4x4 global plate carree grid
    AreaDefinition::new(-180.0, 90.0, 90.0, -45.0, 4, 4).unwrap()
}

fn goes_full_disk_area() -> AreaDefinition {
    let half = 5_434_894.885;
    AreaDefinition::new(-half, half, 2.0 * half / 100.0, -2.0 * half / 100.0, 100, 100).unwrap()
}

#[test]
fn test_default_rectangular_boundary_uses_every_edge_pixel() {
    let boundary = area_boundary(&global_latlong(), &LatLong, None, false);
    // 2 * (width - 1) + 2 * (height - 1)
    assert_eq!(boundary.len(), 12);
    assert_eq!(boundary.vertices[0], (-135.0, 67.5));
    assert_eq!(boundary.vertices[1], (-45.0, 67.5));
    assert_eq!(boundary.vertices[3], (135.0, 67.5));
    // Down the right edge, then back along the bottom
    assert_eq!(boundary.vertices[4], (135.0, 22.5));
    assert_eq!(boundary.vertices[6], (135.0, -67.5));
    assert_eq!(boundary.vertices[9], (-135.0, -67.5));
    assert!(boundary.is_clockwise());
}

#[test]
fn test_minimal_grid_boundary() {
    let area = AreaDefinition::new(-180.0, 90.0, 180.0, -90.0, 2, 2).unwrap();
    let boundary = area_boundary(&area, &LatLong, None, false);
    assert_eq!(boundary.len(), 4);
    assert_eq!(boundary.vertices[0], (-90.0, 45.0));
}

#[test]
fn test_explicit_budget_is_normalized() {
    let area = global_latlong();
    assert_eq!(area_boundary(&area, &LatLong, Some(3), false).len(), 4);
    assert_eq!(area_boundary(&area, &LatLong, Some(5), false).len(), 6);
    assert_eq!(area_boundary(&area, &LatLong, Some(10), false).len(), 10);
}

#[test]
fn test_lambert_boundary_vertices_are_finite() {
    let lcc = LambertConformal::new(-95.0, 25.0, 25.0, 25.0, 6_371_200.0).unwrap();
    // A CONUS-sized grid around the projection center
    let (cx, cy) = lcc.forward(-95.0, 40.0);
    let area =
        AreaDefinition::new(cx - 2.5e6, cy + 1.5e6, 50_000.0, -50_000.0, 100, 60).unwrap();
    let boundary = area_boundary(&area, &lcc, Some(20), false);
    assert_eq!(boundary.len(), 20);
    for &(lon, lat) in &boundary.vertices {
        assert!(lon.is_finite() && lat.is_finite(), "vertex ({lon}, {lat})");
        assert!((-180.0..=180.0).contains(&lon));
        assert!((-90.0..=90.0).contains(&lat));
    }
}

#[test]
fn test_geostationary_boundary_defaults_to_disk_outline() {
    let geos = Geostationary::goes16();
    let boundary = area_boundary(&goes_full_disk_area(), &geos, None, false);
    assert_eq!(boundary.len(), 50, "full disk keeps the default vertex count");
    for &(lon, lat) in &boundary.vertices {
        assert!(lon.is_finite() && lat.is_finite());
        assert!((-90.0..=90.0).contains(&lat));
    }
}

#[test]
fn test_geostationary_boundary_with_explicit_budget() {
    let geos = Geostationary::goes16();
    let boundary = area_boundary(&goes_full_disk_area(), &geos, Some(10), false);
    assert_eq!(boundary.len(), 10);
    assert!(boundary.vertices.iter().all(|(lon, lat)| lon.is_finite() && lat.is_finite()));
}

#[test]
fn test_geostationary_boundary_empty_off_disk() {
    let geos = Geostationary::goes16();
    // Far corner of projection space, past the visible limb
    let area =
        AreaDefinition::new(5_500_000.0, -5_300_000.0, 10_000.0, -10_000.0, 10, 10).unwrap();
    let boundary = area_boundary(&area, &geos, None, false);
    assert!(boundary.is_empty(), "off-disk area has no ground footprint");
}

#[test]
fn test_force_clockwise_no_op_on_clockwise_ring() {
    let area = global_latlong();
    let unforced = area_boundary(&area, &LatLong, None, false);
    let forced = area_boundary(&area, &LatLong, None, true);
    assert_eq!(unforced, forced, "already-clockwise ring is untouched");
}

#[test]
fn test_boundary_serializes() {
    let boundary = Boundary::new(vec![(0.0, 1.0), (2.0, 3.0)]);
    let json = serde_json::to_string(&boundary).unwrap();
    let back: Boundary = serde_json::from_str(&json).unwrap();
    assert_eq!(boundary, back);
}
