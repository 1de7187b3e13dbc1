//! Geostationary visible-disk geometry.
//!
//! Computes the angular extent of the Earth disk as seen from a
//! geostationary viewpoint and generates the disk boundary as a closed
//! parametric curve in projection coordinates, optionally truncated
//! against a grid's extent and transformed to lon/lats.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use projection::{Geostationary, Transform};
use swath_common::{AreaDefinition, BoundingBox};

/// Inward bias (radians) applied to the limb angles when sampling the
/// disk outline, so the inverse projection of every sample stays on the
/// Earth's surface instead of overshooting into space numerically.
const LIMB_BIAS_RAD: f64 = 1e-4;

/// Vertices closer than this (projection meters) are collapsed when a
/// clipped ring revisits a point.
const DEDUP_EPS: f64 = 1e-6;

/// Maximum angular deviation from the sub-satellite point at which the
/// Earth's limb is visible, as (x-angle, y-angle) in radians.
///
/// The equatorial half-angle is `asin(a / (a + h))` and the polar one
/// `asin(b / (a + h))`; they coincide for a spherical ellipsoid. Both are
/// strictly positive and below pi/2 for any positive satellite height.
pub fn angle_extent(geos: &Geostationary) -> (f64, f64) {
    // geos.h is the satellite distance from the Earth center
    ((geos.req / geos.h).asin(), (geos.rpol / geos.h).asin())
}

/// The full visible-disk outline as a closed parametric curve in
/// projection coordinates, sampled at `num_points` uniformly spaced
/// parameter values. The curve is returned whole regardless of any grid
/// extent; truncation is a separate step.
pub fn full_disk_outline_proj(geos: &Geostationary, num_points: usize) -> (Vec<f64>, Vec<f64>) {
    let (x_max, y_max) = angle_extent(geos);
    let x_max = x_max - LIMB_BIAS_RAD;
    let y_max = y_max - LIMB_BIAS_RAD;
    let h = geos.perspective_point_height;

    let mut xs = Vec::with_capacity(num_points);
    let mut ys = Vec::with_capacity(num_points);
    for k in 0..num_points {
        let t = -PI + TAU * k as f64 / num_points as f64;
        xs.push(t.cos() * x_max * h);
        ys.push(-t.sin() * y_max * h);
    }
    (xs, ys)
}

/// The visible-disk boundary in projection coordinates, truncated against
/// the area's extent.
///
/// Returns the full outline when the extent covers the whole disk, the
/// clipped polygon when the extent cuts part of it off, and empty
/// sequences when the extent lies entirely off the disk.
pub fn bounding_box_proj(
    area: &AreaDefinition,
    geos: &Geostationary,
    num_points: usize,
) -> (Vec<f64>, Vec<f64>) {
    let (xs, ys) = full_disk_outline_proj(geos, num_points);
    let ring: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();

    let extent = area.extent();
    if !extent.intersects(&ring_bounds(&ring)) {
        debug!("area extent lies entirely outside the visible disk");
        return (Vec::new(), Vec::new());
    }

    let clipped = clip_ring_to_extent(ring, &extent);
    if clipped.is_empty() {
        debug!("area extent does not intersect the visible disk");
    }
    clipped.into_iter().unzip()
}

/// Axis-aligned bounds of a vertex ring.
fn ring_bounds(ring: &[(f64, f64)]) -> BoundingBox {
    let mut bounds = BoundingBox::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for &(x, y) in ring {
        bounds.min_x = bounds.min_x.min(x);
        bounds.min_y = bounds.min_y.min(y);
        bounds.max_x = bounds.max_x.max(x);
        bounds.max_y = bounds.max_y.max(y);
    }
    bounds
}

/// The visible-disk boundary in lon/lat degrees, truncated against the
/// area's extent.
///
/// Points whose inverse projection is non-finite are dropped; an area
/// entirely off the disk yields empty sequences, which callers must treat
/// as "no visible boundary" rather than an error.
pub fn bounding_box_lonlat(
    area: &AreaDefinition,
    geos: &Geostationary,
    num_points: usize,
) -> (Vec<f64>, Vec<f64>) {
    let (xs, ys) = bounding_box_proj(area, geos, num_points);

    let mut lons = Vec::with_capacity(xs.len());
    let mut lats = Vec::with_capacity(xs.len());
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let (lon, lat) = geos.inverse(x, y);
        if lon.is_finite() && lat.is_finite() {
            lons.push(lon);
            lats.push(lat);
        }
    }
    (lons, lats)
}

/// Clip a closed convex ring against an axis-aligned rectangle
/// (Sutherland-Hodgman, one half-plane at a time).
fn clip_ring_to_extent(ring: Vec<(f64, f64)>, extent: &BoundingBox) -> Vec<(f64, f64)> {
    // A ring wholly inside the rectangle survives unchanged
    if ring.iter().all(|&(x, y)| extent.contains_point(x, y)) {
        return ring;
    }

    // Each edge: (inside predicate, intersection parameter on x or y)
    let clipped = clip_halfplane(ring, |p| p.0 >= extent.min_x, |a, b| {
        intersect_vertical(a, b, extent.min_x)
    });
    let clipped = clip_halfplane(clipped, |p| p.0 <= extent.max_x, |a, b| {
        intersect_vertical(a, b, extent.max_x)
    });
    let clipped = clip_halfplane(clipped, |p| p.1 >= extent.min_y, |a, b| {
        intersect_horizontal(a, b, extent.min_y)
    });
    let clipped = clip_halfplane(clipped, |p| p.1 <= extent.max_y, |a, b| {
        intersect_horizontal(a, b, extent.max_y)
    });
    dedup_ring(clipped)
}

fn clip_halfplane(
    ring: Vec<(f64, f64)>,
    inside: impl Fn(&(f64, f64)) -> bool,
    intersect: impl Fn(&(f64, f64), &(f64, f64)) -> (f64, f64),
) -> Vec<(f64, f64)> {
    if ring.is_empty() {
        return ring;
    }
    let mut out = Vec::with_capacity(ring.len() + 4);
    for i in 0..ring.len() {
        let current = ring[i];
        let previous = ring[(i + ring.len() - 1) % ring.len()];
        match (inside(&previous), inside(&current)) {
            (true, true) => out.push(current),
            (true, false) => out.push(intersect(&previous, &current)),
            (false, true) => {
                out.push(intersect(&previous, &current));
                out.push(current);
            }
            (false, false) => {}
        }
    }
    out
}

fn intersect_vertical(a: &(f64, f64), b: &(f64, f64), x: f64) -> (f64, f64) {
    let t = (x - a.0) / (b.0 - a.0);
    (x, a.1 + t * (b.1 - a.1))
}

fn intersect_horizontal(a: &(f64, f64), b: &(f64, f64), y: f64) -> (f64, f64) {
    let t = (y - a.1) / (b.1 - a.1);
    (a.0 + t * (b.0 - a.0), y)
}

/// Drop consecutive (and closing) near-duplicate vertices a clip can
/// introduce when the ring touches a rectangle edge.
fn dedup_ring(ring: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(ring.len());
    for p in ring {
        if let Some(last) = out.last() {
            if (p.0 - last.0).abs() < DEDUP_EPS && (p.1 - last.1).abs() < DEDUP_EPS {
                continue;
            }
        }
        out.push(p);
    }
    while out.len() > 1 {
        let first = out[0];
        let last = *out.last().expect("ring is non-empty");
        if (first.0 - last.0).abs() < DEDUP_EPS && (first.1 - last.1).abs() < DEDUP_EPS {
            out.pop();
        } else {
            break;
        }
    }
    out
}
