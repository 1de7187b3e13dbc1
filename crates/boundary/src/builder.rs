//! Area boundary construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use projection::Transform;
use swath_common::AreaDefinition;

use crate::geos::bounding_box_lonlat;

/// Vertex budget used for geostationary areas when the caller does not
/// supply one. Curved limb segments need more samples than a straight
/// rectangle edge to stay visually faithful.
const DEFAULT_GEOS_VERTICES: usize = 50;

/// An ordered polygon of lon/lat vertices along a grid's outer edge.
///
/// The polygon is closed implicitly: the last vertex connects back to the
/// first, which is never repeated. An empty boundary is valid and means
/// the area has no ground footprint (e.g. a grid entirely off the visible
/// disk of a geostationary view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub vertices: Vec<(f64, f64)>,
}

impl Boundary {
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the vertex order runs clockwise (negative shoelace area in
    /// a y-up coordinate frame). Degenerate polygons report clockwise.
    pub fn is_clockwise(&self) -> bool {
        signed_area(&self.vertices) <= 0.0
    }

    /// Reverse the vertex order if it runs counter-clockwise. Idempotent.
    pub fn force_clockwise(&mut self) {
        if !self.is_clockwise() {
            self.vertices.reverse();
        }
    }
}

/// Twice the signed area of the polygon (shoelace). Positive for
/// counter-clockwise order in a y-up frame.
fn signed_area(vertices: &[(f64, f64)]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..vertices.len() {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % vertices.len()];
        acc += x0 * y1 - x1 * y0;
    }
    acc
}

/// Build the lon/lat boundary polygon of a projected area.
///
/// Rectangular areas are sampled along their edge pixel centers: with no
/// explicit budget every edge pixel contributes a vertex,
/// `2 * (width - 1) + 2 * (height - 1)` in total; an explicit budget is
/// clamped up to 4, rounded up to even, and distributed uniformly along
/// the edge path. Geostationary areas instead trace the visible-disk
/// outline clipped to the area extent, since their ground footprint is
/// curved; their boundary may be empty.
///
/// With `force_clockwise` the vertex order is normalized to clockwise.
pub fn area_boundary<T: Transform + ?Sized>(
    area: &AreaDefinition,
    transform: &T,
    vertices: Option<usize>,
    force_clockwise: bool,
) -> Boundary {
    let mut boundary = if let Some(geos) = transform.as_geostationary() {
        let budget = normalize_budget(vertices.unwrap_or(DEFAULT_GEOS_VERTICES));
        debug!(budget, "tracing geostationary disk boundary");
        let (lons, lats) = bounding_box_lonlat(area, geos, budget);
        Boundary::new(lons.into_iter().zip(lats).collect())
    } else {
        let pixels = match vertices {
            None => edge_pixels(area),
            Some(n) => sample_edge_path(area, normalize_budget(n)),
        };
        let verts = pixels
            .into_iter()
            .map(|(col, row)| {
                let (x, y) = area.col_row_to_xy(col, row);
                transform.inverse(x, y)
            })
            .filter(|(lon, lat)| lon.is_finite() && lat.is_finite())
            .collect();
        Boundary::new(verts)
    };

    if force_clockwise {
        boundary.force_clockwise();
    }
    boundary
}

/// Clamp a requested vertex count to at least 4 and round odd counts up
/// to even, so the polygon can pair opposite edges.
fn normalize_budget(n: usize) -> usize {
    let n = n.max(4);
    if n % 2 == 1 {
        n + 1
    } else {
        n
    }
}

/// Every edge pixel of the grid as fractional (col, row), walking the
/// ring clockwise from the top-left pixel with each corner visited once.
fn edge_pixels(area: &AreaDefinition) -> Vec<(f64, f64)> {
    let (h, w) = area.shape();
    if w < 2 || h < 2 {
        // A single row or column has no ring; take the pixels in order.
        let mut out = Vec::with_capacity(w * h);
        for row in 0..h {
            for col in 0..w {
                out.push((col as f64, row as f64));
            }
        }
        return out;
    }

    let mut out = Vec::with_capacity(2 * (w - 1) + 2 * (h - 1));
    for col in 0..w - 1 {
        out.push((col as f64, 0.0));
    }
    for row in 0..h - 1 {
        out.push(((w - 1) as f64, row as f64));
    }
    for col in (1..w).rev() {
        out.push((col as f64, (h - 1) as f64));
    }
    for row in (1..h).rev() {
        out.push((0.0, row as f64));
    }
    out
}

/// `n` fractional (col, row) points spaced uniformly along the closed
/// edge-pixel ring, starting at the top-left pixel.
fn sample_edge_path(area: &AreaDefinition, n: usize) -> Vec<(f64, f64)> {
    let (h, w) = area.shape();
    let max_col = (w - 1) as f64;
    let max_row = (h - 1) as f64;

    // Corner-to-corner segments of the ring, in pixel units.
    let segments = [
        ((0.0, 0.0), (max_col, 0.0)),
        ((max_col, 0.0), (max_col, max_row)),
        ((max_col, max_row), (0.0, max_row)),
        ((0.0, max_row), (0.0, 0.0)),
    ];
    let perimeter = 2.0 * (max_col + max_row);
    if perimeter == 0.0 {
        return vec![(0.0, 0.0)];
    }

    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let mut t = perimeter * k as f64 / n as f64;
        for (i, &((x0, y0), (x1, y1))) in segments.iter().enumerate() {
            let len = (x1 - x0).abs() + (y1 - y0).abs();
            let last = i == segments.len() - 1;
            if t <= len || last {
                let f = if len > 0.0 { (t / len).min(1.0) } else { 0.0 };
                out.push((x0 + f * (x1 - x0), y0 + f * (y1 - y0)));
                break;
            }
            t -= len;
        }
    }
    out
}
