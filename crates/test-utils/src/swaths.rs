//! Synthetic swath coordinate generators.
//!
//! These produce predictable per-pixel lon/lat arrays in row-major order,
//! including swaths that cross the antimeridian and "twisted" swaths whose
//! rows/columns are locally perturbed so the grid is not axis-aligned.

/// Create a test longitude array of shape `(rows, cols)`.
///
/// Each row runs linearly from `start` to `stop`; when `start > stop` the
/// swath is taken to cross the antimeridian eastward (e.g. 165 to -165)
/// and generated values are wrapped back into (-180, 180], producing the
/// discontinuous representation a real dateline-crossing swath has.
///
/// `twist_factor` adds `row_index * twist_factor` degrees to every row,
/// skewing the swath so its edges are not lines of constant longitude.
///
/// # Example
///
/// ```
/// use test_utils::create_test_longitude;
///
/// let lons = create_test_longitude(-95.0, -75.0, (50, 100), 0.0);
/// assert_eq!(lons.len(), 50 * 100);
/// assert_eq!(lons[0], -95.0);
/// assert_eq!(lons[99], -75.0);
/// ```
pub fn create_test_longitude(
    start: f64,
    stop: f64,
    shape: (usize, usize),
    twist_factor: f64,
) -> Vec<f64> {
    let (rows, cols) = shape;
    let stop = if start > stop { stop + 360.0 } else { stop };
    let step = if cols > 1 {
        (stop - start) / (cols - 1) as f64
    } else {
        0.0
    };

    let mut lons = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let twist = row as f64 * twist_factor;
        for col in 0..cols {
            let mut lon = start + col as f64 * step + twist;
            if lon > 180.0 {
                lon -= 360.0;
            }
            lons.push(lon);
        }
    }
    lons
}

/// Create a test latitude array of shape `(rows, cols)`.
///
/// Each column runs linearly from `start` (first row) to `stop` (last
/// row); `twist_factor` adds `col_index * twist_factor` degrees to every
/// column.
pub fn create_test_latitude(
    start: f64,
    stop: f64,
    shape: (usize, usize),
    twist_factor: f64,
) -> Vec<f64> {
    let (rows, cols) = shape;
    let step = if rows > 1 {
        (stop - start) / (rows - 1) as f64
    } else {
        0.0
    };

    let mut lats = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let lat = start + row as f64 * step;
        for col in 0..cols {
            lats.push(lat + col as f64 * twist_factor);
        }
    }
    lats
}
