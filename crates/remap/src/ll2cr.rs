//! Longitude/latitude to fractional column/row mapping.
//!
//! Both mappers overwrite the caller's lon/lat buffers with the computed
//! column/row values. This in-place contract is deliberate: swath buffers
//! can be very large, and callers reuse the same storage across repeated
//! mapping calls instead of reallocating.

use num_traits::Float;
use tracing::debug;

use projection::Transform;
use swath_common::{AreaDefinition, GridDefinition, SwathError, SwathResult};

use crate::rectify::{crosses_antimeridian, rectify_longitudes};

/// The grid placement derived by a dynamic mapping call.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicFit {
    /// Number of swath points that landed inside the fitted grid
    pub points_in_grid: usize,
    /// X coordinate of the fitted grid origin (top-left)
    pub origin_x: f64,
    /// Y coordinate of the fitted grid origin (top-left)
    pub origin_y: f64,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

/// Projected extent accumulated over the finite points of a swath.
struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extent {
    /// Placeholder for calls where every grid field is already known and
    /// nothing needs fitting; never read in that case.
    fn unfitted() -> Self {
        Self {
            min_x: f64::NAN,
            max_x: f64::NAN,
            min_y: f64::NAN,
            max_y: f64::NAN,
        }
    }
}

fn check_shapes<F>(lons: &[F], lats: &[F]) -> SwathResult<()> {
    if lons.len() != lats.len() {
        return Err(SwathError::ShapeMismatch {
            lons: lons.len(),
            lats: lats.len(),
        });
    }
    Ok(())
}

/// Project every (lon, lat) pair in place, overwriting the buffers with
/// projected (x, y). Returns the extent over pairs whose projection is
/// finite, or `None` when no point projected.
///
/// The extent is taken from the values as stored in the buffer dtype so
/// that the later column/row conversion sees coordinates no smaller than
/// the minimum it was derived from.
fn project_in_place<F, T>(lons: &mut [F], lats: &mut [F], transform: &T) -> Option<Extent>
where
    F: Float,
    T: Transform + ?Sized,
{
    let mut extent: Option<Extent> = None;

    for (lon, lat) in lons.iter_mut().zip(lats.iter_mut()) {
        let (x, y) = transform.forward(
            lon.to_f64().unwrap_or(f64::NAN),
            lat.to_f64().unwrap_or(f64::NAN),
        );
        let x = F::from(x).unwrap_or_else(F::nan);
        let y = F::from(y).unwrap_or_else(F::nan);
        *lon = x;
        *lat = y;

        if x.is_finite() && y.is_finite() {
            let (xf, yf) = (x.to_f64().unwrap_or(f64::NAN), y.to_f64().unwrap_or(f64::NAN));
            match &mut extent {
                None => {
                    extent = Some(Extent {
                        min_x: xf,
                        max_x: xf,
                        min_y: yf,
                        max_y: yf,
                    })
                }
                Some(e) => {
                    e.min_x = e.min_x.min(xf);
                    e.max_x = e.max_x.max(xf);
                    e.min_y = e.min_y.min(yf);
                    e.max_y = e.max_y.max(yf);
                }
            }
        }
    }

    extent
}

/// Convert projected (x, y) buffers to fractional (col, row) in place
/// against a fully-specified grid, writing `fill` for points outside it.
/// Returns the number of points inside the grid.
///
/// "Inside" is half-open: `0 <= col < width` and `0 <= row < height`.
fn xy_to_col_row_in_place<F>(lons: &mut [F], lats: &mut [F], fill: F, area: &AreaDefinition) -> usize
where
    F: Float,
{
    let width = area.width as f64;
    let height = area.height as f64;
    let mut points_in_grid = 0usize;

    for (lon, lat) in lons.iter_mut().zip(lats.iter_mut()) {
        let x = lon.to_f64().unwrap_or(f64::NAN);
        let y = lat.to_f64().unwrap_or(f64::NAN);
        if !x.is_finite() || !y.is_finite() {
            *lon = fill;
            *lat = fill;
            continue;
        }

        let col = (x - area.origin_x) / area.cell_width;
        let row = (y - area.origin_y) / area.cell_height;
        if col >= 0.0 && row >= 0.0 && col < width && row < height {
            points_in_grid += 1;
            *lon = F::from(col).unwrap_or(fill);
            *lat = F::from(row).unwrap_or(fill);
        } else {
            *lon = fill;
            *lat = fill;
        }
    }

    points_in_grid
}

/// Map a swath onto a fully-specified static grid.
///
/// Projects every (lon, lat) pair and overwrites the buffers with
/// fractional column/row coordinates; points whose projection is
/// non-finite or which fall outside the grid become `fill` in both
/// buffers. The in-grid test is half-open (`0 <= col < width`,
/// `0 <= row < height`), so a point exactly on the left/top edge is
/// inside and one exactly on the right/bottom edge is not.
///
/// Returns the number of points that landed inside the grid, the primary
/// success signal for downstream resampling.
pub fn ll2cr_static<F, T>(
    lons: &mut [F],
    lats: &mut [F],
    fill: F,
    transform: &T,
    area: &AreaDefinition,
) -> SwathResult<usize>
where
    F: Float,
    T: Transform + ?Sized,
{
    check_shapes(lons, lats)?;
    project_in_place(lons, lats, transform);
    Ok(xy_to_col_row_in_place(lons, lats, fill, area))
}

/// Map a swath onto a dynamically fitted grid.
///
/// The grid's cell size must be known; origin and dimensions that are
/// `None` are derived from the projected extent of the swath:
/// `origin_x = min_x`, `origin_y = max_y` (top-left convention for the
/// negative cell height), `width = ceil(x_span / cell_width)` and
/// `height = ceil(y_span / |cell_height|)`, each at least 1. When the
/// span divides the cell size exactly, the extremal point sits on the
/// exclusive edge of the half-open in-grid test.
///
/// `swath_width` is the row length of the row-major 2-D buffers; rows
/// crossing the antimeridian are rectified in place (in the caller's
/// buffer) before projection so a dateline-crossing swath fits a tight
/// extent instead of a near-global one.
///
/// On success the lon/lat buffers hold column/row values (same storage,
/// overwritten) and the returned [`DynamicFit`] carries the placement.
/// A swath with no projectable point has no extent to fit and yields
/// [`SwathError::EmptySwath`], unless the grid is fully specified: then
/// nothing needs fitting and the call returns zero in-grid points.
pub fn ll2cr_dynamic<F, T>(
    lons: &mut [F],
    lats: &mut [F],
    swath_width: usize,
    fill: F,
    transform: &T,
    grid: &GridDefinition,
) -> SwathResult<DynamicFit>
where
    F: Float,
    T: Transform + ?Sized,
{
    grid.validate()?;
    check_shapes(lons, lats)?;

    if crosses_antimeridian(lons, swath_width) {
        debug!("swath crosses the antimeridian; rectifying longitudes");
        rectify_longitudes(lons, swath_width);
    }

    let extent = match project_in_place(lons, lats, transform) {
        Some(extent) => extent,
        None if grid.is_static() => Extent::unfitted(),
        None => return Err(SwathError::EmptySwath),
    };

    let origin_x = grid.origin_x.unwrap_or(extent.min_x);
    let origin_y = grid.origin_y.unwrap_or(extent.max_y);
    let width = grid.width.unwrap_or_else(|| {
        (((extent.max_x - origin_x) / grid.cell_width).ceil() as usize).max(1)
    });
    let height = grid.height.unwrap_or_else(|| {
        (((origin_y - extent.min_y) / -grid.cell_height).ceil() as usize).max(1)
    });

    let area = AreaDefinition::new(
        origin_x,
        origin_y,
        grid.cell_width,
        grid.cell_height,
        width,
        height,
    )?;

    let points_in_grid = xy_to_col_row_in_place(lons, lats, fill, &area);
    debug!(
        origin_x,
        origin_y, width, height, points_in_grid, "fitted dynamic grid"
    );

    Ok(DynamicFit {
        points_in_grid,
        origin_x,
        origin_y,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::LatLong;

    fn ten_degree_area() -> AreaDefinition {
        // 10x10 one-degree grid with origin at (0 E, 10 N)
        AreaDefinition::new(0.0, 10.0, 1.0, -1.0, 10, 10).unwrap()
    }

    #[test]
    fn test_static_basic_mapping() {
        let area = ten_degree_area();
        let mut lons = vec![0.5f64, 9.5];
        let mut lats = vec![9.5f64, 0.5];
        let count = ll2cr_static(&mut lons, &mut lats, f64::NAN, &LatLong, &area).unwrap();
        assert_eq!(count, 2);
        assert_eq!(lons, vec![0.5, 9.5]);
        assert_eq!(lats, vec![0.5, 9.5]);
    }

    #[test]
    fn test_static_inclusive_origin_edge() {
        let area = ten_degree_area();
        let mut lons = vec![0.0f64];
        let mut lats = vec![10.0f64];
        let count = ll2cr_static(&mut lons, &mut lats, f64::NAN, &LatLong, &area).unwrap();
        assert_eq!(count, 1, "col/row exactly 0 is inside the half-open grid");
        assert_eq!(lons[0], 0.0);
        assert_eq!(lats[0], 0.0);
    }

    #[test]
    fn test_static_exclusive_far_edge() {
        let area = ten_degree_area();
        // col would be exactly 10 == width: outside
        let mut lons = vec![10.0f64];
        let mut lats = vec![5.0f64];
        let count = ll2cr_static(&mut lons, &mut lats, f64::NAN, &LatLong, &area).unwrap();
        assert_eq!(count, 0, "col == width is outside the half-open grid");
        assert!(lons[0].is_nan() && lats[0].is_nan());
    }

    #[test]
    fn test_static_shape_mismatch() {
        let area = ten_degree_area();
        let mut lons = vec![1.0f64, 2.0];
        let mut lats = vec![1.0f64];
        let err = ll2cr_static(&mut lons, &mut lats, f64::NAN, &LatLong, &area).unwrap_err();
        assert!(matches!(err, SwathError::ShapeMismatch { lons: 2, lats: 1 }));
    }

    #[test]
    fn test_dynamic_rejects_invalid_cell_size() {
        let grid = GridDefinition::dynamic(-1.0, -1.0);
        let mut lons = vec![1.0f64];
        let mut lats = vec![1.0f64];
        let err =
            ll2cr_dynamic(&mut lons, &mut lats, 1, f64::NAN, &LatLong, &grid).unwrap_err();
        assert!(matches!(err, SwathError::InvalidGrid(_)));
    }

    #[test]
    fn test_dynamic_fully_specified_grid_survives_empty_swath() {
        let grid = GridDefinition {
            cell_width: 1.0,
            cell_height: -1.0,
            origin_x: Some(0.0),
            origin_y: Some(10.0),
            width: Some(10),
            height: Some(10),
        };
        assert!(grid.is_static());

        let mut lons = vec![f64::NAN, f64::NAN];
        let mut lats = vec![f64::NAN, f64::NAN];
        let fit = ll2cr_dynamic(&mut lons, &mut lats, 2, f64::NAN, &LatLong, &grid).unwrap();
        assert_eq!(fit.points_in_grid, 0, "nothing projects, nothing lands");
        assert_eq!(fit.width, 10, "given placement is reported back");
        assert!(lons.iter().all(|v| v.is_nan()));
        assert!(lats.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_dynamic_single_point_fits_minimal_grid() {
        let grid = GridDefinition::dynamic(1.0, -1.0);
        let mut lons = vec![12.25f64];
        let mut lats = vec![48.5f64];
        let fit = ll2cr_dynamic(&mut lons, &mut lats, 1, f64::NAN, &LatLong, &grid).unwrap();
        assert_eq!(fit.width, 1);
        assert_eq!(fit.height, 1);
        assert_eq!(fit.origin_x, 12.25);
        assert_eq!(fit.origin_y, 48.5);
        assert_eq!(fit.points_in_grid, 1);
        assert_eq!(lons[0], 0.0);
        assert_eq!(lats[0], 0.0);
    }
}
