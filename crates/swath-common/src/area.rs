//! Fully-specified grid areas.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, SwathError, SwathResult};

/// A fully-specified target grid: origin, cell size and dimensions all known.
///
/// `origin_x`/`origin_y` is the top-left corner of the grid in projection
/// coordinates; `cell_height` is negative so rows increase downward.
/// Fractional column/row coordinates relate to projection coordinates by
/// `col = (x - origin_x) / cell_width` and `row = (y - origin_y) / cell_height`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDefinition {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub width: usize,
    pub height: usize,
}

impl AreaDefinition {
    /// Create a new area definition, validating the grid parameters.
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        cell_width: f64,
        cell_height: f64,
        width: usize,
        height: usize,
    ) -> SwathResult<Self> {
        if !(cell_width > 0.0) || !cell_width.is_finite() {
            return Err(SwathError::invalid_grid(format!(
                "cell_width must be positive and finite, got {cell_width}"
            )));
        }
        if !(cell_height < 0.0) || !cell_height.is_finite() {
            return Err(SwathError::invalid_grid(format!(
                "cell_height must be negative and finite, got {cell_height}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(SwathError::invalid_grid(
                "grid dimensions must be at least 1",
            ));
        }
        if !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(SwathError::invalid_grid("grid origin must be finite"));
        }
        Ok(Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
            width,
            height,
        })
    }

    /// Grid shape as (height, width).
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Projected extent of the full grid.
    pub fn extent(&self) -> BoundingBox {
        let max_x = self.origin_x + self.width as f64 * self.cell_width;
        let min_y = self.origin_y + self.height as f64 * self.cell_height;
        BoundingBox::new(self.origin_x, min_y, max_x, self.origin_y)
    }

    /// Projection coordinates of a pixel center at fractional (col, row).
    pub fn col_row_to_xy(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.origin_x + (col + 0.5) * self.cell_width;
        let y = self.origin_y + (row + 0.5) * self.cell_height;
        (x, y)
    }

    /// Fractional (col, row) of a projection coordinate.
    pub fn xy_to_col_row(&self, x: f64, y: f64) -> (f64, f64) {
        let col = (x - self.origin_x) / self.cell_width;
        let row = (y - self.origin_y) / self.cell_height;
        (col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_latlong() -> AreaDefinition {
        // 4x4 global plate carree grid
        AreaDefinition::new(-180.0, 90.0, 90.0, -45.0, 4, 4).unwrap()
    }

    #[test]
    fn test_extent() {
        let area = global_latlong();
        let extent = area.extent();
        assert_eq!(extent.min_x, -180.0);
        assert_eq!(extent.max_x, 180.0);
        assert_eq!(extent.min_y, -90.0);
        assert_eq!(extent.max_y, 90.0);
    }

    #[test]
    fn test_pixel_centers() {
        let area = global_latlong();
        let (x, y) = area.col_row_to_xy(0.0, 0.0);
        assert_eq!(x, -135.0);
        assert_eq!(y, 67.5);

        let (x, y) = area.col_row_to_xy(3.0, 3.0);
        assert_eq!(x, 135.0);
        assert_eq!(y, -67.5);
    }

    #[test]
    fn test_xy_to_col_row_roundtrip() {
        let area = global_latlong();
        let (x, y) = area.col_row_to_xy(1.25, 2.5);
        let (col, row) = area.xy_to_col_row(x, y);
        assert!((col - 1.75).abs() < 1e-12, "col should be 1.75, got {col}");
        assert!((row - 3.0).abs() < 1e-12, "row should be 3.0, got {row}");
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(AreaDefinition::new(0.0, 0.0, -1.0, -1.0, 10, 10).is_err());
        assert!(AreaDefinition::new(0.0, 0.0, 1.0, 1.0, 10, 10).is_err());
        assert!(AreaDefinition::new(0.0, 0.0, 1.0, -1.0, 0, 10).is_err());
        assert!(AreaDefinition::new(f64::NAN, 0.0, 1.0, -1.0, 10, 10).is_err());
    }
}
