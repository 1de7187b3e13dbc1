//! Grid specifications for swath remapping targets.

use serde::{Deserialize, Serialize};

use crate::{SwathError, SwathResult};

/// Specification of a target grid, possibly with unknown placement.
///
/// Cell size is always required. Origin and dimensions may be left `None`
/// to request dynamic fitting, in which case the mapper derives them from
/// the projected extent of the swath.
///
/// Conventions: `cell_width > 0` (columns increase eastward in projection
/// space) and `cell_height < 0` (rows increase downward from `origin_y`,
/// which is the top edge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDefinition {
    /// Cell size in X direction (projection units, positive)
    pub cell_width: f64,
    /// Cell size in Y direction (projection units, negative)
    pub cell_height: f64,
    /// X coordinate of the grid origin (top-left), if known
    pub origin_x: Option<f64>,
    /// Y coordinate of the grid origin (top-left), if known
    pub origin_y: Option<f64>,
    /// Number of columns, if known
    pub width: Option<usize>,
    /// Number of rows, if known
    pub height: Option<usize>,
}

impl GridDefinition {
    /// Create a grid with known cell size and unknown placement,
    /// to be fitted dynamically.
    pub fn dynamic(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
            origin_x: None,
            origin_y: None,
            width: None,
            height: None,
        }
    }

    /// True when origin and dimensions are all known.
    pub fn is_static(&self) -> bool {
        self.origin_x.is_some()
            && self.origin_y.is_some()
            && self.width.is_some()
            && self.height.is_some()
    }

    /// Validate the parameters that are present.
    ///
    /// A non-positive cell width, a non-negative cell height, or a known
    /// zero dimension is a configuration error: no geometry can be derived.
    pub fn validate(&self) -> SwathResult<()> {
        if !(self.cell_width > 0.0) || !self.cell_width.is_finite() {
            return Err(SwathError::invalid_grid(format!(
                "cell_width must be positive and finite, got {}",
                self.cell_width
            )));
        }
        if !(self.cell_height < 0.0) || !self.cell_height.is_finite() {
            return Err(SwathError::invalid_grid(format!(
                "cell_height must be negative and finite, got {}",
                self.cell_height
            )));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err(SwathError::invalid_grid(
                "grid dimensions must be at least 1",
            ));
        }
        for (name, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(SwathError::invalid_grid(format!(
                        "{name} must be finite, got {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}
