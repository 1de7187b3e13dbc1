//! Error types for swath-to-grid mapping.

use thiserror::Error;

/// Result type alias using SwathError.
pub type SwathResult<T> = Result<T, SwathError>;

/// Primary error type for mapping and boundary operations.
///
/// Numeric edge cases (unprojectable points, empty geostationary boundaries)
/// are deliberately *not* represented here: those are absorbed into fill
/// sentinels or empty coordinate sequences by the operations themselves.
/// Only structural misconfiguration surfaces as an error.
#[derive(Debug, Error)]
pub enum SwathError {
    /// Grid parameters from which no sensible geometry can be derived.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Projection parameters from which no transform can be built.
    #[error("invalid projection parameters: {0}")]
    InvalidProjection(String),

    /// Paired lon/lat buffers must always be co-shaped.
    #[error("swath buffer shape mismatch: {lons} longitudes vs {lats} latitudes")]
    ShapeMismatch { lons: usize, lats: usize },

    /// No point of the swath could be projected, so a dynamic grid extent
    /// cannot be derived.
    #[error("swath has no projectable points; cannot derive a grid extent")]
    EmptySwath,
}

impl SwathError {
    /// Create an InvalidGrid error.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Create an InvalidProjection error.
    pub fn invalid_projection(msg: impl Into<String>) -> Self {
        Self::InvalidProjection(msg.into())
    }
}
