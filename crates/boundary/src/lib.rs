//! Projected-area boundary extraction.
//!
//! Produces the ordered polygon of ground-coordinate vertices along a
//! grid's outer edge. Rectangular grids are sampled along their pixel
//! edges; geostationary grids delegate to the visible-disk geometry
//! because their edges are curved in ground coordinates even when the
//! area is a perfect rectangle in projection coordinates.

pub mod builder;
pub mod geos;

pub use builder::{area_boundary, Boundary};
pub use geos::{
    angle_extent, bounding_box_lonlat, bounding_box_proj, full_disk_outline_proj,
};
