//! Common types shared across the swath-grid workspace.

pub mod area;
pub mod bbox;
pub mod error;
pub mod grid;

pub use area::AreaDefinition;
pub use bbox::BoundingBox;
pub use error::{SwathError, SwathResult};
pub use grid::GridDefinition;
