//! Swath-to-grid coordinate mapping (the "ll2cr" engine).
//!
//! Maps irregular swaths of geolocated pixels (per-pixel lon/lat) onto
//! regular projected grids, producing fractional column/row coordinates
//! for downstream resampling. Supports both fully-specified static grids
//! and dynamic grids whose origin and dimensions are fitted to the data.

pub mod ll2cr;
pub mod rectify;

pub use ll2cr::{ll2cr_dynamic, ll2cr_static, DynamicFit};
pub use rectify::{crosses_antimeridian, rectify_longitudes};
