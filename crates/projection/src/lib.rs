//! Coordinate reference system transformations.
//!
//! Implements map projections from scratch without external dependencies.
//! All projections expose the [`Transform`] interface: forward maps lon/lat
//! degrees to projected x/y, inverse maps back, and unprojectable inputs
//! produce non-finite sentinels instead of errors.

pub mod geostationary;
pub mod lambert;
pub mod latlong;
pub mod transform;

pub use geostationary::Geostationary;
pub use lambert::LambertConformal;
pub use latlong::LatLong;
pub use transform::Transform;
