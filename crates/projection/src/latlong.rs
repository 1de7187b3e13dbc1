//! Plate carree (lat/long) projection.
//!
//! The identity projection: x is longitude in degrees, y is latitude in
//! degrees. Used for dynamic grid fitting of geographic-grid targets, where
//! longitudes beyond +/-180 are meaningful after antimeridian rectification.

use crate::Transform;

/// Identity lat/long projection in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatLong;

impl Transform for LatLong {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let proj = LatLong;
        assert_eq!(proj.forward(-95.0, 40.0), (-95.0, 40.0));
        assert_eq!(proj.inverse(195.0, -30.0), (195.0, -30.0));
    }

    #[test]
    fn test_batch_matches_scalar() {
        let proj = LatLong;
        let lons = [165.0, 175.0, 185.0];
        let lats = [15.0, 20.0, 25.0];
        let mut xs = [0.0; 3];
        let mut ys = [0.0; 3];
        proj.forward_batch(&lons, &lats, &mut xs, &mut ys);
        assert_eq!(xs, lons);
        assert_eq!(ys, lats);
    }
}
