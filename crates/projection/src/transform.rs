//! The projection transform interface consumed by the mapping engine.

use crate::Geostationary;

/// Forward/inverse map projection over geographic coordinates.
///
/// Implementations never fail: an input outside the projection's valid
/// domain yields non-finite output coordinates, which downstream code
/// treats as a fill sentinel.
pub trait Transform {
    /// Project (lon, lat) in degrees to projected (x, y).
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Project (x, y) back to (lon, lat) in degrees.
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);

    /// Project batches of coordinates, writing results into `xs`/`ys`.
    ///
    /// All four slices must be co-shaped; extra elements in the output
    /// slices are left untouched.
    fn forward_batch(&self, lons: &[f64], lats: &[f64], xs: &mut [f64], ys: &mut [f64]) {
        for i in 0..lons.len().min(lats.len()) {
            let (x, y) = self.forward(lons[i], lats[i]);
            xs[i] = x;
            ys[i] = y;
        }
    }

    /// Inverse-project batches of coordinates, writing into `lons`/`lats`.
    fn inverse_batch(&self, xs: &[f64], ys: &[f64], lons: &mut [f64], lats: &mut [f64]) {
        for i in 0..xs.len().min(ys.len()) {
            let (lon, lat) = self.inverse(xs[i], ys[i]);
            lons[i] = lon;
            lats[i] = lat;
        }
    }

    /// Capability probe: the geostationary parameters of this projection,
    /// when it is one. Boundary extraction dispatches on this because
    /// geostationary grid edges are curved in ground coordinates.
    fn as_geostationary(&self) -> Option<&Geostationary> {
        None
    }
}
