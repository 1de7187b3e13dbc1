//! Geostationary satellite projection.
//!
//! Used for GOES-R, Meteosat and Himawari imagery. The satellite views
//! Earth from a fixed position above the equator; projection coordinates
//! are scan angles scaled by the perspective height, giving meter-like
//! units on the fixed grid.
//!
//! Reference: GOES-R Product Definition and Users' Guide (PUG) Volume 4

use swath_common::{SwathError, SwathResult};

use crate::Transform;

/// Geostationary projection parameters.
///
/// Forward maps geographic (lon/lat degrees) to fixed-grid (x, y) in
/// meters; points beyond the visible limb yield non-finite output.
#[derive(Debug, Clone)]
pub struct Geostationary {
    /// Satellite height above Earth center (meters)
    pub h: f64,
    /// Perspective point height above Earth surface (meters)
    pub perspective_point_height: f64,
    /// Semi-major axis of Earth ellipsoid (meters)
    pub req: f64,
    /// Semi-minor axis of Earth ellipsoid (meters)
    pub rpol: f64,
    /// Longitude of satellite nadir point (radians)
    pub lambda_0: f64,
    /// Sweep angle axis ("x" for GOES-R, "y" for Meteosat/Himawari)
    pub sweep_x: bool,
}

impl Geostationary {
    /// Create a new geostationary projection.
    ///
    /// # Arguments
    /// * `perspective_point_height` - Satellite altitude above Earth surface (meters)
    /// * `semi_major_axis` - Earth equatorial radius (meters)
    /// * `semi_minor_axis` - Earth polar radius (meters)
    /// * `longitude_origin_deg` - Satellite longitude (degrees, negative for west)
    /// * `sweep_x` - true for GOES-R style x-axis sweep, false for Meteosat/Himawari
    pub fn new(
        perspective_point_height: f64,
        semi_major_axis: f64,
        semi_minor_axis: f64,
        longitude_origin_deg: f64,
        sweep_x: bool,
    ) -> SwathResult<Self> {
        if !(perspective_point_height > 0.0) || !perspective_point_height.is_finite() {
            return Err(SwathError::invalid_projection(format!(
                "satellite height must be positive, got {perspective_point_height}"
            )));
        }
        if !(semi_major_axis > 0.0) || !(semi_minor_axis > 0.0) {
            return Err(SwathError::invalid_projection(
                "ellipsoid semi-axes must be positive",
            ));
        }
        if semi_minor_axis > semi_major_axis {
            return Err(SwathError::invalid_projection(
                "semi-minor axis must not exceed semi-major axis",
            ));
        }
        Ok(Self {
            h: perspective_point_height + semi_major_axis,
            perspective_point_height,
            req: semi_major_axis,
            rpol: semi_minor_axis,
            lambda_0: longitude_origin_deg.to_radians(),
            sweep_x,
        })
    }

    /// Create a projection with the ellipsoid given as semi-major axis and
    /// inverse flattening (the `rf` form of SEVIRI-style parameter sets).
    pub fn from_flattening(
        perspective_point_height: f64,
        semi_major_axis: f64,
        inverse_flattening: f64,
        longitude_origin_deg: f64,
        sweep_x: bool,
    ) -> SwathResult<Self> {
        if !(inverse_flattening > 1.0) {
            return Err(SwathError::invalid_projection(format!(
                "inverse flattening must exceed 1, got {inverse_flattening}"
            )));
        }
        let semi_minor_axis = semi_major_axis * (1.0 - 1.0 / inverse_flattening);
        Self::new(
            perspective_point_height,
            semi_major_axis,
            semi_minor_axis,
            longitude_origin_deg,
            sweep_x,
        )
    }

    /// Create projection for GOES-16 (GOES-East at 75 W).
    pub fn goes16() -> Self {
        // GRS80 ellipsoid; constructor cannot fail on these constants
        Self::new(35786023.0, 6378137.0, 6356752.31414, -75.0, true)
            .expect("GOES-16 constants are valid")
    }
}

impl Transform for Geostationary {
    /// Convert geographic coordinates to fixed-grid (x, y) in meters.
    ///
    /// Based on GOES-R PUG Volume 4, Section 4.2.8, with the sweep-axis
    /// branch matching the `geos` projection convention.
    fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat_rad = lat_deg.to_radians();
        let dlon = lon_deg.to_radians() - self.lambda_0;

        // Geocentric latitude (accounting for Earth's oblateness)
        let phi_c = ((self.rpol / self.req).powi(2) * lat_rad.tan()).atan();

        // Eccentricity squared
        let e2 = 1.0 - (self.rpol / self.req).powi(2);

        // Radius from Earth center to surface point
        let rc = self.rpol / (1.0 - e2 * phi_c.cos().powi(2)).sqrt();

        // Earth-fixed coordinates of the surface point
        let vx = rc * phi_c.cos() * dlon.cos();
        let vy = rc * phi_c.cos() * dlon.sin();
        let vz = rc * phi_c.sin();

        let tmp = self.h - vx;

        // Limb check: the satellite must see the point directly, not
        // through the Earth.
        if tmp * vx - vy * vy - vz * vz * (self.req / self.rpol).powi(2) < 0.0 {
            return (f64::NAN, f64::NAN);
        }

        let (x_ang, y_ang) = if self.sweep_x {
            ((vy / vz.hypot(tmp)).atan(), (vz / tmp).atan())
        } else {
            ((vy / tmp).atan(), (vz / vy.hypot(tmp)).atan())
        };

        (
            x_ang * self.perspective_point_height,
            y_ang * self.perspective_point_height,
        )
    }

    /// Convert fixed-grid (x, y) in meters back to geographic coordinates.
    ///
    /// Returns non-finite coordinates when the view ray misses the Earth.
    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let x_ang = x / self.perspective_point_height;
        let y_ang = y / self.perspective_point_height;

        // View-ray direction (-1, vy, vz) from the satellite at (h, 0, 0)
        let (vy, vz) = if self.sweep_x {
            let vz = y_ang.tan();
            (x_ang.tan() * 1.0f64.hypot(vz), vz)
        } else {
            let vy = x_ang.tan();
            (vy, y_ang.tan() * 1.0f64.hypot(vy))
        };

        // Quadratic for the distance to the Earth surface along the ray
        let a = 1.0 + vy * vy + (vz * self.req / self.rpol).powi(2);
        let b = -2.0 * self.h;
        let c = self.h * self.h - self.req * self.req;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (f64::NAN, f64::NAN); // Ray points to space
        }

        let k = (-b - discriminant.sqrt()) / (2.0 * a);

        let px = self.h - k;
        let py = k * vy;
        let pz = k * vz;

        let lon = self.lambda_0 + py.atan2(px);
        let lat = ((self.req / self.rpol).powi(2) * pz / px.hypot(py)).atan();

        (lon.to_degrees(), lat.to_degrees())
    }

    fn as_geostationary(&self) -> Option<&Geostationary> {
        Some(self)
    }
}
