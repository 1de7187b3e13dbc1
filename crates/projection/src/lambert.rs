//! Lambert Conformal Conic projection.
//!
//! Spherical-earth conic projection, commonly used for regional
//! meteorological grids (NWS LCC composites, HRRR-style sectors).
//! It maps a cone tangent or secant to the Earth's surface onto a flat
//! plane. Projection coordinates are meters with the false origin at the
//! intersection of the central meridian and the reference latitude.

use std::f64::consts::PI;

use swath_common::{SwathError, SwathResult};

use crate::Transform;

/// Lambert Conformal Conic projection parameters.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians
    lon0: f64,
    /// Earth radius (meters)
    earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the reference latitude
    rho0: f64,
}

impl LambertConformal {
    /// Create a new Lambert Conformal projection.
    ///
    /// # Arguments
    /// * `lon0_deg` - Central meridian (degrees)
    /// * `lat0_deg` - Reference latitude, where y = 0 (degrees)
    /// * `latin1_deg` - First standard parallel (degrees)
    /// * `latin2_deg` - Second standard parallel (degrees)
    /// * `earth_radius` - Sphere radius (meters)
    ///
    /// Standard parallels on the equator are rejected: the cone constant
    /// degenerates to zero and no conic mapping exists.
    pub fn new(
        lon0_deg: f64,
        lat0_deg: f64,
        latin1_deg: f64,
        latin2_deg: f64,
        earth_radius: f64,
    ) -> SwathResult<Self> {
        if !(earth_radius > 0.0) {
            return Err(SwathError::invalid_projection(format!(
                "earth radius must be positive, got {earth_radius}"
            )));
        }

        let to_rad = PI / 180.0;
        let lat0 = lat0_deg * to_rad;
        let lon0 = lon0_deg * to_rad;
        let latin1 = latin1_deg * to_rad;
        let latin2 = latin2_deg * to_rad;

        // Compute cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        if n.abs() < 1e-10 {
            return Err(SwathError::invalid_projection(
                "standard parallels on the equator give a degenerate cone",
            ));
        }

        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;
        let rho0 = earth_radius * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Ok(Self {
            lon0,
            earth_radius,
            n,
            f,
            rho0,
        })
    }

    /// Normalize a longitude difference to [-pi, pi].
    fn normalize_dlon(mut dlon: f64) -> f64 {
        while dlon > PI {
            dlon -= 2.0 * PI;
        }
        while dlon < -PI {
            dlon += 2.0 * PI;
        }
        dlon
    }
}

impl Transform for LambertConformal {
    fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let to_rad = PI / 180.0;
        let lat = lat_deg * to_rad;
        let lon = lon_deg * to_rad;

        let dlon = Self::normalize_dlon(lon - self.lon0);

        // Radial distance from the cone apex for this latitude. The pole
        // opposite the cone is unprojectable: rho diverges.
        let rho = self.earth_radius * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n);
        if !rho.is_finite() {
            return (f64::NAN, f64::NAN);
        }

        let theta = self.n * dlon;
        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let to_deg = 180.0 / PI;

        let dy = self.rho0 - y;
        let mut rho = (x * x + dy * dy).sqrt();
        if self.n < 0.0 {
            rho = -rho;
        }

        if rho == 0.0 {
            // Cone apex: the pole on the cone's side.
            let lat = if self.n > 0.0 { 90.0 } else { -90.0 };
            return (self.lon0 * to_deg, lat);
        }

        let theta = (x / dy).atan();
        let lat = 2.0 * ((self.earth_radius * self.f / rho).powf(1.0 / self.n)).atan() - PI / 2.0;
        let lon = self.lon0 + theta / self.n;

        (lon * to_deg, lat * to_deg)
    }
}
