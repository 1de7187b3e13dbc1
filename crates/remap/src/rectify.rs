//! Antimeridian longitude rectification.
//!
//! A swath row that crosses the dateline (e.g. 165 to -165 degrees) has a
//! spurious 360-degree jump in its longitude representation. Rectification
//! shifts the trailing segment of each row by whole turns so the row varies
//! monotonically (165 to 195 in the example), which keeps a dynamically
//! fitted extent tight instead of spanning nearly the whole globe.

use num_traits::{Float, NumCast};

/// Threshold in degrees above which an adjacent-sample jump is treated as
/// an antimeridian wraparound rather than real swath curvature.
const DISCONTINUITY_DEG: f64 = 180.0;

/// Check whether any row of the swath wraps across the antimeridian.
///
/// `lons` is a row-major 2-D array with rows of length `width`; a jump
/// larger than 180 degrees between adjacent samples in scan order marks a
/// crossing.
pub fn crosses_antimeridian<F: Float>(lons: &[F], width: usize) -> bool {
    if width < 2 {
        return false;
    }
    let threshold = F::from(DISCONTINUITY_DEG).unwrap_or_else(F::nan);
    lons.chunks_exact(width)
        .any(|row| row.windows(2).any(|w| (w[1] - w[0]).abs() > threshold))
}

/// Rectify each row of a longitude array in place.
///
/// After the call every row is monotonic-representable: wherever adjacent
/// samples jumped by more than 180 degrees, the trailing segment has been
/// shifted by +/-360 degrees. Rows without a crossing are untouched.
/// Non-finite samples pass through unchanged and do not affect the offset.
pub fn rectify_longitudes<F: Float + NumCast>(lons: &mut [F], width: usize) {
    if width < 2 {
        return;
    }
    let threshold = F::from(DISCONTINUITY_DEG).unwrap_or_else(F::nan);
    let full_turn = F::from(360.0).unwrap_or_else(F::nan);

    for row in lons.chunks_exact_mut(width) {
        let mut offset = F::zero();
        let mut prev = row[0];
        for lon in row.iter_mut().skip(1) {
            let raw = *lon;
            if !raw.is_finite() {
                continue;
            }
            if prev.is_finite() {
                let jump = raw - prev;
                if jump > threshold {
                    offset = offset - full_turn;
                } else if jump < -threshold {
                    offset = offset + full_turn;
                }
            }
            prev = raw;
            *lon = raw + offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_crossing_is_noop() {
        let original = vec![-95.0f64, -90.0, -85.0, -80.0, -94.0, -89.0, -84.0, -79.0];
        let mut lons = original.clone();
        assert!(!crosses_antimeridian(&lons, 4));
        rectify_longitudes(&mut lons, 4);
        assert_eq!(lons, original, "rows without a crossing must not change");
    }

    #[test]
    fn test_dateline_row_becomes_monotonic() {
        let mut lons = vec![165.0f64, 175.0, -175.0, -165.0];
        assert!(crosses_antimeridian(&lons, 4));
        rectify_longitudes(&mut lons, 4);
        assert_eq!(lons, vec![165.0, 175.0, 185.0, 195.0]);
    }

    #[test]
    fn test_westward_scan_rectified_down() {
        // Scanning westward across the dateline: -165 .. 165 becomes
        // -165 .. -195 (shift the trailing segment down a turn).
        let mut lons = vec![-165.0f64, -175.0, 175.0, 165.0];
        rectify_longitudes(&mut lons, 4);
        assert_eq!(lons, vec![-165.0, -175.0, -185.0, -195.0]);
    }

    #[test]
    fn test_rows_rectified_independently() {
        let mut lons = vec![
            170.0f64, -178.0, // crossing row
            -10.0, -8.0, // plain row
        ];
        rectify_longitudes(&mut lons, 2);
        assert_eq!(lons, vec![170.0, 182.0, -10.0, -8.0]);
    }

    #[test]
    fn test_nan_samples_pass_through() {
        let mut lons = vec![175.0f64, f64::NAN, -177.0, -169.0];
        rectify_longitudes(&mut lons, 4);
        assert!(lons[1].is_nan());
        // 175 -> -177 is a wraparound even with the gap in between
        assert_eq!(lons[2], 183.0);
        assert_eq!(lons[3], 191.0);
    }

    #[test]
    fn test_f32_supported() {
        let mut lons = vec![165.0f32, 175.0, -175.0, -165.0];
        assert!(crosses_antimeridian(&lons, 4));
        rectify_longitudes(&mut lons, 4);
        assert_eq!(lons, vec![165.0, 175.0, 185.0, 195.0]);
    }
}
