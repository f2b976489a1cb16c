//! Empirical atmospheric refraction near the horizon.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{deg_to_rad, polynomial};

/// Low-altitude refraction, arc-seconds, as a quartic in elevation (degrees).
const LOW_ALTITUDE: [f64; 5] = [1735.0, -518.2, 103.4, -12.79, 0.711];

/// Refraction correction in degrees for an exoatmospheric elevation.
///
/// The result is added to the geometric elevation (or subtracted from the
/// zenith angle) to obtain the apparent position. Three regimes are used:
///
/// - above 85° no correction is applied,
/// - above 5° a series in `1/tan(e)`,
/// - above -0.575° a quartic polynomial in `e`,
/// - otherwise `-20.774/tan(e)`.
///
/// The curve is not continuous at the regime boundaries.
pub fn refraction_correction(elevation: f64) -> f64 {
    if elevation > 85.0 {
        return 0.0;
    }

    let te = deg_to_rad(elevation).tan();
    let arc_seconds = if elevation > 5.0 {
        58.1 / te - 0.07 / (te * te * te) + 0.000086 / (te * te * te * te * te)
    } else if elevation > -0.575 {
        polynomial(&LOW_ALTITUDE, elevation)
    } else {
        -20.774 / te
    };
    arc_seconds / 3600.0
}
