//! Low-precision solar ephemeris.
//!
//! Every function takes `t`, the time in Julian centuries since J2000.0
//! (see [`crate::time::julian_centuries`]), and returns degrees unless
//! noted otherwise. The series are Meeus' low-precision solar theory as
//! used by the NOAA solar calculator, good to roughly one minute of time
//! for dates within a few centuries of 2000.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{deg_to_rad, normalize_degrees_360, polynomial, rad_to_deg};

/// Mean obliquity of the ecliptic, arc-seconds past 23°26', as a cubic in `t`.
const MEAN_OBLIQUITY_SECONDS: [f64; 4] = [21.448, -46.8150, -0.00059, 0.001813];

/// Longitude of the ascending node of the Moon's orbit, Ω.
fn moon_ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, L0, in [0, 360).
pub fn geometric_mean_longitude(t: f64) -> f64 {
    normalize_degrees_360(280.46646 + t * (36000.76983 + t * 0.0003032))
}

/// Geometric mean anomaly of the Sun, M (not normalized).
pub fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (unitless).
pub fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center of the Sun, C.
pub fn equation_of_center(t: f64) -> f64 {
    let m = deg_to_rad(geometric_mean_anomaly(t));
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// True longitude of the Sun, L0 + C.
pub fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// True anomaly of the Sun, M + C.
pub fn true_anomaly(t: f64) -> f64 {
    geometric_mean_anomaly(t) + equation_of_center(t)
}

/// Sun-Earth distance in astronomical units.
pub fn radius_vector(t: f64) -> f64 {
    let v = true_anomaly(t);
    let e = orbit_eccentricity(t);
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * deg_to_rad(v).cos())
}

/// Apparent longitude of the Sun, true longitude corrected for nutation
/// and aberration.
pub fn apparent_longitude(t: f64) -> f64 {
    let omega = moon_ascending_node(t);
    true_longitude(t) - 0.00569 - 0.00478 * deg_to_rad(omega).sin()
}

/// Mean obliquity of the ecliptic, ε0.
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&MEAN_OBLIQUITY_SECONDS, t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, ε.
pub fn obliquity_correction(t: f64) -> f64 {
    let omega = moon_ascending_node(t);
    mean_obliquity(t) + 0.00256 * deg_to_rad(omega).cos()
}

/// Apparent right ascension of the Sun, α, in (-180, 180].
pub fn right_ascension(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let lambda = deg_to_rad(apparent_longitude(t));
    rad_to_deg((epsilon.cos() * lambda.sin()).atan2(lambda.cos()))
}

/// Apparent declination of the Sun, δ.
pub fn declination(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let lambda = deg_to_rad(apparent_longitude(t));
    rad_to_deg((epsilon.sin() * lambda.sin()).asin())
}

/// Equation of time in minutes: true solar time minus mean solar time.
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_correction(t);
    let l0 = deg_to_rad(geometric_mean_longitude(t));
    let e = orbit_eccentricity(t);
    let m = deg_to_rad(geometric_mean_anomaly(t));

    let y = (deg_to_rad(epsilon) / 2.0).tan();
    let y = y * y;

    let sin2l0 = (2.0 * l0).sin();
    let sinm = m.sin();
    let cos2l0 = (2.0 * l0).cos();
    let sin4l0 = (4.0 * l0).sin();
    let sin2m = (2.0 * m).sin();

    let etime =
        y * sin2l0 - 2.0 * e * sinm + 4.0 * e * y * sinm * cos2l0 - 0.5 * y * y * sin4l0 - 1.25 * e * e * sin2m;
    rad_to_deg(etime) * 4.0
}

/// All ephemeris quantities for one instant.
///
/// A plain value computed in one go by [`SolarEphemeris::at`]; nothing is
/// cached between instants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarEphemeris {
    /// Julian centuries since J2000.0 this sample was computed for
    pub t: f64,
    /// Geometric mean longitude, degrees in [0, 360)
    pub mean_longitude: f64,
    /// Geometric mean anomaly, degrees
    pub mean_anomaly: f64,
    /// Orbital eccentricity of Earth
    pub eccentricity: f64,
    /// Equation of center, degrees
    pub equation_of_center: f64,
    /// True longitude, degrees
    pub true_longitude: f64,
    /// True anomaly, degrees
    pub true_anomaly: f64,
    /// Sun-Earth distance, AU
    pub radius_vector: f64,
    /// Apparent longitude, degrees
    pub apparent_longitude: f64,
    /// Mean obliquity of the ecliptic, degrees
    pub mean_obliquity: f64,
    /// Corrected obliquity of the ecliptic, degrees
    pub obliquity: f64,
    /// Right ascension, degrees
    pub right_ascension: f64,
    /// Declination, degrees
    pub declination: f64,
    /// Equation of time, minutes
    pub equation_of_time: f64,
}

impl SolarEphemeris {
    /// Evaluates the whole chain for time `t` in Julian centuries.
    pub fn at(t: f64) -> Self {
        Self {
            t,
            mean_longitude: geometric_mean_longitude(t),
            mean_anomaly: geometric_mean_anomaly(t),
            eccentricity: orbit_eccentricity(t),
            equation_of_center: equation_of_center(t),
            true_longitude: true_longitude(t),
            true_anomaly: true_anomaly(t),
            radius_vector: radius_vector(t),
            apparent_longitude: apparent_longitude(t),
            mean_obliquity: mean_obliquity(t),
            obliquity: obliquity_correction(t),
            right_ascension: right_ascension(t),
            declination: declination(t),
            equation_of_time: equation_of_time(t),
        }
    }
}
