//! Azimuth and elevation of the Sun for an observer.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::ephemeris::{declination, equation_of_time};
use crate::math::{clamp_unit, deg_to_rad, normalize_degrees_360, rad_to_deg, wrap_day_minutes};
use crate::refraction::refraction_correction;

/// Solar position in local horizontal coordinates.
///
/// # Fields
///
/// - `azimuth`: degrees clockwise from North in [0, 360) (0 = N, 90 = E, 180 = S, 270 = W)
/// - `elevation`: apparent elevation in degrees, refraction included
/// - `geometric_elevation`: elevation in degrees before the refraction correction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarPosition {
    /// Azimuth in degrees, clockwise from North
    pub azimuth: f64,
    /// Refraction-corrected elevation in degrees
    pub elevation: f64,
    /// Elevation without atmospheric refraction in degrees
    pub geometric_elevation: f64,
}

impl SolarPosition {
    /// Apparent zenith angle in degrees.
    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }
}

/// True solar time in minutes, wrapped into [0, 1440).
pub(crate) fn true_solar_time(
    local_minutes: f64,
    equation_of_time: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> f64 {
    let solar_time_fix = equation_of_time + 4.0 * longitude - 60.0 * utc_offset_hours;
    wrap_day_minutes(local_minutes + solar_time_fix).0
}

/// Computes the Sun's azimuth and refraction-corrected elevation.
///
/// # Arguments
///
/// * `t` - Time of the observation in Julian centuries since J2000.0
/// * `local_minutes` - The same instant as minutes since local midnight
/// * `latitude` - Observer latitude in degrees (positive North)
/// * `longitude` - Observer longitude in degrees (positive East)
/// * `utc_offset_hours` - Offset of the local clock from UTC in hours
pub fn solar_position(
    t: f64,
    local_minutes: f64,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> SolarPosition {
    let eq_time = equation_of_time(t);
    let theta = deg_to_rad(declination(t));
    let lat = deg_to_rad(latitude);

    let solar_time = true_solar_time(local_minutes, eq_time, longitude, utc_offset_hours);
    let mut hour_angle = solar_time / 4.0 - 180.0;
    if hour_angle < -180.0 {
        hour_angle += 360.0;
    }

    let csz = lat.sin() * theta.sin() + lat.cos() * theta.cos() * deg_to_rad(hour_angle).cos();
    let zenith = rad_to_deg(clamp_unit(csz).acos());
    let zenith_rad = deg_to_rad(zenith);

    let az_denom = lat.cos() * zenith_rad.sin();
    let azimuth = if az_denom.abs() > 0.001 {
        let az_rad = clamp_unit((lat.sin() * zenith_rad.cos() - theta.sin()) / az_denom);
        let azimuth = 180.0 - rad_to_deg(az_rad.acos());
        if hour_angle > 0.0 {
            -azimuth
        } else {
            azimuth
        }
    } else if latitude > 0.0 {
        // Sun on the local vertical or observer at a pole
        180.0
    } else {
        0.0
    };

    let geometric_elevation = 90.0 - zenith;
    let elevation = 90.0 - (zenith - refraction_correction(geometric_elevation));

    SolarPosition {
        azimuth: normalize_degrees_360(azimuth),
        elevation,
        geometric_elevation,
    }
}
