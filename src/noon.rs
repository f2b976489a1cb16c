//! Local time of solar transit.

use crate::ephemeris::equation_of_time;
use crate::math::{wrap_day_minutes, MINUTES_PER_DAY};
use crate::time::julian_centuries;

/// Local time of solar noon in minutes since local midnight, in [0, 1440).
///
/// The equation of time is first evaluated at the approximate moment of
/// transit over `longitude` (`julian_day - longitude/360`) and then once
/// more at the corrected instant.
pub fn solar_noon(julian_day: f64, longitude: f64, utc_offset_hours: f64) -> f64 {
    let seed = julian_centuries(julian_day - longitude / 360.0);
    let utc_noon = 720.0 - longitude * 4.0 - equation_of_time(seed);

    let refined = julian_centuries(julian_day + utc_noon / MINUTES_PER_DAY);
    let utc_noon = 720.0 - longitude * 4.0 - equation_of_time(refined);

    wrap_day_minutes(utc_noon + utc_offset_hours * 60.0).0
}
