use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Converts an angle in degrees to radians (`π·x/180`).
pub fn deg_to_rad(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts an angle in radians to degrees (`180·x/π`).
pub fn rad_to_deg(radians: f64) -> f64 {
    180.0 * radians / PI
}

/// Normalizes an angle in degrees to the range [0, 360).
///
/// This function takes any angle value (positive or negative) and converts it
/// to an equivalent angle in the range [0, 360).
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let mut limited = degrees % 360.0;
    if limited < 0.0 {
        limited += 360.0;
    }
    if limited >= 360.0 {
        limited -= 360.0;
    }
    limited
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Wraps a minutes-of-day value into [0, 1440) by whole days.
///
/// Returns the wrapped value together with the number of days that were
/// added (negative when days were removed), so callers can move a day
/// number the opposite way.
pub(crate) fn wrap_day_minutes(minutes: f64) -> (f64, i32) {
    let mut days = (minutes / MINUTES_PER_DAY).floor();
    let mut wrapped = minutes - days * MINUTES_PER_DAY;
    // Rounding can land exactly on either edge
    if wrapped >= MINUTES_PER_DAY {
        wrapped -= MINUTES_PER_DAY;
        days += 1.0;
    } else if wrapped < 0.0 {
        wrapped += MINUTES_PER_DAY;
        days -= 1.0;
    }
    (wrapped, -days as i32)
}

/// Clamps an `acos`/`asin` argument into [-1, 1].
pub(crate) fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
