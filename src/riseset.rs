//! Sunrise and sunset, including the circumpolar fallback.
//!
//! The time of a horizon crossing comes from the hour angle at which the
//! Sun's upper limb touches the horizon (zenith 90.833°: the mean solar
//! radius plus standard refraction). When that hour angle has no real
//! solution the day has no sunrise or no sunset, and [`sunrise_set`] walks
//! day by day to the nearest day that has one.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::ephemeris::{declination, equation_of_time};
use crate::math::{deg_to_rad, rad_to_deg, wrap_day_minutes, MINUTES_PER_DAY};
use crate::position::solar_position;
use crate::time::{day_of_year, julian_centuries};
use crate::SolarError;

/// Zenith angle of the Sun's center at apparent sunrise and sunset.
pub const SUNRISE_ZENITH: f64 = 90.833;

/// Azimuth reported when the requested day has no event of its own.
pub const NO_EVENT_AZIMUTH: f64 = -1.0;

/// Latitude beyond which the polar season test applies.
const POLAR_LATITUDE: f64 = 66.4;

/// Which horizon crossing to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Upper limb appears above the horizon
    Sunrise,
    /// Upper limb disappears below the horizon
    Sunset,
}

/// Result of a horizon-crossing calculation for a single day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SolarEventResult {
    /// The crossing happens; the payload depends on the function returning it
    Occurs(f64),
    /// Sun stays above the horizon all day (midnight sun)
    AllDay,
    /// Sun stays below the horizon all day (polar night)
    AllNight,
}

impl SolarEventResult {
    /// The payload of [`SolarEventResult::Occurs`], `None` otherwise.
    pub fn value(self) -> Option<f64> {
        match self {
            SolarEventResult::Occurs(value) => Some(value),
            _ => None,
        }
    }
}

/// Direction of the day-by-day search for the nearest event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    /// Towards later days
    Forward,
    /// Towards earlier days
    Backward,
}

impl SearchDirection {
    fn step(self) -> f64 {
        match self {
            SearchDirection::Forward => 1.0,
            SearchDirection::Backward => -1.0,
        }
    }

    /// Short label used in formatted output, `next` or `prev`.
    pub fn label(self) -> &'static str {
        match self {
            SearchDirection::Forward => "next",
            SearchDirection::Backward => "prev",
        }
    }
}

/// A sunrise or sunset in local time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RiseSet {
    /// Julian Day (local midnight convention, ends in .5) the event falls on
    pub julian_day: f64,
    /// Minutes since local midnight, in [0, 1440)
    pub local_minutes: f64,
    /// Azimuth of the Sun at the event in [0, 360), or [`NO_EVENT_AZIMUTH`]
    pub azimuth: f64,
    /// Set when the requested day had no event and a neighbouring day was used
    pub adjacent: Option<SearchDirection>,
}

impl RiseSet {
    /// True if the event happened on the requested day.
    pub fn occurred(&self) -> bool {
        self.adjacent.is_none()
    }
}

/// Event found on another day by [`next_prev_rise_set`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdjacentEvent {
    /// Julian Day the event falls on in local time
    pub julian_day: f64,
    /// Minutes since local midnight, in [0, 1440)
    pub local_minutes: f64,
    /// Number of day steps taken from the starting day
    pub days_scanned: u32,
}

/// Hour angle of sunrise in degrees for the given latitude and solar
/// declination.
///
/// Returns [`SolarEventResult::AllDay`] or [`SolarEventResult::AllNight`]
/// when the Sun does not cross the horizon.
pub fn hour_angle_sunrise(latitude: f64, declination: f64) -> SolarEventResult {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let cos_ha = deg_to_rad(SUNRISE_ZENITH).cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();

    if cos_ha < -1.0 {
        SolarEventResult::AllDay
    } else if cos_ha > 1.0 || !cos_ha.is_finite() {
        SolarEventResult::AllNight
    } else {
        SolarEventResult::Occurs(rad_to_deg(cos_ha.acos()))
    }
}

/// One-step estimate of the event time in minutes after 00:00 UTC of the
/// day `julian_day`, using the ephemeris evaluated at `julian_day` itself.
pub fn sunrise_set_utc(event: Event, julian_day: f64, latitude: f64, longitude: f64) -> SolarEventResult {
    let t = julian_centuries(julian_day);
    let eq_time = equation_of_time(t);

    match hour_angle_sunrise(latitude, declination(t)) {
        SolarEventResult::Occurs(hour_angle) => {
            let hour_angle = match event {
                Event::Sunrise => hour_angle,
                Event::Sunset => -hour_angle,
            };
            SolarEventResult::Occurs(720.0 - 4.0 * (longitude + hour_angle) - eq_time)
        }
        other => other,
    }
}

/// Refined UTC estimate: the one-step estimate recomputed at the instant
/// it predicted.
fn refined_utc(event: Event, julian_day: f64, latitude: f64, longitude: f64) -> Option<f64> {
    let first = sunrise_set_utc(event, julian_day, latitude, longitude).value()?;
    sunrise_set_utc(event, julian_day + first / MINUTES_PER_DAY, latitude, longitude).value()
}

/// True if the given day falls in the local summer of a polar latitude.
fn polar_summer(latitude: f64, julian_day: f64) -> bool {
    let doy = day_of_year(julian_day);
    (latitude > POLAR_LATITUDE && doy > 79 && doy < 267) || (latitude < -POLAR_LATITUDE && (doy < 83 || doy > 263))
}

/// Computes sunrise or sunset for the day starting at `julian_day`
/// (local midnight convention, `.5` fraction).
///
/// If the day has no such event the search for the nearest one goes
/// backward for sunrise and forward for sunset in polar summer, and the
/// other way round otherwise. The returned azimuth is then
/// [`NO_EVENT_AZIMUTH`] and `adjacent` records the search direction.
///
/// # Errors
///
/// [`SolarError::SearchLimitExceeded`] when no event is found within
/// `max_search_days` days.
pub fn sunrise_set(
    event: Event,
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    max_search_days: u32,
) -> Result<RiseSet, SolarError> {
    if let Some(utc_minutes) = refined_utc(event, julian_day, latitude, longitude) {
        let local = utc_minutes + utc_offset_hours * 60.0;
        let t = julian_centuries(julian_day + utc_minutes / MINUTES_PER_DAY);
        let azimuth = solar_position(t, local, latitude, longitude, utc_offset_hours).azimuth;
        let (local_minutes, days_added) = wrap_day_minutes(local);

        return Ok(RiseSet {
            julian_day: julian_day - f64::from(days_added),
            local_minutes,
            azimuth,
            adjacent: None,
        });
    }

    let direction = match (event, polar_summer(latitude, julian_day)) {
        (Event::Sunrise, true) | (Event::Sunset, false) => SearchDirection::Backward,
        (Event::Sunrise, false) | (Event::Sunset, true) => SearchDirection::Forward,
    };
    log::debug!(
        "no {:?} on julian day {} at latitude {}, searching {:?}",
        event,
        julian_day,
        latitude,
        direction
    );

    let found = next_prev_rise_set(
        direction,
        event,
        julian_day,
        latitude,
        longitude,
        utc_offset_hours,
        max_search_days,
    )?;
    Ok(RiseSet {
        julian_day: found.julian_day,
        local_minutes: found.local_minutes,
        azimuth: NO_EVENT_AZIMUTH,
        adjacent: Some(direction),
    })
}

/// Steps day by day from `julian_day` in `direction` until a day with the
/// requested event is found, and returns its local day and time.
///
/// The starting day itself is checked first. The time is the one-step
/// estimate of [`sunrise_set_utc`].
///
/// # Errors
///
/// [`SolarError::SearchLimitExceeded`] after `max_search_days` steps
/// without an event, which happens for latitudes beyond ±90° or at the
/// poles themselves.
pub fn next_prev_rise_set(
    direction: SearchDirection,
    event: Event,
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    max_search_days: u32,
) -> Result<AdjacentEvent, SolarError> {
    let mut day = julian_day;
    let mut days_scanned = 0;

    let utc_minutes = loop {
        if let SolarEventResult::Occurs(minutes) = sunrise_set_utc(event, day, latitude, longitude) {
            break minutes;
        }
        if days_scanned >= max_search_days {
            log::warn!(
                "no {:?} within {} days of julian day {} at latitude {}",
                event,
                max_search_days,
                julian_day,
                latitude
            );
            return Err(SolarError::SearchLimitExceeded { days: max_search_days });
        }
        day += direction.step();
        days_scanned += 1;
        log::trace!("scanning julian day {} for {:?}", day, event);
    };

    let (local_minutes, days_added) = wrap_day_minutes(utc_minutes + utc_offset_hours * 60.0);
    Ok(AdjacentEvent {
        julian_day: day - f64::from(days_added),
        local_minutes,
        days_scanned,
    })
}
