//! # Solar Calculator
//!
//! Sunrise, sunset, solar noon and the Sun's current position from the
//! NOAA solar calculator equations.
//!
//! The ephemeris is Meeus' low-precision solar theory, good to about a
//! minute of time for dates within a few centuries of 2000 and latitudes
//! between the polar circles. Closer to the poles the same equations are
//! used, and a day on which the Sun never rises or never sets is answered
//! with the nearest event on a neighbouring day.
//!
//! ## Basic Usage
//!
//! ```
//! use solar_calculator::{CivilMoment, GeoLocation, SunCalculator, Zone};
//!
//! let moment = CivilMoment::new(2024, 3, 20, 12, 0, 0.0).unwrap();
//! let calc = SunCalculator::new(moment, GeoLocation::MANHATTAN)
//!     .with_zone(Zone::parse("America/New_York").unwrap());
//!
//! let times = calc.calculate().unwrap();
//! assert_eq!(times.utc_offset_hours, -4.0);
//! println!("Sunrise: {}", times.sunrise_time_date().unwrap()); // 06:58:23 20Mar2024
//! println!("Sunset:  {}", times.sunset_time_date().unwrap());  // 19:08:38 20Mar2024
//! println!("Azimuth: {:.2}°", times.position.azimuth);
//! ```
//!
//! The solvers are also available one by one, taking Julian Days, degrees
//! and UTC offsets in hours:
//!
//! ```
//! use solar_calculator::riseset::{sunrise_set, Event};
//! use solar_calculator::time::date_to_julian_day;
//!
//! // Tromsø at the winter solstice: no sunrise, so the next one is reported
//! let jd = date_to_julian_day(2024, 12, 21.0);
//! let rise = sunrise_set(Event::Sunrise, jd, 69.6492, 18.9553, 1.0, 366).unwrap();
//! assert!(!rise.occurred());
//! assert!(rise.julian_day > jd);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod ephemeris;
pub mod format;
mod math;
pub mod noon;
pub mod position;
pub mod refraction;
pub mod riseset;
pub mod time;
mod types;
pub mod zone;

#[cfg(test)]
mod tests;

pub use format::TimeDate;
pub use math::{deg_to_rad, rad_to_deg, MINUTES_PER_DAY};
pub use position::SolarPosition;
pub use riseset::{AdjacentEvent, Event, RiseSet, SearchDirection, SolarEventResult, NO_EVENT_AZIMUTH};
pub use types::{CivilMoment, GeoLocation, SolarError};
pub use zone::{Zone, DEFAULT_TIME_ZONE};

use ephemeris::SolarEphemeris;
use format::{TimeFormat, TimeOfDay};
use noon::solar_noon;
use position::solar_position;
use riseset::sunrise_set;
use time::{check_julian_day, julian_centuries};

/// Default ceiling on the day-by-day search for the nearest sunrise or
/// sunset when the requested day has none.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 366;

/// Tunables of [`SunCalculator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Maximum number of days stepped over looking for an event
    pub max_search_days: u32,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            max_search_days: DEFAULT_MAX_SEARCH_DAYS,
        }
    }
}

/// Computes the solar events of one civil day at one place.
///
/// The calculator is an immutable description of the question; every call
/// to [`SunCalculator::calculate`] recomputes from it.
///
/// # Example
///
/// ```
/// use solar_calculator::{CivilMoment, GeoLocation, SunCalculator, Zone};
///
/// let oslo = GeoLocation::new(59.9139, 10.7522).unwrap();
/// let moment = CivilMoment::date(2024, 6, 21).unwrap();
/// let times = SunCalculator::new(moment, oslo)
///     .with_zone(Zone::parse("Europe/Oslo").unwrap())
///     .calculate()
///     .unwrap();
///
/// assert!(times.sunrise.local_minutes < times.solar_noon_minutes);
/// assert!(times.solar_noon_minutes < times.sunset.local_minutes);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SunCalculator {
    moment: CivilMoment,
    location: GeoLocation,
    zone: Zone,
    options: CalculatorOptions,
}

impl SunCalculator {
    /// Creates a calculator reading `moment` in [`DEFAULT_TIME_ZONE`].
    pub fn new(moment: CivilMoment, location: GeoLocation) -> Self {
        Self {
            moment,
            location,
            zone: Zone::default(),
            options: CalculatorOptions::default(),
        }
    }

    /// Reads the civil moment in another zone.
    pub fn with_zone(self, zone: impl Into<Zone>) -> Self {
        Self {
            zone: zone.into(),
            ..self
        }
    }

    /// Replaces the calculator options.
    pub fn with_options(self, options: CalculatorOptions) -> Self {
        Self { options, ..self }
    }

    /// The civil moment the calculation is for
    pub fn moment(&self) -> &CivilMoment {
        &self.moment
    }

    /// The observer location
    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// The zone local times are read in
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Runs the calculation.
    ///
    /// # Errors
    ///
    /// - [`SolarError::DateOutOfRange`] if the date falls outside the
    ///   supported Julian Day window
    /// - [`SolarError::InvalidDate`] if a named zone cannot resolve the date
    /// - [`SolarError::OffsetOutOfRange`] if a fixed zone's offset is not
    ///   finite or not within ±24 hours
    /// - [`SolarError::SearchLimitExceeded`] if a polar day or night lasts
    ///   longer than [`CalculatorOptions::max_search_days`]
    pub fn calculate(&self) -> Result<SunTimes, SolarError> {
        let utc_offset_hours = self.zone.utc_offset_hours(&self.moment)?;
        let julian_day = check_julian_day(self.moment.julian_day())?;
        let local_minutes = self.moment.minutes_since_midnight();
        let latitude = self.location.latitude();
        let longitude = self.location.longitude();

        let instant = julian_day + local_minutes / MINUTES_PER_DAY - utc_offset_hours / 24.0;
        let t = julian_centuries(instant);
        log::debug!(
            "calculating julian day {} at {} local minutes, utc offset {} h",
            julian_day,
            local_minutes,
            utc_offset_hours
        );

        let max_days = self.options.max_search_days;
        Ok(SunTimes {
            julian_day,
            local_minutes,
            utc_offset_hours,
            ephemeris: SolarEphemeris::at(t),
            position: solar_position(t, local_minutes, latitude, longitude, utc_offset_hours),
            solar_noon_minutes: solar_noon(julian_day, longitude, utc_offset_hours),
            sunrise: sunrise_set(Event::Sunrise, julian_day, latitude, longitude, utc_offset_hours, max_days)?,
            sunset: sunrise_set(Event::Sunset, julian_day, latitude, longitude, utc_offset_hours, max_days)?,
        })
    }
}

#[cfg(feature = "std")]
impl Default for SunCalculator {
    /// The current time in [`DEFAULT_TIME_ZONE`] at [`GeoLocation::MANHATTAN`].
    fn default() -> Self {
        Self::new(CivilMoment::now_in(&DEFAULT_TIME_ZONE), GeoLocation::MANHATTAN)
    }
}

/// Output of [`SunCalculator::calculate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SunTimes {
    /// Julian Day of local midnight starting the requested date
    pub julian_day: f64,
    /// Requested local time, minutes since midnight
    pub local_minutes: f64,
    /// UTC offset in force at the requested moment, hours
    pub utc_offset_hours: f64,
    /// Ephemeris at the requested moment
    pub ephemeris: SolarEphemeris,
    /// Sun position at the requested moment
    pub position: SolarPosition,
    /// Local solar noon, minutes since midnight
    pub solar_noon_minutes: f64,
    /// Sunrise, or the nearest one when the day has none
    pub sunrise: RiseSet,
    /// Sunset, or the nearest one when the day has none
    pub sunset: RiseSet,
}

impl SunTimes {
    /// Sunrise as `HH:MM:SS DDMmmYYYY`.
    pub fn sunrise_time_date(&self) -> Result<TimeDate, SolarError> {
        TimeDate::new(self.sunrise.julian_day, self.sunrise.local_minutes)
    }

    /// Sunset as `HH:MM:SS DDMmmYYYY`.
    pub fn sunset_time_date(&self) -> Result<TimeDate, SolarError> {
        TimeDate::new(self.sunset.julian_day, self.sunset.local_minutes)
    }

    /// Solar noon as `HH:MM:SS`.
    pub fn solar_noon(&self) -> Result<TimeOfDay, SolarError> {
        TimeOfDay::new(self.solar_noon_minutes, TimeFormat::HoursMinutesSeconds)
    }
}
