use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::time::{date_to_julian_day, days_in_month};

/// Errors returned by the solar calculator.
///
/// A day without sunrise or sunset is not an error; see
/// [`crate::SolarEventResult`] and [`crate::RiseSet::adjacent`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolarError {
    /// Julian Day outside [900000, 2817000]
    #[error("Julian day {julian_day} out of range")]
    DateOutOfRange {
        /// The rejected Julian Day
        julian_day: f64,
    },

    /// No sunrise or sunset found within the day-scan limit
    #[error("no sunrise or sunset within {days} days")]
    SearchLimitExceeded {
        /// The limit that was exhausted
        days: u32,
    },

    /// Latitude outside [-90, 90] degrees
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude outside [-180, 180] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// Month outside 1..=12 or day 0
    #[error("Invalid date")]
    InvalidDate,

    /// Hour, minute or second out of range
    #[error("Invalid time of day")]
    InvalidTimeOfDay,

    /// Minutes-of-day value outside [0, 1440)
    #[error("time of day {minutes} minutes out of range")]
    TimeOutOfRange {
        /// The rejected value
        minutes: f64,
    },

    /// Time zone identifier not found in the IANA database
    #[error("Unknown time zone")]
    UnknownTimeZone,

    /// Fixed UTC offset that is not finite or not strictly within ±24 hours
    #[error("UTC offset {hours} hours out of range")]
    OffsetOutOfRange {
        /// The rejected offset
        hours: f64,
    },
}

/// A civil (wall clock) date and time, without zone.
///
/// Days past the end of the month are clamped to the month's last day
/// rather than rejected, so 2023-04-31 becomes 2023-04-30.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CivilMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CivilMoment {
    /// Creates a civil moment in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// [`SolarError::InvalidDate`] for a month outside 1..=12 or day 0,
    /// [`SolarError::InvalidTimeOfDay`] for hour > 23, minute > 59 or a
    /// second outside [0, 60).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self, SolarError> {
        if !(1..=12).contains(&month) || day == 0 {
            return Err(SolarError::InvalidDate);
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(SolarError::InvalidTimeOfDay);
        }

        Ok(Self {
            year,
            month,
            day: day.min(days_in_month(year, month)),
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, SolarError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Current wall clock time in the given zone.
    #[cfg(feature = "std")]
    pub fn now_in(zone: &chrono_tz::Tz) -> Self {
        Self::from(chrono::Utc::now().with_timezone(zone).naive_local())
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 to 12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, already clamped to the month's length
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Hour, 0 to 23
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, 0 to 59
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds including the fraction
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Julian Day at local midnight starting this date.
    pub fn julian_day(&self) -> f64 {
        date_to_julian_day(self.year, self.month, f64::from(self.day))
    }

    /// Minutes elapsed since local midnight.
    pub fn minutes_since_midnight(&self) -> f64 {
        f64::from(self.hour) * 60.0 + f64::from(self.minute) + self.second / 60.0
    }

    /// The same wall clock reading as a chrono value, whole seconds only.
    ///
    /// `None` for years chrono cannot represent.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            self.second as u32,
        )
    }
}

impl From<NaiveDateTime> for CivilMoment {
    fn from(dt: NaiveDateTime) -> Self {
        // Leap seconds show up as nanoseconds past 1e9
        let nanos = dt.nanosecond().min(999_999_999);
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: f64::from(dt.second()) + f64::from(nanos) / 1e9,
        }
    }
}

/// An observer position on the Earth's surface.
///
/// Latitude is positive North and longitude positive East, both in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Midtown Manhattan, New York.
    pub const MANHATTAN: GeoLocation = GeoLocation {
        latitude: 40.754932,
        longitude: -73.984016,
    };

    /// Creates a location, checking the coordinate ranges.
    ///
    /// # Errors
    ///
    /// [`SolarError::LatitudeOutOfRange`] outside [-90, 90] and
    /// [`SolarError::LongitudeOutOfRange`] outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::LongitudeOutOfRange);
        }
        Ok(Self { latitude, longitude })
    }

    /// Latitude in degrees, positive North
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive East
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
