//! UTC offset resolution for the calculator's local times.

use chrono::{FixedOffset, Offset, TimeZone};
use chrono_tz::Tz;
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{CivilMoment, SolarError};

/// Time zone used when none is given.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::New_York;

/// Where local clock times are read from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Zone {
    /// IANA time zone; the offset follows daylight saving time
    Named(Tz),
    /// Constant offset from UTC in hours, east positive
    Fixed(f64),
}

impl Zone {
    /// Looks up an IANA identifier such as `Europe/Oslo`.
    ///
    /// # Errors
    ///
    /// [`SolarError::UnknownTimeZone`] when the identifier is not in the
    /// database.
    pub fn parse(identifier: &str) -> Result<Self, SolarError> {
        identifier
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| SolarError::UnknownTimeZone)
    }

    /// Offset from UTC in hours in force at the given wall clock time.
    ///
    /// A time that occurs twice (clocks going back) takes the earlier of
    /// the two offsets. A time skipped by the clocks going forward takes
    /// the offset in force at that reading taken as UTC.
    ///
    /// # Errors
    ///
    /// [`SolarError::InvalidDate`] when a named zone is asked about a year
    /// outside chrono's range, [`SolarError::OffsetOutOfRange`] when a
    /// fixed offset is not finite or not one chrono's [`FixedOffset`]
    /// accepts.
    pub fn utc_offset_hours(&self, moment: &CivilMoment) -> Result<f64, SolarError> {
        let tz = match self {
            Zone::Fixed(hours) => return checked_fixed_offset(*hours),
            Zone::Named(tz) => tz,
        };

        let naive = moment.to_naive().ok_or(SolarError::InvalidDate)?;
        let seconds = match tz.from_local_datetime(&naive).earliest() {
            Some(local) => local.offset().fix().local_minus_utc(),
            None => tz.offset_from_utc_datetime(&naive).fix().local_minus_utc(),
        };
        Ok(f64::from(seconds) / 3600.0)
    }
}

fn checked_fixed_offset(hours: f64) -> Result<f64, SolarError> {
    if !hours.is_finite() || FixedOffset::east_opt((hours * 3600.0).round() as i32).is_none() {
        return Err(SolarError::OffsetOutOfRange { hours });
    }
    Ok(hours)
}

impl Default for Zone {
    fn default() -> Self {
        Zone::Named(DEFAULT_TIME_ZONE)
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}
