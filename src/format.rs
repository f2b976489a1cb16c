//! Text rendering of event times and days.
//!
//! ```
//! use solar_calculator::format::{TimeDate, TimeFormat, TimeOfDay};
//!
//! let rise = TimeDate::new(2_460_389.5, 418.391).unwrap();
//! assert_eq!(rise.to_string(), "06:58:23 20Mar2024");
//!
//! let short = TimeOfDay::new(1148.626, TimeFormat::HoursMinutes).unwrap();
//! assert_eq!(short.to_string(), "19:09");
//! ```

use core::fmt;

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::MINUTES_PER_DAY;
use crate::riseset::SearchDirection;
use crate::time::{check_julian_day, julian_day_to_date, CalendarDate};
use crate::SolarError;

const MONTH_ABBREVIATIONS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Precision of a rendered time of day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM`, rounded to the nearest minute
    HoursMinutes,
    /// `HH:MM:SS`, rounded to the nearest second
    HoursMinutesSeconds,
}

/// Layout of a rendered day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DayFormat {
    /// `20 Mar`
    DayMonth,
    /// `20Mar2024`
    DayMonthYear,
    /// `20Mar2024 next` or `20Mar2024 prev`
    DayMonthYearSearch(SearchDirection),
}

/// A minutes-since-midnight value ready for display.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeOfDay {
    minutes: f64,
    format: TimeFormat,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// [`SolarError::TimeOutOfRange`] unless `minutes` is in [0, 1440).
    pub fn new(minutes: f64, format: TimeFormat) -> Result<Self, SolarError> {
        if !(0.0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(SolarError::TimeOutOfRange { minutes });
        }
        Ok(Self { minutes, format })
    }

    /// Rounded `(hour, minute, second)` as displayed.
    ///
    /// Seconds round half up and carry into the minute. With
    /// [`TimeFormat::HoursMinutes`] 30 seconds or more round the minute up.
    /// A time within half a second (or minute) of midnight displays as
    /// hour 24.
    pub fn components(&self) -> (u32, u32, u32) {
        let float_hour = self.minutes / 60.0;
        let mut hour = float_hour.floor() as u32;
        let float_minute = 60.0 * (float_hour - float_hour.floor());
        let mut minute = float_minute.floor() as u32;
        let float_second = 60.0 * (float_minute - float_minute.floor());
        let mut second = (float_second + 0.5).floor() as u32;

        if second > 59 {
            second = 0;
            minute += 1;
        }
        if self.format == TimeFormat::HoursMinutes && second >= 30 {
            minute += 1;
        }
        if minute > 59 {
            minute = 0;
            hour += 1;
        }
        (hour, minute, second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, second) = self.components();
        write!(f, "{:02}:{:02}", hour, minute)?;
        if self.format == TimeFormat::HoursMinutesSeconds {
            write!(f, ":{:02}", second)?;
        }
        Ok(())
    }
}

/// A Julian Day rendered as a calendar day.
///
/// Years are zero-padded to four digits, so early dates read `28Oct0850`.
/// Years before 1 AD keep their sign (`19May-121`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalendarDay {
    date: CalendarDate,
    format: DayFormat,
}

impl CalendarDay {
    /// # Errors
    ///
    /// [`SolarError::DateOutOfRange`] outside [900000, 2817000].
    pub fn new(julian_day: f64, format: DayFormat) -> Result<Self, SolarError> {
        let julian_day = check_julian_day(julian_day)?;
        Ok(Self {
            date: julian_day_to_date(julian_day),
            format,
        })
    }

    /// The decoded calendar date
    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.date.day.floor() as u32;
        let month = MONTH_ABBREVIATIONS
            .get(self.date.month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("???");

        match self.format {
            DayFormat::DayMonth => write!(f, "{:02} {}", day, month),
            DayFormat::DayMonthYear => write!(f, "{:02}{}{:04}", day, month, self.date.year),
            DayFormat::DayMonthYearSearch(direction) => {
                write!(f, "{:02}{}{:04} {}", day, month, self.date.year, direction.label())
            }
        }
    }
}

/// `HH:MM:SS DDMmmYYYY` rendering of an event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeDate {
    time: TimeOfDay,
    day: CalendarDay,
}

impl TimeDate {
    /// # Errors
    ///
    /// [`SolarError::DateOutOfRange`] or [`SolarError::TimeOutOfRange`]
    /// when either part cannot be rendered.
    pub fn new(julian_day: f64, local_minutes: f64) -> Result<Self, SolarError> {
        Ok(Self {
            time: TimeOfDay::new(local_minutes, TimeFormat::HoursMinutesSeconds)?,
            day: CalendarDay::new(julian_day, DayFormat::DayMonthYear)?,
        })
    }
}

impl fmt::Display for TimeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.day)
    }
}
