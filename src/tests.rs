#![allow(clippy::unwrap_used, clippy::panic)]
extern crate std;
use std::string::ToString;

use approx::assert_relative_eq;
use julian_day_converter::julian_day_to_unix_millis;
use julian_day_converter::unix_millis_to_julian_day;
use proptest::prelude::*;

use crate::ephemeris::{declination, equation_of_time};
use crate::noon::solar_noon;
use crate::position::solar_position;
use crate::refraction::refraction_correction;
use crate::riseset::sunrise_set;
use crate::time::{date_to_julian_day, days_in_month, julian_centuries, julian_day_to_date};
use crate::{CivilMoment, Event, GeoLocation, SolarError, SunCalculator, Zone, DEFAULT_TIME_ZONE, NO_EVENT_AZIMUTH};

mod polar_tests;

fn any_date() -> impl Strategy<Value = (i32, u32, u32)> {
    (1600i32..=2400i32)
        .prop_flat_map(|year| (Just(year), 1u32..=12u32))
        .prop_flat_map(|(year, month)| (Just(year), Just(month), 1u32..=days_in_month(year, month)))
}

proptest! {
    #[test]
    fn calendar_round_trip((year, month, day) in any_date()) {
        let date = julian_day_to_date(date_to_julian_day(year, month, f64::from(day)));
        prop_assert_eq!((date.year, date.month, date.day), (year, month, f64::from(day)));
    }

    #[test]
    fn julian_day_agrees_with_unix_time(seconds in -5_000_000_000i64..=5_000_000_000i64) {
        let utc = chrono::DateTime::from_timestamp(seconds, 0).unwrap().naive_utc();
        let day_fraction = f64::from(chrono::Timelike::num_seconds_from_midnight(&utc)) / 86_400.0;
        let jd = date_to_julian_day(
            chrono::Datelike::year(&utc),
            chrono::Datelike::month(&utc),
            f64::from(chrono::Datelike::day(&utc)) + day_fraction,
        );

        prop_assert!((jd - unix_millis_to_julian_day(seconds * 1000)).abs() < 1e-6);
        prop_assert!((julian_day_to_unix_millis(jd) - seconds * 1000).abs() <= 1);
    }

    #[test]
    fn sunrise_precedes_noon_precedes_sunset(
        (year, month, day) in any_date(),
        latitude in -60.0f64..=60.0,
        longitude in -180.0f64..=180.0,
    ) {
        let utc_offset_hours = (longitude / 15.0).round();
        let jd = date_to_julian_day(year, month, f64::from(day));

        let rise = sunrise_set(Event::Sunrise, jd, latitude, longitude, utc_offset_hours, 366).unwrap();
        let set = sunrise_set(Event::Sunset, jd, latitude, longitude, utc_offset_hours, 366).unwrap();
        let noon = solar_noon(jd, longitude, utc_offset_hours);

        prop_assert!(rise.local_minutes < noon, "sunrise {} after noon {}", rise.local_minutes, noon);
        prop_assert!(noon < set.local_minutes, "noon {} after sunset {}", noon, set.local_minutes);
    }

    #[test]
    fn ephemeris_repeats_after_a_julian_year(jd in 2_415_020.5f64..2_488_069.5) {
        let now = julian_centuries(jd);
        let next = julian_centuries(jd + 365.25);
        prop_assert!((equation_of_time(now) - equation_of_time(next)).abs() < 0.1);
        prop_assert!((declination(now) - declination(next)).abs() < 0.1);
    }

    #[test]
    fn refraction_lifts_apparent_position(
        elevation in -5.0f64..=90.0,
        (year, month, day) in any_date(),
        local_minutes in 0.0f64..1440.0,
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        utc_offset_hours in -12.0f64..=14.0,
    ) {
        prop_assert!(refraction_correction(elevation) >= 0.0);

        let jd = date_to_julian_day(year, month, f64::from(day));
        let t = julian_centuries(jd + local_minutes / 1440.0 - utc_offset_hours / 24.0);
        let pos = solar_position(t, local_minutes, latitude, longitude, utc_offset_hours);
        prop_assert!(pos.elevation >= pos.geometric_elevation);
        prop_assert!((0.0..360.0).contains(&pos.azimuth));
    }

    #[test]
    fn results_stay_normalized(
        (year, month, day) in any_date(),
        latitude in -85.0f64..=85.0,
        longitude in -180.0f64..=180.0,
        utc_offset_hours in -12.0f64..=14.0,
    ) {
        let jd = date_to_julian_day(year, month, f64::from(day));
        for event in [Event::Sunrise, Event::Sunset] {
            let result = sunrise_set(event, jd, latitude, longitude, utc_offset_hours, 366).unwrap();
            prop_assert!((0.0..1440.0).contains(&result.local_minutes));
            prop_assert!(
                (0.0..360.0).contains(&result.azimuth) || result.azimuth == NO_EVENT_AZIMUTH,
                "azimuth {}", result.azimuth
            );
            prop_assert_eq!(result.occurred(), result.azimuth != NO_EVENT_AZIMUTH);
        }
        prop_assert!((0.0..1440.0).contains(&solar_noon(jd, longitude, utc_offset_hours)));
    }
}

#[test]
fn manhattan_near_equinox() {
    let moment = CivilMoment::new(2024, 3, 20, 12, 0, 0.0).unwrap();
    let times = SunCalculator::new(moment, GeoLocation::MANHATTAN)
        .with_zone(Zone::parse("America/New_York").unwrap())
        .calculate()
        .unwrap();

    // Daylight saving time is already in force on March 20th
    assert_eq!(times.utc_offset_hours, -4.0);
    assert_eq!(times.julian_day, 2_460_389.5);
    assert!((times.sunrise.local_minutes - (6.0 * 60.0 + 58.0)).abs() <= 1.0);
    assert!((times.sunset.local_minutes - (19.0 * 60.0 + 9.0)).abs() <= 1.0);
    assert_relative_eq!(times.position.azimuth, 156.479_269, epsilon = 1e-5);
    assert_relative_eq!(times.position.elevation, 47.013_014, epsilon = 1e-5);
    assert_relative_eq!(times.ephemeris.declination, declination(times.ephemeris.t));

    assert_eq!(times.sunrise_time_date().unwrap().to_string(), "06:58:23 20Mar2024");
    assert_eq!(times.sunset_time_date().unwrap().to_string(), "19:08:38 20Mar2024");
    assert_eq!(times.solar_noon().unwrap().to_string(), "13:03:10");
}

#[test]
fn standard_time_offset_moves_clock_times_by_an_hour() {
    let moment = CivilMoment::new(2024, 3, 20, 12, 0, 0.0).unwrap();
    let times = SunCalculator::new(moment, GeoLocation::MANHATTAN)
        .with_zone(Zone::Fixed(-5.0))
        .calculate()
        .unwrap();

    assert_eq!(times.sunrise_time_date().unwrap().to_string(), "05:58:23 20Mar2024");
    assert_eq!(times.sunset_time_date().unwrap().to_string(), "18:08:38 20Mar2024");
}

#[test]
fn sunset_past_local_midnight() {
    let moment = CivilMoment::new(2024, 6, 21, 15, 30, 0.0).unwrap();
    let reykjavik = GeoLocation::new(64.1466, -21.9426).unwrap();
    let times = SunCalculator::new(moment, reykjavik)
        .with_zone(chrono_tz::Atlantic::Reykjavik)
        .calculate()
        .unwrap();

    assert!(times.sunset.occurred());
    assert_eq!(times.sunset.julian_day, times.julian_day + 1.0);
    assert_eq!(times.sunset_time_date().unwrap().to_string(), "00:04:04 22Jun2024");
}

#[test]
fn lenient_day_clamping_reaches_the_calculation() {
    let clamped = SunCalculator::new(CivilMoment::date(2023, 4, 31).unwrap(), GeoLocation::MANHATTAN)
        .calculate()
        .unwrap();
    let last_day = SunCalculator::new(CivilMoment::date(2023, 4, 30).unwrap(), GeoLocation::MANHATTAN)
        .calculate()
        .unwrap();
    assert_eq!(clamped, last_day);
}

#[test]
fn dates_outside_the_supported_window() {
    let far_future = CivilMoment::date(3100, 1, 1).unwrap();
    let result = SunCalculator::new(far_future, GeoLocation::MANHATTAN).with_zone(Zone::Fixed(-5.0)).calculate();
    assert!(matches!(result, Err(SolarError::DateOutOfRange { .. })));

    let far_past = CivilMoment::date(-2500, 1, 1).unwrap();
    let result = SunCalculator::new(far_past, GeoLocation::MANHATTAN).with_zone(Zone::Fixed(-5.0)).calculate();
    assert!(matches!(result, Err(SolarError::DateOutOfRange { .. })));
}

#[cfg(feature = "std")]
#[test]
fn calculator_defaults() {
    let calc = SunCalculator::default();
    assert_eq!(calc.location(), &GeoLocation::MANHATTAN);
    assert_eq!(calc.zone(), &Zone::Named(DEFAULT_TIME_ZONE));
    assert!(calc.calculate().is_ok());
}

#[test]
fn error_messages() {
    assert_eq!(
        SolarError::SearchLimitExceeded { days: 366 }.to_string(),
        "no sunrise or sunset within 366 days"
    );
    assert_eq!(SolarError::UnknownTimeZone.to_string(), "Unknown time zone");
    assert_eq!(
        SolarError::DateOutOfRange { julian_day: 899_999.5 }.to_string(),
        "Julian day 899999.5 out of range"
    );
    assert_eq!(
        SolarError::OffsetOutOfRange { hours: 30.0 }.to_string(),
        "UTC offset 30 hours out of range"
    );
}
