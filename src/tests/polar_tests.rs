//! Days without sunrise or sunset above the polar circles.

extern crate std;

use approx::assert_relative_eq;

use crate::riseset::{next_prev_rise_set, sunrise_set};
use crate::time::{date_to_julian_day, day_of_year};
use crate::{CalculatorOptions, CivilMoment, Event, GeoLocation, SearchDirection, SolarError, SunCalculator, Zone};
use crate::{RiseSet, NO_EVENT_AZIMUTH};

fn polar(event: Event, date: (i32, u32, u32), latitude: f64, longitude: f64, utc_offset_hours: f64) -> RiseSet {
    let jd = date_to_julian_day(date.0, date.1, f64::from(date.2));
    sunrise_set(event, jd, latitude, longitude, utc_offset_hours, 366).unwrap()
}

#[test]
fn arctic_summer_looks_back_for_sunrise_and_ahead_for_sunset() {
    let jd = date_to_julian_day(2024, 6, 28.0);
    assert_eq!(day_of_year(jd), 180);

    let rise = polar(Event::Sunrise, (2024, 6, 28), 67.0, 20.0, 2.0);
    assert_eq!(rise.azimuth, NO_EVENT_AZIMUTH);
    assert_eq!(rise.adjacent, Some(SearchDirection::Backward));
    assert_eq!(rise.julian_day, 2_460_462.5);
    assert_relative_eq!(rise.local_minutes, 57.263_635_338, epsilon = 1e-6);

    let set = polar(Event::Sunset, (2024, 6, 28), 67.0, 20.0, 2.0);
    assert_eq!(set.azimuth, NO_EVENT_AZIMUTH);
    assert_eq!(set.adjacent, Some(SearchDirection::Forward));
    assert_eq!(set.julian_day, 2_460_503.5);
    assert_relative_eq!(set.local_minutes, 22.713_162_869, epsilon = 1e-6);
}

#[test]
fn arctic_winter_looks_ahead_for_sunrise_and_back_for_sunset() {
    let rise = polar(Event::Sunrise, (2024, 12, 21), 69.6492, 18.9553, 1.0);
    assert_eq!(rise.adjacent, Some(SearchDirection::Forward));
    assert_eq!(rise.julian_day, 2_460_690.5);
    assert_relative_eq!(rise.local_minutes, 693.901_962_854, epsilon = 1e-6);

    let set = polar(Event::Sunset, (2024, 12, 21), 69.6492, 18.9553, 1.0);
    assert_eq!(set.adjacent, Some(SearchDirection::Backward));
    assert_eq!(set.julian_day, 2_460_641.5);
    assert_relative_eq!(set.local_minutes, 699.801_372_815, epsilon = 1e-6);
}

#[test]
fn antarctic_seasons_are_mirrored() {
    // Southern winter
    let rise = polar(Event::Sunrise, (2024, 6, 21), -70.0, 0.0, 0.0);
    assert_eq!(rise.adjacent, Some(SearchDirection::Forward));
    assert_eq!(rise.julian_day, 2_460_510.5);
    assert_relative_eq!(rise.local_minutes, 710.671_038_414, epsilon = 1e-6);
    let set = polar(Event::Sunset, (2024, 6, 21), -70.0, 0.0, 0.0);
    assert_eq!(set.adjacent, Some(SearchDirection::Backward));
    assert_eq!(set.julian_day, 2_460_454.5);
    assert_relative_eq!(set.local_minutes, 725.393_837_030, epsilon = 1e-6);

    // Southern summer
    let rise = polar(Event::Sunrise, (2024, 12, 21), -70.0, 0.0, 0.0);
    assert_eq!(rise.adjacent, Some(SearchDirection::Backward));
    assert_eq!(rise.julian_day, 2_460_631.5);
    assert_relative_eq!(rise.local_minutes, 10.999_664_804, epsilon = 1e-6);
    let set = polar(Event::Sunset, (2024, 12, 21), -70.0, 0.0, 0.0);
    assert_eq!(set.adjacent, Some(SearchDirection::Forward));
    assert_eq!(set.julian_day, 2_460_700.5);
    assert_relative_eq!(set.local_minutes, 1417.389_717_450, epsilon = 1e-6);
}

#[test]
fn scan_lengths() {
    let jd = date_to_julian_day(2024, 6, 28.0);
    let back = next_prev_rise_set(SearchDirection::Backward, Event::Sunrise, jd, 67.0, 20.0, 2.0, 366).unwrap();
    assert_eq!(back.days_scanned, 27);
    let ahead = next_prev_rise_set(SearchDirection::Forward, Event::Sunset, jd, 67.0, 20.0, 2.0, 366).unwrap();
    assert_eq!(ahead.days_scanned, 13);

    let jd = date_to_julian_day(2024, 12, 21.0);
    let ahead = next_prev_rise_set(SearchDirection::Forward, Event::Sunset, jd, -70.0, 0.0, 0.0, 366).unwrap();
    assert_eq!(ahead.days_scanned, 35);
}

#[test]
fn scan_limit_from_options() {
    let moment = CivilMoment::date(2024, 12, 21).unwrap();
    let tromso = GeoLocation::new(69.6492, 18.9553).unwrap();
    let calc = SunCalculator::new(moment, tromso).with_zone(Zone::Fixed(1.0));

    assert!(calc.calculate().is_ok());
    let short = calc.with_options(CalculatorOptions { max_search_days: 10 });
    assert_eq!(short.calculate(), Err(SolarError::SearchLimitExceeded { days: 10 }));
}

#[test]
fn north_pole_never_finds_an_event() {
    let moment = CivilMoment::date(2024, 6, 21).unwrap();
    let pole = GeoLocation::new(90.0, 0.0).unwrap();
    let result = SunCalculator::new(moment, pole)
        .with_zone(Zone::Fixed(0.0))
        .with_options(CalculatorOptions { max_search_days: 400 })
        .calculate();
    assert_eq!(result, Err(SolarError::SearchLimitExceeded { days: 400 }));
}

#[test]
fn polar_result_renders_with_found_day() {
    let moment = CivilMoment::date(2024, 12, 21).unwrap();
    let tromso = GeoLocation::new(69.6492, 18.9553).unwrap();
    let times = SunCalculator::new(moment, tromso)
        .with_zone(Zone::parse("Europe/Oslo").unwrap())
        .calculate()
        .unwrap();

    assert_eq!(times.utc_offset_hours, 1.0);
    assert!(!times.sunrise.occurred());
    assert_eq!(std::format!("{}", times.sunrise_time_date().unwrap()), "11:33:54 15Jan2025");
    assert_eq!(std::format!("{}", times.sunset_time_date().unwrap()), "11:39:48 27Nov2024");
}
