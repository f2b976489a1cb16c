#![allow(missing_docs)]
use solar_calculator::format::{CalendarDay, DayFormat, TimeFormat, TimeOfDay};
use solar_calculator::{CivilMoment, GeoLocation, RiseSet, SunCalculator, Zone, DEFAULT_TIME_ZONE};

fn describe(label: &str, event: &RiseSet) -> Result<String, Box<dyn std::error::Error>> {
    let time = TimeOfDay::new(event.local_minutes, TimeFormat::HoursMinutesSeconds)?;
    match event.adjacent {
        None => Ok(format!(
            "{}: {} {} (azimuth {:.1}°)",
            label,
            time,
            CalendarDay::new(event.julian_day, DayFormat::DayMonthYear)?,
            event.azimuth
        )),
        Some(direction) => Ok(format!(
            "{}: none today, {} {}",
            label,
            time,
            CalendarDay::new(event.julian_day, DayFormat::DayMonthYearSearch(direction))?
        )),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Current time in New York, at the reference location in Midtown
    let calc = SunCalculator::default();
    let times = calc.calculate()?;
    let location = calc.location();

    println!("Solar Calculator Example - Manhattan, NY");
    println!("Location: {:.5}°N, {:.5}°W", location.latitude(), location.longitude().abs());
    println!("Time zone: {} (UTC{:+})", DEFAULT_TIME_ZONE, times.utc_offset_hours);
    println!("{:=<60}", "");

    println!("Current Solar Position:");
    println!("  Azimuth: {:.2}°", times.position.azimuth);
    println!("  Elevation: {:.2}°", times.position.elevation);
    println!("  Declination: {:.2}°", times.ephemeris.declination);
    println!("  Equation of time: {:.2} min", times.ephemeris.equation_of_time);
    println!();

    println!("{}", describe("Sunrise", &times.sunrise)?);
    println!("Solar noon: {}", times.solar_noon()?);
    println!("{}", describe("Sunset", &times.sunset)?);
    println!();

    // A polar night for comparison
    let tromso = GeoLocation::new(69.6492, 18.9553)?;
    let winter = CivilMoment::date(2024, 12, 21)?;
    let polar = SunCalculator::new(winter, tromso)
        .with_zone(Zone::parse("Europe/Oslo")?)
        .calculate()?;

    println!("Tromsø, 21 Dec 2024:");
    println!("  {}", describe("Sunrise", &polar.sunrise)?);
    println!("  {}", describe("Sunset", &polar.sunset)?);

    Ok(())
}
