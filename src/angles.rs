use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::coefficients::POLYNOMIALS;
use crate::error::AstroError;
use crate::schureman::AUXILIARY_ANGLES;
use crate::types::{AstronomicalParameter, Parameter, ParameterSet};

/// Rotation rate of the Earth relative to the mean sun.
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Converts a rate per Julian century into a rate per hour.
pub const CENTURIES_PER_HOUR: f64 = 1.0 / (24.0 * 365.25 * 100.0);

pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sexagesimal angle to decimal degrees.
pub const fn sexagesimal_to_degrees(
    degrees: f64,
    arcminutes: f64,
    arcseconds: f64,
    milliarcseconds: f64,
    microarcseconds: f64,
) -> f64 {
    degrees
        + arcminutes / 60.0
        + arcseconds / 3_600.0
        + milliarcseconds / 3_600_000.0
        + microarcseconds / 3_600_000_000.0
}

/// Evaluates `sum(c_i * x^i)`, coefficients lowest order first.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Evaluates the first derivative `sum(c_i * i * x^(i-1))` of [`polynomial`].
pub fn d_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .fold(0.0, |acc, (i, c)| acc * x + c * i as f64)
}

/// Builds a UTC instant from civil calendar fields.
pub fn utc_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
) -> Result<DateTime<Utc>, AstroError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_micro_opt(hour, minute, second, microsecond))
        .map(|naive| naive.and_utc())
        .ok_or(AstroError::InvalidTimestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        })
}

/// Julian Date of a civil instant (Meeus 7.1), proleptic Gregorian calendar.
pub fn julian_date<Tz: TimeZone>(t: &DateTime<Tz>) -> f64 {
    let utc = t.with_timezone(&Utc);
    let day = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / (24.0 * 60.0)
        + utc.second() as f64 / (24.0 * 60.0 * 60.0)
        + utc.nanosecond() as f64 / (24.0 * 60.0 * 60.0 * 1e9);

    let (mut year, mut month) = (utc.year(), utc.month() as i32);
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716) as f64).floor() + (30.6001 * (month + 1) as f64).floor() + day + b
        - 1524.5
}

/// Julian centuries since J2000 (Meeus 11.1).
pub fn julian_centuries<Tz: TimeZone>(t: &DateTime<Tz>) -> f64 {
    (julian_date(t) - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Mean solar hour angle `T`, measured from upper transit (Greenwich noon);
/// midnight UT is 180 degrees.
pub fn hour_angle(jd: f64) -> AstronomicalParameter {
    AstronomicalParameter::new((jd - jd.floor()) * 360.0, DEGREES_PER_HOUR)
}

/// Computes every astronomical argument at `t`.
///
/// Polynomial parameters come first, then the Schureman auxiliary angles
/// that depend on `N`, `i` and `omega`, then the two composites `T+h-s`
/// and `P`. All values are in `[0, 360)`; speeds are in degrees per hour.
pub fn astro<Tz: TimeZone>(t: &DateTime<Tz>) -> ParameterSet {
    let jd = julian_date(t);
    let centuries = (jd - J2000) / DAYS_PER_JULIAN_CENTURY;
    tracing::trace!(jd, centuries, "evaluating astronomical arguments");

    let mut a = [AstronomicalParameter::default(); Parameter::COUNT];

    for (parameter, coefficients) in POLYNOMIALS.iter() {
        a[parameter.index()] = AstronomicalParameter::new(
            normalize_angle(polynomial(coefficients, centuries)),
            d_polynomial(coefficients, centuries) * CENTURIES_PER_HOUR,
        );
    }

    let node = a[Parameter::LunarNode.index()].value;
    let inclination = a[Parameter::LunarInclination.index()].value;
    let obliquity = a[Parameter::Obliquity.index()].value;
    for (parameter, angle) in AUXILIARY_ANGLES {
        a[parameter.index()] =
            AstronomicalParameter::value_only(normalize_angle(angle(node, inclination, obliquity)));
    }

    let h = a[Parameter::SolarLongitude.index()];
    let s = a[Parameter::LunarLongitude.index()];
    a[Parameter::TPlusHMinusS.index()] = (hour_angle(jd) + h - s).normalized();

    let p = a[Parameter::LunarPerigee.index()];
    let xi = a[Parameter::Xi.index()];
    a[Parameter::SchuremanP.index()] = (p - xi).normalized();

    ParameterSet::from_fn(|parameter| a[parameter.index()])
}
