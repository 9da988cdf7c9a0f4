//! Sunrise/sunset computation via the closed-form sunrise equation.
//!
//! Two families of entry points:
//! - [`compute_times`] / [`compute_solar_times`] never fail. Invalid
//!   altitude, polar night and midnight sun all surface as NaN.
//! - [`compute_rise_set`] / [`compute_all_events`] validate the location
//!   and config, and classify polar days as [`RiseSetResult::NeverRises`] or
//!   [`RiseSetResult::NeverSets`].
//!
//! With the default [`RiseSetConfig`], both families agree bit for bit
//! wherever the event exists.

use crate::equation::{
    DEFAULT_HORIZON_ALTITUDE_DEG, DEFAULT_OBLIQUITY_DEG, altitude_correction_deg, hour_angle_deg,
};
use crate::error::RiseSetError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes};
use crate::solar_day::SolarDay;

/// Sunrise and sunset Julian Dates for an integer Julian day number.
///
/// # Arguments
/// * `date` — Julian day number of the observation date
/// * `longitude` — degrees, **west positive**
/// * `latitude` — degrees, north positive
/// * `altitude` — observer elevation in meters; must be >= 0
///
/// # Returns
/// `(sunrise_jd, sunset_jd)`. Both are NaN for negative altitude or when
/// the Sun does not cross the horizon on that day. No input is validated.
pub fn compute_times(date: i64, longitude: f64, latitude: f64, altitude: f64) -> (f64, f64) {
    let day = SolarDay::new(date, longitude, DEFAULT_OBLIQUITY_DEG);
    let target = DEFAULT_HORIZON_ALTITUDE_DEG + altitude_correction_deg(altitude);
    day.rise_set_jd(day.hour_angle_deg(latitude, target))
}

/// Configurable, NaN-propagating form of [`compute_times`].
pub fn compute_solar_times(
    date: i64,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> SolarTimes {
    let day = SolarDay::new(date, location.longitude_west_deg, config.obliquity_deg);
    let target = config.target_altitude_deg(RiseSetEvent::Sunrise, location.altitude_m);
    let omega = day.hour_angle_deg(location.latitude_deg, target);
    let (sunrise_jd, sunset_jd) = day.rise_set_jd(omega);
    SolarTimes {
        sunrise_jd,
        sunset_jd,
    }
}

/// Classify one event of a solar day.
fn event_on_day(
    day: &SolarDay,
    location: &GeoLocation,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> RiseSetResult {
    let target = config.target_altitude_deg(event, location.altitude_m);
    let cos_omega = day.cos_hour_angle(location.latitude_deg, target);

    if cos_omega > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if cos_omega < -1.0 {
        return RiseSetResult::NeverSets;
    }

    let omega = hour_angle_deg(cos_omega);
    let (rise, set) = day.rise_set_jd(omega);
    let jd = if event.is_rising() { rise } else { set };
    RiseSetResult::Event { jd, event }
}

/// Compute a single rise/set or twilight event.
///
/// # Returns
/// * `RiseSetResult::Event` with the event time as a Julian Date
/// * `RiseSetResult::NeverRises` if the Sun stays below the target altitude
/// * `RiseSetResult::NeverSets` if the Sun stays above the target altitude
///
/// # Errors
/// [`RiseSetError`] if `location` fails [`GeoLocation::validate`] or
/// `config` fails [`RiseSetConfig::validate`].
pub fn compute_rise_set(
    date: i64,
    location: &GeoLocation,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    location.validate()?;
    config.validate()?;
    let day = SolarDay::new(date, location.longitude_west_deg, config.obliquity_deg);
    Ok(event_on_day(&day, location, event, config))
}

/// Compute all 8 rise/set events for a day.
///
/// Returns results in chronological order:
/// AstronomicalDawn, NauticalDawn, CivilDawn, Sunrise,
/// Sunset, CivilDusk, NauticalDusk, AstronomicalDusk.
///
/// Each event is classified independently; at high latitudes some may be
/// NeverRises/NeverSets while others occur.
///
/// # Errors
/// [`RiseSetError`] if `location` fails [`GeoLocation::validate`] or
/// `config` fails [`RiseSetConfig::validate`].
pub fn compute_all_events(
    date: i64,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, RiseSetError> {
    location.validate()?;
    config.validate()?;
    let day = SolarDay::new(date, location.longitude_west_deg, config.obliquity_deg);
    Ok(RiseSetEvent::ALL
        .iter()
        .map(|&event| event_on_day(&day, location, event, config))
        .collect())
}
