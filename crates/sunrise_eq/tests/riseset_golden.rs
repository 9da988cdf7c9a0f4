//! Golden-value tests for sunrise/sunset against published almanac times.
//!
//! The sunrise equation is an approximation; expected values carry
//! tolerances of several minutes.

use sunrise_eq::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, compute_rise_set, compute_times,
};

/// 2000-Jan-01.
const JD_2000_JAN_01: i64 = 2_451_545;
/// 2000-Mar-20, near the March equinox.
const JD_2000_MAR_20: i64 = 2_451_624;
/// 2000-Jun-21, near the June solstice.
const JD_2000_JUN_21: i64 = 2_451_717;
/// 2000-Dec-21, near the December solstice.
const JD_2000_DEC_21: i64 = 2_451_900;

/// Convert a JD to hours of the UTC day (JD days start at noon).
fn jd_to_utc_hours(jd: f64) -> f64 {
    let frac = jd - jd.floor();
    ((frac + 0.5).rem_euclid(1.0)) * 24.0
}

#[test]
fn london_new_year_sunrise() {
    let (rise, _) = compute_times(JD_2000_JAN_01, 0.0, 51.5, 0.0);
    let hours = jd_to_utc_hours(rise);
    // Published: 08:06 UTC
    assert!(
        (hours - 8.1).abs() < 0.1,
        "London sunrise = {hours:.3}h UTC, expected ~8.10h"
    );
}

#[test]
fn london_new_year_sunset() {
    let (_, set) = compute_times(JD_2000_JAN_01, 0.0, 51.5, 0.0);
    let hours = jd_to_utc_hours(set);
    // Published: 16:01 UTC
    assert!(
        (hours - 16.017).abs() < 0.1,
        "London sunset = {hours:.3}h UTC, expected ~16.02h"
    );
}

#[test]
fn greenwich_equinox_equator() {
    let (rise, set) = compute_times(JD_2000_MAR_20, 0.0, 0.0, 0.0);
    let rise_h = jd_to_utc_hours(rise);
    let set_h = jd_to_utc_hours(set);
    // ~06:05 and ~18:12 UTC: 12h day plus refraction, shifted by the
    // equation of time.
    assert!((rise_h - 6.07).abs() < 0.1, "rise = {rise_h:.3}h");
    assert!((set_h - 18.19).abs() < 0.1, "set = {set_h:.3}h");
}

#[test]
fn new_york_summer_solstice() {
    // 40.71 N, 74.01 W. Published: 09:25 and 00:31 (next day) UTC.
    let (rise, set) = compute_times(JD_2000_JUN_21, 74.01, 40.71, 0.0);
    let rise_h = jd_to_utc_hours(rise);
    let set_h = jd_to_utc_hours(set);
    assert!((rise_h - 9.42).abs() < 0.1, "rise = {rise_h:.3}h");
    assert!((set_h - 0.52).abs() < 0.1, "set = {set_h:.3}h");
}

#[test]
fn equator_day_is_half_a_day_all_year() {
    for date in (JD_2000_JAN_01..JD_2000_JAN_01 + 366).step_by(5) {
        let (rise, set) = compute_times(date, 0.0, 0.0, 0.0);
        let length = set - rise;
        assert!(
            (length - 0.5).abs() < 0.01,
            "date {date}: day length = {length}"
        );
    }
}

#[test]
fn arctic_winter_is_nan() {
    let (rise, set) = compute_times(JD_2000_DEC_21, 0.0, 80.0, 0.0);
    assert!(rise.is_nan(), "rise = {rise}");
    assert!(set.is_nan(), "set = {set}");
}

#[test]
fn arctic_summer_is_nan() {
    let (rise, set) = compute_times(JD_2000_JUN_21, 0.0, 80.0, 0.0);
    assert!(rise.is_nan() && set.is_nan());
}

#[test]
fn antarctic_january_never_sets() {
    let loc = GeoLocation::new(-80.0, 0.0, 0.0);
    let result = compute_rise_set(
        JD_2000_JAN_01,
        &loc,
        RiseSetEvent::Sunset,
        &RiseSetConfig::default(),
    )
    .unwrap();
    assert_eq!(result, RiseSetResult::NeverSets);
}

#[test]
fn negative_altitude_is_nan() {
    let (rise, set) = compute_times(JD_2000_JAN_01, 0.0, 51.5, -1.0);
    assert!(rise.is_nan() && set.is_nan());
}

#[test]
fn london_civil_twilight_after_sunset() {
    let loc = GeoLocation::new(51.5, 0.0, 0.0);
    let config = RiseSetConfig::default();
    let set = compute_rise_set(JD_2000_JAN_01, &loc, RiseSetEvent::Sunset, &config)
        .unwrap()
        .jd()
        .unwrap();
    let dusk = compute_rise_set(JD_2000_JAN_01, &loc, RiseSetEvent::CivilDusk, &config)
        .unwrap()
        .jd()
        .unwrap();
    let minutes = (dusk - set) * 1440.0;
    // Civil twilight in London in January lasts ~40 minutes.
    assert!(
        (minutes - 40.0).abs() < 5.0,
        "civil twilight = {minutes:.1} min"
    );
}
