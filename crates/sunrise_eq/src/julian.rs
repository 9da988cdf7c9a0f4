//! Julian day epoch constants and the day-number normalizer.
//!
//! The sunrise equation works in days relative to J2000.0
//! (2000-Jan-01 12:00 TT, JD 2451545.0). Callers supply integer Julian day
//! numbers; no calendar conversion happens here.

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Fractional-day correction applied to the J2000 offset.
///
/// Accounts for leap seconds and TT−UT drift (~69 s) in the published
/// formulation of the sunrise equation.
pub const JULIAN_DAY_CORRECTION: f64 = 0.0008;

/// Shift an integer Julian day number to days since J2000.0.
///
/// `offset = (date − 2451545.0) + 0.0008`
///
/// No validity checks are performed; any integer is accepted.
pub fn normalize_julian_day(date: i64) -> f64 {
    (date as f64 - J2000_JD) + JULIAN_DAY_CORRECTION
}
