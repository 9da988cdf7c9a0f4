//! Stage functions of the sunrise equation.
//!
//! Each function is one step of the closed-form pipeline from a J2000 day
//! offset to the hour angle and transit time. Units are carried in the
//! names: `_deg` is degrees, `_days` is days since J2000.0 and `_jd` is an
//! absolute Julian Date.
//!
//! All degree↔radian conversions go through [`DEG_TO_RAD`] (multiply to get
//! radians, divide to get degrees) so results are reproducible bit for bit.
//!
//! Source: the sunrise equation as given by Wikipedia, "Sunrise equation",
//! section "Complete calculation on Earth".

use std::f64::consts::TAU;

use crate::julian::J2000_JD;

/// Degrees to radians: 2π / 360.
pub const DEG_TO_RAD: f64 = TAU / 360.0;

/// Mean obliquity of the ecliptic used for the declination, in degrees.
pub const DEFAULT_OBLIQUITY_DEG: f64 = 23.43713;

/// Apparent altitude of the solar centre at sunrise/sunset, in degrees.
///
/// −0.83° combines horizon refraction (~34') and the solar semidiameter
/// (~16').
pub const DEFAULT_HORIZON_ALTITUDE_DEG: f64 = -0.83;

/// Mean anomaly at J2000.0, degrees.
const MEAN_ANOMALY_J2000_DEG: f64 = 357.5291;

/// Mean anomaly rate, degrees per day.
const MEAN_ANOMALY_RATE_DEG_PER_DAY: f64 = 0.985_600_28;

/// Argument of perihelion, degrees.
const PERIHELION_ARG_DEG: f64 = 102.9372;

/// Mean solar noon in days since J2000.0.
///
/// `n* = longitude / 360 + offset`
///
/// `longitude_west_deg` is west-positive: observers west of Greenwich see
/// noon later.
pub fn mean_solar_noon_days(offset_days: f64, longitude_west_deg: f64) -> f64 {
    (longitude_west_deg / 360.0) + offset_days
}

/// Mean solar anomaly in degrees, in [0, 360).
///
/// `M = (357.5291 + 0.98560028 × n*) mod 360`
pub fn mean_solar_anomaly_deg(mean_solar_noon_days: f64) -> f64 {
    (MEAN_ANOMALY_J2000_DEG + MEAN_ANOMALY_RATE_DEG_PER_DAY * mean_solar_noon_days)
        .rem_euclid(360.0)
}

/// Equation of center in degrees, from the mean anomaly in degrees.
///
/// `C = 1.9148 sin M + 0.02 sin 2M + 0.0003 sin 3M`
pub fn equation_of_center_deg(mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg * DEG_TO_RAD;
    1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()
}

/// Ecliptic longitude of the Sun in degrees, in [0, 360).
///
/// `λ = (M + C + 180 + 102.9372) mod 360`
pub fn ecliptic_longitude_deg(mean_anomaly_deg: f64) -> f64 {
    (mean_anomaly_deg + equation_of_center_deg(mean_anomaly_deg) + 180.0 + PERIHELION_ARG_DEG)
        .rem_euclid(360.0)
}

/// Solar declination in degrees.
///
/// `δ = asin(sin λ × sin ε)`
pub fn solar_declination_deg(ecliptic_longitude_deg: f64, obliquity_deg: f64) -> f64 {
    ((ecliptic_longitude_deg * DEG_TO_RAD).sin() * (obliquity_deg * DEG_TO_RAD).sin()).asin()
        / DEG_TO_RAD
}

/// Horizon correction for observer elevation, in degrees (non-positive).
///
/// `−2.076 × √h / 60`
///
/// NaN for negative `altitude_m`.
pub fn altitude_correction_deg(altitude_m: f64) -> f64 {
    -2.076 * (altitude_m.sqrt() / 60.0)
}

/// Cosine of the hour angle at which the solar centre reaches `horizon_deg`.
///
/// `cos ω = (sin h0 − sin φ sin δ) / (cos φ cos δ)`
///
/// Values above 1 mean the Sun never climbs to `horizon_deg`; values
/// below −1 mean it never drops to it.
pub fn cos_hour_angle(latitude_deg: f64, declination_deg: f64, horizon_deg: f64) -> f64 {
    let phi = latitude_deg * DEG_TO_RAD;
    let dec = declination_deg * DEG_TO_RAD;
    ((horizon_deg * DEG_TO_RAD).sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Hour angle in degrees from its cosine.
///
/// NaN when `cos_omega` is outside [−1, 1].
pub fn hour_angle_deg(cos_omega: f64) -> f64 {
    cos_omega.acos() / DEG_TO_RAD
}

/// Solar transit in days since J2000.0.
///
/// `J_transit = n* + 0.0053 sin M − 0.0069 sin 2λ`
pub fn solar_transit_days(
    mean_solar_noon_days: f64,
    mean_anomaly_deg: f64,
    ecliptic_longitude_deg: f64,
) -> f64 {
    mean_solar_noon_days + (0.0053 * (mean_anomaly_deg * DEG_TO_RAD).sin())
        - (0.0069 * (2.0 * ecliptic_longitude_deg * DEG_TO_RAD).sin())
}

/// Rise and set Julian Dates from the transit and hour angle.
///
/// Returns `(rise_jd, set_jd)`; both are NaN if `hour_angle_deg` is.
pub fn rise_set_jd(transit_days: f64, hour_angle_deg: f64) -> (f64, f64) {
    let hour_angle_days = hour_angle_deg / 360.0;
    (
        J2000_JD + (transit_days - hour_angle_days),
        J2000_JD + (transit_days + hour_angle_days),
    )
}
