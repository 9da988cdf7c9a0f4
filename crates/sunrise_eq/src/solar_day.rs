//! Latitude-independent solar quantities for one Julian day.
//!
//! Everything up to the declination and transit time depends only on the
//! date and longitude, so it is computed once and shared between sunrise,
//! sunset and the twilight events.

use crate::equation::{
    cos_hour_angle, ecliptic_longitude_deg, equation_of_center_deg, hour_angle_deg,
    mean_solar_anomaly_deg, mean_solar_noon_days, rise_set_jd, solar_declination_deg,
    solar_transit_days,
};
use crate::julian::{J2000_JD, normalize_julian_day};

/// Intermediate values of the sunrise equation for one date and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    /// Days since J2000.0, including the fractional correction.
    pub offset_days: f64,
    /// Mean solar noon, days since J2000.0.
    pub mean_solar_noon_days: f64,
    /// Mean solar anomaly, degrees in [0, 360).
    pub mean_anomaly_deg: f64,
    /// Equation of center, degrees.
    pub equation_of_center_deg: f64,
    /// Ecliptic longitude of the Sun, degrees in [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Solar declination, degrees.
    pub declination_deg: f64,
    /// Solar transit, days since J2000.0.
    pub transit_days: f64,
}

impl SolarDay {
    /// Run the date/longitude stages of the pipeline.
    ///
    /// `longitude_west_deg` is west-positive.
    pub fn new(date: i64, longitude_west_deg: f64, obliquity_deg: f64) -> Self {
        let offset_days = normalize_julian_day(date);
        let mean_solar_noon_days = mean_solar_noon_days(offset_days, longitude_west_deg);
        let mean_anomaly_deg = mean_solar_anomaly_deg(mean_solar_noon_days);
        let ecliptic_longitude_deg = ecliptic_longitude_deg(mean_anomaly_deg);
        Self {
            offset_days,
            mean_solar_noon_days,
            mean_anomaly_deg,
            equation_of_center_deg: equation_of_center_deg(mean_anomaly_deg),
            ecliptic_longitude_deg,
            declination_deg: solar_declination_deg(ecliptic_longitude_deg, obliquity_deg),
            transit_days: solar_transit_days(
                mean_solar_noon_days,
                mean_anomaly_deg,
                ecliptic_longitude_deg,
            ),
        }
    }

    /// Solar transit as a Julian Date.
    pub fn transit_jd(&self) -> f64 {
        J2000_JD + self.transit_days
    }

    /// Cosine of the hour angle for an observer latitude and target
    /// solar-centre altitude, both in degrees.
    pub fn cos_hour_angle(&self, latitude_deg: f64, target_altitude_deg: f64) -> f64 {
        cos_hour_angle(latitude_deg, self.declination_deg, target_altitude_deg)
    }

    /// Hour angle in degrees; NaN when the Sun never reaches the target.
    pub fn hour_angle_deg(&self, latitude_deg: f64, target_altitude_deg: f64) -> f64 {
        hour_angle_deg(self.cos_hour_angle(latitude_deg, target_altitude_deg))
    }

    /// Rise and set Julian Dates for a given hour angle in degrees.
    pub fn rise_set_jd(&self, hour_angle_deg: f64) -> (f64, f64) {
        rise_set_jd(self.transit_days, hour_angle_deg)
    }
}
