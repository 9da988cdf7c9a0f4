//! Sunrise and sunset times from the closed-form sunrise equation.
//!
//! This crate provides:
//! - [`compute_times`]: sunrise/sunset Julian Dates for an integer Julian
//!   day, west-positive longitude, latitude and observer altitude
//! - The individual pipeline stages (mean solar noon, mean anomaly,
//!   equation of center, ecliptic longitude, declination, hour angle,
//!   transit) with explicit degree/radian units
//! - Checked computations with polar-day classification and twilight
//!   variants
//!
//! Inputs and outputs are raw Julian day numbers. Calendar and timezone
//! conversion is the caller's job.
//!
//! ```
//! let (sunrise, sunset) = sunrise_eq::compute_times(2_451_545, 0.0, 51.5, 0.0);
//! assert!(sunrise < sunset);
//! ```

pub mod equation;
pub mod error;
pub mod julian;
pub mod riseset;
pub mod riseset_types;
pub mod solar_day;

pub use equation::{
    DEFAULT_HORIZON_ALTITUDE_DEG, DEFAULT_OBLIQUITY_DEG, DEG_TO_RAD, altitude_correction_deg,
    cos_hour_angle, ecliptic_longitude_deg, equation_of_center_deg, hour_angle_deg,
    mean_solar_anomaly_deg, mean_solar_noon_days, rise_set_jd, solar_declination_deg,
    solar_transit_days,
};
pub use error::RiseSetError;
pub use julian::{J2000_JD, JULIAN_DAY_CORRECTION, normalize_julian_day};
pub use riseset::{compute_all_events, compute_rise_set, compute_solar_times, compute_times};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes};
pub use solar_day::SolarDay;
