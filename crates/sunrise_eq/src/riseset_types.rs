//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides the observer location, event kinds, configuration, and result
//! types used by the rise/set computation module.

use crate::equation::{
    DEFAULT_HORIZON_ALTITUDE_DEG, DEFAULT_OBLIQUITY_DEG, DEG_TO_RAD, altitude_correction_deg,
};
use crate::error::RiseSetError;

/// Observer position on Earth's surface.
///
/// Coordinates follow the sunrise equation's "degrees north and west"
/// convention: latitude is north-positive, longitude is **west-positive**.
/// An observer at 74° W is `longitude_west_deg = 74.0`; one at 77° E is
/// `-77.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, west positive.
    pub longitude_west_deg: f64,
    /// Elevation above the horizon reference in meters. Must be >= 0.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new observer location.
    pub fn new(latitude_deg: f64, longitude_west_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_west_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg * DEG_TO_RAD
    }

    /// Check that the location is physically meaningful.
    ///
    /// Rejects non-finite coordinates, latitudes outside [-90, 90], and
    /// negative or non-finite altitudes.
    pub fn validate(&self) -> Result<(), RiseSetError> {
        if !self.latitude_deg.is_finite() || !self.longitude_west_deg.is_finite() {
            return Err(RiseSetError::InvalidLocation("non-finite coordinate"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(RiseSetError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(RiseSetError::InvalidAltitude("non-finite altitude"));
        }
        if self.altitude_m < 0.0 {
            return Err(RiseSetError::InvalidAltitude("negative altitude"));
        }
        Ok(())
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon.
    Sunset,
    /// Sun centre at -6 deg, morning.
    CivilDawn,
    /// Sun centre at -6 deg, evening.
    CivilDusk,
    /// Sun centre at -12 deg, morning.
    NauticalDawn,
    /// Sun centre at -12 deg, evening.
    NauticalDusk,
    /// Sun centre at -18 deg, morning.
    AstronomicalDawn,
    /// Sun centre at -18 deg, evening.
    AstronomicalDusk,
}

impl RiseSetEvent {
    /// All events in chronological order over a solar day.
    pub const ALL: [RiseSetEvent; 8] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Fixed solar-centre altitude for twilight events, in degrees.
    ///
    /// `None` for sunrise/sunset, whose horizon comes from
    /// [`RiseSetConfig::horizon_altitude_deg`].
    pub fn twilight_altitude_deg(self) -> Option<f64> {
        match self {
            Self::Sunrise | Self::Sunset => None,
            Self::CivilDawn | Self::CivilDusk => Some(-6.0),
            Self::NauticalDawn | Self::NauticalDusk => Some(-12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(-18.0),
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }
}

/// Configurable parameters for rise/set computation.
///
/// The default reproduces the classic sunrise equation exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Solar-centre altitude at sunrise/sunset in degrees. Default: -0.83.
    pub horizon_altitude_deg: f64,
    /// Whether to lower the horizon by `2.076 √h / 60` degrees for
    /// observer elevation `h`. Default: true.
    pub altitude_correction: bool,
    /// Obliquity of the ecliptic in degrees. Default: 23.43713.
    pub obliquity_deg: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            horizon_altitude_deg: DEFAULT_HORIZON_ALTITUDE_DEG,
            altitude_correction: true,
            obliquity_deg: DEFAULT_OBLIQUITY_DEG,
        }
    }
}

impl RiseSetConfig {
    /// Check that every angle in the config is finite.
    pub fn validate(&self) -> Result<(), RiseSetError> {
        if !self.horizon_altitude_deg.is_finite() {
            return Err(RiseSetError::InvalidConfig("non-finite horizon altitude"));
        }
        if !self.obliquity_deg.is_finite() {
            return Err(RiseSetError::InvalidConfig("non-finite obliquity"));
        }
        Ok(())
    }

    /// Target solar-centre altitude for `event` in degrees, including the
    /// elevation correction when enabled.
    ///
    /// NaN when the correction is enabled and `altitude_m` is negative.
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64) -> f64 {
        let base = event
            .twilight_altitude_deg()
            .unwrap_or(self.horizon_altitude_deg);
        if self.altitude_correction {
            base + altitude_correction_deg(altitude_m)
        } else {
            base
        }
    }
}

/// Result of a checked rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date.
    Event { jd: f64, event: RiseSetEvent },
    /// Sun stays below the target altitude all day (polar night).
    NeverRises,
    /// Sun stays above the target altitude all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Julian Date of the event, if it occurs.
    pub fn jd(&self) -> Option<f64> {
        match self {
            Self::Event { jd, .. } => Some(*jd),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Sunrise and sunset of one solar day, as Julian Dates.
///
/// Both fields are NaN when the Sun does not cross the horizon or the
/// inputs were invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimes {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
}

impl SolarTimes {
    /// Time between sunrise and sunset in days.
    pub fn day_length_days(&self) -> f64 {
        self.sunset_jd - self.sunrise_jd
    }

    /// Whether both times are real numbers.
    pub fn is_defined(&self) -> bool {
        !self.sunrise_jd.is_nan() && !self.sunset_jd.is_nan()
    }
}

impl From<SolarTimes> for (f64, f64) {
    fn from(t: SolarTimes) -> Self {
        (t.sunrise_jd, t.sunset_jd)
    }
}
