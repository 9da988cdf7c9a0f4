//! Error types for checked rise/set computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the validating rise/set entry points.
///
/// The plain [`crate::compute_times`] never produces these; it lets invalid
/// input propagate as NaN.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// Latitude or longitude is non-finite or out of range.
    InvalidLocation(&'static str),
    /// Observer altitude is negative or non-finite.
    InvalidAltitude(&'static str),
    /// A [`crate::RiseSetConfig`] field is non-finite.
    InvalidConfig(&'static str),
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidAltitude(msg) => write!(f, "invalid altitude: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for RiseSetError {}
