//! Geographic coordinate types
//!
//! Coordinates are validated at construction so the astronomical engines can
//! assume in-range values. Out-of-range input is an error, never clamped.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error type for coordinate validation
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    /// Latitude or longitude outside the valid degree ranges
    #[error("Coordinate out of range: latitude {latitude} (valid -90..=90), longitude {longitude} (valid -180..=180)")]
    OutOfRange {
        /// The latitude that was supplied, in degrees
        latitude: f64,
        /// The longitude that was supplied, in degrees
        longitude: f64,
    },
}

/// Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// A point on the Earth's surface in degrees.
///
/// Latitude is positive north, longitude positive east. Values are checked
/// once here; everything downstream treats a `GeoCoordinate` as trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting values outside [-90, 90] / [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
            || latitude.is_nan()
            || longitude.is_nan()
        {
            return Err(CoordinateError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
