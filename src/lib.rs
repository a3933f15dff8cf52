//! Panchangam: approximate astronomical and Malayalam calendar calculations
//!
//! This crate maps a Gregorian date and an optional geographic coordinate to
//! derived day facts: sunrise and sunset instants, lunar phase, an
//! approximate Malayalam (Kollam era) calendar date, and the day's nakshatra.
//!
//! All computations are pure closed-form approximations, deterministic and
//! free of I/O; they are accurate to minutes (solar events) or about a day
//! (calendar mapping), which is the intended trade-off. Nothing here is an
//! authoritative Panchang source.
//!
//! ```
//! use panchangam::{compute_day_facts, CivilDate, GeoCoordinate};
//!
//! let date = CivilDate::new(2024, 1, 1)?;
//! let kochi = GeoCoordinate::new(10.1632, 76.6413)?;
//! let facts = compute_day_facts(date, Some(kochi));
//!
//! assert_eq!(facts.malayalam.to_string(), "16 Dhanu 1198");
//! assert!(facts.sun.sunrise.unwrap() < facts.sun.sunset.unwrap());
//! # Ok::<(), panchangam::AlmanacError>(())
//! ```

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod lunar;
pub mod malayalam;
pub mod nakshatra;
pub mod solar;
pub mod time;

// Re-export commonly used types
pub use almanac::{compute_day_facts, compute_day_facts_with, ClosedFormModel, DayFacts, SkyModel};
pub use coordinates::GeoCoordinate;
pub use lunar::{MoonPhase, Phase};
pub use malayalam::{MalayalamDate, MalayalamMonth};
pub use nakshatra::Nakshatra;
pub use solar::SunEvents;
pub use time::CivilDate;

/// Main error type for the panchangam library
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// A latitude/longitude pair outside the valid ranges
    #[error(transparent)]
    Coordinate(#[from] coordinates::CoordinateError),

    /// A (year, month, day) triple that is not a real Gregorian date
    #[error(transparent)]
    Time(#[from] time::TimeError),
}

/// Result type for panchangam operations
pub type Result<T> = std::result::Result<T, AlmanacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert_into_almanac_error() {
        let coord_err: AlmanacError = GeoCoordinate::new(120.0, 0.0).unwrap_err().into();
        assert!(matches!(coord_err, AlmanacError::Coordinate(_)));

        let time_err: AlmanacError = CivilDate::new(2023, 2, 29).unwrap_err().into();
        assert!(matches!(time_err, AlmanacError::Time(_)));
    }

    #[test]
    fn test_error_messages_name_the_bad_input() {
        let err = GeoCoordinate::new(95.0, 200.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("95"));
        assert!(message.contains("200"));
    }
}
