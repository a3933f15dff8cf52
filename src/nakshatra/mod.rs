//! Nakshatra (lunar mansion) calculator
//!
//! Divides the Moon's mean sidereal cycle into the 27 traditional mansions
//! and reports which one a given date falls in, counted from a fixed epoch
//! (2000-01-01T00:00 UTC). Approximate by construction: the mean cycle stands
//! in for the Moon's true sidereal longitude.

use crate::constants::{NAKSHATRA_EPOCH_JD, SIDEREAL_MONTH};
use crate::time::{julian_day, CivilDate};
use serde::Serialize;
use std::fmt;

/// The 27 nakshatra names in cycle order
pub static NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// A lunar mansion: 0-based cycle index and its traditional name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Nakshatra {
    /// Index into the 27-mansion cycle, 0 = Ashwini
    pub index: u8,
    /// Traditional name of the mansion
    pub name: &'static str,
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Nakshatra for a civil date, from the mean sidereal cycle.
///
/// Pure function of the date; location does not enter.
pub fn nakshatra(date: CivilDate) -> Nakshatra {
    let age = (julian_day(date.midnight_utc()) - NAKSHATRA_EPOCH_JD).rem_euclid(SIDEREAL_MONTH);
    let span = SIDEREAL_MONTH / NAKSHATRA_NAMES.len() as f64;
    let index = ((age / span) as usize).min(NAKSHATRA_NAMES.len() - 1);
    Nakshatra {
        index: index as u8,
        name: NAKSHATRA_NAMES[index],
    }
}
