//! Solar position engine: sunrise and sunset instants
//!
//! Implements the standard low-precision sunrise equation: solar mean anomaly
//! and equation of center give the Sun's ecliptic longitude, from which the
//! declination and the hour angle at the -0.83 degree rise/set altitude
//! follow. Results are good to a few minutes against a full ephemeris, which
//! is the accuracy this crate promises.

use crate::constants::{
    J2000, OBLIQUITY_DEG, PERIHELION_DEG, SUNRISE_ALTITUDE_DEG, TAU,
};
use crate::coordinates::GeoCoordinate;
use crate::time::{days_since_j2000, jd_to_instant, CivilDate};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::f64::consts::PI;

/// Leading term of the mean solar transit expression, in days
const J0: f64 = 0.0009;

/// Sunrise and sunset instants for one civil day at one location.
///
/// A `None` event means the sun does not cross the horizon that day at that
/// latitude (polar day or polar night). This is a valid outcome, not an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SunEvents {
    /// Sunrise instant, if the sun rises that day
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset instant, if the sun sets that day
    pub sunset: Option<DateTime<Utc>>,
}

/// Solar mean anomaly in radians for a day count since J2000
fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).rem_euclid(360.0).to_radians()
}

/// Equation-of-center correction in radians, first three harmonics
fn equation_of_center(m: f64) -> f64 {
    (1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians()
}

/// Ecliptic longitude of the Sun in radians, from the mean anomaly
fn ecliptic_longitude(m: f64) -> f64 {
    (m + equation_of_center(m) + PERIHELION_DEG.to_radians() + PI).rem_euclid(TAU)
}

/// Solar declination in radians, from the ecliptic longitude
fn declination(l: f64) -> f64 {
    (OBLIQUITY_DEG.to_radians().sin() * l.sin()).asin()
}

/// Compute sunrise and sunset for a civil date at a coordinate.
///
/// Evaluates the sunrise equation about the local mean solar noon nearest the
/// date's midday UTC. For latitudes strictly between -60 and 60 degrees both
/// events are always present, with sunrise before sunset.
pub fn sun_events(date: CivilDate, location: GeoCoordinate) -> SunEvents {
    let d = days_since_j2000(date.midday_utc());

    // Mean solar noon for the nearest Julian cycle at this longitude
    let lw = -location.longitude_rad();
    let n = (d - J0 - lw / TAU).round();
    let ds = J0 + lw / TAU + n;

    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let transit = J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();

    let dec = declination(l);
    let phi = location.latitude_rad();
    let cos_h = (SUNRISE_ALTITUDE_DEG.to_radians().sin() - phi.sin() * dec.sin())
        / (phi.cos() * dec.cos());

    // Sun never crosses the horizon: polar day below -1, polar night above +1
    if cos_h < -1.0 {
        debug!("polar day at ({}) on {}: sun does not set", location, date);
        return SunEvents::default();
    }
    if cos_h > 1.0 {
        debug!("polar night at ({}) on {}: sun does not rise", location, date);
        return SunEvents::default();
    }

    // Hour angle as a fraction of a full rotation, i.e. of a day
    let h = cos_h.acos();
    SunEvents {
        sunrise: jd_to_instant(transit - h / TAU),
        sunset: jd_to_instant(transit + h / TAU),
    }
}
