//! Lunar phase engine: synodic age, phase name, illuminated fraction
//!
//! The Moon's age is measured from a fixed reference new moon
//! (2000-01-06T18:14 UTC) modulo the mean synodic month. The age maps to one
//! of eight named phases and to an illuminated fraction. Everything here is a
//! pure function of time; location plays no part.

use crate::constants::{NEW_MOON_2000_JD, SYNODIC_MONTH, TAU};
use crate::time::{julian_day, CivilDate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The eight named lunar phases, one per eighth of the synodic cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl Phase {
    /// Display name of the phase
    pub fn name(&self) -> &'static str {
        match self {
            Phase::New => "New Moon",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full Moon",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Bucket a synodic age into the nearest of the eight phases.
    ///
    /// The cycle is split into eighths centered on the named phases, so ages
    /// just under a full period round back to New.
    pub fn from_age(age_days: f64) -> Self {
        const PHASES: [Phase; 8] = [
            Phase::New,
            Phase::WaxingCrescent,
            Phase::FirstQuarter,
            Phase::WaxingGibbous,
            Phase::Full,
            Phase::WaningGibbous,
            Phase::LastQuarter,
            Phase::WaningCrescent,
        ];
        let index = (age_days / SYNODIC_MONTH * 8.0).round() as usize % 8;
        PHASES[index]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar phase facts for one instant or civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Days since the last mean new moon, in [0, synodic month)
    pub age_days: f64,
    /// The nearest named phase
    pub phase: Phase,
    /// Fraction of the lunar disc that is lit, in [0, 1]
    pub illuminated_fraction: f64,
}

/// Lunar phase at an exact UTC instant
pub fn moon_phase_at(instant: DateTime<Utc>) -> MoonPhase {
    let age_days = (julian_day(instant) - NEW_MOON_2000_JD).rem_euclid(SYNODIC_MONTH);
    let illuminated_fraction = (1.0 - (TAU * age_days / SYNODIC_MONTH).cos()) / 2.0;
    MoonPhase {
        age_days,
        phase: Phase::from_age(age_days),
        illuminated_fraction,
    }
}

/// Lunar phase for a civil date, evaluated at the date's midday UTC
pub fn moon_phase(date: CivilDate) -> MoonPhase {
    moon_phase_at(date.midday_utc())
}
