//! Almanac facade: one call, all derived facts for a day
//!
//! Composes the solar, lunar, calendar, and nakshatra engines into a single
//! immutable [`DayFacts`] bundle. The solar engine sits behind the
//! [`SkyModel`] trait so a higher-precision ephemeris backend can be swapped
//! in without touching callers; [`ClosedFormModel`] is the self-contained
//! default built from the formulas in this crate.

use crate::coordinates::GeoCoordinate;
use crate::lunar::{self, MoonPhase};
use crate::malayalam::{self, MalayalamDate};
use crate::nakshatra::{self, Nakshatra};
use crate::solar::{self, SunEvents};
use crate::time::CivilDate;
use log::trace;
use serde::Serialize;

/// Capability interface for the location- and time-dependent sky facts.
///
/// Implementations must be pure: same inputs, same outputs, no hidden state.
pub trait SkyModel {
    /// Sunrise and sunset for a date at a location
    fn sun_events(&self, date: CivilDate, location: GeoCoordinate) -> SunEvents;

    /// Lunar phase facts for a date
    fn moon_phase(&self, date: CivilDate) -> MoonPhase;
}

/// The default sky model: the crate's own closed-form approximations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormModel;

impl SkyModel for ClosedFormModel {
    fn sun_events(&self, date: CivilDate, location: GeoCoordinate) -> SunEvents {
        solar::sun_events(date, location)
    }

    fn moon_phase(&self, date: CivilDate) -> MoonPhase {
        lunar::moon_phase(date)
    }
}

/// Everything the almanac derives for one day.
///
/// Created fresh per query and never mutated. When no location was supplied
/// the sun events are absent; the three date-only facts are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayFacts {
    /// The queried civil date
    pub date: CivilDate,
    /// The queried location, if one was supplied
    pub location: Option<GeoCoordinate>,
    /// Sunrise and sunset, absent without a location or under polar day/night
    pub sun: SunEvents,
    /// Lunar phase facts
    pub moon: MoonPhase,
    /// Approximate Malayalam calendar date
    pub malayalam: MalayalamDate,
    /// Lunar mansion of the day
    pub nakshatra: Nakshatra,
}

/// Compute the full fact bundle with the default closed-form model
pub fn compute_day_facts(date: CivilDate, location: Option<GeoCoordinate>) -> DayFacts {
    compute_day_facts_with(&ClosedFormModel, date, location)
}

/// Compute the full fact bundle with a caller-chosen sky model.
///
/// The Malayalam date and nakshatra are location-independent and always come
/// from the crate's own calendar arithmetic, whatever the model.
pub fn compute_day_facts_with<M: SkyModel>(
    model: &M,
    date: CivilDate,
    location: Option<GeoCoordinate>,
) -> DayFacts {
    trace!("computing day facts for {} at {:?}", date, location);
    let sun = match location {
        Some(coordinate) => model.sun_events(date, coordinate),
        None => SunEvents::default(),
    };
    DayFacts {
        date,
        location,
        sun,
        moon: model.moon_phase(date),
        malayalam: malayalam::malayalam_date(date),
        nakshatra: nakshatra::nakshatra(date),
    }
}
