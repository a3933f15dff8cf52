//! Malayalam (Kollam era) lunisolar calendar mapper
//!
//! Maps a Gregorian date to an approximate Malayalam calendar date by walking
//! a fixed table of twelve month lengths from a fixed Gregorian anchor
//! (August 17). The fixed 365-day table ignores leap years and the true
//! variable length of lunisolar months, so month boundaries can drift by
//! about a day per year against an authoritative Panchang. That drift is an
//! accepted property of this calendar model, not something to correct here
//! without new reference data.

use crate::constants::{KOLLAM_ERA_OFFSET, MALAYALAM_ANCHOR_DAY, MALAYALAM_ANCHOR_MONTH};
use crate::time::CivilDate;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Days in the fixed month-length table
pub const DAYS_IN_YEAR: i64 = 365;

/// The twelve Malayalam months, in year order starting at Chingam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MalayalamMonth {
    Chingam,
    Kanni,
    Thulam,
    Vrischikam,
    Dhanu,
    Makaram,
    Kumbham,
    Meenam,
    Medam,
    Edavam,
    Mithunam,
    Karkidakam,
}

impl MalayalamMonth {
    /// All months in year order
    pub const ALL: [MalayalamMonth; 12] = [
        MalayalamMonth::Chingam,
        MalayalamMonth::Kanni,
        MalayalamMonth::Thulam,
        MalayalamMonth::Vrischikam,
        MalayalamMonth::Dhanu,
        MalayalamMonth::Makaram,
        MalayalamMonth::Kumbham,
        MalayalamMonth::Meenam,
        MalayalamMonth::Medam,
        MalayalamMonth::Edavam,
        MalayalamMonth::Mithunam,
        MalayalamMonth::Karkidakam,
    ];

    /// Display name of the month
    pub fn name(&self) -> &'static str {
        match self {
            MalayalamMonth::Chingam => "Chingam",
            MalayalamMonth::Kanni => "Kanni",
            MalayalamMonth::Thulam => "Thulam",
            MalayalamMonth::Vrischikam => "Vrischikam",
            MalayalamMonth::Dhanu => "Dhanu",
            MalayalamMonth::Makaram => "Makaram",
            MalayalamMonth::Kumbham => "Kumbham",
            MalayalamMonth::Meenam => "Meenam",
            MalayalamMonth::Medam => "Medam",
            MalayalamMonth::Edavam => "Edavam",
            MalayalamMonth::Mithunam => "Mithunam",
            MalayalamMonth::Karkidakam => "Karkidakam",
        }
    }

    /// Fixed length of the month in the 365-day table
    pub fn length_days(&self) -> i64 {
        match self {
            MalayalamMonth::Chingam => 31,
            MalayalamMonth::Kanni => 30,
            MalayalamMonth::Thulam => 31,
            MalayalamMonth::Vrischikam => 30,
            MalayalamMonth::Dhanu => 30,
            MalayalamMonth::Makaram => 29,
            MalayalamMonth::Kumbham => 30,
            MalayalamMonth::Meenam => 30,
            MalayalamMonth::Medam => 31,
            MalayalamMonth::Edavam => 31,
            MalayalamMonth::Mithunam => 31,
            MalayalamMonth::Karkidakam => 31,
        }
    }
}

impl fmt::Display for MalayalamMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An approximate Malayalam calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MalayalamDate {
    /// Month of the Malayalam year
    pub month: MalayalamMonth,
    /// Day of month, starting at 1
    pub day: u32,
    /// Kollam era year
    pub year: i32,
}

impl fmt::Display for MalayalamDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Whether the date falls on or after its own year's August 17 anchor
fn on_or_after_anchor(date: &CivilDate) -> bool {
    (date.month(), date.day()) >= (MALAYALAM_ANCHOR_MONTH, MALAYALAM_ANCHOR_DAY)
}

/// Map a Gregorian date to its approximate Malayalam calendar date.
///
/// The Malayalam year begins on August 17; the Kollam era year is the
/// Gregorian anchor year minus 825. Both constants are conventional, carried
/// over from the calendar model this implements, and make no claim to
/// astronomical authority.
pub fn malayalam_date(date: CivilDate) -> MalayalamDate {
    let anchor_year = if on_or_after_anchor(&date) {
        date.year()
    } else {
        date.year() - 1
    };

    let offset = match NaiveDate::from_ymd_opt(anchor_year, MALAYALAM_ANCHOR_MONTH, MALAYALAM_ANCHOR_DAY)
    {
        Some(anchor) => (date.naive() - anchor).num_days(),
        // Only reachable at chrono's year-range boundary
        None => 0,
    };

    // Leap years put the day before the next anchor at offset 365, one past
    // the fixed table; fold it into the last day of Karkidakam.
    let clamped = offset.clamp(0, DAYS_IN_YEAR - 1);
    if clamped != offset {
        debug!("offset {} clamped to {} for {}", offset, clamped, date);
    }

    let mut remaining = clamped;
    let mut month = MalayalamMonth::Chingam;
    for m in MalayalamMonth::ALL {
        month = m;
        if remaining < m.length_days() {
            break;
        }
        remaining -= m.length_days();
    }

    MalayalamDate {
        month,
        day: remaining as u32 + 1,
        year: anchor_year - KOLLAM_ERA_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_table_sums_to_365() {
        let total: i64 = MalayalamMonth::ALL.iter().map(|m| m.length_days()).sum();
        assert_eq!(total, DAYS_IN_YEAR);
    }

    #[test]
    fn test_reference_date() {
        // 137 days after the 2023 anchor lands on the 16th of Dhanu
        let md = malayalam_date(date(2024, 1, 1));
        assert_eq!(md.month, MalayalamMonth::Dhanu);
        assert_eq!(md.day, 16);
        assert_eq!(md.year, 2023 - 825);
    }

    #[test]
    fn test_year_starts_on_anchor() {
        let md = malayalam_date(date(2023, 8, 17));
        assert_eq!(md.month, MalayalamMonth::Chingam);
        assert_eq!(md.day, 1);
        assert_eq!(md.year, 2023 - 825);
    }

    #[test]
    fn test_day_before_anchor_is_last_of_karkidakam() {
        // Non-leap span: offset 364
        let md = malayalam_date(date(2023, 8, 16));
        assert_eq!(md.month, MalayalamMonth::Karkidakam);
        assert_eq!(md.day, 31);
        assert_eq!(md.year, 2022 - 825);

        // Leap span: offset 365 is folded back into the table
        let md = malayalam_date(date(2024, 8, 16));
        assert_eq!(md.month, MalayalamMonth::Karkidakam);
        assert_eq!(md.day, 31);
        assert_eq!(md.year, 2023 - 825);
    }

    #[test]
    fn test_month_boundary() {
        assert_eq!(malayalam_date(date(2023, 9, 16)).month, MalayalamMonth::Chingam);
        assert_eq!(malayalam_date(date(2023, 9, 16)).day, 31);
        assert_eq!(malayalam_date(date(2023, 9, 17)).month, MalayalamMonth::Kanni);
        assert_eq!(malayalam_date(date(2023, 9, 17)).day, 1);
    }

    #[test]
    fn test_era_year_after_anchor() {
        assert_eq!(malayalam_date(date(2024, 9, 1)).year, 2024 - 825);
        assert_eq!(malayalam_date(date(2024, 7, 1)).year, 2023 - 825);
    }

    #[test]
    fn test_day_of_month_always_at_least_one() {
        // Sweep several years of consecutive days, leap years included
        let mut current = date(2022, 1, 1).naive();
        let end = date(2026, 1, 1).naive();
        while current < end {
            let md = malayalam_date(CivilDate::from(current));
            assert!(
                md.day >= 1 && md.day <= md.month.length_days() as u32,
                "{} gave {} {}",
                current,
                md.day,
                md.month
            );
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_display() {
        let md = malayalam_date(date(2024, 1, 1));
        assert_eq!(md.to_string(), "16 Dhanu 1198");
    }
}
