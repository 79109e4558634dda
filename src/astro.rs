//! Equinoxes, solstices and the phases of the moon within one calendar year.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use log::debug;
use std::f64::consts::PI;
use thiserror::Error;

use crate::calendar::{check_year, make_date, CalendarError};
use crate::ephemeris::{Body, EphemerisError, PhaseOracle, TAU};
use crate::event::CalendarEvent;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("invalid year for astronomical events: {0}")]
    Calendar(#[from] CalendarError),
    #[error("astronomical event not found: {0}")]
    Ephemeris(#[from] EphemerisError),
}

/// Season boundaries in the order they occur, starting from January
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeasonBoundary {
    VernalEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

impl SeasonBoundary {
    pub const ALL: [SeasonBoundary; 4] = [
        SeasonBoundary::VernalEquinox,
        SeasonBoundary::SummerSolstice,
        SeasonBoundary::AutumnEquinox,
        SeasonBoundary::WinterSolstice,
    ];

    /// Solar longitude modulo π: equinoxes at 0, solstices at π/2
    fn target(&self) -> f64 {
        match self {
            SeasonBoundary::VernalEquinox | SeasonBoundary::AutumnEquinox => 0.0,
            SeasonBoundary::SummerSolstice | SeasonBoundary::WinterSolstice => PI / 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonBoundary::VernalEquinox => "♈ Vernal Equinox",
            SeasonBoundary::SummerSolstice => "♋ Summer Solstice",
            SeasonBoundary::AutumnEquinox => "♎ Autumn Equinox",
            SeasonBoundary::WinterSolstice => "♑ Winter Solstice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Elongation of the moon from the sun, multiples of 45°
    pub fn angle(&self) -> f64 {
        let eighths = match self {
            MoonPhase::New => 0.0,
            MoonPhase::WaxingCrescent => 1.0,
            MoonPhase::FirstQuarter => 2.0,
            MoonPhase::WaxingGibbous => 3.0,
            MoonPhase::Full => 4.0,
            MoonPhase::WaningGibbous => 5.0,
            MoonPhase::LastQuarter => 6.0,
            MoonPhase::WaningCrescent => 7.0,
        };
        eighths * PI / 4.0
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MoonPhase::New => "🌚",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::Full => "🌝",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }
}

/// Drop seconds and fractions of a second
fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time - Duration::seconds(time.second() as i64)
        - Duration::nanoseconds(time.nanosecond() as i64)
}

/// Searches run into the following year, so the last representable year is rejected
fn start_of_year(year: i32) -> Result<NaiveDateTime, AstroError> {
    check_year(year, NaiveDate::MIN.year())?;
    Ok(make_date(year, 1, 1)?.and_time(NaiveTime::default()))
}

/// The four season boundaries of `year`, each searched from the previous one
pub fn seasons<O: PhaseOracle>(year: i32, oracle: &O) -> Result<Vec<CalendarEvent>, AstroError> {
    let mut time = start_of_year(year)?;
    let mut events = Vec::with_capacity(4);
    for boundary in SeasonBoundary::ALL {
        time = oracle.next_phase(Body::Sun, time, PI, boundary.target())?;
        debug!("{} at {}", boundary.label(), time);
        events.push(CalendarEvent::instant(
            truncate_to_minute(time),
            boundary.label(),
        ));
    }
    Ok(events)
}

/// Every occurrence of the eight moon phases within `year`
pub fn moon_phases<O: PhaseOracle>(
    year: i32,
    oracle: &O,
) -> Result<Vec<CalendarEvent>, AstroError> {
    let start = start_of_year(year)?;
    let mut events = Vec::with_capacity(8 * 13);
    for phase in MoonPhase::ALL {
        let mut time = start;
        loop {
            time = oracle.next_phase(Body::Moon, time, TAU, phase.angle())?;
            if time.year() > year {
                break;
            }
            events.push(CalendarEvent::instant(
                truncate_to_minute(time),
                phase.symbol(),
            ));
        }
    }
    Ok(events)
}

/// All astronomical events of `year` sorted by start time
pub fn astro_events<O: PhaseOracle>(
    year: i32,
    oracle: &O,
) -> Result<Vec<CalendarEvent>, AstroError> {
    let mut events = seasons(year, oracle)?;
    events.extend(moon_phases(year, oracle)?);
    events.sort_by(|a, b| a.start.cmp(&b.start));
    Ok(events)
}
