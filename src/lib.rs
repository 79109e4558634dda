//! # yearcal
//!
//! Generators for yearly calendars in iCalendar format. Three kinds of calendars
//! are supported, each written to its own `.ics` file:
//!
//! - the church year of the Evangelical Lutheran Church in America, with the
//!   Sundays and principal festivals, lesser festivals and commemorations,
//! - federal holidays of the United States, optionally together with the weeks
//!   and days recognized by presidential proclamation,
//! - equinoxes, solstices and the phases of the moon.
//!
//! All movable dates are derived from simple date rules: fixed days, the n-th
//! or last weekday of a month, Sundays next to a date and offsets from Easter.
//! Rule tables are plain data, see [rules::DateRule]. Astronomical events are
//! found by any implementation of [ephemeris::PhaseOracle], a low precision
//! analytic one is included.

// macro exports
#[macro_use]
pub mod macros;

// module exports
pub mod astro;
pub mod calendar;
pub mod church_year;
pub mod config;
pub mod ephemeris;
pub mod event;
pub mod ics;
pub mod rules;
pub mod us_holidays;

pub use calendar::CalendarError;
pub use config::Settings;
pub use event::{CalendarEvent, EventTime};
pub use ics::IcsCalendar;
