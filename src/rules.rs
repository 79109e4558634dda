//! Declarative date rules.
//! A rule describes how to find one date in a given year; it is plain data
//! and `DateRule::date_in` is the only interpreter. Holiday and observance
//! tables are lists of `Observance`s built from these rules.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    easter_date, first_weekday_on_or_after, last_weekday_in_month, make_date,
    sunday_on_or_after, sunday_on_or_before, CalendarError,
};

/// Direction to look for a Sunday next to a fixed date
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    #[serde(rename = "before")]
    Before,
    #[serde(rename = "after")]
    After,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateRule {
    /// Same month and day every year
    Fixed { month: u32, day: u32 },
    /// First `weekday` of the month plus `offset` days, e.g. the 3rd Monday
    /// is the first Monday plus 14 days
    NthWeekday {
        month: u32,
        weekday: Weekday,
        offset: i64,
    },
    /// Last `weekday` of the month minus `offset` days
    LastWeekday {
        month: u32,
        weekday: Weekday,
        offset: i64,
    },
    /// Sunday on or next to a fixed date, the date itself if it is a Sunday
    SundayNear {
        month: u32,
        day: u32,
        direction: Direction,
    },
    /// Days relative to Easter Sunday
    EasterOffset { days: i64 },
}

impl DateRule {
    pub fn date_in(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        match self {
            DateRule::Fixed { month, day } => make_date(year, *month, *day),
            DateRule::NthWeekday {
                month,
                weekday,
                offset,
            } => Ok(first_weekday_on_or_after(*month, year, *weekday)? + Duration::days(*offset)),
            DateRule::LastWeekday {
                month,
                weekday,
                offset,
            } => Ok(last_weekday_in_month(*month, year, *weekday)? - Duration::days(*offset)),
            DateRule::SundayNear {
                month,
                day,
                direction,
            } => match direction {
                Direction::Before => sunday_on_or_before(*month, *day, year),
                Direction::After => sunday_on_or_after(*month, *day, year),
            },
            DateRule::EasterOffset { days } => Ok(easter_date(year)? + Duration::days(*days)),
        }
    }
}

/// Years in which an observance takes place
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum YearCycle {
    #[default]
    #[serde(rename = "every")]
    Every,
    /// Only years with `year % period == remainder`
    #[serde(rename = "periodic")]
    Periodic { period: i32, remainder: i32 },
}

impl YearCycle {
    pub fn contains(&self, year: i32) -> bool {
        match self {
            YearCycle::Every => true,
            YearCycle::Periodic { period, remainder } => year.rem_euclid(*period) == *remainder,
        }
    }
}

/// A named date rule, the unit of all holiday tables
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Observance {
    pub rule: DateRule,
    pub label: String,
    #[serde(default)]
    pub cycle: YearCycle,
}

impl Observance {
    pub fn new(rule: DateRule, label: &str) -> Observance {
        Observance {
            rule,
            label: label.to_string(),
            cycle: YearCycle::Every,
        }
    }

    pub fn with_cycle(mut self, cycle: YearCycle) -> Observance {
        self.cycle = cycle;
        self
    }

    /// Date of the observance in `year`, `None` if it does not take place that year
    pub fn date_in(&self, year: i32) -> Result<Option<NaiveDate>, CalendarError> {
        if self.cycle.contains(year) {
            Ok(Some(self.rule.date_in(year)?))
        } else {
            Ok(None)
        }
    }
}

/// Shorthand constructors keeping the tables readable
pub fn fixed(month: u32, day: u32) -> DateRule {
    DateRule::Fixed { month, day }
}

pub fn nth_weekday(month: u32, weekday: Weekday, offset: i64) -> DateRule {
    DateRule::NthWeekday {
        month,
        weekday,
        offset,
    }
}

pub fn last_weekday(month: u32, weekday: Weekday, offset: i64) -> DateRule {
    DateRule::LastWeekday {
        month,
        weekday,
        offset,
    }
}

pub fn sunday_before(month: u32, day: u32) -> DateRule {
    DateRule::SundayNear {
        month,
        day,
        direction: Direction::Before,
    }
}

pub fn easter_offset(days: i64) -> DateRule {
    DateRule::EasterOffset { days }
}

/// Move a date falling on a weekend to the closest weekday:
/// Saturday to the preceding Friday, Sunday to the following Monday
pub fn weekend_observed(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn interpret_rules() {
        assert_eq!(fixed(7, 4).date_in(2024).unwrap(), ymd(2024, 7, 4));
        // 3rd Monday of January
        assert_eq!(
            nth_weekday(1, Weekday::Mon, 14).date_in(2024).unwrap(),
            ymd(2024, 1, 15)
        );
        // 4th Thursday of November
        assert_eq!(
            nth_weekday(11, Weekday::Thu, 21).date_in(2024).unwrap(),
            ymd(2024, 11, 28)
        );
        assert_eq!(
            last_weekday(5, Weekday::Mon, 0).date_in(2024).unwrap(),
            ymd(2024, 5, 27)
        );
        // Saturday before the last Monday of May
        assert_eq!(
            last_weekday(5, Weekday::Mon, 2).date_in(2024).unwrap(),
            ymd(2024, 5, 25)
        );
        assert_eq!(sunday_before(6, 14).date_in(2024).unwrap(), ymd(2024, 6, 9));
        assert_eq!(easter_offset(-47).date_in(2024).unwrap(), ymd(2024, 2, 13));
    }

    #[test]
    fn invalid_rule_fails() {
        assert_eq!(
            fixed(2, 30).date_in(2024),
            Err(CalendarError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn cycles() {
        let inauguration = Observance::new(fixed(1, 20), "Inauguration Day")
            .with_cycle(YearCycle::Periodic {
                period: 4,
                remainder: 1,
            });
        assert_eq!(inauguration.date_in(2025).unwrap(), Some(ymd(2025, 1, 20)));
        assert_eq!(inauguration.date_in(2024).unwrap(), None);
    }

    #[test]
    fn weekend_shift() {
        assert_eq!(weekend_observed(ymd(2021, 12, 25)), ymd(2021, 12, 24));
        assert_eq!(weekend_observed(ymd(2022, 12, 25)), ymd(2022, 12, 26));
        assert_eq!(weekend_observed(ymd(2024, 12, 25)), ymd(2024, 12, 25));
    }

    #[test]
    fn rules_as_data() {
        let json = r#"{
            "rule": {"kind": "nth_weekday", "month": 11, "weekday": "Thu", "offset": 21},
            "label": "Thanksgiving Day"
        }"#;
        let observance: Observance = serde_json::from_str(json).unwrap();
        assert_eq!(observance.cycle, YearCycle::Every);
        assert_eq!(observance.date_in(2024).unwrap(), Some(ymd(2024, 11, 28)));

        let json = r#"{"kind": "sunday_near", "month": 4, "day": 14, "direction": "before"}"#;
        let rule: DateRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule, sunday_before(4, 14));
    }
}
