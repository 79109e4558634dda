//! United States holidays.
//! Federal holidays, national weeks and days recognized by presidential
//! proclamation, and a few popular unofficial observances. All of them
//! are expressed as `Observance` tables and evaluated through `DateRule`.

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

use crate::calendar::{check_year, CalendarError};
use crate::event::CalendarEvent;
use crate::rules::{
    easter_offset, fixed, last_weekday, nth_weekday, sunday_before, weekend_observed, DateRule,
    Observance, YearCycle,
};

/// Years up to this one are rejected, the Gregorian calendar starts in 1582
pub const FIRST_YEAR: i32 = 1582;

/// Length of a proclamation week in days
const WEEK_DAYS: i64 = 7;

/// Holidays of one year, split up so callers may leave out the optional parts
#[derive(Debug, Clone, PartialEq)]
pub struct UsHolidays {
    /// Weeks recognized by presidential proclamation, seven days each
    pub weeks: Vec<CalendarEvent>,
    /// Federal holidays, including days they are observed on
    pub federal: Vec<CalendarEvent>,
    /// Days recognized by proclamation and unofficial observances
    pub days: Vec<CalendarEvent>,
}

impl UsHolidays {
    pub fn new(year: i32) -> Result<UsHolidays, CalendarError> {
        check_year(year, FIRST_YEAR)?;
        let mut weeks = Vec::new();
        for observance in proclamation_weeks() {
            if let Some(date) = observance.date_in(year)? {
                weeks.push(CalendarEvent::days(date, WEEK_DAYS, &observance.label));
            }
        }

        let mut federal = Vec::new();
        for observance in federal_holidays() {
            if let Some(date) = observance.date_in(year)? {
                federal.push(CalendarEvent::day(date, &observance.label));
            }
        }
        federal.extend(observed_holidays(year)?);

        let mut days = Vec::new();
        for observance in proclamation_days() {
            if let Some(date) = observance.date_in(year)? {
                days.push(CalendarEvent::day(date, &observance.label));
            }
        }

        sort_by_start(&mut weeks);
        sort_by_start(&mut federal);
        sort_by_start(&mut days);
        Ok(UsHolidays {
            weeks,
            federal,
            days,
        })
    }
}

/// Stable sort, keeps table order for events on the same date
fn sort_by_start(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| a.start.cmp(&b.start));
}

/// How the day off is determined for a holiday tied to a fixed date
enum Observed {
    /// Holiday moved by law to a weekday of the month, e.g. the 3rd Monday of January
    Monday { offset: i64 },
    /// Saturday is observed on Friday, Sunday on Monday
    Weekend,
}

struct ObservedRule {
    month: u32,
    day: u32,
    observed: Observed,
    label: &'static str,
}

const OBSERVED_RULES: [ObservedRule; 7] = [
    ObservedRule {
        month: 1,
        day: 1,
        observed: Observed::Weekend,
        label: "✯ New Years Day (Observed) ✯",
    },
    ObservedRule {
        month: 1,
        day: 15,
        observed: Observed::Monday { offset: 14 },
        label: "✯ Martin Luther King’s Birthday (Observed) ✯",
    },
    ObservedRule {
        month: 2,
        day: 22,
        observed: Observed::Monday { offset: 14 },
        label: "✯ Washington’s Birthday (Observed) ✯",
    },
    ObservedRule {
        month: 7,
        day: 4,
        observed: Observed::Weekend,
        label: "✯ Independence Day (Observed) ✯",
    },
    ObservedRule {
        month: 10,
        day: 12,
        observed: Observed::Monday { offset: 7 },
        label: "✯ Columbus Day (Observed) ✯",
    },
    ObservedRule {
        month: 11,
        day: 11,
        observed: Observed::Weekend,
        label: "✯ Veterans’ Day (Observed) ✯",
    },
    ObservedRule {
        month: 12,
        day: 25,
        observed: Observed::Weekend,
        label: "✯ Christmas Day (Observed) ✯",
    },
];

impl ObservedRule {
    /// The observed date in `year`, if it differs from the holiday itself
    fn observed_in(&self, year: i32) -> Result<Option<NaiveDate>, CalendarError> {
        let holiday = fixed(self.month, self.day).date_in(year)?;
        let observed = match self.observed {
            Observed::Monday { offset } => nth_weekday(self.month, Weekday::Mon, offset).date_in(year)?,
            Observed::Weekend => weekend_observed(holiday),
        };
        if observed == holiday {
            Ok(None)
        } else {
            Ok(Some(observed))
        }
    }
}

/// Observed days falling into `year`. A Saturday New Year's Day is observed
/// on December 31st of the year before, so the following year is checked too.
fn observed_holidays(year: i32) -> Result<Vec<CalendarEvent>, CalendarError> {
    let mut events = Vec::new();
    for rule in OBSERVED_RULES.iter() {
        for y in [year, year + 1] {
            if let Some(date) = rule.observed_in(y)? {
                if date.year() == year {
                    debug!("{} observed on {}", rule.label, date);
                    events.push(CalendarEvent::day(date, rule.label));
                }
            }
        }
    }
    Ok(events)
}

fn table(entries: Vec<(DateRule, &str)>) -> Vec<Observance> {
    entries
        .into_iter()
        .map(|(rule, label)| Observance::new(rule, label))
        .collect()
}

pub fn federal_holidays() -> Vec<Observance> {
    let mut holidays = table(vec![
        (fixed(1, 1), "✯ New Years Day ✯"),
        (fixed(1, 15), "✯ Martin Luther King’s Birthday ✯"),
        (fixed(2, 22), "✯ Washington’s Birthday ✯"),
        (fixed(7, 4), "✯ Independence Day ✯"),
        (fixed(10, 12), "✯ Columbus Day ✯"),
        (fixed(11, 11), "✯ Veterans’ Day ✯"),
        (fixed(12, 25), "✯ Christmas Day ✯"),
        (last_weekday(5, Weekday::Mon, 0), "✯ Memorial Day ✯"),
        (nth_weekday(9, Weekday::Mon, 0), "✯ Labor Day ✯"),
        (nth_weekday(11, Weekday::Thu, 21), "✯ Thanksgiving Day ✯"),
    ]);
    holidays.push(
        Observance::new(fixed(1, 20), "✯ Inauguration day ✯").with_cycle(YearCycle::Periodic {
            period: 4,
            remainder: 1,
        }),
    );
    holidays
}

pub fn proclamation_weeks() -> Vec<Observance> {
    table(vec![
        (nth_weekday(3, Weekday::Sun, 0), "Save Your Vision Week"),
        (nth_weekday(3, Weekday::Sun, 14), "National Poison Prevention Week"),
        (nth_weekday(5, Weekday::Fri, 9), "National Transportation Week"),
        (nth_weekday(5, Weekday::Sun, 14), "World Trade Week"),
        (nth_weekday(5, Weekday::Sun, 14), "National Hurricane Preparedness Week"),
        (nth_weekday(7, Weekday::Sun, 14), "Captive Nations Week"),
        (nth_weekday(9, Weekday::Sun, 14), "National Farm Safety and Health Week"),
        (nth_weekday(10, Weekday::Sun, 7), "National School Lunch Week"),
        (nth_weekday(10, Weekday::Sun, 14), "National Character Counts Week"),
        (nth_weekday(10, Weekday::Sun, 14), "National Forest Products Week"),
        (nth_weekday(11, Weekday::Thu, 17), "National Family Week"),
        (nth_weekday(11, Weekday::Thu, 17), "National Farm-City Week"),
        (sunday_before(4, 14), "Pan American Week"),
        (sunday_before(6, 14), "National Flag Week"),
        (sunday_before(9, 17), "Constitution Week"),
        (sunday_before(10, 9), "Fire Prevention Week"),
        (sunday_before(12, 10), "Human Rights Week"),
        (last_weekday(4, Weekday::Sat, 6), "National Volunteer Week"),
        (last_weekday(5, Weekday::Mon, 8), "National Safe Boating Week"),
        (fixed(12, 26), "Kwanzaa"),
    ])
}

pub fn proclamation_days() -> Vec<Observance> {
    table(vec![
        (fixed(1, 16), "Religious Freedom Day"),
        (fixed(2, 15), "Susan B. Anthony Day"),
        (fixed(3, 10), "Harriet Tubman Day"),
        (fixed(3, 25), "Greek Independence Day"),
        (fixed(3, 31), "Cesar Chavez Day"),
        (fixed(4, 6), "National Tartan Day"),
        (fixed(4, 9), "National Former Prisoner of War Recognition Day"),
        (fixed(4, 14), "Pan American Day"),
        (fixed(5, 1), "Loyalty Day"),
        (fixed(5, 1), "Law Day, U.S.A."),
        (fixed(5, 15), "Peace Officers Memorial Day"),
        (fixed(5, 19), "Malcolm X Day"),
        (fixed(5, 22), "National Maritime Day"),
        (fixed(5, 25), "National Missing Childrens Day"),
        (fixed(6, 14), "Flag Day"),
        (fixed(7, 27), "National Korean War Veterans Armistice Day"),
        (fixed(8, 16), "National Airborne Day"),
        (fixed(8, 26), "Women’s Equality Day"),
        (fixed(9, 11), "Patriot Day"),
        (fixed(9, 11), "Emergency Number Day"),
        (fixed(9, 17), "Citizenship Day"),
        (fixed(9, 22), "American Business Womens Day"),
        (fixed(9, 28), "National Good Neighbor Day"),
        (fixed(10, 6), "German-American Day"),
        (fixed(10, 9), "Leif Erikson Day"),
        (fixed(10, 11), "General Pulaski Memorial Day"),
        (fixed(10, 15), "White Cane Safety Day"),
        (fixed(10, 24), "United Nations Day"),
        (fixed(11, 9), "World Freedom Day"),
        (fixed(11, 15), "National Philanthropy Day"),
        (fixed(11, 15), "America Recycles Day"),
        (fixed(12, 1), "World AIDS Day"),
        (fixed(12, 3), "International Day of Persons with Disabilities"),
        (fixed(12, 7), "National Pearl Harbor Remembrance Day"),
        (fixed(12, 10), "Human Rights Day"),
        (fixed(12, 15), "Bill of Rights Day"),
        (fixed(12, 17), "Wright Brothers Day"),
        (nth_weekday(1, Weekday::Sun, 14), "National Sanctity of Human Life Day"),
        (nth_weekday(4, Weekday::Thu, 7), "National D.A.R.E. Day"),
        (nth_weekday(5, Weekday::Thu, 0), "National Day of Prayer"),
        (nth_weekday(5, Weekday::Fri, 7), "Military Spouse Day"),
        (nth_weekday(5, Weekday::Sun, 7), "Mother’s Day"),
        (nth_weekday(5, Weekday::Fri, 14), "National Defense Transportation Day"),
        (nth_weekday(5, Weekday::Sat, 14), "Armed Forces Day"),
        (nth_weekday(6, Weekday::Mon, 0), "National Child’s Day"),
        (nth_weekday(6, Weekday::Sun, 14), "Father’s Day"),
        (nth_weekday(9, Weekday::Fri, 14), "National POW/MIA Recognition Day"),
        (nth_weekday(9, Weekday::Mon, 21), "Family Day"),
        (nth_weekday(10, Weekday::Mon, 0), "Child Health Day"),
        (nth_weekday(11, Weekday::Mon, 1), "Election Day"),
        (nth_weekday(11, Weekday::Thu, 22), "Native American Heritage Day"),
        (last_weekday(7, Weekday::Sun, 0), "Parent’s Day"),
        (last_weekday(9, Weekday::Sun, 0), "Gold Star Mothers Day"),
        // daylight saving time
        (nth_weekday(3, Weekday::Sun, 7), "Daylight Savings Begins"),
        (nth_weekday(11, Weekday::Sun, 0), "Daylight Savings Ends"),
        // unofficial
        (easter_offset(-47), "Mardi Gras"),
        (fixed(2, 2), "Groundhog Day"),
        (fixed(2, 14), "Valentine’s Day"),
        (fixed(3, 8), "International Women’s Day"),
        (fixed(3, 14), "Pi Day"),
        (fixed(3, 17), "St. Patrick’s Day"),
        (fixed(4, 1), "April Fool’s Day"),
        (fixed(4, 22), "Earth Day"),
        (fixed(5, 1), "May Day"),
        (fixed(5, 5), "Cinco de Mayo"),
        (fixed(6, 19), "Juneteenth"),
        (fixed(6, 27), "Hellen Keller Day"),
        (fixed(9, 19), "International Talk Like a Pirate Day"),
        (fixed(10, 31), "Halloween"),
        (fixed(12, 24), "Christmas Eve"),
        (fixed(12, 31), "New Years Eve"),
        (last_weekday(4, Weekday::Fri, 0), "Arbor Day"),
    ])
}
