use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Start or end of an event, either a whole day or an instant in UTC
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl EventTime {
    /// One unit later: the next day for dates, the next second for instants
    pub fn next(&self) -> EventTime {
        match self {
            EventTime::Date(date) => EventTime::Date(*date + Duration::days(1)),
            EventTime::DateTime(time) => EventTime::DateTime(*time + Duration::seconds(1)),
        }
    }
}

/// Formats as the iCalendar value, `YYYYMMDD` or `YYYYMMDDTHHMMSSZ`
impl Display for EventTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(date) => write!(f, "{}", date.format("%Y%m%d")),
            EventTime::DateTime(time) => write!(f, "{}", time.format("%Y%m%dT%H%M%SZ")),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub start: EventTime,
    pub end: EventTime,
    pub label: String,
}

impl CalendarEvent {
    /// A single whole day
    pub fn day(date: NaiveDate, label: &str) -> CalendarEvent {
        CalendarEvent {
            start: EventTime::Date(date),
            end: EventTime::Date(date + Duration::days(1)),
            label: label.to_string(),
        }
    }

    /// A range of whole days, starting at `date`
    pub fn days(date: NaiveDate, days: i64, label: &str) -> CalendarEvent {
        CalendarEvent {
            start: EventTime::Date(date),
            end: EventTime::Date(date + Duration::days(days)),
            label: label.to_string(),
        }
    }

    /// A one second event at the given UTC instant
    pub fn instant(time: NaiveDateTime, label: &str) -> CalendarEvent {
        let start = EventTime::DateTime(time);
        CalendarEvent {
            start,
            end: start.next(),
            label: label.to_string(),
        }
    }
}
