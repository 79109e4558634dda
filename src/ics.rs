//! Serialization of calendar events into iCalendar files.
//!
//! A file consists of one or more sections. Each section holds the events of one
//! category, and every event gets the UID `<prefix><year><sequence>@<namespace>`
//! where the sequence restarts at 1 in each section. Together with distinct
//! prefixes this keeps all UIDs of a file unique.

use chrono::NaiveDateTime;
use log::info;
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Settings;
use crate::event::{CalendarEvent, EventTime};

const CRLF: &str = "\r\n";

#[derive(Error, Debug)]
pub enum IcsError {
    #[error("failed to write calendar file")]
    Io(#[from] io::Error),
    #[error("failed to format calendar")]
    Format(#[from] fmt::Error),
}

/// Events of one category together with their UID prefix and the minimal
/// number of digits of the sequence number
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub prefix: &'a str,
    pub width: usize,
    pub events: &'a [CalendarEvent],
}

#[derive(Debug, Clone)]
pub struct IcsCalendar<'a> {
    prod_id: &'a str,
    namespace: &'a str,
    year: i32,
    created: NaiveDateTime,
    sections: Vec<Section<'a>>,
}

impl<'a> IcsCalendar<'a> {
    /// `created` is used for both the CREATED and all DTSTAMP properties
    pub fn new(settings: &'a Settings, year: i32, created: NaiveDateTime) -> Self {
        IcsCalendar {
            prod_id: &settings.prod_id,
            namespace: &settings.namespace,
            year,
            created,
            sections: Vec::new(),
        }
    }

    /// Append a section, events are written in the given order
    pub fn add_section(&mut self, prefix: &'a str, width: usize, events: &'a [CalendarEvent]) {
        self.sections.push(Section {
            prefix,
            width,
            events,
        });
    }

    pub fn num_events(&self) -> usize {
        self.sections.iter().map(|s| s.events.len()).sum()
    }

    pub fn render(&self) -> Result<String, IcsError> {
        let created = self.created.format("%Y%m%dT%H%M%SZ").to_string();
        let mut out = String::new();
        write!(
            out,
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             CALSCALE:GREGORIAN\r\n\
             PRODID:{}\r\n\
             CREATED;VALUE=DATE:{}\r\n",
            self.prod_id, created
        )?;
        for section in &self.sections {
            for (i, event) in section.events.iter().enumerate() {
                let uid = format!(
                    "{}{}{:0width$}@{}",
                    section.prefix,
                    self.year,
                    i + 1,
                    self.namespace,
                    width = section.width
                );
                write_event(&mut out, &uid, event, &created)?;
            }
        }
        out.push_str("END:VCALENDAR");
        out.push_str(CRLF);
        Ok(out)
    }

    /// Write the calendar to `<dir>/<domain>-<year>.ics`, replacing any existing file
    pub fn write_file(&self, dir: &Path, domain: &str) -> Result<PathBuf, IcsError> {
        let path = dir.join(file_name(domain, self.year));
        let mut file = File::create(&path)?;
        file.write_all(self.render()?.as_bytes())?;
        file.flush()?;
        info!("Wrote {} events to {}", self.num_events(), path.display());
        Ok(path)
    }
}

pub fn file_name(domain: &str, year: i32) -> String {
    format!("{}-{}.ics", domain, year)
}

fn time_property(name: &str, time: &EventTime) -> String {
    match time {
        EventTime::Date(_) => format!("{};VALUE=DATE:{}", name, time),
        EventTime::DateTime(_) => format!("{}:{}", name, time),
    }
}

fn write_event<W: fmt::Write>(
    out: &mut W,
    uid: &str,
    event: &CalendarEvent,
    created: &str,
) -> fmt::Result {
    write!(
        out,
        "BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         {start}\r\n\
         {end}\r\n\
         SUMMARY:{label}\r\n\
         DTSTAMP:{created}\r\n\
         TRANSP:TRANSPARENT\r\n\
         STATUS:CONFIRMED\r\n\
         END:VEVENT\r\n",
        uid = uid,
        start = time_property("DTSTART", &event.start),
        end = time_property("DTEND", &event.end),
        label = event.label,
        created = created,
    )
}
