//! Day arithmetic shared by all generators.
//! All functions here are timezone free and work on plain `NaiveDate`s,
//! which already behave like day ordinals: they are totally ordered and
//! support addition of whole days.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("year must be greater than {min}, got {year}")]
    YearOutOfRange { year: i32, min: i32 },
    #[error("year must be at most {max}, got {year}")]
    YearTooLarge { year: i32, max: i32 },
}

/// Construct a date, failing with `InvalidDate` for nonexistent days like Feb 30th
pub fn make_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Last year whose events may end in, or whose searches may run into, the following year
pub fn last_supported_year() -> i32 {
    NaiveDate::MAX.year() - 1
}

/// Reject all years less than or equal to `min` and those after [last_supported_year]
pub fn check_year(year: i32, min: i32) -> Result<i32, CalendarError> {
    let max = last_supported_year();
    if year <= min {
        Err(CalendarError::YearOutOfRange { year, min })
    } else if year > max {
        Err(CalendarError::YearTooLarge { year, max })
    } else {
        Ok(year)
    }
}

/// Returns the number of the last day of the given month
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(end_of_month(year, month)?.day())
}

/// Last date of a month, found as the day before the first of the next month
fn end_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };
    // reject month 0 or 13+ before the rollover hides it
    make_date(year, month, 1)?;
    Ok(make_date(next_year, next_month, 1)? - Duration::days(1))
}

/// First date in `month` of `year` falling on `weekday`.
/// One of the days 1 to 7 always matches.
pub fn first_weekday_on_or_after(
    month: u32,
    year: i32,
    weekday: Weekday,
) -> Result<NaiveDate, CalendarError> {
    let first = make_date(year, month, 1)?;
    Ok((0..7)
        .map(|i| first + Duration::days(i))
        .find(|d| d.weekday() == weekday)
        .unwrap_or(first))
}

/// Last date in `month` of `year` falling on `weekday`, scanning backward from the end of the month
pub fn last_weekday_in_month(
    month: u32,
    year: i32,
    weekday: Weekday,
) -> Result<NaiveDate, CalendarError> {
    let last = end_of_month(year, month)?;
    Ok((0..7)
        .map(|i| last - Duration::days(i))
        .find(|d| d.weekday() == weekday)
        .unwrap_or(last))
}

/// Sunday on or after the given date; a Sunday is returned unchanged
pub fn sunday_on_or_after(month: u32, day: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    let date = make_date(year, month, day)?;
    let to_sunday = 6 - date.weekday().num_days_from_monday() as i64;
    Ok(date + Duration::days(to_sunday))
}

/// Sunday on or before the given date; a Sunday is returned unchanged
pub fn sunday_on_or_before(month: u32, day: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    let date = make_date(year, month, day)?;
    let since_sunday = date.weekday().num_days_from_sunday() as i64;
    Ok(date - Duration::days(since_sunday))
}

/// Easter Sunday of a Gregorian year (1583 onwards) following the
/// Meeus/Jones/Butcher algorithm, integer arithmetic only.
pub fn easter_date(year: i32) -> Result<NaiveDate, CalendarError> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    make_date(year, month as u32, day as u32)
}

/// All Sundays of the calendar year in ascending order, for checking that
/// a generated calendar covers every Sunday of a year
pub fn sundays_in_year(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    let first = sunday_on_or_after(1, 1, year)?;
    let last = make_date(year, 12, 31)?;
    let mut sundays = Vec::with_capacity(53);
    let mut sunday = first;
    while sunday <= last {
        sundays.push(sunday);
        sunday = sunday + Duration::days(7);
    }
    Ok(sundays)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    #[test]
    fn easter_known_years() {
        assert_eq!(easter_date(2024).unwrap(), ymd(2024, 3, 31));
        assert_eq!(easter_date(2019).unwrap(), ymd(2019, 4, 21));
        assert_eq!(easter_date(2000).unwrap(), ymd(2000, 4, 23));
        assert_eq!(easter_date(1818).unwrap(), ymd(1818, 3, 22));
        assert_eq!(easter_date(2038).unwrap(), ymd(2038, 4, 25));
    }

    #[test]
    fn easter_within_bounds() {
        for year in 1900..=2100 {
            let easter = easter_date(year).unwrap();
            assert!(easter >= ymd(year, 3, 22), "{}", easter);
            assert!(easter <= ymd(year, 4, 25), "{}", easter);
            assert_eq!(easter.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn easter_agrees_with_computus() {
        for year in 1583..4100 {
            let expected = computus::gregorian(year).unwrap();
            let expected = ymd(expected.year, expected.month, expected.day);
            assert_eq!(easter_date(year).unwrap(), expected);
        }
    }

    #[test]
    fn first_weekday_in_first_week() {
        for year in [1999, 2023, 2024, 2100] {
            for month in 1..=12 {
                for weekday in WEEKDAYS {
                    let date = first_weekday_on_or_after(month, year, weekday).unwrap();
                    assert_eq!(date.weekday(), weekday);
                    assert_eq!(date.month(), month);
                    assert!(date.day() <= 7);
                }
            }
        }
        assert_eq!(
            first_weekday_on_or_after(9, 2024, Weekday::Mon).unwrap(),
            ymd(2024, 9, 2)
        );
    }

    #[test]
    fn last_weekday_in_last_week() {
        for year in [1999, 2023, 2024, 2100] {
            for month in 1..=12 {
                let last = last_day_of_month(year, month).unwrap();
                for weekday in WEEKDAYS {
                    let date = last_weekday_in_month(month, year, weekday).unwrap();
                    assert_eq!(date.weekday(), weekday);
                    assert_eq!(date.month(), month);
                    assert!(date.day() + 7 > last);
                }
            }
        }
        assert_eq!(
            last_weekday_in_month(5, 2024, Weekday::Mon).unwrap(),
            ymd(2024, 5, 27)
        );
        assert_eq!(
            last_weekday_in_month(12, 2024, Weekday::Tue).unwrap(),
            ymd(2024, 12, 31)
        );
    }

    #[test]
    fn month_lengths() {
        assert_eq!(last_day_of_month(2024, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(2023, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(1900, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(2024, 12).unwrap(), 31);
        assert_eq!(last_day_of_month(2024, 4).unwrap(), 30);
        assert!(last_day_of_month(2024, 13).is_err());
    }

    #[test]
    fn sundays_near_fixed_dates() {
        // 2024-12-25 is a Wednesday
        assert_eq!(sunday_on_or_after(12, 25, 2024).unwrap(), ymd(2024, 12, 29));
        assert_eq!(sunday_on_or_before(12, 25, 2024).unwrap(), ymd(2024, 12, 22));
        // exact matches are returned unchanged
        assert_eq!(sunday_on_or_after(12, 1, 2024).unwrap(), ymd(2024, 12, 1));
        assert_eq!(sunday_on_or_before(12, 1, 2024).unwrap(), ymd(2024, 12, 1));
        // crossing the year boundary
        assert_eq!(sunday_on_or_after(12, 26, 2022).unwrap(), ymd(2023, 1, 1));
    }

    #[test]
    fn invalid_dates_are_errors() {
        assert_eq!(
            make_date(2023, 2, 30),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
        assert!(sunday_on_or_after(2, 29, 2023).is_err());
        assert!(first_weekday_on_or_after(0, 2023, Weekday::Mon).is_err());
    }

    #[test]
    fn year_checks() {
        assert_eq!(check_year(1993, 1992), Ok(1993));
        assert_eq!(
            check_year(1992, 1992),
            Err(CalendarError::YearOutOfRange {
                year: 1992,
                min: 1992
            })
        );
        let max = last_supported_year();
        assert_eq!(check_year(max, 1992), Ok(max));
        assert_eq!(
            check_year(NaiveDate::MAX.year(), 1992),
            Err(CalendarError::YearTooLarge {
                year: NaiveDate::MAX.year(),
                max
            })
        );
        // Dec 31st of the last supported year still has a following day
        assert!(make_date(max, 12, 31).unwrap().succ_opt().is_some());
    }

    #[test]
    fn sundays_of_year() {
        let sundays = sundays_in_year(2024).unwrap();
        assert_eq!(sundays.len(), 52);
        assert_eq!(sundays[0], ymd(2024, 1, 7));
        assert_eq!(*sundays.last().unwrap(), ymd(2024, 12, 29));
        // 2023 starts and ends on a Sunday
        assert_eq!(sundays_in_year(2023).unwrap().len(), 53);
    }
}
