// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tolerant parsing for spreadsheet date and time cells.
//!
//! The availability and bookings tabs are edited by hand, so cells arrive in
//! several forms: ISO dates, `M/D/YYYY` dates, 24-hour times, 12-hour times
//! with an AM/PM suffix, and fraction-of-day numbers produced when a sheet
//! reformats a time cell. Parsing here is strict per call but callers at the
//! row-mapping layer skip rows that fail rather than propagating errors.

use crate::error::DomainError;
use time::{Date, Month, Time};

/// Minutes in one day. Used to wrap arithmetic that may pass midnight.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses a date cell.
///
/// Accepted forms: `YYYY-MM-DD`, `M/D/YYYY`, and `M-D-YYYY`.
///
/// # Errors
///
/// Returns `DomainError::DateParse` when the cell matches none of the
/// accepted forms or names an impossible calendar date.
pub fn parse_sheet_date(cell: &str) -> Result<Date, DomainError> {
    let s: &str = cell.trim();
    if s.is_empty() {
        return Err(DomainError::DateParse {
            cell: cell.to_string(),
        });
    }

    let parts: Vec<&str> = if s.contains('/') {
        s.split('/').collect()
    } else {
        s.split('-').collect()
    };
    if parts.len() != 3 {
        return Err(DomainError::DateParse {
            cell: cell.to_string(),
        });
    }

    // ISO puts the 4-digit year first; the slash and dash forms put it last.
    let (year_part, month_part, day_part) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[0], parts[1])
    };

    let err = || DomainError::DateParse {
        cell: cell.to_string(),
    };
    let year: i32 = year_part.parse().map_err(|_| err())?;
    let month_num: u8 = month_part.parse().map_err(|_| err())?;
    let day: u8 = day_part.parse().map_err(|_| err())?;
    let month: Month = Month::try_from(month_num).map_err(|_| err())?;

    Date::from_calendar_date(year, month, day).map_err(|_| err())
}

/// Parses a time cell.
///
/// Accepted forms: `H:MM`, `HH:MM`, either with an optional `:SS` component
/// and an optional `AM`/`PM` suffix, and a fraction-of-day number such as
/// `0.375` (09:00).
///
/// # Errors
///
/// Returns `DomainError::TimeParse` when the cell matches none of the
/// accepted forms.
pub fn parse_sheet_time(cell: &str) -> Result<Time, DomainError> {
    let s: String = cell.trim().to_uppercase();
    if s.is_empty() {
        return Err(DomainError::TimeParse {
            cell: cell.to_string(),
        });
    }

    let err = || DomainError::TimeParse {
        cell: cell.to_string(),
    };

    // Fraction-of-day cells have no colon.
    if !s.contains(':') {
        let fraction: f64 = s.parse().map_err(|_| err())?;
        if !fraction.is_finite() || fraction.is_sign_negative() {
            return Err(err());
        }
        #[allow(clippy::cast_possible_truncation)]
        let minutes: i32 = (fraction * f64::from(MINUTES_PER_DAY)).round() as i32;
        return Ok(minutes_to_time(minutes));
    }

    let (clock, meridiem): (&str, Option<&str>) =
        match (s.strip_suffix("AM"), s.strip_suffix("PM")) {
            (Some(rest), _) => (rest.trim_end(), Some("AM")),
            (_, Some(rest)) => (rest.trim_end(), Some("PM")),
            _ => (s.as_str(), None),
        };

    let pieces: Vec<&str> = clock.split(':').collect();
    if pieces.len() != 2 && pieces.len() != 3 {
        return Err(err());
    }
    let mut hour: u8 = pieces[0].parse().map_err(|_| err())?;
    let minute: u8 = pieces[1].parse().map_err(|_| err())?;

    match meridiem {
        Some("PM") if hour != 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        _ => {}
    }

    Time::from_hms(hour, minute, 0).map_err(|_| err())
}

/// Parses a strict `YYYY-MM-DD` request field.
///
/// Request validation is deliberately tighter than sheet-cell parsing: the
/// UI always sends canonical ISO dates, so anything else is a bad request
/// rather than a cell quirk to tolerate.
///
/// # Errors
///
/// Returns `DomainError::DateParse` for anything looser than `YYYY-MM-DD`.
pub fn parse_iso_date(field: &str) -> Result<Date, DomainError> {
    let bytes: &[u8] = field.as_bytes();
    let well_formed: bool = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(DomainError::DateParse {
            cell: field.to_string(),
        });
    }
    parse_sheet_date(field)
}

/// Parses a strict `HH:MM` request field (two digits each, 24-hour).
///
/// # Errors
///
/// Returns `DomainError::TimeParse` for anything looser than `HH:MM`.
pub fn parse_hhmm(field: &str) -> Result<Time, DomainError> {
    let bytes: &[u8] = field.as_bytes();
    let well_formed: bool = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !well_formed {
        return Err(DomainError::TimeParse {
            cell: field.to_string(),
        });
    }
    parse_sheet_time(field)
}

/// Converts a wall-clock time to minutes past midnight.
#[must_use]
pub fn time_to_minutes(t: Time) -> i32 {
    i32::from(t.hour()) * 60 + i32::from(t.minute())
}

/// Converts minutes past midnight to a wall-clock time, wrapping at midnight.
///
/// Job end times may arithmetically pass midnight (a long job late in the
/// day); the stored display value wraps the same way the sheet does.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn minutes_to_time(minutes: i32) -> Time {
    let wrapped: i32 = minutes.rem_euclid(MINUTES_PER_DAY);
    Time::from_hms((wrapped / 60) as u8, (wrapped % 60) as u8, 0).unwrap_or(Time::MIDNIGHT)
}

/// Formats minutes past midnight as canonical `HH:MM`, wrapping at midnight.
#[must_use]
pub fn minutes_to_hhmm(minutes: i32) -> String {
    let wrapped: i32 = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Formats a wall-clock time in the 12-hour display form the bookings tab
/// stores, e.g. `2:40 PM`.
#[must_use]
pub fn to_12h(t: Time) -> String {
    let hour: u8 = t.hour();
    let meridiem: &str = if hour >= 12 { "PM" } else { "AM" };
    let display_hour: u8 = (hour + 11) % 12 + 1;
    format!("{display_hour}:{:02} {meridiem}", t.minute())
}
