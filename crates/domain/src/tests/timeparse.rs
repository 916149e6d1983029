// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, minutes_to_hhmm, minutes_to_time, parse_hhmm, parse_iso_date, parse_sheet_date,
    parse_sheet_time, time_to_minutes, to_12h,
};
use time::macros::{date, time};

#[test]
fn test_parse_iso_date() {
    assert_eq!(
        parse_sheet_date("2025-02-10").unwrap(),
        date!(2025 - 02 - 10)
    );
}

#[test]
fn test_parse_slash_date_unpadded() {
    assert_eq!(parse_sheet_date("2/3/2025").unwrap(), date!(2025 - 02 - 03));
    assert_eq!(
        parse_sheet_date("12/31/2025").unwrap(),
        date!(2025 - 12 - 31)
    );
}

#[test]
fn test_parse_dash_date_with_trailing_year() {
    assert_eq!(parse_sheet_date("2-3-2025").unwrap(), date!(2025 - 02 - 03));
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert!(matches!(
        parse_sheet_date("soon"),
        Err(DomainError::DateParse { .. })
    ));
    assert!(parse_sheet_date("").is_err());
    assert!(parse_sheet_date("2025-13-01").is_err());
    assert!(parse_sheet_date("2025-02-30").is_err());
}

#[test]
fn test_parse_time_24h_forms() {
    assert_eq!(parse_sheet_time("9:00").unwrap(), time!(09:00));
    assert_eq!(parse_sheet_time("09:00").unwrap(), time!(09:00));
    assert_eq!(parse_sheet_time("14:30:00").unwrap(), time!(14:30));
}

#[test]
fn test_parse_time_12h_forms() {
    assert_eq!(parse_sheet_time("9:00 AM").unwrap(), time!(09:00));
    assert_eq!(parse_sheet_time("9:00 PM").unwrap(), time!(21:00));
    assert_eq!(parse_sheet_time("12:00 AM").unwrap(), time!(00:00));
    assert_eq!(parse_sheet_time("12:00 PM").unwrap(), time!(12:00));
    assert_eq!(parse_sheet_time("2:40:00 pm").unwrap(), time!(14:40));
}

#[test]
fn test_parse_time_fraction_of_day() {
    assert_eq!(parse_sheet_time("0.375").unwrap(), time!(09:00));
    assert_eq!(parse_sheet_time("0.5").unwrap(), time!(12:00));
}

#[test]
fn test_parse_time_rejects_garbage() {
    assert!(matches!(
        parse_sheet_time("noonish"),
        Err(DomainError::TimeParse { .. })
    ));
    assert!(parse_sheet_time("").is_err());
    assert!(parse_sheet_time("25:00").is_err());
    assert!(parse_sheet_time("9:61").is_err());
}

#[test]
fn test_parse_iso_date_is_strict() {
    assert_eq!(
        parse_iso_date("2025-02-10").unwrap(),
        date!(2025 - 02 - 10)
    );
    assert!(parse_iso_date("2/10/2025").is_err());
    assert!(parse_iso_date("2025-2-10").is_err());
    assert!(parse_iso_date("2025-02-10 ").is_err());
}

#[test]
fn test_parse_hhmm_is_strict() {
    assert_eq!(parse_hhmm("09:00").unwrap(), time!(09:00));
    assert!(parse_hhmm("9:00").is_err());
    assert!(parse_hhmm("09:00 AM").is_err());
    assert!(parse_hhmm("0900").is_err());
}

#[test]
fn test_minutes_round_trip() {
    let t: time::Time = time!(11:30);
    assert_eq!(time_to_minutes(t), 690);
    assert_eq!(minutes_to_time(690), t);
    assert_eq!(minutes_to_hhmm(690), "11:30");
}

#[test]
fn test_minutes_wrap_past_midnight() {
    // 22:00 + 400 minutes lands at 04:40 the next day.
    assert_eq!(minutes_to_hhmm(22 * 60 + 400), "04:40");
}

#[test]
fn test_canonical_reemission_is_idempotent() {
    for cell in ["09:00", "9:00 AM", "0.375"] {
        let parsed: time::Time = parse_sheet_time(cell).unwrap();
        let canonical: String = minutes_to_hhmm(time_to_minutes(parsed));
        assert_eq!(canonical, "09:00");
        assert_eq!(parse_sheet_time(&canonical).unwrap(), parsed);
    }
}

#[test]
fn test_12_hour_display() {
    assert_eq!(to_12h(time!(09:00)), "9:00 AM");
    assert_eq!(to_12h(time!(14:40)), "2:40 PM");
    assert_eq!(to_12h(time!(00:05)), "12:05 AM");
    assert_eq!(to_12h(time!(12:00)), "12:00 PM");
}
