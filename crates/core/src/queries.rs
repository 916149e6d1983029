// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::capacity::capacity_map;
use crate::error::CoreError;
use crate::policy::BookingPolicy;
use crate::snapshot::Snapshot;
use serde::Serialize;
use suds_domain::DomainError;
use time::{Date, Month, PrimitiveDateTime, Time};

/// A bookable start time offered to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotOffer {
    /// The slot start time.
    pub time: Time,
    /// Remaining concurrent capacity at this slot.
    pub capacity: u32,
}

/// Returns the open slots on a date, ascending by time.
///
/// A slot is open when it has capacity remaining after booking subtraction
/// and its start is inside the booking window.
#[must_use]
pub fn open_slots_on_date(
    date: Date,
    snapshot: &Snapshot,
    policy: &BookingPolicy,
    now: PrimitiveDateTime,
) -> Vec<SlotOffer> {
    capacity_map(date, snapshot)
        .into_iter()
        .filter(|&(slot, capacity)| capacity > 0 && policy.admits(date, slot, now))
        .map(|(time, capacity)| SlotOffer { time, capacity })
        .collect()
}

/// Returns the dates in a month with at least one open slot.
///
/// Every calendar date in the month is evaluated with the same capacity and
/// window tests as `open_slots_on_date`; a date appears only when something
/// on it is actually bookable. Blacked-out dates never appear.
///
/// # Errors
///
/// Returns an error if `month` is not between 1 and 12.
pub fn open_dates_in_month(
    year: i32,
    month: u8,
    snapshot: &Snapshot,
    policy: &BookingPolicy,
    now: PrimitiveDateTime,
) -> Result<Vec<Date>, CoreError> {
    let month: Month =
        Month::try_from(month).map_err(|_| CoreError::from(DomainError::InvalidMonth(month)))?;
    let days: u8 = month.length(year);

    let mut open: Vec<Date> = Vec::new();
    for day in 1..=days {
        let Ok(date) = Date::from_calendar_date(year, month, day) else {
            continue;
        };
        let has_open: bool = capacity_map(date, snapshot)
            .iter()
            .any(|(&slot, &capacity)| capacity > 0 && policy.admits(date, slot, now));
        if has_open {
            open.push(date);
        }
    }
    Ok(open)
}
