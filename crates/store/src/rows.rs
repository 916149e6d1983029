// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-column row mapping for the three tabs.
//!
//! Column order is load-bearing; each tab's layout is mapped exactly once
//! here and nothing downstream ever touches raw cells. Rows that fail to
//! parse are logged and skipped; the sheet is hand-edited and one bad row
//! must never poison a request.

use std::collections::BTreeSet;
use suds_domain::{
    AvailabilityWindow, Booking, cell_is_truthy, parse_sheet_date, parse_sheet_time,
};
use time::{Date, Time};
use tracing::warn;

// Availability template tab, columns A-I:
// EmployeeId, Employee, Date, Start, End, SlotMins, Capacity, Active, Notes.
const AVAIL_DATE: usize = 2;
const AVAIL_START: usize = 3;
const AVAIL_END: usize = 4;
const AVAIL_SLOT_MINS: usize = 5;
const AVAIL_CAPACITY: usize = 6;
const AVAIL_ACTIVE: usize = 7;

// Bookings tab, columns A-O:
// JobId, Date, CustomerName, Package, SizeLabel, AddonsText, TotalPrice,
// StartTime, EndTime, HeardFrom, Email, Phone, Address, Status, Crew.
const BOOKING_JOB_ID: usize = 0;
const BOOKING_DATE: usize = 1;
const BOOKING_CUSTOMER: usize = 2;
const BOOKING_PACKAGE: usize = 3;
const BOOKING_SIZE: usize = 4;
const BOOKING_ADDONS: usize = 5;
const BOOKING_TOTAL: usize = 6;
const BOOKING_START: usize = 7;
const BOOKING_END: usize = 8;
const BOOKING_HEARD: usize = 9;
const BOOKING_EMAIL: usize = 10;
const BOOKING_PHONE: usize = 11;
const BOOKING_ADDRESS: usize = 12;

// Blackouts tab, columns A-B: Date, Active.
const BLACKOUT_DATE: usize = 0;
const BLACKOUT_ACTIVE: usize = 1;

/// Returns a cell by index, treating missing trailing cells as empty.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

/// Parses the availability template rows into typed windows.
///
/// Inactive rows are dropped silently; rows with an unusable date, time, or
/// ordering are logged and skipped.
#[must_use]
pub fn parse_availability_rows(rows: &[Vec<String>]) -> Vec<AvailabilityWindow> {
    let mut windows: Vec<AvailabilityWindow> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if !cell_is_truthy(cell(row, AVAIL_ACTIVE)) {
            continue;
        }
        let Ok(date) = parse_sheet_date(cell(row, AVAIL_DATE)) else {
            warn!(row = index + 2, "skipping availability row with unusable date");
            continue;
        };
        let (Ok(start), Ok(end)) = (
            parse_sheet_time(cell(row, AVAIL_START)),
            parse_sheet_time(cell(row, AVAIL_END)),
        ) else {
            warn!(row = index + 2, "skipping availability row with unusable times");
            continue;
        };

        let slot_minutes: u16 = parse_slot_minutes(cell(row, AVAIL_SLOT_MINS));
        let capacity: u32 = parse_capacity(cell(row, AVAIL_CAPACITY));

        match AvailabilityWindow::new(date, start, end, slot_minutes, capacity) {
            Ok(window) => windows.push(window),
            Err(err) => {
                warn!(row = index + 2, error = %err, "skipping availability row");
            }
        }
    }
    windows
}

/// Parses a slot-minutes cell; missing or non-positive values defer to the
/// window default.
fn parse_slot_minutes(cell: &str) -> u16 {
    cell.trim().parse::<i64>().map_or(0, |value| {
        if value <= 0 {
            0
        } else {
            u16::try_from(value).unwrap_or(u16::MAX)
        }
    })
}

/// Parses a capacity cell; an empty cell means one concurrent job, anything
/// unusable or negative means zero.
fn parse_capacity(cell: &str) -> u32 {
    let trimmed: &str = cell.trim();
    if trimmed.is_empty() {
        return 1;
    }
    trimmed
        .parse::<i64>()
        .map_or(0, |value| u32::try_from(value).unwrap_or(0))
}

/// Parses the bookings tab rows.
///
/// Rows with an unusable date are logged and skipped (they can never affect
/// a capacity query). Rows with an unusable start or end time are kept;
/// the capacity engine treats them as reduced blockers rather than losing
/// them entirely.
#[must_use]
pub fn parse_booking_rows(rows: &[Vec<String>]) -> Vec<Booking> {
    let mut bookings: Vec<Booking> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Ok(date) = parse_sheet_date(cell(row, BOOKING_DATE)) else {
            warn!(row = index + 2, "skipping booking row with unusable date");
            continue;
        };
        let start: Option<Time> = parse_sheet_time(cell(row, BOOKING_START)).ok();
        let end: Option<Time> = parse_sheet_time(cell(row, BOOKING_END)).ok();

        bookings.push(Booking {
            job_id: cell(row, BOOKING_JOB_ID).to_string(),
            date,
            start,
            end,
            customer_name: cell(row, BOOKING_CUSTOMER).to_string(),
            package_name: cell(row, BOOKING_PACKAGE).to_string(),
            size_label: cell(row, BOOKING_SIZE).to_string(),
            addons_text: cell(row, BOOKING_ADDONS).to_string(),
            total_price: cell(row, BOOKING_TOTAL).trim().parse().unwrap_or(0.0),
            heard_from: cell(row, BOOKING_HEARD).to_string(),
            email: cell(row, BOOKING_EMAIL).to_string(),
            phone: cell(row, BOOKING_PHONE).to_string(),
            address: cell(row, BOOKING_ADDRESS).to_string(),
        });
    }
    bookings
}

/// Parses the blackouts tab into the set of unbookable dates.
#[must_use]
pub fn parse_blackout_rows(rows: &[Vec<String>]) -> BTreeSet<Date> {
    let mut dates: BTreeSet<Date> = BTreeSet::new();
    for (index, row) in rows.iter().enumerate() {
        if !cell_is_truthy(cell(row, BLACKOUT_ACTIVE)) {
            continue;
        }
        match parse_sheet_date(cell(row, BLACKOUT_DATE)) {
            Ok(date) => {
                dates.insert(date);
            }
            Err(err) => {
                warn!(row = index + 2, error = %err, "skipping blackout row");
            }
        }
    }
    dates
}

/// A booking row ready to append, in the fixed A-O layout.
///
/// Status and Crew are written blank; staff fill them in later from the
/// dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingRow {
    /// The assigned job id.
    pub job_id: String,
    /// Appointment date, canonical `YYYY-MM-DD`.
    pub date: String,
    /// Customer display name.
    pub customer_name: String,
    /// Package display name.
    pub package_name: String,
    /// Vehicle size display label.
    pub size_label: String,
    /// Comma-joined addon display text.
    pub addons_text: String,
    /// Quoted total price.
    pub total_price: f64,
    /// Start time in 12-hour display form.
    pub start_display: String,
    /// End time in 12-hour display form.
    pub end_display: String,
    /// Where the customer heard about the business.
    pub heard_from: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Full service address.
    pub address: String,
}

impl NewBookingRow {
    /// Renders the row as its fifteen cells in tab order.
    #[must_use]
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.job_id.clone(),
            self.date.clone(),
            self.customer_name.clone(),
            self.package_name.clone(),
            self.size_label.clone(),
            self.addons_text.clone(),
            self.total_price.to_string(),
            self.start_display.clone(),
            self.end_display.clone(),
            self.heard_from.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            String::new(),
            String::new(),
        ]
    }
}
