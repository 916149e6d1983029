// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingPolicy, Snapshot};
use std::collections::BTreeSet;
use suds_domain::{AvailabilityWindow, Booking};
use time::macros::datetime;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Builds an availability window, panicking on invalid test input.
pub fn window(date: Date, start: Time, end: Time, slot_minutes: u16, capacity: u32) -> AvailabilityWindow {
    AvailabilityWindow::new(date, start, end, slot_minutes, capacity).unwrap()
}

/// Builds a booking with filler display fields.
pub fn booking(date: Date, start: Option<Time>, end: Option<Time>) -> Booking {
    Booking {
        job_id: String::from("JOB-001"),
        date,
        start,
        end,
        customer_name: String::from("Test Customer"),
        package_name: String::from("Gloss Shield"),
        size_label: String::from("Car"),
        addons_text: String::new(),
        total_price: 0.0,
        heard_from: String::new(),
        email: String::from("test@example.com"),
        phone: String::new(),
        address: String::new(),
    }
}

/// Builds a snapshot from parts with a fixed fetch timestamp.
pub fn snapshot(
    windows: Vec<AvailabilityWindow>,
    bookings: Vec<Booking>,
    blackouts: &[Date],
) -> Snapshot {
    let taken_at: OffsetDateTime = datetime!(2025-02-01 00:00 UTC);
    Snapshot::new(
        taken_at,
        windows,
        bookings,
        blackouts.iter().copied().collect::<BTreeSet<Date>>(),
    )
}

/// A policy with no window limits, paired with a `now` well before the
/// dates the tests book, so only capacity matters.
pub const fn unlimited_policy() -> BookingPolicy {
    BookingPolicy {
        min_lead_minutes: 0,
        same_day_cutoff_minutes: 0,
        max_days_ahead: 0,
    }
}

/// A fixed `now` earlier than every date used by the capacity tests.
pub const fn early_now() -> PrimitiveDateTime {
    datetime!(2025-02-01 00:00)
}
