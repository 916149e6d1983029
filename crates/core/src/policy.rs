// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking-window policy.
//!
//! A slot with capacity is still only offered inside the booking window:
//! not too far in the future, not already past the lead time, and for
//! same-day requests not inside the cutoff. All comparisons are wall-clock
//! in the business's single time zone; callers resolve `now` once at the
//! edge and pass it in, so policy decisions are pure and testable.

use time::{Date, Duration, PrimitiveDateTime, Time};

/// Booking-window limits applied to every offered slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Minimum minutes between now and any offered start.
    pub min_lead_minutes: u32,
    /// Extra minutes of notice required for same-day starts.
    pub same_day_cutoff_minutes: u32,
    /// How many days ahead bookings are accepted. Zero disables the limit.
    pub max_days_ahead: u32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            min_lead_minutes: 0,
            same_day_cutoff_minutes: 0,
            max_days_ahead: 60,
        }
    }
}

impl BookingPolicy {
    /// Returns whether a slot start is inside the booking window.
    ///
    /// A slot is admitted when all of the following hold:
    /// - it starts strictly after `now + min_lead_minutes`;
    /// - it is no later than the end of the day `max_days_ahead` days out;
    /// - for slots on the current date, it starts no earlier than
    ///   `now + same_day_cutoff_minutes`.
    #[must_use]
    pub fn admits(&self, date: Date, slot: Time, now: PrimitiveDateTime) -> bool {
        let slot_start: PrimitiveDateTime = PrimitiveDateTime::new(date, slot);

        if self.max_days_ahead > 0 {
            let Some(last_date) = now
                .date()
                .checked_add(Duration::days(i64::from(self.max_days_ahead)))
            else {
                return false;
            };
            // The whole of the last admissible date stays bookable.
            if date > last_date {
                return false;
            }
        }

        if slot_start <= now + Duration::minutes(i64::from(self.min_lead_minutes)) {
            return false;
        }

        if date == now.date()
            && self.same_day_cutoff_minutes > 0
            && slot_start < now + Duration::minutes(i64::from(self.same_day_cutoff_minutes))
        {
            return false;
        }

        true
    }
}
