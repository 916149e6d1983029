// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-slot capacity derivation.
//!
//! A booking occupies every slot its `[start, end)` window touches: a
//! three-hour detail on a 30-minute grid consumes six slots. Subtracting
//! across the whole window is what keeps a newly offered start time from
//! overlapping any part of an existing job.

use crate::snapshot::Snapshot;
use std::collections::BTreeMap;
use suds_domain::{Booking, minutes_to_time, time_to_minutes};
use time::{Date, Time};

/// Computes the remaining per-slot capacity for a date.
///
/// Rules, in order:
/// 1. A blacked-out date has no slots at all.
/// 2. Every active window on the date contributes its capacity to each grid
///    slot that fits entirely inside the window; overlapping windows sum.
/// 3. Every booking on the date subtracts one from each slot in its
///    `[start, end)` window, clamped at zero. A booking with no usable end
///    subtracts only from its exact start slot.
///
/// The result is a pure function of `(date, snapshot)`.
#[must_use]
pub fn capacity_map(date: Date, snapshot: &Snapshot) -> BTreeMap<Time, u32> {
    let mut map: BTreeMap<Time, u32> = BTreeMap::new();
    if snapshot.is_blackout(date) {
        return map;
    }

    for window in snapshot.windows().iter().filter(|w| w.date() == date) {
        let start_minutes: i32 = time_to_minutes(window.start());
        let end_minutes: i32 = time_to_minutes(window.end());
        let step: i32 = i32::from(window.slot_minutes());

        let mut minute: i32 = start_minutes;
        while minute + step <= end_minutes {
            let slot: Time = minutes_to_time(minute);
            *map.entry(slot).or_insert(0) += window.capacity();
            minute += step;
        }
    }

    for booking in snapshot.bookings().iter().filter(|b| b.date == date) {
        subtract_booking(&mut map, booking);
    }

    map
}

/// Subtracts a single booking from the capacity map.
fn subtract_booking(map: &mut BTreeMap<Time, u32>, booking: &Booking) {
    let Some(start) = booking.start else {
        // No parseable start: the row cannot be placed on the grid at all.
        return;
    };
    let start_minutes: i32 = time_to_minutes(start);

    let end_minutes: Option<i32> = booking.end.map(time_to_minutes);
    match end_minutes {
        Some(end) if end > start_minutes => {
            for (slot, capacity) in &mut *map {
                let slot_minutes: i32 = time_to_minutes(*slot);
                if slot_minutes >= start_minutes && slot_minutes < end {
                    *capacity = capacity.saturating_sub(1);
                }
            }
        }
        // End missing or not after start: treat the row as a single-slot
        // blocker on its exact start time.
        _ => {
            if let Some(capacity) = map.get_mut(&start) {
                *capacity = capacity.saturating_sub(1);
            }
        }
    }
}

/// Returns whether a job of `duration_minutes` starting at `start` fits.
///
/// Every slot in `[start, start + duration)` that exists on the grid must
/// have capacity remaining, and the start itself must be a grid slot; a
/// start time that is not offered at all does not fit.
#[must_use]
pub fn fits(map: &BTreeMap<Time, u32>, start: Time, duration_minutes: u32) -> bool {
    if !map.contains_key(&start) {
        return false;
    }
    let start_minutes: i32 = time_to_minutes(start);
    let end_minutes: i32 = start_minutes + i32::try_from(duration_minutes).unwrap_or(i32::MAX);

    map.iter().all(|(slot, capacity)| {
        let slot_minutes: i32 = time_to_minutes(*slot);
        slot_minutes < start_minutes || slot_minutes >= end_minutes || *capacity > 0
    })
}
