// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingPolicy;
use time::PrimitiveDateTime;
use time::macros::{date, datetime, time};

fn strict_policy() -> BookingPolicy {
    BookingPolicy {
        min_lead_minutes: 60,
        same_day_cutoff_minutes: 120,
        max_days_ahead: 60,
    }
}

#[test]
fn test_same_day_cutoff_excludes_near_slots() {
    // Now is 09:30 with a 120-minute same-day cutoff: 10:00 is too soon.
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = strict_policy();
    assert!(!policy.admits(date!(2025 - 02 - 10), time!(10:00), now));
}

#[test]
fn test_same_day_slot_past_cutoff_is_admitted() {
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = strict_policy();
    assert!(policy.admits(date!(2025 - 02 - 10), time!(12:00), now));
}

#[test]
fn test_cutoff_boundary_is_inclusive() {
    // now + cutoff = 11:30 exactly; a slot at that instant is admitted.
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = strict_policy();
    assert!(policy.admits(date!(2025 - 02 - 10), time!(11:30), now));
}

#[test]
fn test_min_lead_excludes_imminent_slots_on_future_days() {
    let now: PrimitiveDateTime = datetime!(2025-02-10 23:30);
    let policy: BookingPolicy = BookingPolicy {
        min_lead_minutes: 60,
        same_day_cutoff_minutes: 0,
        max_days_ahead: 60,
    };
    // Tomorrow 00:00 is only 30 minutes out.
    assert!(!policy.admits(date!(2025 - 02 - 11), time!(00:00), now));
    assert!(policy.admits(date!(2025 - 02 - 11), time!(01:00), now));
}

#[test]
fn test_past_slots_are_never_admitted() {
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = BookingPolicy::default();
    assert!(!policy.admits(date!(2025 - 02 - 10), time!(09:00), now));
    assert!(!policy.admits(date!(2025 - 02 - 09), time!(12:00), now));
    // A slot exactly at `now` is still too late to dispatch a crew.
    assert!(!policy.admits(date!(2025 - 02 - 10), time!(09:30), now));
}

#[test]
fn test_max_days_ahead_excludes_far_dates() {
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = strict_policy();
    // 60 days from 2025-02-10 is 2025-04-11.
    assert!(policy.admits(date!(2025 - 04 - 11), time!(09:00), now));
    assert!(!policy.admits(date!(2025 - 04 - 12), time!(09:00), now));
}

#[test]
fn test_zero_max_days_ahead_disables_the_limit() {
    let now: PrimitiveDateTime = datetime!(2025-02-10 09:30);
    let policy: BookingPolicy = BookingPolicy {
        min_lead_minutes: 0,
        same_day_cutoff_minutes: 0,
        max_days_ahead: 0,
    };
    assert!(policy.admits(date!(2026 - 02 - 10), time!(09:00), now));
}

#[test]
fn test_default_policy_values() {
    let policy: BookingPolicy = BookingPolicy::default();
    assert_eq!(policy.min_lead_minutes, 0);
    assert_eq!(policy.same_day_cutoff_minutes, 0);
    assert_eq!(policy.max_days_ahead, 60);
}
