// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;
use suds_domain::{AvailabilityWindow, Booking};
use time::{Date, OffsetDateTime};

/// A coherent, timestamped view of the three tabs the engine reads.
///
/// Snapshots are plain values: the engine receives them by parameter and
/// never reaches for ambient state. The cache layer owns refresh and
/// invalidation; the engine only derives answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// When this snapshot was fetched.
    taken_at: OffsetDateTime,
    /// Active availability windows, as parsed from the template tab.
    windows: Vec<AvailabilityWindow>,
    /// All bookings, as parsed from the bookings tab.
    bookings: Vec<Booking>,
    /// Dates marked unbookable regardless of windows.
    blackout_dates: BTreeSet<Date>,
}

impl Snapshot {
    /// Creates a new `Snapshot` from its parts.
    #[must_use]
    pub const fn new(
        taken_at: OffsetDateTime,
        windows: Vec<AvailabilityWindow>,
        bookings: Vec<Booking>,
        blackout_dates: BTreeSet<Date>,
    ) -> Self {
        Self {
            taken_at,
            windows,
            bookings,
            blackout_dates,
        }
    }

    /// Returns when this snapshot was fetched.
    #[must_use]
    pub const fn taken_at(&self) -> OffsetDateTime {
        self.taken_at
    }

    /// Returns the availability windows.
    #[must_use]
    pub fn windows(&self) -> &[AvailabilityWindow] {
        &self.windows
    }

    /// Returns the bookings.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the blackout dates.
    #[must_use]
    pub const fn blackout_dates(&self) -> &BTreeSet<Date> {
        &self.blackout_dates
    }

    /// Returns whether a date is blacked out.
    #[must_use]
    pub fn is_blackout(&self, date: Date) -> bool {
        self.blackout_dates.contains(&date)
    }
}
