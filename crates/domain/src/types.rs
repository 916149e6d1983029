// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

/// Returns whether an active/enabled cell counts as set.
///
/// The sheet uses `TRUE`, `1`, or `YES` interchangeably, in any case.
#[must_use]
pub fn cell_is_truthy(cell: &str) -> bool {
    matches!(
        cell.trim().to_uppercase().as_str(),
        "TRUE" | "1" | "YES"
    )
}

/// A contiguous bookable interval on one calendar date.
///
/// Windows come from the availability template tab. Two active windows on
/// the same date may overlap; their per-slot capacities sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// The calendar date this window applies to.
    date: Date,
    /// Window start (inclusive).
    start: Time,
    /// Window end (exclusive).
    end: Time,
    /// Grid spacing in minutes.
    slot_minutes: u16,
    /// Concurrent jobs the window can host per slot.
    capacity: u32,
}

impl AvailabilityWindow {
    /// The grid spacing used when the sheet leaves the column blank or
    /// non-positive.
    pub const DEFAULT_SLOT_MINUTES: u16 = 30;
    /// The smallest grid spacing a row can request.
    pub const MIN_SLOT_MINUTES: u16 = 5;

    /// Creates a new `AvailabilityWindow`.
    ///
    /// `slot_minutes` of zero falls back to the default spacing and values
    /// below the minimum are raised to it, matching how template rows are
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindow` if `end` does not come after
    /// `start`.
    pub fn new(
        date: Date,
        start: Time,
        end: Time,
        slot_minutes: u16,
        capacity: u32,
    ) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidWindow { start, end });
        }
        let slot_minutes: u16 = if slot_minutes == 0 {
            Self::DEFAULT_SLOT_MINUTES
        } else {
            slot_minutes.max(Self::MIN_SLOT_MINUTES)
        };
        Ok(Self {
            date,
            start,
            end,
            slot_minutes,
            capacity,
        })
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Returns the grid spacing in minutes.
    #[must_use]
    pub const fn slot_minutes(&self) -> u16 {
        self.slot_minutes
    }

    /// Returns the per-slot capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// A human-facing job identifier of the form `JOB-NNN`.
///
/// Ids are ordered by their numeric suffix and zero-padded to three digits
/// for display; ids past 999 simply grow wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(u32);

impl JobId {
    /// Creates a `JobId` from its numeric suffix.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric suffix.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JOB-{:03}", self.0)
    }
}

impl FromStr for JobId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.len() <= 4 || !trimmed[..4].eq_ignore_ascii_case("JOB-") {
            return Err(DomainError::JobIdParse(s.to_string()));
        }
        let number: u32 = trimmed[4..]
            .parse()
            .map_err(|_| DomainError::JobIdParse(s.to_string()))?;
        Ok(Self(number))
    }
}

/// A persisted booking row.
///
/// Bookings are append-only from the core's perspective; everything beyond
/// the date and the `[start, end)` window is display text carried for the
/// sheet. Rows whose end time never parsed keep `end: None` and block only
/// their start slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The raw job id cell (may predate the `JOB-NNN` scheme).
    pub job_id: String,
    /// The calendar date of the appointment.
    pub date: Date,
    /// Appointment start, when the cell parsed.
    pub start: Option<Time>,
    /// Appointment end, when the cell parsed.
    pub end: Option<Time>,
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
    /// Where the customer heard about the business.
    pub heard_from: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Full service address.
    pub address: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::{date, time};

    #[test]
    fn test_truthy_cells() {
        assert!(cell_is_truthy("TRUE"));
        assert!(cell_is_truthy("true"));
        assert!(cell_is_truthy(" 1 "));
        assert!(cell_is_truthy("yes"));
        assert!(!cell_is_truthy("FALSE"));
        assert!(!cell_is_truthy("0"));
        assert!(!cell_is_truthy(""));
    }

    #[test]
    fn test_window_rejects_end_before_start() {
        let result = AvailabilityWindow::new(
            date!(2025 - 02 - 10),
            time!(12:00),
            time!(09:00),
            30,
            1,
        );
        assert!(matches!(result, Err(DomainError::InvalidWindow { .. })));
    }

    #[test]
    fn test_window_normalizes_slot_minutes() {
        let defaulted = AvailabilityWindow::new(
            date!(2025 - 02 - 10),
            time!(09:00),
            time!(12:00),
            0,
            1,
        )
        .unwrap();
        assert_eq!(
            defaulted.slot_minutes(),
            AvailabilityWindow::DEFAULT_SLOT_MINUTES
        );

        let floored = AvailabilityWindow::new(
            date!(2025 - 02 - 10),
            time!(09:00),
            time!(12:00),
            3,
            1,
        )
        .unwrap();
        assert_eq!(floored.slot_minutes(), AvailabilityWindow::MIN_SLOT_MINUTES);
    }

    #[test]
    fn test_job_id_display_and_parse() {
        let id: JobId = JobId::new(7);
        assert_eq!(id.to_string(), "JOB-007");
        assert_eq!("JOB-007".parse::<JobId>().unwrap(), id);
        assert_eq!("JOB-1234".parse::<JobId>().unwrap(), JobId::new(1234));
        assert_eq!(JobId::new(1234).to_string(), "JOB-1234");
        assert!("BOOKING-7".parse::<JobId>().is_err());
        assert!("JOB-".parse::<JobId>().is_err());
    }

    #[test]
    fn test_job_id_ordering_is_numeric() {
        assert!(JobId::new(99) < JobId::new(100));
        assert_eq!(JobId::new(41).next(), JobId::new(42));
    }
}
