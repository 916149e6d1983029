// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::rows::{
    NewBookingRow, parse_availability_rows, parse_blackout_rows, parse_booking_rows,
};
use crate::sheets::SheetStore;
use std::sync::Arc;
use suds::Snapshot;
use suds_domain::JobId;
use time::OffsetDateTime;

/// The names of the three tabs the gateway reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTabs {
    /// The availability template tab.
    pub availability: String,
    /// The bookings tab.
    pub bookings: String,
    /// The blackouts tab.
    pub blackouts: String,
}

impl Default for SheetTabs {
    fn default() -> Self {
        Self {
            availability: String::from("Availability"),
            bookings: String::from("Bookings"),
            blackouts: String::from("Blackouts"),
        }
    }
}

/// Typed access to the three tabs over any `SheetStore`.
///
/// The gateway owns column knowledge and tab names; callers above it see
/// snapshots, job ids, and append operations.
#[derive(Clone)]
pub struct SheetGateway {
    /// The underlying tabular store.
    store: Arc<dyn SheetStore>,
    /// Tab names, from configuration.
    tabs: SheetTabs,
}

impl SheetGateway {
    /// Creates a new `SheetGateway`.
    #[must_use]
    pub const fn new(store: Arc<dyn SheetStore>, tabs: SheetTabs) -> Self {
        Self { store, tabs }
    }

    /// Fetches the three tabs concurrently and assembles a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when any tab read fails at the
    /// transport level. Per-row parse failures never surface here.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, StoreError> {
        let (availability, bookings, blackouts) = tokio::try_join!(
            self.store.read_range(&self.tabs.availability, "A2:I"),
            self.store.read_range(&self.tabs.bookings, "A2:O"),
            self.store.read_range(&self.tabs.blackouts, "A2:B"),
        )?;

        Ok(Snapshot::new(
            OffsetDateTime::now_utc(),
            parse_availability_rows(&availability),
            parse_booking_rows(&bookings),
            parse_blackout_rows(&blackouts),
        ))
    }

    /// Derives the next job id by scanning the bookings id column.
    ///
    /// Cells that do not match `JOB-NNN` (legacy ids, stray notes) are
    /// ignored; an empty tab starts the sequence at `JOB-001`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when the id column cannot be read.
    pub async fn next_job_id(&self) -> Result<JobId, StoreError> {
        let rows: Vec<Vec<String>> = self.store.read_range(&self.tabs.bookings, "A2:A").await?;
        let highest: u32 = rows
            .iter()
            .filter_map(|row| row.first())
            .filter_map(|cell| cell.parse::<JobId>().ok())
            .map(|id| id.number())
            .max()
            .unwrap_or(0);
        Ok(JobId::new(highest + 1))
    }

    /// Appends a booking row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when the append fails. The caller
    /// must observe the result before responding; a failed append means no
    /// booking exists.
    pub async fn append_booking(&self, row: &NewBookingRow) -> Result<(), StoreError> {
        self.store
            .append_row(&self.tabs.bookings, row.to_cells())
            .await
    }
}
