// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cache;
mod error;
mod gateway;
mod rows;
mod sheets;

#[cfg(test)]
mod tests;

// Re-export public types
pub use cache::SnapshotCache;
pub use error::StoreError;
pub use gateway::{SheetGateway, SheetTabs};
pub use rows::{
    NewBookingRow, parse_availability_rows, parse_blackout_rows, parse_booking_rows,
};
pub use sheets::{MemorySheetStore, SheetStore, SheetsApiStore};
