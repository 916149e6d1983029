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

mod capacity;
mod error;
mod policy;
mod queries;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use capacity::{capacity_map, fits};
pub use error::CoreError;
pub use policy::BookingPolicy;
pub use queries::{SlotOffer, open_dates_in_month, open_slots_on_date};
pub use snapshot::Snapshot;
