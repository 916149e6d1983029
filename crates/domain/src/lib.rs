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

mod duration;
mod error;
mod selection;
mod timeparse;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use duration::{job_minutes, service_minutes};
pub use error::DomainError;
pub use selection::{PetHairLevel, Selection, ServicePackage, SeverityLevel, VehicleSize};
pub use timeparse::{
    minutes_to_hhmm, minutes_to_time, parse_hhmm, parse_iso_date, parse_sheet_date,
    parse_sheet_time, time_to_minutes, to_12h,
};
pub use types::{AvailabilityWindow, Booking, JobId, cell_is_truthy};
