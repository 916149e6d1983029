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

mod admit;
mod error;
mod estimate;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types
pub use admit::{AdmitterConfig, BookingAdmitter};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
pub use estimate::{EstimateConfig, estimate_quote, quote_breakdown};
pub use request_response::{
    AddonPayload, AddressPayload, AppointmentPayload, BookingRequest, ConfirmedBooking,
    CustomerPayload, EstimateBreakdown, EstimateRequest, LevelPayload, PricingPayload,
    SelectionPayload,
};
