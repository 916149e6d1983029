// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking admitter.
//!
//! Admission is the only write path in the system: validate the request,
//! price the job in minutes (service plus best-effort travel), then, under
//! the admission lock, refresh the snapshot, re-check that the full
//! `[start, start + minutes)` window still has capacity, assign the next
//! job id, append the row, and invalidate the cache. Serializing admissions
//! through one lock closes the refresh-check-append race between concurrent
//! requests in this process.

use crate::error::{ApiError, translate_store_error};
use crate::request_response::{
    AddressPayload, AppointmentPayload, BookingRequest, ConfirmedBooking, CustomerPayload,
    SelectionPayload,
};
use std::sync::Arc;
use suds::{Snapshot, capacity_map, fits};
use suds_domain::{
    JobId, Selection, job_minutes, minutes_to_time, parse_hhmm, parse_iso_date, time_to_minutes,
    to_12h,
};
use suds_store::{NewBookingRow, SnapshotCache};
use suds_travel::TravelOracle;
use time::{Date, Time};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// The 409 message shown by the date/time picker.
const OVERLAP_MESSAGE: &str = "That start time won't fit the full service duration.";

/// Admitter knobs read from configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdmitterConfig {
    /// The crew's home base, the travel origin. `None` disables travel.
    pub home_base_address: Option<String>,
    /// Whether travel counts both ways.
    pub drive_round_trip: bool,
}

/// Commits new bookings atomically with respect to capacity as known at
/// commit time.
pub struct BookingAdmitter {
    /// The snapshot cache; also reaches the gateway for id scan and append.
    cache: Arc<SnapshotCache>,
    /// The travel oracle, when configured.
    oracle: Option<Arc<dyn TravelOracle>>,
    /// Travel and home-base knobs.
    config: AdmitterConfig,
    /// Serializes refresh-check-append sequences.
    admission: Mutex<()>,
}

impl BookingAdmitter {
    /// Creates a new `BookingAdmitter`.
    #[must_use]
    pub fn new(
        cache: Arc<SnapshotCache>,
        oracle: Option<Arc<dyn TravelOracle>>,
        config: AdmitterConfig,
    ) -> Self {
        Self {
            cache,
            oracle,
            config,
            admission: Mutex::new(()),
        }
    }

    /// Admits a booking.
    ///
    /// # Errors
    ///
    /// - `ApiError::InvalidInput` when the payload is missing parts or the
    ///   date/time fields are malformed.
    /// - `ApiError::Overlap` when the full job window no longer fits.
    /// - `ApiError::StoreUnavailable` when the sheet cannot be read or the
    ///   append fails; no booking exists in that case.
    pub async fn admit(&self, request: &BookingRequest) -> Result<ConfirmedBooking, ApiError> {
        let selection_payload: &SelectionPayload = require(request.selection.as_ref(), "selection")?;
        let appointment: &AppointmentPayload = require(request.appointment.as_ref(), "appointment")?;
        let customer: &CustomerPayload = require(request.customer.as_ref(), "customer")?;

        let date: Date = parse_iso_date(&appointment.date).map_err(|_| bad_field("date"))?;
        let start: Time = parse_hhmm(&appointment.time).map_err(|_| bad_field("time"))?;

        let selection: Selection = selection_payload.to_selection();
        let address: String = customer
            .address
            .as_ref()
            .map_or_else(String::new, AddressPayload::compose);

        let travel_one_way: u32 = self.resolve_travel_minutes(&address).await;
        let total_minutes: u32 =
            job_minutes(&selection, travel_one_way, self.config.drive_round_trip);

        // Everything below holds the admission lock: one refresh-check-append
        // sequence at a time.
        let _guard = self.admission.lock().await;

        let snapshot: Arc<Snapshot> = self
            .cache
            .load(true)
            .await
            .map_err(translate_store_error)?;
        let map = capacity_map(date, &snapshot);
        if !fits(&map, start, total_minutes) {
            return Err(ApiError::Overlap {
                message: String::from(OVERLAP_MESSAGE),
            });
        }

        let start_minutes: i32 = time_to_minutes(start);
        let end_minutes: i32 =
            start_minutes + i32::try_from(total_minutes).unwrap_or(i32::MAX);
        let start_display: String = to_12h(start);
        let end_display: String = to_12h(minutes_to_time(end_minutes));

        let job_id: JobId = self
            .cache
            .gateway()
            .next_job_id()
            .await
            .map_err(translate_store_error)?;

        let row: NewBookingRow = NewBookingRow {
            job_id: job_id.to_string(),
            date: appointment.date.clone(),
            customer_name: customer.name.clone(),
            package_name: selection_payload.package_name.clone(),
            size_label: selection_payload.size_label.clone().unwrap_or_default(),
            addons_text: selection_payload.addons_text(),
            total_price: request
                .pricing
                .as_ref()
                .and_then(|pricing| pricing.total)
                .unwrap_or(0.0),
            start_display: start_display.clone(),
            end_display: end_display.clone(),
            heard_from: customer.heard_from.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address,
        };

        self.cache
            .gateway()
            .append_booking(&row)
            .await
            .map_err(translate_store_error)?;
        self.cache.invalidate().await;

        info!(
            job_id = %job_id,
            date = %appointment.date,
            start = %start_display,
            end = %end_display,
            minutes = total_minutes,
            "admitted booking"
        );

        Ok(ConfirmedBooking {
            job_id: job_id.to_string(),
            start: start_display,
            end: end_display,
        })
    }

    /// Resolves one-way travel minutes for an address, best-effort.
    ///
    /// Any failure (oracle unconfigured, no home base, empty address, or a
    /// lookup error) means zero travel; admission never fails on travel.
    async fn resolve_travel_minutes(&self, address: &str) -> u32 {
        let (Some(oracle), Some(home_base)) = (
            self.oracle.as_deref(),
            self.config.home_base_address.as_deref(),
        ) else {
            return 0;
        };
        if address.trim().is_empty() {
            return 0;
        }
        oracle
            .estimate(home_base, address)
            .await
            .inspect_err(
                |err| warn!(error = %err, "travel estimate failed; booking without travel time"),
            )
            .ok()
            .map_or(0, |estimate| estimate.minutes_one_way)
    }
}

/// Requires a payload section, naming the missing field otherwise.
fn require<'a, T>(value: Option<&'a T>, field: &str) -> Result<&'a T, ApiError> {
    value.ok_or_else(|| ApiError::InvalidInput {
        field: field.to_string(),
        message: String::from("Missing booking payload"),
    })
}

/// Builds the bad-format error for a date/time field.
fn bad_field(field: &str) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: String::from("Bad date/time"),
    }
}
