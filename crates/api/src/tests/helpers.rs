// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AddressPayload, AdmitterConfig, AppointmentPayload, BookingAdmitter, BookingRequest,
    CustomerPayload, PricingPayload, SelectionPayload,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use suds_store::{MemorySheetStore, SheetGateway, SheetTabs, SnapshotCache};
use suds_travel::{TravelEstimate, TravelError, TravelOracle};

/// An oracle that always answers with a fixed estimate.
pub struct FixedOracle(pub TravelEstimate);

#[async_trait]
impl TravelOracle for FixedOracle {
    async fn estimate(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<TravelEstimate, TravelError> {
        Ok(self.0)
    }
}

/// An oracle that always fails.
pub struct FailingOracle;

#[async_trait]
impl TravelOracle for FailingOracle {
    async fn estimate(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<TravelEstimate, TravelError> {
        Err(TravelError::InvalidResponse)
    }
}

pub fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Seeds a store with one availability window row.
pub fn store_with_window(date: &str, start: &str, end: &str) -> Arc<MemorySheetStore> {
    let store: Arc<MemorySheetStore> = Arc::new(MemorySheetStore::new());
    store.set_tab(
        "Availability",
        vec![cells(&["E1", "Alex", date, start, end, "30", "1", "TRUE", ""])],
    );
    store.set_tab("Bookings", vec![]);
    store.set_tab("Blackouts", vec![]);
    store
}

/// Builds an admitter over a store, with an optional oracle.
pub fn admitter_over(
    store: Arc<MemorySheetStore>,
    oracle: Option<Arc<dyn TravelOracle>>,
) -> BookingAdmitter {
    let cache: Arc<SnapshotCache> = Arc::new(SnapshotCache::new(
        SheetGateway::new(store, SheetTabs::default()),
        Duration::from_secs(30),
    ));
    let config: AdmitterConfig = AdmitterConfig {
        home_base_address: oracle.as_ref().map(|_| String::from("1 Shop Rd, Springfield")),
        drive_round_trip: true,
    };
    BookingAdmitter::new(cache, oracle, config)
}

/// Builds a basic-package, car-sized booking request for a slot.
pub fn basic_request(date: &str, time: &str) -> BookingRequest {
    BookingRequest {
        selection: Some(SelectionPayload {
            package_name: String::from("Gloss Shield Detailing Package"),
            size_id: Some(String::from("car")),
            size_label: Some(String::from("Car")),
            ..SelectionPayload::default()
        }),
        appointment: Some(AppointmentPayload {
            date: date.to_string(),
            time: time.to_string(),
        }),
        customer: Some(CustomerPayload {
            name: String::from("Dana Smith"),
            email: String::from("dana@example.com"),
            phone: String::from("555-0100"),
            address: Some(AddressPayload {
                street: Some(String::from("12 Elm St")),
                city: Some(String::from("Springfield")),
                state: Some(String::from("IL")),
                zip: Some(String::from("62704")),
            }),
            heard_from: String::from("Referral"),
        }),
        pricing: Some(PricingPayload { total: Some(180.0) }),
    }
}
