// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    FailingOracle, FixedOracle, admitter_over, basic_request, cells, store_with_window,
};
use crate::{ApiError, BookingRequest, ConfirmedBooking, SelectionPayload};
use std::sync::Arc;
use suds_store::MemorySheetStore;
use suds_travel::TravelEstimate;

#[tokio::test]
async fn test_basic_fit_is_admitted() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(Arc::clone(&store), None);

    let confirmed: ConfirmedBooking = admitter
        .admit(&basic_request("2025-02-10", "09:00"))
        .await
        .unwrap();

    assert_eq!(confirmed.job_id, "JOB-001");
    assert_eq!(confirmed.start, "9:00 AM");
    assert_eq!(confirmed.end, "11:00 AM");

    let rows: Vec<Vec<String>> = store.rows("Bookings");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 15);
    assert_eq!(rows[0][0], "JOB-001");
    assert_eq!(rows[0][1], "2025-02-10");
    assert_eq!(rows[0][7], "9:00 AM");
    assert_eq!(rows[0][8], "11:00 AM");
    assert_eq!(rows[0][12], "12 Elm St, Springfield, IL, 62704");
    assert_eq!(rows[0][13], "");
    assert_eq!(rows[0][14], "");
}

#[tokio::test]
async fn test_admitted_booking_is_visible_to_next_load() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, None);

    admitter
        .admit(&basic_request("2025-02-10", "09:00"))
        .await
        .unwrap();

    // The cache was invalidated on append: a second admission for an
    // overlapping slot must observe the first booking and be rejected.
    let result = admitter.admit(&basic_request("2025-02-10", "10:00")).await;
    assert!(matches!(result, Err(ApiError::Overlap { .. })));
}

#[tokio::test]
async fn test_overlap_rejection() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    store.set_tab(
        "Bookings",
        vec![cells(&[
            "JOB-001",
            "2025-02-10",
            "Pat",
            "Gloss Shield",
            "Car",
            "",
            "120",
            "9:30 AM",
            "11:30 AM",
        ])],
    );
    let admitter = admitter_over(Arc::clone(&store), None);

    let result = admitter.admit(&basic_request("2025-02-10", "09:00")).await;
    assert!(matches!(result, Err(ApiError::Overlap { .. })));
    // The rejected request appended nothing.
    assert_eq!(store.rows("Bookings").len(), 1);
}

#[tokio::test]
async fn test_blackout_date_rejects_admission() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-11", "9:00", "12:00");
    store.set_tab("Blackouts", vec![cells(&["2025-02-11", "TRUE"])]);
    let admitter = admitter_over(store, None);

    let result = admitter.admit(&basic_request("2025-02-11", "09:00")).await;
    assert!(matches!(result, Err(ApiError::Overlap { .. })));
}

#[tokio::test]
async fn test_start_off_grid_is_rejected() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, None);

    let result = admitter.admit(&basic_request("2025-02-10", "09:15")).await;
    assert!(matches!(result, Err(ApiError::Overlap { .. })));
}

#[tokio::test]
async fn test_malformed_date_is_a_bad_request() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, None);

    let result = admitter.admit(&basic_request("02/10/2025", "09:00")).await;
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "date")
    );
}

#[tokio::test]
async fn test_malformed_time_is_a_bad_request() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, None);

    let result = admitter.admit(&basic_request("2025-02-10", "9am")).await;
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "time")
    );
}

#[tokio::test]
async fn test_missing_payload_sections_are_bad_requests() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, None);

    let mut request: BookingRequest = basic_request("2025-02-10", "09:00");
    request.customer = None;
    let result = admitter.admit(&request).await;
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "customer")
    );

    let empty: BookingRequest = BookingRequest::default();
    let result = admitter.admit(&empty).await;
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_job_ids_increase_monotonically() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "8:00", "18:00");
    store.set_tab(
        "Bookings",
        vec![cells(&[
            "JOB-041",
            "2025-01-05",
            "Old",
            "Gloss Shield",
            "Car",
            "",
            "120",
            "9:00 AM",
            "11:00 AM",
        ])],
    );
    let admitter = admitter_over(Arc::clone(&store), None);

    let first: ConfirmedBooking = admitter
        .admit(&basic_request("2025-02-10", "08:00"))
        .await
        .unwrap();
    assert_eq!(first.job_id, "JOB-042");

    let second: ConfirmedBooking = admitter
        .admit(&basic_request("2025-02-10", "14:00"))
        .await
        .unwrap();
    assert_eq!(second.job_id, "JOB-043");
}

#[tokio::test]
async fn test_travel_inflates_job_window() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "8:00", "18:00");
    let oracle = Arc::new(FixedOracle(TravelEstimate {
        miles: 10.0,
        minutes_one_way: 25,
    }));
    let admitter = admitter_over(Arc::clone(&store), Some(oracle));

    // Thorough package, truck, paint correction: 180 + 20 + 150 = 350
    // service minutes, plus 50 round-trip travel = 400 total.
    let mut request: BookingRequest = basic_request("2025-02-10", "08:00");
    request.selection = Some(SelectionPayload {
        package_name: String::from("Thorough Detailing Package"),
        size_id: Some(String::from("truck")),
        size_label: Some(String::from("Full-Size Truck")),
        addons: vec![crate::AddonPayload::Detailed {
            id: Some(String::from("paint-correction")),
            name: Some(String::from("Paint Correction")),
        }],
        ..SelectionPayload::default()
    });

    let confirmed: ConfirmedBooking = admitter.admit(&request).await.unwrap();
    assert_eq!(confirmed.start, "8:00 AM");
    assert_eq!(confirmed.end, "2:40 PM");

    // Anything starting before 14:40 must now be rejected.
    let result = admitter.admit(&basic_request("2025-02-10", "14:30")).await;
    assert!(matches!(result, Err(ApiError::Overlap { .. })));

    // The 15:00 slot is clear of the job window. The basic car package
    // also carries the 50 round-trip travel minutes: 120 + 50 = 170.
    let late: ConfirmedBooking = admitter
        .admit(&basic_request("2025-02-10", "15:00"))
        .await
        .unwrap();
    assert_eq!(late.end, "5:50 PM");
}

#[tokio::test]
async fn test_travel_failure_books_without_travel() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    let admitter = admitter_over(store, Some(Arc::new(FailingOracle)));

    let confirmed: ConfirmedBooking = admitter
        .admit(&basic_request("2025-02-10", "09:00"))
        .await
        .unwrap();
    assert_eq!(confirmed.end, "11:00 AM");
}

#[tokio::test]
async fn test_append_failure_is_store_unavailable() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    store.set_fail_appends(true);
    let admitter = admitter_over(Arc::clone(&store), None);

    let result = admitter.admit(&basic_request("2025-02-10", "09:00")).await;
    assert!(matches!(result, Err(ApiError::StoreUnavailable { .. })));
    assert!(store.rows("Bookings").is_empty());
}

#[tokio::test]
async fn test_unreadable_store_is_store_unavailable() {
    let store: Arc<MemorySheetStore> = store_with_window("2025-02-10", "9:00", "12:00");
    store.set_fail_reads(true);
    let admitter = admitter_over(store, None);

    let result = admitter.admit(&basic_request("2025-02-10", "09:00")).await;
    assert!(matches!(result, Err(ApiError::StoreUnavailable { .. })));
}
