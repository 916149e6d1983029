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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Timelike, Utc};
use chrono_tz::Tz;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use suds::{BookingPolicy, SlotOffer, open_dates_in_month, open_slots_on_date};
use suds_api::{
    AdmitterConfig, ApiError, BookingAdmitter, BookingRequest, ConfirmedBooking, EstimateBreakdown,
    EstimateConfig, EstimateRequest, estimate_quote,
};
use suds_domain::{minutes_to_hhmm, parse_iso_date, time_to_minutes};
use suds_store::{SheetGateway, SheetTabs, SheetsApiStore, SnapshotCache};
use suds_travel::{DistanceMatrixClient, TravelOracle};
use time::{Date, Month, PrimitiveDateTime, Time};
use tracing::{error, info};

/// Suds Booking Server - HTTP server for the Suds mobile detailing system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Spreadsheet document id holding the three tabs
    #[arg(long, env = "SUDS_SPREADSHEET_ID")]
    spreadsheet_id: String,

    /// OAuth bearer token with spreadsheet scope
    #[arg(long, env = "SUDS_SHEETS_TOKEN", hide_env_values = true)]
    sheets_token: String,

    /// Name of the availability template tab
    #[arg(long, default_value = "Availability")]
    availability_tab: String,

    /// Name of the bookings tab
    #[arg(long, default_value = "Bookings")]
    bookings_tab: String,

    /// Name of the blackouts tab
    #[arg(long, default_value = "Blackouts")]
    blackouts_tab: String,

    /// Minimum minutes of notice before any offered start
    #[arg(long, default_value_t = 0)]
    min_lead_minutes: u32,

    /// Extra minutes of notice required for same-day starts
    #[arg(long, default_value_t = 0)]
    same_day_cutoff_minutes: u32,

    /// How many days ahead bookings are accepted (0 disables the limit)
    #[arg(long, default_value_t = 60)]
    max_book_days_ahead: u32,

    /// Sales tax rate applied to estimates
    #[arg(long, default_value_t = 0.0)]
    tax_rate: f64,

    /// Miles included before the mileage fee starts
    #[arg(long, default_value_t = 0.0)]
    mileage_free_miles: f64,

    /// Fee per billable mile
    #[arg(long, default_value_t = 0.0)]
    mileage_rate: f64,

    /// The crew's home base address, the travel origin
    #[arg(long)]
    home_base_address: Option<String>,

    /// Whether travel time counts both ways
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    drive_round_trip: bool,

    /// Distance Matrix API key; travel time is zero when absent
    #[arg(long, env = "SUDS_MAPS_KEY", hide_env_values = true)]
    maps_key: Option<String>,

    /// IANA timezone the business schedules in
    #[arg(long, default_value = "America/New_York")]
    timezone: String,

    /// Seconds a snapshot stays fresh before the next read refetches
    #[arg(long, default_value_t = 30)]
    snapshot_ttl_seconds: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The snapshot cache over the sheet gateway.
    cache: Arc<SnapshotCache>,
    /// The booking admitter.
    admitter: Arc<BookingAdmitter>,
    /// The travel oracle, when configured.
    oracle: Option<Arc<dyn TravelOracle>>,
    /// Booking-window limits.
    policy: BookingPolicy,
    /// Estimate pricing knobs.
    estimate: EstimateConfig,
    /// The crew's home base address.
    home_base: Option<String>,
    /// The business timezone.
    timezone: Tz,
}

/// Query parameters for the available-dates endpoint.
#[derive(Debug, Deserialize)]
struct AvailableDatesQuery {
    /// The calendar year.
    year: i32,
    /// The calendar month (1-12).
    month: u8,
}

/// API response for the available-dates endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailableDatesResponse {
    /// Open dates in `YYYY-MM-DD` form.
    dates: Vec<String>,
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// The date, `YYYY-MM-DD`.
    date: String,
}

/// One open slot in an availability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotResponse {
    /// The slot start, `HH:MM`.
    time: String,
    /// Remaining capacity at this slot.
    capacity: u32,
}

/// API response for the availability endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityResponse {
    /// The queried date.
    date: String,
    /// Open slots, ascending by time.
    slots: Vec<SlotResponse>,
}

/// API response for a confirmed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfirmResponse {
    /// Success indicator.
    ok: bool,
    /// The assigned job id.
    #[serde(rename = "jobId")]
    job_id: String,
    /// Start time display.
    start: String,
    /// End time display.
    end: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error tag.
    error: String,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Resolves the current wall-clock instant in the business timezone.
fn business_now(timezone: Tz) -> PrimitiveDateTime {
    let local: chrono::NaiveDateTime = Utc::now().with_timezone(&timezone).naive_local();

    let month: Month =
        Month::try_from(u8::try_from(local.month()).unwrap_or(1)).unwrap_or(Month::January);
    let date: Date =
        Date::from_calendar_date(local.year(), month, u8::try_from(local.day()).unwrap_or(1))
            .unwrap_or(Date::MIN);
    let time: Time = Time::from_hms(
        u8::try_from(local.hour()).unwrap_or(0),
        u8::try_from(local.minute()).unwrap_or(0),
        u8::try_from(local.second()).unwrap_or(0),
    )
    .unwrap_or(Time::MIDNIGHT);

    PrimitiveDateTime::new(date, time)
}

/// Formats a date as canonical `YYYY-MM-DD`.
fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Maps an admission error onto the public error contract.
///
/// Validation and capacity failures are surfaced; store failures collapse
/// to an opaque retryable response that reveals nothing about the backend.
fn confirm_error_response(err: &ApiError) -> Response {
    match err {
        ApiError::InvalidInput { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: String::from("BadRequest"),
                message: None,
            }),
        )
            .into_response(),
        ApiError::Overlap { message } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: String::from("overlap"),
                message: Some(message.clone()),
            }),
        )
            .into_response(),
        ApiError::StoreUnavailable { .. } | ApiError::Internal { .. } => {
            error!(error = %err, "booking confirmation failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: String::from("Failed to confirm booking"),
                    message: None,
                }),
            )
                .into_response()
        }
    }
}

/// Handler for GET `/api/available-dates`.
///
/// Returns the dates in a month with at least one bookable slot. Store
/// outages degrade to an empty list with a 503 rather than an error body
/// the calendar cannot render.
async fn handle_available_dates(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<AvailableDatesQuery>,
) -> Response {
    info!(
        year = query.year,
        month = query.month,
        "Handling available-dates request"
    );

    let snapshot = match state.cache.load(false).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(error = %err, "snapshot load failed for available-dates");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(AvailableDatesResponse { dates: Vec::new() }),
            )
                .into_response();
        }
    };

    let now: PrimitiveDateTime = business_now(state.timezone);
    open_dates_in_month(query.year, query.month, &snapshot, &state.policy, now).map_or_else(
        |_| {
            (
                StatusCode::BAD_REQUEST,
                Json(AvailableDatesResponse { dates: Vec::new() }),
            )
                .into_response()
        },
        |dates| {
            Json(AvailableDatesResponse {
                dates: dates.into_iter().map(format_iso_date).collect(),
            })
            .into_response()
        },
    )
}

/// Handler for GET `/api/availability`.
///
/// Returns the open slots on a date, ascending by time.
async fn handle_availability(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Response {
    info!(date = %query.date, "Handling availability request");

    let Ok(date) = parse_iso_date(&query.date) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(AvailabilityResponse {
                date: query.date,
                slots: Vec::new(),
            }),
        )
            .into_response();
    };

    let snapshot = match state.cache.load(false).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(error = %err, "snapshot load failed for availability");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(AvailabilityResponse {
                    date: query.date,
                    slots: Vec::new(),
                }),
            )
                .into_response();
        }
    };

    let now: PrimitiveDateTime = business_now(state.timezone);
    let slots: Vec<SlotResponse> = open_slots_on_date(date, &snapshot, &state.policy, now)
        .into_iter()
        .map(|offer: SlotOffer| SlotResponse {
            time: minutes_to_hhmm(time_to_minutes(offer.time)),
            capacity: offer.capacity,
        })
        .collect();

    Json(AvailabilityResponse {
        date: query.date,
        slots,
    })
    .into_response()
}

/// Handler for POST `/api/confirm-booking`.
async fn handle_confirm_booking(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<BookingRequest>,
) -> Response {
    info!("Handling confirm-booking request");

    state.admitter.admit(&request).await.map_or_else(
        |err| confirm_error_response(&err),
        |ConfirmedBooking { job_id, start, end }| {
            Json(ConfirmResponse {
                ok: true,
                job_id,
                start,
                end,
            })
            .into_response()
        },
    )
}

/// Handler for POST `/api/estimate`.
///
/// Always answers 200; travel lookups degrade to a zero-mileage quote.
async fn handle_estimate(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Json<EstimateBreakdown> {
    info!(subtotal = request.subtotal, "Handling estimate request");

    let breakdown: EstimateBreakdown = estimate_quote(
        state.oracle.as_deref(),
        state.home_base.as_deref(),
        &request,
        &state.estimate,
    )
    .await;
    Json(breakdown)
}

/// Builds the application router.
///
/// `/api/slots` and `/api/book` are aliases kept for older UI builds.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/available-dates", get(handle_available_dates))
        .route("/api/availability", get(handle_availability))
        .route("/api/slots", get(handle_availability))
        .route("/api/confirm-booking", post(handle_confirm_booking))
        .route("/api/book", post(handle_confirm_booking))
        .route("/api/estimate", post(handle_estimate))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let timezone: Tz = args
        .timezone
        .parse()
        .map_err(|_| format!("Invalid timezone: '{}'", args.timezone))?;

    let http: reqwest::Client = reqwest::Client::new();
    let store: Arc<SheetsApiStore> = Arc::new(SheetsApiStore::new(
        http.clone(),
        args.spreadsheet_id,
        args.sheets_token,
    ));
    let tabs: SheetTabs = SheetTabs {
        availability: args.availability_tab,
        bookings: args.bookings_tab,
        blackouts: args.blackouts_tab,
    };
    let cache: Arc<SnapshotCache> = Arc::new(SnapshotCache::new(
        SheetGateway::new(store, tabs),
        Duration::from_secs(args.snapshot_ttl_seconds),
    ));

    let oracle: Option<Arc<dyn TravelOracle>> = args
        .maps_key
        .map(|key| Arc::new(DistanceMatrixClient::new(http, key)) as Arc<dyn TravelOracle>);
    if oracle.is_none() {
        info!("No travel oracle configured; travel time contributes zero minutes");
    }

    let admitter: Arc<BookingAdmitter> = Arc::new(BookingAdmitter::new(
        Arc::clone(&cache),
        oracle.clone(),
        AdmitterConfig {
            home_base_address: args.home_base_address.clone(),
            drive_round_trip: args.drive_round_trip,
        },
    ));

    let app_state: AppState = AppState {
        cache,
        admitter,
        oracle,
        policy: BookingPolicy {
            min_lead_minutes: args.min_lead_minutes,
            same_day_cutoff_minutes: args.same_day_cutoff_minutes,
            max_days_ahead: args.max_book_days_ahead,
        },
        estimate: EstimateConfig {
            tax_rate: args.tax_rate,
            free_miles: args.mileage_free_miles,
            per_mile_rate: args.mileage_rate,
        },
        home_base: args.home_base_address,
        timezone,
    };

    let app: Router = build_router(app_state);

    let addr: String = format!("0.0.0.0:{}", args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
