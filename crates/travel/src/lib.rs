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

//! The travel-time oracle.
//!
//! The crew drives to every job from a single home base, so job duration
//! includes an estimated drive. The oracle is strictly best-effort: every
//! failure mode (unconfigured, timeout, no route, quota) degrades to zero
//! travel minutes at the call site and is never user-visible.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// How long a single oracle request may take before being abandoned.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Base URL of the Distance Matrix API.
const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// An estimated one-way drive between two addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    /// One-way driving distance in miles.
    pub miles: f64,
    /// One-way driving minutes, traffic-adjusted when available.
    pub minutes_one_way: u32,
}

/// Errors from the travel oracle. Internal only; callers degrade to zero.
#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    /// The request could not be completed (network, timeout, quota).
    #[error("travel service request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service found no drivable route between the addresses.
    #[error("travel service returned element status '{0}'")]
    NoRoute(String),
    /// The response body did not have the expected shape.
    #[error("unexpected travel service response")]
    InvalidResponse,
}

/// Something that can estimate a one-way drive between two addresses.
#[async_trait]
pub trait TravelOracle: Send + Sync {
    /// Estimates the one-way drive from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns a `TravelError` on any failure; callers must treat failures
    /// as zero travel rather than surfacing them.
    async fn estimate(&self, origin: &str, destination: &str)
    -> Result<TravelEstimate, TravelError>;
}

/// Top-level Distance Matrix response.
#[derive(Debug, Deserialize)]
struct MatrixResponse {
    /// One row per origin.
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

/// One origin's results.
#[derive(Debug, Deserialize)]
struct MatrixRow {
    /// One element per destination.
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

/// A single origin-destination pairing.
#[derive(Debug, Deserialize)]
struct MatrixElement {
    /// Element status; anything but `OK` means no usable route.
    #[serde(default)]
    status: String,
    /// Driving distance.
    distance: Option<MatrixValue>,
    /// Driving duration without traffic.
    duration: Option<MatrixValue>,
    /// Traffic-adjusted driving duration; preferred when present.
    duration_in_traffic: Option<MatrixValue>,
}

/// A value/text pair as the API renders quantities.
#[derive(Debug, Deserialize)]
struct MatrixValue {
    /// The numeric value (seconds for durations, meters for distances).
    #[serde(default)]
    value: f64,
    /// The display text (e.g. `"12.4 mi"` with imperial units).
    #[serde(default)]
    text: String,
}

/// A `TravelOracle` over the Distance Matrix API.
pub struct DistanceMatrixClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// API key.
    api_key: String,
}

impl DistanceMatrixClient {
    /// Creates a new client.
    #[must_use]
    pub const fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }
}

#[async_trait]
impl TravelOracle for DistanceMatrixClient {
    async fn estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TravelEstimate, TravelError> {
        let response: MatrixResponse = self
            .http
            .get(DISTANCE_MATRIX_URL)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("key", self.api_key.as_str()),
                ("units", "imperial"),
                ("departure_time", "now"),
                ("traffic_model", "best_guess"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        estimate_from_response(&response)
    }
}

/// Extracts the first origin-destination element into an estimate.
fn estimate_from_response(response: &MatrixResponse) -> Result<TravelEstimate, TravelError> {
    let element: &MatrixElement = response
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or(TravelError::InvalidResponse)?;

    if element.status != "OK" {
        return Err(TravelError::NoRoute(element.status.clone()));
    }

    let seconds: f64 = element
        .duration_in_traffic
        .as_ref()
        .or_else(|| element.duration.as_ref())
        .map_or(0.0, |d| d.value);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes_one_way: u32 = (seconds / 60.0).round().max(0.0) as u32;

    let miles: f64 = element
        .distance
        .as_ref()
        .map_or(0.0, |d| miles_from_text(&d.text));

    Ok(TravelEstimate {
        miles,
        minutes_one_way,
    })
}

/// Pulls the numeric miles out of a display string like `"12.4 mi"`.
fn miles_from_text(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    fn response_from_json(body: serde_json::Value) -> MatrixResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_estimate_prefers_traffic_duration() {
        let response: MatrixResponse = response_from_json(serde_json::json!({
            "rows": [{ "elements": [{
                "status": "OK",
                "distance": { "value": 19956.0, "text": "12.4 mi" },
                "duration": { "value": 1200.0, "text": "20 mins" },
                "duration_in_traffic": { "value": 1500.0, "text": "25 mins" }
            }]}]
        }));
        let estimate: TravelEstimate = estimate_from_response(&response).unwrap();
        assert_eq!(estimate.minutes_one_way, 25);
        assert!((estimate.miles - 12.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_falls_back_to_plain_duration() {
        let response: MatrixResponse = response_from_json(serde_json::json!({
            "rows": [{ "elements": [{
                "status": "OK",
                "distance": { "value": 8046.0, "text": "5 mi" },
                "duration": { "value": 600.0, "text": "10 mins" }
            }]}]
        }));
        let estimate: TravelEstimate = estimate_from_response(&response).unwrap();
        assert_eq!(estimate.minutes_one_way, 10);
        assert!((estimate.miles - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_rejects_unroutable_elements() {
        let response: MatrixResponse = response_from_json(serde_json::json!({
            "rows": [{ "elements": [{ "status": "ZERO_RESULTS" }]}]
        }));
        let result = estimate_from_response(&response);
        assert!(matches!(result, Err(TravelError::NoRoute(status)) if status == "ZERO_RESULTS"));
    }

    #[test]
    fn test_estimate_rejects_empty_response() {
        let response: MatrixResponse = response_from_json(serde_json::json!({ "rows": [] }));
        assert!(matches!(
            estimate_from_response(&response),
            Err(TravelError::InvalidResponse)
        ));
    }

    #[test]
    fn test_miles_from_text_strips_units() {
        assert!((miles_from_text("12.4 mi") - 12.4).abs() < f64::EPSILON);
        assert!((miles_from_text("1,204 mi") - 1204.0).abs() < f64::EPSILON);
        assert!(miles_from_text("").abs() < f64::EPSILON);
    }
}
