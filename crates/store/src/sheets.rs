// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The raw tabular store interface and its two implementations.
//!
//! `SheetsApiStore` talks to the Google Sheets values API;
//! `MemorySheetStore` backs tests and local development with the same
//! contract. Everything above this module works in terms of string cells
//! and never sees HTTP.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Base URL of the Sheets values API.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// A named-tab tabular store with row-level read and append.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Reads a cell range from a tab, e.g. `A2:I`.
    ///
    /// Rows are returned as string cells; trailing empty cells may be
    /// absent entirely, so callers index defensively.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on transport failures and
    /// `StoreError::InvalidResponse` when the body cannot be interpreted.
    async fn read_range(&self, tab: &str, range: &str) -> Result<Vec<Vec<String>>, StoreError>;

    /// Appends a single row to a tab.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on transport failures.
    async fn append_row(&self, tab: &str, row: Vec<String>) -> Result<(), StoreError>;
}

/// The `values` portion of a Sheets API read response.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Row-major cell values. Absent when the range is empty.
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// A `SheetStore` over the Google Sheets v4 values API.
///
/// Authentication uses a bearer access token supplied at startup; minting
/// and refreshing the token is a deployment concern, not the gateway's.
pub struct SheetsApiStore {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// The spreadsheet document id.
    spreadsheet_id: String,
    /// OAuth bearer token with spreadsheet scope.
    access_token: String,
}

impl SheetsApiStore {
    /// Creates a new `SheetsApiStore`.
    ///
    /// # Arguments
    ///
    /// * `http` - The shared HTTP client
    /// * `spreadsheet_id` - The spreadsheet document id
    /// * `access_token` - OAuth bearer token with spreadsheet scope
    #[must_use]
    pub const fn new(http: reqwest::Client, spreadsheet_id: String, access_token: String) -> Self {
        Self {
            http,
            spreadsheet_id,
            access_token,
        }
    }

    /// Renders a JSON cell into the string form the row mappers parse.
    fn cell_to_string(cell: &serde_json::Value) -> String {
        match cell {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }
}

#[async_trait]
impl SheetStore for SheetsApiStore {
    async fn read_range(&self, tab: &str, range: &str) -> Result<Vec<Vec<String>>, StoreError> {
        let url: String = format!(
            "{SHEETS_API_BASE}/{}/values/{tab}!{range}",
            self.spreadsheet_id
        );
        let response: reqwest::Response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "read {tab}!{range} returned {status}"
            )));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|err| StoreError::InvalidResponse(err.to_string()))?;

        Ok(body
            .values
            .iter()
            .map(|row| row.iter().map(Self::cell_to_string).collect())
            .collect())
    }

    async fn append_row(&self, tab: &str, row: Vec<String>) -> Result<(), StoreError> {
        let url: String = format!(
            "{SHEETS_API_BASE}/{}/values/{tab}!A2:append",
            self.spreadsheet_id
        );
        let response: reqwest::Response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "append to {tab} returned {status}"
            )));
        }
        Ok(())
    }
}

/// An in-memory `SheetStore` for tests and local development.
///
/// Rows are stored exactly as appended, headerless, so tab contents line up
/// with what the API store returns for `A2:` ranges. Reads ignore the
/// requested range and return every cell of every row; the row mappers only
/// look at the columns they need.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    /// Tab name to headerless rows.
    tabs: Mutex<HashMap<String, Vec<Vec<String>>>>,
    /// When set, reads fail with `StoreError::Unavailable`.
    fail_reads: AtomicBool,
    /// When set, appends fail with `StoreError::Unavailable`.
    fail_appends: AtomicBool,
    /// Number of `read_range` calls attempted.
    reads: AtomicUsize,
}

impl MemorySheetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows of a tab.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned, which only happens after a
    /// panic on another test thread.
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn set_tab(&self, tab: &str, rows: Vec<Vec<String>>) {
        self.tabs.lock().unwrap().insert(tab.to_string(), rows);
    }

    /// Returns a copy of a tab's rows.
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    #[must_use]
    pub fn rows(&self, tab: &str) -> Vec<Vec<String>> {
        self.tabs.lock().unwrap().get(tab).cloned().unwrap_or_default()
    }

    /// Makes subsequent reads fail, simulating quota or network loss.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent appends fail.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Returns how many reads have been attempted.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn read_range(&self, tab: &str, _range: &str) -> Result<Vec<Vec<String>>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(String::from(
                "simulated read failure",
            )));
        }
        Ok(self.rows(tab))
    }

    #[allow(clippy::unwrap_used)]
    async fn append_row(&self, tab: &str, row: Vec<String>) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(String::from(
                "simulated append failure",
            )));
        }
        self.tabs
            .lock()
            .unwrap()
            .entry(tab.to_string())
            .or_default()
            .push(row);
        Ok(())
    }
}
