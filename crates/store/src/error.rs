// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur talking to the spreadsheet store.
///
/// Only transport-level failures surface from reads; individual rows that
/// fail to parse are logged and skipped at the row-mapping layer so one bad
/// row never poisons a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or refused the request
    /// (network, quota, auth).
    Unavailable(String),
    /// The store answered with a body the gateway could not interpret.
    InvalidResponse(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
            Self::InvalidResponse(msg) => write!(f, "Invalid store response: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
