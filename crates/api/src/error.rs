// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use suds::CoreError;
use suds_domain::DomainError;
use suds_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/store errors and represent the API
/// contract: capacity and validation failures are surfaced to clients,
/// infrastructure failures are collapsed to opaque retryable responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested start time no longer fits the full job window.
    Overlap {
        /// A human-readable message for the date/time picker.
        message: String,
    },
    /// The spreadsheet store could not be reached. Retryable; internals are
    /// never included in client responses.
    StoreUnavailable {
        /// A description for the server log, not the client.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Overlap { message } => write!(f, "Overlap: {message}"),
            Self::StoreUnavailable { message } => write!(f, "Store unavailable: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParse { cell } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Unrecognized date: '{cell}'"),
        },
        DomainError::TimeParse { cell } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Unrecognized time: '{cell}'"),
        },
        DomainError::JobIdParse(s) => ApiError::Internal {
            message: format!("Invalid job id: '{s}'"),
        },
        DomainError::InvalidWindow { start, end } => ApiError::InvalidInput {
            field: String::from("window"),
            message: format!("Window end {end} must come after start {start}"),
        },
        DomainError::InvalidMonth(m) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {m}. Must be between 1 and 12"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
///
/// All store failure modes collapse to `StoreUnavailable`; clients never
/// see transport detail.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    ApiError::StoreUnavailable {
        message: err.to_string(),
    }
}
