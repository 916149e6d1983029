// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date cell or field could not be interpreted as a calendar date.
    DateParse {
        /// The offending cell contents.
        cell: String,
    },
    /// A time cell or field could not be interpreted as a wall-clock time.
    TimeParse {
        /// The offending cell contents.
        cell: String,
    },
    /// A job id did not match the `JOB-NNN` form.
    JobIdParse(String),
    /// An availability window whose end does not come after its start.
    InvalidWindow {
        /// The window start time.
        start: time::Time,
        /// The window end time.
        end: time::Time,
    },
    /// A month number outside 1-12.
    InvalidMonth(u8),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse { cell } => write!(f, "Unrecognized date: '{cell}'"),
            Self::TimeParse { cell } => write!(f, "Unrecognized time: '{cell}'"),
            Self::JobIdParse(s) => write!(f, "Invalid job id: '{s}'"),
            Self::InvalidWindow { start, end } => {
                write!(f, "Window end {end} must come after start {start}")
            }
            Self::InvalidMonth(m) => write!(f, "Invalid month: {m}. Must be between 1 and 12"),
        }
    }
}

impl std::error::Error for DomainError {}
