// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Act name is empty or invalid.
    InvalidActName(String),
    /// Act type string is not recognized.
    InvalidActType(String),
    /// A stored status string does not parse for the given entity.
    InvalidStatus {
        /// The entity the status belongs to.
        entity: &'static str,
        /// The unparseable value.
        value: String,
    },
    /// `max_slots` must be positive when set.
    InvalidMaxSlots(u32),
    /// A release reason must be non-empty.
    InvalidReleaseReason,
    /// Date or time string failed to parse.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidActName(msg) => write!(f, "Invalid act name: {msg}"),
            Self::InvalidActType(value) => write!(f, "Unknown act type: {value}"),
            Self::InvalidStatus { entity, value } => {
                write!(f, "Invalid {entity} status: '{value}'")
            }
            Self::InvalidMaxSlots(value) => {
                write!(f, "Invalid max slots: {value}. Must be greater than 0")
            }
            Self::InvalidReleaseReason => write!(f, "A release reason must be provided"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
