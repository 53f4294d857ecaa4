// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gigbook::CoreError;
use gigbook_domain::DomainError;
use gigbook_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Display text never exposes internal row identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The actor does not have permission for this operation.
    Unauthorized {
        /// The operation that was attempted.
        action: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
    },
    /// Approval or guest-add attempted against a full event.
    CapacityExceeded {
        /// The configured slot cap.
        max_slots: u32,
        /// The current accepted count.
        accepted: u32,
    },
    /// The entity is in a status that does not permit the operation.
    InvalidState {
        /// The entity whose status blocked the operation.
        entity: String,
        /// The entity's current status.
        current: String,
        /// The operation that was attempted.
        operation: String,
    },
    /// Invite attempted where an application already links the pair.
    AlreadyLinked,
    /// An intermediate step failed after some writes committed. The
    /// transactional persistence layer prevents this in normal operation;
    /// the variant is kept so non-transactional ports share the vocabulary.
    PartialFailure {
        /// The operation during which the failure occurred.
        operation: String,
        /// The step that failed.
        step: String,
        /// A description of the failure.
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
            Self::Unauthorized { action } => {
                write!(f, "Not authorized to {action}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound { resource_type } => {
                write!(f, "{resource_type} not found")
            }
            Self::CapacityExceeded {
                max_slots,
                accepted,
            } => {
                write!(
                    f,
                    "Event is full: {accepted} of {max_slots} slots are already accepted"
                )
            }
            Self::InvalidState {
                entity,
                current,
                operation,
            } => {
                write!(f, "Cannot {operation}: the {entity} is currently '{current}'")
            }
            Self::AlreadyLinked => {
                write!(
                    f,
                    "An application already exists between this act and this event"
                )
            }
            Self::PartialFailure {
                operation,
                step,
                message,
            } => {
                write!(
                    f,
                    "Operation '{operation}' partially failed at step '{step}': {message}"
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
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
        DomainError::InvalidActName(msg) => ApiError::InvalidInput {
            field: String::from("act_name"),
            message: msg,
        },
        DomainError::InvalidActType(value) => ApiError::InvalidInput {
            field: String::from("act_type"),
            message: format!("Unknown act type: {value}"),
        },
        DomainError::InvalidStatus { entity, value } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid {entity} status: '{value}'"),
        },
        DomainError::InvalidMaxSlots(value) => ApiError::InvalidInput {
            field: String::from("max_slots"),
            message: format!("Invalid max slots: {value}. Must be greater than 0"),
        },
        DomainError::InvalidReleaseReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("A release reason must be provided"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::NotFound { resource } => ApiError::ResourceNotFound {
            resource_type: capitalize(resource),
        },
        CoreError::CapacityExceeded {
            max_slots,
            accepted,
        } => ApiError::CapacityExceeded {
            max_slots,
            accepted,
        },
        CoreError::InvalidStateTransition {
            entity,
            from,
            operation,
        } => ApiError::InvalidState {
            entity: entity.to_string(),
            current: from,
            operation: operation.to_string(),
        },
        CoreError::AlreadyLinked { .. } => ApiError::AlreadyLinked,
        CoreError::Unauthorized { operation } => ApiError::Unauthorized {
            action: operation.to_string(),
        },
        CoreError::BookingNotFound => ApiError::Internal {
            message: String::from("No booking record underlies this offer"),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::EventNotFound(_) => Self::ResourceNotFound {
                resource_type: String::from("Event"),
            },
            PersistenceError::NotFound(_) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
            },
            other => Self::Internal {
                message: format!("Storage failure: {other}"),
            },
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
