// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook_domain::DomainError;

/// Errors that can occur during booking state transitions.
///
/// Validation errors are returned before any write occurs and are safe to
/// retry after correcting the condition. Display text never exposes
/// internal row identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A referenced entity does not exist in the loaded booking state.
    NotFound {
        /// The kind of entity that was not found.
        resource: &'static str,
    },
    /// Approval or guest-add attempted against a full event.
    CapacityExceeded {
        /// The configured slot cap.
        max_slots: u32,
        /// The current accepted count.
        accepted: u32,
    },
    /// The operation's precondition on current status is not met.
    InvalidStateTransition {
        /// The entity whose status blocked the operation.
        entity: &'static str,
        /// The entity's current status.
        from: String,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// Invite attempted where an application already links the pair.
    AlreadyLinked {
        /// The event of the attempted invitation.
        event_id: i64,
        /// The act of the attempted invitation.
        act_id: i64,
    },
    /// The actor is neither the event's organizer nor (where applicable)
    /// the performance's owning musician.
    Unauthorized {
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// An offer exists with no underlying application row. This is a
    /// data-integrity error, not a user error, and is surfaced distinctly.
    BookingNotFound,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NotFound { resource } => write!(f, "The requested {resource} does not exist"),
            Self::CapacityExceeded {
                max_slots,
                accepted,
            } => {
                write!(
                    f,
                    "Event is full: {accepted} of {max_slots} slots are already accepted"
                )
            }
            Self::InvalidStateTransition {
                entity,
                from,
                operation,
            } => {
                write!(
                    f,
                    "Cannot {operation}: the {entity} is currently '{from}'"
                )
            }
            Self::AlreadyLinked { .. } => {
                write!(
                    f,
                    "An application already exists between this act and this event"
                )
            }
            Self::Unauthorized { operation } => {
                write!(f, "Not authorized to {operation}")
            }
            Self::BookingNotFound => {
                write!(f, "No booking record underlies this offer")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
