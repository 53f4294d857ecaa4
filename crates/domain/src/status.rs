// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Audit tags recorded in `Performance::status_reason` by the transition
/// coordinator. Free-text reasons (e.g. organizer release reasons) are
/// allowed alongside these fixed tags.
pub mod status_reason {
    /// The musician accepted an offered slot.
    pub const ACCEPTED_BY_MUSICIAN: &str = "ACCEPTED_BY_MUSICIAN";
    /// The musician withdrew from a booked event.
    pub const WITHDRAWN_BY_MUSICIAN: &str = "WITHDRAWN_BY_MUSICIAN";
}

/// Lifecycle status of an event.
///
/// `Matched` is reached only through the capacity tracker closing a full
/// event; `Cancelled` is terminal and never auto-transitions out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventStatus {
    /// Accepting applications and invitations.
    #[default]
    Open,
    /// Capacity reached; accepted acts fill every configured slot.
    Matched,
    /// Cancelled by the organizer. Terminal.
    Cancelled,
    /// Created but not yet published.
    Draft,
    /// Awaiting venue confirmation.
    Pending,
}

impl EventStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Matched => "matched",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
            Self::Pending => "pending",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Open
    /// - Pending → Open
    /// - Open → Matched (capacity tracker close)
    /// - Draft / Pending / Open / Matched → Cancelled (organizer cancel)
    ///
    /// Matched → Open is deliberately absent: a full→not-full change never
    /// reopens an event automatically. Cancelled has no outgoing edges.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft | Self::Pending, Self::Open)
                | (Self::Open, Self::Matched)
                | (
                    Self::Draft | Self::Pending | Self::Open | Self::Matched,
                    Self::Cancelled
                )
        )
    }

    /// Returns whether the event still admits new accepted acts.
    #[must_use]
    pub const fn accepts_new_acts(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "matched" => Ok(Self::Matched),
            "cancelled" => Ok(Self::Cancelled),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            _ => Err(DomainError::InvalidStatus {
                entity: "event",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an assignment ledger row (event ↔ act).
///
/// Only `Accepted` rows count toward event capacity. Rejection of an
/// application removes the row outright rather than flipping it to
/// `Declined`, so a rejected act never occupies a slot that would block
/// re-application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssignmentStatus {
    /// Linked but not yet decided.
    #[default]
    Pending,
    /// Counts toward capacity.
    Accepted,
    /// Decided against; does not count toward capacity.
    Declined,
}

impl AssignmentStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidStatus {
                entity: "assignment",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an application (venue-facing booking) row.
///
/// Transitions are one-directional per row: a terminal row never reverts
/// to `Pending`. A new contact attempt for the same (event, act) pair
/// requires a fresh row, and only after the prior one is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    /// Awaiting an organizer decision.
    #[default]
    Pending,
    /// Approved by the organizer (or pre-accepted for guest acts).
    Accepted,
    /// Rejected by the organizer. Terminal.
    Rejected,
    /// Withdrawn by the applicant before a decision. Terminal.
    Cancelled,
}

impl ApplicationStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// `Pending` may move to any terminal status. `Accepted` may still be
    /// rejected (an approved application revoked through the same control),
    /// but no row ever reverts to `Pending`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Pending,
                Self::Accepted | Self::Rejected | Self::Cancelled
            ) | (Self::Accepted, Self::Rejected)
        )
    }

    /// Returns whether this status is terminal for the row.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus {
                entity: "application",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a musician-facing performance row.
///
/// This vocabulary is richer than the ledger's: it distinguishes an offer
/// awaiting the musician (`Offered`), a booked slot the organizer has asked
/// to be reconfirmed (`PendingReconfirm`), a confirmed booking, and a
/// cancellation (which is a status, never a row deletion, for event-linked
/// rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PerformanceStatus {
    /// Offered to the musician; awaiting acceptance.
    #[default]
    Offered,
    /// Booked, but the organizer has requested reconfirmation.
    PendingReconfirm,
    /// Accepted by the musician.
    Confirmed,
    /// Withdrawn, released, or cancelled.
    Canceled,
}

impl PerformanceStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Offered => "offered",
            Self::PendingReconfirm => "pending_reconfirm",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// - Offered → Confirmed (musician accepts) or Canceled
    /// - `PendingReconfirm` → Confirmed or Canceled (organizer release)
    /// - Confirmed → Canceled (musician withdraw / organizer cancel)
    /// - Canceled → Offered (re-approval resurrects the same row)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Offered | Self::PendingReconfirm,
                Self::Confirmed | Self::Canceled
            ) | (Self::Confirmed, Self::Canceled)
                | (Self::Canceled, Self::Offered)
        )
    }

    /// Returns whether the musician may still accept this offer.
    #[must_use]
    pub const fn is_acceptable(&self) -> bool {
        matches!(self, Self::Offered | Self::PendingReconfirm)
    }
}

impl FromStr for PerformanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offered" => Ok(Self::Offered),
            "pending_reconfirm" => Ok(Self::PendingReconfirm),
            "confirmed" => Ok(Self::Confirmed),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidStatus {
                entity: "performance",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
