// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{ApplicationStatus, AssignmentStatus, EventStatus, PerformanceStatus};
use serde::{Deserialize, Serialize};

/// Classification of a performing identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActType {
    /// Solo performer.
    #[serde(rename = "solo")]
    Solo,
    /// Two-member act.
    #[serde(rename = "duo")]
    Duo,
    /// Band of three or more.
    #[serde(rename = "band")]
    Band,
    /// DJ set.
    #[serde(rename = "dj")]
    Dj,
    /// Anything else.
    #[serde(rename = "other")]
    Other,
}

impl ActType {
    /// Parses an act type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid act type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "solo" => Ok(Self::Solo),
            "duo" => Ok(Self::Duo),
            "band" => Ok(Self::Band),
            "dj" => Ok(Self::Dj),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidActType(s.to_string())),
        }
    }

    /// Returns the string representation of this act type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Duo => "duo",
            Self::Band => "band",
            Self::Dj => "dj",
            Self::Other => "other",
        }
    }
}

/// A musician's performing identity, distinct from the login/profile
/// that owns or administers it.
///
/// Guest acts are created by an organizer on behalf of a musician without
/// an account: they have no owner profile and `is_guest` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the act has not been persisted yet.
    pub act_id: Option<i64>,
    /// Profile that owns/administers the act. `None` for guest acts.
    pub owner_profile_id: Option<i64>,
    /// Display name of the act.
    pub name: String,
    /// Classification of the act.
    pub act_type: ActType,
    /// Whether this act was created as an unclaimed guest entry.
    pub is_guest: bool,
}

impl Act {
    /// Creates a new act without a persisted ID.
    #[must_use]
    pub const fn new(owner_profile_id: i64, name: String, act_type: ActType) -> Self {
        Self {
            act_id: None,
            owner_profile_id: Some(owner_profile_id),
            name,
            act_type,
            is_guest: false,
        }
    }

    /// Creates a new unclaimed guest act (no linked login).
    #[must_use]
    pub const fn new_guest(name: String, act_type: ActType) -> Self {
        Self {
            act_id: None,
            owner_profile_id: None,
            name,
            act_type,
            is_guest: true,
        }
    }
}

/// An event row owned by its organizer.
///
/// `max_slots = None` means unlimited capacity: the event never fills and
/// the capacity tracker never closes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Canonical identifier assigned by the database.
    pub event_id: Option<i64>,
    /// The organizer's profile.
    pub organizer_profile_id: i64,
    /// The venue hosting the event, when registered.
    pub venue_id: Option<i64>,
    /// Venue display name.
    pub venue_name: String,
    /// Event date (ISO 8601 date string).
    pub date: String,
    /// Doors-open time (HH:MM), when set.
    pub open_time: Option<String>,
    /// Performance start time (HH:MM), when set.
    pub start_time: Option<String>,
    /// Performance end time (HH:MM), when set.
    pub end_time: Option<String>,
    /// Organizer-configured cap on accepted acts. `None` = unlimited.
    pub max_slots: Option<u32>,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Ticket charge text (e.g. "¥2,000 + 1drink").
    pub charge: Option<String>,
    /// Free-text booking conditions.
    pub conditions: Option<String>,
}

/// The authoritative ledger row linking an act to an event.
///
/// Unique per (event, act). Only `Accepted` rows count toward capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Canonical identifier assigned by the database.
    pub assignment_id: Option<i64>,
    /// The event.
    pub event_id: i64,
    /// The act.
    pub act_id: i64,
    /// Decided relationship state.
    pub status: AssignmentStatus,
    /// Display ordering on the event page.
    pub sort_order: i32,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// One contact attempt between an act and an event, regardless of which
/// side initiated it. Invitations and applications share this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Canonical identifier assigned by the database.
    pub application_id: Option<i64>,
    /// The event.
    pub event_id: i64,
    /// The act.
    pub act_id: i64,
    /// Free-text message from the initiating side.
    pub message: Option<String>,
    /// Approval lifecycle state.
    pub status: ApplicationStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Application {
    /// Fixed audit-trail message written when an organizer seats a guest
    /// act directly, bypassing the application-approval two-step.
    pub const GUEST_SLOT_MESSAGE: &'static str = "主催によるゲスト枠として追加";
}

/// The musician-facing record of an engagement.
///
/// Event-linked rows (`event_id` set) are co-constrained by the
/// organizer's ledger actions and are never physically deleted;
/// cancellation is a status. Personal rows (`event_id = None`) belong
/// solely to the owning profile and support hard delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Canonical identifier assigned by the database.
    pub performance_id: Option<i64>,
    /// The owning musician profile.
    pub profile_id: i64,
    /// The performing act. `None` only for ungrouped personal entries.
    pub act_id: Option<i64>,
    /// The linked event. `None` for personal entries.
    pub event_id: Option<i64>,
    /// Venue display name (denormalized for personal entries).
    pub venue_name: String,
    /// Performance date (ISO 8601 date string).
    pub date: String,
    /// Timeline status.
    pub status: PerformanceStatus,
    /// Free-text audit tag for the last status change.
    pub status_reason: Option<String>,
    /// Timestamp of the last status change (RFC 3339).
    pub status_changed_at: Option<String>,
}

impl Performance {
    /// Returns whether this is a personal (non-event-linked) entry.
    #[must_use]
    pub const fn is_personal(&self) -> bool {
        self.event_id.is_none()
    }
}
