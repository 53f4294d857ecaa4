// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Identifiers they carry are the canonical database ids the
//! caller already holds; error text never introduces new ones.

use gigbook_domain::{Act, Application, Performance};

/// API response for a successful state-changing operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionResponse {
    /// The event the operation was scoped to.
    pub event_id: i64,
    /// The audit event recorded for the operation.
    pub audit_event_id: i64,
    /// The event status after the operation.
    pub event_status: String,
    /// The accepted count after the operation.
    pub accepted_count: u32,
    /// A success message.
    pub message: String,
}

/// One row of the organizer's roster view: an application joined with
/// its act.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    /// The application's canonical identifier.
    pub application_id: i64,
    /// The act's canonical identifier.
    pub act_id: i64,
    /// Display name of the act.
    pub act_name: String,
    /// Classification of the act.
    pub act_type: String,
    /// Whether the act is an unclaimed guest entry.
    pub is_guest: bool,
    /// The application status.
    pub application_status: String,
    /// The application message, if any.
    pub message: Option<String>,
}

impl RosterEntry {
    /// Builds a roster entry from a stored application/act pair.
    #[must_use]
    pub fn from_pair(application: &Application, act: &Act) -> Self {
        Self {
            application_id: application.application_id.unwrap_or_default(),
            act_id: application.act_id,
            act_name: act.name.clone(),
            act_type: act.act_type.as_str().to_string(),
            is_guest: act.is_guest,
            application_status: application.status.to_string(),
            message: application.message.clone(),
        }
    }
}

/// One row of a musician's timeline: an event-linked booking or a
/// personal entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    /// The performance's canonical identifier.
    pub performance_id: i64,
    /// The linked event, if any. `None` for personal entries.
    pub event_id: Option<i64>,
    /// Venue display name.
    pub venue_name: String,
    /// Performance date (ISO 8601).
    pub date: String,
    /// The performance status.
    pub status: String,
    /// The reason recorded with the last status change, if any.
    pub status_reason: Option<String>,
}

impl From<&Performance> for TimelineEntry {
    fn from(performance: &Performance) -> Self {
        Self {
            performance_id: performance.performance_id.unwrap_or_default(),
            event_id: performance.event_id,
            venue_name: performance.venue_name.clone(),
            date: performance.date.clone(),
            status: performance.status.to_string(),
            status_reason: performance.status_reason.clone(),
        }
    }
}

/// API request to create a personal performance entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePersonalEntryRequest {
    /// Venue display name.
    pub venue_name: String,
    /// Performance date (ISO 8601).
    pub date: String,
}

/// API response for a successful personal entry operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersonalEntryResponse {
    /// The performance's canonical identifier.
    pub performance_id: i64,
    /// A success message.
    pub message: String,
}
