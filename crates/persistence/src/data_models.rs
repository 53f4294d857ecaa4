// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and serializable payloads.
//!
//! Each booking table has a `Queryable` row struct plus a fallible
//! conversion into its domain type; failures mean the stored status or
//! type text no longer parses and surface as `ReconstructionError`.

use std::str::FromStr;

use diesel::prelude::*;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use gigbook_domain::{
    Act, ActType, Application, ApplicationStatus, Assignment, AssignmentStatus, Event, EventStatus,
    Performance, PerformanceStatus,
};

use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub profile_id: i64,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

/// One row of the `events` table.
#[derive(Debug, Clone, Queryable)]
pub struct EventRow {
    pub event_id: i64,
    pub organizer_profile_id: i64,
    pub venue_id: Option<i64>,
    pub venue_name: String,
    pub date: String,
    pub open_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_slots: Option<i32>,
    pub status: String,
    pub charge: Option<String>,
    pub conditions: Option<String>,
}

impl TryFrom<EventRow> for Event {
    type Error = PersistenceError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let max_slots: Option<u32> = match row.max_slots {
            Some(n) => Some(n.to_u32().ok_or_else(|| {
                PersistenceError::ReconstructionError(format!(
                    "max_slots out of range for event {}: {n}",
                    row.event_id
                ))
            })?),
            None => None,
        };
        Ok(Self {
            event_id: Some(row.event_id),
            organizer_profile_id: row.organizer_profile_id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            date: row.date,
            open_time: row.open_time,
            start_time: row.start_time,
            end_time: row.end_time,
            max_slots,
            status: EventStatus::from_str(&row.status)?,
            charge: row.charge,
            conditions: row.conditions,
        })
    }
}

/// One row of the `acts` table.
#[derive(Debug, Clone, Queryable)]
pub struct ActRow {
    pub act_id: i64,
    pub owner_profile_id: Option<i64>,
    pub name: String,
    pub act_type: String,
    pub is_guest: i32,
}

impl TryFrom<ActRow> for Act {
    type Error = PersistenceError;

    fn try_from(row: ActRow) -> Result<Self, Self::Error> {
        Ok(Self {
            act_id: Some(row.act_id),
            owner_profile_id: row.owner_profile_id,
            name: row.name,
            act_type: ActType::parse(&row.act_type)?,
            is_guest: row.is_guest != 0,
        })
    }
}

/// One row of the `assignments` table.
#[derive(Debug, Clone, Queryable)]
pub struct AssignmentRow {
    pub assignment_id: i64,
    pub event_id: i64,
    pub act_id: i64,
    pub status: String,
    pub sort_order: i32,
    pub created_at: String,
}

impl TryFrom<AssignmentRow> for Assignment {
    type Error = PersistenceError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            assignment_id: Some(row.assignment_id),
            event_id: row.event_id,
            act_id: row.act_id,
            status: AssignmentStatus::from_str(&row.status)?,
            sort_order: row.sort_order,
            created_at: row.created_at,
        })
    }
}

/// One row of the `applications` table.
#[derive(Debug, Clone, Queryable)]
pub struct ApplicationRow {
    pub application_id: i64,
    pub event_id: i64,
    pub act_id: i64,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = PersistenceError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            application_id: Some(row.application_id),
            event_id: row.event_id,
            act_id: row.act_id,
            message: row.message,
            status: ApplicationStatus::from_str(&row.status)?,
            created_at: row.created_at,
        })
    }
}

/// One row of the `performances` table.
#[derive(Debug, Clone, Queryable)]
pub struct PerformanceRow {
    pub performance_id: i64,
    pub profile_id: i64,
    pub act_id: Option<i64>,
    pub event_id: Option<i64>,
    pub venue_name: String,
    pub date: String,
    pub status: String,
    pub status_reason: Option<String>,
    pub status_changed_at: Option<String>,
}

impl TryFrom<PerformanceRow> for Performance {
    type Error = PersistenceError;

    fn try_from(row: PerformanceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            performance_id: Some(row.performance_id),
            profile_id: row.profile_id,
            act_id: row.act_id,
            event_id: row.event_id,
            venue_name: row.venue_name,
            date: row.date,
            status: PerformanceStatus::from_str(&row.status)?,
            status_reason: row.status_reason,
            status_changed_at: row.status_changed_at,
        })
    }
}

/// The outbox columns read back from the `notifications` table.
#[derive(Debug, Clone, Queryable)]
pub struct NotificationRow {
    pub kind: String,
    pub event_id: Option<i64>,
    pub payload_json: String,
}
