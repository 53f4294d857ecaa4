// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use gigbook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};

use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// The stored columns of one audit row, in schema order minus the
/// actor_profile_id and created_at bookkeeping columns.
type AuditColumns = (
    Option<i64>,
    Option<i64>,
    String,
    String,
    String,
    String,
    String,
);

fn rebuild_event(columns: AuditColumns) -> Result<AuditEvent, PersistenceError> {
    let (event_id, act_id, actor_json, cause_json, action_json, before_json, after_json) = columns;

    let actor_data: ActorData = serde_json::from_str(&actor_json)?;
    let cause_data: CauseData = serde_json::from_str(&cause_json)?;
    let action_data: ActionData = serde_json::from_str(&action_json)?;
    let before_data: StateSnapshotData = serde_json::from_str(&before_json)?;
    let after_data: StateSnapshotData = serde_json::from_str(&after_json)?;

    Ok(AuditEvent::new(
        Actor::new(actor_data.profile_id, actor_data.actor_type),
        Cause::new(cause_data.id, cause_data.description),
        Action::new(action_data.name, action_data.details),
        StateSnapshot::new(before_data.data),
        StateSnapshot::new(after_data.data),
        event_id,
        act_id,
    ))
}

/// Retrieves an audit event by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `audit_event_id` - The audit row to retrieve
///
/// # Errors
///
/// Returns an error if the row is not found or cannot be deserialized.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    audit_event_id: i64,
) -> Result<AuditEvent, PersistenceError> {
    let result = audit_events::table
        .select((
            audit_events::event_id,
            audit_events::act_id,
            audit_events::actor_json,
            audit_events::cause_json,
            audit_events::action_json,
            audit_events::before_snapshot_json,
            audit_events::after_snapshot_json,
        ))
        .find(audit_event_id)
        .first::<AuditColumns>(conn);

    match result {
        Ok(columns) => rebuild_event(columns),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
            "Audit event {audit_event_id} does not exist"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves the ordered audit trail for one event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event scope
///
/// # Errors
///
/// Returns an error if rows cannot be retrieved or deserialized.
pub fn audit_timeline_for_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditColumns> = audit_events::table
        .select((
            audit_events::event_id,
            audit_events::act_id,
            audit_events::actor_json,
            audit_events::cause_json,
            audit_events::action_json,
            audit_events::before_snapshot_json,
            audit_events::after_snapshot_json,
        ))
        .filter(audit_events::event_id.eq(event_id))
        .order(audit_events::audit_event_id.asc())
        .load::<AuditColumns>(conn)?;

    rows.into_iter().map(rebuild_event).collect()
}
