// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Direct row operations outside the transition coordinator.
//!
//! Profile, act, event, application, and performance creation (the row
//! setup the coordinator's preconditions read), personal performance
//! entries, and the notification outbox.

use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;

use gigbook::NotificationRequest;
use gigbook_domain::{ActType, Application, Event, Performance};

use crate::diesel_schema::{acts, applications, events, notifications, performances, profiles};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Creates a profile row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_profile(
    conn: &mut SqliteConnection,
    display_name: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(profiles::table)
        .values((
            profiles::display_name.eq(display_name),
            profiles::created_at.eq(created_at),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates an owned (non-guest) act.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_act(
    conn: &mut SqliteConnection,
    owner_profile_id: i64,
    name: &str,
    act_type: ActType,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(acts::table)
        .values((
            acts::owner_profile_id.eq(Some(owner_profile_id)),
            acts::name.eq(name),
            acts::act_type.eq(act_type.as_str()),
            acts::is_guest.eq(0),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates an event row. The `event_id` field of the argument is
/// ignored; the database assigns the id.
///
/// # Errors
///
/// Returns an error if a field is out of range or the insert fails.
pub fn create_event(conn: &mut SqliteConnection, event: &Event) -> Result<i64, PersistenceError> {
    let max_slots: Option<i32> = match event.max_slots {
        Some(n) => Some(n.to_i32().ok_or_else(|| {
            PersistenceError::Other(format!("max_slots out of range: {n}"))
        })?),
        None => None,
    };

    diesel::insert_into(events::table)
        .values((
            events::organizer_profile_id.eq(event.organizer_profile_id),
            events::venue_id.eq(event.venue_id),
            events::venue_name.eq(event.venue_name.as_str()),
            events::date.eq(event.date.as_str()),
            events::open_time.eq(event.open_time.as_deref()),
            events::start_time.eq(event.start_time.as_deref()),
            events::end_time.eq(event.end_time.as_deref()),
            events::max_slots.eq(max_slots),
            events::status.eq(event.status.as_str()),
            events::charge.eq(event.charge.as_deref()),
            events::conditions.eq(event.conditions.as_deref()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates an application row. The `application_id` field of the
/// argument is ignored; the database assigns the id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_application(
    conn: &mut SqliteConnection,
    application: &Application,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(applications::table)
        .values((
            applications::event_id.eq(application.event_id),
            applications::act_id.eq(application.act_id),
            applications::message.eq(application.message.as_deref()),
            applications::status.eq(application.status.as_str()),
            applications::created_at.eq(application.created_at.as_str()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates a performance row (event-linked or personal). The
/// `performance_id` field of the argument is ignored.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_performance(
    conn: &mut SqliteConnection,
    performance: &Performance,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(performances::table)
        .values((
            performances::profile_id.eq(performance.profile_id),
            performances::act_id.eq(performance.act_id),
            performances::event_id.eq(performance.event_id),
            performances::venue_name.eq(performance.venue_name.as_str()),
            performances::date.eq(performance.date.as_str()),
            performances::status.eq(performance.status.as_str()),
            performances::status_reason.eq(performance.status_reason.as_deref()),
            performances::status_changed_at.eq(performance.status_changed_at.as_deref()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Updates the mutable fields of a personal performance entry.
///
/// Ownership and the personal (non-event-linked) check belong to the
/// caller; this mutation only touches the named row.
///
/// # Errors
///
/// Returns `NotFound` if the row does not exist.
pub fn update_personal_performance(
    conn: &mut SqliteConnection,
    performance_id: i64,
    venue_name: &str,
    date: &str,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::update(performances::table.find(performance_id))
        .set((
            performances::venue_name.eq(venue_name),
            performances::date.eq(date),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Performance {performance_id} does not exist"
        )));
    }
    Ok(())
}

/// Hard-deletes a personal performance entry.
///
/// Event-linked rows are never deleted through here; the caller enforces
/// the personal check before calling.
///
/// # Errors
///
/// Returns `NotFound` if the row does not exist.
pub fn delete_personal_performance(
    conn: &mut SqliteConnection,
    performance_id: i64,
) -> Result<(), PersistenceError> {
    let affected: usize =
        diesel::delete(performances::table.find(performance_id)).execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Performance {performance_id} does not exist"
        )));
    }
    Ok(())
}

/// Records a scheduled notification in the outbox.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn record_notification(
    conn: &mut SqliteConnection,
    request: &NotificationRequest,
) -> Result<i64, PersistenceError> {
    let payload_json: String = serde_json::to_string(&request.payload)?;

    diesel::insert_into(notifications::table)
        .values((
            notifications::kind.eq(request.kind.as_str()),
            notifications::event_id.eq(request.event_id),
            notifications::payload_json.eq(payload_json),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}
