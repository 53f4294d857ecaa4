// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking state and projection queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use gigbook::{BookingState, NotificationRequest};
use gigbook_domain::{Act, Application, Assignment, AssignmentStatus, Event, Performance};

use crate::data_models::{
    ActRow, ApplicationRow, AssignmentRow, EventRow, NotificationRow, PerformanceRow,
};
use crate::diesel_schema::{acts, applications, assignments, events, notifications, performances};
use crate::error::PersistenceError;

/// Loads the full booking state for one event.
///
/// Assignments come back in display order, applications oldest first
/// (the coordinator's "latest application" scan depends on this), and
/// every act referenced by any of the three record sets is included.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event to load
///
/// # Errors
///
/// Returns `EventNotFound` if the event does not exist, or a
/// reconstruction error if a stored status no longer parses.
pub fn load_booking_state(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<BookingState, PersistenceError> {
    load_booking_state_with_act(conn, event_id, None)
}

/// Loads the booking state for one event, additionally including a
/// specific act (the invite target, which may have no rows yet).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event to load
/// * `extra_act_id` - An act to include regardless of existing rows
///
/// # Errors
///
/// Returns `EventNotFound` if the event does not exist, or a
/// reconstruction error if a stored status no longer parses.
pub fn load_booking_state_with_act(
    conn: &mut SqliteConnection,
    event_id: i64,
    extra_act_id: Option<i64>,
) -> Result<BookingState, PersistenceError> {
    let event_row: EventRow = match events::table.find(event_id).first::<EventRow>(conn) {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::EventNotFound(event_id));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };
    let event: Event = Event::try_from(event_row)?;

    let assignment_rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::event_id.eq(event_id))
        .order(assignments::sort_order.asc())
        .load::<AssignmentRow>(conn)?;
    let assignments: Vec<Assignment> = assignment_rows
        .into_iter()
        .map(Assignment::try_from)
        .collect::<Result<_, _>>()?;

    let application_rows: Vec<ApplicationRow> = applications::table
        .filter(applications::event_id.eq(event_id))
        .order(applications::application_id.asc())
        .load::<ApplicationRow>(conn)?;
    let applications: Vec<Application> = application_rows
        .into_iter()
        .map(Application::try_from)
        .collect::<Result<_, _>>()?;

    let performance_rows: Vec<PerformanceRow> = performances::table
        .filter(performances::event_id.eq(event_id))
        .order(performances::performance_id.asc())
        .load::<PerformanceRow>(conn)?;
    let performances: Vec<Performance> = performance_rows
        .into_iter()
        .map(Performance::try_from)
        .collect::<Result<_, _>>()?;

    let mut act_ids: Vec<i64> = Vec::new();
    for id in assignments
        .iter()
        .map(|a| a.act_id)
        .chain(applications.iter().map(|a| a.act_id))
        .chain(performances.iter().filter_map(|p| p.act_id))
        .chain(extra_act_id)
    {
        if !act_ids.contains(&id) {
            act_ids.push(id);
        }
    }
    let act_rows: Vec<ActRow> = acts::table
        .filter(acts::act_id.eq_any(&act_ids))
        .load::<ActRow>(conn)?;
    let acts: Vec<Act> = act_rows
        .into_iter()
        .map(Act::try_from)
        .collect::<Result<_, _>>()?;

    Ok(BookingState {
        event,
        assignments,
        applications,
        performances,
        acts,
    })
}

/// Resolves the event an application belongs to.
///
/// # Errors
///
/// Returns `NotFound` if the application does not exist.
pub fn event_id_for_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<i64, PersistenceError> {
    let result = applications::table
        .select(applications::event_id)
        .find(application_id)
        .first::<i64>(conn);

    match result {
        Ok(id) => Ok(id),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
            "Application {application_id} does not exist"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves one performance row by id.
///
/// # Errors
///
/// Returns `NotFound` if the performance does not exist.
pub fn get_performance(
    conn: &mut SqliteConnection,
    performance_id: i64,
) -> Result<Performance, PersistenceError> {
    let result = performances::table
        .find(performance_id)
        .first::<PerformanceRow>(conn);

    match result {
        Ok(row) => Performance::try_from(row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
            "Performance {performance_id} does not exist"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves one act by id.
///
/// # Errors
///
/// Returns `NotFound` if the act does not exist.
pub fn get_act(conn: &mut SqliteConnection, act_id: i64) -> Result<Act, PersistenceError> {
    let result = acts::table.find(act_id).first::<ActRow>(conn);

    match result {
        Ok(row) => Act::try_from(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::NotFound(format!("Act {act_id} does not exist")))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// The roster projection: every application for an event joined with
/// its act, in application order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// status no longer parses.
pub fn event_roster(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Vec<(Application, Act)>, PersistenceError> {
    let rows: Vec<(ApplicationRow, ActRow)> = applications::table
        .inner_join(acts::table)
        .filter(applications::event_id.eq(event_id))
        .order(applications::application_id.asc())
        .load::<(ApplicationRow, ActRow)>(conn)?;

    rows.into_iter()
        .map(|(application, act)| Ok((Application::try_from(application)?, Act::try_from(act)?)))
        .collect()
}

/// The musician timeline projection: all performances owned by a
/// profile, personal and event-linked alike, ordered by date.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// status no longer parses.
pub fn performances_for_profile(
    conn: &mut SqliteConnection,
    profile_id: i64,
) -> Result<Vec<Performance>, PersistenceError> {
    let rows: Vec<PerformanceRow> = performances::table
        .filter(performances::profile_id.eq(profile_id))
        .order((performances::date.asc(), performances::performance_id.asc()))
        .load::<PerformanceRow>(conn)?;

    rows.into_iter().map(Performance::try_from).collect()
}

/// Reads back the notification outbox, oldest first.
///
/// # Errors
///
/// Returns an error if rows cannot be retrieved or a payload no longer
/// parses as JSON.
pub fn list_notifications(
    conn: &mut SqliteConnection,
) -> Result<Vec<NotificationRequest>, PersistenceError> {
    let rows: Vec<NotificationRow> = notifications::table
        .order(notifications::notification_id.asc())
        .select((
            notifications::kind,
            notifications::event_id,
            notifications::payload_json,
        ))
        .load::<NotificationRow>(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(NotificationRequest {
                kind: row.kind,
                event_id: row.event_id,
                payload: serde_json::from_str(&row.payload_json)?,
            })
        })
        .collect()
}

/// Derives the accepted count for an event from the ledger.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn accepted_count(conn: &mut SqliteConnection, event_id: i64) -> Result<u32, PersistenceError> {
    let count: i64 = assignments::table
        .filter(assignments::event_id.eq(event_id))
        .filter(assignments::status.eq(AssignmentStatus::Accepted.as_str()))
        .count()
        .get_result(conn)?;

    u32::try_from(count).map_err(|_| {
        PersistenceError::ReconstructionError(format!(
            "accepted count out of range for event {event_id}: {count}"
        ))
    })
}
