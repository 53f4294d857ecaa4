// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity write execution.
//!
//! The transition coordinator decides writes; this module executes them
//! in order against the database. Callers wrap `execute_writes` and the
//! audit insert in a single transaction so a transition lands fully or
//! not at all.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use gigbook::EntityWrite;
use gigbook_domain::{Act, Application, ApplicationStatus, AssignmentStatus, Performance};

use crate::diesel_schema::{acts, applications, assignments, events, performances};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Executes all writes of one transition, in order.
///
/// # Arguments
///
/// * `conn` - The database connection (inside an open transaction)
/// * `event_id` - The event scope of the transition
/// * `writes` - The writes the coordinator produced
///
/// # Errors
///
/// Returns an error if any write fails; the caller's transaction then
/// rolls the earlier writes back.
pub fn execute_writes(
    conn: &mut SqliteConnection,
    event_id: i64,
    writes: &[EntityWrite],
) -> Result<(), PersistenceError> {
    for write in writes {
        apply_write(conn, event_id, write)?;
    }
    Ok(())
}

fn apply_write(
    conn: &mut SqliteConnection,
    scope_event_id: i64,
    write: &EntityWrite,
) -> Result<(), PersistenceError> {
    match write {
        EntityWrite::UpsertAssignment {
            event_id,
            act_id,
            status,
            sort_order,
            created_at,
        } => upsert_assignment(conn, *event_id, *act_id, *status, *sort_order, created_at),
        EntityWrite::DeleteAssignment { event_id, act_id } => {
            diesel::delete(
                assignments::table
                    .filter(assignments::event_id.eq(event_id))
                    .filter(assignments::act_id.eq(act_id)),
            )
            .execute(conn)?;
            Ok(())
        }
        EntityWrite::InsertApplication(application) => {
            insert_application(conn, application)?;
            Ok(())
        }
        EntityWrite::UpdateApplicationStatus {
            application_id,
            status,
        } => {
            diesel::update(applications::table.find(application_id))
                .set(applications::status.eq(status.as_str()))
                .execute(conn)?;
            Ok(())
        }
        EntityWrite::InsertPerformance(performance) => {
            insert_performance(conn, performance)?;
            Ok(())
        }
        EntityWrite::UpdatePerformanceStatus {
            performance_id,
            status,
            reason,
            changed_at,
        } => {
            diesel::update(performances::table.find(performance_id))
                .set((
                    performances::status.eq(status.as_str()),
                    performances::status_reason.eq(reason.as_deref()),
                    performances::status_changed_at.eq(Some(changed_at.as_str())),
                ))
                .execute(conn)?;
            Ok(())
        }
        EntityWrite::UpdateEventStatus {
            event_id,
            expected,
            to,
        } => {
            // Conditional on the row still holding the expected status;
            // zero affected rows means the event already transitioned.
            let affected: usize = diesel::update(
                events::table
                    .find(event_id)
                    .filter(events::status.eq(expected.as_str())),
            )
            .set(events::status.eq(to.as_str()))
            .execute(conn)?;
            if affected == 0 {
                debug!(event_id, expected = expected.as_str(), "Event status already moved");
            }
            Ok(())
        }
        EntityWrite::InsertGuestEntry {
            act,
            sort_order,
            message,
            created_at,
        } => insert_guest_entry(conn, scope_event_id, act, *sort_order, message, created_at),
    }
}

fn upsert_assignment(
    conn: &mut SqliteConnection,
    event_id: i64,
    act_id: i64,
    status: AssignmentStatus,
    sort_order: i32,
    created_at: &str,
) -> Result<(), PersistenceError> {
    let existing: Option<i64> = assignments::table
        .select(assignments::assignment_id)
        .filter(assignments::event_id.eq(event_id))
        .filter(assignments::act_id.eq(act_id))
        .first::<i64>(conn)
        .optional()?;

    match existing {
        Some(assignment_id) => {
            diesel::update(assignments::table.find(assignment_id))
                .set((
                    assignments::status.eq(status.as_str()),
                    assignments::sort_order.eq(sort_order),
                ))
                .execute(conn)?;
        }
        None => {
            diesel::insert_into(assignments::table)
                .values((
                    assignments::event_id.eq(event_id),
                    assignments::act_id.eq(act_id),
                    assignments::status.eq(status.as_str()),
                    assignments::sort_order.eq(sort_order),
                    assignments::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
    }
    Ok(())
}

fn insert_application(
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

fn insert_performance(
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

/// Seats a guest act: the unclaimed act row, then an accepted ledger row
/// and a pre-accepted application for the freshly assigned act id.
fn insert_guest_entry(
    conn: &mut SqliteConnection,
    event_id: i64,
    act: &Act,
    sort_order: i32,
    message: &str,
    created_at: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(acts::table)
        .values((
            acts::owner_profile_id.eq(act.owner_profile_id),
            acts::name.eq(act.name.as_str()),
            acts::act_type.eq(act.act_type.as_str()),
            acts::is_guest.eq(i32::from(act.is_guest)),
        ))
        .execute(conn)?;
    let act_id: i64 = get_last_insert_rowid(conn)?;

    diesel::insert_into(assignments::table)
        .values((
            assignments::event_id.eq(event_id),
            assignments::act_id.eq(act_id),
            assignments::status.eq(AssignmentStatus::Accepted.as_str()),
            assignments::sort_order.eq(sort_order),
            assignments::created_at.eq(created_at),
        ))
        .execute(conn)?;

    diesel::insert_into(applications::table)
        .values((
            applications::event_id.eq(event_id),
            applications::act_id.eq(act_id),
            applications::message.eq(Some(message)),
            applications::status.eq(ApplicationStatus::Accepted.as_str()),
            applications::created_at.eq(created_at),
        ))
        .execute(conn)?;

    debug!(event_id, act_id, "Seated guest act");
    Ok(())
}
