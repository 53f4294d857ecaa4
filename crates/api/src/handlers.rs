// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every state-changing handler follows the same shape: resolve the event
//! scope, then run one transactional transition that loads the booking
//! state, applies the command through the coordinator, and commits the
//! resulting writes and audit event, then dispatch any scheduled
//! notification. Notifications are dispatched only after the commit
//! succeeds and their failure is logged, never propagated.

use gigbook::{BookingState, Command, NotificationRequest, TransitionResult, apply};
use gigbook_audit::{Actor, AuditEvent, Cause};
use gigbook_domain::{ActType, Performance, PerformanceStatus};
use gigbook_persistence::{Persistence, PersistenceError, TransitionError};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::AuthenticatedActor;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::notify::NotificationSink;
use crate::request_response::{
    CreatePersonalEntryRequest, PersonalEntryResponse, RosterEntry, TimelineEntry,
    TransitionResponse,
};

/// The current UTC time as an RFC 3339 string.
fn current_timestamp() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Maps a persistence lookup failure to a not-found error for the named
/// resource, leaving other failures as internal errors.
fn not_found_as(resource_type: &str) -> impl Fn(PersistenceError) -> ApiError + '_ {
    move |err: PersistenceError| match err {
        PersistenceError::NotFound(_) | PersistenceError::EventNotFound(_) => {
            ApiError::ResourceNotFound {
                resource_type: resource_type.to_string(),
            }
        }
        other => other.into(),
    }
}

fn validate_venue_name(venue_name: &str) -> Result<(), ApiError> {
    if venue_name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("venue_name"),
            message: String::from("venue name must not be empty"),
        });
    }
    Ok(())
}

fn validate_date(date: &str) -> Result<(), ApiError> {
    time::Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map(|_| ())
        .map_err(|e| {
            translate_domain_error(gigbook_domain::DomainError::DateParseError {
                date_string: date.to_string(),
                error: e.to_string(),
            })
        })
}

/// Records the notification in the outbox and hands it to the sink.
///
/// Both steps run after the transaction has committed; a failure in
/// either is logged with the operation context and swallowed.
fn dispatch_notification(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    operation: &str,
    event_id: i64,
    request: &NotificationRequest,
) {
    if let Err(e) = persistence.record_notification(request) {
        tracing::warn!(
            operation,
            event_id,
            kind = %request.kind,
            step = "record_outbox",
            "Failed to record notification: {e}"
        );
    }
    if let Err(e) = sink.deliver(request) {
        tracing::warn!(
            operation,
            event_id,
            kind = %request.kind,
            step = "deliver",
            "Failed to deliver notification: {e}"
        );
    }
}

/// The event an operation is scoped to, with an optional act outside the
/// event's own rows (the invite target) to load alongside it.
#[derive(Debug, Clone, Copy)]
struct EventScope {
    event_id: i64,
    extra_act_id: Option<i64>,
}

impl EventScope {
    const fn of(event_id: i64) -> Self {
        Self {
            event_id,
            extra_act_id: None,
        }
    }
}

/// Runs one coordinator command against an event. The load, the apply,
/// and the commit happen inside a single database transaction, then the
/// handler dispatches any scheduled notification and reports the
/// resulting event status and accepted count.
fn run_transition(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    scope: EventScope,
    command: Command,
    actor: &AuthenticatedActor,
    cause: Cause,
    message: String,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 = scope.event_id;
    let operation: &'static str = command.action_name();
    let now: String = current_timestamp()?;
    let audit_actor: Actor = actor.to_audit_actor();
    let (result, audit_event_id): (TransitionResult, i64) = persistence
        .execute_transition(event_id, scope.extra_act_id, |state| {
            apply(state, command, audit_actor, cause, &now)
        })
        .map_err(|err| match err {
            TransitionError::Rejected(core_err) => translate_core_error(core_err),
            TransitionError::Storage(storage_err) => storage_err.into(),
        })?;
    tracing::debug!(operation, event_id, audit_event_id, "Transition committed");

    if let Some(request) = result.notification {
        dispatch_notification(persistence, sink, operation, event_id, &request);
    }

    let after: BookingState = persistence.load_booking_state(event_id)?;
    Ok(TransitionResponse {
        event_id,
        audit_event_id,
        event_status: after.event.status.to_string(),
        accepted_count: after.accepted_count(),
        message,
    })
}

/// Approves a pending application on behalf of the event's organizer.
///
/// # Errors
///
/// Returns an error if the application does not exist, the actor is not
/// the organizer, the event is cancelled or full, or the application is
/// in a terminal state.
pub fn approve_application(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    application_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 = persistence
        .event_id_for_application(application_id)
        .map_err(not_found_as("Application"))?;
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::ApproveApplication { application_id },
        actor,
        cause,
        String::from("Application approved"),
    )
}

/// Rejects an application on behalf of the event's organizer, freeing the
/// slot it may have occupied.
///
/// # Errors
///
/// Returns an error if the application does not exist, the actor is not
/// the organizer, or the application was already rejected or cancelled.
pub fn reject_application(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    application_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 = persistence
        .event_id_for_application(application_id)
        .map_err(not_found_as("Application"))?;
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::RejectApplication { application_id },
        actor,
        cause,
        String::from("Application rejected"),
    )
}

/// Resolves the event an offer belongs to. Personal entries carry no
/// event and cannot move through booking operations.
fn event_scope_of(
    persistence: &mut Persistence,
    performance_id: i64,
    operation: &str,
) -> Result<i64, ApiError> {
    let performance: Performance = persistence
        .get_performance(performance_id)
        .map_err(not_found_as("Performance"))?;
    performance.event_id.ok_or_else(|| ApiError::InvalidState {
        entity: String::from("performance"),
        current: String::from("personal"),
        operation: operation.to_string(),
    })
}

/// Accepts an offered slot on behalf of the performance's owner.
///
/// # Errors
///
/// Returns an error if the performance does not exist or is personal, the
/// actor does not own it, the offer is not acceptable, or the event is
/// cancelled or full.
pub fn accept_offer(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    performance_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 = event_scope_of(persistence, performance_id, "accept this offer")?;
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::AcceptOffer { performance_id },
        actor,
        cause,
        String::from("Offer accepted"),
    )
}

/// Withdraws the performance's owner from a booked event. The ledger row
/// stays accepted until the organizer explicitly releases or rejects it.
///
/// # Errors
///
/// Returns an error if the performance does not exist or is personal, the
/// actor does not own it, or it was already canceled.
pub fn withdraw_from_event(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    performance_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 =
        event_scope_of(persistence, performance_id, "withdraw from this event")?;
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::Withdraw { performance_id },
        actor,
        cause,
        String::from("Withdrawn from the event"),
    )
}

/// Releases a slot stuck awaiting reconfirmation, recording the
/// organizer's reason.
///
/// # Errors
///
/// Returns an error if the performance does not exist or is personal, the
/// actor is not the organizer, the reason is empty, or the performance is
/// not awaiting reconfirmation.
pub fn release_slot(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    performance_id: i64,
    reason: String,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let event_id: i64 = event_scope_of(persistence, performance_id, "release this slot")?;
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::ReleaseSlot {
            performance_id,
            reason,
        },
        actor,
        cause,
        String::from("Slot released"),
    )
}

/// Seats a guest act directly into an event on behalf of the organizer.
///
/// # Errors
///
/// Returns an error if the actor is not the organizer, the act name or
/// type is invalid, or the event is cancelled or full.
pub fn add_guest_and_accept(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    event_id: i64,
    act_name: String,
    act_type: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    let act_type: ActType = ActType::parse(act_type).map_err(translate_domain_error)?;
    let message: String = format!("Seated guest act '{}'", act_name.trim());
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::AddGuestAndAccept { act_name, act_type },
        actor,
        cause,
        message,
    )
}

/// Invites an existing act to an event on behalf of the organizer.
///
/// # Errors
///
/// Returns an error if the actor is not the organizer, the act does not
/// exist or has no owning profile, or an application already links the
/// act to the event.
pub fn invite(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    event_id: i64,
    act_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    run_transition(
        persistence,
        sink,
        EventScope {
            event_id,
            extra_act_id: Some(act_id),
        },
        Command::Invite { act_id },
        actor,
        cause,
        String::from("Invitation sent"),
    )
}

/// Re-derives the accepted count for an event and closes it if full.
///
/// # Errors
///
/// Returns an error if the event does not exist or the actor is neither
/// the organizer nor the system.
pub fn recompute_capacity(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    event_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::RecomputeCapacity,
        actor,
        cause,
        String::from("Capacity recomputed"),
    )
}

/// Cancels an event on behalf of its organizer. Terminal.
///
/// # Errors
///
/// Returns an error if the event does not exist or the actor is not the
/// organizer.
pub fn cancel_event(
    persistence: &mut Persistence,
    sink: &mut dyn NotificationSink,
    event_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionResponse, ApiError> {
    run_transition(
        persistence,
        sink,
        EventScope::of(event_id),
        Command::CancelEvent,
        actor,
        cause,
        String::from("Event cancelled"),
    )
}

/// Creates a personal performance entry owned by the calling profile.
///
/// # Errors
///
/// Returns an error if the venue name is empty, the date does not parse,
/// or the row cannot be stored.
pub fn create_personal_entry(
    persistence: &mut Persistence,
    request: CreatePersonalEntryRequest,
    actor: &AuthenticatedActor,
) -> Result<PersonalEntryResponse, ApiError> {
    validate_venue_name(&request.venue_name)?;
    validate_date(&request.date)?;
    let now: String = current_timestamp()?;

    let performance: Performance = Performance {
        performance_id: None,
        profile_id: actor.profile_id,
        act_id: None,
        event_id: None,
        venue_name: request.venue_name.trim().to_string(),
        date: request.date,
        status: PerformanceStatus::Confirmed,
        status_reason: None,
        status_changed_at: Some(now),
    };
    let performance_id: i64 = persistence.create_performance(&performance)?;
    tracing::debug!(performance_id, profile_id = actor.profile_id, "Personal entry created");

    Ok(PersonalEntryResponse {
        performance_id,
        message: String::from("Personal entry created"),
    })
}

/// Checks that a performance is a personal entry owned by the actor.
fn require_personal_owner(
    performance: &Performance,
    actor: &AuthenticatedActor,
    operation: &str,
) -> Result<(), ApiError> {
    if performance.event_id.is_some() {
        return Err(ApiError::InvalidState {
            entity: String::from("performance"),
            current: String::from("event-linked"),
            operation: operation.to_string(),
        });
    }
    if performance.profile_id != actor.profile_id {
        return Err(ApiError::Unauthorized {
            action: operation.to_string(),
        });
    }
    Ok(())
}

/// Rewrites the venue and date of a personal entry. Owner only;
/// event-linked rows are immutable through this surface.
///
/// # Errors
///
/// Returns an error if the entry does not exist, is event-linked, is not
/// owned by the actor, or the new values are invalid.
pub fn update_personal_entry(
    persistence: &mut Persistence,
    performance_id: i64,
    venue_name: &str,
    date: &str,
    actor: &AuthenticatedActor,
) -> Result<PersonalEntryResponse, ApiError> {
    let performance: Performance = persistence
        .get_performance(performance_id)
        .map_err(not_found_as("Performance"))?;
    require_personal_owner(&performance, actor, "edit this entry")?;
    validate_venue_name(venue_name)?;
    validate_date(date)?;

    persistence.update_personal_performance(performance_id, venue_name.trim(), date)?;
    Ok(PersonalEntryResponse {
        performance_id,
        message: String::from("Personal entry updated"),
    })
}

/// Hard-deletes a personal entry. Owner only; event-linked rows cannot be
/// deleted, only canceled through the booking operations.
///
/// # Errors
///
/// Returns an error if the entry does not exist, is event-linked, or is
/// not owned by the actor.
pub fn delete_personal_entry(
    persistence: &mut Persistence,
    performance_id: i64,
    actor: &AuthenticatedActor,
) -> Result<PersonalEntryResponse, ApiError> {
    let performance: Performance = persistence
        .get_performance(performance_id)
        .map_err(not_found_as("Performance"))?;
    require_personal_owner(&performance, actor, "delete this entry")?;

    persistence.delete_personal_performance(performance_id)?;
    Ok(PersonalEntryResponse {
        performance_id,
        message: String::from("Personal entry deleted"),
    })
}

/// The organizer's roster view: every application for the event joined
/// with its act.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn event_roster(
    persistence: &mut Persistence,
    event_id: i64,
) -> Result<Vec<RosterEntry>, ApiError> {
    let rows: Vec<(gigbook_domain::Application, gigbook_domain::Act)> =
        persistence.event_roster(event_id)?;
    Ok(rows
        .iter()
        .map(|(application, act)| RosterEntry::from_pair(application, act))
        .collect())
}

/// A musician's timeline: every performance owned by the profile, both
/// event-linked and personal, ordered by date.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn musician_timeline(
    persistence: &mut Persistence,
    profile_id: i64,
) -> Result<Vec<TimelineEntry>, ApiError> {
    let rows: Vec<Performance> = persistence.performances_for_profile(profile_id)?;
    Ok(rows.iter().map(TimelineEntry::from).collect())
}

/// The audit trail of an event, oldest first.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn audit_timeline(
    persistence: &mut Persistence,
    event_id: i64,
) -> Result<Vec<AuditEvent>, ApiError> {
    Ok(persistence.audit_timeline_for_event(event_id)?)
}
