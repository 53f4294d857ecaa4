// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transition coordinator.
//!
//! One actor action in, one set of entity writes out. Every operation that
//! previously duplicated this logic at its call site (approval list,
//! organizer detail page, musician accept/withdraw, guest-add) goes through
//! `apply`, so the four denormalized records cannot drift apart.

use crate::command::Command;
use crate::error::CoreError;
use crate::notify::NotificationRequest;
use crate::state::{BookingState, TransitionResult};
use crate::write::EntityWrite;
use gigbook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use gigbook_domain::{
    Act, Application, ApplicationStatus, AssignmentStatus, EventStatus, Performance,
    PerformanceStatus, evaluate_capacity, status_reason, validate_act_name,
    validate_release_reason,
};

/// Status reason recorded when a canceled performance is re-offered.
const REOFFERED_BY_ORGANIZER: &str = "REOFFERED_BY_ORGANIZER";

/// Status reason recorded when a rejection cancels the linked performance.
const REJECTED_BY_ORGANIZER: &str = "REJECTED_BY_ORGANIZER";

/// Applies a command to the booking state of one event, producing the
/// entity writes, audit event, and optional notification for the
/// transition.
///
/// `apply` is pure: it never touches storage. The persistence layer loads
/// the state, calls `apply`, and executes the returned writes inside one
/// transaction, so preconditions hold at the moment of the writes.
///
/// # Arguments
///
/// * `state` - The event-scoped booking state (immutable)
/// * `command` - The command to apply
/// * `actor` - The acting profile, passed explicitly
/// * `cause` - The cause or reason for this action
/// * `now` - The current timestamp (RFC 3339)
///
/// # Errors
///
/// Returns an error if the actor is not permitted to perform the
/// operation, a referenced entity is missing, a status precondition fails,
/// or the event is full.
pub fn apply(
    state: &BookingState,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ApproveApplication { application_id } => {
            approve_application(state, application_id, actor, cause)
                .map(|r| with_performance_ensured(state, r, now))
        }
        Command::RejectApplication { application_id } => {
            reject_application(state, application_id, actor, cause, now)
        }
        Command::AcceptOffer { performance_id } => {
            accept_offer(state, performance_id, actor, cause, now)
        }
        Command::Withdraw { performance_id } => withdraw(state, performance_id, actor, cause, now),
        Command::ReleaseSlot {
            performance_id,
            reason,
        } => release_slot(state, performance_id, &reason, actor, cause, now),
        Command::AddGuestAndAccept { act_name, act_type } => {
            add_guest_and_accept(state, act_name, act_type, actor, cause, now)
        }
        Command::Invite { act_id } => invite(state, act_id, actor, cause, now),
        Command::RecomputeCapacity => recompute_capacity(state, actor, cause),
        Command::CancelEvent => cancel_event(state, actor, cause),
    }
}

/// Verifies the actor is this event's organizer.
fn require_organizer(
    state: &BookingState,
    actor: &Actor,
    operation: &'static str,
) -> Result<(), CoreError> {
    if actor.profile_id == state.event.organizer_profile_id {
        Ok(())
    } else {
        Err(CoreError::Unauthorized { operation })
    }
}

/// Verifies the actor owns the performance row.
fn require_performance_owner(
    performance: &Performance,
    actor: &Actor,
    operation: &'static str,
) -> Result<(), CoreError> {
    if actor.profile_id == performance.profile_id {
        Ok(())
    } else {
        Err(CoreError::Unauthorized { operation })
    }
}

/// Rejects any mutation against a cancelled event.
fn require_event_not_cancelled(
    state: &BookingState,
    operation: &'static str,
) -> Result<(), CoreError> {
    if state.event.status == EventStatus::Cancelled {
        return Err(CoreError::InvalidStateTransition {
            entity: "event",
            from: state.event.status.to_string(),
            operation,
        });
    }
    Ok(())
}

/// Builds the audit snapshot string for one side of a transition.
fn snapshot(event_status: EventStatus, accepted: u32, detail: &str) -> StateSnapshot {
    StateSnapshot::new(format!(
        "event={event_status},accepted_count={accepted},{detail}"
    ))
}

/// Emits the conditional close write if the event would be full at
/// `accepted_after` and is still open.
///
/// The close only ever moves open → matched. A later full→not-full change
/// never reopens the event; reopening requires an explicit organizer
/// action.
fn close_if_full(state: &BookingState, accepted_after: u32) -> Option<EntityWrite> {
    let would_be_full: bool =
        evaluate_capacity(state.event.max_slots, accepted_after).is_full();
    if would_be_full && state.event.status == EventStatus::Open {
        state.event.event_id.map(|event_id| EntityWrite::UpdateEventStatus {
            event_id,
            expected: EventStatus::Open,
            to: EventStatus::Matched,
        })
    } else {
        None
    }
}

/// The event status the conditional close (if any) will produce, for the
/// after-side audit snapshot.
fn status_after(state: &BookingState, writes: &[EntityWrite]) -> EventStatus {
    writes
        .iter()
        .find_map(|w| match w {
            EntityWrite::UpdateEventStatus { to, .. } => Some(*to),
            _ => None,
        })
        .unwrap_or(state.event.status)
}

/// Ensures an offered performance row exists for the approved act's owner:
/// creates one if absent, resurrects the same row if it was canceled, and
/// leaves it alone otherwise. Guest acts have no owning profile and get no
/// timeline row.
fn ensure_offered_performance(
    state: &BookingState,
    act: &Act,
    now: &str,
) -> Option<EntityWrite> {
    let owner_profile_id: i64 = act.owner_profile_id?;
    match state.find_performance_for_act(act.act_id?) {
        Some(performance) => {
            if performance.status == PerformanceStatus::Canceled {
                performance
                    .performance_id
                    .map(|performance_id| EntityWrite::UpdatePerformanceStatus {
                        performance_id,
                        status: PerformanceStatus::Offered,
                        reason: Some(String::from(REOFFERED_BY_ORGANIZER)),
                        changed_at: now.to_string(),
                    })
            } else {
                None
            }
        }
        None => Some(EntityWrite::InsertPerformance(Performance {
            performance_id: None,
            profile_id: owner_profile_id,
            act_id: act.act_id,
            event_id: state.event.event_id,
            venue_name: state.event.venue_name.clone(),
            date: state.event.date.clone(),
            status: PerformanceStatus::Offered,
            status_reason: None,
            status_changed_at: Some(now.to_string()),
        })),
    }
}

/// Appends the performance-ensuring write for an approved application.
///
/// Separated from the approval body so the approval result already carries
/// the act id in its audit event.
fn with_performance_ensured(
    state: &BookingState,
    mut result: TransitionResult,
    now: &str,
) -> TransitionResult {
    if let Some(act_id) = result.audit_event.act_id
        && let Some(act) = state.find_act(act_id)
        && let Some(write) = ensure_offered_performance(state, act, now)
    {
        result.writes.push(write);
    }
    result
}

fn approve_application(
    state: &BookingState,
    application_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "approve this application")?;
    let application: &Application = state
        .find_application(application_id)
        .ok_or(CoreError::NotFound {
            resource: "application",
        })?;
    require_event_not_cancelled(state, "approve this application")?;

    let already_accepted: bool = state
        .find_assignment(application.act_id)
        .is_some_and(|a| a.status == AssignmentStatus::Accepted);

    // Terminal applications cannot be re-approved; an already-accepted one
    // makes the whole operation an idempotent re-run.
    match application.status {
        ApplicationStatus::Pending | ApplicationStatus::Accepted => {}
        ApplicationStatus::Rejected | ApplicationStatus::Cancelled => {
            return Err(CoreError::InvalidStateTransition {
                entity: "application",
                from: application.status.to_string(),
                operation: "approve this application",
            });
        }
    }

    let report = state.capacity_report();
    if !already_accepted && report.is_full() {
        return Err(CoreError::CapacityExceeded {
            max_slots: report.max_slots.unwrap_or(0),
            accepted: report.accepted,
        });
    }

    let accepted_after: u32 = if already_accepted {
        report.accepted
    } else {
        report.accepted.saturating_add(1)
    };

    let mut writes: Vec<EntityWrite> = Vec::new();
    if application.status != ApplicationStatus::Accepted {
        writes.push(EntityWrite::UpdateApplicationStatus {
            application_id,
            status: ApplicationStatus::Accepted,
        });
    }
    if !already_accepted {
        writes.push(EntityWrite::UpsertAssignment {
            event_id: application.event_id,
            act_id: application.act_id,
            status: AssignmentStatus::Accepted,
            sort_order: state
                .find_assignment(application.act_id)
                .map_or_else(|| state.next_sort_order(), |a| a.sort_order),
            created_at: application.created_at.clone(),
        });
    }
    if let Some(close) = close_if_full(state, accepted_after) {
        writes.push(close);
    }

    let before: StateSnapshot = snapshot(
        state.event.status,
        report.accepted,
        &format!("application={}", application.status),
    );
    let after: StateSnapshot = snapshot(
        status_after(state, &writes),
        accepted_after,
        "application=accepted",
    );
    let action: Action = Action::new(
        String::from("ApproveApplication"),
        Some(format!("Approved application from '{}'", act_name(state, application.act_id))),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            Some(application.act_id),
        ),
        notification: None,
    })
}

fn reject_application(
    state: &BookingState,
    application_id: i64,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "reject this application")?;
    let application: &Application = state
        .find_application(application_id)
        .ok_or(CoreError::NotFound {
            resource: "application",
        })?;

    // Re-running a rejection is a no-op, not an error.
    let already_rejected: bool = application.status == ApplicationStatus::Rejected;
    if !already_rejected && !application.status.can_transition_to(ApplicationStatus::Rejected) {
        return Err(CoreError::InvalidStateTransition {
            entity: "application",
            from: application.status.to_string(),
            operation: "reject this application",
        });
    }

    let report = state.capacity_report();
    let had_accepted_slot: bool = state
        .find_assignment(application.act_id)
        .is_some_and(|a| a.status == AssignmentStatus::Accepted);

    let mut writes: Vec<EntityWrite> = Vec::new();
    if !already_rejected {
        writes.push(EntityWrite::UpdateApplicationStatus {
            application_id,
            status: ApplicationStatus::Rejected,
        });
    }
    // The ledger row is deleted, not flipped to declined, so the act can
    // apply again later. No reopen: a matched event stays matched.
    if state.find_assignment(application.act_id).is_some() {
        writes.push(EntityWrite::DeleteAssignment {
            event_id: application.event_id,
            act_id: application.act_id,
        });
    }
    // A removed ledger row implies a canceled performance.
    if let Some(performance) = state.find_performance_for_act(application.act_id)
        && performance.status != PerformanceStatus::Canceled
        && let Some(performance_id) = performance.performance_id
    {
        writes.push(EntityWrite::UpdatePerformanceStatus {
            performance_id,
            status: gigbook_domain::performance_status_on_ledger_removal(),
            reason: Some(String::from(REJECTED_BY_ORGANIZER)),
            changed_at: now.to_string(),
        });
    }

    let accepted_after: u32 = if had_accepted_slot {
        report.accepted.saturating_sub(1)
    } else {
        report.accepted
    };
    let before: StateSnapshot = snapshot(
        state.event.status,
        report.accepted,
        &format!("application={}", application.status),
    );
    let after: StateSnapshot = snapshot(state.event.status, accepted_after, "application=rejected");
    let action: Action = Action::new(
        String::from("RejectApplication"),
        Some(format!("Rejected application from '{}'", act_name(state, application.act_id))),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            Some(application.act_id),
        ),
        notification: None,
    })
}

fn accept_offer(
    state: &BookingState,
    performance_id: i64,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    let performance: &Performance =
        state
            .find_performance(performance_id)
            .ok_or(CoreError::NotFound {
                resource: "performance",
            })?;
    require_performance_owner(performance, &actor, "accept this offer")?;
    require_event_not_cancelled(state, "accept this offer")?;

    if !performance.status.is_acceptable() {
        return Err(CoreError::InvalidStateTransition {
            entity: "performance",
            from: performance.status.to_string(),
            operation: "accept this offer",
        });
    }
    // An offer without a named act cannot be accepted.
    let act_id: i64 = performance.act_id.ok_or(CoreError::InvalidStateTransition {
        entity: "performance",
        from: String::from("ungrouped"),
        operation: "accept this offer",
    })?;

    // An offer with no underlying application row is a data-integrity
    // error, surfaced distinctly from user errors.
    let application: &Application = state
        .latest_application_for_act(act_id)
        .ok_or(CoreError::BookingNotFound)?;
    let application_row_id: i64 = application.application_id.ok_or(CoreError::BookingNotFound)?;

    let already_accepted: bool = state
        .find_assignment(act_id)
        .is_some_and(|a| a.status == AssignmentStatus::Accepted);
    let report = state.capacity_report();
    if !already_accepted && report.is_full() {
        return Err(CoreError::CapacityExceeded {
            max_slots: report.max_slots.unwrap_or(0),
            accepted: report.accepted,
        });
    }
    let accepted_after: u32 = if already_accepted {
        report.accepted
    } else {
        report.accepted.saturating_add(1)
    };

    let mut writes: Vec<EntityWrite> = Vec::new();
    if application.status != ApplicationStatus::Accepted {
        writes.push(EntityWrite::UpdateApplicationStatus {
            application_id: application_row_id,
            status: ApplicationStatus::Accepted,
        });
    }
    if !already_accepted {
        writes.push(EntityWrite::UpsertAssignment {
            event_id: application.event_id,
            act_id,
            status: AssignmentStatus::Accepted,
            sort_order: state
                .find_assignment(act_id)
                .map_or_else(|| state.next_sort_order(), |a| a.sort_order),
            created_at: application.created_at.clone(),
        });
    }
    writes.push(EntityWrite::UpdatePerformanceStatus {
        performance_id,
        status: PerformanceStatus::Confirmed,
        reason: Some(String::from(status_reason::ACCEPTED_BY_MUSICIAN)),
        changed_at: now.to_string(),
    });
    if let Some(close) = close_if_full(state, accepted_after) {
        writes.push(close);
    }

    let before: StateSnapshot = snapshot(
        state.event.status,
        report.accepted,
        &format!("performance={}", performance.status),
    );
    let after: StateSnapshot = snapshot(
        status_after(state, &writes),
        accepted_after,
        "performance=confirmed",
    );
    let action: Action = Action::new(
        String::from("AcceptOffer"),
        Some(format!("'{}' accepted the offer", act_name(state, act_id))),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            Some(act_id),
        ),
        notification: None,
    })
}

fn withdraw(
    state: &BookingState,
    performance_id: i64,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    let performance: &Performance =
        state
            .find_performance(performance_id)
            .ok_or(CoreError::NotFound {
                resource: "performance",
            })?;
    require_performance_owner(performance, &actor, "withdraw from this event")?;

    if performance.status == PerformanceStatus::Canceled {
        return Err(CoreError::InvalidStateTransition {
            entity: "performance",
            from: performance.status.to_string(),
            operation: "withdraw from this event",
        });
    }

    // Withdraw touches the performance only. The ledger row and the
    // application stay as they are, full event or not; releasing the slot
    // is a deliberate separate organizer action so the replacement can be
    // curated.
    let writes: Vec<EntityWrite> = vec![EntityWrite::UpdatePerformanceStatus {
        performance_id,
        status: PerformanceStatus::Canceled,
        reason: Some(String::from(status_reason::WITHDRAWN_BY_MUSICIAN)),
        changed_at: now.to_string(),
    }];

    let accepted: u32 = state.accepted_count();
    let before: StateSnapshot = snapshot(
        state.event.status,
        accepted,
        &format!("performance={}", performance.status),
    );
    let after: StateSnapshot = snapshot(state.event.status, accepted, "performance=canceled");
    let action: Action = Action::new(
        String::from("Withdraw"),
        Some(String::from("Musician withdrew from the event")),
    );

    let notification: Option<NotificationRequest> =
        state.event.event_id.map(|event_id| {
            NotificationRequest::withdrawal(
                event_id,
                performance_id,
                performance.profile_id,
                status_reason::WITHDRAWN_BY_MUSICIAN,
            )
        });

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            performance.act_id,
        ),
        notification,
    })
}

fn release_slot(
    state: &BookingState,
    performance_id: i64,
    reason: &str,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "release this slot")?;
    validate_release_reason(reason)?;
    let performance: &Performance =
        state
            .find_performance(performance_id)
            .ok_or(CoreError::NotFound {
                resource: "performance",
            })?;

    if performance.status != PerformanceStatus::PendingReconfirm {
        return Err(CoreError::InvalidStateTransition {
            entity: "performance",
            from: performance.status.to_string(),
            operation: "release this slot",
        });
    }

    // Like withdraw, release stops short of the ledger: both are "give the
    // slot back" operations, and ledger cleanup stays with the explicit
    // reject/remove flow.
    let writes: Vec<EntityWrite> = vec![EntityWrite::UpdatePerformanceStatus {
        performance_id,
        status: PerformanceStatus::Canceled,
        reason: Some(reason.to_string()),
        changed_at: now.to_string(),
    }];

    let accepted: u32 = state.accepted_count();
    let before: StateSnapshot = snapshot(
        state.event.status,
        accepted,
        "performance=pending_reconfirm",
    );
    let after: StateSnapshot = snapshot(state.event.status, accepted, "performance=canceled");
    let action: Action = Action::new(
        String::from("ReleaseSlot"),
        Some(format!("Released slot: {reason}")),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            performance.act_id,
        ),
        notification: None,
    })
}

fn add_guest_and_accept(
    state: &BookingState,
    act_name: String,
    act_type: gigbook_domain::ActType,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "add a guest act")?;
    require_event_not_cancelled(state, "add a guest act")?;
    validate_act_name(&act_name)?;

    let report = state.capacity_report();
    if report.is_full() {
        return Err(CoreError::CapacityExceeded {
            max_slots: report.max_slots.unwrap_or(0),
            accepted: report.accepted,
        });
    }
    let accepted_after: u32 = report.accepted.saturating_add(1);

    let mut writes: Vec<EntityWrite> = vec![EntityWrite::InsertGuestEntry {
        act: Act::new_guest(act_name.trim().to_string(), act_type),
        sort_order: state.next_sort_order(),
        message: String::from(Application::GUEST_SLOT_MESSAGE),
        created_at: now.to_string(),
    }];
    if let Some(close) = close_if_full(state, accepted_after) {
        writes.push(close);
    }

    let before: StateSnapshot = snapshot(state.event.status, report.accepted, "guest=absent");
    let after: StateSnapshot = snapshot(
        status_after(state, &writes),
        accepted_after,
        "guest=accepted",
    );
    let action: Action = Action::new(
        String::from("AddGuestAndAccept"),
        Some(format!("Seated guest act '{}'", act_name.trim())),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            None,
        ),
        notification: None,
    })
}

fn invite(
    state: &BookingState,
    act_id: i64,
    actor: Actor,
    cause: Cause,
    now: &str,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "invite this act")?;
    require_event_not_cancelled(state, "invite this act")?;

    // Any existing application row for the pair, terminal or not, blocks
    // a fresh invitation.
    if state.latest_application_for_act(act_id).is_some() {
        return Err(CoreError::AlreadyLinked {
            event_id: state.event.event_id.unwrap_or_default(),
            act_id,
        });
    }

    let act: &Act = state.find_act(act_id).ok_or(CoreError::NotFound {
        resource: "act",
    })?;
    // An unclaimed guest act has no musician who could accept the offer.
    if act.owner_profile_id.is_none() {
        return Err(CoreError::NotFound {
            resource: "act owner profile",
        });
    }

    let mut writes: Vec<EntityWrite> = vec![EntityWrite::InsertApplication(Application {
        application_id: None,
        event_id: state.event.event_id.unwrap_or_default(),
        act_id,
        message: None,
        status: ApplicationStatus::Pending,
        created_at: now.to_string(),
    })];
    if let Some(write) = ensure_offered_performance(state, act, now) {
        writes.push(write);
    }

    let accepted: u32 = state.accepted_count();
    let before: StateSnapshot = snapshot(state.event.status, accepted, "application=absent");
    let after: StateSnapshot = snapshot(state.event.status, accepted, "application=pending");
    let action: Action = Action::new(
        String::from("Invite"),
        Some(format!("Invited '{}'", act.name)),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            Some(act_id),
        ),
        notification: None,
    })
}

fn recompute_capacity(
    state: &BookingState,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    if actor.profile_id != state.event.organizer_profile_id && actor.actor_type != "system" {
        return Err(CoreError::Unauthorized {
            operation: "recompute capacity",
        });
    }

    let report = state.capacity_report();
    let writes: Vec<EntityWrite> = close_if_full(state, report.accepted).into_iter().collect();

    let before: StateSnapshot = snapshot(state.event.status, report.accepted, "recompute=start");
    let after: StateSnapshot = snapshot(
        status_after(state, &writes),
        report.accepted,
        "recompute=done",
    );
    let action: Action = Action::new(
        String::from("RecomputeCapacity"),
        Some(format!(
            "accepted={} max_slots={:?}",
            report.accepted, report.max_slots
        )),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            None,
        ),
        notification: None,
    })
}

fn cancel_event(
    state: &BookingState,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    require_organizer(state, &actor, "cancel this event")?;

    // Cancelling twice is a no-op.
    let writes: Vec<EntityWrite> = if state.event.status == EventStatus::Cancelled {
        Vec::new()
    } else if state.event.status.can_transition_to(EventStatus::Cancelled) {
        state
            .event
            .event_id
            .map(|event_id| EntityWrite::UpdateEventStatus {
                event_id,
                expected: state.event.status,
                to: EventStatus::Cancelled,
            })
            .into_iter()
            .collect()
    } else {
        return Err(CoreError::InvalidStateTransition {
            entity: "event",
            from: state.event.status.to_string(),
            operation: "cancel this event",
        });
    };

    let accepted: u32 = state.accepted_count();
    let before: StateSnapshot = snapshot(state.event.status, accepted, "cancel=start");
    let after: StateSnapshot = snapshot(EventStatus::Cancelled, accepted, "cancel=done");
    let action: Action = Action::new(
        String::from("CancelEvent"),
        Some(String::from("Organizer cancelled the event")),
    );

    Ok(TransitionResult {
        writes,
        audit_event: AuditEvent::new(
            actor,
            cause,
            action,
            before,
            after,
            state.event.event_id,
            None,
        ),
        notification: None,
    })
}

/// Display name of an act for audit details, falling back when the act is
/// not loaded.
fn act_name(state: &BookingState, act_id: i64) -> String {
    state
        .find_act(act_id)
        .map_or_else(|| String::from("unknown act"), |a| a.name.clone())
}
