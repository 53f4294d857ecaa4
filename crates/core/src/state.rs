// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notify::NotificationRequest;
use crate::write::EntityWrite;
use gigbook_audit::{AuditEvent, StateSnapshot};
use gigbook_domain::{
    Act, Application, Assignment, CapacityReport, Event, Performance, evaluate_capacity,
};

/// The booking state for a single event: its row plus every assignment,
/// application, performance, and referenced act.
///
/// Loaded in the same transaction that executes the resulting writes, so
/// every capacity and status precondition is evaluated against the state
/// the writes will apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    /// The event row.
    pub event: Event,
    /// All ledger rows for this event.
    pub assignments: Vec<Assignment>,
    /// All contact-attempt rows for this event, oldest first.
    pub applications: Vec<Application>,
    /// All event-linked performance rows for this event.
    pub performances: Vec<Performance>,
    /// Acts referenced by the rows above (and any invite target).
    pub acts: Vec<Act>,
}

impl BookingState {
    /// Derives the accepted count from the ledger rows.
    #[must_use]
    pub fn accepted_count(&self) -> u32 {
        u32::try_from(
            self.assignments
                .iter()
                .filter(|a| gigbook_domain::assignment_counts_toward_capacity(a.status))
                .count(),
        )
        .unwrap_or(u32::MAX)
    }

    /// Evaluates capacity for this event from the derived accepted count.
    #[must_use]
    pub fn capacity_report(&self) -> CapacityReport {
        evaluate_capacity(self.event.max_slots, self.accepted_count())
    }

    /// Finds an application by id.
    #[must_use]
    pub fn find_application(&self, application_id: i64) -> Option<&Application> {
        self.applications
            .iter()
            .find(|a| a.application_id == Some(application_id))
    }

    /// Finds the most recent application for an act, if any.
    #[must_use]
    pub fn latest_application_for_act(&self, act_id: i64) -> Option<&Application> {
        self.applications.iter().rev().find(|a| a.act_id == act_id)
    }

    /// Finds the ledger row for an act, if any.
    #[must_use]
    pub fn find_assignment(&self, act_id: i64) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.act_id == act_id)
    }

    /// Finds a performance by id.
    #[must_use]
    pub fn find_performance(&self, performance_id: i64) -> Option<&Performance> {
        self.performances
            .iter()
            .find(|p| p.performance_id == Some(performance_id))
    }

    /// Finds the event-linked performance row for an act, if any.
    #[must_use]
    pub fn find_performance_for_act(&self, act_id: i64) -> Option<&Performance> {
        self.performances.iter().find(|p| p.act_id == Some(act_id))
    }

    /// Finds an act by id.
    #[must_use]
    pub fn find_act(&self, act_id: i64) -> Option<&Act> {
        self.acts.iter().find(|a| a.act_id == Some(act_id))
    }

    /// The next display ordering for a new ledger row.
    #[must_use]
    pub fn next_sort_order(&self) -> i32 {
        self.assignments
            .iter()
            .map(|a| a.sort_order)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "event={},accepted_count={},applications={},performances={}",
            self.event.status,
            self.accepted_count(),
            self.applications.len(),
            self.performances.len()
        ))
    }
}

/// The result of a successful transition.
///
/// The writes, the audit event, and nothing else: the persistence layer
/// executes the writes and persists the audit event atomically, then the
/// caller dispatches the notification (if any) after commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The entity writes to execute, in order.
    pub writes: Vec<EntityWrite>,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// A notification to dispatch after commit, if the operation
    /// scheduled one.
    pub notification: Option<NotificationRequest>,
}
