// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook_domain::{
    Act, Application, ApplicationStatus, AssignmentStatus, EventStatus, Performance,
    PerformanceStatus,
};

/// One entity write produced by a transition.
///
/// The coordinator is pure: it decides writes, the persistence layer
/// executes them, all inside a single transaction per operation. Writes
/// are executed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityWrite {
    /// Insert or update the ledger row for (event, act).
    UpsertAssignment {
        /// The event.
        event_id: i64,
        /// The act.
        act_id: i64,
        /// The resulting ledger status.
        status: AssignmentStatus,
        /// Display ordering; preserved on update of an existing row.
        sort_order: i32,
        /// Creation timestamp used when the row is inserted (RFC 3339).
        created_at: String,
    },
    /// Remove the ledger row for (event, act) outright.
    DeleteAssignment {
        /// The event.
        event_id: i64,
        /// The act.
        act_id: i64,
    },
    /// Insert a new application row.
    InsertApplication(Application),
    /// Move an existing application to a new status.
    UpdateApplicationStatus {
        /// The application row.
        application_id: i64,
        /// The target status.
        status: ApplicationStatus,
    },
    /// Insert a new performance row.
    InsertPerformance(Performance),
    /// Move an existing performance to a new status, stamping the reason
    /// and change time.
    UpdatePerformanceStatus {
        /// The performance row.
        performance_id: i64,
        /// The target status.
        status: PerformanceStatus,
        /// Audit tag or free-text reason for the change.
        reason: Option<String>,
        /// Change timestamp (RFC 3339).
        changed_at: String,
    },
    /// Conditionally move the event to a new status. The update applies
    /// only while the row still holds `expected`; zero affected rows is
    /// treated as success (the event already transitioned).
    UpdateEventStatus {
        /// The event row.
        event_id: i64,
        /// The status the row must still hold.
        expected: EventStatus,
        /// The target status.
        to: EventStatus,
    },
    /// Seat a guest act: insert the unclaimed act, then an accepted
    /// ledger row and a pre-accepted application for the new act id.
    InsertGuestEntry {
        /// The unclaimed guest act to create.
        act: Act,
        /// Display ordering for the new ledger row.
        sort_order: i32,
        /// Fixed audit-trail message for the application row.
        message: String,
        /// Creation timestamp (RFC 3339).
        created_at: String,
    },
}
