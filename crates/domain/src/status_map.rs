// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single translation point between the three status vocabularies.
//!
//! Applications, assignments, and performances each carry their own status
//! vocabulary. Every transition operation translates between them through
//! this module, so the vocabularies cannot drift out of sync at call sites.

use crate::status::{ApplicationStatus, AssignmentStatus, PerformanceStatus};

/// Maps a ledger decision to the application status that must accompany it.
#[must_use]
pub const fn application_status_for_assignment(status: AssignmentStatus) -> ApplicationStatus {
    match status {
        AssignmentStatus::Pending => ApplicationStatus::Pending,
        AssignmentStatus::Accepted => ApplicationStatus::Accepted,
        AssignmentStatus::Declined => ApplicationStatus::Rejected,
    }
}

/// The performance status implied by removing or declining the ledger row.
#[must_use]
pub const fn performance_status_on_ledger_removal() -> PerformanceStatus {
    PerformanceStatus::Canceled
}

/// Returns whether an assignment status counts toward event capacity.
#[must_use]
pub const fn assignment_counts_toward_capacity(status: AssignmentStatus) -> bool {
    matches!(status, AssignmentStatus::Accepted)
}

/// Checks the cross-entity invariant between an assignment and the
/// performance row for the same (event, act).
///
/// An `Accepted` assignment implies the performance is `Confirmed` (after
/// musician action) or `Offered` / `PendingReconfirm` (before it), or
/// `Canceled` when the musician has withdrawn without the organizer yet
/// releasing the ledger slot. A declined assignment implies `Canceled`.
#[must_use]
pub const fn performance_consistent_with_assignment(
    assignment: AssignmentStatus,
    performance: PerformanceStatus,
) -> bool {
    match assignment {
        AssignmentStatus::Accepted => matches!(
            performance,
            PerformanceStatus::Confirmed
                | PerformanceStatus::Offered
                | PerformanceStatus::PendingReconfirm
                | PerformanceStatus::Canceled
        ),
        AssignmentStatus::Pending => matches!(
            performance,
            PerformanceStatus::Offered | PerformanceStatus::PendingReconfirm
        ),
        AssignmentStatus::Declined => matches!(performance, PerformanceStatus::Canceled),
    }
}
