// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{ApplicationStatus, AssignmentStatus, PerformanceStatus};
use crate::status_map::{
    application_status_for_assignment, assignment_counts_toward_capacity,
    performance_consistent_with_assignment, performance_status_on_ledger_removal,
};

#[test]
fn test_ledger_decisions_map_onto_application_vocabulary() {
    assert_eq!(
        application_status_for_assignment(AssignmentStatus::Accepted),
        ApplicationStatus::Accepted
    );
    assert_eq!(
        application_status_for_assignment(AssignmentStatus::Declined),
        ApplicationStatus::Rejected
    );
    assert_eq!(
        application_status_for_assignment(AssignmentStatus::Pending),
        ApplicationStatus::Pending
    );
}

#[test]
fn test_ledger_removal_implies_canceled_performance() {
    assert_eq!(
        performance_status_on_ledger_removal(),
        PerformanceStatus::Canceled
    );
}

#[test]
fn test_only_accepted_assignments_count_toward_capacity() {
    assert!(assignment_counts_toward_capacity(
        AssignmentStatus::Accepted
    ));
    assert!(!assignment_counts_toward_capacity(
        AssignmentStatus::Pending
    ));
    assert!(!assignment_counts_toward_capacity(
        AssignmentStatus::Declined
    ));
}

#[test]
fn test_accepted_assignment_permits_pre_and_post_acceptance_statuses() {
    for performance in [
        PerformanceStatus::Offered,
        PerformanceStatus::PendingReconfirm,
        PerformanceStatus::Confirmed,
    ] {
        assert!(performance_consistent_with_assignment(
            AssignmentStatus::Accepted,
            performance
        ));
    }
}

#[test]
fn test_withdrawn_performance_remains_consistent_with_accepted_ledger() {
    // Withdraw never touches the ledger, so a canceled performance beside
    // an accepted assignment is a legal intermediate state.
    assert!(performance_consistent_with_assignment(
        AssignmentStatus::Accepted,
        PerformanceStatus::Canceled
    ));
}

#[test]
fn test_declined_assignment_requires_canceled_performance() {
    assert!(performance_consistent_with_assignment(
        AssignmentStatus::Declined,
        PerformanceStatus::Canceled
    ));
    assert!(!performance_consistent_with_assignment(
        AssignmentStatus::Declined,
        PerformanceStatus::Confirmed
    ));
}

#[test]
fn test_pending_assignment_rejects_confirmed_performance() {
    assert!(!performance_consistent_with_assignment(
        AssignmentStatus::Pending,
        PerformanceStatus::Confirmed
    ));
}
