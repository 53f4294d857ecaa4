// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook::CoreError;
use gigbook_domain::DomainError;
use gigbook_persistence::PersistenceError;

use crate::error::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_core_not_found_becomes_a_capitalized_resource() {
    let err: ApiError = translate_core_error(CoreError::NotFound {
        resource: "application",
    });
    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Application"),
        }
    );
    assert_eq!(err.to_string(), "Application not found");
}

#[test]
fn test_capacity_exceeded_keeps_both_counts() {
    let err: ApiError = translate_core_error(CoreError::CapacityExceeded {
        max_slots: 4,
        accepted: 4,
    });
    assert_eq!(
        err.to_string(),
        "Event is full: 4 of 4 slots are already accepted"
    );
}

#[test]
fn test_already_linked_hides_the_row_ids() {
    let err: ApiError = translate_core_error(CoreError::AlreadyLinked {
        event_id: 11,
        act_id: 22,
    });
    assert_eq!(err, ApiError::AlreadyLinked);
    assert!(!err.to_string().contains("11"));
    assert!(!err.to_string().contains("22"));
}

#[test]
fn test_booking_not_found_surfaces_as_internal() {
    let err: ApiError = translate_core_error(CoreError::BookingNotFound);
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_domain_violations_map_to_the_offending_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidMaxSlots(0));
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "max_slots"));

    let err: ApiError = translate_domain_error(DomainError::InvalidReleaseReason);
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "reason"));
}

#[test]
fn test_missing_event_maps_to_not_found_without_the_id() {
    let err: ApiError = ApiError::from(PersistenceError::EventNotFound(42));
    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
        }
    );
    assert!(!err.to_string().contains("42"));
}

#[test]
fn test_other_persistence_failures_map_to_internal() {
    let err: ApiError = ApiError::from(PersistenceError::DatabaseError(String::from(
        "disk I/O error",
    )));
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_partial_failure_display_names_operation_and_step() {
    let err: ApiError = ApiError::PartialFailure {
        operation: String::from("Withdraw"),
        step: String::from("deliver"),
        message: String::from("channel closed"),
    };
    assert_eq!(
        err.to_string(),
        "Operation 'Withdraw' partially failed at step 'deliver': channel closed"
    );
}
