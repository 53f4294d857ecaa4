// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook::BookingState;
use gigbook_domain::{ApplicationStatus, EventStatus};

use crate::tests::{NOW, Seeded, seed_pending_application};
use crate::{Persistence, PersistenceError};

#[test]
fn test_load_booking_state_returns_all_record_sets() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    let state: BookingState = persistence.load_booking_state(seeded.event_id).unwrap();

    assert_eq!(state.event.event_id, Some(seeded.event_id));
    assert_eq!(state.event.status, EventStatus::Open);
    assert_eq!(state.event.max_slots, Some(3));
    assert!(state.assignments.is_empty());
    assert_eq!(state.applications.len(), 1);
    assert_eq!(state.applications[0].status, ApplicationStatus::Pending);
    assert_eq!(state.acts.len(), 1);
    assert_eq!(state.acts[0].name, "Night Owls");
    assert_eq!(state.acts[0].owner_profile_id, Some(seeded.musician_id));
}

#[test]
fn test_load_booking_state_for_missing_event_fails() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.load_booking_state(404);

    assert_eq!(result, Err(PersistenceError::EventNotFound(404)));
}

#[test]
fn test_load_booking_state_with_act_includes_invite_target() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let organizer_id: i64 = persistence.create_profile("Organizer", NOW).unwrap();
    let musician_id: i64 = persistence.create_profile("Musician", NOW).unwrap();
    let event_id: i64 = persistence
        .create_event(&crate::tests::test_event(organizer_id, Some(3)))
        .unwrap();
    // This act has no rows linked to the event yet.
    let act_id: i64 = persistence
        .create_act(musician_id, "Volterra", gigbook_domain::ActType::Duo)
        .unwrap();

    let state: BookingState = persistence
        .load_booking_state_with_act(event_id, Some(act_id))
        .unwrap();

    assert_eq!(state.acts.len(), 1);
    assert_eq!(state.acts[0].act_id, Some(act_id));
}

#[test]
fn test_event_id_for_application_resolves_the_scope() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, None);

    let event_id: i64 = persistence
        .event_id_for_application(seeded.application_id)
        .unwrap();

    assert_eq!(event_id, seeded.event_id);
}

#[test]
fn test_event_id_for_missing_application_fails() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.event_id_for_application(404);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_event_roster_joins_applications_with_acts() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    let roster = persistence.event_roster(seeded.event_id).unwrap();

    assert_eq!(roster.len(), 1);
    let (application, act) = &roster[0];
    assert_eq!(application.application_id, Some(seeded.application_id));
    assert_eq!(act.act_id, Some(seeded.act_id));
    assert_eq!(act.name, "Night Owls");
}

#[test]
fn test_accepted_count_starts_at_zero() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    assert_eq!(persistence.accepted_count(seeded.event_id).unwrap(), 0);
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    let seeded: Seeded = seed_pending_application(&mut first, Some(3));

    assert_eq!(
        second.load_booking_state(seeded.event_id),
        Err(PersistenceError::EventNotFound(seeded.event_id))
    );
}
