// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook::{BookingState, Command, NotificationRequest, TransitionResult, apply};
use gigbook_audit::AuditEvent;
use gigbook_domain::{ActType, ApplicationStatus, AssignmentStatus, EventStatus};

use crate::tests::{NOW, Seeded, create_test_cause, organizer_actor, seed_pending_application};
use crate::Persistence;

fn approve(persistence: &mut Persistence, seeded: &Seeded) -> i64 {
    let (_, audit_event_id): (TransitionResult, i64) = persistence
        .execute_transition(seeded.event_id, None, |state| {
            apply(
                state,
                Command::ApproveApplication {
                    application_id: seeded.application_id,
                },
                organizer_actor(seeded.organizer_id),
                create_test_cause(),
                NOW,
            )
        })
        .unwrap();
    audit_event_id
}

#[test]
fn test_execute_transition_persists_every_write() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    approve(&mut persistence, &seeded);

    let state: BookingState = persistence.load_booking_state(seeded.event_id).unwrap();
    assert_eq!(state.applications[0].status, ApplicationStatus::Accepted);
    assert_eq!(state.assignments.len(), 1);
    assert_eq!(state.assignments[0].status, AssignmentStatus::Accepted);
    assert_eq!(state.performances.len(), 1);
    assert_eq!(state.performances[0].profile_id, seeded.musician_id);
    assert_eq!(persistence.accepted_count(seeded.event_id).unwrap(), 1);
}

#[test]
fn test_execute_transition_returns_a_retrievable_audit_event() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    let audit_event_id: i64 = approve(&mut persistence, &seeded);

    let event: AuditEvent = persistence.get_audit_event(audit_event_id).unwrap();
    assert_eq!(event.action.name, "ApproveApplication");
    assert_eq!(event.actor.profile_id, seeded.organizer_id);
    assert_eq!(event.event_id, Some(seeded.event_id));
    assert_eq!(event.act_id, Some(seeded.act_id));
    assert!(event.before.data.contains("application=pending"));
    assert!(event.after.data.contains("application=accepted"));
}

#[test]
fn test_final_approval_closes_the_event_in_the_same_transaction() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(1));

    approve(&mut persistence, &seeded);

    let state: BookingState = persistence.load_booking_state(seeded.event_id).unwrap();
    assert_eq!(state.event.status, EventStatus::Matched);
}

#[test]
fn test_guest_entry_creates_act_ledger_and_application_rows() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    persistence
        .execute_transition(seeded.event_id, None, |state| {
            apply(
                state,
                Command::AddGuestAndAccept {
                    act_name: String::from("The Locals"),
                    act_type: ActType::Solo,
                },
                organizer_actor(seeded.organizer_id),
                create_test_cause(),
                NOW,
            )
        })
        .unwrap();

    let after: BookingState = persistence.load_booking_state(seeded.event_id).unwrap();
    let guest = after.acts.iter().find(|a| a.is_guest).unwrap();
    assert_eq!(guest.name, "The Locals");
    assert_eq!(guest.owner_profile_id, None);

    let guest_assignment = after
        .assignments
        .iter()
        .find(|a| Some(a.act_id) == guest.act_id)
        .unwrap();
    assert_eq!(guest_assignment.status, AssignmentStatus::Accepted);

    let guest_application = after
        .applications
        .iter()
        .find(|a| Some(a.act_id) == guest.act_id)
        .unwrap();
    assert_eq!(guest_application.status, ApplicationStatus::Accepted);
    assert_eq!(
        guest_application.message.as_deref(),
        Some(gigbook_domain::Application::GUEST_SLOT_MESSAGE)
    );
    // No musician-facing timeline row for an unclaimed act.
    assert_eq!(after.performances.len(), 0);
}

#[test]
fn test_notification_outbox_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed_pending_application(&mut persistence, Some(3));

    let request: NotificationRequest =
        NotificationRequest::withdrawal(seeded.event_id, 80, seeded.musician_id, "NO_RESPONSE");
    persistence.record_notification(&request).unwrap();

    let recorded: Vec<NotificationRequest> = persistence.list_notifications().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].kind, "performance.withdrawn");
    assert_eq!(recorded[0].event_id, Some(seeded.event_id));
    assert_eq!(recorded[0].payload["reason"], "NO_RESPONSE");
}
