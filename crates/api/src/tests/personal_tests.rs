// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook::BookingState;
use gigbook_persistence::Persistence;

use crate::error::ApiError;
use crate::handlers;
use crate::notify::NullSink;
use crate::request_response::{CreatePersonalEntryRequest, PersonalEntryResponse, TimelineEntry};
use crate::tests::{NOW, Seeded, musician, organizer, seed, test_cause};

fn entry_request() -> CreatePersonalEntryRequest {
    CreatePersonalEntryRequest {
        venue_name: String::from("Open Mic Cellar"),
        date: String::from("2026-11-20"),
    }
}

#[test]
fn test_create_update_and_delete_a_personal_entry() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let profile_id: i64 = persistence.create_profile("Musician", NOW).unwrap();

    let created: PersonalEntryResponse =
        handlers::create_personal_entry(&mut persistence, entry_request(), &musician(profile_id))
            .unwrap();

    handlers::update_personal_entry(
        &mut persistence,
        created.performance_id,
        "Riverside Hall",
        "2026-12-05",
        &musician(profile_id),
    )
    .unwrap();
    let timeline: Vec<TimelineEntry> =
        handlers::musician_timeline(&mut persistence, profile_id).unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].venue_name, "Riverside Hall");
    assert_eq!(timeline[0].date, "2026-12-05");
    assert_eq!(timeline[0].event_id, None);

    handlers::delete_personal_entry(&mut persistence, created.performance_id, &musician(profile_id))
        .unwrap();
    assert!(
        handlers::musician_timeline(&mut persistence, profile_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_personal_entries_are_owner_only() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let owner_id: i64 = persistence.create_profile("Owner", NOW).unwrap();
    let other_id: i64 = persistence.create_profile("Other", NOW).unwrap();
    let created: PersonalEntryResponse =
        handlers::create_personal_entry(&mut persistence, entry_request(), &musician(owner_id))
            .unwrap();

    let err: ApiError = handlers::update_personal_entry(
        &mut persistence,
        created.performance_id,
        "Riverside Hall",
        "2026-12-05",
        &musician(other_id),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            action: String::from("edit this entry"),
        }
    );

    let err: ApiError =
        handlers::delete_personal_entry(&mut persistence, created.performance_id, &musician(other_id))
            .unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            action: String::from("delete this entry"),
        }
    );
}

#[test]
fn test_event_linked_rows_cannot_be_edited_as_personal_entries() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut persistence, Some(2));
    let mut sink: NullSink = NullSink;
    handlers::approve_application(
        &mut persistence,
        &mut sink,
        seeded.application_id,
        &organizer(seeded.organizer_id),
        test_cause(),
    )
    .unwrap();
    let state: BookingState = persistence.load_booking_state(seeded.event_id).unwrap();
    let performance_id: i64 = state.performances[0].performance_id.unwrap();

    let err: ApiError = handlers::delete_personal_entry(
        &mut persistence,
        performance_id,
        &musician(seeded.musician_id),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidState {
            entity: String::from("performance"),
            current: String::from("event-linked"),
            operation: String::from("delete this entry"),
        }
    );
}

#[test]
fn test_create_rejects_an_empty_venue_name() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let profile_id: i64 = persistence.create_profile("Musician", NOW).unwrap();

    let err: ApiError = handlers::create_personal_entry(
        &mut persistence,
        CreatePersonalEntryRequest {
            venue_name: String::from("   "),
            date: String::from("2026-11-20"),
        },
        &musician(profile_id),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "venue_name"));
}

#[test]
fn test_create_rejects_an_unparseable_date() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let profile_id: i64 = persistence.create_profile("Musician", NOW).unwrap();

    let err: ApiError = handlers::create_personal_entry(
        &mut persistence,
        CreatePersonalEntryRequest {
            venue_name: String::from("Open Mic Cellar"),
            date: String::from("November 20th"),
        },
        &musician(profile_id),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "date"));
}

#[test]
fn test_timeline_mixes_personal_and_event_linked_rows() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut persistence, Some(2));
    let mut sink: NullSink = NullSink;
    handlers::approve_application(
        &mut persistence,
        &mut sink,
        seeded.application_id,
        &organizer(seeded.organizer_id),
        test_cause(),
    )
    .unwrap();
    handlers::create_personal_entry(
        &mut persistence,
        entry_request(),
        &musician(seeded.musician_id),
    )
    .unwrap();

    let timeline: Vec<TimelineEntry> =
        handlers::musician_timeline(&mut persistence, seeded.musician_id).unwrap();
    assert_eq!(timeline.len(), 2);
    // Ordered by date: the event booking (October) before the personal
    // entry (November).
    assert_eq!(timeline[0].event_id, Some(seeded.event_id));
    assert_eq!(timeline[0].status, "offered");
    assert_eq!(timeline[1].event_id, None);
    assert_eq!(timeline[1].status, "confirmed");
}
