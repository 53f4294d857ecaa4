// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingState;
use gigbook_audit::{Actor, Cause};
use gigbook_domain::{
    Act, ActType, Application, ApplicationStatus, Assignment, AssignmentStatus, Event, EventStatus,
    Performance, PerformanceStatus,
};

/// The organizer profile owning the fixture event.
pub const ORGANIZER: i64 = 10;
/// A musician profile owning fixture acts.
pub const MUSICIAN: i64 = 20;
/// Fixed timestamp passed to `apply`.
pub const NOW: &str = "2026-09-01T12:00:00Z";

pub fn organizer_actor() -> Actor {
    Actor::new(ORGANIZER, String::from("organizer"))
}

pub fn musician_actor() -> Actor {
    Actor::new(MUSICIAN, String::from("musician"))
}

pub fn stranger_actor() -> Actor {
    Actor::new(999, String::from("musician"))
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn test_event(max_slots: Option<u32>, status: EventStatus) -> Event {
    Event {
        event_id: Some(1),
        organizer_profile_id: ORGANIZER,
        venue_id: Some(5),
        venue_name: String::from("Blue Note Basement"),
        date: String::from("2026-10-03"),
        open_time: Some(String::from("18:30")),
        start_time: Some(String::from("19:00")),
        end_time: Some(String::from("22:00")),
        max_slots,
        status,
        charge: Some(String::from("¥2,000 + 1drink")),
        conditions: None,
    }
}

pub fn owned_act(act_id: i64, owner_profile_id: i64) -> Act {
    Act {
        act_id: Some(act_id),
        owner_profile_id: Some(owner_profile_id),
        name: format!("Act {act_id}"),
        act_type: ActType::Band,
        is_guest: false,
    }
}

pub fn accepted_assignment(act_id: i64) -> Assignment {
    Assignment {
        assignment_id: Some(100 + act_id),
        event_id: 1,
        act_id,
        status: AssignmentStatus::Accepted,
        sort_order: i32::try_from(act_id).unwrap(),
        created_at: String::from("2026-08-20T10:00:00Z"),
    }
}

pub fn application(application_id: i64, act_id: i64, status: ApplicationStatus) -> Application {
    Application {
        application_id: Some(application_id),
        event_id: 1,
        act_id,
        message: Some(String::from("We'd love to play")),
        status,
        created_at: String::from("2026-08-20T10:00:00Z"),
    }
}

pub fn performance(
    performance_id: i64,
    profile_id: i64,
    act_id: i64,
    status: PerformanceStatus,
) -> Performance {
    Performance {
        performance_id: Some(performance_id),
        profile_id,
        act_id: Some(act_id),
        event_id: Some(1),
        venue_name: String::from("Blue Note Basement"),
        date: String::from("2026-10-03"),
        status,
        status_reason: None,
        status_changed_at: None,
    }
}

/// An open event with the given cap and no linked rows.
pub fn empty_state(max_slots: Option<u32>) -> BookingState {
    BookingState {
        event: test_event(max_slots, EventStatus::Open),
        assignments: Vec::new(),
        applications: Vec::new(),
        performances: Vec::new(),
        acts: Vec::new(),
    }
}

/// An open event with one pending application from act 7 (owned by the
/// fixture musician).
pub fn state_with_pending_application(max_slots: Option<u32>) -> BookingState {
    BookingState {
        event: test_event(max_slots, EventStatus::Open),
        assignments: Vec::new(),
        applications: vec![application(50, 7, ApplicationStatus::Pending)],
        performances: Vec::new(),
        acts: vec![owned_act(7, MUSICIAN)],
    }
}
