// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod contention_tests;
mod state_tests;
mod write_tests;

use gigbook_audit::{Actor, Cause};
use gigbook_domain::{
    ActType, Application, ApplicationStatus, Event, EventStatus, Performance, PerformanceStatus,
};

use crate::Persistence;

pub const NOW: &str = "2026-09-01T12:00:00Z";

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-test"), String::from("Test operation"))
}

pub fn organizer_actor(profile_id: i64) -> Actor {
    Actor::new(profile_id, String::from("organizer"))
}

pub fn musician_actor(profile_id: i64) -> Actor {
    Actor::new(profile_id, String::from("musician"))
}

/// Row ids of a fully seeded booking scenario.
pub struct Seeded {
    pub organizer_id: i64,
    pub musician_id: i64,
    pub event_id: i64,
    pub act_id: i64,
    pub application_id: i64,
}

pub fn test_event(organizer_id: i64, max_slots: Option<u32>) -> Event {
    Event {
        event_id: None,
        organizer_profile_id: organizer_id,
        venue_id: None,
        venue_name: String::from("Blue Note Basement"),
        date: String::from("2026-10-03"),
        open_time: Some(String::from("18:30")),
        start_time: Some(String::from("19:00")),
        end_time: None,
        max_slots,
        status: EventStatus::Open,
        charge: Some(String::from("¥2,000 + 1drink")),
        conditions: None,
    }
}

/// Seeds an organizer, a musician with one act, an open event, and one
/// pending application from the act to the event.
pub fn seed_pending_application(
    persistence: &mut Persistence,
    max_slots: Option<u32>,
) -> Seeded {
    let organizer_id: i64 = persistence.create_profile("Organizer", NOW).unwrap();
    let musician_id: i64 = persistence.create_profile("Musician", NOW).unwrap();
    let event_id: i64 = persistence
        .create_event(&test_event(organizer_id, max_slots))
        .unwrap();
    let act_id: i64 = persistence
        .create_act(musician_id, "Night Owls", ActType::Band)
        .unwrap();
    let application_id: i64 = persistence
        .create_application(&Application {
            application_id: None,
            event_id,
            act_id,
            message: Some(String::from("We'd love to play")),
            status: ApplicationStatus::Pending,
            created_at: NOW.to_string(),
        })
        .unwrap();

    Seeded {
        organizer_id,
        musician_id,
        event_id,
        act_id,
        application_id,
    }
}

pub fn personal_entry(profile_id: i64) -> Performance {
    Performance {
        performance_id: None,
        profile_id,
        act_id: None,
        event_id: None,
        venue_name: String::from("Open Mic Cellar"),
        date: String::from("2026-11-20"),
        status: PerformanceStatus::Confirmed,
        status_reason: None,
        status_changed_at: Some(NOW.to_string()),
    }
}
