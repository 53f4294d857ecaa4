// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error_tests;
mod personal_tests;

use gigbook_audit::Cause;
use gigbook_domain::{ActType, Application, ApplicationStatus, Event, EventStatus};
use gigbook_persistence::Persistence;

use crate::{AuthenticatedActor, Role};

pub const NOW: &str = "2026-09-01T12:00:00Z";

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-api"), String::from("API test request"))
}

pub fn organizer(profile_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(profile_id, Role::Organizer)
}

pub fn musician(profile_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(profile_id, Role::Musician)
}

/// Row ids of a fully seeded booking scenario.
pub struct Seeded {
    pub organizer_id: i64,
    pub musician_id: i64,
    pub event_id: i64,
    pub act_id: i64,
    pub application_id: i64,
}

/// Seeds an organizer, a musician with one act, an open event, and one
/// pending application from the act to the event.
pub fn seed(persistence: &mut Persistence, max_slots: Option<u32>) -> Seeded {
    let organizer_id: i64 = persistence.create_profile("Organizer", NOW).unwrap();
    let musician_id: i64 = persistence.create_profile("Musician", NOW).unwrap();
    let event_id: i64 = persistence
        .create_event(&Event {
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
        })
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
