// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Gigbook booking system.
//!
//! Handlers translate caller requests into coordinator commands, run them
//! against persistence in a single transaction, and map every internal
//! error into the [`ApiError`] contract. Callers are identified by an
//! [`AuthenticatedActor`]; relationship checks (organizer of the event,
//! owner of the performance) live in the coordinator, the api layer only
//! attributes the action.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use gigbook_audit::Actor;

pub mod error;
pub mod handlers;
pub mod notify;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use notify::{NotificationSink, NotifyError, NullSink, RecordingSink};

/// The capacity in which an authenticated profile is acting.
///
/// Roles select the actor attribution recorded in the audit trail; they
/// grant no authority by themselves. Whether an action is permitted is
/// decided against the booking state (event organizer, performance
/// owner), except for `System`, which the coordinator accepts for
/// maintenance operations such as capacity recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Acting as an event organizer.
    Organizer,
    /// Acting as a musician.
    Musician,
    /// A background job or maintenance task.
    System,
}

/// An authenticated profile with the capacity it is acting in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The profile performing the action.
    pub profile_id: i64,
    /// The capacity the profile is acting in.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(profile_id: i64, role: Role) -> Self {
        Self { profile_id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        let actor_type: String = match self.role {
            Role::Organizer => String::from("organizer"),
            Role::Musician => String::from("musician"),
            Role::System => String::from("system"),
        };
        Actor::new(self.profile_id, actor_type)
    }
}
