// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries.
//!
//! The `booking` module loads the event-scoped state the transition
//! coordinator evaluates against, plus the roster and timeline
//! projections the UI reads. The `audit` module reads the trail back.

pub mod audit;
pub mod booking;

pub use audit::{audit_timeline_for_event, get_audit_event};
pub use booking::{
    accepted_count, event_id_for_application, event_roster, get_act, get_performance,
    list_notifications, load_booking_state, load_booking_state_with_act, performances_for_profile,
};
