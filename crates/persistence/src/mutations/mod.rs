// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations.
//!
//! `writes` executes the entity writes a transition produced, `audit`
//! persists the matching audit event, and `entities` carries the direct
//! row operations that don't flow through the coordinator (profile and
//! event creation, personal performance entries, the outbox).

pub mod audit;
pub mod entities;
pub mod writes;

pub use audit::persist_audit_event;
pub use entities::{
    create_act, create_application, create_event, create_performance, create_profile,
    delete_personal_performance, record_notification, update_personal_performance,
};
pub use writes::execute_writes;
