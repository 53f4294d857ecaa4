// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod capacity;
mod error;
mod status;
mod status_map;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use capacity::{CapacityReport, evaluate_capacity};
pub use error::DomainError;
pub use status::{
    ApplicationStatus, AssignmentStatus, EventStatus, PerformanceStatus, status_reason,
};
pub use status_map::{
    application_status_for_assignment, assignment_counts_toward_capacity,
    performance_consistent_with_assignment, performance_status_on_ledger_removal,
};
pub use types::{Act, ActType, Application, Assignment, Event, Performance};
pub use validation::{validate_act_name, validate_max_slots, validate_release_reason};
