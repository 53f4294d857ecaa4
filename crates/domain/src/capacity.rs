// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity calculation for events.
//!
//! The accepted count is always derived from assignment rows, never stored,
//! so it cannot drift. Callers must evaluate capacity against state read in
//! the same transaction as any write that could change it.

use serde::{Deserialize, Serialize};

/// The result of evaluating an event's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReport {
    /// The organizer-configured slot cap. `None` = unlimited.
    pub max_slots: Option<u32>,
    /// Number of assignment rows currently in `Accepted` status.
    pub accepted: u32,
}

impl CapacityReport {
    /// Returns whether every configured slot is occupied.
    ///
    /// Unlimited events (`max_slots = None`) are never full.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        match self.max_slots {
            Some(max) => self.accepted >= max,
            None => false,
        }
    }

    /// Returns the number of open slots, if the event is capped.
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        match self.max_slots {
            Some(max) => Some(max.saturating_sub(self.accepted)),
            None => None,
        }
    }
}

/// Evaluates capacity from a slot cap and a derived accepted count.
#[must_use]
pub const fn evaluate_capacity(max_slots: Option<u32>, accepted: u32) -> CapacityReport {
    CapacityReport {
        max_slots,
        accepted,
    }
}
