// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// A fire-and-forget notification scheduled by the transition coordinator.
///
/// Delivery is owned by an external messaging collaborator; the coordinator
/// only describes what should be sent. Delivery failure must never block or
/// roll back the operation that scheduled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Type tag for the notification (e.g. "performance.withdrawn").
    pub kind: String,
    /// The event the notification concerns, if any.
    pub event_id: Option<i64>,
    /// Structured payload for the messaging collaborator.
    pub payload: serde_json::Value,
}

impl NotificationRequest {
    /// Builds the notification scheduled when a musician withdraws.
    #[must_use]
    pub fn withdrawal(event_id: i64, performance_id: i64, profile_id: i64, reason: &str) -> Self {
        Self {
            kind: String::from("performance.withdrawn"),
            event_id: Some(event_id),
            payload: json!({
                "performance_id": performance_id,
                "profile_id": profile_id,
                "reason": reason,
            }),
        }
    }
}
