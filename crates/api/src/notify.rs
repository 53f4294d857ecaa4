// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification delivery behind a sink trait.
//!
//! Notifications are fire-and-forget: the coordinator schedules them, the
//! API layer records them in the outbox and hands them to a sink after the
//! transaction commits. A sink failure is logged and swallowed; it never
//! rolls back or fails the operation that scheduled the notification.

use gigbook::NotificationRequest;
use thiserror::Error;

/// Errors a notification sink may report.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery channel rejected or could not reach the recipient.
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
    /// The sink is not available.
    #[error("Notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Destination for scheduled notifications.
///
/// Implementations own the actual delivery mechanism (mail, push, a queue).
/// The API layer treats every sink as unreliable.
pub trait NotificationSink {
    /// Delivers a single notification.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller logs and discards it.
    fn deliver(&mut self, request: &NotificationRequest) -> Result<(), NotifyError>;
}

/// A sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn deliver(&mut self, _request: &NotificationRequest) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// A sink that keeps every delivered notification in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Notifications delivered so far, in order.
    pub delivered: Vec<NotificationRequest>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delivered: Vec::new(),
        }
    }
}

impl NotificationSink for RecordingSink {
    fn deliver(&mut self, request: &NotificationRequest) -> Result<(), NotifyError> {
        self.delivered.push(request.clone());
        Ok(())
    }
}
