// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook_domain::ActType;

/// A command represents actor intent as data only.
///
/// Commands are the only way to request booking state changes. Each command
/// is scoped to the event whose `BookingState` it is applied against; the
/// caller resolves application/performance identifiers to that event before
/// loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Organizer approves a pending application: application → accepted,
    /// ledger upserted as accepted, capacity recomputed, a performance row
    /// ensured for the act owner's timeline.
    ApproveApplication {
        /// The application to approve.
        application_id: i64,
    },
    /// Organizer rejects an application: application → rejected, the
    /// ledger row removed outright so re-application stays possible, and
    /// the linked performance canceled.
    RejectApplication {
        /// The application to reject.
        application_id: i64,
    },
    /// Musician accepts an offered slot: application and ledger move to
    /// accepted, the performance is confirmed, capacity recomputed.
    AcceptOffer {
        /// The performance carrying the offer.
        performance_id: i64,
    },
    /// Musician withdraws from a booked event. Touches the performance
    /// only; slot release in the ledger is a separate organizer action.
    Withdraw {
        /// The performance to withdraw.
        performance_id: i64,
    },
    /// Organizer releases a slot stuck in `pending_reconfirm`. Touches the
    /// performance only, with the supplied reason recorded.
    ReleaseSlot {
        /// The performance to release.
        performance_id: i64,
        /// Free-text reason recorded as the status reason.
        reason: String,
    },
    /// Organizer seats a guest act directly: creates an unclaimed act, an
    /// accepted ledger row, and a pre-accepted application carrying the
    /// fixed guest audit message.
    AddGuestAndAccept {
        /// Display name for the new guest act.
        act_name: String,
        /// Classification of the new guest act.
        act_type: ActType,
    },
    /// Organizer invites an existing act: creates a pending application
    /// and an offered performance, awaiting the musician's acceptance.
    Invite {
        /// The act to invite.
        act_id: i64,
    },
    /// Re-derives the accepted count and closes the event if it is full.
    /// Idempotent; never reopens.
    RecomputeCapacity,
    /// Organizer cancels the event. Terminal.
    CancelEvent,
}

impl Command {
    /// Returns the action name recorded in the audit trail.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::ApproveApplication { .. } => "ApproveApplication",
            Self::RejectApplication { .. } => "RejectApplication",
            Self::AcceptOffer { .. } => "AcceptOffer",
            Self::Withdraw { .. } => "Withdraw",
            Self::ReleaseSlot { .. } => "ReleaseSlot",
            Self::AddGuestAndAccept { .. } => "AddGuestAndAccept",
            Self::Invite { .. } => "Invite",
            Self::RecomputeCapacity => "RecomputeCapacity",
            Self::CancelEvent => "CancelEvent",
        }
    }
}
