// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Gigbook.
//!
//! Diesel on `SQLite`: embedded migrations, foreign key enforcement
//! verified at startup, WAL mode for file databases, and unique
//! in-memory databases for tests.
//!
//! The central contract is [`Persistence::execute_transition`]: the
//! booking state is loaded, the coordinator's decision is taken, and
//! the entity writes plus the audit event are executed, all inside one
//! immediate database transaction. A transition lands fully or not at
//! all, and no second writer can interleave between the capacity check
//! and the accepting write.

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

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;

use gigbook::{BookingState, CoreError, NotificationRequest, TransitionResult};
use gigbook_audit::AuditEvent;
use gigbook_domain::{Act, ActType, Application, Event, Performance};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::{PersistenceError, TransitionError};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// tests are isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for booking state, the audit trail, and the
/// notification outbox.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Loads the booking state for one event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn load_booking_state(&mut self, event_id: i64) -> Result<BookingState, PersistenceError> {
        queries::load_booking_state(&mut self.conn, event_id)
    }

    /// Loads the booking state for one event including an invite-target
    /// act that may have no rows yet.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn load_booking_state_with_act(
        &mut self,
        event_id: i64,
        extra_act_id: Option<i64>,
    ) -> Result<BookingState, PersistenceError> {
        queries::load_booking_state_with_act(&mut self.conn, event_id, extra_act_id)
    }

    /// Runs one coordinator transition: loads the booking state, asks
    /// `decide` for the entity writes, executes them, and persists the
    /// audit event, all inside a single immediate database transaction.
    ///
    /// The write lock is taken before the state is read, so the
    /// capacity and status preconditions inside `decide` are evaluated
    /// against the committed ledger and hold through the writes even
    /// when other connections run transitions against the same event.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event scope of the transition
    /// * `extra_act_id` - An invite-target act to load alongside the
    ///   event's own rows, if any
    /// * `decide` - The coordinator call producing the transition
    ///
    /// # Returns
    ///
    /// The transition result and the audit row id assigned by the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Rejected`] if `decide` refuses the
    /// command and [`TransitionError::Storage`] if loading or writing
    /// fails. The transaction rolls everything back in both cases.
    pub fn execute_transition<F>(
        &mut self,
        event_id: i64,
        extra_act_id: Option<i64>,
        decide: F,
    ) -> Result<(TransitionResult, i64), TransitionError>
    where
        F: FnOnce(&BookingState) -> Result<TransitionResult, CoreError>,
    {
        self.conn
            .immediate_transaction::<(TransitionResult, i64), TransitionError, _>(|conn| {
                let state: BookingState =
                    queries::load_booking_state_with_act(conn, event_id, extra_act_id)?;
                let result: TransitionResult = decide(&state)?;
                mutations::execute_writes(conn, event_id, &result.writes)?;
                let audit_event_id: i64 = mutations::persist_audit_event(conn, &result.audit_event)?;
                Ok((result, audit_event_id))
            })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Resolves the event an application belongs to.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the application does not exist.
    pub fn event_id_for_application(
        &mut self,
        application_id: i64,
    ) -> Result<i64, PersistenceError> {
        queries::event_id_for_application(&mut self.conn, application_id)
    }

    /// Retrieves one performance row by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the performance does not exist.
    pub fn get_performance(&mut self, performance_id: i64) -> Result<Performance, PersistenceError> {
        queries::get_performance(&mut self.conn, performance_id)
    }

    /// Retrieves one act by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the act does not exist.
    pub fn get_act(&mut self, act_id: i64) -> Result<Act, PersistenceError> {
        queries::get_act(&mut self.conn, act_id)
    }

    /// The roster projection: every application for an event joined
    /// with its act.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn event_roster(
        &mut self,
        event_id: i64,
    ) -> Result<Vec<(Application, Act)>, PersistenceError> {
        queries::event_roster(&mut self.conn, event_id)
    }

    /// The musician timeline projection: all performances owned by a
    /// profile, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn performances_for_profile(
        &mut self,
        profile_id: i64,
    ) -> Result<Vec<Performance>, PersistenceError> {
        queries::performances_for_profile(&mut self.conn, profile_id)
    }

    /// Derives the accepted count for an event from the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn accepted_count(&mut self, event_id: i64) -> Result<u32, PersistenceError> {
        queries::accepted_count(&mut self.conn, event_id)
    }

    /// Retrieves an audit event by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is not found or cannot be
    /// deserialized.
    pub fn get_audit_event(&mut self, audit_event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::get_audit_event(&mut self.conn, audit_event_id)
    }

    /// Retrieves the ordered audit trail for one event.
    ///
    /// # Errors
    ///
    /// Returns an error if rows cannot be retrieved or deserialized.
    pub fn audit_timeline_for_event(
        &mut self,
        event_id: i64,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit_timeline_for_event(&mut self.conn, event_id)
    }

    /// Reads back the notification outbox, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if rows cannot be retrieved.
    pub fn list_notifications(&mut self) -> Result<Vec<NotificationRequest>, PersistenceError> {
        queries::list_notifications(&mut self.conn)
    }

    // ========================================================================
    // Direct row operations
    // ========================================================================

    /// Creates a profile row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_profile(
        &mut self,
        display_name: &str,
        created_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_profile(&mut self.conn, display_name, created_at)
    }

    /// Creates an owned (non-guest) act.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_act(
        &mut self,
        owner_profile_id: i64,
        name: &str,
        act_type: ActType,
    ) -> Result<i64, PersistenceError> {
        mutations::create_act(&mut self.conn, owner_profile_id, name, act_type)
    }

    /// Creates an event row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_event(&mut self, event: &Event) -> Result<i64, PersistenceError> {
        mutations::create_event(&mut self.conn, event)
    }

    /// Creates an application row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_application(
        &mut self,
        application: &Application,
    ) -> Result<i64, PersistenceError> {
        mutations::create_application(&mut self.conn, application)
    }

    /// Creates a performance row (event-linked or personal).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_performance(
        &mut self,
        performance: &Performance,
    ) -> Result<i64, PersistenceError> {
        mutations::create_performance(&mut self.conn, performance)
    }

    /// Updates the mutable fields of a personal performance entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    pub fn update_personal_performance(
        &mut self,
        performance_id: i64,
        venue_name: &str,
        date: &str,
    ) -> Result<(), PersistenceError> {
        mutations::update_personal_performance(&mut self.conn, performance_id, venue_name, date)
    }

    /// Hard-deletes a personal performance entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    pub fn delete_personal_performance(
        &mut self,
        performance_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::delete_personal_performance(&mut self.conn, performance_id)
    }

    /// Records a scheduled notification in the outbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_notification(
        &mut self,
        request: &NotificationRequest,
    ) -> Result<i64, PersistenceError> {
        mutations::record_notification(&mut self.conn, request)
    }
}
