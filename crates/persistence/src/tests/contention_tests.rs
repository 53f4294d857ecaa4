// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity enforcement across separate database connections.
//!
//! Each connection runs its transition through the immediate
//! transaction in `execute_transition`, so the capacity check reads the
//! committed ledger rather than a snapshot another connection is about
//! to outdate.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use gigbook::{Command, CoreError, apply};
use gigbook_domain::{ActType, Application, ApplicationStatus};

use crate::tests::{NOW, create_test_cause, organizer_actor, test_event};
use crate::{Persistence, TransitionError};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_db_path() -> PathBuf {
    let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "gigbook_capacity_{}_{id}.sqlite3",
        std::process::id()
    ))
}

fn remove_db_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut name: std::ffi::OsString = path.as_os_str().to_os_string();
        name.push(suffix);
        let _ = std::fs::remove_file(name);
    }
}

struct Contended {
    organizer_id: i64,
    event_id: i64,
    application_ids: Vec<i64>,
}

/// Seeds a one-slot event with `applicants` pending applications from
/// distinct acts.
fn seed_contended_event(persistence: &mut Persistence, applicants: usize) -> Contended {
    let organizer_id: i64 = persistence.create_profile("Organizer", NOW).unwrap();
    let event_id: i64 = persistence
        .create_event(&test_event(organizer_id, Some(1)))
        .unwrap();
    let mut application_ids: Vec<i64> = Vec::with_capacity(applicants);
    for i in 0..applicants {
        let musician_id: i64 = persistence
            .create_profile(&format!("Musician {i}"), NOW)
            .unwrap();
        let act_id: i64 = persistence
            .create_act(musician_id, &format!("Act {i}"), ActType::Solo)
            .unwrap();
        let application_id: i64 = persistence
            .create_application(&Application {
                application_id: None,
                event_id,
                act_id,
                message: None,
                status: ApplicationStatus::Pending,
                created_at: NOW.to_string(),
            })
            .unwrap();
        application_ids.push(application_id);
    }
    Contended {
        organizer_id,
        event_id,
        application_ids,
    }
}

fn approve_via(
    persistence: &mut Persistence,
    event_id: i64,
    application_id: i64,
    organizer_id: i64,
) -> Result<(), TransitionError> {
    persistence
        .execute_transition(event_id, None, |state| {
            apply(
                state,
                Command::ApproveApplication { application_id },
                organizer_actor(organizer_id),
                create_test_cause(),
                NOW,
            )
        })
        .map(|_| ())
}

#[test]
fn test_competing_approvals_admit_exactly_one_act() {
    let path: PathBuf = temp_db_path();
    let mut first: Persistence = Persistence::new_with_file(&path).unwrap();
    let seeded: Contended = seed_contended_event(&mut first, 2);
    let mut second: Persistence = Persistence::new_with_file(&path).unwrap();

    approve_via(
        &mut first,
        seeded.event_id,
        seeded.application_ids[0],
        seeded.organizer_id,
    )
    .unwrap();

    // The second connection loads inside its own transaction, so the
    // first approval is already visible to its capacity check.
    let err: TransitionError = approve_via(
        &mut second,
        seeded.event_id,
        seeded.application_ids[1],
        seeded.organizer_id,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TransitionError::Rejected(CoreError::CapacityExceeded {
            max_slots: 1,
            accepted: 1,
        })
    );
    assert_eq!(first.accepted_count(seeded.event_id).unwrap(), 1);

    remove_db_files(&path);
}

#[test]
fn test_parallel_approvals_never_oversubscribe_the_event() {
    let path: PathBuf = temp_db_path();
    let mut seeder: Persistence = Persistence::new_with_file(&path).unwrap();
    let seeded: Contended = seed_contended_event(&mut seeder, 3);
    drop(seeder);

    let results: Vec<Result<(), TransitionError>> = seeded
        .application_ids
        .iter()
        .map(|&application_id| {
            let path: PathBuf = path.clone();
            let event_id: i64 = seeded.event_id;
            let organizer_id: i64 = seeded.organizer_id;
            thread::spawn(move || {
                let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
                approve_via(&mut persistence, event_id, application_id, organizer_id)
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let admitted: usize = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(admitted, 1, "results: {results:?}");
    for result in &results {
        if let Err(err) = result {
            assert_eq!(
                *err,
                TransitionError::Rejected(CoreError::CapacityExceeded {
                    max_slots: 1,
                    accepted: 1,
                })
            );
        }
    }

    let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(persistence.accepted_count(seeded.event_id).unwrap(), 1);

    remove_db_files(&path);
}
