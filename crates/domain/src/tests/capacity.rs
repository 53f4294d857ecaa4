// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::capacity::{CapacityReport, evaluate_capacity};

#[test]
fn test_event_below_cap_is_not_full() {
    let report: CapacityReport = evaluate_capacity(Some(3), 2);
    assert!(!report.is_full());
    assert_eq!(report.remaining(), Some(1));
}

#[test]
fn test_event_at_cap_is_full() {
    let report: CapacityReport = evaluate_capacity(Some(3), 3);
    assert!(report.is_full());
    assert_eq!(report.remaining(), Some(0));
}

#[test]
fn test_overshoot_still_reports_full_with_zero_remaining() {
    // Counts above the cap can exist in data predating the capacity guard.
    let report: CapacityReport = evaluate_capacity(Some(2), 5);
    assert!(report.is_full());
    assert_eq!(report.remaining(), Some(0));
}

#[test]
fn test_unlimited_event_is_never_full() {
    let report: CapacityReport = evaluate_capacity(None, 10_000);
    assert!(!report.is_full());
    assert_eq!(report.remaining(), None);
}

#[test]
fn test_empty_event_with_cap_has_all_slots_remaining() {
    let report: CapacityReport = evaluate_capacity(Some(4), 0);
    assert!(!report.is_full());
    assert_eq!(report.remaining(), Some(4));
}
