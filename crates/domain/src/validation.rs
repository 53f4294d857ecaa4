// Copyright (C) 2026 Gigbook Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation shared by every entry point that creates or
//! mutates domain entities.

use crate::error::DomainError;

/// Maximum length of an act name in characters.
const MAX_ACT_NAME_LEN: usize = 100;

/// Validates an act display name.
///
/// # Errors
///
/// Returns an error if the name is empty, whitespace-only, or longer than
/// 100 characters.
pub fn validate_act_name(name: &str) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidActName(String::from(
            "name must not be empty",
        )));
    }
    if trimmed.chars().count() > MAX_ACT_NAME_LEN {
        return Err(DomainError::InvalidActName(format!(
            "name must be at most {MAX_ACT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates an organizer-configured slot cap.
///
/// `None` (unlimited) is always valid.
///
/// # Errors
///
/// Returns an error if a cap of zero is configured.
pub const fn validate_max_slots(max_slots: Option<u32>) -> Result<(), DomainError> {
    match max_slots {
        Some(0) => Err(DomainError::InvalidMaxSlots(0)),
        _ => Ok(()),
    }
}

/// Validates an organizer-supplied release reason.
///
/// # Errors
///
/// Returns an error if the reason is empty or whitespace-only.
pub fn validate_release_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::InvalidReleaseReason);
    }
    Ok(())
}
