// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Content validation and edit-window arithmetic.
//!
//! Timing here is sampled, never cached: every check takes `now` as an
//! argument and callers re-evaluate on each tick of their own countdown
//! timer. The engine holds no clock.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Maximum note content length in characters, after trimming.
pub const MAX_CONTENT_LENGTH: usize = 5000;

/// How long a note remains editable after creation, in seconds.
pub const EDIT_WINDOW_SECS: i64 = 300;

/// Validate and trim note content.
///
/// Returns the trimmed content on success. Empty-after-trim content and
/// content over [`MAX_CONTENT_LENGTH`] chars fail before any network call.
pub fn validate_content(content: &str) -> Result<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyContent);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_CONTENT_LENGTH {
        return Err(Error::ContentTooLong {
            actual: chars,
            max: MAX_CONTENT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Seconds left in the edit window for a note created at `created_at`.
///
/// Never negative; clamps to 0 once the window has elapsed.
pub fn remaining_edit_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - created_at).num_seconds();
    (EDIT_WINDOW_SECS - elapsed).max(0)
}

/// Returns true if a note created at `created_at` is still editable at `now`.
pub fn is_within_edit_window(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    remaining_edit_time(created_at, now) > 0
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
