// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hw-core operations.
//!
//! Local validation failures (content, authorship, edit window, terminal
//! stages) are returned before any network call is made. Transport and API
//! failures come back from the collaborator implementations; callers can use
//! [`Error::is_retryable`] to decide whether "try again" is useful advice.

use thiserror::Error;

/// All possible errors that can occur in hw-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("note content cannot be empty")]
    EmptyContent,

    #[error("note content too long ({actual} chars, max {max})")]
    ContentTooLong { actual: usize, max: usize },

    #[error("only the author of a note can edit or delete it")]
    NotAuthor,

    #[error("the edit window for this note has expired\n  hint: notes can only be edited or deleted within 5 minutes of creation")]
    EditWindowExpired,

    #[error("invalid visibility: '{0}'\n  hint: valid visibilities are: private, team")]
    InvalidVisibility(String),

    #[error("invalid note type: '{0}'\n  hint: valid types are: internal, feedback, interview_notes")]
    InvalidNoteType(String),

    #[error("invalid stage: '{0}'\n  hint: valid stages are: new, reviewing, phone_screen, technical_interview, final_interview, offer, hired, rejected")]
    InvalidStage(String),

    #[error("cannot move an application out of '{stage}'\n  hint: from '{stage}' you can go to: {valid_targets}")]
    TerminalStage {
        stage: String,
        valid_targets: String,
    },

    #[error("a rejection reason is required to move an application to 'rejected'")]
    MissingReason,

    #[error("application not found: {0}")]
    ApplicationNotFound(String),

    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("none of the selected applications can be moved\n  hint: {0}")]
    NoValidTargets(String),

    #[error("bulk update needs confirmation: {0}\n  hint: confirm to continue with the movable applications only")]
    BulkNeedsConfirmation(String),

    #[error("bulk update failed: server rejected {} of {} applications", failed_ids.len(), succeeded + failed_ids.len())]
    BulkRejected {
        succeeded: usize,
        failed_ids: Vec<String>,
    },

    #[error("server error ({status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if retrying the operation might succeed.
    ///
    /// Validation, authorization, and window errors are deterministic;
    /// retrying them without changing the input will fail the same way.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// A specialized Result type for hw-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
