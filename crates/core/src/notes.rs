// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note lifecycle operations: create, time-boxed edit, delete.
//!
//! Each operation runs every local check (author, edit window, content)
//! before touching the network, then issues at most one request through the
//! [`NotesApi`] collaborator. None of these functions mutate any list; the
//! caller folds the returned note into its own collection (hw-board's
//! `NoteFeed` does exactly that).
//!
//! No operation retries. A local pass is advisory only: the server re-checks
//! authorship and the window and its answer is authoritative.

use chrono::{DateTime, Utc};

use crate::api::NotesApi;
use crate::error::{Error, Result};
use crate::note::{Note, NoteDraft};
use crate::validate::{is_within_edit_window, validate_content};

/// Create a note on an application.
///
/// Content is trimmed and validated first; a validation failure aborts
/// locally with no network call. On success returns the authoritative note
/// (server-assigned id and timestamps). Visibility and type are fixed here
/// for the life of the note.
pub fn create_note(api: &impl NotesApi, application_id: &str, draft: &NoteDraft) -> Result<Note> {
    let content = validate_content(&draft.content)?;
    let draft = NoteDraft {
        content,
        visibility: draft.visibility,
        note_type: draft.note_type,
    };
    api.create_note(application_id, &draft)
}

/// Replace a note's content.
///
/// Fails locally with [`Error::NotAuthor`] for anyone but the author
/// (regardless of window state), with [`Error::EditWindowExpired`] once the
/// window has elapsed at `now`, and with a validation error for bad content.
/// A no-op submission (trimmed content identical to the current content)
/// short-circuits locally, returns the note unchanged, and issues no
/// request. Otherwise issues exactly one update request and returns the
/// server's note with refreshed `updated_at`.
pub fn update_note(
    api: &impl NotesApi,
    note: &Note,
    new_content: &str,
    acting_user_id: &str,
    now: DateTime<Utc>,
) -> Result<Note> {
    authorize(note, acting_user_id, now)?;
    let content = validate_content(new_content)?;
    if content == note.content {
        tracing::debug!(note_id = %note.id, "note update is a no-op, skipping request");
        return Ok(note.clone());
    }
    api.update_note(&note.id, &content)
}

/// Delete a note.
///
/// Same author and window checks as [`update_note`]; on success issues
/// exactly one delete request. The caller removes the note from its own
/// collection.
pub fn delete_note(
    api: &impl NotesApi,
    note: &Note,
    acting_user_id: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    authorize(note, acting_user_id, now)?;
    api.delete_note(&note.id)
}

/// Author check first, window check second: a non-author is told so even
/// when the window has also expired.
fn authorize(note: &Note, acting_user_id: &str, now: DateTime<Utc>) -> Result<()> {
    if acting_user_id != note.author_id {
        return Err(Error::NotAuthor);
    }
    if !is_within_edit_window(note.created_at, now) {
        return Err(Error::EditWindowExpired);
    }
    Ok(())
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
