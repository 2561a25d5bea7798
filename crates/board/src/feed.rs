// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The note feed: the caller-owned, newest-first note list for one
//! application.
//!
//! The feed owns the only copy of the list; the core engine never sees it.
//! Timing is sampled: the embedding UI drives a 1-second tick through
//! [`NoteFeed::edit_countdowns`] and a periodic [`NoteFeed::refresh`], and is
//! responsible for tearing both timers down on unmount. Nothing here retries
//! a failed request.

use chrono::{DateTime, Utc};

use hw_core::notes;
use hw_core::validate::remaining_edit_time;
use hw_core::{Error, Note, NoteDraft, NotesApi, Result};

use crate::events::NoteObserver;

/// How often callers should re-fetch the feed, in seconds.
pub const REFRESH_INTERVAL_SECS: u64 = 10;

/// How often callers should re-sample edit countdowns, in seconds.
pub const COUNTDOWN_TICK_SECS: u64 = 1;

/// Newest-first note list for a single application.
#[derive(Debug)]
pub struct NoteFeed<O: NoteObserver = ()> {
    application_id: String,
    notes: Vec<Note>,
    observer: O,
}

impl NoteFeed {
    /// Creates an empty feed with no observer.
    pub fn new(application_id: impl Into<String>) -> Self {
        NoteFeed::with_observer(application_id, ())
    }
}

impl<O: NoteObserver> NoteFeed<O> {
    /// Creates an empty feed that notifies `observer` after each change.
    pub fn with_observer(application_id: impl Into<String>, observer: O) -> Self {
        NoteFeed {
            application_id: application_id.into(),
            notes: Vec::new(),
            observer,
        }
    }

    /// The application this feed belongs to.
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// The notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Create a note and prepend it to the feed.
    pub fn create(&mut self, api: &impl NotesApi, draft: &NoteDraft) -> Result<&Note> {
        let note = notes::create_note(api, &self.application_id, draft)?;
        self.notes.insert(0, note);
        self.observer.on_note_created(&self.notes[0]);
        Ok(&self.notes[0])
    }

    /// Edit a note's content in place.
    ///
    /// Position in the feed is preserved; a no-op edit leaves the feed
    /// untouched and notifies nobody.
    pub fn update(
        &mut self,
        api: &impl NotesApi,
        note_id: &str,
        new_content: &str,
        acting_user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Note> {
        let idx = self.index_of(note_id)?;
        let updated = notes::update_note(api, &self.notes[idx], new_content, acting_user_id, now)?;
        if updated != self.notes[idx] {
            self.notes[idx] = updated;
            self.observer.on_note_updated(&self.notes[idx]);
        }
        Ok(&self.notes[idx])
    }

    /// Delete a note and remove it from the feed.
    pub fn delete(
        &mut self,
        api: &impl NotesApi,
        note_id: &str,
        acting_user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let idx = self.index_of(note_id)?;
        notes::delete_note(api, &self.notes[idx], acting_user_id, now)?;
        self.notes.remove(idx);
        self.observer.on_note_deleted(note_id);
        Ok(())
    }

    /// Replace the feed with the server's current list, newest first.
    ///
    /// This is the polling target; the caller invokes it every
    /// [`REFRESH_INTERVAL_SECS`].
    pub fn refresh(&mut self, api: &impl NotesApi) -> Result<()> {
        let mut fetched = api.list_notes(&self.application_id)?;
        fetched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(
            application_id = %self.application_id,
            count = fetched.len(),
            "refreshed note feed"
        );
        self.notes = fetched;
        Ok(())
    }

    /// Sample the remaining edit window for every note, newest first.
    ///
    /// Re-evaluated from `now` on every call; an expired note reads 0 and
    /// never goes back up.
    pub fn edit_countdowns(&self, now: DateTime<Utc>) -> Vec<(&str, i64)> {
        self.notes
            .iter()
            .map(|n| (n.id.as_str(), remaining_edit_time(n.created_at, now)))
            .collect()
    }

    fn index_of(&self, note_id: &str) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| Error::NoteNotFound(note_id.to_string()))
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
