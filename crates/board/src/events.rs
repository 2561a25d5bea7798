// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observer contracts invoked after successful mutations.
//!
//! The feed and board call these after folding a result into their own
//! collection; embedding UIs wire them into toasts, counters, or anything
//! else. Every method defaults to a no-op, and `()` is the null observer.

use hw_core::pipeline::BulkOutcome;
use hw_core::{Application, Note};

/// Callbacks for note list changes.
pub trait NoteObserver {
    /// A note was created and prepended to the feed.
    fn on_note_created(&mut self, _note: &Note) {}

    /// A note's content was edited in place.
    fn on_note_updated(&mut self, _note: &Note) {}

    /// A note was deleted and removed from the feed.
    fn on_note_deleted(&mut self, _note_id: &str) {}
}

/// Callbacks for board changes.
pub trait BoardObserver {
    /// One application changed stage.
    fn on_stage_changed(&mut self, _application: &Application) {}

    /// A bulk move completed; `skipped` holds the terminal items that were
    /// excluded before the request.
    fn on_bulk_stage_changed(&mut self, _outcome: &BulkOutcome) {}
}

impl NoteObserver for () {}
impl BoardObserver for () {}
