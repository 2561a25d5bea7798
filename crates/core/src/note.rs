// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaboration note types.
//!
//! Notes are timestamped text annotations on an application. Visibility and
//! note type are fixed at creation time; only the content (and, server-side,
//! `updated_at`) can change, and only within the edit window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Who can see a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to the author only.
    Private,
    /// Visible to everyone on the hiring team.
    Team,
}

impl Visibility {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Team => "team",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "team" => Ok(Visibility::Team),
            _ => Err(Error::InvalidVisibility(s.to_string())),
        }
    }
}

/// Classification of notes by their purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    /// General internal remark.
    Internal,
    /// Structured feedback on the candidate.
    Feedback,
    /// Notes taken during an interview.
    InterviewNotes,
}

impl NoteType {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Internal => "internal",
            NoteType::Feedback => "feedback",
            NoteType::InterviewNotes => "interview_notes",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(NoteType::Internal),
            "feedback" => Ok(NoteType::Feedback),
            "interview_notes" => Ok(NoteType::InterviewNotes),
            _ => Err(Error::InvalidNoteType(s.to_string())),
        }
    }
}

/// A text note attached to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier.
    pub id: String,
    /// The application this note belongs to.
    pub application_id: String,
    /// The user who wrote the note. Only the author may edit or delete it.
    pub author_id: String,
    /// The note text (1-5000 chars after trimming).
    pub content: String,
    /// Who can see the note. Immutable after creation.
    pub visibility: Visibility,
    /// What kind of note this is. Immutable after creation.
    pub note_type: NoteType,
    /// When the note was created. Anchors the edit window.
    pub created_at: DateTime<Utc>,
    /// When the note was last edited. Equals `created_at` until first edit.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new note.
///
/// Visibility and type are chosen here and never change afterwards; the
/// update payload deliberately has no field for either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// The note text. Trimmed and validated before the request is issued.
    pub content: String,
    /// Who can see the note.
    pub visibility: Visibility,
    /// What kind of note this is.
    pub note_type: NoteType,
}

impl NoteDraft {
    /// Creates a draft with the given content, team visibility, and the
    /// internal note type.
    pub fn new(content: impl Into<String>) -> Self {
        NoteDraft {
            content: content.into(),
            visibility: Visibility::Team,
            note_type: NoteType::Internal,
        }
    }

    /// Sets the visibility for this draft (builder pattern).
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the note type for this draft (builder pattern).
    pub fn with_note_type(mut self, note_type: NoteType) -> Self {
        self.note_type = note_type;
        self
    }
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
