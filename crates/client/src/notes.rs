// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the notes API.

use serde::Serialize;

use hw_core::{Note, NoteDraft, NoteType, NotesApi, Result, Visibility};

use crate::http::{ApiConfig, Http};

/// Creation request body. The update body deliberately carries content only;
/// visibility and type cannot change after creation.
#[derive(Debug, Serialize)]
struct CreateNoteBody<'a> {
    application_id: &'a str,
    content: &'a str,
    visibility: Visibility,
    note_type: NoteType,
}

#[derive(Debug, Serialize)]
struct UpdateNoteBody<'a> {
    content: &'a str,
}

/// Notes API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    http: Http,
}

impl HttpNotesApi {
    /// Builds a client for the given backend.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(HttpNotesApi {
            http: Http::new(config)?,
        })
    }
}

impl NotesApi for HttpNotesApi {
    fn create_note(&self, application_id: &str, draft: &NoteDraft) -> Result<Note> {
        self.http.post_json(
            "/notes",
            &CreateNoteBody {
                application_id,
                content: &draft.content,
                visibility: draft.visibility,
                note_type: draft.note_type,
            },
        )
    }

    fn update_note(&self, note_id: &str, content: &str) -> Result<Note> {
        self.http
            .patch_json(&format!("/notes/{}", note_id), &UpdateNoteBody { content })
    }

    fn delete_note(&self, note_id: &str) -> Result<()> {
        self.http.delete(&format!("/notes/{}", note_id))
    }

    fn list_notes(&self, application_id: &str) -> Result<Vec<Note>> {
        self.http
            .get_json("/notes", &[("application_id", application_id)])
    }
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
