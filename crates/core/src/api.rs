// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator contracts for the external mutation APIs.
//!
//! The engines in [`crate::notes`] and [`crate::pipeline`] validate locally
//! and then issue exactly one request through one of these traits. The
//! traits are implemented over HTTP in hw-client and by recording fakes in
//! tests; the engines never know the difference.
//!
//! The server stays authoritative: a request that passed every local check
//! can still come back rejected (for example when the edit window expires
//! between the client check and the server check), and that answer wins.

use serde::{Deserialize, Serialize};

use crate::application::{Application, Stage};
use crate::error::Result;
use crate::note::{Note, NoteDraft};

/// Wire payload for a single-application stage change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageChange {
    /// The destination stage.
    pub new_status: Stage,
    /// Rejection reason; required when `new_status` is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether the candidate should be emailed about the change.
    pub send_email: bool,
    /// Optional custom email body. Carried opaquely; the server decides how
    /// it combines with `reason` in outbound mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

/// Wire payload for a bulk stage change.
///
/// All valid applications go in one batch; the engine never splits a bulk
/// move into per-item requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkStageChange {
    /// The applications to move.
    pub application_ids: Vec<String>,
    /// The destination stage for every application in the batch.
    pub new_status: Stage,
    /// Rejection reason; required when `new_status` is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether the candidates should be emailed about the change.
    pub send_email: bool,
    /// Optional custom email body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

/// Server response to a bulk stage change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkReceipt {
    /// Applications the server updated.
    pub updated_ids: Vec<String>,
    /// Applications the server refused, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_ids: Vec<String>,
}

/// The external notes API.
pub trait NotesApi {
    /// Create a note on an application. Returns the authoritative note with
    /// the server-assigned id and timestamps.
    fn create_note(&self, application_id: &str, draft: &NoteDraft) -> Result<Note>;

    /// Replace a note's content. Returns the note with refreshed
    /// `updated_at`. There is deliberately no way to send a new visibility
    /// or note type.
    fn update_note(&self, note_id: &str, content: &str) -> Result<Note>;

    /// Delete a note.
    fn delete_note(&self, note_id: &str) -> Result<()>;

    /// List all notes for an application.
    fn list_notes(&self, application_id: &str) -> Result<Vec<Note>>;
}

/// The external applications API.
pub trait ApplicationsApi {
    /// Change one application's stage. Returns the updated application.
    fn update_stage(&self, application_id: &str, change: &StageChange) -> Result<Application>;

    /// Change many applications' stage in one batch request.
    fn bulk_update_stage(&self, change: &BulkStageChange) -> Result<BulkReceipt>;
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
