// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hw-core: domain core for the hirewire applicant tracker
//!
//! This crate provides the two engines behind the employer board: the note
//! lifecycle manager (create, time-boxed edit, delete) and the pipeline
//! transition engine (single drag moves and bulk moves), plus the models,
//! validation, and collaborator contracts they share.
//!
//! The engines own no state and no clock: they validate, issue at most one
//! request through a collaborator trait, and return values for the caller
//! (hw-board) to fold into its own collections.

pub mod api;
pub mod application;
pub mod error;
pub mod note;
pub mod notes;
pub mod pipeline;
pub mod validate;

pub use api::{ApplicationsApi, BulkReceipt, BulkStageChange, NotesApi, StageChange};
pub use application::{Application, Stage};
pub use error::{Error, Result};
pub use note::{Note, NoteDraft, NoteType, Visibility};
pub use pipeline::{BulkOptions, BulkOutcome, BulkValidation, ChangeOptions};
pub use validate::{
    is_within_edit_window, remaining_edit_time, validate_content, EDIT_WINDOW_SECS,
    MAX_CONTENT_LENGTH,
};
