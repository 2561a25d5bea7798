// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline stage transitions: single drag moves and bulk moves.
//!
//! The stage graph is lenient (any non-terminal stage to any other stage)
//! with two hard rules enforced here before any request goes out: nothing
//! leaves `hired` or `rejected`, and nothing enters `rejected` without a
//! reason. The drag integration is a finalized `(id, destination)` pair; the
//! engine has no idea what pointer events produced it.

use std::collections::HashSet;

use crate::api::{ApplicationsApi, BulkStageChange, StageChange};
use crate::application::{Application, Stage};
use crate::error::{Error, Result};

/// Options accompanying a single stage change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeOptions {
    /// Rejection reason. Required when the destination is rejected.
    pub reason: Option<String>,
    /// Whether the candidate should be emailed about the change.
    pub send_email: bool,
    /// Optional custom email body, carried opaquely to the server.
    pub custom_message: Option<String>,
}

impl ChangeOptions {
    /// Sets the rejection reason (builder pattern).
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Enables candidate email for this change (builder pattern).
    pub fn with_email(mut self) -> Self {
        self.send_email = true;
        self
    }

    /// Sets a custom email body (builder pattern).
    pub fn with_custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    fn trimmed_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Options accompanying a bulk stage change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkOptions {
    /// Rejection reason for the whole batch. Required when the destination
    /// is rejected.
    pub reason: Option<String>,
    /// Whether the candidates should be emailed about the change.
    pub send_email: bool,
    /// Optional custom email body, carried opaquely to the server.
    pub custom_message: Option<String>,
    /// Proceed with the movable subset when some selected applications are
    /// already terminal. When false, a mixed selection is refused locally so
    /// the caller can show the summary and re-confirm.
    pub continue_with_valid: bool,
}

impl BulkOptions {
    /// Sets the rejection reason (builder pattern).
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Enables candidate email for this change (builder pattern).
    pub fn with_email(mut self) -> Self {
        self.send_email = true;
        self
    }

    /// Sets a custom email body (builder pattern).
    pub fn with_custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Allows the movable subset to proceed past terminal items
    /// (builder pattern).
    pub fn continue_with_valid(mut self) -> Self {
        self.continue_with_valid = true;
        self
    }

    fn trimmed_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Partition of a bulk selection into movable and blocked applications.
///
/// Always a pure partition: every input application lands in exactly one of
/// the two lists, and an application is blocked exactly when its current
/// stage is terminal.
#[derive(Debug, Clone)]
pub struct BulkValidation<'a> {
    /// Applications that can be moved.
    pub valid: Vec<&'a Application>,
    /// Applications that cannot be moved (already hired or rejected).
    pub invalid: Vec<&'a Application>,
}

impl BulkValidation<'_> {
    /// Human-readable summary of why applications were excluded, grouped by
    /// the terminal stage that blocked them. None when nothing was excluded.
    pub fn blocked_summary(&self) -> Option<String> {
        if self.invalid.is_empty() {
            return None;
        }
        let hired = self
            .invalid
            .iter()
            .filter(|a| a.stage == Stage::Hired)
            .count();
        let rejected = self.invalid.len() - hired;
        let mut parts = Vec::new();
        if hired > 0 {
            parts.push(format!("{} already hired", hired));
        }
        if rejected > 0 {
            parts.push(format!("{} already rejected", rejected));
        }
        Some(parts.join(", "))
    }
}

/// Change one application's stage.
///
/// Terminal sources are refused with [`Error::TerminalStage`]; a drop onto
/// the application's current stage is a no-op that returns the application
/// unchanged with zero requests; moving to rejected without a non-empty
/// reason fails with [`Error::MissingReason`]. Otherwise exactly one update
/// request is issued and the server's updated application is returned.
pub fn change_stage(
    api: &impl ApplicationsApi,
    application: &Application,
    new_stage: Stage,
    opts: &ChangeOptions,
) -> Result<Application> {
    if application.stage.is_terminal() {
        return Err(Error::TerminalStage {
            stage: application.stage.to_string(),
            valid_targets: application.stage.valid_targets(),
        });
    }
    if new_stage == application.stage {
        tracing::debug!(
            application_id = %application.id,
            stage = %new_stage,
            "stage unchanged, skipping request"
        );
        return Ok(application.clone());
    }
    let reason = match opts.trimmed_reason() {
        None if new_stage.requires_reason() => return Err(Error::MissingReason),
        r => r.map(String::from),
    };
    api.update_stage(
        &application.id,
        &StageChange {
            new_status: new_stage,
            reason,
            send_email: opts.send_email,
            custom_message: opts.custom_message.clone(),
        },
    )
}

/// Complete a finalized drag-and-drop.
///
/// Resolves the dropped card by id and calls [`change_stage`] exactly once.
/// Invoked only when a drop lands, never on intermediate drag-over events.
pub fn complete_drop(
    api: &impl ApplicationsApi,
    applications: &[Application],
    source_id: &str,
    destination: Stage,
    opts: &ChangeOptions,
) -> Result<Application> {
    let application = applications
        .iter()
        .find(|a| a.id == source_id)
        .ok_or_else(|| Error::ApplicationNotFound(source_id.to_string()))?;
    change_stage(api, application, destination, opts)
}

/// Partition a bulk selection into movable and blocked applications.
///
/// Runs synchronously with no I/O; callers re-run it whenever the selection
/// or the target stage changes, before the user can confirm.
pub fn validate_bulk_targets<'a>(
    applications: impl IntoIterator<Item = &'a Application>,
    new_stage: Stage,
) -> BulkValidation<'a> {
    let (invalid, valid): (Vec<&Application>, Vec<&Application>) = applications
        .into_iter()
        .partition(|a| a.stage.is_terminal());
    tracing::debug!(
        target = %new_stage,
        valid = valid.len(),
        invalid = invalid.len(),
        "validated bulk selection"
    );
    BulkValidation { valid, invalid }
}

/// Result of a bulk stage change.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome {
    /// Applications that were moved, with their stage replaced.
    pub updated: Vec<Application>,
    /// Applications that were excluded (already terminal), unchanged.
    pub skipped: Vec<Application>,
}

/// Change many applications' stage in one batch request.
///
/// Refused locally, with zero requests, when there is nothing movable in the
/// selection, when terminal items are present without `continue_with_valid`,
/// or when a move to rejected has no reason. Otherwise every movable id goes
/// out in a single batch; there is no item-by-item fallback, and a server
/// receipt naming failed ids, or omitting sent ids from both lists, is
/// surfaced as [`Error::BulkRejected`] rather than being folded into a
/// partial success.
pub fn bulk_change_stage(
    api: &impl ApplicationsApi,
    applications: &[Application],
    new_stage: Stage,
    opts: &BulkOptions,
) -> Result<BulkOutcome> {
    let partition = validate_bulk_targets(applications, new_stage);
    let summary = partition.blocked_summary();
    if partition.valid.is_empty() {
        return Err(Error::NoValidTargets(
            summary.unwrap_or_else(|| "no applications selected".to_string()),
        ));
    }
    if let Some(summary) = summary {
        if !opts.continue_with_valid {
            return Err(Error::BulkNeedsConfirmation(summary));
        }
    }
    let reason = match opts.trimmed_reason() {
        None if new_stage.requires_reason() => return Err(Error::MissingReason),
        r => r.map(String::from),
    };

    let receipt = api.bulk_update_stage(&BulkStageChange {
        application_ids: partition.valid.iter().map(|a| a.id.clone()).collect(),
        new_status: new_stage,
        reason,
        send_email: opts.send_email,
        custom_message: opts.custom_message.clone(),
    })?;
    // an id the receipt acknowledges neither way counts as failed, so the
    // outcome always accounts for the whole batch
    let updated_ids: HashSet<&str> = receipt.updated_ids.iter().map(String::as_str).collect();
    let mut failed_ids = receipt.failed_ids.clone();
    failed_ids.extend(
        partition
            .valid
            .iter()
            .filter(|a| {
                !updated_ids.contains(a.id.as_str()) && !receipt.failed_ids.contains(&a.id)
            })
            .map(|a| a.id.clone()),
    );
    if !failed_ids.is_empty() {
        return Err(Error::BulkRejected {
            succeeded: receipt.updated_ids.len(),
            failed_ids,
        });
    }

    Ok(BulkOutcome {
        updated: partition
            .valid
            .iter()
            .map(|a| a.with_stage(new_stage))
            .collect(),
        skipped: partition.invalid.iter().map(|&a| a.clone()).collect(),
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
