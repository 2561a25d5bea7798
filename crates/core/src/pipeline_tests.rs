// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use super::*;
use crate::api::BulkReceipt;
use chrono::Utc;
use yare::parameterized;

/// Records every request; answers update_stage with the stage applied and
/// bulk_update_stage with a configurable receipt.
struct RecordingApps {
    single_calls: RefCell<Vec<(String, StageChange)>>,
    bulk_calls: RefCell<Vec<BulkStageChange>>,
    bulk_receipt: Option<BulkReceipt>,
}

impl RecordingApps {
    fn new() -> Self {
        RecordingApps {
            single_calls: RefCell::new(Vec::new()),
            bulk_calls: RefCell::new(Vec::new()),
            bulk_receipt: None,
        }
    }

    fn with_receipt(receipt: BulkReceipt) -> Self {
        RecordingApps {
            bulk_receipt: Some(receipt),
            ..Self::new()
        }
    }

    fn request_count(&self) -> usize {
        self.single_calls.borrow().len() + self.bulk_calls.borrow().len()
    }
}

impl ApplicationsApi for RecordingApps {
    fn update_stage(&self, application_id: &str, change: &StageChange) -> Result<Application> {
        self.single_calls
            .borrow_mut()
            .push((application_id.to_string(), change.clone()));
        Ok(app(application_id, "Candidate", change.new_status))
    }

    fn bulk_update_stage(&self, change: &BulkStageChange) -> Result<BulkReceipt> {
        self.bulk_calls.borrow_mut().push(change.clone());
        Ok(self.bulk_receipt.clone().unwrap_or(BulkReceipt {
            updated_ids: change.application_ids.clone(),
            failed_ids: Vec::new(),
        }))
    }
}

fn app(id: &str, name: &str, stage: Stage) -> Application {
    Application {
        id: id.into(),
        candidate_name: name.into(),
        job_title: "Backend Engineer".into(),
        stage,
        fit_index: None,
        applied_at: Utc::now(),
        tags: Vec::new(),
        assignee: None,
    }
}

#[test]
fn change_stage_issues_one_request() {
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", Stage::Reviewing);

    let moved = change_stage(&api, &a, Stage::PhoneScreen, &ChangeOptions::default()).unwrap();

    assert_eq!(moved.stage, Stage::PhoneScreen);
    assert_eq!(api.request_count(), 1);
    let calls = api.single_calls.borrow();
    assert_eq!(calls[0].0, "a-1");
    assert_eq!(calls[0].1.new_status, Stage::PhoneScreen);
}

#[parameterized(
    hired_to_offer = { Stage::Hired, Stage::Offer },
    hired_to_rejected = { Stage::Hired, Stage::Rejected },
    rejected_to_new = { Stage::Rejected, Stage::New },
    rejected_to_hired = { Stage::Rejected, Stage::Hired },
)]
fn change_stage_from_terminal_fails(from: Stage, to: Stage) {
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", from);

    assert!(matches!(
        change_stage(&api, &a, to, &ChangeOptions::default()),
        Err(Error::TerminalStage { .. })
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn change_stage_noop_skips_network() {
    // dropping a card onto its own column
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", Stage::Reviewing);

    let result = change_stage(&api, &a, Stage::Reviewing, &ChangeOptions::default()).unwrap();

    assert_eq!(result, a);
    assert_eq!(api.request_count(), 0);
}

#[parameterized(
    missing = { None },
    empty = { Some("") },
    whitespace = { Some("   ") },
)]
fn change_stage_to_rejected_requires_reason(reason: Option<&str>) {
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", Stage::FinalInterview);
    let opts = ChangeOptions {
        reason: reason.map(String::from),
        ..Default::default()
    };

    assert!(matches!(
        change_stage(&api, &a, Stage::Rejected, &opts),
        Err(Error::MissingReason)
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn change_stage_to_rejected_with_reason_succeeds() {
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", Stage::FinalInterview);
    let opts = ChangeOptions::default()
        .with_reason("  position filled  ")
        .with_email()
        .with_custom_message("Thank you for interviewing with us.");

    let moved = change_stage(&api, &a, Stage::Rejected, &opts).unwrap();

    assert_eq!(moved.stage, Stage::Rejected);
    let calls = api.single_calls.borrow();
    assert_eq!(calls[0].1.reason.as_deref(), Some("position filled"));
    assert!(calls[0].1.send_email);
    assert_eq!(
        calls[0].1.custom_message.as_deref(),
        Some("Thank you for interviewing with us.")
    );
}

#[test]
fn change_stage_backward_move_allowed() {
    let api = RecordingApps::new();
    let a = app("a-1", "Dana", Stage::Offer);

    let moved = change_stage(&api, &a, Stage::Reviewing, &ChangeOptions::default()).unwrap();
    assert_eq!(moved.stage, Stage::Reviewing);
}

#[test]
fn complete_drop_resolves_card_and_moves_it() {
    let api = RecordingApps::new();
    let apps = vec![
        app("a-1", "Dana", Stage::New),
        app("a-2", "Femi", Stage::Reviewing),
    ];

    let moved =
        complete_drop(&api, &apps, "a-2", Stage::PhoneScreen, &ChangeOptions::default()).unwrap();

    assert_eq!(moved.id, "a-2");
    assert_eq!(moved.stage, Stage::PhoneScreen);
    assert_eq!(api.request_count(), 1);
}

#[test]
fn complete_drop_unknown_card_fails() {
    let api = RecordingApps::new();
    let apps = vec![app("a-1", "Dana", Stage::New)];

    assert!(matches!(
        complete_drop(&api, &apps, "a-9", Stage::Offer, &ChangeOptions::default()),
        Err(Error::ApplicationNotFound(id)) if id == "a-9"
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn complete_drop_onto_own_column_is_a_noop() {
    let api = RecordingApps::new();
    let apps = vec![app("a-1", "Dana", Stage::Reviewing)];

    let result =
        complete_drop(&api, &apps, "a-1", Stage::Reviewing, &ChangeOptions::default()).unwrap();

    assert_eq!(result, apps[0]);
    assert_eq!(api.request_count(), 0);
}

#[test]
fn validate_bulk_targets_is_a_pure_partition() {
    let apps = vec![
        app("a-1", "Dana", Stage::New),
        app("a-2", "Femi", Stage::Hired),
        app("a-3", "Iris", Stage::Reviewing),
        app("a-4", "Joao", Stage::Rejected),
        app("a-5", "Kaia", Stage::Rejected),
    ];

    let partition = validate_bulk_targets(&apps, Stage::PhoneScreen);

    assert_eq!(partition.valid.len() + partition.invalid.len(), apps.len());
    assert!(partition.valid.iter().all(|a| !a.stage.is_terminal()));
    assert!(partition.invalid.iter().all(|a| a.stage.is_terminal()));
    assert_eq!(
        partition.blocked_summary().unwrap(),
        "1 already hired, 2 already rejected"
    );
}

#[test]
fn validate_bulk_targets_all_valid_has_no_summary() {
    let apps = vec![app("a-1", "Dana", Stage::New)];
    let partition = validate_bulk_targets(&apps, Stage::Reviewing);
    assert!(partition.blocked_summary().is_none());
}

#[test]
fn bulk_change_mixed_selection_with_continue() {
    // the movable application goes through, the hired sibling is skipped
    let api = RecordingApps::new();
    let apps = vec![
        app("a-1", "Dana", Stage::Reviewing),
        app("a-2", "Femi", Stage::Hired),
    ];
    let opts = BulkOptions::default().continue_with_valid();

    let outcome = bulk_change_stage(&api, &apps, Stage::PhoneScreen, &opts).unwrap();

    assert_eq!(outcome.updated.len(), 1);
    assert_eq!(outcome.updated[0].id, "a-1");
    assert_eq!(outcome.updated[0].stage, Stage::PhoneScreen);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].id, "a-2");
    assert_eq!(outcome.skipped[0].stage, Stage::Hired);

    let bulk_calls = api.bulk_calls.borrow();
    assert_eq!(bulk_calls.len(), 1);
    assert_eq!(bulk_calls[0].application_ids, vec!["a-1".to_string()]);
}

#[test]
fn bulk_change_mixed_selection_without_continue_is_refused() {
    let api = RecordingApps::new();
    let apps = vec![
        app("a-1", "Dana", Stage::Reviewing),
        app("a-2", "Femi", Stage::Hired),
    ];

    assert!(matches!(
        bulk_change_stage(&api, &apps, Stage::PhoneScreen, &BulkOptions::default()),
        Err(Error::BulkNeedsConfirmation(_))
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn bulk_change_with_zero_valid_never_issues_a_request() {
    let api = RecordingApps::new();
    let apps = vec![
        app("a-1", "Dana", Stage::Hired),
        app("a-2", "Femi", Stage::Rejected),
    ];

    assert!(matches!(
        bulk_change_stage(&api, &apps, Stage::Offer, &BulkOptions::default()),
        Err(Error::NoValidTargets(_))
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn bulk_change_empty_selection_is_refused() {
    let api = RecordingApps::new();

    assert!(matches!(
        bulk_change_stage(&api, &[], Stage::Offer, &BulkOptions::default()),
        Err(Error::NoValidTargets(_))
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn bulk_reject_requires_reason() {
    let api = RecordingApps::new();
    let apps = vec![app("a-1", "Dana", Stage::Reviewing)];

    assert!(matches!(
        bulk_change_stage(&api, &apps, Stage::Rejected, &BulkOptions::default()),
        Err(Error::MissingReason)
    ));
    assert_eq!(api.request_count(), 0);
}

#[test]
fn bulk_reject_with_reason_sends_one_batch() {
    let api = RecordingApps::new();
    let apps = vec![
        app("a-1", "Dana", Stage::Reviewing),
        app("a-2", "Femi", Stage::Offer),
    ];
    let opts = BulkOptions::default()
        .with_reason("position filled")
        .with_email();

    let outcome = bulk_change_stage(&api, &apps, Stage::Rejected, &opts).unwrap();

    assert_eq!(outcome.updated.len(), 2);
    assert!(outcome.updated.iter().all(|a| a.stage == Stage::Rejected));
    let bulk_calls = api.bulk_calls.borrow();
    assert_eq!(bulk_calls.len(), 1);
    assert_eq!(bulk_calls[0].reason.as_deref(), Some("position filled"));
    assert!(bulk_calls[0].send_email);
}

#[test]
fn bulk_change_surfaces_server_failures_whole() {
    // no partial success is synthesized when the server rejects part of
    // the batch
    let api = RecordingApps::with_receipt(BulkReceipt {
        updated_ids: vec!["a-1".into()],
        failed_ids: vec!["a-2".into()],
    });
    let apps = vec![
        app("a-1", "Dana", Stage::Reviewing),
        app("a-2", "Femi", Stage::Offer),
    ];

    let err =
        bulk_change_stage(&api, &apps, Stage::PhoneScreen, &BulkOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::BulkRejected { succeeded: 1, ref failed_ids }
            if failed_ids == &["a-2".to_string()]
    ));
}

#[test]
fn bulk_change_counts_unacknowledged_ids_as_failed() {
    // the receipt omits a-2 from both lists; it must not silently vanish
    // from the outcome
    let api = RecordingApps::with_receipt(BulkReceipt {
        updated_ids: vec!["a-1".into()],
        failed_ids: Vec::new(),
    });
    let apps = vec![
        app("a-1", "Dana", Stage::Reviewing),
        app("a-2", "Femi", Stage::Offer),
    ];

    let err =
        bulk_change_stage(&api, &apps, Stage::PhoneScreen, &BulkOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::BulkRejected { succeeded: 1, ref failed_ids }
            if failed_ids == &["a-2".to_string()]
    ));
}
