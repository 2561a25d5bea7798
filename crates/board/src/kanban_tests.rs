// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use super::*;
use chrono::Utc;
use hw_core::api::{BulkReceipt, BulkStageChange, StageChange};

struct FakeApps {
    calls: RefCell<usize>,
}

impl FakeApps {
    fn new() -> Self {
        FakeApps {
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl ApplicationsApi for FakeApps {
    fn update_stage(&self, application_id: &str, change: &StageChange) -> Result<Application> {
        *self.calls.borrow_mut() += 1;
        Ok(app(application_id, "Candidate", change.new_status))
    }

    fn bulk_update_stage(&self, change: &BulkStageChange) -> Result<BulkReceipt> {
        *self.calls.borrow_mut() += 1;
        Ok(BulkReceipt {
            updated_ids: change.application_ids.clone(),
            failed_ids: Vec::new(),
        })
    }
}

#[derive(Default)]
struct RecordingObserver {
    single: Vec<String>,
    bulk: Vec<(usize, usize)>,
}

impl BoardObserver for RecordingObserver {
    fn on_stage_changed(&mut self, application: &Application) {
        self.single
            .push(format!("{} -> {}", application.id, application.stage));
    }

    fn on_bulk_stage_changed(&mut self, outcome: &BulkOutcome) {
        self.bulk.push((outcome.updated.len(), outcome.skipped.len()));
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

fn sample_board<O: BoardObserver>(observer: O) -> Board<O> {
    Board::with_observer(
        vec![
            app("a-1", "Dana", Stage::New),
            app("a-2", "Femi", Stage::Reviewing),
            app("a-3", "Iris", Stage::Hired),
        ],
        observer,
    )
}

#[test]
fn columns_cover_every_stage_in_order() {
    let board = sample_board(());
    let columns = board.columns();

    assert_eq!(columns.len(), 8);
    let stages: Vec<Stage> = columns.iter().map(|(s, _)| *s).collect();
    assert_eq!(stages, Stage::ALL.to_vec());
    assert_eq!(columns[0].1.len(), 1); // new
    assert_eq!(columns[1].1.len(), 1); // reviewing
    assert_eq!(columns[6].1.len(), 1); // hired
    assert_eq!(columns[3].1.len(), 0); // technical_interview
}

#[test]
fn move_card_folds_update_and_notifies() {
    let api = FakeApps::new();
    let mut board = sample_board(RecordingObserver::default());

    let moved = board
        .move_card(&api, "a-2", Stage::PhoneScreen, &ChangeOptions::default())
        .unwrap();

    assert_eq!(moved.stage, Stage::PhoneScreen);
    assert_eq!(board.applications()[1].stage, Stage::PhoneScreen);
    assert_eq!(board.observer.single, vec!["a-2 -> phone_screen"]);
    assert_eq!(api.calls(), 1);
}

#[test]
fn move_card_own_column_is_silent() {
    let api = FakeApps::new();
    let mut board = sample_board(RecordingObserver::default());

    board
        .move_card(&api, "a-2", Stage::Reviewing, &ChangeOptions::default())
        .unwrap();

    assert_eq!(api.calls(), 0);
    assert!(board.observer.single.is_empty());
}

#[test]
fn move_card_from_terminal_fails() {
    let api = FakeApps::new();
    let mut board = sample_board(());

    assert!(matches!(
        board.move_card(&api, "a-3", Stage::Offer, &ChangeOptions::default()),
        Err(Error::TerminalStage { .. })
    ));
    assert_eq!(board.applications()[2].stage, Stage::Hired);
}

#[test]
fn move_card_unknown_id_fails() {
    let api = FakeApps::new();
    let mut board = sample_board(());

    assert!(matches!(
        board.move_card(&api, "a-9", Stage::Offer, &ChangeOptions::default()),
        Err(Error::ApplicationNotFound(_))
    ));
}

#[test]
fn validate_selection_partitions_selection_only() {
    let board = sample_board(());
    let selection = vec!["a-2".to_string(), "a-3".to_string()];

    let partition = board.validate_selection(&selection, Stage::Offer);

    assert_eq!(partition.valid.len(), 1);
    assert_eq!(partition.valid[0].id, "a-2");
    assert_eq!(partition.invalid.len(), 1);
    assert_eq!(partition.invalid[0].id, "a-3");
    assert_eq!(partition.blocked_summary().unwrap(), "1 already hired");
}

#[test]
fn bulk_move_folds_updates_and_notifies() {
    let api = FakeApps::new();
    let mut board = sample_board(RecordingObserver::default());
    let selection = vec!["a-1".to_string(), "a-2".to_string(), "a-3".to_string()];
    let opts = BulkOptions::default().continue_with_valid();

    let outcome = board
        .bulk_move(&api, &selection, Stage::PhoneScreen, &opts)
        .unwrap();

    assert_eq!(outcome.updated.len(), 2);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(board.applications()[0].stage, Stage::PhoneScreen);
    assert_eq!(board.applications()[1].stage, Stage::PhoneScreen);
    assert_eq!(board.applications()[2].stage, Stage::Hired);
    assert_eq!(board.observer.bulk, vec![(2, 1)]);
    assert_eq!(api.calls(), 1);
}

#[test]
fn bulk_move_refusal_leaves_board_untouched() {
    let api = FakeApps::new();
    let mut board = sample_board(RecordingObserver::default());
    let selection = vec!["a-2".to_string(), "a-3".to_string()];

    assert!(matches!(
        board.bulk_move(&api, &selection, Stage::Offer, &BulkOptions::default()),
        Err(Error::BulkNeedsConfirmation(_))
    ));
    assert_eq!(api.calls(), 0);
    assert_eq!(board.applications()[1].stage, Stage::Reviewing);
    assert!(board.observer.bulk.is_empty());
}

#[test]
fn reload_replaces_listing() {
    let mut board = sample_board(());
    board.reload(vec![app("a-7", "Noor", Stage::Offer)]);

    assert_eq!(board.applications().len(), 1);
    assert_eq!(board.applications()[0].id, "a-7");
}
