// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Kanban board: the caller-owned application list, grouped into stage
//! columns.
//!
//! The board folds engine results into its list and notifies its observer;
//! it never talks to the network except through the [`ApplicationsApi`]
//! handle it is passed per call. Duplicate-submit prevention (disabling a
//! card while its request is in flight) stays with the embedding UI.

use hw_core::pipeline::{self, BulkOptions, BulkOutcome, BulkValidation, ChangeOptions};
use hw_core::{Application, ApplicationsApi, Error, Result, Stage};

use crate::events::BoardObserver;

/// A hiring pipeline board over a list of applications.
#[derive(Debug)]
pub struct Board<O: BoardObserver = ()> {
    applications: Vec<Application>,
    observer: O,
}

impl Board {
    /// Creates a board with no observer.
    pub fn new(applications: Vec<Application>) -> Self {
        Board::with_observer(applications, ())
    }
}

impl<O: BoardObserver> Board<O> {
    /// Creates a board that notifies `observer` after each change.
    pub fn with_observer(applications: Vec<Application>, observer: O) -> Self {
        Board {
            applications,
            observer,
        }
    }

    /// All applications, in listing order.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Replace the whole list from a fresh listing fetch.
    pub fn reload(&mut self, applications: Vec<Application>) {
        self.applications = applications;
    }

    /// The board's columns: every stage in pipeline order with its cards.
    pub fn columns(&self) -> Vec<(Stage, Vec<&Application>)> {
        Stage::ALL
            .iter()
            .map(|&stage| {
                (
                    stage,
                    self.applications
                        .iter()
                        .filter(|a| a.stage == stage)
                        .collect(),
                )
            })
            .collect()
    }

    /// Complete a finalized drag-and-drop and fold the result in.
    ///
    /// A drop onto the card's own column changes nothing and notifies
    /// nobody.
    pub fn move_card(
        &mut self,
        api: &impl ApplicationsApi,
        source_id: &str,
        destination: Stage,
        opts: &ChangeOptions,
    ) -> Result<&Application> {
        let moved = pipeline::complete_drop(api, &self.applications, source_id, destination, opts)?;
        let idx = self.index_of(source_id)?;
        if moved != self.applications[idx] {
            self.applications[idx] = moved;
            self.observer.on_stage_changed(&self.applications[idx]);
        }
        Ok(&self.applications[idx])
    }

    /// Partition a selection for the bulk-move confirmation dialog.
    ///
    /// Pure and synchronous; re-run whenever the selection or the target
    /// stage changes.
    pub fn validate_selection(
        &self,
        selection_ids: &[String],
        new_stage: Stage,
    ) -> BulkValidation<'_> {
        pipeline::validate_bulk_targets(
            self.applications
                .iter()
                .filter(|a| selection_ids.iter().any(|id| id == &a.id)),
            new_stage,
        )
    }

    /// Move every movable application in the selection in one batch.
    pub fn bulk_move(
        &mut self,
        api: &impl ApplicationsApi,
        selection_ids: &[String],
        new_stage: Stage,
        opts: &BulkOptions,
    ) -> Result<BulkOutcome> {
        let selected = self.selected(selection_ids);
        let outcome = pipeline::bulk_change_stage(api, &selected, new_stage, opts)?;
        for updated in &outcome.updated {
            if let Ok(idx) = self.index_of(&updated.id) {
                self.applications[idx] = updated.clone();
            }
        }
        self.observer.on_bulk_stage_changed(&outcome);
        Ok(outcome)
    }

    fn selected(&self, selection_ids: &[String]) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|a| selection_ids.iter().any(|id| id == &a.id))
            .cloned()
            .collect()
    }

    fn index_of(&self, application_id: &str) -> Result<usize> {
        self.applications
            .iter()
            .position(|a| a.id == application_id)
            .ok_or_else(|| Error::ApplicationNotFound(application_id.to_string()))
    }
}

#[cfg(test)]
#[path = "kanban_tests.rs"]
mod tests;
