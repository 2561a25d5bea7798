// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application (pipeline item) types.
//!
//! An application is a candidate moving through the hiring pipeline. The
//! stage graph is lenient rather than linear: any non-terminal stage may move
//! to any other stage, including backward, but `hired` and `rejected` have no
//! outgoing transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Pipeline stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Just applied, nobody has looked yet.
    New,
    /// Under review by the hiring team.
    Reviewing,
    /// Phone screen scheduled or in progress.
    PhoneScreen,
    /// Technical interview round.
    TechnicalInterview,
    /// Final interview round.
    FinalInterview,
    /// Offer extended.
    Offer,
    /// Offer accepted. Terminal.
    Hired,
    /// Application rejected. Terminal; entering requires a reason.
    Rejected,
}

impl Stage {
    /// All stages in pipeline (board column) order.
    pub const ALL: [Stage; 8] = [
        Stage::New,
        Stage::Reviewing,
        Stage::PhoneScreen,
        Stage::TechnicalInterview,
        Stage::FinalInterview,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
    ];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Reviewing => "reviewing",
            Stage::PhoneScreen => "phone_screen",
            Stage::TechnicalInterview => "technical_interview",
            Stage::FinalInterview => "final_interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
        }
    }

    /// Returns true if this stage has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Hired | Stage::Rejected)
    }

    /// Returns true if this stage is still in play (not hired/rejected).
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Check if a transition from this stage to target is valid.
    ///
    /// Any non-terminal stage may move to any other stage (backward moves
    /// included); self-transitions are no-ops, not transitions.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        !self.is_terminal() && *self != target
    }

    /// Returns true if entering this stage requires a reason.
    pub fn requires_reason(&self) -> bool {
        matches!(self, Stage::Rejected)
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        if self.is_terminal() {
            return "none (terminal stage)".to_string();
        }
        let mut parts = Vec::new();
        for stage in Stage::ALL {
            if stage == *self {
                continue;
            }
            if stage.requires_reason() {
                parts.push(format!("{} (with reason)", stage));
            } else {
                parts.push(stage.to_string());
            }
        }
        parts.join(", ")
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Stage::New),
            "reviewing" => Ok(Stage::Reviewing),
            "phone_screen" => Ok(Stage::PhoneScreen),
            "technical_interview" => Ok(Stage::TechnicalInterview),
            "final_interview" => Ok(Stage::FinalInterview),
            "offer" => Ok(Stage::Offer),
            "hired" => Ok(Stage::Hired),
            "rejected" => Ok(Stage::Rejected),
            _ => Err(Error::InvalidStage(s.to_string())),
        }
    }
}

/// A candidate's application to a job, as observed by the board.
///
/// Everything except `stage` is display metadata as far as the transition
/// engine is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Server-assigned identifier.
    pub id: String,
    /// Candidate display name.
    pub candidate_name: String,
    /// Title of the job applied to.
    pub job_title: String,
    /// Current pipeline stage.
    pub stage: Stage,
    /// Computed candidate/job fit score (0-100), if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_index: Option<u8>,
    /// When the candidate applied.
    pub applied_at: DateTime<Utc>,
    /// Free-form labels attached by the team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Team member responsible for this application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl Application {
    /// Returns a copy of this application with the stage replaced.
    pub fn with_stage(&self, stage: Stage) -> Self {
        Application {
            stage,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod tests;
