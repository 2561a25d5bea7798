// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side card filtering and sorting.
//!
//! Pure view logic over a list of applications: nothing here mutates the
//! board or touches the network. Search matches candidate name and job
//! title case-insensitively; tag and assignee filters are exact.

use hw_core::{Application, Stage};

/// Filter criteria for board cards. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFilter {
    /// Case-insensitive substring match on candidate name or job title.
    pub search: Option<String>,
    /// Only cards in this stage.
    pub stage: Option<Stage>,
    /// Only cards carrying this tag.
    pub tag: Option<String>,
    /// Only cards assigned to this team member.
    pub assignee: Option<String>,
}

impl CardFilter {
    /// Sets the search text (builder pattern).
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts to one stage (builder pattern).
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Restricts to one tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Restricts to one assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Returns true if the application passes every set criterion.
    pub fn matches(&self, application: &Application) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = application.candidate_name.to_lowercase().contains(&needle)
                || application.job_title.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if application.stage != stage {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !application.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(assignee) = &self.assignee {
            if application.assignee.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }
        true
    }
}

/// What to order cards by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Application date.
    AppliedAt,
    /// Candidate/job fit score; cards without a score sort last.
    FitIndex,
    /// Candidate name, case-insensitive.
    CandidateName,
}

/// Card ordering: a key and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSort {
    pub key: SortKey,
    pub descending: bool,
}

impl Default for CardSort {
    /// Newest applications first.
    fn default() -> Self {
        CardSort {
            key: SortKey::AppliedAt,
            descending: true,
        }
    }
}

/// Filter then sort a card list, returning references in display order.
pub fn arrange<'a>(
    applications: &'a [Application],
    filter: &CardFilter,
    sort: CardSort,
) -> Vec<&'a Application> {
    use std::cmp::Ordering;

    let mut cards: Vec<&Application> = applications.iter().filter(|a| filter.matches(a)).collect();
    cards.sort_by(|a, b| {
        let directed = |ord: Ordering| if sort.descending { ord.reverse() } else { ord };
        match sort.key {
            SortKey::AppliedAt => directed(a.applied_at.cmp(&b.applied_at)),
            // unscored cards go last regardless of direction
            SortKey::FitIndex => match (a.fit_index, b.fit_index) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => directed(x.cmp(&y)),
            },
            SortKey::CandidateName => directed(
                a.candidate_name
                    .to_lowercase()
                    .cmp(&b.candidate_name.to_lowercase()),
            ),
        }
    });
    cards
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
