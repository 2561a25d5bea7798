// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hw-board: caller-side state for the hirewire employer UI
//!
//! The hw-core engines are pure; this crate owns the collections they feed:
//! the newest-first note feed per application and the Kanban board of
//! applications grouped into stage columns, plus the client-side card
//! filtering/sorting and the observer contracts UIs hook toasts into.
//!
//! Timers stay with the embedding UI: this crate exposes the sampling
//! targets (feed refresh, per-note edit countdowns) and the recommended
//! intervals, but never spawns background work.

pub mod events;
pub mod feed;
pub mod kanban;
pub mod view;

pub use events::{BoardObserver, NoteObserver};
pub use feed::{NoteFeed, COUNTDOWN_TICK_SECS, REFRESH_INTERVAL_SECS};
pub use kanban::Board;
pub use view::{arrange, CardFilter, CardSort, SortKey};
