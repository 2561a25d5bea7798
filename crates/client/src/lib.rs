// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hw-client: HTTP collaborators for the hirewire backend
//!
//! Blocking [`reqwest`] implementations of the hw-core collaborator traits.
//! No implementation here retries: transport and server failures surface to
//! the caller, which decides whether to offer a manual retry
//! (`Error::is_retryable` tells it whether that advice is honest).

pub mod applications;
pub mod http;
pub mod notes;

pub use applications::HttpApplicationsApi;
pub use http::ApiConfig;
pub use notes::HttpNotesApi;
