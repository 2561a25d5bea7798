// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared HTTP plumbing for the API clients.
//!
//! Error bodies are JSON objects with a `detail` string. Two server answers
//! get promoted to their domain condition so callers see the same error type
//! whether the check failed locally or on the server: a 403 whose detail
//! mentions the edit window becomes [`Error::EditWindowExpired`], and any
//! other 403 becomes [`Error::NotAuthor`]. The server's verdict is
//! authoritative even when the local clock disagreed.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use hw_core::{Error, Result};

/// Default request timeout.
const TIMEOUT_SECS: u64 = 10;

/// Connection settings for the hirewire backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.example.com`. Trailing slash optional.
    pub base_url: String,
    /// Bearer token attached to every request, if set.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Creates a config with no auth token.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Sets the bearer token (builder pattern).
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Wire shape of server error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Map a non-success response to a domain error.
pub(crate) fn error_from_status(status: u16, body: &str) -> Error {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("http status {}", status)
            } else {
                trimmed.to_string()
            }
        });
    match status {
        403 if detail.to_lowercase().contains("edit window") => Error::EditWindowExpired,
        403 => Error::NotAuthor,
        _ => Error::Api { status, detail },
    }
}

/// A configured blocking HTTP transport.
#[derive(Debug, Clone)]
pub(crate) struct Http {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl Http {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Http {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let req = self.client.get(self.url(path)).query(query);
        decode(self.send("GET", path, req)?)
    }

    pub fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let req = self.client.post(self.url(path)).json(body);
        decode(self.send("POST", path, req)?)
    }

    pub fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let req = self.client.patch(self.url(path)).json(body);
        decode(self.send("PATCH", path, req)?)
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        let req = self.client.delete(self.url(path));
        self.send("DELETE", path, req)?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, method: &str, path: &str, req: RequestBuilder) -> Result<Response> {
        let req = match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        tracing::debug!(method, path, "sending request");
        let response = req.send().map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let code = status.as_u16();
        let body = response.text().unwrap_or_default();
        let err = error_from_status(code, &body);
        tracing::warn!(method, path, status = code, "request failed");
        Err(err)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .map_err(|e| Error::Transport(format!("failed to decode response: {}", e)))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
