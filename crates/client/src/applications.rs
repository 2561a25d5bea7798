// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the applications API.

use hw_core::{Application, ApplicationsApi, BulkReceipt, BulkStageChange, Result, StageChange};

use crate::http::{ApiConfig, Http};

/// Applications API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApplicationsApi {
    http: Http,
}

impl HttpApplicationsApi {
    /// Builds a client for the given backend.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(HttpApplicationsApi {
            http: Http::new(config)?,
        })
    }
}

impl ApplicationsApi for HttpApplicationsApi {
    fn update_stage(&self, application_id: &str, change: &StageChange) -> Result<Application> {
        self.http
            .patch_json(&format!("/applications/{}/status", application_id), change)
    }

    fn bulk_update_stage(&self, change: &BulkStageChange) -> Result<BulkReceipt> {
        self.http.post_json("/applications/bulk-status", change)
    }
}
