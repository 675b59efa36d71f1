// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared JSON-over-HTTP plumbing for both service clients.
//
// A non-2xx status becomes `FetchFailed` (GET) or `CreateFailed` (POST) with
// no status attached; the status only shows up in the log.

use monodash_core::error::{MonodashError, Result};
use monodash_core::types::ResourceKind;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP handle bound to one service base URL.
///
/// Cheap to clone: `reqwest::Client` is reference counted internally.
#[derive(Debug, Clone)]
pub struct ServiceHttp {
    client: reqwest::Client,
    base_url: String,
    kind: ResourceKind,
}

impl ServiceHttp {
    /// Build a handle with its own connection pool.
    pub fn new(base_url: &str, kind: ResourceKind) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MonodashError::Config(format!("HTTP client for {kind}: {e}")))?;
        Ok(Self::with_client(client, base_url, kind))
    }

    /// Build a handle sharing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str, kind: ResourceKind) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            kind,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Absolute URL for a path beginning with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET path`, decoding the JSON body on success.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(kind = %self.kind, url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        if !response.status().is_success() {
            warn!(
                kind = %self.kind,
                url = %url,
                status = response.status().as_u16(),
                "fetch rejected by service"
            );
            return Err(MonodashError::FetchFailed(self.kind));
        }

        response.json::<T>().await.map_err(|e| self.decode(e))
    }

    /// `POST path` with a JSON body, decoding the JSON reply on success.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(kind = %self.kind, url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        if !response.status().is_success() {
            warn!(
                kind = %self.kind,
                url = %url,
                status = response.status().as_u16(),
                "create rejected by service"
            );
            return Err(MonodashError::CreateFailed(self.kind));
        }

        response.json::<T>().await.map_err(|e| self.decode(e))
    }

    fn transport(&self, err: reqwest::Error) -> MonodashError {
        MonodashError::Transport {
            kind: self.kind,
            detail: err.to_string(),
        }
    }

    fn decode(&self, err: reqwest::Error) -> MonodashError {
        MonodashError::Decode {
            kind: self.kind,
            detail: err.to_string(),
        }
    }
}
