//! REST board store.
//!
//! Thin `reqwest` wrapper over the board API: `GET /boards` to load, and
//! `PATCH /boards/{id}` with `{"columns": [...]}` to replace a board's
//! columns. Body decoding lives in [`parse_boards`] so it can be tested
//! without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::{BoardStore, StoreError};
use crate::board::{Board, Column};
use crate::config::Config;

/// Timeouts for store calls.
///
/// `connect_secs` bounds connection setup for every call. `request_secs`
/// bounds only board loads; column replacement writes run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

pub struct HttpBoardStore {
    http: reqwest::Client,
    base_url: String,
    fetch_timeout: Duration,
}

impl HttpBoardStore {
    /// Build a store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            fetch_timeout: Duration::from_secs(timeouts.request_secs),
        })
    }

    /// Build a store from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(&config.api_url, config.api_timeouts)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn boards_url(&self) -> String {
        format!("{}/boards", self.base_url)
    }

    fn board_url(&self, board_id: &str) -> String {
        format!("{}/boards/{board_id}", self.base_url)
    }
}

#[async_trait::async_trait]
impl BoardStore for HttpBoardStore {
    async fn replace_columns(&self, board_id: &str, columns: &[Column]) -> Result<(), StoreError> {
        let url = self.board_url(board_id);
        debug!(%url, columns = columns.len(), "replacing board columns");

        let response = self
            .http
            .patch(&url)
            .json(&ReplaceColumnsBody { columns })
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::BoardNotFound(board_id.to_owned()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Err(StoreError::Status { status: status.as_u16(), body })
    }

    async fn fetch_boards(&self) -> Result<Vec<Board>, StoreError> {
        let response = self
            .http
            .get(self.boards_url())
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(StoreError::Status { status, body: text });
        }

        parse_boards(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ReplaceColumnsBody<'a> {
    columns: &'a [Column],
}

/// Decode a `GET /boards` response body.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the body is not a JSON array of boards.
pub fn parse_boards(text: &str) -> Result<Vec<Board>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))
}
