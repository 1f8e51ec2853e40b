//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskApiClient` holds only a `base_url` and carries no mutable state
//! between calls. The fetch operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Task;

/// The production endpoint the application ships with. No authentication,
/// no pagination; the full list comes back in one response.
pub const DEFAULT_BASE_URL: &str = "https://68f0d65e0b966ad5003461f8.mockapi.io";

/// Synchronous, stateless client for the remote task API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    base_url: String,
}

impl TaskApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/data", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the task list out of a fetch response.
    ///
    /// The returned list preserves the server's order exactly; no local
    /// re-sorting happens anywhere downstream.
    pub fn parse_fetch_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, FetchError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

impl Default for TaskApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Map non-success status codes to `FetchError::HttpStatus`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), FetchError> {
    if response.status == expected {
        return Ok(());
    }
    Err(FetchError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
