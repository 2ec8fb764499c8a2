//! Stateless HTTP request builder and response parser for the AYU-Sync API.
//!
//! # Design
//! `CodeMapClient` holds only a `ClientConfig` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` (or `None` when the input gate says the call
//! should be skipped) and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorDetail, TermMapping, Translation};

/// Everything except RFC 3986 unreserved characters gets percent-encoded in
/// query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Synchronous, stateless client for the AYU-Sync lookup/translate API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct CodeMapClient {
    config: ClientConfig,
}

impl CodeMapClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: ClientConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a `/lookup` request for free-text search.
    ///
    /// Returns `None` when the trimmed query is shorter than the configured
    /// minimum — the short-input no-op that keeps noisy prefix queries off
    /// the wire.
    pub fn build_lookup(&self, query: &str) -> Option<HttpRequest> {
        let query = query.trim();
        if query.chars().count() < self.config.min_lookup_chars {
            return None;
        }
        Some(self.get(format!(
            "{}/lookup?q={}",
            self.config.base_url,
            utf8_percent_encode(query, QUERY_VALUE)
        )))
    }

    /// Build a `/translate` request for an exact code.
    ///
    /// Returns `None` when the input is empty after trimming.
    pub fn build_translate(&self, code: &str) -> Option<HttpRequest> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        Some(self.get(format!(
            "{}/translate?code={}",
            self.config.base_url,
            utf8_percent_encode(code, QUERY_VALUE)
        )))
    }

    pub fn parse_lookup(&self, response: HttpResponse) -> Result<Vec<TermMapping>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn parse_translate(&self, response: HttpResponse) -> Result<Translation, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map non-2xx responses to `ApiError::Rejected`, extracting the backend's
/// `detail` message when the body carries one.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorDetail>(&response.body)
        .ok()
        .map(|d| d.detail);
    Err(ApiError::Rejected {
        status: response.status,
        detail,
    })
}
