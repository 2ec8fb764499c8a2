//! Client configuration.
//!
//! # Design
//! Base URL and the minimum-query gate are an explicit value injected at
//! client construction, so tests and embedders can point the client
//! anywhere.

/// Configuration for [`CodeMapClient`](crate::CodeMapClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the AYU-Sync API, without a trailing slash.
    pub base_url: String,
    /// Minimum trimmed query length before a lookup request is issued.
    /// Shorter queries are a no-op that clears the results view.
    pub min_lookup_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            min_lookup_chars: 3,
        }
    }
}
