//! Client core for the AYU-Sync medical-coding API (NAMASTE ↔ ICD-11).
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CodeMapClient` is stateless — it holds only a `ClientConfig`.
//! - Each API operation is split into `build_*` (produces a request, or
//!   skips inputs below the query gate) and `parse_*` (consumes a response),
//!   so the I/O boundary is explicit.
//! - `LookupHandler` / `TranslateHandler` layer the per-widget flow on top:
//!   input gating, interim placeholders, rendered `Message` output, and
//!   sequence-numbered responses so a stale reply never overwrites a newer
//!   one.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod render;
pub mod sequence;
pub mod types;

pub use client::CodeMapClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use handler::{LookupAction, LookupHandler, TranslateAction, TranslateHandler};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{Message, MessageKind};
pub use sequence::RequestSequencer;
pub use types::{ErrorDetail, TermMapping, TranslatedCode, Translation};
