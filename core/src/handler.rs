//! Per-widget request/response flows: lookup and translate.
//!
//! # Design
//! Each handler owns the small state machine behind one input widget
//! (`Idle → Requesting → Rendered | Errored`, re-entrant on every trigger).
//! A trigger produces an action telling the host what to render immediately
//! and, when the input passes the gate, which request to execute. The host
//! feeds the outcome back through `on_response` with the sequence number it
//! was handed; stale responses — superseded by a later trigger — come back
//! as `None` and must not be rendered.
//!
//! There is no retry, no backoff, and no cancellation of in-flight
//! requests: one attempt per trigger, last request wins.

use crate::client::CodeMapClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::render;
use crate::render::Message;
use crate::sequence::RequestSequencer;

/// What the host should do after a lookup input change.
#[derive(Debug)]
pub enum LookupAction {
    /// Input below the minimum length: clear the results view, no request.
    Clear,
    /// Execute `request` and report back with `seq`.
    Send { seq: u64, request: HttpRequest },
}

/// What the host should do after a translate submission.
#[derive(Debug)]
pub enum TranslateAction {
    /// Empty input: show the prompt, no request.
    Prompt(Message),
    /// Show `placeholder`, execute `request`, report back with `seq`.
    Send {
        seq: u64,
        placeholder: Message,
        request: HttpRequest,
    },
}

/// Drives the free-text lookup flow.
#[derive(Debug)]
pub struct LookupHandler {
    client: CodeMapClient,
    seq: RequestSequencer,
}

impl LookupHandler {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: CodeMapClient::new(config),
            seq: RequestSequencer::new(),
        }
    }

    /// Handle a change of the lookup input field.
    pub fn on_input(&mut self, text: &str) -> LookupAction {
        match self.client.build_lookup(text) {
            None => LookupAction::Clear,
            Some(request) => LookupAction::Send {
                seq: self.seq.begin(),
                request,
            },
        }
    }

    /// Handle the outcome of a previously issued request. Returns `None`
    /// when the response is stale and must be dropped.
    pub fn on_response(
        &mut self,
        seq: u64,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Option<Message> {
        if !self.seq.commit(seq) {
            tracing::debug!(seq, "dropping stale lookup response");
            return None;
        }
        let message = match outcome.and_then(|r| self.client.parse_lookup(r)) {
            Ok(records) => render::lookup_results(&records),
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed");
                render::lookup_failure()
            }
        };
        Some(message)
    }
}

/// Drives the exact-code translate flow.
#[derive(Debug)]
pub struct TranslateHandler {
    client: CodeMapClient,
    seq: RequestSequencer,
}

impl TranslateHandler {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: CodeMapClient::new(config),
            seq: RequestSequencer::new(),
        }
    }

    /// Handle a submission (button click or Enter) of the translate input.
    pub fn on_submit(&mut self, text: &str) -> TranslateAction {
        match self.client.build_translate(text) {
            None => TranslateAction::Prompt(render::translate_prompt()),
            Some(request) => TranslateAction::Send {
                seq: self.seq.begin(),
                placeholder: render::translating(),
                request,
            },
        }
    }

    /// Handle the outcome of a previously issued request. Returns `None`
    /// when the response is stale and must be dropped.
    pub fn on_response(
        &mut self,
        seq: u64,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Option<Message> {
        if !self.seq.commit(seq) {
            tracing::debug!(seq, "dropping stale translate response");
            return None;
        }
        let message = match outcome.and_then(|r| self.client.parse_translate(r)) {
            Ok(translation) => render::translation(&translation),
            Err(err) => {
                tracing::warn!(error = %err, "translate failed");
                render::translate_failure(&err)
            }
        };
        Some(message)
    }
}
