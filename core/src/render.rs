//! Projection of API results and failures into user-facing text blocks.
//!
//! Results and failures are reduced to a plain [`Message`] with a
//! [`MessageKind`], leaving markup and styling to whatever shell embeds the
//! core. All user-visible strings live in this module.

use crate::error::ApiError;
use crate::types::{TermMapping, Translation};

/// How a rendered message should be styled by the embedding shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Neutral informational text (prompts, placeholders, "no data").
    Info,
    /// A failure the user should notice.
    Error,
    /// Actual result content.
    Results,
}

/// A rendered block of text plus its styling kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    fn results(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Results,
            text: text.into(),
        }
    }
}

/// Initial placeholder for the lookup view.
pub fn initial_lookup() -> Message {
    Message::info("Results will appear here.")
}

/// Initial placeholder for the translate view.
pub fn initial_translate() -> Message {
    Message::info("Translation will appear here.")
}

/// Render lookup results, one block per record in server order.
pub fn lookup_results(records: &[TermMapping]) -> Message {
    if records.is_empty() {
        return Message::info("No matching terms found.");
    }
    let blocks: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "{} (NAMASTE: {}) ↔ {} (ICD-11: {})",
                r.namaste_term, r.namaste_code, r.icd11_term, r.icd11_code
            )
        })
        .collect();
    Message::results(blocks.join("\n"))
}

/// Render any lookup failure; the cause is logged, not shown.
pub fn lookup_failure() -> Message {
    Message::error("Failed to fetch data. Is the backend server running?")
}

/// Prompt shown when the translate input is empty.
pub fn translate_prompt() -> Message {
    Message::info("Please enter a code to translate.")
}

/// Interim placeholder shown while a translate request is in flight.
pub fn translating() -> Message {
    Message::info("Translating...")
}

/// Render a successful translation.
pub fn translation(t: &Translation) -> Message {
    Message::results(format!(
        "Input: {} (System: {})\nTranslation: {} (System: {}, Code: {})",
        t.input_code, t.input_system, t.translation.term, t.translation.system, t.translation.code
    ))
}

/// Render a translate failure. A server-supplied `detail` message wins;
/// status errors without one fall back to a generic text; transport and
/// decode errors show their own message.
pub fn translate_failure(err: &ApiError) -> Message {
    let text = match err {
        ApiError::Rejected {
            detail: Some(detail),
            ..
        } => format!("Error: {detail}"),
        ApiError::Rejected { detail: None, .. } => "Error: Translation failed.".to_string(),
        other => format!("Error: {other}"),
    };
    Message::error(text)
}
