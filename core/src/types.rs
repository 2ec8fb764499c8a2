//! Wire DTOs for the AYU-Sync API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently.
//! Field names on the wire keep the backend's exact casing (`NAMASTE_Term`,
//! `input_code`, ...) via serde renames, while the Rust side stays
//! snake_case. Integration tests catch any schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};

/// One candidate term-mapping pair returned by `/lookup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermMapping {
    #[serde(rename = "NAMASTE_Term")]
    pub namaste_term: String,
    #[serde(rename = "NAMASTE_Code")]
    pub namaste_code: String,
    #[serde(rename = "ICD11_Term")]
    pub icd11_term: String,
    #[serde(rename = "ICD11_Code")]
    pub icd11_code: String,
}

/// The single best mapping for one input code, returned by `/translate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub input_code: String,
    pub input_system: String,
    pub translation: TranslatedCode,
}

/// The target side of a [`Translation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedCode {
    pub term: String,
    pub system: String,
    pub code: String,
}

/// Error body shape the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
