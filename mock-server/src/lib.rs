//! In-memory implementation of the AYU-Sync lookup/translate API, used as a
//! live fixture by the core crate's integration tests and runnable as a
//! standalone binary.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

/// One row of the code-mapping table. Wire field names keep the dataset's
/// column casing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermRecord {
    #[serde(rename = "NAMASTE_Term")]
    pub namaste_term: String,
    #[serde(rename = "NAMASTE_Code")]
    pub namaste_code: String,
    #[serde(rename = "ICD11_Term")]
    pub icd11_term: String,
    #[serde(rename = "ICD11_Code")]
    pub icd11_code: String,
}

/// Response body of `/translate`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub input_code: String,
    pub input_system: String,
    pub translation: TranslatedCode,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedCode {
    pub term: String,
    pub system: String,
    pub code: String,
}

/// The mapping table is read-only after startup.
pub type Table = Arc<Vec<TermRecord>>;

fn record(nt: &str, nc: &str, it: &str, ic: &str) -> TermRecord {
    TermRecord {
        namaste_term: nt.to_string(),
        namaste_code: nc.to_string(),
        icd11_term: it.to_string(),
        icd11_code: ic.to_string(),
    }
}

/// Sample dataset standing in for the production CSV load.
pub fn sample_data() -> Vec<TermRecord> {
    vec![
        record("Jwara", "NAM-J01", "Fever", "MG26"),
        record("Kasa", "NAM-K02", "Cough", "MD12"),
        record("Atisara", "NAM-A03", "Diarrhoea", "ME05"),
        record("Pandu", "NAM-P04", "Anaemia", "3A00"),
        record("Prameha", "NAM-P05", "Diabetes mellitus", "5A14"),
    ]
}

pub fn app() -> Router {
    app_with(sample_data())
}

pub fn app_with(records: Vec<TermRecord>) -> Router {
    let table: Table = Arc::new(records);
    Router::new()
        .route("/", get(root))
        .route("/lookup", get(lookup))
        .route("/translate", get(translate))
        .with_state(table)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn detail(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the AYU-Sync API Prototype!" }))
}

#[derive(Deserialize)]
struct LookupParams {
    q: String,
}

async fn lookup(State(table): State<Table>, Query(params): Query<LookupParams>) -> Response {
    if table.is_empty() {
        return detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Medical data not loaded.".to_string(),
        );
    }
    if params.q.is_empty() {
        return detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Query parameter 'q' must not be empty.".to_string(),
        );
    }

    let needle = params.q.to_lowercase();
    let hits: Vec<&TermRecord> = table
        .iter()
        .filter(|r| {
            r.namaste_term.to_lowercase().contains(&needle)
                || r.icd11_term.to_lowercase().contains(&needle)
        })
        .collect();
    tracing::debug!(q = %params.q, hits = hits.len(), "lookup");
    Json(hits).into_response()
}

#[derive(Deserialize)]
struct TranslateParams {
    code: String,
}

async fn translate(State(table): State<Table>, Query(params): Query<TranslateParams>) -> Response {
    if table.is_empty() {
        return detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Medical data not loaded.".to_string(),
        );
    }

    // NAMASTE codes are checked first, then ICD-11, both case-insensitively.
    if let Some(r) = table
        .iter()
        .find(|r| r.namaste_code.eq_ignore_ascii_case(&params.code))
    {
        return Json(Translation {
            input_code: params.code,
            input_system: "NAMASTE".to_string(),
            translation: TranslatedCode {
                term: r.icd11_term.clone(),
                system: "ICD-11".to_string(),
                code: r.icd11_code.clone(),
            },
        })
        .into_response();
    }
    if let Some(r) = table
        .iter()
        .find(|r| r.icd11_code.eq_ignore_ascii_case(&params.code))
    {
        return Json(Translation {
            input_code: params.code,
            input_system: "ICD-11".to_string(),
            translation: TranslatedCode {
                term: r.namaste_term.clone(),
                system: "NAMASTE".to_string(),
                code: r.namaste_code.clone(),
            },
        })
        .into_response();
    }

    tracing::debug!(code = %params.code, "translate: no match");
    detail(
        StatusCode::NOT_FOUND,
        format!("Code '{}' not found in either system.", params.code),
    )
}
