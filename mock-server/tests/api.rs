use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_data, TermRecord, Translation};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

// --- root ---

#[tokio::test]
async fn root_returns_welcome_message() {
    let resp = get(app(), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Welcome to the AYU-Sync API Prototype!");
}

// --- lookup ---

#[tokio::test]
async fn lookup_matches_namaste_term_case_insensitively() {
    let resp = get(app(), "/lookup?q=jwa").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Vec<TermRecord> = body_json(resp).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].namaste_term, "Jwara");
}

#[tokio::test]
async fn lookup_matches_icd11_term_column_too() {
    let resp = get(app(), "/lookup?q=fever").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Vec<TermRecord> = body_json(resp).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].icd11_term, "Fever");
}

#[tokio::test]
async fn lookup_no_match_returns_empty_array() {
    let resp = get(app(), "/lookup?q=zzz").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Vec<TermRecord> = body_json(resp).await;
    assert!(hits.is_empty());
}

#[tokio::test]
async fn lookup_preserves_table_order() {
    // "a" appears in several terms; hits must come back in table order.
    let resp = get(app(), "/lookup?q=a").await;
    let hits: Vec<TermRecord> = body_json(resp).await;
    let all = sample_data();
    let expected: Vec<&TermRecord> = all
        .iter()
        .filter(|r| {
            r.namaste_term.to_lowercase().contains('a') || r.icd11_term.to_lowercase().contains('a')
        })
        .collect();
    assert!(hits.len() >= 2);
    assert_eq!(hits.iter().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn lookup_empty_query_returns_422() {
    let resp = get(app(), "/lookup?q=").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn lookup_missing_query_is_rejected() {
    let resp = get(app(), "/lookup").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookup_empty_table_returns_500_with_detail() {
    let resp = get(app_with(Vec::new()), "/lookup?q=jwa").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Medical data not loaded.");
}

// --- translate ---

#[tokio::test]
async fn translate_namaste_code_to_icd11() {
    let resp = get(app(), "/translate?code=NAM-J01").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let t: Translation = body_json(resp).await;
    assert_eq!(t.input_code, "NAM-J01");
    assert_eq!(t.input_system, "NAMASTE");
    assert_eq!(t.translation.system, "ICD-11");
    assert_eq!(t.translation.code, "MG26");
    assert_eq!(t.translation.term, "Fever");
}

#[tokio::test]
async fn translate_icd11_code_to_namaste() {
    let resp = get(app(), "/translate?code=MD12").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let t: Translation = body_json(resp).await;
    assert_eq!(t.input_system, "ICD-11");
    assert_eq!(t.translation.system, "NAMASTE");
    assert_eq!(t.translation.code, "NAM-K02");
    assert_eq!(t.translation.term, "Kasa");
}

#[tokio::test]
async fn translate_code_match_is_case_insensitive() {
    let resp = get(app(), "/translate?code=nam-j01").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let t: Translation = body_json(resp).await;
    // The echoed input keeps the caller's casing.
    assert_eq!(t.input_code, "nam-j01");
    assert_eq!(t.translation.code, "MG26");
}

#[tokio::test]
async fn translate_unknown_code_returns_404_with_detail() {
    let resp = get(app(), "/translate?code=X99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Code 'X99' not found in either system.");
}

#[tokio::test]
async fn translate_empty_table_returns_500_with_detail() {
    let resp = get(app_with(Vec::new()), "/translate?code=NAM-J01").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Medical data not loaded.");
}
