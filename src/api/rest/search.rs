//! Search and suggestion endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use super::QueryBody;
use crate::api::state::AppState;
use crate::search::UniformJitter;
use crate::types::ScoredResult;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<ScoredResult>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub query: String,
    pub suggestions: Vec<String>,
}

/// POST /search - Rank doctors and articles against a query
pub async fn search_directory(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Json<SearchResponse> {
    let results = state
        .directory
        .search(body.query(), &mut UniformJitter::new());

    Json(SearchResponse {
        success: true,
        query: body.query().to_string(),
        count: results.len(),
        results,
    })
}

/// POST /suggestions - Spelling suggestions for a query
pub async fn suggest_terms(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        success: true,
        query: body.query().to_string(),
        suggestions: state.directory.suggestions(body.query()),
    })
}
