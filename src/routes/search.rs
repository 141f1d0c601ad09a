use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    services::search::{SearchOutcome, FILTER_ALL},
    state::AppState,
};

/// Query parameters for the search endpoint.
///
/// Every parameter is optional; missing values coerce to the defaults so
/// the search path always returns a result set instead of failing.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub query: String,
    pub genre: String,
    pub platform: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: FILTER_ALL.to_string(),
            platform: FILTER_ALL.to_string(),
        }
    }
}

/// Handler for the search endpoint
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchOutcome>> {
    let outcome = state
        .search_provider
        .search(&params.query, &params.genre, &params.platform)
        .await?;
    Ok(Json(outcome))
}
