use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    services::recommendations::{self, Recommendation},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Favorite game ids; request-scoped, nothing is stored server-side
    #[serde(default)]
    pub favorites: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let recommendations = recommendations::recommend(&state.catalog, &request.favorites)?;
    Ok(Json(RecommendationResponse { recommendations }))
}
