use axum::{extract::State, Json};
use serde::Serialize;

use crate::{models::Game, state::AppState};

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<Game>,
}

/// Handler for the full catalog listing
pub async fn list(State(state): State<AppState>) -> Json<GamesResponse> {
    Json(GamesResponse {
        games: state.catalog.games().to_vec(),
    })
}
