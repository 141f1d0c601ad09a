use axum_test::TestServer;
use serde_json::json;

use levelup_api::{routes::create_router, state::AppState};

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_games_returns_full_catalog() {
    let server = create_test_server();

    let response = server.get("/api/games").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 17);

    // camelCase wire format, first record in insertion order
    assert_eq!(games[0]["id"], 1);
    assert_eq!(games[0]["title"], "The Last of Us");
    assert_eq!(games[0]["primaryGenre"], "Action-Adventure");
    assert_eq!(games[0]["secondaryGenres"], "Survival");
    assert_eq!(games[0]["thirdGenre"], "Post-Apocalyptic");
    assert_eq!(games[0]["platforms"], "PlayStation Store / Steam");
}

#[tokio::test]
async fn test_search_without_params_returns_everything() {
    let server = create_test_server();

    let response = server.get("/api/search").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["query"], "");
    assert_eq!(body["results"].as_array().unwrap().len(), 17);
    assert_eq!(body["interpretation"], "Found 17 game(s) matching \"any\"");
}

#[tokio::test]
async fn test_search_multiplayer_on_steam() {
    let server = create_test_server();

    let response = server
        .get("/api/search")
        .add_query_param("query", "multiplayer")
        .add_query_param("platform", "Steam")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let titles: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|game| game["title"].as_str().unwrap())
        .collect();

    // all score 1, so ordering falls back to rating descending
    assert_eq!(
        titles,
        vec![
            "Counter-Strike 2",
            "Call of Duty: Modern Warfare II",
            "Emissary Zero",
            "Drive Beyond Horizons",
        ]
    );

    for game in body["results"].as_array().unwrap() {
        assert!(game["platforms"].as_str().unwrap().contains("Steam"));
    }
}

#[tokio::test]
async fn test_search_genre_filter_is_exact() {
    let server = create_test_server();

    let response = server
        .get("/api/search")
        .add_query_param("genre", "FPS / Shooter")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let titles: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|game| game["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Counter-Strike 2", "Call of Duty: Modern Warfare II"]);
}

#[tokio::test]
async fn test_search_no_matches_explains_itself() {
    let server = create_test_server();

    let response = server
        .get("/api/search")
        .add_query_param("query", "xyzzy")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    assert_eq!(
        body["interpretation"],
        "No games match that description yet. Try a different phrase."
    );
}

#[tokio::test]
async fn test_recommendations_for_gta_favorite() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "favorites": [7] }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);

    let titles: Vec<&str> = recommendations
        .iter()
        .map(|pick| pick["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Cyberpunk 2077", "Hogwarts Legacy", "The Last of Us"]
    );

    // the favorite itself is never recommended
    assert!(!titles.contains(&"GTA 5"));

    assert_eq!(
        recommendations[0]["reason"],
        "Fits your taste in Open-World / Sandbox and is available on Steam."
    );
}

#[tokio::test]
async fn test_recommendations_without_favorites_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "favorites": [] }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        "Select favorite games before asking for recommendations."
    );
}

#[tokio::test]
async fn test_recommendations_with_missing_field_is_rejected() {
    let server = create_test_server();

    let response = server.post("/api/recommendations").json(&json!({})).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_suggests_matching_titles() {
    let server = create_test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({
            "messages": [
                { "role": "user", "content": "something multiplayer and competitive" }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Based on that, try"));
    assert!(message.contains("Counter-Strike 2"));
}

#[tokio::test]
async fn test_chat_with_no_messages_uses_fallback_prompt() {
    let server = create_test_server();

    let response = server.post("/api/chat").json(&json!({ "messages": [] })).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["message"].as_str().unwrap().starts_with("Based on that, try"));
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let server = create_test_server();

    let response = server.get("/api/games").await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));
}
