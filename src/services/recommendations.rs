//! Favorites-based recommendations.
//!
//! Given the caller's favorite ids, ranks the rest of the catalog by a
//! weighted blend of genre affinity, platform affinity, and normalized
//! rating, and explains each pick with a templated sentence.

use serde::Serialize;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::Game,
};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Bonus when a candidate shares a primary genre with a favorite
const GENRE_AFFINITY: f64 = 2.0;
/// Bonus when a candidate is available on any favorite's platform
const PLATFORM_AFFINITY: f64 = 1.0;

/// A recommended title and the reason it was picked
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
}

/// Ranks non-favorite catalog entries against the caller's favorites.
///
/// Favorites are request-scoped input, not server state. Ids that do not
/// resolve to catalog records are skipped; if nothing resolves the request
/// is rejected, since there is no taste signal to rank against.
pub fn recommend(catalog: &Catalog, favorites: &[u32]) -> AppResult<Vec<Recommendation>> {
    let favorite_games = catalog.resolve(favorites);

    if favorite_games.is_empty() {
        return Err(AppError::InvalidInput(
            "Select favorite games before asking for recommendations.".to_string(),
        ));
    }

    // Multiset of primary genres; duplicates are harmless for membership tests
    let preferred_genres: Vec<&str> = favorite_games
        .iter()
        .map(|game| game.primary_genre.as_str())
        .collect();
    let preferred_platforms: Vec<&str> = favorite_games
        .iter()
        .flat_map(|game| game.platform_list())
        .collect();

    let mut ranked: Vec<(f64, &Game)> = catalog
        .games()
        .iter()
        .filter(|game| !favorites.contains(&game.id))
        .map(|game| (affinity_score(game, &preferred_genres, &preferred_platforms), game))
        .collect();

    // Stable sort keeps catalog order for exact ties
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let recommendations: Vec<Recommendation> = ranked
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(_, game)| Recommendation {
            title: game.title.clone(),
            reason: format!(
                "Fits your taste in {} and is available on {}.",
                game.primary_genre,
                game.first_platform()
            ),
        })
        .collect();

    tracing::debug!(
        favorites = favorites.len(),
        picks = recommendations.len(),
        "recommendations computed"
    );

    Ok(recommendations)
}

fn affinity_score(game: &Game, preferred_genres: &[&str], preferred_platforms: &[&str]) -> f64 {
    let genre_score = if preferred_genres.contains(&game.primary_genre.as_str()) {
        GENRE_AFFINITY
    } else {
        0.0
    };
    let platform_score = if preferred_platforms
        .iter()
        .any(|platform| game.platforms.contains(platform))
    {
        PLATFORM_AFFINITY
    } else {
        0.0
    };
    genre_score + platform_score + f64::from(game.rating) / 100.0
}
