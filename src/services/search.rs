//! Catalog search: filter predicates and score-then-rating ranking.

use serde::Serialize;

use crate::{catalog::Catalog, models::Game, services::matching};

/// Wildcard filter value accepted for both genre and platform
pub const FILTER_ALL: &str = "all";

const NO_MATCH_INTERPRETATION: &str =
    "No games match that description yet. Try a different phrase.";

/// Result of a search run, serialized as-is to the client
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// The query exactly as received
    pub query: String,
    /// Matching records, best first
    pub results: Vec<Game>,
    /// Human-readable summary of the result set
    pub interpretation: String,
}

/// Whether a record passes the genre and platform filters.
///
/// Genre filtering is exact equality against the primary genre only.
/// Platform filtering is substring containment against the slash-delimited
/// platform string; a filter value that is itself a substring of another
/// platform name will over-match. That imprecision is part of the contract
/// and preserved as-is.
pub fn passes(game: &Game, genre: &str, platform: &str) -> bool {
    let matches_genre = genre == FILTER_ALL || game.primary_genre == genre;
    let matches_platform = platform == FILTER_ALL || game.platforms.contains(platform);
    matches_genre && matches_platform
}

/// Runs a full search over the catalog.
///
/// Records must pass both filters, and score above zero when the query
/// carries any signal. The surviving set is stably sorted by match score
/// descending, then rating descending, so full ties keep catalog order.
/// No pagination: the entire ranked set is returned.
pub fn run(catalog: &Catalog, query: &str, genre: &str, platform: &str) -> SearchOutcome {
    let has_query = !matching::normalize(query).is_empty();

    let mut scored: Vec<(usize, &Game)> = catalog
        .games()
        .iter()
        .map(|game| (matching::score(game, query), game))
        .filter(|(score, game)| {
            passes(game, genre, platform) && (!has_query || *score > 0)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.rating.cmp(&a.1.rating)));

    let results: Vec<Game> = scored.into_iter().map(|(_, game)| game.clone()).collect();

    tracing::debug!(
        query,
        genre,
        platform,
        results = results.len(),
        "search completed"
    );

    let interpretation = if results.is_empty() {
        NO_MATCH_INTERPRETATION.to_string()
    } else {
        let shown = if query.is_empty() { "any" } else { query };
        format!("Found {} game(s) matching \"{}\"", results.len(), shown)
    };

    SearchOutcome {
        query: query.to_string(),
        results,
        interpretation,
    }
}
