//! Keyword relevance scoring.
//!
//! The matcher is the one piece of logic shared by search, chat, and (via
//! platform/genre affinity) recommendations: a query is tokenized on
//! whitespace and each token scores one point if it appears anywhere in the
//! record's title-plus-genres haystack. Substring containment is deliberate:
//! "rpg" matches "rpgish". Ties are left to the caller's ranking.

use crate::models::Game;

/// Lowercases and trims a raw query string
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Number of query tokens contained in the record's haystack.
///
/// An empty (or whitespace-only) query scores 0 for every record. That is
/// "no discriminating signal", not "no match": callers must treat an empty
/// query as matching everything.
pub fn score(game: &Game, query: &str) -> usize {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return 0;
    }

    let haystack = game.search_haystack();
    normalized
        .split_whitespace()
        .filter(|token| haystack.contains(token))
        .count()
}
