use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Records are created once at startup and never mutated; the catalog is
/// read-only data for the lifetime of the process. Field names on the wire
/// are camelCase to match the original dataset (`secondaryGenres` and
/// `thirdGenre` are historical names kept for client compatibility).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique, stable identifier
    pub id: u32,
    pub title: String,
    /// Release year
    pub year: i32,
    /// Primary genre label; the only genre field used for exact-match filtering
    pub primary_genre: String,
    #[serde(rename = "secondaryGenres")]
    pub secondary_genre: String,
    #[serde(rename = "thirdGenre")]
    pub tertiary_genre: String,
    /// Aggregate rating in 0..=100
    pub rating: u8,
    /// Slash-delimited platform set, e.g. "Steam / Epic Games Store".
    /// Splitting on " / " yields the member platforms; no platform name
    /// itself contains the delimiter.
    pub platforms: String,
}

/// Delimiter between platform names in [`Game::platforms`]
pub const PLATFORM_DELIMITER: &str = " / ";

impl Game {
    /// Iterates over the individual platform names
    pub fn platform_list(&self) -> impl Iterator<Item = &str> {
        self.platforms.split(PLATFORM_DELIMITER)
    }

    /// First listed platform, used when a single storefront must be named
    pub fn first_platform(&self) -> &str {
        self.platform_list().next().unwrap_or_default()
    }

    /// Lowercased concatenation of the title and all genre fields,
    /// the haystack that query tokens are matched against
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.primary_genre, self.secondary_genre, self.tertiary_genre
        )
        .to_lowercase()
    }
}
