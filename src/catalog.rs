use crate::models::Game;

/// Immutable, ordered collection of catalog entries.
///
/// Built once at startup and shared behind an `Arc`; every search,
/// recommendation, and chat computation is a pure function over it, so
/// concurrent requests need no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// Builds a catalog from an explicit list of records
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// The built-in dataset shipped with the application
    pub fn builtin() -> Self {
        Self::from_games(builtin_games())
    }

    /// All records in insertion order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Looks up a record by id
    pub fn get(&self, id: u32) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Resolves a list of ids to known records, in catalog order.
    /// Unknown ids are silently skipped.
    pub fn resolve(&self, ids: &[u32]) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| ids.contains(&game.id))
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn game(
    id: u32,
    title: &str,
    year: i32,
    primary_genre: &str,
    secondary_genre: &str,
    tertiary_genre: &str,
    rating: u8,
    platforms: &str,
) -> Game {
    Game {
        id,
        title: title.to_string(),
        year,
        primary_genre: primary_genre.to_string(),
        secondary_genre: secondary_genre.to_string(),
        tertiary_genre: tertiary_genre.to_string(),
        rating,
        platforms: platforms.to_string(),
    }
}

#[rustfmt::skip]
fn builtin_games() -> Vec<Game> {
    vec![
        game(1, "The Last of Us", 2013, "Action-Adventure", "Survival", "Post-Apocalyptic", 95, "PlayStation Store / Steam"),
        game(2, "Ghost of Tsushima", 2020, "Action-Adventure", "Open-World/Sandbox", "Stealth", 87, "PlayStation Store / Steam"),
        game(3, "Detroit: Become Human", 2018, "Choice-Driven", "Interactive Story", "Multiple Endings", 78, "PlayStation Store / Steam"),
        game(4, "Counter-Strike 2", 2023, "FPS / Shooter", "Multiplayer", "Competitive", 80, "Steam"),
        game(5, "Call of Duty: Modern Warfare II", 2022, "FPS / Shooter", "Multiplayer", "Action", 76, "Steam / Epic Games Store / Xbox Game Pass"),
        game(6, "Resident Evil Village", 2021, "Survival", "Horror", "Story-Driven", 84, "Steam / PlayStation Store / Xbox Game Pass"),
        game(7, "GTA 5", 2013, "Open-World / Sandbox", "Action", "Crime", 97, "Steam / Epic Games Store / PlayStation Store / Xbox Game Pass"),
        game(8, "Cyberpunk 2077", 2020, "Open-World / Sandbox", "Action", "Sci-Fi", 86, "Steam / Epic Games Store / GOG"),
        game(9, "Black Myth: Wukong", 2024, "Action-Adventure", "Open-World / Sandbox", "Fantasy", 81, "Steam / Epic Games Store / PlayStation Store / Xbox Game Pass"),
        game(10, "Pokémon Scarlet / Violet", 2022, "Strategy", "Fantasy", "Strategy", 76, "Nintendo eShop"),
        game(11, "It Takes Two", 2021, "Adventure", "Cooperative", "Adventure", 89, "Steam / PlayStation Store / Xbox Game Pass"),
        game(12, "Drive Beyond Horizons", 2025, "Casual", "Multiplayer", "Simulation", 54, "Steam / Epic Games Store / PlayStation Store"),
        game(13, "Hogwarts Legacy", 2023, "Open-World / Sandbox", "Action-Adventure", "Fantasy", 84, "Steam / Epic Games Store / PlayStation Store / Xbox Game Pass"),
        game(14, "Emissary Zero", 2025, "Strategy", "Horror", "Multiplayer", 61, "Steam / PlayStation Store / Epic Games Store"),
        game(15, "Schedule 1", 2025, "Casual", "Strategy", "Simulation", 54, "Steam / Epic Games Store / PlayStation Store"),
        game(16, "Clash Royale", 2016, "Strategy", "Multiplayer", "Competitive", 85, "Google Play / App Store"),
        game(17, "Hay Day", 2012, "Casual", "Simulation", "Farming", 80, "Google Play / App Store"),
    ]
}
