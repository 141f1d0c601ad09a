//! Deterministic chat stub.
//!
//! Replies are a pure function of the conversation and the catalog: the
//! most recent user message is run through the keyword matcher and the
//! first couple of hits are named in a templated sentence. An LLM-backed
//! variant lives behind the same [`ChatProvider`] contract and is not part
//! of this crate.
//!
//! [`ChatProvider`]: crate::services::providers::ChatProvider

use crate::{
    catalog::Catalog,
    models::{ChatMessage, Role},
    services::matching,
};

/// Prompt assumed when the conversation has no user message yet
const FALLBACK_PROMPT: &str = "Tell me about games you like!";

const NO_SIGNAL_REPLY: &str =
    "I didn't catch a strong preference. Share a genre, platform, or a game you've enjoyed.";

/// Number of titles named in a reply
const MAX_SUGGESTIONS: usize = 2;

/// Produces a reply for the given conversation.
///
/// Suggestions are taken in catalog order, not ranked; the first two
/// records with any keyword overlap are named.
pub fn reply(catalog: &Catalog, messages: &[ChatMessage]) -> String {
    let last_user_message = messages
        .iter()
        .rev()
        .find(|message| message.role == Role::User)
        .map(|message| message.content.as_str())
        .unwrap_or(FALLBACK_PROMPT);

    let suggestions: Vec<String> = catalog
        .games()
        .iter()
        .filter(|game| matching::score(game, last_user_message) > 0)
        .take(MAX_SUGGESTIONS)
        .map(|game| format!("{} ({}, rating {})", game.title, game.primary_genre, game.rating))
        .collect();

    if suggestions.is_empty() {
        NO_SIGNAL_REPLY.to_string()
    } else {
        format!(
            "Based on that, try {}. Want something different? Mention a genre or platform!",
            suggestions.join(" or ")
        )
    }
}
