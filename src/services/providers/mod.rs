//! Pluggable search and chat backends.
//!
//! The UI consumes search and chat through these two capabilities. The
//! deterministic keyword matcher is the default implementation; an
//! LLM-backed service can be swapped in behind the same contracts without
//! touching the HTTP layer. The traits are async for exactly that reason:
//! alternate implementations may perform network I/O.

use crate::{error::AppResult, models::ChatMessage, services::search::SearchOutcome};

pub mod keyword;

pub use keyword::KeywordProvider;

/// Capability behind the search endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Interprets a free-text query plus genre/platform filters and returns
    /// a ranked result set with a human-readable interpretation.
    async fn search(&self, query: &str, genre: &str, platform: &str)
        -> AppResult<SearchOutcome>;
}

/// Capability behind the chat endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Produces the assistant's next message for the given conversation
    async fn reply(&self, messages: &[ChatMessage]) -> AppResult<String>;
}
