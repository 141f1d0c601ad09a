//! Default provider: deterministic keyword matching over the catalog.

use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::ChatMessage,
    services::{chat, search, search::SearchOutcome},
};

use super::{ChatProvider, SearchProvider};

/// Serves search and chat from the in-memory catalog with no external calls
#[derive(Clone)]
pub struct KeywordProvider {
    catalog: Arc<Catalog>,
}

impl KeywordProvider {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl SearchProvider for KeywordProvider {
    async fn search(
        &self,
        query: &str,
        genre: &str,
        platform: &str,
    ) -> AppResult<SearchOutcome> {
        Ok(search::run(&self.catalog, query, genre, platform))
    }
}

#[async_trait::async_trait]
impl ChatProvider for KeywordProvider {
    async fn reply(&self, messages: &[ChatMessage]) -> AppResult<String> {
        Ok(chat::reply(&self.catalog, messages))
    }
}
