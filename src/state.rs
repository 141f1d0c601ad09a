use std::sync::Arc;

use crate::{
    catalog::Catalog,
    services::providers::{ChatProvider, KeywordProvider, SearchProvider},
};

/// Shared application state.
///
/// The catalog is read-only configuration injected at startup; the two
/// providers are the pluggable search/chat backends.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub search_provider: Arc<dyn SearchProvider>,
    pub chat_provider: Arc<dyn ChatProvider>,
}

impl AppState {
    /// State backed by the built-in catalog and the keyword provider
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::builtin());
        let keyword = Arc::new(KeywordProvider::new(catalog.clone()));
        Self {
            catalog,
            search_provider: keyword.clone(),
            chat_provider: keyword,
        }
    }

    /// State with explicit providers, used to swap in alternate backends
    pub fn with_providers(
        catalog: Arc<Catalog>,
        search_provider: Arc<dyn SearchProvider>,
        chat_provider: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            catalog,
            search_provider,
            chat_provider,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
