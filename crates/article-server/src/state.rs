//! Application state shared across handlers.

use std::sync::Arc;

use article_store::ArticleStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// The store sits behind a single-writer lock: mutations take the write
/// guard, search and listing share the read guard.
#[derive(Clone)]
pub struct AppState {
    /// Article store.
    store: Arc<RwLock<ArticleStore>>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: ArticleStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the locked article store.
    pub fn store(&self) -> &RwLock<ArticleStore> {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
