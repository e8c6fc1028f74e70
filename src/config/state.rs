// Shared application state
// Holds the loaded configuration and the in-memory item store

use crate::config::Config;
use crate::store::ItemStore;

/// State shared by every request handler invocation
pub struct AppState {
    pub config: Config,
    pub store: ItemStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: ItemStore::new(),
        }
    }
}
