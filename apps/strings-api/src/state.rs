//! Application state management.
//!
//! Built once in `main` and handed to the route builders. The item service
//! inside is shared by every request through the router state.

use domain_items::{InMemoryItemRepository, ItemService};

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the service holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Item service backed by the in-memory store
    pub items: ItemService<InMemoryItemRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = InMemoryItemRepository::with_values(config.seed_items.iter().cloned());

        Self {
            items: ItemService::new(repository),
            config,
        }
    }
}
