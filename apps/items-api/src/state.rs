//! Application state management

use domain_items::InMemoryItemRepository;

use crate::config::Config;

/// Shared application state
///
/// The item store is created once per process and injected into the item
/// routes; nothing else holds item data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::new(),
        }
    }
}
