use std::sync::Arc;

use crate::portfolio::PortfolioStore;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: PortfolioStore,
}

impl AppState {
    pub fn new(store: PortfolioStore) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
