//! Comparison table query handler.

use std::sync::Arc;

use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::SessionToken;
use crate::ports::{SessionStore, SessionStoreError};

/// Derives the side-by-side table from the session's selection.
pub struct GetComparisonHandler {
    store: Arc<dyn SessionStore>,
}

impl GetComparisonHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the derived table; an empty selection derives an empty
    /// table, which the view renders as an invitation to add cars.
    pub async fn handle(&self, token: SessionToken) -> Result<ComparisonTable, SessionStoreError> {
        let state = self.store.load(token).await?;
        Ok(ComparisonTable::derive(&state.compared_recommendations()))
    }
}
