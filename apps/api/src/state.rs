use std::sync::Arc;

use crate::catalog::ProgramCatalog;
use crate::matching::MatchStrategy;
use crate::results::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProgramCatalog>,
    /// Active matching strategy, chosen by MATCH_STRATEGY at startup.
    pub strategy: Arc<dyn MatchStrategy>,
    pub results: Arc<dyn ResultStore>,
}
