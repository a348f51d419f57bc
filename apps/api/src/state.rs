use std::sync::Arc;

use crate::config::Config;
use crate::matching::JobRecommender;
use crate::store::PlacementStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only access to student profiles and job postings.
    pub store: Arc<dyn PlacementStore>,
    /// Pluggable recommender. Default: KeywordRecommender.
    pub recommender: Arc<dyn JobRecommender>,
    pub config: Config,
}
