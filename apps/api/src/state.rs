use std::sync::Arc;

use crate::config::Config;
use crate::courses::CourseRecommender;
use crate::matching::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable course lookup. YouTube when an API key is set, disabled otherwise.
    pub recommender: Arc<dyn CourseRecommender>,
}
