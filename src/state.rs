use std::sync::Arc;

use crate::services::{providers::PosterProvider, recommender::RecommendationModel};

/// Shared application state
///
/// The model is immutable after construction, so handlers share it behind a
/// plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<RecommendationModel>,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    pub fn new(model: RecommendationModel, posters: Arc<dyn PosterProvider>) -> Self {
        Self {
            model: Arc::new(model),
            posters,
        }
    }
}
