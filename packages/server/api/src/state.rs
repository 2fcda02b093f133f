use crate::services::scoring::{RiskScorer, WeightedRandomScorer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn RiskScorer>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn RiskScorer>) -> Self {
        Self { scorer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(WeightedRandomScorer::new()))
    }
}
