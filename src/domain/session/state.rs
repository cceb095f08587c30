//! The per-session aggregate.

use crate::domain::chat::Transcript;
use crate::domain::comparison::ComparisonSet;
use crate::domain::foundation::{RecommendationId, Timestamp};
use crate::domain::questionnaire::QuestionnaireEngine;
use crate::domain::recommendation::Recommendation;
use crate::domain::review::{sample_reviews, Review};

/// Everything one logged-in browser session owns.
///
/// Created at login, destroyed at logout or process exit. Nothing here is
/// shared across sessions, so the session store's per-entry lock is the
/// only synchronization the state needs.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub created_at: Timestamp,
    /// Questionnaire progress and collected answers.
    pub engine: QuestionnaireEngine,
    /// Generated recommendations; `None` until the first successful
    /// generation after completing the questionnaire.
    pub recommendations: Option<Vec<Recommendation>>,
    /// Expert-chat history.
    pub transcript: Transcript,
    /// Cars selected for side-by-side comparison.
    pub comparison: ComparisonSet,
    /// Seeded samples plus this session's submissions.
    pub reviews: Vec<Review>,
}

impl SessionState {
    /// Creates a fresh session over the standard questionnaire.
    pub fn new(max_comparison_size: usize) -> Self {
        Self {
            created_at: Timestamp::now(),
            engine: QuestionnaireEngine::standard(),
            recommendations: None,
            transcript: Transcript::new(),
            comparison: ComparisonSet::new(max_comparison_size),
            reviews: sample_reviews(),
        }
    }

    /// True when the questionnaire is complete and no recommendations have
    /// been generated yet. This is the only state in which a fresh
    /// generation call may be issued without an explicit regenerate.
    pub fn can_generate(&self) -> bool {
        self.engine.is_complete() && self.recommendations.is_none()
    }

    /// Stores a successful generation result.
    pub fn record_recommendations(&mut self, cars: Vec<Recommendation>) {
        self.recommendations = Some(cars);
    }

    /// Looks up a recommendation by id.
    pub fn find_recommendation(&self, id: &RecommendationId) -> Option<&Recommendation> {
        self.recommendations
            .as_deref()
            .and_then(|cars| cars.iter().find(|c| &c.id == id))
    }

    /// The recommendations selected for comparison, in selection order.
    pub fn compared_recommendations(&self) -> Vec<&Recommendation> {
        self.comparison
            .ids()
            .iter()
            .filter_map(|id| self.find_recommendation(id))
            .collect()
    }

    /// Restarts the questionnaire, discarding recommendations and the
    /// comparison selection that referenced them. The chat transcript and
    /// reviews survive a restart.
    pub fn restart_questionnaire(&mut self) {
        self.engine.restart();
        self.recommendations = None;
        self.comparison.clear();
    }
}
