use std::sync::Arc;

use crate::analysis::screening::SkillTable;
use crate::analysis::sentiment::SentimentClassifier;
use crate::models::training::TrainingExample;
use crate::store::{CandidateStore, FeedbackStore, InterviewStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub feedback: Arc<dyn FeedbackStore>,
    pub candidates: Arc<dyn CandidateStore>,
    pub interviews: Arc<dyn InterviewStore>,
    /// Pluggable sentiment backend. Default: `LexiconClassifier`.
    pub classifier: Arc<dyn SentimentClassifier>,
    /// Immutable skill/weight table, built once at startup.
    pub skills: Arc<SkillTable>,
    /// Training-template library served to the training dialog.
    pub training: Arc<Vec<TrainingExample>>,
}
