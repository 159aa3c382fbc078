use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reusable interview-training template, offered as form pre-fill in the
/// training-data dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub kind: String,
    pub recorded_at: NaiveDate,
    pub instructions: String,
    pub sample_qna: String,
}
