use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A scheduled interview slot for a screened candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    /// "{date} {time}" as entered on the scheduling form.
    pub scheduled_for: String,
    pub kind: String,
    pub status: InterviewStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Per-answer review scores. All dimensions are 0.0–1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub relevance: f64,
    pub clarity: f64,
    pub technical_accuracy: f64,
    pub overall_score: f64,
    pub feedback: String,
    pub suggested_follow_up: String,
}
