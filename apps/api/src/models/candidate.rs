use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a candidate sits in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    InReview,
    InterviewScheduled,
    Completed,
    Rejected,
}

/// A screened candidate: the submitted application plus the scoring result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub job_title: String,
    pub job_description: String,
    pub resume_text: String,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub summary: String,
    pub status: CandidateStatus,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
