use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::sentiment::Sentiment;

/// One submitted exit-interview feedback record.
///
/// `sentiment` is derived from `feedback` exactly once, at submission time,
/// and stored with the record; it is never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub employee_name: String,
    pub position: String,
    pub department: String,
    pub employment_length: String,
    pub exit_date: NaiveDate,
    pub reason: String,
    pub other_reason: Option<String>,
    pub feedback: String,
    pub sentiment: Sentiment,
    pub contact_for_details: bool,
    pub submitted_at: DateTime<Utc>,
}
