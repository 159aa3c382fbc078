//! In-memory store implementations backed by `tokio::sync::RwLock`.
//!
//! These never actually fail; the `Result` signatures belong to the traits so
//! that a database-backed implementation can surface its errors the same way.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::feedback::FeedbackRecord;
use crate::models::interview::Interview;
use crate::store::{CandidateStore, FeedbackStore, InterviewStore};

#[derive(Default)]
pub struct InMemoryFeedbackStore {
    records: RwLock<Vec<FeedbackRecord>>,
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn save(&self, record: FeedbackRecord) -> Result<FeedbackRecord, AppError> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<FeedbackRecord>, AppError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCandidateStore {
    candidates: RwLock<Vec<Candidate>>,
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn save(&self, candidate: Candidate) -> Result<Candidate, AppError> {
        self.candidates.write().await.push(candidate.clone());
        Ok(candidate)
    }

    async fn list_all(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        Ok(self
            .candidates
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn update_review(
        &self,
        id: Uuid,
        notes: Option<String>,
        status: Option<CandidateStatus>,
    ) -> Result<Option<Candidate>, AppError> {
        let mut candidates = self.candidates.write().await;
        let Some(candidate) = candidates.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(notes) = notes {
            candidate.review_notes = Some(notes);
        }
        if let Some(status) = status {
            candidate.status = status;
        }

        Ok(Some(candidate.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryInterviewStore {
    interviews: RwLock<Vec<Interview>>,
}

#[async_trait]
impl InterviewStore for InMemoryInterviewStore {
    async fn save(&self, interview: Interview) -> Result<Interview, AppError> {
        self.interviews.write().await.push(interview.clone());
        Ok(interview)
    }

    async fn list_all(&self) -> Result<Vec<Interview>, AppError> {
        Ok(self.interviews.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::analysis::sentiment::Sentiment;

    fn make_record(name: &str) -> FeedbackRecord {
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: name.to_string(),
            position: "Engineer".to_string(),
            department: "Engineering".to_string(),
            employment_length: "2 years".to_string(),
            exit_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            reason: "Relocation".to_string(),
            other_reason: None,
            feedback: "A fine run.".to_string(),
            sentiment: Sentiment::Neutral,
            contact_for_details: false,
            submitted_at: Utc.with_ymd_and_hms(2025, 10, 20, 9, 0, 0).unwrap(),
        }
    }

    fn make_candidate(name: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            job_title: "Backend Engineer".to_string(),
            job_description: "Build services".to_string(),
            resume_text: "python".to_string(),
            score: 38,
            matched_keywords: vec!["python".to_string()],
            summary: "Summary".to_string(),
            status: CandidateStatus::New,
            review_notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 10, 20, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_feedback_save_then_list_roundtrip() {
        let store = InMemoryFeedbackStore::default();
        let record = make_record("Ana");
        store.save(record.clone()).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
    }

    #[tokio::test]
    async fn test_feedback_find_unknown_id_is_none() {
        let store = InMemoryFeedbackStore::default();
        assert!(store.find(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_review_sets_notes_and_status() {
        let store = InMemoryCandidateStore::default();
        let candidate = store.save(make_candidate("Bo")).await.unwrap();

        let updated = store
            .update_review(
                candidate.id,
                Some("Solid fundamentals".to_string()),
                Some(CandidateStatus::InReview),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.review_notes.as_deref(), Some("Solid fundamentals"));
        assert_eq!(updated.status, CandidateStatus::InReview);
    }

    #[tokio::test]
    async fn test_update_review_leaves_omitted_fields_alone() {
        let store = InMemoryCandidateStore::default();
        let candidate = store.save(make_candidate("Cy")).await.unwrap();

        let updated = store
            .update_review(candidate.id, None, Some(CandidateStatus::Rejected))
            .await
            .unwrap()
            .unwrap();

        assert!(updated.review_notes.is_none());
        assert_eq!(updated.status, CandidateStatus::Rejected);
    }

    #[tokio::test]
    async fn test_update_review_unknown_candidate_is_none() {
        let store = InMemoryCandidateStore::default();
        let result = store
            .update_review(Uuid::new_v4(), Some("notes".to_string()), None)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
