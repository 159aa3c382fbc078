//! Repository seams between the handlers and whatever backs them.
//!
//! The shipped implementations (`memory`) hold everything in process memory,
//! standing in for a future database. Handlers only ever see the traits,
//! carried in `AppState` as `Arc<dyn ...>`, so a durable backend can be
//! dropped in without touching them.

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::feedback::FeedbackRecord;
use crate::models::interview::Interview;

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn save(&self, record: FeedbackRecord) -> Result<FeedbackRecord, AppError>;
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, AppError>;
    async fn find(&self, id: Uuid) -> Result<Option<FeedbackRecord>, AppError>;
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn save(&self, candidate: Candidate) -> Result<Candidate, AppError>;
    async fn list_all(&self) -> Result<Vec<Candidate>, AppError>;
    async fn find(&self, id: Uuid) -> Result<Option<Candidate>, AppError>;

    /// Applies reviewer notes and/or a status change to an existing
    /// candidate. Returns the updated candidate, or `None` if the id is
    /// unknown.
    async fn update_review(
        &self,
        id: Uuid,
        notes: Option<String>,
        status: Option<CandidateStatus>,
    ) -> Result<Option<Candidate>, AppError>;
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn save(&self, interview: Interview) -> Result<Interview, AppError>;
    async fn list_all(&self) -> Result<Vec<Interview>, AppError>;
}
