use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateStatus;
use crate::models::interview::{AnswerAnalysis, Interview, InterviewStatus};
use crate::state::AppState;
use crate::store::{CandidateStore, InterviewStore};

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub candidate_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub notes: String,
}

fn default_kind() -> String {
    "video".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeAnswerRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_candidates: usize,
    pub candidates_by_status: BTreeMap<CandidateStatus, usize>,
    pub interviews_scheduled: usize,
    pub interviews_completed: usize,
    pub average_score: f64,
}

/// POST /api/v1/interviews/schedule — book a slot and move the candidate to
/// `interview_scheduled`.
pub async fn handle_schedule(
    State(state): State<AppState>,
    Json(req): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<Interview>), AppError> {
    if req.time.trim().is_empty() {
        return Err(AppError::Validation("Field 'time' is required".to_string()));
    }

    let candidate = state
        .candidates
        .find(req.candidate_id)
        .await?
        .ok_or_else(|| AppError::Validation("Invalid candidate id".to_string()))?;

    let interview = Interview {
        id: Uuid::new_v4(),
        candidate_id: candidate.id,
        scheduled_for: format!("{} {}", req.date, req.time.trim()),
        kind: req.kind,
        status: InterviewStatus::Scheduled,
        notes: req.notes,
        created_at: Utc::now(),
    };

    let saved = state.interviews.save(interview).await?;
    state
        .candidates
        .update_review(candidate.id, None, Some(CandidateStatus::InterviewScheduled))
        .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /api/v1/interviews/analyze-answer
///
/// Canned demo analysis; a real reviewer backend would replace the body
/// without changing the response shape.
pub async fn handle_analyze_answer(
    Json(req): Json<AnalyzeAnswerRequest>,
) -> Result<Json<AnswerAnalysis>, AppError> {
    if req.question.trim().is_empty() || req.answer.trim().is_empty() {
        return Err(AppError::Validation(
            "Question and answer are required".to_string(),
        ));
    }

    Ok(Json(AnswerAnalysis {
        relevance: 0.85,
        clarity: 0.78,
        technical_accuracy: 0.82,
        overall_score: 0.82,
        feedback: "The candidate provided a detailed response that directly addressed the \
                   question. They demonstrated good technical knowledge and provided specific \
                   examples to support their points. The answer was well-structured and easy \
                   to follow."
            .to_string(),
        suggested_follow_up: "Can you elaborate on how you would apply this approach in a team \
                              setting?"
            .to_string(),
    }))
}

/// GET /api/v1/analytics/summary
pub async fn handle_analytics_summary(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let candidates = state.candidates.list_all().await?;
    let interviews = state.interviews.list_all().await?;

    let mut candidates_by_status = BTreeMap::new();
    for candidate in &candidates {
        *candidates_by_status.entry(candidate.status).or_insert(0) += 1;
    }

    let average_score = if candidates.is_empty() {
        0.0
    } else {
        candidates.iter().map(|c| c.score as f64).sum::<f64>() / candidates.len() as f64
    };

    Ok(Json(AnalyticsSummary {
        total_candidates: candidates.len(),
        candidates_by_status,
        interviews_scheduled: interviews
            .iter()
            .filter(|i| i.status == InterviewStatus::Scheduled)
            .count(),
        interviews_completed: interviews
            .iter()
            .filter(|i| i.status == InterviewStatus::Completed)
            .count(),
        average_score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analysis::screening::SkillTable;
    use crate::analysis::sentiment::LexiconClassifier;
    use crate::models::candidate::Candidate;
    use crate::store::memory::{
        InMemoryCandidateStore, InMemoryFeedbackStore, InMemoryInterviewStore,
    };

    fn test_state() -> AppState {
        AppState {
            feedback: Arc::new(InMemoryFeedbackStore::default()),
            candidates: Arc::new(InMemoryCandidateStore::default()),
            interviews: Arc::new(InMemoryInterviewStore::default()),
            classifier: Arc::new(LexiconClassifier::new().unwrap()),
            skills: Arc::new(SkillTable::builtin()),
            training: Arc::new(vec![]),
        }
    }

    async fn add_candidate(state: &AppState, name: &str, score: u32) -> Candidate {
        state
            .candidates
            .save(Candidate {
                id: Uuid::new_v4(),
                name: name.to_string(),
                job_title: "Engineer".to_string(),
                job_description: "Build things".to_string(),
                resume_text: "python".to_string(),
                score,
                matched_keywords: vec!["python".to_string()],
                summary: "Summary".to_string(),
                status: CandidateStatus::New,
                review_notes: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap()
    }

    fn schedule_request(candidate_id: Uuid) -> ScheduleRequest {
        ScheduleRequest {
            candidate_id,
            date: NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(),
            time: "10:00".to_string(),
            kind: "video".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_schedule_creates_interview_and_flips_status() {
        let state = test_state();
        let candidate = add_candidate(&state, "Ada", 60).await;

        let (status, Json(interview)) =
            handle_schedule(State(state.clone()), Json(schedule_request(candidate.id)))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(interview.candidate_id, candidate.id);
        assert_eq!(interview.scheduled_for, "2025-11-12 10:00");
        assert_eq!(interview.status, InterviewStatus::Scheduled);

        let updated = state.candidates.find(candidate.id).await.unwrap().unwrap();
        assert_eq!(updated.status, CandidateStatus::InterviewScheduled);
    }

    #[tokio::test]
    async fn test_schedule_unknown_candidate_is_rejected() {
        let state = test_state();
        let err = handle_schedule(State(state), Json(schedule_request(Uuid::new_v4())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_answer_requires_both_fields() {
        let err = handle_analyze_answer(Json(AnalyzeAnswerRequest {
            question: "How do you test?".to_string(),
            answer: "  ".to_string(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_answer_returns_demo_scores() {
        let Json(analysis) = handle_analyze_answer(Json(AnalyzeAnswerRequest {
            question: "How do you test?".to_string(),
            answer: "With a pyramid of unit and integration tests.".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(analysis.overall_score, 0.82);
        assert!(!analysis.suggested_follow_up.is_empty());
    }

    #[tokio::test]
    async fn test_analytics_summary_aggregates_stores() {
        let state = test_state();
        let a = add_candidate(&state, "A", 40).await;
        add_candidate(&state, "B", 60).await;

        handle_schedule(State(state.clone()), Json(schedule_request(a.id)))
            .await
            .unwrap();

        let Json(summary) = handle_analytics_summary(State(state)).await.unwrap();
        assert_eq!(summary.total_candidates, 2);
        assert_eq!(summary.interviews_scheduled, 1);
        assert_eq!(summary.interviews_completed, 0);
        assert_eq!(summary.average_score, 50.0);
        assert_eq!(
            summary.candidates_by_status.get(&CandidateStatus::New),
            Some(&1)
        );
        assert_eq!(
            summary
                .candidates_by_status
                .get(&CandidateStatus::InterviewScheduled),
            Some(&1)
        );
    }

    #[tokio::test]
    async fn test_analytics_summary_empty_stores() {
        let state = test_state();
        let Json(summary) = handle_analytics_summary(State(state)).await.unwrap();
        assert_eq!(summary.total_candidates, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.candidates_by_status.is_empty());
    }
}
