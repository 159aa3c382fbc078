use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::screening::build_summary;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::state::AppState;
use crate::store::CandidateStore;

#[derive(Debug, Deserialize)]
pub struct ScreeningRequest {
    pub candidate_name: String,
    pub job_title: String,
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CandidateListQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub data: Vec<Candidate>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub notes: Option<String>,
    pub status: Option<CandidateStatus>,
}

fn validate(req: &ScreeningRequest) -> Result<(), AppError> {
    let required = [
        ("candidate_name", &req.candidate_name),
        ("job_title", &req.job_title),
        ("job_description", &req.job_description),
        ("resume_text", &req.resume_text),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("Field '{field}' is required")));
        }
    }
    Ok(())
}

/// POST /api/v1/screening — score a resume and store the candidate.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    validate(&req)?;

    let name = req.candidate_name.trim().to_string();
    let report = state.skills.score(&req.resume_text);
    let summary = build_summary(&name, &report);

    let candidate = Candidate {
        id: Uuid::new_v4(),
        name,
        job_title: req.job_title.trim().to_string(),
        job_description: req.job_description.trim().to_string(),
        resume_text: req.resume_text.trim().to_string(),
        score: report.score,
        matched_keywords: report.matched_keywords,
        summary,
        status: CandidateStatus::New,
        review_notes: None,
        created_at: Utc::now(),
    };

    let saved = state.candidates.save(candidate).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/candidates — highest fit score first, optional status filter,
/// paginated.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).max(1);

    let mut candidates = state.candidates.list_all().await?;
    if let Some(status) = query.status {
        candidates.retain(|c| c.status == status);
    }
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let total = candidates.len();
    let data: Vec<Candidate> = candidates
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Ok(Json(CandidateListResponse {
        data,
        total,
        page,
        per_page,
    }))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .candidates
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/candidates/:id/review — save reviewer notes and/or a status
/// change.
pub async fn handle_save_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<Candidate>, AppError> {
    let updated = state
        .candidates
        .update_review(id, req.notes, req.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(updated))
}
