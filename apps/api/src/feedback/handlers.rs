use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::sentiment::SentimentClassifier;
use crate::errors::AppError;
use crate::feedback::export::to_csv;
use crate::models::feedback::FeedbackRecord;
use crate::state::AppState;
use crate::store::FeedbackStore;

#[derive(Debug, Deserialize)]
pub struct NewFeedback {
    pub employee_name: String,
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub employment_length: String,
    pub exit_date: NaiveDate,
    pub reason: String,
    pub other_reason: Option<String>,
    pub feedback: String,
    #[serde(default)]
    pub contact_for_details: bool,
}

/// Required-field checks run before the classifier is ever invoked; the core
/// must only see text the caller actually submitted.
fn validate(req: &NewFeedback) -> Result<(), AppError> {
    let required = [
        ("employee_name", &req.employee_name),
        ("position", &req.position),
        ("reason", &req.reason),
        ("feedback", &req.feedback),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("Field '{field}' is required")));
        }
    }

    let other_detail = req.other_reason.as_deref().unwrap_or("").trim();
    if req.reason == "Other" && other_detail.is_empty() {
        return Err(AppError::Validation(
            "Please specify the reason for leaving".to_string(),
        ));
    }

    Ok(())
}

/// POST /api/v1/feedback
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<NewFeedback>,
) -> Result<(StatusCode, Json<FeedbackRecord>), AppError> {
    validate(&req)?;

    // Sentiment is derived exactly once, here; the stored label is never
    // recomputed even if the text is edited later.
    let sentiment = state.classifier.classify(&req.feedback);

    let record = FeedbackRecord {
        id: Uuid::new_v4(),
        employee_name: req.employee_name.trim().to_string(),
        position: req.position.trim().to_string(),
        department: req.department.trim().to_string(),
        employment_length: req.employment_length.trim().to_string(),
        exit_date: req.exit_date,
        reason: req.reason.trim().to_string(),
        other_reason: req
            .other_reason
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        feedback: req.feedback.trim().to_string(),
        sentiment,
        contact_for_details: req.contact_for_details,
        submitted_at: Utc::now(),
    };

    let saved = state.feedback.save(record).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/feedback — newest submission first.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    Ok(Json(newest_first(state.feedback.list_all().await?)))
}

/// GET /api/v1/feedback/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedbackRecord>, AppError> {
    let record = state
        .feedback
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Feedback {id} not found")))?;
    Ok(Json(record))
}

/// GET /api/v1/feedback/export — CSV attachment over the newest-first listing.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = newest_first(state.feedback.list_all().await?);
    let csv = to_csv(&records)?;

    let filename = format!("exit-feedback-{}.csv", Utc::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}

fn newest_first(mut records: Vec<FeedbackRecord>) -> Vec<FeedbackRecord> {
    records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    records
}
