//! Training-template endpoint backing the "view examples" dialog.

use axum::{extract::State, Json};

use crate::models::training::TrainingExample;
use crate::state::AppState;

/// GET /api/v1/training/examples
pub async fn handle_list_examples(State(state): State<AppState>) -> Json<Vec<TrainingExample>> {
    Json(state.training.as_ref().clone())
}
