pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::interviews::handlers as interviews;
use crate::screening::handlers as screening;
use crate::state::AppState;
use crate::training;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Exit feedback
        .route(
            "/api/v1/feedback",
            post(feedback::handle_submit).get(feedback::handle_list),
        )
        .route("/api/v1/feedback/export", get(feedback::handle_export))
        .route("/api/v1/feedback/:id", get(feedback::handle_get))
        // Resume screening
        .route("/api/v1/screening", post(screening::handle_screen))
        .route("/api/v1/candidates", get(screening::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(screening::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/review",
            post(screening::handle_save_review),
        )
        // Interview review
        .route(
            "/api/v1/interviews/schedule",
            post(interviews::handle_schedule),
        )
        .route(
            "/api/v1/interviews/analyze-answer",
            post(interviews::handle_analyze_answer),
        )
        .route(
            "/api/v1/analytics/summary",
            get(interviews::handle_analytics_summary),
        )
        // Training templates
        .route(
            "/api/v1/training/examples",
            get(training::handle_list_examples),
        )
        .with_state(state)
}
