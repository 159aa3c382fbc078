mod analysis;
mod config;
mod errors;
mod feedback;
mod interviews;
mod models;
mod routes;
mod screening;
mod state;
mod store;
mod training;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::screening::SkillTable;
use crate::analysis::sentiment::LexiconClassifier;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::{
    InMemoryCandidateStore, InMemoryFeedbackStore, InMemoryInterviewStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentHub API v{}", env!("CARGO_PKG_VERSION"));

    // Scoring tables are compiled once here and shared read-only for the life
    // of the process.
    let classifier = Arc::new(LexiconClassifier::new()?);
    let skills = Arc::new(SkillTable::builtin());

    let state = AppState {
        feedback: Arc::new(InMemoryFeedbackStore::default()),
        candidates: Arc::new(InMemoryCandidateStore::default()),
        interviews: Arc::new(InMemoryInterviewStore::default()),
        classifier,
        skills,
        training: Arc::new(store::seed::training_examples()),
    };

    if config.seed_demo_data {
        store::seed::seed_demo_data(&state).await?;
        info!("In-memory stores seeded with demo data");
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
