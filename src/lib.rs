pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod models;
pub mod seating;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

/// Build the full application router with session and trace layers applied.
///
/// Shared between `main` and the integration tests so both run the exact
/// same middleware stack.
pub fn router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    controllers::routes()
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}
