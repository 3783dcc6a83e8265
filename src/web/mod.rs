//! Web layer - axum routes, page templates, and form intake
//!
//! This module exposes the site over HTTP. Handlers are thin: they pull data
//! from `core`, hand it to a template, and translate intake outcomes into
//! redirects with notices.

/// Handler error type and its HTTP mapping
pub mod error;
/// Single-read notices carried across redirects
pub mod flash;
/// POST handlers
pub mod forms;
/// GET handlers
pub mod pages;
/// Askama templates and view models
pub mod templates;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
/// Holds the database connection pool; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the site router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/impacts", get(pages::impacts))
        .route("/feedback", get(pages::feedback).post(forms::submit_feedback))
        .route("/contact", get(pages::contact).post(forms::submit_contact))
        .route("/donate", get(pages::donate).post(forms::submit_donation))
        .route("/policy", get(pages::policy))
        .route("/terms", get(pages::terms))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
