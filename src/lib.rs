//! User account registration/authentication and read-only thread
//! reporting over PostgreSQL, built with axum.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod reports;

pub use config::Config;
pub use error::AppError;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use auth::JwtSecret;
use db::DbPool;

/// Shared application state: the connection pool and the token signer,
/// both built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "threadreport" })),
    )
}

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/threads", get(reports::get_thread_count))
        .route("/threads/date-range", get(reports::get_thread_count_by_date_range))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
