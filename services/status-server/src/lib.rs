pub mod config;
pub mod deployment;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod system;
pub mod views;

use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Captured once at startup; reported as the deployment date.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/status", get(handlers::pages::status))
        // Monitoring
        .route("/health", get(handlers::health::health_check))
        // JSON API
        .route("/api/info", get(handlers::api::system_info))
        .route("/api/hello", get(handlers::api::hello))
        .route("/api/deployment", get(handlers::api::deployment))
        .route("/api/test", get(handlers::api::diagnostics))
        .route(
            "/api/echo",
            get(handlers::api::echo_query).post(handlers::api::echo_body),
        )
        .fallback(handlers::pages::not_found)
        // Middleware stack (order matters!)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer())
                .layer(middleware::catch_panic_layer()),
        )
        .with_state(state)
}
