//! Palette Picker API: projects and their palettes over HTTP, backed by
//! SQLite.

/// Server configuration.
pub mod config;
/// SQLite storage layer.
pub mod db;
/// Error taxonomy and HTTP status mapping.
pub mod error;
/// HTTP handlers.
pub mod handlers;
/// Data models and request validation.
pub mod models;

pub use config::Config;
pub use db::Database;
pub use error::AppError;

use axum::{
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state.
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/api/v1/projects", get(handlers::project::list_projects))
        .route("/api/v1/projects", post(handlers::project::create_project))
        .route("/api/v1/projects/:id", get(handlers::project::get_project))
        .route("/api/v1/projects/:id", put(handlers::project::rename_project))
        .route(
            "/api/v1/projects/:id",
            delete(handlers::project::delete_project),
        )
        .route(
            "/api/v1/projects/:id/palettes",
            get(handlers::project::list_project_palettes),
        )
        .route("/api/v1/palettes", post(handlers::palette::create_palette))
        .route("/api/v1/palettes/:id", get(handlers::palette::get_palette))
        .route("/api/v1/palettes/:id", put(handlers::palette::update_palette))
        .route(
            "/api/v1/palettes/:id",
            delete(handlers::palette::delete_palette),
        )
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
