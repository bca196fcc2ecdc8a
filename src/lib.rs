//! Gamer Shop Server Library
//!
//! This module exports the core types and the application router for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;

pub use config::Config;
pub use db::{Db, Store, open_store};
pub use error::{AppError, Result};

use axum::{Router, http::HeaderValue, http::Method};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}

/// Build the full application: JSON API, HTML pages and static assets
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();

    let app = Router::new()
        .merge(routes::api_router())
        .merge(pages::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(session::create_session_layer(&config))
        .layer(cors_layer(&config))
        .with_state(state);

    if config.log_requests {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Configure CORS from the allowed origins list
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
