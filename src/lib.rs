use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod front_end;
pub mod history;
pub mod modules;
pub mod services;
pub mod view;

use config::AppConfig;

/// Shared handler state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(modules::praise::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
