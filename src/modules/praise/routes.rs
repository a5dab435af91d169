use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::praise::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/generate-praise", post(controller::generate_praise))
        .route("/api/intensities", get(controller::list_intensities))
}
