use super::handlers::get_health::get_health;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let index = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new()
        .route(&index, get(get_health))
        .route(&format!("{}/health", root_path), get(get_health))
}
