use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{chat, health};
use crate::state::AppState;

/// Builds the HTTP surface: `/health` and `POST /api/chat`, behind CORS and
/// request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = build_cors_layer(&state.config.server.cors_allowed_origins);
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::chat))
        .with_state(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(configured: &[String]) -> CorsLayer {
    let allowed_origins = resolve_allowed_origins(configured)
        .into_iter()
        .filter_map(|origin| HeaderValue::from_str(&origin).ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}

fn resolve_allowed_origins(configured: &[String]) -> Vec<String> {
    let origins = configured
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if origins.is_empty() {
        return default_local_origins();
    }

    origins
}

fn default_local_origins() -> Vec<String> {
    vec![
        "http://localhost".to_string(),
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://127.0.0.1".to_string(),
        "http://127.0.0.1:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_origin_list_falls_back_to_local_defaults() {
        assert_eq!(resolve_allowed_origins(&[]), default_local_origins());
        assert_eq!(
            resolve_allowed_origins(&["  ".to_string()]),
            default_local_origins()
        );
    }

    #[test]
    fn configured_origins_are_trimmed() {
        let origins = resolve_allowed_origins(&[
            " https://jobs.example.com ".to_string(),
            String::new(),
        ]);
        assert_eq!(origins, vec!["https://jobs.example.com".to_string()]);
    }
}
