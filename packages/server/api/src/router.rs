use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Any origin, method and header, with credentials. The request's own values
/// are mirrored back since `*` is not allowed alongside credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(handlers::router())
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
