use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod catalog;
pub mod storage;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    let database = match state.db.ping().await {
        Ok(()) => "connected",
        Err(_) => "unreachable",
    };
    Json(Health { status: "ok", timestamp: Utc::now().to_rfc3339(), database })
}

/// Build the full application router: storage endpoints, catalog read
/// endpoints, and the liveness probe.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Storage façade (bot + catalog write path)
    let storage_api = Router::new()
        .route("/storage/set", post(storage::set_value))
        .route("/storage/get", get(storage::get_value))
        .route("/storage/list", get(storage::list_keys))
        .route("/storage/delete", delete(storage::delete_value));

    // Read-only projections (web catalog)
    let catalog_api = Router::new()
        .route("/api/productos", get(catalog::get_products))
        .route("/api/stats", get(catalog::get_stats));

    Router::new()
        .route("/health", get(health))
        .merge(storage_api)
        .merge(catalog_api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
