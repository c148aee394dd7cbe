use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(rename = "productos")]
    pub products: Vec<models::product::Model>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(rename = "total_productos")]
    pub total_products: u64,
    // null when the well-known config key was never written
    #[serde(rename = "ultima_actualizacion")]
    pub last_updated: Option<serde_json::Value>,
}

/// Simplified full-catalog listing for the web front-end.
pub async fn get_products(
    State(state): State<ServerState>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = service::catalog::list_catalog(&state.db).await?;
    Ok(Json(ProductsResponse { success: true, count: products.len(), products }))
}

pub async fn get_stats(State(state): State<ServerState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = service::catalog::stats(&state.db).await?;
    Ok(Json(StatsResponse {
        success: true,
        total_products: stats.total_products,
        last_updated: stats.last_updated,
    }))
}
