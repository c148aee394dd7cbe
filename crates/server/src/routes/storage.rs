use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::routes::ServerState;

fn default_shared() -> bool { true }

#[derive(Debug, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    // accepted for wire compatibility, never consulted
    #[serde(default = "default_shared")]
    pub shared: bool,
}

#[derive(Debug, Deserialize)]
pub struct GetQuery {
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_shared")]
    pub shared: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_shared")]
    pub shared: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_shared")]
    pub shared: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub keys: Vec<String>,
    #[serde(rename = "productos", skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<models::product::Model>>,
    pub count: usize,
}

pub async fn set_value(
    State(state): State<ServerState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<Value>, ApiError> {
    service::storage::set(&state.db, &req.key, &req.value, req.shared).await?;
    Ok(Json(json!({"success": true, "key": req.key})))
}

pub async fn get_value(
    State(state): State<ServerState>,
    Query(q): Query<GetQuery>,
) -> Result<Json<Value>, ApiError> {
    let value = service::storage::get(&state.db, &q.key, q.shared).await?;
    Ok(Json(json!({"key": q.key, "value": value})))
}

pub async fn list_keys(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let listing = service::storage::list(&state.db, &q.prefix, q.shared).await?;
    Ok(Json(ListResponse {
        count: listing.count(),
        keys: listing.keys,
        products: listing.products,
    }))
}

pub async fn delete_value(
    State(state): State<ServerState>,
    Query(q): Query<DeleteQuery>,
) -> Result<Json<Value>, ApiError> {
    service::storage::delete(&state.db, &q.key, q.shared).await?;
    Ok(Json(json!({"success": true, "deleted": true, "key": q.key})))
}
