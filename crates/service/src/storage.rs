use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;

use models::{config_entry, product};

use crate::errors::ServiceError;
use crate::scope::{self, KeyScope};
use crate::value::StorageValue;

/// Result of `list`: record ids plus, for the product scope, the full
/// records. Config entries are never listable.
#[derive(Debug, Default)]
pub struct Listing {
    pub keys: Vec<String>,
    pub products: Option<Vec<product::Model>>,
}

impl Listing {
    pub fn count(&self) -> usize { self.keys.len() }
}

/// Upsert a value under `key`. The `shared` flag is accepted for wire
/// compatibility and has no effect: storage is always durable and visible
/// to all callers.
pub async fn set(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
    _shared: bool,
) -> Result<(), ServiceError> {
    if key.is_empty() || value.is_empty() {
        return Err(ServiceError::InvalidArgument("key and value are required".into()));
    }
    let scope = scope::classify(key);
    match StorageValue::decode(&scope, value)? {
        StorageValue::Product(record) => {
            product::upsert(db, record).await?;
        }
        StorageValue::Raw(raw) => {
            config_entry::upsert(db, key, &raw).await?;
        }
    }
    info!(%key, "stored");
    Ok(())
}

/// Fetch the wire value under `key`.
pub async fn get(db: &DatabaseConnection, key: &str, _shared: bool) -> Result<String, ServiceError> {
    if key.is_empty() {
        return Err(ServiceError::InvalidArgument("key is required".into()));
    }
    match scope::classify(key) {
        KeyScope::Product { id } => {
            let record = product::Entity::find_by_id(id)
                .one(db)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?
                .ok_or_else(|| ServiceError::not_found("key"))?;
            StorageValue::Product(record).encode()
        }
        KeyScope::Config => {
            let entry = config_entry::Entity::find_by_id(key.to_string())
                .one(db)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?
                .ok_or_else(|| ServiceError::not_found("key"))?;
            Ok(entry.value)
        }
    }
}

/// List keys under `prefix`. Only a product-scoped prefix returns rows —
/// all product records, ordered by `created_at` descending. Any other
/// prefix deterministically returns an empty listing.
pub async fn list(
    db: &DatabaseConnection,
    prefix: &str,
    _shared: bool,
) -> Result<Listing, ServiceError> {
    match scope::classify(prefix) {
        KeyScope::Product { .. } => {
            let rows = product::Entity::find()
                .order_by_desc(product::Column::CreatedAt)
                .all(db)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
            Ok(Listing {
                keys: rows.iter().map(|p| p.id.clone()).collect(),
                products: Some(rows),
            })
        }
        KeyScope::Config => Ok(Listing::default()),
    }
}

/// Delete the value under `key`; at most one row. `NotFound` when nothing
/// was removed.
pub async fn delete(db: &DatabaseConnection, key: &str, _shared: bool) -> Result<(), ServiceError> {
    if key.is_empty() {
        return Err(ServiceError::InvalidArgument("key is required".into()));
    }
    let affected = match scope::classify(key) {
        KeyScope::Product { id } => product::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .rows_affected,
        KeyScope::Config => config_entry::Entity::delete_by_id(key.to_string())
            .exec(db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .rows_affected,
    };
    if affected == 0 {
        return Err(ServiceError::not_found("key"));
    }
    info!(%key, "deleted");
    Ok(())
}
