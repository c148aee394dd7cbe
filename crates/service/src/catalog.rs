use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use models::{config_entry, product};

use crate::errors::ServiceError;

/// Well-known config key the bot writes after each catalog change.
pub const LAST_UPDATED_KEY: &str = "catalog:last_updated";

/// Aggregate view for the web catalog's stats widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_products: u64,
    /// Decoded from the stored JSON text; `None` when the key was never set.
    pub last_updated: Option<serde_json::Value>,
}

/// All product records, `created_at` descending — same ordering contract as
/// the product-scoped list, without prefix matching.
pub async fn list_catalog(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    product::Entity::find()
        .order_by_desc(product::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))
}

pub async fn stats(db: &DatabaseConnection) -> Result<CatalogStats, ServiceError> {
    let total_products = product::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

    let last_updated = config_entry::Entity::find_by_id(LAST_UPDATED_KEY.to_string())
        .one(db)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))?
        .map(|entry| {
            // stored as JSON text; non-JSON text surfaces as a plain string
            serde_json::from_str(&entry.value)
                .unwrap_or_else(|_| serde_json::Value::String(entry.value))
        });

    Ok(CatalogStats { total_products, last_updated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn stats_on_empty_store() -> anyhow::Result<()> {
        let db = get_db().await?;
        let s = stats(&db).await?;
        assert_eq!(s.total_products, 0);
        assert!(s.last_updated.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn stats_counts_products_and_decodes_last_updated() -> anyhow::Result<()> {
        let db = get_db().await?;
        storage::set(
            &db,
            "zapato:1",
            r#"{"id":"1","nombre":"Bota","precio":49.99,"fecha":"2024-01-01T00:00:00"}"#,
            true,
        )
        .await?;
        storage::set(
            &db,
            "zapato:2",
            r#"{"id":"2","nombre":"Sandalia","precio":29.99,"fecha":"2024-01-02T00:00:00"}"#,
            true,
        )
        .await?;
        storage::set(&db, LAST_UPDATED_KEY, "\"2024-02-01\"", true).await?;

        let s = stats(&db).await?;
        assert_eq!(s.total_products, 2);
        assert_eq!(s.last_updated, Some(serde_json::Value::String("2024-02-01".into())));
        Ok(())
    }

    #[tokio::test]
    async fn stats_surfaces_non_json_value_as_plain_string() -> anyhow::Result<()> {
        let db = get_db().await?;
        storage::set(&db, LAST_UPDATED_KEY, "ayer por la tarde", true).await?;

        let s = stats(&db).await?;
        assert_eq!(
            s.last_updated,
            Some(serde_json::Value::String("ayer por la tarde".into()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_catalog_matches_product_list_ordering() -> anyhow::Result<()> {
        let db = get_db().await?;
        storage::set(
            &db,
            "zapato:a",
            r#"{"id":"a","nombre":"A","precio":1.0,"fecha":"2024-03-01T00:00:00"}"#,
            true,
        )
        .await?;
        storage::set(
            &db,
            "zapato:b",
            r#"{"id":"b","nombre":"B","precio":2.0,"fecha":"2024-04-01T00:00:00"}"#,
            true,
        )
        .await?;

        let catalog = list_catalog(&db).await?;
        let listing = storage::list(&db, "zapato:", true).await?;
        assert_eq!(
            catalog.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            listing.keys.iter().map(String::as_str).collect::<Vec<_>>()
        );
        assert_eq!(catalog[0].id, "b");
        Ok(())
    }
}
