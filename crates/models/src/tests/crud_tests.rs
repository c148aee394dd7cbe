use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{config_entry, db, product};

/// Fresh in-memory database with the schema applied.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = db::connect_with(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample_product(id: &str, created_at: &str) -> product::Model {
    product::Model {
        id: id.to_string(),
        name: "Bota".to_string(),
        price: 49.99,
        description: "Cuero".to_string(),
        sizes: "38,39,40".to_string(),
        image: "https://example.com/bota.jpg".to_string(),
        created_at: created_at.to_string(),
    }
}

#[tokio::test]
async fn product_upsert_and_find() -> Result<()> {
    let db = setup_test_db().await?;

    let created = product::upsert(&db, sample_product("1", "2024-01-01T00:00:00")).await?;
    assert_eq!(created.name, "Bota");

    let found = product::Entity::find_by_id("1").one(&db).await?;
    let found = found.expect("product stored");
    assert_eq!(found.price, 49.99);
    assert_eq!(found.created_at, "2024-01-01T00:00:00");
    Ok(())
}

#[tokio::test]
async fn product_upsert_replaces_whole_row() -> Result<()> {
    let db = setup_test_db().await?;

    product::upsert(&db, sample_product("1", "2024-01-01T00:00:00")).await?;
    let mut replacement = sample_product("1", "2024-02-01T00:00:00");
    replacement.price = 59.99;
    replacement.description = String::new();
    product::upsert(&db, replacement).await?;

    let rows = product::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, 59.99);
    // full replace, no merge: the old description is gone
    assert_eq!(rows[0].description, "");
    Ok(())
}

#[tokio::test]
async fn product_rejects_empty_id() -> Result<()> {
    let db = setup_test_db().await?;
    let res = product::upsert(&db, sample_product("", "2024-01-01T00:00:00")).await;
    assert!(matches!(res, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn product_delete() -> Result<()> {
    let db = setup_test_db().await?;
    product::upsert(&db, sample_product("1", "2024-01-01T00:00:00")).await?;

    let res = product::Entity::delete_by_id("1").exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(product::Entity::find_by_id("1").one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn config_entry_upsert_overwrites() -> Result<()> {
    let db = setup_test_db().await?;

    let first = config_entry::upsert(&db, "catalog:last_updated", "\"2024-01-01\"").await?;
    assert_eq!(first.value, "\"2024-01-01\"");
    assert!(!first.updated_at.is_empty());

    config_entry::upsert(&db, "catalog:last_updated", "\"2024-02-01\"").await?;
    let rows = config_entry::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, "\"2024-02-01\"");
    Ok(())
}

#[tokio::test]
async fn product_wire_field_names_are_spanish() -> Result<()> {
    let m = sample_product("1", "2024-01-01T00:00:00");
    let json = serde_json::to_value(&m)?;
    assert!(json.get("nombre").is_some());
    assert!(json.get("precio").is_some());
    assert!(json.get("fecha").is_some());
    assert!(json.get("name").is_none());

    let parsed: product::Model = serde_json::from_value(json)?;
    assert_eq!(parsed, m);
    Ok(())
}

#[tokio::test]
async fn product_optional_wire_fields_default_empty() -> Result<()> {
    let parsed: product::Model = serde_json::from_str(
        r#"{"id":"1","nombre":"Bota","precio":49.99,"fecha":"2024-01-01T00:00:00"}"#,
    )?;
    assert_eq!(parsed.description, "");
    assert_eq!(parsed.sizes, "");
    assert_eq!(parsed.image, "");
    Ok(())
}
