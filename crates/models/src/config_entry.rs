use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One opaque setting. The value is stored verbatim; structured values are
/// caller-serialized (JSON text) before storage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "config_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Last-writer-wins replace; `updated_at` is stamped here, not by callers.
pub async fn upsert(db: &DatabaseConnection, key: &str, value: &str) -> Result<Model, errors::ModelError> {
    if key.trim().is_empty() {
        return Err(errors::ModelError::Validation("config key required".into()));
    }
    let existing = Entity::find_by_id(key.to_string())
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    let am = ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now().to_rfc3339()),
    };
    let saved = if existing.is_some() {
        am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?
    } else {
        am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?
    };
    Ok(saved)
}
