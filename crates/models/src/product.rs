use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One catalog item. Column names are the Rust field names; the serde
/// renames are the wire contract both existing clients speak.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "tallas", default)]
    pub sizes: String,
    #[serde(rename = "imagen", default)]
    pub image: String,
    // caller-supplied timestamp text, listing sort key (descending)
    #[serde(rename = "fecha")]
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Full-replace upsert keyed on `id` (last-writer-wins, no merge).
/// Read-then-decide: update when the row exists, insert otherwise.
pub async fn upsert(db: &DatabaseConnection, record: Model) -> Result<Model, errors::ModelError> {
    if record.id.trim().is_empty() {
        return Err(errors::ModelError::Validation("product id required".into()));
    }
    let existing = Entity::find_by_id(record.id.clone())
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    let am = ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        price: Set(record.price),
        description: Set(record.description),
        sizes: Set(record.sizes),
        image: Set(record.image),
        created_at: Set(record.created_at),
    };
    let saved = if existing.is_some() {
        am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?
    } else {
        am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?
    };
    Ok(saved)
}
