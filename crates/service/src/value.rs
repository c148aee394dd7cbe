use models::product;

use crate::errors::ServiceError;
use crate::scope::KeyScope;

/// A wire value resolved against its key scope: either a structured product
/// record or an opaque string stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Product(product::Model),
    Raw(String),
}

impl StorageValue {
    /// Decode a wire value for the given scope. Product scope requires a
    /// JSON object carrying at least `id`, `nombre`, `precio` and `fecha`;
    /// config scope wraps the string verbatim.
    pub fn decode(scope: &KeyScope, raw: &str) -> Result<Self, ServiceError> {
        match scope {
            KeyScope::Product { .. } => {
                let record: product::Model = serde_json::from_str(raw).map_err(|e| {
                    ServiceError::Validation(format!("malformed product payload: {}", e))
                })?;
                if record.id.trim().is_empty() {
                    return Err(ServiceError::Validation("product id required".into()));
                }
                if record.name.trim().is_empty() {
                    return Err(ServiceError::Validation("product name required".into()));
                }
                Ok(Self::Product(record))
            }
            KeyScope::Config => Ok(Self::Raw(raw.to_string())),
        }
    }

    /// Re-serialize to the wire value shape.
    pub fn encode(&self) -> Result<String, ServiceError> {
        match self {
            Self::Product(record) => serde_json::to_string(record)
                .map_err(|e| ServiceError::Storage(e.to_string())),
            Self::Raw(value) => Ok(value.clone()),
        }
    }
}
