use thiserror::Error;

/// Entity-level failures: bad row material before it reaches the store, or
/// the store itself failing.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}
