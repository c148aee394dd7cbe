use serde::{Deserialize, Serialize};

/// Liveness probe payload: process status plus store connectivity.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}
