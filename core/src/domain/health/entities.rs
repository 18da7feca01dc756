use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    /// Recipes in the catalog. Zero means the dataset failed to load.
    pub recipes: usize,
    pub loaded_at: DateTime<Utc>,
    pub chat_available: bool,
}
