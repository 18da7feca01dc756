use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recipe of the catalog, normalized at load time.
///
/// Every field is filled: missing source values are replaced by their
/// defaults during loading and `ingredients` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Row position in the source dataset. Only stable within one load.
    pub id: usize,
    pub title: String,
    pub cuisine: String,
    pub diet: String,
    /// Preparation time label, always `"<value> min"`.
    #[serde(rename = "time")]
    pub prep_time_label: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    /// Lowercased title followed by the space-joined ingredient tags.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.ingredients.join(" ")).to_lowercase()
    }
}
