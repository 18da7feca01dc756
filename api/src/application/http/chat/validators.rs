use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(
        min = 1,
        max = 4000,
        message = "message must be between 1 and 4000 characters"
    ))]
    pub message: String,

    #[serde(rename = "recipeContext", default)]
    pub recipe_context: Option<RecipeContext>,
}

/// The recipe the user is cooking. Only the title is used.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RecipeContext {
    #[serde(default)]
    pub title: Option<String>,
}
