use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    /// Comma-separated ingredients or words, empty to browse, or
    /// `quick_suggestions` for three random picks.
    #[param(example = "tomato,rice")]
    #[serde(default)]
    pub search: String,
}
