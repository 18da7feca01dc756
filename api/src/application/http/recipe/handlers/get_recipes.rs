use axum::extract::{Query, State};
use culinai_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::SearchRecipesInput,
};

use crate::application::http::{
    recipe::validators::GetRecipesParams,
    server::{api_entities::response::Response, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Search recipes",
    description = "Returns at most 15 recipes. Terms are matched with AND first, then OR, then a random selection so the result is never empty while the catalog has recipes.",
    params(GetRecipesParams),
    responses(
        (status = 200, body = [Recipe])
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<GetRecipesParams>,
) -> Response<Vec<Recipe>> {
    let recipes = state.service.search_recipes(SearchRecipesInput {
        query: params.search,
    });

    Response::OK(recipes)
}
