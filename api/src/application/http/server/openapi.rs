use crate::application::http::{
    chat::router::ChatApiDoc,
    health::handlers::get_health::{__path_get_health, get_health},
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CulinAI API"
    ),
    paths(get_health),
    nest(
        (path = "/api/recipes", api = RecipeApiDoc),
        (path = "/api/chat", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;
