use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use culinai_core::domain::{
    chat::{
        entities::ChatReply, helpers::fallback_reply, ports::ChatService,
        value_objects::ChatInput,
    },
    common::entities::app_errors::CoreError,
};

use crate::application::http::{
    chat::validators::ChatRequest,
    server::{
        api_entities::{api_error::ValidateJson, response::Response},
        app_state::AppState,
    },
};

/// Chat failures still answer with a reply the client can show in the
/// conversation, alongside a 500 status.
#[derive(Debug)]
pub struct ChatError(pub CoreError);

impl IntoResponse for ChatError {
    fn into_response(self) -> AxumResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatReply::new(fallback_reply(&self.0))),
        )
            .into_response()
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the sous-chef",
    description = "Forwards a cooking question, with the current recipe title as context, to the LLM backend.",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatReply),
        (status = 400, description = "Invalid request body"),
        (status = 500, body = ChatReply, description = "Backend offline, rate limited or failing")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatReply>, ChatError> {
    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
            recipe_title: payload.recipe_context.and_then(|context| context.title),
        })
        .await
        .map_err(ChatError)?;

    Ok(Response::OK(reply))
}
