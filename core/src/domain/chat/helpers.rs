use crate::domain::common::entities::app_errors::CoreError;

pub const EMPTY_ANSWER_REPLY: &str = "Chef, I didn't quite catch that.";
pub const OFFLINE_REPLY: &str = "My AI connection is offline! Please check your API key and library.";
pub const RATE_LIMITED_REPLY: &str =
    "I'm exhausted, Chef! I've reached my free rate limit. Please wait a minute.";
pub const BROKEN_CONNECTION_REPLY: &str =
    "My connection to the pantry is broken! Check the server logs for the exact error.";

const UNKNOWN_DISH: &str = "nothing in particular";

pub fn build_chat_prompt(message: &str, recipe_title: Option<&str>) -> String {
    let dish = recipe_title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(UNKNOWN_DISH);

    format!(
        "You are CulinAI, an expert Sous-Chef. User is cooking: {dish}. Question: {message}. Reply briefly."
    )
}

/// Reply shown to the user when the chat backend fails.
pub fn fallback_reply(error: &CoreError) -> &'static str {
    match error {
        CoreError::LlmUnavailable => OFFLINE_REPLY,
        CoreError::RateLimited => RATE_LIMITED_REPLY,
        _ => BROKEN_CONNECTION_REPLY,
    }
}

/// Quota errors are reported by the provider either as HTTP 429 or in the message.
pub fn is_quota_error(status: u16, body: &str) -> bool {
    let body = body.to_lowercase();
    status == 429 || body.contains("quota") || body.contains("429")
}
