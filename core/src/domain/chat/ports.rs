use std::future::Future;

use crate::domain::{
    chat::{entities::ChatReply, value_objects::ChatInput},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Plain text completion. An answer without text yields an empty string.
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the sous-chef chat
pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}
