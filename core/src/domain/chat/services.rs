use crate::domain::{
    chat::{
        entities::ChatReply,
        helpers::{EMPTY_ANSWER_REPLY, build_chat_prompt},
        ports::{ChatService, LLMClient},
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<LLM> ChatService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let llm_client = self.llm_client.as_ref().ok_or(CoreError::LlmUnavailable)?;

        let prompt = build_chat_prompt(&input.message, input.recipe_title.as_deref());

        let answer = llm_client.generate_with_text(prompt).await.map_err(|e| {
            tracing::error!("Chat request failed: {}", e);
            e
        })?;

        if answer.trim().is_empty() {
            return Ok(ChatReply::new(EMPTY_ANSWER_REPLY));
        }

        Ok(ChatReply::new(answer))
    }
}
