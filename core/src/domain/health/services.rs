use crate::domain::{
    chat::ports::LLMClient,
    common::services::Service,
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    fn health(&self) -> HealthStatus {
        let message = if self.catalog.is_empty() {
            "Backend active without recipes, check the dataset".to_string()
        } else {
            "Backend active with dataset images".to_string()
        };

        HealthStatus {
            status: "online".to_string(),
            message,
            recipes: self.catalog.len(),
            loaded_at: self.catalog.loaded_at(),
            chat_available: self.llm_client.is_some(),
        }
    }
}
