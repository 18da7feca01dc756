use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CulinaiConfig {
    pub dataset: DatasetConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` leaves the chat backend offline.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}
