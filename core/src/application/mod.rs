use crate::{
    domain::{
        common::{CulinaiConfig, services::Service},
        recipe::catalog::load_catalog,
    },
    infrastructure::{dataset::CsvRecipeSource, llm::GeminiLLMClient},
};

pub type CulinaiService = Service<GeminiLLMClient>;

/// Loads the dataset once and wires the outbound adapters.
///
/// A dataset that cannot be read yields an empty catalog, not an error.
pub async fn create_service(config: CulinaiConfig) -> Result<CulinaiService, anyhow::Error> {
    let source = CsvRecipeSource::new(config.dataset.path.clone());
    let catalog = tokio::task::spawn_blocking(move || load_catalog(&source)).await?;

    let llm_client = match config.llm.gemini_api_key {
        Some(api_key) if !api_key.trim().is_empty() => {
            Some(GeminiLLMClient::new(api_key, config.llm.gemini_model))
        }
        _ => {
            tracing::warn!("GEMINI_API_KEY is not set, chat is offline");
            None
        }
    };

    Ok(Service::new(catalog, llm_client))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::{
        common::{DatasetConfig, LLMConfig},
        health::ports::HealthCheckService,
        recipe::ports::RecipeService,
    };

    fn config(path: &std::path::Path, api_key: Option<&str>) -> CulinaiConfig {
        CulinaiConfig {
            dataset: DatasetConfig {
                path: path.to_path_buf(),
            },
            llm: LLMConfig {
                gemini_api_key: api_key.map(str::to_string),
                gemini_model: "gemini-2.5-flash".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_service_loads_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name,instructions\nChicken Biryani,Layer rice and chicken\n")
            .unwrap();

        let service = create_service(config(file.path(), Some("key")))
            .await
            .unwrap();

        assert_eq!(service.catalog_size(), 1);
        assert!(service.health().chat_available);
    }

    #[tokio::test]
    async fn test_create_service_survives_missing_dataset() {
        let service = create_service(config(std::path::Path::new("/nope/recipes.csv"), None))
            .await
            .unwrap();

        assert_eq!(service.catalog_size(), 0);
        assert!(!service.health().chat_available);
    }

    #[tokio::test]
    async fn test_blank_api_key_means_offline() {
        let service = create_service(config(std::path::Path::new("/nope.csv"), Some("  ")))
            .await
            .unwrap();

        assert!(!service.health().chat_available);
    }
}
