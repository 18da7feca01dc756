use std::sync::Arc;

use crate::domain::recipe::catalog::Catalog;

/// Holds the read-only catalog and the outbound adapters. Every service port
/// of the domain is implemented on this type.
#[derive(Clone)]
pub struct Service<LLM> {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) llm_client: Option<LLM>,
}

impl<LLM> Service<LLM> {
    pub fn new(catalog: Catalog, llm_client: Option<LLM>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            llm_client,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
