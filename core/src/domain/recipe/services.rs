use crate::domain::{
    chat::ports::LLMClient,
    common::services::Service,
    recipe::{
        entities::Recipe, matcher::search, ports::RecipeService,
        value_objects::SearchRecipesInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    fn search_recipes(&self, input: SearchRecipesInput) -> Vec<Recipe> {
        let mut rng = rand::thread_rng();

        let results: Vec<Recipe> = search(&self.catalog, &input.query, &mut rng)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            query = %input.query,
            results = results.len(),
            "recipe search"
        );

        results
    }

    fn catalog_size(&self) -> usize {
        self.catalog.len()
    }
}
