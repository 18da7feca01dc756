use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{RawRow, SearchRecipesInput},
    },
};

/// Tabular dataset reader. Yields rows in file order.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    fn read_rows(&self) -> Result<Vec<RawRow>, CoreError>;

    /// Human readable location, used in load diagnostics.
    fn describe(&self) -> String;
}

/// Search over the loaded catalog. Pure and synchronous; never fails.
pub trait RecipeService: Send + Sync {
    fn search_recipes(&self, input: SearchRecipesInput) -> Vec<Recipe>;

    fn catalog_size(&self) -> usize;
}
