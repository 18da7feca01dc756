use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::domain::recipe::{
    entities::Recipe,
    ingredients::extract_ingredients,
    ports::RecipeSource,
    value_objects::{
        DEFAULT_CUISINE, DEFAULT_DIET, DEFAULT_PREP_TIME, FALLBACK_IMAGE_URL, RawRow,
    },
};

/// Immutable in-memory recipe collection, built once at start-up.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    searchable: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::from_recipes(Vec::new())
    }

    /// Normalizes raw rows into recipes, keeping input order. Row `i` gets id `i`.
    pub fn load(rows: impl IntoIterator<Item = RawRow>) -> Self {
        let recipes = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| recipe_from_row(index, &row))
            .collect();

        Self::from_recipes(recipes)
    }

    pub(crate) fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let searchable = recipes.iter().map(Recipe::searchable_text).collect();

        Self {
            recipes,
            searchable,
            loaded_at: Utc::now(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes paired with their precomputed searchable text.
    pub fn entries(&self) -> impl Iterator<Item = (&Recipe, &str)> {
        self.recipes
            .iter()
            .zip(self.searchable.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Reads every row from `source` and builds the catalog.
///
/// A failing source never aborts start-up: the error is logged and an empty
/// catalog is returned, leaving search in a zero-result state.
pub fn load_catalog<S: RecipeSource>(source: &S) -> Catalog {
    match source.read_rows() {
        Ok(rows) => {
            let catalog = Catalog::load(rows);
            info!("Loaded {} recipes from {}", catalog.len(), source.describe());
            catalog
        }
        Err(e) => {
            error!("Failed to load recipes from {}: {}", source.describe(), e);
            Catalog::empty()
        }
    }
}

fn recipe_from_row(index: usize, row: &RawRow) -> Recipe {
    let title = row.get_or("name", "").to_string();
    let instructions = row.get_or("instructions", "").to_string();

    let ingredients = extract_ingredients(&format!("{title}{instructions}"));

    Recipe {
        id: index,
        title,
        cuisine: row.get_or("cuisine", DEFAULT_CUISINE).to_string(),
        diet: row.get_or("diet", DEFAULT_DIET).to_string(),
        prep_time_label: format!("{} min", row.get_or("prep_time", DEFAULT_PREP_TIME).trim()),
        image_url: resolve_image_url(row),
        ingredients,
        instructions,
    }
}

fn resolve_image_url(row: &RawRow) -> String {
    let candidate = row
        .get("image_url")
        .or_else(|| row.get("image"))
        .unwrap_or_default()
        .trim();

    if candidate.starts_with("http") {
        candidate.to_string()
    } else {
        FALLBACK_IMAGE_URL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::recipe::ports::MockRecipeSource;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let catalog = Catalog::load(vec![RawRow::new()]);
        let recipe = &catalog.recipes()[0];

        assert_eq!(recipe.id, 0);
        assert_eq!(recipe.title, "");
        assert_eq!(recipe.instructions, "");
        assert_eq!(recipe.cuisine, "Global");
        assert_eq!(recipe.diet, "Standard");
        assert_eq!(recipe.prep_time_label, "30 min");
        assert_eq!(recipe.image_url, FALLBACK_IMAGE_URL);
        assert_eq!(recipe.ingredients, vec!["Spices", "Oil", "Salt"]);
    }

    #[test]
    fn test_fields_are_read_with_messy_headers() {
        let catalog = Catalog::load(vec![row(&[
            (" Name", "Paneer Tikka"),
            ("CUISINE ", "North Indian"),
            ("Diet", "Vegetarian"),
            ("Prep_Time", "45"),
            ("Instructions", "Marinate the paneer with ginger and garlic."),
            ("Image_URL", "  https://cdn.example.com/paneer.jpg "),
        ])]);
        let recipe = &catalog.recipes()[0];

        assert_eq!(recipe.title, "Paneer Tikka");
        assert_eq!(recipe.cuisine, "North Indian");
        assert_eq!(recipe.diet, "Vegetarian");
        assert_eq!(recipe.prep_time_label, "45 min");
        assert_eq!(recipe.image_url, "https://cdn.example.com/paneer.jpg");
        assert_eq!(recipe.ingredients, vec!["Garlic", "Ginger", "Paneer"]);
    }

    #[test]
    fn test_image_falls_back_to_image_column() {
        let catalog = Catalog::load(vec![row(&[("image", "http://img.example.com/a.png")])]);
        assert_eq!(catalog.recipes()[0].image_url, "http://img.example.com/a.png");
    }

    #[test]
    fn test_blank_image_url_uses_image_column() {
        let catalog = Catalog::load(vec![row(&[
            ("image_url", "  "),
            ("image", "http://img.example.com/y.png"),
        ])]);
        assert_eq!(catalog.recipes()[0].image_url, "http://img.example.com/y.png");
    }

    #[test]
    fn test_ingredient_scan_reads_title_then_instructions() {
        let catalog = Catalog::load(vec![row(&[("name", "Tom"), ("instructions", "ato soup")])]);
        assert_eq!(catalog.recipes()[0].ingredients, vec!["Tomato"]);
    }

    #[test]
    fn test_relative_image_is_replaced() {
        let catalog = Catalog::load(vec![
            row(&[("image_url", "/static/a.png")]),
            row(&[("image_url", "ftp://host/a.png")]),
            row(&[("image_url", ""), ("image", "images/b.png")]),
        ]);

        for recipe in catalog.recipes() {
            assert_eq!(recipe.image_url, FALLBACK_IMAGE_URL);
        }
    }

    #[test]
    fn test_ids_are_dense_and_ordered() {
        let rows = (0..25).map(|i| {
            let name = format!("Recipe {i}");
            row(&[("name", name.as_str())])
        });
        let catalog = Catalog::load(rows);

        let ids: Vec<usize> = catalog.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());
        assert_eq!(catalog.recipes()[7].title, "Recipe 7");
    }

    #[test]
    fn test_every_recipe_satisfies_defaults() {
        let catalog = Catalog::load(vec![
            RawRow::new(),
            row(&[("name", "Fish Curry"), ("prep_time", "20")]),
            row(&[("image_url", "not a url"), ("prep_time", " ")]),
        ]);

        for recipe in catalog.recipes() {
            assert!(!recipe.ingredients.is_empty());
            assert!(recipe.image_url.starts_with("http"));
            assert!(recipe.prep_time_label.ends_with(" min"));
        }
    }

    #[test]
    fn test_searchable_text_is_precomputed() {
        let catalog = Catalog::load(vec![row(&[("name", "Egg Curry")])]);
        let (_, text) = catalog.entries().next().unwrap();
        assert_eq!(text, "egg curry egg");
    }

    #[test]
    fn test_load_catalog_from_source() {
        let mut source = MockRecipeSource::new();
        source
            .expect_read_rows()
            .times(1)
            .returning(|| Ok(vec![RawRow::from_pairs([("name", "Tomato Rice")])]));
        source
            .expect_describe()
            .returning(|| "test source".to_string());

        let catalog = load_catalog(&source);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recipes()[0].ingredients, vec!["Tomato", "Rice"]);
    }

    #[test]
    fn test_load_catalog_failure_degrades_to_empty() {
        let mut source = MockRecipeSource::new();
        source
            .expect_read_rows()
            .returning(|| Err(CoreError::DatasetUnavailable("missing".to_string())));
        source
            .expect_describe()
            .returning(|| "missing.csv".to_string());

        let catalog = load_catalog(&source);
        assert!(catalog.is_empty());
    }
}
