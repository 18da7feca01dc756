pub mod get_recipes;
