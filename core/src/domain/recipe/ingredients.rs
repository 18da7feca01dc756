//! Heuristic ingredient tagging.
//!
//! Tags come from a fixed vocabulary matched as case-insensitive substrings,
//! so "Egg" also tags an eggplant dish. There is no tokenization.

pub const INGREDIENT_VOCABULARY: [&str; 12] = [
    "Tomato", "Onion", "Garlic", "Ginger", "Chicken", "Fish", "Rice", "Paneer", "Potato", "Dal",
    "Egg", "Brinjal",
];

pub const DEFAULT_INGREDIENTS: [&str; 3] = ["Spices", "Oil", "Salt"];

/// Tags found in `text`, in vocabulary order. Falls back to
/// [`DEFAULT_INGREDIENTS`] so the result is never empty.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();

    let found: Vec<String> = INGREDIENT_VOCABULARY
        .iter()
        .filter(|ingredient| haystack.contains(&ingredient.to_lowercase()))
        .map(|ingredient| ingredient.to_string())
        .collect();

    if found.is_empty() {
        DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}
