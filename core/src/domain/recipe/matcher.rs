//! Tiered query matcher.
//!
//! Term queries try an AND match, then an OR match, then fall back to a
//! random browse sample so a non-empty catalog never yields an empty page.
//! Matching is raw substring containment over each recipe's searchable text.

use rand::{Rng, seq::index};

use crate::domain::recipe::{
    catalog::Catalog,
    entities::Recipe,
    value_objects::{BROWSE_SAMPLE_SIZE, MAX_SEARCH_RESULTS, SUGGESTION_SAMPLE_SIZE, SearchMode},
};

pub fn search<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    raw_query: &str,
    rng: &mut R,
) -> Vec<&'a Recipe> {
    match SearchMode::parse(raw_query) {
        SearchMode::Suggestions => sample(catalog, SUGGESTION_SAMPLE_SIZE, rng),
        SearchMode::Browse => sample(catalog, BROWSE_SAMPLE_SIZE, rng),
        SearchMode::Terms(terms) => {
            let matched = match_all(catalog, &terms);
            if !matched.is_empty() {
                return matched;
            }

            let matched = match_any(catalog, &terms);
            if !matched.is_empty() {
                return matched;
            }

            sample(catalog, BROWSE_SAMPLE_SIZE, rng)
        }
    }
}

/// Recipes whose searchable text contains every term, capped, in catalog order.
pub fn match_all<'a>(catalog: &'a Catalog, terms: &[String]) -> Vec<&'a Recipe> {
    filter_entries(catalog, |text| {
        terms.iter().all(|term| text.contains(term.as_str()))
    })
}

/// Recipes whose searchable text contains at least one term, capped, in catalog order.
pub fn match_any<'a>(catalog: &'a Catalog, terms: &[String]) -> Vec<&'a Recipe> {
    filter_entries(catalog, |text| {
        terms.iter().any(|term| text.contains(term.as_str()))
    })
}

fn filter_entries<'a, F>(catalog: &'a Catalog, predicate: F) -> Vec<&'a Recipe>
where
    F: Fn(&str) -> bool,
{
    catalog
        .entries()
        .filter(|(_, text)| predicate(*text))
        .map(|(recipe, _)| recipe)
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

/// Uniform sample without replacement of `min(amount, len)` recipes.
pub fn sample<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    amount: usize,
    rng: &mut R,
) -> Vec<&'a Recipe> {
    let amount = amount.min(catalog.len());
    if amount == 0 {
        return Vec::new();
    }

    index::sample(rng, catalog.len(), amount)
        .into_iter()
        .map(|i| &catalog.recipes()[i])
        .collect()
}
