use std::collections::HashMap;

/// Reserved query returning a small random sample of the catalog.
pub const QUICK_SUGGESTIONS_QUERY: &str = "quick_suggestions";
pub const SUGGESTION_SAMPLE_SIZE: usize = 3;
pub const BROWSE_SAMPLE_SIZE: usize = 6;
pub const MAX_SEARCH_RESULTS: usize = 15;

pub const DEFAULT_CUISINE: &str = "Global";
pub const DEFAULT_DIET: &str = "Standard";
pub const DEFAULT_PREP_TIME: &str = "30";
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=800";

/// A loosely typed dataset row.
///
/// Column names are trimmed and lowercased on insertion, so lookups are
/// insensitive to the header spelling used by the source file. When two
/// headers normalize to the same name the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = normalize_column(key.as_ref());
        self.fields.entry(key).or_insert_with(|| value.into());
    }

    /// Value of a column, or `None` when the column is missing or the cell is blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// How a raw search string is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    Suggestions,
    Browse,
    Terms(Vec<String>),
}

impl SearchMode {
    /// Classifies a raw query. The suggestion token is compared before any
    /// normalization; terms are lowercased, comma-separated and trimmed.
    pub fn parse(raw_query: &str) -> Self {
        if raw_query == QUICK_SUGGESTIONS_QUERY {
            return SearchMode::Suggestions;
        }

        let terms: Vec<String> = raw_query
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            SearchMode::Browse
        } else {
            SearchMode::Terms(terms)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchRecipesInput {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_normalizes_headers() {
        let row = RawRow::from_pairs([("  Name ", "Dal Tadka"), ("INSTRUCTIONS", "Boil")]);
        assert_eq!(row.get("name"), Some("Dal Tadka"));
        assert_eq!(row.get("instructions"), Some("Boil"));
        assert_eq!(row.get("Name"), None);
    }

    #[test]
    fn test_raw_row_first_duplicate_header_wins() {
        let row = RawRow::from_pairs([("Name", "first"), ("name ", "second")]);
        assert_eq!(row.get("name"), Some("first"));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_raw_row_blank_cell_is_absent() {
        let row = RawRow::from_pairs([("cuisine", "   ")]);
        assert_eq!(row.get("cuisine"), None);
        assert_eq!(row.get_or("cuisine", DEFAULT_CUISINE), "Global");
    }

    #[test]
    fn test_parse_suggestion_token_is_case_sensitive() {
        assert_eq!(
            SearchMode::parse("quick_suggestions"),
            SearchMode::Suggestions
        );
        assert_eq!(
            SearchMode::parse("QUICK_SUGGESTIONS"),
            SearchMode::Terms(vec!["quick_suggestions".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_and_blank_queries_browse() {
        assert_eq!(SearchMode::parse(""), SearchMode::Browse);
        assert_eq!(SearchMode::parse("   "), SearchMode::Browse);
        assert_eq!(SearchMode::parse(" , ,,"), SearchMode::Browse);
    }

    #[test]
    fn test_parse_terms_are_trimmed_and_lowercased() {
        assert_eq!(
            SearchMode::parse(" Tomato , RICE,,egg "),
            SearchMode::Terms(vec![
                "tomato".to_string(),
                "rice".to_string(),
                "egg".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_keeps_duplicate_terms() {
        assert_eq!(
            SearchMode::parse("egg,egg"),
            SearchMode::Terms(vec!["egg".to_string(), "egg".to_string()])
        );
    }
}
