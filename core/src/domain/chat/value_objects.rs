#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    /// Title of the recipe the user currently has open, if any.
    pub recipe_title: Option<String>,
}
