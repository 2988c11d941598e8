//! Request-scoped data for transaction categorization.

/// The closed set of spending categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    /// Declaration order. Similarity ties resolve to the earliest entry.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Matches model output like `food`, ` Bills.` or `"Transport"` to a category.
    pub fn from_model_text(text: &str) -> Option<Category> {
        let cleaned = text
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '*' || c == '.')
            .trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(cleaned))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction to categorize. Only `description` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl TransactionInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            date: None,
        }
    }

    pub fn with_details(
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            date: Some(date.into()),
        }
    }
}

/// Outcome of one classification.
///
/// `category` stays a string: shot strategies return the model text as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: String,
    pub reason: Option<String>,
    pub similarity: Option<f32>,
}

impl CategoryResult {
    pub fn category_only(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            reason: None,
            similarity: None,
        }
    }

    pub fn with_reason(category: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            reason: Some(reason.into()),
            similarity: None,
        }
    }
}

/// Prompt strategies that go through text generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStrategy {
    ZeroShot,
    OneShot,
    MultiShot,
    Dynamic,
    ChainOfThought,
}

impl PromptStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            PromptStrategy::ZeroShot => "zero-shot",
            PromptStrategy::OneShot => "one-shot",
            PromptStrategy::MultiShot => "multi-shot",
            PromptStrategy::Dynamic => "dynamic",
            PromptStrategy::ChainOfThought => "cot",
        }
    }

    /// Whether the prompt needs the amount and date of the transaction.
    pub fn requires_details(&self) -> bool {
        matches!(self, PromptStrategy::Dynamic)
    }
}
