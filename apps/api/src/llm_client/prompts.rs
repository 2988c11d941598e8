// Shared prompt fragments used by every classification strategy.
// Strategy-specific templates live in categorize/prompts.rs and splice these in.

/// The closed category list, in the order the model sees it.
pub const CATEGORY_LIST: &str = "Food, Transport, Bills, Entertainment, Other";

/// Closing line for strategies that expect a bare category name.
pub const CATEGORY_ONLY_INSTRUCTION: &str = "Return only the category name.";
