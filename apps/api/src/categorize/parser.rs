//! Response parsing — turns raw model text into a `CategoryResult`.
//!
//! Model output is never trusted to be well-formed. The shot strategies pass
//! text through, the dynamic strategy tolerates missing labels, and the
//! chain-of-thought strategy falls back from JSON to regex to fixed defaults.

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::categorize::models::{Category, CategoryResult, PromptStrategy};

/// Reason reported when a chain-of-thought answer has no recoverable reason.
pub const UNPARSED_REASON: &str = "Could not parse reason";

const CATEGORY_LABEL: &str = "Category:";
const REASON_LABEL: &str = "Reason:";

/// Parses raw model text according to the strategy that produced the prompt.
pub fn parse_response(strategy: PromptStrategy, raw: &str) -> CategoryResult {
    match strategy {
        PromptStrategy::ZeroShot | PromptStrategy::OneShot | PromptStrategy::MultiShot => {
            parse_category_only(raw)
        }
        PromptStrategy::Dynamic => parse_labeled(raw),
        PromptStrategy::ChainOfThought => parse_chain_of_thought(raw),
    }
}

/// The whole trimmed text is the category. Unknown categories pass through.
pub fn parse_category_only(raw: &str) -> CategoryResult {
    let category = raw.trim();
    if Category::from_model_text(category).is_none() {
        warn!("Model returned a category outside the known set: {category:?}");
    }
    CategoryResult::category_only(category)
}

/// Parses the two-line `Category: ...` / `Reason: ...` format.
///
/// A first line without the label is used as the category unchanged.
pub fn parse_labeled(raw: &str) -> CategoryResult {
    let mut lines = raw.trim().lines();

    let first = lines.next().unwrap_or_default().trim();
    let category = strip_label(first, CATEGORY_LABEL).unwrap_or(first);

    let rest = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let reason = strip_label(&rest, REASON_LABEL).unwrap_or(&rest);

    CategoryResult::with_reason(category, reason)
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

#[derive(Debug, Deserialize)]
struct ChainOfThoughtAnswer {
    category: String,
    brief_reason: String,
}

/// Parses a chain-of-thought answer into `category` and `brief_reason`.
///
/// Order of attempts: fenced-or-bare JSON, then regex field extraction, then
/// `Other` / `Could not parse reason` for whatever is still missing.
pub fn parse_chain_of_thought(raw: &str) -> CategoryResult {
    let text = strip_code_fences(raw);

    match serde_json::from_str::<ChainOfThoughtAnswer>(text) {
        Ok(answer) => CategoryResult::with_reason(answer.category, answer.brief_reason),
        Err(e) => {
            debug!("Chain-of-thought answer is not valid JSON ({e}), extracting fields");
            let category = extract_quoted_field(text, "category")
                .unwrap_or_else(|| Category::Other.as_str().to_string());
            let reason = extract_quoted_field(text, "brief_reason")
                .unwrap_or_else(|| UNPARSED_REASON.to_string());
            CategoryResult::with_reason(category, reason)
        }
    }
}

/// Finds `"field": "value"` anywhere in `text`.
fn extract_quoted_field(text: &str, field: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(field));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = if let Some(stripped) = text.strip_prefix("```json") {
        stripped
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
    } else {
        return text;
    };
    let inner = inner.trim_start();
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_unterminated() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_category_only_trims_and_passes_through() {
        assert_eq!(parse_category_only("  Food\n").category, "Food");
        assert_eq!(
            parse_category_only("Groceries and snacks").category,
            "Groceries and snacks"
        );
        assert!(parse_category_only("Food").reason.is_none());
    }

    #[test]
    fn test_labeled_two_line_answer() {
        let result = parse_labeled("Category: Transport\nReason: ride was for commuting");
        assert_eq!(result.category, "Transport");
        assert_eq!(result.reason.as_deref(), Some("ride was for commuting"));
        assert!(result.similarity.is_none());
    }

    #[test]
    fn test_labeled_without_category_label_uses_line_as_is() {
        let result = parse_labeled("Bills\nReason: monthly electricity charge");
        assert_eq!(result.category, "Bills");
        assert_eq!(result.reason.as_deref(), Some("monthly electricity charge"));
    }

    #[test]
    fn test_labeled_joins_multi_line_reason() {
        let result = parse_labeled("Category: Food\n\nReason: lunch at\n a cafe near work\n");
        assert_eq!(result.category, "Food");
        assert_eq!(result.reason.as_deref(), Some("lunch at a cafe near work"));
    }

    #[test]
    fn test_labeled_single_line_has_empty_reason() {
        let result = parse_labeled("Category: Other");
        assert_eq!(result.category, "Other");
        assert_eq!(result.reason.as_deref(), Some(""));
    }

    #[test]
    fn test_chain_of_thought_valid_json() {
        let result = parse_chain_of_thought(r#"{"category":"Food","brief_reason":"x"}"#);
        assert_eq!(result, CategoryResult::with_reason("Food", "x"));
    }

    #[test]
    fn test_chain_of_thought_fenced_matches_unfenced() {
        let bare = r#"{"category": "Entertainment", "brief_reason": "Streaming subscription"}"#;
        let fenced = format!("```json\n{bare}\n```");
        assert_eq!(parse_chain_of_thought(&fenced), parse_chain_of_thought(bare));
        assert_eq!(parse_chain_of_thought(&fenced).category, "Entertainment");
    }

    #[test]
    fn test_chain_of_thought_garbage_defaults() {
        let result = parse_chain_of_thought("I think this is probably food, maybe?");
        assert_eq!(result.category, "Other");
        assert_eq!(result.reason.as_deref(), Some(UNPARSED_REASON));
    }

    #[test]
    fn test_chain_of_thought_regex_fallback_on_broken_json() {
        let raw = r#"Reasoning: it is a cab.
{"category": "Transport", "brief_reason": "Cab ride to work",}"#;
        let result = parse_chain_of_thought(raw);
        assert_eq!(result.category, "Transport");
        assert_eq!(result.reason.as_deref(), Some("Cab ride to work"));
    }

    #[test]
    fn test_chain_of_thought_regex_fallback_missing_reason() {
        let result = parse_chain_of_thought(r#"answer => "category": "Bills" (electricity)"#);
        assert_eq!(result.category, "Bills");
        assert_eq!(result.reason.as_deref(), Some(UNPARSED_REASON));
    }

    #[test]
    fn test_parse_response_dispatches_by_strategy() {
        let raw = "Category: Food\nReason: snacks";
        assert_eq!(parse_response(PromptStrategy::ZeroShot, raw).category, raw);
        assert_eq!(parse_response(PromptStrategy::Dynamic, raw).category, "Food");
        assert_eq!(
            parse_response(PromptStrategy::ChainOfThought, raw).category,
            "Other"
        );
    }
}
