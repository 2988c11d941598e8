//! Categorization pipeline.
//!
//! Prompt strategies: render_prompt → llm.generate → parse_response.
//! Similarity: llm.embed(input) → llm.embed(example) per category, in order → best_match.
//!
//! All model calls go through the `LanguageModel` trait. A single failed call
//! fails the whole classification.

use tracing::{debug, info};

use crate::categorize::models::{CategoryResult, PromptStrategy, TransactionInput};
use crate::categorize::parser::parse_response;
use crate::categorize::prompts::render_prompt;
use crate::categorize::similarity::{best_match, CATEGORY_EXAMPLES};
use crate::errors::AppError;
use crate::llm_client::LanguageModel;

/// Classifies `input` with a generated-text prompt strategy.
pub async fn classify_with_prompt(
    llm: &dyn LanguageModel,
    strategy: PromptStrategy,
    input: &TransactionInput,
) -> Result<CategoryResult, AppError> {
    let prompt = render_prompt(strategy, input);
    let raw = llm.generate(&prompt).await?;

    if strategy == PromptStrategy::ChainOfThought {
        debug!("Chain-of-thought raw answer: {raw}");
    }

    let result = parse_response(strategy, &raw);
    info!("{} categorized transaction as {:?}", strategy.name(), result.category);
    Ok(result)
}

/// Classifies `input` by embedding similarity against the category examples.
///
/// Example embeddings are requested one at a time in category order so the
/// first-seen maximum is deterministic.
pub async fn classify_by_similarity(
    llm: &dyn LanguageModel,
    input: &TransactionInput,
) -> Result<CategoryResult, AppError> {
    let input_embedding = llm.embed(&input.description).await?;

    let mut example_embeddings = Vec::with_capacity(CATEGORY_EXAMPLES.len());
    for (category, example) in CATEGORY_EXAMPLES {
        let embedding = llm.embed(example).await?;
        example_embeddings.push((category, embedding));
    }

    let (category, similarity) = best_match(
        &input_embedding,
        example_embeddings.iter().map(|(c, e)| (*c, e.as_slice())),
    );
    info!("similarity categorized transaction as {category} ({similarity:.4})");

    Ok(CategoryResult {
        category: category.as_str().to_string(),
        reason: None,
        similarity: Some(similarity),
    })
}
