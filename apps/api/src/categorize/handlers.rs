//! Axum route handlers for the categorization API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::categorize::classifier::{classify_by_similarity, classify_with_prompt};
use crate::categorize::models::{CategoryResult, PromptStrategy, TransactionInput};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body shared by every categorization route. Which fields are required
/// depends on the strategy.
#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub transaction: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl CategorizeRequest {
    /// Requires `transaction`, plus `amount` and `date` when `needs_details`.
    fn into_input(self, needs_details: bool) -> Result<TransactionInput, AppError> {
        let description = self
            .transaction
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Validation("transaction is required".to_string()))?;

        if !needs_details {
            return Ok(TransactionInput::new(description));
        }

        let amount = self
            .amount
            .ok_or_else(|| AppError::Validation("amount is required".to_string()))?;
        let date = self
            .date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::Validation("date is required".to_string()))?;

        Ok(TransactionInput::with_details(description, amount, date))
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ReasonedCategoryResponse {
    pub category: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub category: String,
    pub similarity: f32,
}

#[derive(Debug, Serialize)]
pub struct ChainOfThoughtResponse {
    pub category: String,
    pub brief_reason: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn extract_input(
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
    needs_details: bool,
) -> Result<TransactionInput, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    request.into_input(needs_details)
}

async fn run_prompt_strategy(
    state: &AppState,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
    strategy: PromptStrategy,
) -> Result<CategoryResult, AppError> {
    let input = extract_input(payload, strategy.requires_details())?;
    classify_with_prompt(state.llm.as_ref(), strategy, &input).await
}

/// POST /api/gemini/zero-shot
pub async fn handle_zero_shot(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategoryResponse>, AppError> {
    let result = run_prompt_strategy(&state, payload, PromptStrategy::ZeroShot).await?;
    Ok(Json(CategoryResponse {
        category: result.category,
    }))
}

/// POST /api/gemini/one-shot
pub async fn handle_one_shot(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategoryResponse>, AppError> {
    let result = run_prompt_strategy(&state, payload, PromptStrategy::OneShot).await?;
    Ok(Json(CategoryResponse {
        category: result.category,
    }))
}

/// POST /api/gemini/multi-shot
pub async fn handle_multi_shot(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategoryResponse>, AppError> {
    let result = run_prompt_strategy(&state, payload, PromptStrategy::MultiShot).await?;
    Ok(Json(CategoryResponse {
        category: result.category,
    }))
}

/// POST /api/gemini/dynamic
///
/// Requires `amount` and `date` alongside `transaction`.
pub async fn handle_dynamic(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<ReasonedCategoryResponse>, AppError> {
    let result = run_prompt_strategy(&state, payload, PromptStrategy::Dynamic).await?;
    Ok(Json(ReasonedCategoryResponse {
        category: result.category,
        reason: result.reason.unwrap_or_default(),
    }))
}

/// POST /api/gemini/cot
pub async fn handle_chain_of_thought(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<ChainOfThoughtResponse>, AppError> {
    let result = run_prompt_strategy(&state, payload, PromptStrategy::ChainOfThought).await?;
    Ok(Json(ChainOfThoughtResponse {
        category: result.category,
        brief_reason: result.reason.unwrap_or_default(),
    }))
}

/// POST /api/gemini/similarity
///
/// Six embedding calls: the transaction, then one per category example.
pub async fn handle_similarity(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<SimilarityResponse>, AppError> {
    let input = extract_input(payload, false)?;
    let result = classify_by_similarity(state.llm.as_ref(), &input).await?;
    Ok(Json(SimilarityResponse {
        category: result.category,
        similarity: result.similarity.unwrap_or(-1.0),
    }))
}
