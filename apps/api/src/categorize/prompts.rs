// Prompt templates for each categorization strategy.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::categorize::models::{PromptStrategy, TransactionInput};
use crate::llm_client::prompts::{CATEGORY_LIST, CATEGORY_ONLY_INSTRUCTION};

/// Zero-shot: category set and transaction only.
/// Replace: {categories}, {category_only_instruction}, {transaction}
pub const ZERO_SHOT_TEMPLATE: &str = r#"Categorize the following financial transaction into one of these categories: {categories}.
Transaction: {transaction}
{category_only_instruction}"#;

/// One-shot: a single worked example precedes the target transaction.
/// Replace: {categories}, {category_only_instruction}, {transaction}
pub const ONE_SHOT_TEMPLATE: &str = r#"Categorize the following financial transaction into one of these categories: {categories}.

Example:
Transaction: Paid 450 for dinner at an Italian restaurant
Category: Food

Transaction: {transaction}
{category_only_instruction}"#;

/// Multi-shot: several worked examples, one per common category.
/// Replace: {categories}, {category_only_instruction}, {transaction}
pub const MULTI_SHOT_TEMPLATE: &str = r#"Categorize the following financial transaction into one of these categories: {categories}.

Examples:
Transaction: Paid 450 for dinner at an Italian restaurant
Category: Food

Transaction: Uber ride to the airport
Category: Transport

Transaction: Monthly electricity bill payment
Category: Bills

Transaction: Bought two movie tickets for the weekend show
Category: Entertainment

Transaction: Donation to a local animal shelter
Category: Other

Transaction: {transaction}
{category_only_instruction}"#;

/// Dynamic: amount and date in context, category plus a one-sentence reason.
/// Replace: {categories}, {amount}, {date}, {transaction}
pub const DYNAMIC_TEMPLATE: &str = r#"Categorize the following financial transaction into one of these categories: {categories}.
Use the amount and date as additional context.

Transaction: {transaction}
Amount: {amount}
Date: {date}

Respond in exactly this format, with nothing else:
Category: <category name>
Reason: <one sentence explaining why>"#;

/// Chain-of-thought few-shot: two reasoned examples, then JSON-only output.
/// Replace: {categories}, {transaction}
pub const CHAIN_OF_THOUGHT_TEMPLATE: &str = r#"You categorize financial transactions into one of these categories: {categories}.
Think through what was purchased and why before deciding.

Example 1:
Transaction: Swiggy order - butter chicken and naan
Reasoning: Swiggy is a food delivery service and the items are a meal, so this is spending on food.
Answer: {"category": "Food", "brief_reason": "Meal ordered through a food delivery app"}

Example 2:
Transaction: Airtel postpaid monthly plan
Reasoning: Airtel is a telecom provider and a monthly postpaid plan is a recurring utility charge.
Answer: {"category": "Bills", "brief_reason": "Recurring mobile phone plan payment"}

Now categorize this transaction:
Transaction: {transaction}

Reason through it privately, then respond with ONLY a JSON object with the keys "category" and "brief_reason".
Do NOT include the reasoning, markdown, or any text outside the JSON object."#;

/// Renders the prompt for `strategy`.
///
/// The description is substituted last so placeholder-like text inside it
/// reaches the model verbatim. Missing amount or date render as `unknown`;
/// handlers reject those requests before this point.
pub fn render_prompt(strategy: PromptStrategy, input: &TransactionInput) -> String {
    let template = match strategy {
        PromptStrategy::ZeroShot => ZERO_SHOT_TEMPLATE,
        PromptStrategy::OneShot => ONE_SHOT_TEMPLATE,
        PromptStrategy::MultiShot => MULTI_SHOT_TEMPLATE,
        PromptStrategy::Dynamic => DYNAMIC_TEMPLATE,
        PromptStrategy::ChainOfThought => CHAIN_OF_THOUGHT_TEMPLATE,
    };

    let mut prompt = template
        .replace("{categories}", CATEGORY_LIST)
        .replace("{category_only_instruction}", CATEGORY_ONLY_INSTRUCTION);

    if strategy.requires_details() {
        let amount = input
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let date = input.date.as_deref().unwrap_or("unknown");
        prompt = prompt.replace("{amount}", &amount).replace("{date}", date);
    }

    prompt.replace("{transaction}", &input.description)
}
