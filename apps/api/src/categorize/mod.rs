// Transaction categorization: one prompt strategy per route, plus embedding similarity.
// All model calls go through llm_client::LanguageModel — no direct Gemini calls here.

pub mod classifier;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod similarity;
