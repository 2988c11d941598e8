/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Classification code depends on the `LanguageModel` trait, never on `GeminiClient`.
///
/// Calls are made exactly once. There is no retry or backoff: a failed call
/// fails the request that made it.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM returned an empty embedding")]
    EmptyEmbedding,
}

/// Capability boundary between classification logic and a concrete model vendor.
///
/// Carried in `AppState` as `Arc<dyn LanguageModel>`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends a rendered prompt to the text-generation model and returns its raw text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Embeds `text` with the embedding model.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError>;
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct EmbedContentRequest<'a> {
    model: String,
    content: Content<'a>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: Embedding,
}

#[derive(Debug, Deserialize)]
struct Embedding {
    #[serde(default)]
    values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini REST client. Model names and credentials come from `Config`.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
    generation_model: String,
    embedding_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            generation_model: config.generation_model.clone(),
            embedding_model: config.embedding_model.clone(),
        })
    }

    pub fn generation_model(&self) -> &str {
        &self.generation_model
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, model, method)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, LlmError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let url = self.endpoint(&self.generation_model, "generateContent");

        let response: GenerateContentResponse = self.post(&url, &request).await?.json().await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini generate succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        response.text().ok_or(LlmError::EmptyContent)
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let request = EmbedContentRequest {
            model: format!("models/{}", self.embedding_model),
            content: Content {
                parts: vec![Part { text }],
            },
        };
        let url = self.endpoint(&self.embedding_model, "embedContent");

        let response: EmbedContentResponse = self.post(&url, &request).await?.json().await?;

        if response.embedding.values.is_empty() {
            return Err(LlmError::EmptyEmbedding);
        }
        debug!(
            "Gemini embed succeeded: dimensions={}",
            response.embedding.values.len()
        );

        Ok(response.embedding.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_embed_request_names_model_resource() {
        let request = EmbedContentRequest {
            model: "models/text-embedding-004".to_string(),
            content: Content {
                parts: vec![Part { text: "coffee" }],
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "models/text-embedding-004");
        assert_eq!(value["content"]["parts"][0]["text"], "coffee");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Food"}, {"text": "\n"}]}},
                {"content": {"role": "model", "parts": [{"text": "Other"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 1}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Food\n"));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_embed_response_decodes_values() {
        let json = r#"{"embedding": {"values": [0.1, -0.2, 0.3]}}"#;
        let response: EmbedContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.embedding.values.len(), 3);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash_from_base() {
        let mut config = Config::with_api_key("k");
        config.gemini_api_base = "http://localhost:9999/v1beta/".to_string();
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(client.generation_model(), "generateContent"),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(client.embedding_model(), "text-embedding-004");
    }
}
