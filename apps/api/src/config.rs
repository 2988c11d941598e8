use anyhow::{Context, Result};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GENERATION_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Application configuration loaded from environment variables.
/// Fails at startup if the Gemini API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub generation_model: String,
    pub embedding_model: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            generation_model: env_or("GEMINI_MODEL", DEFAULT_GENERATION_MODEL),
            embedding_model: env_or("GEMINI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Configuration with defaults and the given key, without reading the environment.
    #[cfg(test)]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            gemini_api_key: api_key.into(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            llm_timeout_secs: 60,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
