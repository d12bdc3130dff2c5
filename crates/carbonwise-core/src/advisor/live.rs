//! Network-backed text advisor
//!
//! Talks to an OpenAI-compatible chat-completions endpoint and parses the
//! structured JSON the model returns. Exactly one attempt is made per
//! request, bounded by a timeout; retry policy belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::{MonthlySummary, PatternSummary, RiskReport, Suggestion};

use super::{prompt, TextAdvisor};

/// Default bound on one advisor call
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Token budgets matching the two insight types
const SUGGESTIONS_MAX_TOKENS: u32 = 500;
const SUMMARY_MAX_TOKENS: u32 = 300;

/// Configuration for the live advisor
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Base URL of the chat-completions API (no trailing slash)
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl AdvisorConfig {
    /// Read configuration from the environment
    ///
    /// Returns `None` when `CARBONWISE_AI_API_KEY` is unset, which puts the
    /// whole deployment in fallback-only mode.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("CARBONWISE_AI_API_KEY").ok()?;
        let base_url = std::env::var("CARBONWISE_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("CARBONWISE_AI_MODEL")
            .unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let timeout_secs = std::env::var("CARBONWISE_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Text advisor backed by a chat-completions API
pub struct LiveTextAdvisor {
    config: AdvisorConfig,
    client: reqwest::Client,
}

impl LiveTextAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CoreError::advisor_request)?;

        Ok(Self { config, client })
    }

    /// Build from environment, if credentials are present
    pub fn from_env() -> Result<Option<Self>, CoreError> {
        match AdvisorConfig::from_env() {
            Some(config) => Ok(Some(Self::new(config)?)),
            None => Ok(None),
        }
    }

    /// One chat completion, returning the assistant message content
    async fn complete(
        &self,
        system: &str,
        user: String,
        max_tokens: u32,
    ) -> Result<String, CoreError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        tracing::debug!(%url, model = %self.config.model, "requesting advisor completion");

        let send = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send();

        let response = tokio::time::timeout(self.config.timeout, send)
            .await
            .map_err(|_| CoreError::AdvisorTimeout {
                timeout_secs: self.config.timeout.as_secs(),
            })?
            .map_err(CoreError::advisor_request)?
            .error_for_status()
            .map_err(CoreError::advisor_request)?;

        let completion: ChatResponse = response.json().await.map_err(CoreError::advisor_request)?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoreError::AdvisorSchema {
                message: "completion contained no choices".to_string(),
                source: None,
            })?;

        Ok(content)
    }
}

#[async_trait]
impl TextAdvisor for LiveTextAdvisor {
    async fn suggestions(&self, patterns: &PatternSummary) -> Result<Vec<Suggestion>, CoreError> {
        let content = self
            .complete(
                prompt::SUGGESTIONS_SYSTEM,
                prompt::suggestions_prompt(patterns),
                SUGGESTIONS_MAX_TOKENS,
            )
            .await?;

        let payload: SuggestionsPayload = parse_structured(&content)?;
        Ok(payload.suggestions)
    }

    async fn monthly_summary(
        &self,
        patterns: &PatternSummary,
        risk: &RiskReport,
    ) -> Result<MonthlySummary, CoreError> {
        let content = self
            .complete(
                prompt::SUMMARY_SYSTEM,
                prompt::summary_prompt(patterns, risk),
                SUMMARY_MAX_TOKENS,
            )
            .await?;

        parse_structured(&content)
    }
}

/// Parse the model's JSON content against the expected schema
fn parse_structured<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CoreError> {
    serde_json::from_str(content).map_err(|err| CoreError::AdvisorSchema {
        message: format!("expected schema not matched: {}", err),
        source: Some(err),
    })
}

// ============================================================================
// Wire types (chat-completions API)
// ============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Deserialize)]
struct SuggestionsPayload {
    suggestions: Vec<Suggestion>,
}
