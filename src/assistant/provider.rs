//! Transport to the hosted generative model. The provider returns raw
//! results; absorbing failures into the fallback is the recommender's job.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Recommendation;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Anything that can turn a prompt into a [`Recommendation`]. Tests script
/// this; production uses [`GeminiClient`].
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, prompt: &str) -> Result<Recommendation>;
}

/// Configuration for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, never hard-coded
    pub api_key: String,
    /// Model to use (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Gemini REST provider with a JSON structured-output schema, so the model
/// is constrained to `{recommendationText, recommendedItemId}`.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow!(
                "Gemini API key is required. Set GEMINI_API_KEY environment variable."
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::default())
    }

    /// One request, one response. No retry, no backoff: a failed attempt
    /// surfaces as the fallback recommendation upstream.
    async fn try_request(&self, prompt: &str) -> Result<Recommendation> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                GEMINI_API_BASE, self.config.model
            ))
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let body = response
            .json::<GenerateContentResponse>()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim())
            .ok_or_else(|| anyhow!("Gemini response contained no candidates"))?;

        serde_json::from_str::<Recommendation>(text)
            .context("Model output did not match the recommendation schema")
    }
}

#[async_trait]
impl RecommendationProvider for GeminiClient {
    async fn recommend(&self, prompt: &str) -> Result<Recommendation> {
        self.try_request(prompt).await
    }
}

/// The fixed response schema: required text, required-but-nullable item id.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "recommendationText": {
                "type": "STRING",
                "description": "Kalimat rekomendasi yang ramah untuk pelanggan."
            },
            "recommendedItemId": {
                "type": "NUMBER",
                "nullable": true,
                "description": "ID dari item menu yang direkomendasikan."
            }
        },
        "required": ["recommendationText", "recommendedItemId"]
    })
}

// Gemini API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
