//! The menu recommendation flow: prompt construction, the hosted-model
//! transport, the never-failing recommender wrapper, and the actor that owns
//! the debounce timer and request sequencing.

pub mod error;
pub mod prompt;
pub mod provider;
pub mod recommender;
pub mod service;

pub use error::AssistantError;
pub use provider::{GeminiClient, GeminiConfig, RecommendationProvider};
pub use recommender::Recommender;
pub use service::{AssistantRequest, AssistantService};

use serde::{Deserialize, Serialize};

/// Text shown when the model cannot be reached or returns garbage. The
/// recommendation flow never surfaces a raw error to the customer.
pub const FALLBACK_TEXT: &str =
    "Maaf, asisten AI kami sedang istirahat. Silakan coba lagi nanti.";

/// One suggestion from the assistant: a conversational sentence plus an
/// optional reference into the menu catalog.
///
/// Field names match the structured-output schema on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation_text: String,
    #[serde(default)]
    pub recommended_item_id: Option<u32>,
}

impl Recommendation {
    pub fn fallback() -> Self {
        Self {
            recommendation_text: FALLBACK_TEXT.to_string(),
            recommended_item_id: None,
        }
    }
}
