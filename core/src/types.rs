use serde::{Deserialize, Serialize};

use crate::errors::{RecommendError, RecommendResult};

/// Request to the Gemini API to generate content
#[derive(Serialize, Debug, Clone)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn carrying one text part.
    pub fn user_text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
        }
    }
}

/// Content structure for requests and responses
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Part structure for a piece of content
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: String) -> Self {
        Self { text: Some(text) }
    }
}

/// Response from the Gemini API
///
/// Every level is optional so that a well-formed body with missing fields
/// deserializes and is then rejected by [`GenerateContentResponse::reply_text`]
/// rather than by serde.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate in the response
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, rename = "finishReason", skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Parses a raw response body.
    ///
    /// Non-JSON bodies yield [`RecommendError::Format`]; JSON that does not
    /// match the response shape yields [`RecommendError::Schema`].
    pub fn parse(body: &str) -> RecommendResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        serde_json::from_value(value).map_err(|e| {
            RecommendError::Schema(format!("Unexpected API response structure: {}", e))
        })
    }

    /// Extracts `candidates[0].content.parts[0].text`.
    pub fn reply_text(&self) -> RecommendResult<String> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| RecommendError::Schema("No candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| RecommendError::Schema("No content in candidate".to_string()))?;

        let part = content
            .parts
            .first()
            .ok_or_else(|| RecommendError::Schema("No parts in content".to_string()))?;

        let text = part
            .text
            .as_ref()
            .ok_or_else(|| RecommendError::Schema("No text in part".to_string()))?;

        if text.trim().is_empty() {
            return Err(RecommendError::Schema("Empty text in part".to_string()));
        }

        Ok(text.clone())
    }
}
