//! Gemini API client for parsing medicine packaging photos
//!
//! Sends a single generateContent request per scan (image + instruction +
//! response schema) and validates the returned JSON into typed details.
//! No retries; the caller decides whether to scan again.

use crate::error::{Result, ScanError};
use crate::models::{MedicineDetails, RawMedicineDetails};
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SCAN_PROMPT: &str = "Extract medicine details from this packaging. Identify the \
    medicine name, dosage (e.g., 500mg), a suggested price in USD (number only), \
    quantity/stock visible, the expiry date (YYYY-MM-DD), and a general category. \
    Return as clean JSON.";

/// Gemini API client for extracting medicine details from packaging photos.
pub struct GeminiApi {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) timeout: Duration,
}

impl GeminiApi {
    /// Creates a new Gemini client with the given API key and a 30s timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a new Gemini client with a caller-chosen request timeout.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Self {
        log::debug!(
            "Creating Gemini client (model: {}, timeout: {:?})",
            DEFAULT_MODEL,
            timeout
        );
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        }
    }

    /// Extracts medicine details from a packaging photo.
    ///
    /// Sends exactly one request and returns either fully validated details
    /// or an error; partial results are never produced. Timeouts surface as
    /// [`ScanError::Network`].
    pub async fn parse_medicine_image(&self, image_bytes: &[u8]) -> Result<MedicineDetails> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);
        log::info!(
            "Submitting packaging photo to Gemini ({} bytes)",
            image_bytes.len()
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: encoded,
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(SCAN_PROMPT.to_string()),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: medicine_schema(),
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Gemini request failed with {}: {}", status, body);
            return Err(ScanError::HttpStatus(status));
        }

        let body = response.text().await?;
        let envelope: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            log::warn!("Unreadable Gemini response envelope: {}", e);
            ScanError::EmptyResponse
        })?;

        let text = envelope.text().ok_or(ScanError::EmptyResponse)?;
        log::debug!("Gemini returned: {}", text);

        let raw: RawMedicineDetails = serde_json::from_str(text.trim())
            .map_err(|e| ScanError::Schema(e.to_string()))?;
        let details = MedicineDetails::try_from(raw)?;

        log::info!(
            "Extracted details for '{}' ({}, {} units)",
            details.name,
            details.dosage,
            details.stock
        );
        Ok(details)
    }
}

/// JSON schema constraining the model to the six required medicine fields
fn medicine_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "dosage": { "type": "STRING" },
            "price": { "type": "NUMBER" },
            "stock": { "type": "NUMBER" },
            "expiryDate": { "type": "STRING" },
            "category": { "type": "STRING" }
        },
        "required": ["name", "dosage", "price", "stock", "expiryDate", "category"]
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
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
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or None if there is none
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
