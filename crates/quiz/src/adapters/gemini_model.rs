// Rust guideline compliant 2026-08-30

//! Gemini adapter for the `TextModel` port.
//!
//! Talks to the Google Generative Language API's `generateContent` method
//! and extracts the first candidate's text.

use serde_json::json;
use supply::{SupplyError, TextModel};

const MODEL: &str = "gemini-2.5-flash";

/// `TextModel` adapter backed by the Gemini API.
#[derive(Debug)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiModel {
    /// Build the adapter from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Configuration`] when the variable is unset.
    pub fn from_env() -> Result<Self, SupplyError> {
        let Ok(api_key) = std::env::var("GEMINI_API_KEY") else {
            return Err(SupplyError::Configuration {
                name: "GEMINI_API_KEY",
            });
        };
        Ok(Self::new(
            api_key,
            format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent"
            ),
        ))
    }

    /// Build the adapter with an explicit key and endpoint.
    #[must_use]
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }
}

impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, SupplyError> {
        log::debug!("gemini_model.request: model={MODEL}");
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SupplyError::Upstream {
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SupplyError::Upstream {
                reason: format!("model endpoint returned status {status}"),
            });
        }
        let payload: serde_json::Value =
            response.json().await.map_err(|e| SupplyError::Upstream {
                reason: e.to_string(),
            })?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default();
        Ok(text.to_owned())
    }
}
