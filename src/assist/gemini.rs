use std::time::Duration;

use crate::{
    assist::{
        assistant::{AssistConfig, Assistant, ExplainRequest},
        prompt::{explain_prompt, parse_signal_reply, signal_prompt},
    },
    foundation::{
        core::Signal,
        error::{ConvoError, ConvoResult},
    },
};

/// Public endpoint of the Generative Language API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const EXPLAIN_MAX_OUTPUT_TOKENS: u32 = 150;

/// [`Assistant`] backed by the hosted Gemini `generateContent` endpoint.
pub struct GeminiAssistant {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    language: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAssistant")
            .field("model", &self.model)
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiAssistant {
    /// Build a client with an explicit key.
    pub fn new(config: &AssistConfig, api_key: impl Into<String>) -> ConvoResult<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ConvoError::assist(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: config.model.clone(),
            language: config.language.clone(),
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Build a client with the key found in the environment.
    pub fn from_env(config: &AssistConfig) -> ConvoResult<Self> {
        let key = config
            .api_key()
            .ok_or_else(|| ConvoError::assist("no API key set (GEMINI_API_KEY or API_KEY)"))?;
        Self::new(config, key)
    }

    /// Point the client at another endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    #[tracing::instrument(skip(self, body), fields(model = %self.model))]
    fn generate(&self, body: &serde_json::Value) -> ConvoResult<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .map_err(|e| ConvoError::assist(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvoError::assist(format!("assistant returned status {status}")));
        }
        let reply: GenerateReply = response
            .json()
            .map_err(|e| ConvoError::assist(format!("malformed reply: {e}")))?;
        let text = reply.text();
        tracing::debug!(chars = text.len(), "assistant reply");
        Ok(text)
    }
}

impl Assistant for GeminiAssistant {
    fn generate_signal(&self, description: &str) -> ConvoResult<Option<Signal>> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": signal_prompt(description) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": { "type": "NUMBER" },
                    "description": "Array of signal samples"
                }
            }
        });
        let text = self.generate(&body)?;
        if text.is_empty() {
            return Ok(None);
        }
        parse_signal_reply(&text)
    }

    fn explain_step(&self, req: &ExplainRequest) -> ConvoResult<Option<String>> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": explain_prompt(req, &self.language) }] }],
            "generationConfig": { "maxOutputTokens": EXPLAIN_MAX_OUTPUT_TOKENS }
        });
        let text = self.generate(&body)?;
        Ok((!text.trim().is_empty()).then_some(text))
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateReply {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assist/gemini.rs"]
mod tests;
