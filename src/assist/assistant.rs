use crate::{
    foundation::{
        core::Signal,
        error::{ConvoError, ConvoResult},
    },
    playback::session::Session,
};

/// Returned when the assistant answered but gave no usable sample array.
pub const FALLBACK_UNUSABLE_SIGNAL: [f64; 3] = [1.0, 0.0, 0.0];
/// Returned when the assistant could not be reached.
pub const FALLBACK_FAILED_SIGNAL: [f64; 5] = [1.0, 1.0, 1.0, 1.0, 1.0];
/// Returned when the assistant answered with an empty explanation.
pub const FALLBACK_EMPTY_EXPLANATION: &str = "Could not generate an explanation.";
/// Returned when the assistant could not be reached.
pub const FALLBACK_FAILED_EXPLANATION: &str = "Error contacting the assistant.";

/// Inputs for explaining one scanning index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExplainRequest {
    /// Input signal.
    pub x: Signal,
    /// Impulse response.
    pub h: Signal,
    /// Scanning index.
    pub n: i64,
    /// `y[n]`, or 0 outside the output.
    pub y_n: f64,
}

impl ExplainRequest {
    /// Snapshot the session's current index.
    pub fn from_session(session: &mut Session) -> Self {
        let y_n = session.current_value().unwrap_or(0.0);
        Self {
            x: session.x().clone(),
            h: session.h().clone(),
            n: session.n(),
            y_n,
        }
    }
}

/// A generative text/sequence provider.
///
/// Implementations are treated as slow and unreliable: `Ok(None)` means the
/// provider answered with nothing usable, `Err` means it could not answer at
/// all. Callers normally go through [`generate_signal_or_fallback`] and
/// [`explain_step_or_fallback`], which never fail.
pub trait Assistant: Send + Sync {
    /// Short sequence of reals matching a free-text description.
    fn generate_signal(&self, description: &str) -> ConvoResult<Option<Signal>>;

    /// Natural-language explanation of one convolution step.
    fn explain_step(&self, req: &ExplainRequest) -> ConvoResult<Option<String>>;
}

/// Generate a signal, substituting a fixed default on any failure.
#[tracing::instrument(skip(assistant))]
pub fn generate_signal_or_fallback(assistant: &dyn Assistant, description: &str) -> Signal {
    match assistant.generate_signal(description) {
        Ok(Some(signal)) if !signal.is_empty() && signal.validate().is_ok() => signal,
        Ok(_) => {
            tracing::warn!("assistant returned no usable signal; using default");
            Signal::from(FALLBACK_UNUSABLE_SIGNAL.to_vec())
        }
        Err(err) => {
            tracing::error!(%err, "failed to generate signal");
            Signal::from(FALLBACK_FAILED_SIGNAL.to_vec())
        }
    }
}

/// Explain a step, substituting a fixed message on any failure.
#[tracing::instrument(skip(assistant, req), fields(n = req.n))]
pub fn explain_step_or_fallback(assistant: &dyn Assistant, req: &ExplainRequest) -> String {
    match assistant.explain_step(req) {
        Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => FALLBACK_EMPTY_EXPLANATION.to_string(),
        Err(err) => {
            tracing::error!(%err, "failed to explain step");
            FALLBACK_FAILED_EXPLANATION.to_string()
        }
    }
}

/// Settings for the hosted assistant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    /// Model name passed to the provider.
    pub model: String,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Language explanations are written in.
    pub language: String,
    /// Environment variable holding the API key; `GEMINI_API_KEY` and
    /// `API_KEY` are tried when unset.
    pub api_key_env: Option<String>,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            timeout_ms: 30_000,
            language: "English".to_string(),
            api_key_env: None,
        }
    }
}

impl AssistConfig {
    /// Reject empty model names and zero timeouts.
    pub fn validate(&self) -> ConvoResult<()> {
        if self.model.trim().is_empty() {
            return Err(ConvoError::validation("assist model must be non-empty"));
        }
        if self.timeout_ms == 0 {
            return Err(ConvoError::validation("assist timeout_ms must be > 0"));
        }
        if self.language.trim().is_empty() {
            return Err(ConvoError::validation("assist language must be non-empty"));
        }
        Ok(())
    }

    /// First API key found in the environment.
    pub fn api_key(&self) -> Option<String> {
        let names: Vec<&str> = match &self.api_key_env {
            Some(name) => vec![name.as_str()],
            None => vec!["GEMINI_API_KEY", "API_KEY"],
        };
        names
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assist/assistant.rs"]
mod tests;
