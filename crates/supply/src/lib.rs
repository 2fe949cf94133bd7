// Rust guideline compliant 2026-08-29

//! Question-Supply Service logic -- forwards a fixed prompt to a generative
//! text model and relays back a parsed question batch.
//!
//! Entry points: [`QuizGenerator::generate`] and [`respond`]. The model is
//! reached through the [`TextModel`] port; this crate does no HTTP of its
//! own, so the generation pipeline stays testable with canned transcripts.

use domain::SuppliedQuestion;
use serde_json::json;

/// Fixed generation prompt sent upstream on every request.
///
/// Kept at 50 questions; larger batches have been observed to time out at
/// the model endpoint.
pub const QUIZ_PROMPT: &str = "\
Generate a JSON array of exactly 50 unique multiple-choice questions about \
Time Complexity. The questions must be distributed roughly evenly among the \
complexities O(1), O(log N), O(N), O(N log N), O(N^2), O(2^N), and O(N!).

Each object in the array must have the following keys:
1. 'complexity': The correct Big-O complexity (e.g., 'O(N^2)').
2. 'language': One of ['java', 'python', 'c'] chosen randomly.
3. 'code': A complete, syntactically correct code snippet written in the \
specified 'language' that exhibits the 'complexity'.
4. 'options': An array of exactly four unique strings, including the correct \
complexity and three plausible distractors.
5. 'explanation': A brief, one-sentence explanation of why the 'code' has \
the 'complexity'.

Ensure the code snippets are highly varied and not repetitive. Only return \
the JSON array.";

// ---------------------------------------------------------------------------
// SupplyError
// ---------------------------------------------------------------------------

/// Errors from the supply pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupplyError {
    /// A required secret is absent from the environment.
    #[error("{name} environment variable is not set")]
    Configuration {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// The upstream model call failed.
    #[error("upstream model call failed: {reason}")]
    Upstream {
        /// Transport or status detail.
        reason: String,
    },
    /// The model returned no text.
    #[error("model returned an empty response")]
    EmptyResponse,
    /// The model text did not parse as a non-empty question array.
    #[error("malformed model payload: {reason}")]
    Malformed {
        /// Parse or shape detail.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// TextModel port
// ---------------------------------------------------------------------------

/// Hexagonal port: generative text completion.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait TextModel {
    /// Send `prompt` upstream and return the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Upstream`] when the call fails, or
    /// [`SupplyError::Configuration`] when the adapter is missing a secret.
    async fn generate(&self, prompt: &str) -> Result<String, SupplyError>;
}

// ---------------------------------------------------------------------------
// Fence stripping
// ---------------------------------------------------------------------------

/// Strip a surrounding ```` ```json ... ``` ```` markdown fence, if present.
///
/// Models often wrap JSON payloads in a code fence. Text without a leading
/// fence passes through untouched; a leading fence without a closing one is
/// stripped at the front only.
#[must_use]
pub fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```json") else {
        return trimmed;
    };
    match trimmed.rfind("```") {
        // rfind can land on the opening fence itself when no closer exists.
        Some(last) if last > 7 => trimmed[7..last].trim(),
        _ => inner.trim(),
    }
}

// ---------------------------------------------------------------------------
// QuizGenerator
// ---------------------------------------------------------------------------

/// Drives one generation round-trip through a [`TextModel`].
#[derive(Debug)]
pub struct QuizGenerator<M: TextModel> {
    model: M,
}

impl<M: TextModel> QuizGenerator<M> {
    /// Wrap a model adapter.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Run one full generation: prompt, fence-strip, parse, shape-check.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::EmptyResponse`] when the model text is blank,
    /// [`SupplyError::Malformed`] when it does not parse to a non-empty
    /// question array, or the model adapter's own error.
    pub async fn generate(&self) -> Result<Vec<SuppliedQuestion>, SupplyError> {
        let text = self.model.generate(QUIZ_PROMPT).await?;
        if text.trim().is_empty() {
            return Err(SupplyError::EmptyResponse);
        }
        let payload = strip_fence(&text);
        let questions: Vec<SuppliedQuestion> = serde_json::from_str(payload)
            .map_err(|e| SupplyError::Malformed {
                reason: e.to_string(),
            })?;
        if questions.is_empty() {
            return Err(SupplyError::Malformed {
                reason: "parsed payload is an empty array".to_owned(),
            });
        }
        log::info!("supply.generate: questions={}", questions.len());
        Ok(questions)
    }
}

/// Prompt for one request.
///
/// `language` and `count` are accepted for forward compatibility but do not
/// alter the fixed prompt; oversized batches time out upstream.
#[must_use]
pub fn prompt_for(language: Option<&str>, count: Option<usize>) -> &'static str {
    if language.is_some() || count.is_some() {
        log::debug!("supply.prompt: ignoring overrides language={language:?} count={count:?}");
    }
    QUIZ_PROMPT
}

// ---------------------------------------------------------------------------
// Reply shaping
// ---------------------------------------------------------------------------

/// HTTP-shaped reply for the supply endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// 200 on success, 500 on any failure.
    pub status: u16,
    /// The question array, or `{error, details?}`.
    pub body: serde_json::Value,
}

/// Shape a generation outcome into the endpoint's reply contract.
///
/// Success is a 200 with the bare question array. Every failure is a 500
/// with `{error, details}`; a missing secret omits `details` so the secret
/// name stays out of client-visible payloads.
#[must_use]
pub fn respond(result: Result<Vec<SuppliedQuestion>, SupplyError>) -> Reply {
    match result {
        Ok(questions) => Reply {
            status: 200,
            body: serde_json::to_value(questions)
                .unwrap_or_else(|_| json!([])),
        },
        Err(error @ SupplyError::Configuration { .. }) => Reply {
            status: 500,
            body: json!({ "error": error.to_string() }),
        },
        Err(error) => Reply {
            status: 500,
            body: json!({
                "error": "Failed to generate or parse quiz questions.",
                "details": error.to_string(),
            }),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
