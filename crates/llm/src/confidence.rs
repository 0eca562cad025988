//! Confidence self-rating of generative replies.
//!
//! The generator is asked to rate its own reply; any failure along the way
//! (backend unavailable, unparsable output) falls open to a fixed default
//! so a transient scoring failure never blocks the conversation. The cost
//! is accepted: the default admits an untrusted confidence.

use answerdesk_core::constants::FALLBACK_CONFIDENCE;

use crate::generator::Generator;
use crate::prompts::rating_prompt;

/// Asks the generator to rate how well `response` answers `query`.
///
/// Returns a value in [0,1]; falls back to [`FALLBACK_CONFIDENCE`] on any
/// generator or parse failure.
pub async fn score_confidence(generator: &dyn Generator, response: &str, query: &str) -> f64 {
    let prompt = rating_prompt(query, response);
    match generator.generate(&prompt).await {
        Ok(rating) => parse_confidence(&rating).unwrap_or_else(|| {
            tracing::warn!(rating = %rating, "unparsable confidence rating, using fallback");
            FALLBACK_CONFIDENCE
        }),
        Err(e) => {
            tracing::warn!("confidence rating failed: {e}, using fallback");
            FALLBACK_CONFIDENCE
        },
    }
}

/// Parses a rating reply as a single float, clamped to [0,1].
///
/// The rating prompt asks for a bare number; anything else (prose, empty
/// output) is a parse failure and triggers the fallback. A leading
/// "Score:" prefix is stripped since models frequently echo the prompt's
/// final label.
#[must_use]
pub fn parse_confidence(rating: &str) -> Option<f64> {
    let trimmed = rating.trim();
    let trimmed = trimmed.strip_prefix("Score:").unwrap_or(trimmed).trim();
    trimmed.parse::<f64>().ok().map(|v| v.clamp(0.0, 1.0))
}
