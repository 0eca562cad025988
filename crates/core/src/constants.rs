//! Shared constants for answerdesk.
//!
//! Centralizes thresholds and limits that would otherwise be duplicated
//! across crates.

/// Minimum TF-IDF cosine similarity for a FAQ candidate to count as a match.
///
/// The higher of the two historically deployed values (0.8 and 0.5); it is
/// the bar enforced at the escalation gate, so both gates agree.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Generative replies scoring below this confidence are escalated to a human.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence assumed when self-rating fails (fail-open policy).
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// Maximum FAQ candidates loaded per department for similarity matching.
/// Exact-question lookups run uncapped against the store.
pub const MAX_FAQ_CANDIDATES: usize = 100;

/// Number of sample FAQs returned by the diagnostic probe.
pub const DIAGNOSTIC_SAMPLE_LIMIT: usize = 5;
