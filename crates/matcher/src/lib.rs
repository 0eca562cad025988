//! FAQ matching: exact-match short circuit plus TF-IDF cosine similarity.
//!
//! Two-pass pattern:
//! 1. exact(query) → case-insensitive whole-string equality, score 1.0
//! 2. similarity(query) → TF-IDF cosine over candidate questions, best
//!    candidate above the configured threshold

mod tfidf;

use answerdesk_core::constants::DEFAULT_SIMILARITY_THRESHOLD;
use answerdesk_core::{normalize_text, FaqEntry};

/// A matched FAQ answer with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqMatch {
    pub answer: String,
    /// 1.0 for exact matches, cosine similarity otherwise.
    pub score: f64,
    pub matched_question: String,
}

/// Matches queries against a candidate set of FAQ entries.
///
/// Stateless apart from the similarity threshold; candidates are supplied
/// per call because the knowledge base can mutate between requests.
#[derive(Debug, Clone, Copy)]
pub struct FaqMatcher {
    threshold: f64,
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self { threshold: DEFAULT_SIMILARITY_THRESHOLD }
    }
}

impl FaqMatcher {
    /// Creates a matcher with a custom similarity threshold.
    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the similarity threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Finds the best match for `query` among `candidates`.
    ///
    /// Exact matches (case-insensitive, trimmed) return immediately with
    /// score 1.0 and skip the similarity computation entirely. Otherwise
    /// the candidate with the highest TF-IDF cosine similarity wins, first
    /// candidate on ties, and only above the threshold. Empty candidate
    /// sets return `None` without any computation.
    #[must_use]
    pub fn find_match(&self, query: &str, candidates: &[FaqEntry]) -> Option<FaqMatch> {
        if candidates.is_empty() {
            return None;
        }

        let normalized = normalize_text(query);
        if let Some(exact) =
            candidates.iter().find(|faq| normalize_text(&faq.question) == normalized)
        {
            return Some(FaqMatch {
                answer: exact.answer.clone(),
                score: 1.0,
                matched_question: exact.question.clone(),
            });
        }

        let questions: Vec<&str> = candidates.iter().map(|faq| faq.question.as_str()).collect();
        let scores = tfidf::query_similarities(query, &questions);

        let (best_index, best_score) = scores
            .iter()
            .copied()
            .enumerate()
            // max_by keeps the later of equal elements, so reverse the scan
            // to make the first-encountered candidate win ties.
            .rev()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))?;

        if best_score > self.threshold {
            tracing::debug!(score = best_score, question = %candidates[best_index].question, "similarity match");
            Some(FaqMatch {
                answer: candidates[best_index].answer.clone(),
                score: best_score,
                matched_question: candidates[best_index].question.clone(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: i64, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            id,
            row_id: format!("row-{id}"),
            question: question.to_owned(),
            answer: answer.to_owned(),
            department: "HR".to_owned(),
            tags: vec![],
        }
    }

    #[test]
    fn test_empty_candidates_no_match() {
        let matcher = FaqMatcher::default();
        assert!(matcher.find_match("anything", &[]).is_none());
    }

    #[test]
    fn test_exact_match_case_insensitive_scores_one() {
        let matcher = FaqMatcher::default();
        let candidates = vec![faq(1, "How do I request vacation time?", "Use the HR portal.")];
        let m = matcher.find_match("how do i REQUEST vacation TIME?", &candidates).unwrap();
        assert_eq!(m.score, 1.0);
        assert_eq!(m.answer, "Use the HR portal.");
        assert_eq!(m.matched_question, "How do I request vacation time?");
    }

    #[test]
    fn test_exact_match_ignores_surrounding_whitespace() {
        let matcher = FaqMatcher::default();
        let candidates = vec![faq(1, "What are our sales targets?", "See the dashboard.")];
        let m = matcher.find_match("  what are our sales targets?  ", &candidates).unwrap();
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_unrelated_query_below_threshold() {
        let matcher = FaqMatcher::default();
        let candidates = vec![faq(1, "How do I request vacation time?", "Use the HR portal.")];
        assert!(matcher.find_match("what is the wifi password", &candidates).is_none());
    }

    #[test]
    fn test_similar_query_matches_above_low_threshold() {
        let matcher = FaqMatcher::with_threshold(0.3);
        let candidates = vec![
            faq(1, "How do I request vacation time?", "Use the HR portal."),
            faq(2, "What is the fiscal year end?", "December 31st."),
        ];
        let m = matcher.find_match("how do I request vacation days", &candidates).unwrap();
        assert_eq!(m.matched_question, "How do I request vacation time?");
        assert!(m.score > 0.3 && m.score < 1.0);
    }

    #[test]
    fn test_tie_prefers_first_candidate() {
        let matcher = FaqMatcher::with_threshold(0.0);
        // Identical questions with different answers: scores tie exactly.
        let candidates = vec![
            faq(1, "reset password", "first answer"),
            faq(2, "reset password", "second answer"),
        ];
        let m = matcher.find_match("password reset please", &candidates).unwrap();
        assert_eq!(m.answer, "first answer");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let matcher = FaqMatcher::with_threshold(1.0);
        let candidates = vec![faq(1, "alpha beta", "a")];
        // Similarity pass can at most reach ~1.0; strictly-above gate rejects.
        assert!(matcher.find_match("beta alpha gamma", &candidates).is_none());
    }
}
