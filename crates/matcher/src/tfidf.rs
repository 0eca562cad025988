//! TF-IDF vectorization and cosine similarity over short question texts.
//!
//! Vocabulary is built per call from the candidate questions plus the query;
//! at FAQ-candidate scale (≤100 questions) rebuilding is cheaper than
//! maintaining an incremental index that would need invalidation on every
//! knowledge-base mutation.

use std::collections::HashMap;

/// Lowercase alphanumeric tokenization.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Cosine similarity of the query against each document.
///
/// Uses smoothed IDF (`ln((1+n)/(1+df)) + 1`) so terms appearing in every
/// document still contribute, and the query itself counts as a document when
/// computing document frequencies. Returns one score in [0,1] per document,
/// in input order.
pub(crate) fn query_similarities(query: &str, documents: &[&str]) -> Vec<f64> {
    let doc_tokens: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();
    let query_tokens = tokenize(query);

    // Document frequency over documents + query.
    let corpus_size = doc_tokens.len() + 1;
    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in doc_tokens.iter().chain(std::iter::once(&query_tokens)) {
        let mut seen: Vec<&str> = Vec::new();
        for t in tokens {
            if !seen.contains(&t.as_str()) {
                seen.push(t);
                *df.entry(t).or_insert(0) += 1;
            }
        }
    }

    let idf = |term: &str| -> f64 {
        let freq = df.get(term).copied().unwrap_or(0);
        #[allow(clippy::cast_precision_loss)]
        let ratio = (1 + corpus_size) as f64 / (1 + freq) as f64;
        ratio.ln() + 1.0
    };

    let query_vec = tfidf_vector(&query_tokens, &idf);
    doc_tokens.iter().map(|tokens| cosine(&query_vec, &tfidf_vector(tokens, &idf))).collect()
}

fn tfidf_vector(tokens: &[String], idf: impl Fn(&str) -> f64) -> HashMap<String, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in tokens {
        *counts.entry(t).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(term, count)| {
            #[allow(clippy::cast_precision_loss)]
            let tf = count as f64;
            (term.to_owned(), tf * idf(term))
        })
        .collect()
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a.iter().filter_map(|(term, w)| b.get(term).map(|v| w * v)).sum();
    let norm = |v: &HashMap<String, f64>| v.values().map(|w| w * w).sum::<f64>().sqrt();
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(tokenize("How do I request Vacation-Time?"), vec![
            "how", "do", "i", "request", "vacation", "time"
        ]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("  ?!  ").is_empty());
    }

    #[test]
    fn test_identical_text_scores_near_one() {
        let scores = query_similarities("reset my password", &["reset my password"]);
        assert!((scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scores = query_similarities("quarterly sales target", &["vacation request form"]);
        assert!(scores[0].abs() < 1e-9);
    }

    #[test]
    fn test_closer_document_scores_higher() {
        let scores = query_similarities("how do I request vacation time", &[
            "how do I request vacation time off",
            "what is the fiscal year end date",
        ]);
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let scores = query_similarities("", &["anything at all"]);
        assert!(scores[0].abs() < 1e-9);
    }
}
