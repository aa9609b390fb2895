//! Lexical approximation of semantic relevance: cosine similarity over
//! stopword-filtered term-frequency vectors. No embeddings, no models;
//! deep-semantic matching is a collaborator concern.

use std::collections::HashMap;

use crate::stopwords::is_stopword;

fn term_frequencies(normalized: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in normalized.split(' ') {
        let token = token.trim_matches(|c| matches!(c, '.' | '-' | '_'));
        if token.len() < 3 || is_stopword(token) || token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of the two documents' term-frequency vectors, scaled
/// to `[0, 100]`. Empty or all-stopword input scores 0.
pub fn semantic_match_score(resume_normalized: &str, job_normalized: &str) -> f64 {
    let resume_tf = term_frequencies(resume_normalized);
    let job_tf = term_frequencies(job_normalized);

    if resume_tf.is_empty() || job_tf.is_empty() {
        return 0.0;
    }

    let dot: f64 = resume_tf
        .iter()
        .filter_map(|(term, count)| job_tf.get(term).map(|other| (*count * *other) as f64))
        .sum();

    let norm = |tf: &HashMap<&str, usize>| -> f64 {
        tf.values().map(|c| (*c * *c) as f64).sum::<f64>().sqrt()
    };

    let denominator = norm(&resume_tf) * norm(&job_tf);
    if denominator == 0.0 {
        return 0.0;
    }

    (dot / denominator * 100.0).clamp(0.0, 100.0)
}
