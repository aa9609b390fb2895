//! Skill extraction over normalized text: a catalog scan driven by token
//! n-grams, plus a statistical pass that surfaces frequent domain terms the
//! fixed catalog does not know about.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{self, LookupKind, GENERAL_CATEGORY};
use crate::stopwords::is_stopword;

/// A skill found in one document. `confidence` is a deterministic function
/// of how the term resolved: exact canonical hit 1.0, variant 0.9, fuzzy
/// 0.8, statistically derived 0.6.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedSkill {
    pub term: String,
    pub category: &'static str,
    pub confidence: f64,
}

pub const CONFIDENCE_EXACT: f64 = 1.0;
pub const CONFIDENCE_VARIANT: f64 = 0.9;
pub const CONFIDENCE_FUZZY: f64 = 0.8;
pub const CONFIDENCE_STATISTICAL: f64 = 0.6;

/// Inputs shorter than this (after normalization) skip the statistical pass;
/// there is not enough signal for frequency to mean anything.
const MIN_STATISTICAL_LEN: usize = 20;

/// A token must repeat and carry this much of the document's mass before it
/// counts as a statistically significant term.
const MIN_TERM_COUNT: usize = 2;
const MIN_TERM_FREQUENCY: f64 = 0.015;

/// Cap on statistical terms per document, keeping the catalog dominant.
const MAX_STATISTICAL_TERMS: usize = 8;

fn confidence_for(kind: LookupKind) -> f64 {
    match kind {
        LookupKind::Canonical => CONFIDENCE_EXACT,
        LookupKind::Variant => CONFIDENCE_VARIANT,
        LookupKind::Fuzzy => CONFIDENCE_FUZZY,
    }
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '.' | '-' | '_'))
}

/// Catalog scan: slide an n-gram window (longest first) over the token
/// stream so multi-word variants like "amazon web services" win over their
/// single-word fragments. A hit consumes its tokens; word boundaries come
/// for free from tokenization.
fn scan_catalog(tokens: &[&str]) -> Vec<ExtractedSkill> {
    let max_words = catalog::max_alias_words();
    let mut found: HashMap<&'static str, f64> = HashMap::new();

    let mut start = 0;
    while start < tokens.len() {
        let mut advanced = 1;
        let upper = max_words.min(tokens.len() - start);
        for n in (1..=upper).rev() {
            let candidate = tokens[start..start + n].join(" ");
            if let Some((canonical, kind)) = catalog::lookup(&candidate) {
                let confidence = confidence_for(kind);
                found
                    .entry(canonical)
                    .and_modify(|c| *c = c.max(confidence))
                    .or_insert(confidence);
                advanced = n;
                break;
            }
        }
        start += advanced;
    }

    let mut skills: Vec<ExtractedSkill> = found
        .into_iter()
        .map(|(canonical, confidence)| ExtractedSkill {
            term: canonical.to_string(),
            category: catalog::category_of(canonical)
                .map(|c| c.name)
                .unwrap_or(GENERAL_CATEGORY),
            confidence,
        })
        .collect();
    skills.sort_by(|a, b| a.term.cmp(&b.term));
    skills
}

/// Statistical pass: frequency-weighted terms not covered by the catalog.
/// Tokens are stopword-filtered and must repeat before they qualify.
fn significant_terms(tokens: &[&str]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for token in tokens {
        let token = trim_token(token);
        if token.len() < 3 || is_stopword(token) || token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        total += 1;
        *counts.entry(token).or_insert(0) += 1;
    }

    if total == 0 {
        return Vec::new();
    }

    let mut significant: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(term, count)| {
            *count >= MIN_TERM_COUNT
                && (*count as f64 / total as f64) >= MIN_TERM_FREQUENCY
                && catalog::canonicalize(term).is_none()
        })
        .collect();

    // Highest count first, then alphabetical for a stable cut.
    significant.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    significant.truncate(MAX_STATISTICAL_TERMS);
    significant
        .into_iter()
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Extract every skill signal from normalized text, deduplicated by
/// canonical term. Near-empty input yields a near-empty result, never an
/// error.
pub fn extract_skills(normalized: &str) -> Vec<ExtractedSkill> {
    if normalized.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = normalized
        .split(' ')
        .map(trim_token)
        .filter(|t| !t.is_empty())
        .collect();

    let mut skills = scan_catalog(&tokens);

    if normalized.chars().count() >= MIN_STATISTICAL_LEN {
        for term in significant_terms(&tokens) {
            if skills.iter().any(|s| s.term == term) {
                continue;
            }
            skills.push(ExtractedSkill {
                term,
                category: GENERAL_CATEGORY,
                confidence: CONFIDENCE_STATISTICAL,
            });
        }
    }

    skills
}

/// Importance weight of a skill: its category weight.
pub fn skill_weight(skill: &ExtractedSkill) -> f64 {
    catalog::category_weight(skill.category)
}
