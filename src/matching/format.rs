//! Format and readability scoring: structural heuristics over the raw
//! resume text plus a Flesch-Reading-Ease-style readability value.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*•–▪◦]\s+\S").unwrap());
static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Standard resume sections; each one present earns a fixed increment.
static SECTION_KEYWORDS: &[&str] = &["summary", "experience", "education", "skills", "projects"];

const VERY_SHORT_CAP: f64 = 5.0;
const SHORT_CAP: f64 = 15.0;
const BASE_SCORE: f64 = 40.0;
const SECTION_BONUS: f64 = 7.0;
const BULLET_BONUS: f64 = 10.0;
const YEAR_BONUS: f64 = 5.0;
const LENGTH_BONUS: f64 = 10.0;

/// Acceptable word-count band; outside it the length bonus is withheld.
const MIN_WORDS: usize = 120;
const MAX_WORDS: usize = 1500;

fn contains_word(normalized: &str, word: &str) -> bool {
    normalized.split(' ').any(|t| t == word)
}

/// Structural format score in `[0, 100]`.
///
/// Very short documents are capped hard: under 20 cleaned characters the
/// score is pinned near 5, under 100 near 15, regardless of structure.
pub fn format_score(raw: &str, normalized: &str) -> f64 {
    let cleaned_len = normalized.chars().count();
    if cleaned_len < 20 {
        return VERY_SHORT_CAP;
    }
    if cleaned_len < 100 {
        return SHORT_CAP;
    }

    let mut score = BASE_SCORE;

    for section in SECTION_KEYWORDS {
        if contains_word(normalized, section) {
            score += SECTION_BONUS;
        }
    }

    if RE_BULLET.is_match(raw) {
        score += BULLET_BONUS;
    }

    if RE_YEAR.is_match(normalized) {
        score += YEAR_BONUS;
    }

    let words = normalized.split(' ').count();
    if (MIN_WORDS..=MAX_WORDS).contains(&words) {
        score += LENGTH_BONUS;
    }

    score.clamp(0.0, 100.0)
}

fn count_syllables(word: &str) -> usize {
    let lower: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if lower.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0usize;
    let mut in_group = false;
    for &c in &lower {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    // Silent trailing "e" ("code", "pipeline") unless it is the only vowel.
    if groups > 1 && lower.last() == Some(&'e') && !is_vowel(lower[lower.len() - 2]) {
        groups -= 1;
    }

    groups.max(1)
}

/// Flesch-Reading-Ease-style readability in `[0, 100]`. Degenerate input
/// (no sentences or no words) returns a neutral 50.
pub fn readability_score(raw: &str) -> f64 {
    let sentences = raw
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .count();
    let words: Vec<&str> = raw.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 50.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    flesch.clamp(0.0, 100.0)
}
