//! Pluggable string-similarity strategy used by the skill matcher's fuzzy
//! fallback. Swapping the distance algorithm never touches matcher logic.

use strsim::{damerau_levenshtein, jaro_winkler};

pub trait Similarity: Send + Sync {
    /// Similarity in `[0, 1]`; 1.0 means identical.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Default strategy. Jaro-Winkler favors common prefixes, which suits
/// skill-term typos ("postgre" vs "postgres").
#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler(a, b)
    }
}

/// Alternative strategy: Damerau-Levenshtein distance normalized by the
/// longer input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizedDamerau;

impl Similarity for NormalizedDamerau {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let len = a.chars().count().max(b.chars().count());
        if len == 0 {
            return 1.0;
        }
        1.0 - damerau_levenshtein(a, b) as f64 / len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(JaroWinkler.similarity("python", "python"), 1.0);
        assert_eq!(NormalizedDamerau.similarity("python", "python"), 1.0);
    }

    #[test]
    fn near_misses_score_high() {
        assert!(JaroWinkler.similarity("postgresql", "postgresq") > 0.9);
        assert!(NormalizedDamerau.similarity("kubernetes", "kuberntes") > 0.85);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(JaroWinkler.similarity("python", "terraform") < 0.6);
        assert!(NormalizedDamerau.similarity("python", "terraform") < 0.4);
    }

    #[test]
    fn empty_inputs_are_handled() {
        assert_eq!(NormalizedDamerau.similarity("", ""), 1.0);
        assert!(NormalizedDamerau.similarity("", "rust") < 0.01);
    }
}
