use once_cell::sync::Lazy;
use regex::Regex;

static RE_DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w.\-\s]+").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// テキスト正規化に相当する前処理（全段の入口）
///
/// Contract:
/// 1. lowercase the whole input
/// 2. drop every character that is not a word character, `.`, `-`, or whitespace
/// 3. collapse whitespace runs to a single space and trim
///
/// Dots and hyphens survive on purpose: the catalog keys off spellings like
/// `node.js` and `full-stack`. Empty input yields an empty string; the
/// function never fails and is idempotent.
pub fn normalize_text(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = RE_DISALLOWED.replace_all(&lowered, " ");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Length of the cleaned text in characters, the quantity the minimal-content
/// caps are defined over.
pub fn cleaned_len(normalized: &str) -> usize {
    normalized.chars().count()
}
