use std::collections::HashSet;
use std::sync::LazyLock;

/// ストップワード表（正規化後の小文字トークン前提）
///
/// English stopwords plus the job-posting boilerplate that would otherwise
/// dominate frequency counts. Checked after normalization, so entries are
/// lowercase single tokens.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let words: &[&str] = &[
        // Generic English stopwords
        "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
        "do", "for", "from", "had", "has", "have", "if", "in", "into", "is",
        "it", "its", "more", "most", "not", "of", "on", "or", "our", "so",
        "such", "that", "the", "their", "them", "then", "there", "these",
        "they", "this", "to", "was", "we", "were", "what", "when", "which",
        "while", "who", "will", "with", "you", "your",
        // Job-posting fluff
        "ability", "able", "about", "across", "all", "also", "amazing",
        "any", "apply", "benefits", "best", "candidate", "candidates",
        "company", "culture", "dynamic", "environment", "etc", "exciting",
        "experience", "experienced",
        "fast-paced", "great", "growing", "ideal", "join", "like", "looking",
        "member", "mission", "must", "new", "offer", "opportunity",
        "opportunities", "passion", "passionate", "people", "perks", "plus",
        "position", "preferred", "required", "requirements", "responsibilities",
        "role", "salary", "seeking", "should", "skills", "someone", "strong",
        "team", "today", "us", "want", "we're", "work", "working",
        "world-class", "years",
    ];
    words.iter().copied().collect()
});

/// True when the token carries no skill signal and must be excluded from
/// every statistical pass.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_posting_boilerplate() {
        assert!(is_stopword("looking"));
        assert!(is_stopword("passionate"));
        assert!(is_stopword("team"));
        assert!(is_stopword("the"));
    }

    #[test]
    fn keeps_technical_terms() {
        assert!(!is_stopword("python"));
        assert!(!is_stopword("kubernetes"));
        assert!(!is_stopword("postgresql"));
    }
}
