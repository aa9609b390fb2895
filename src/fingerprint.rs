use sha2::{Digest, Sha256};

/// Deterministic key over a `(resume, job)` pair, for callers that memoize
/// results. SHA-256, truncated to 16 hex characters. The separator byte
/// keeps `("ab", "c")` and `("a", "bc")` distinct.
pub fn analysis_fingerprint(resume_text: &str, job_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(resume_text.as_bytes());
    hasher.update([0x1f]);
    hasher.update(job_text.as_bytes());
    let bytes = hasher.finalize();
    let mut hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    hex.truncate(16);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_16_hex() {
        let a = analysis_fingerprint("resume", "job");
        assert_eq!(a, analysis_fingerprint("resume", "job"));
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn boundary_shifts_change_the_key() {
        assert_ne!(
            analysis_fingerprint("ab", "c"),
            analysis_fingerprint("a", "bc")
        );
        assert_ne!(
            analysis_fingerprint("resume", "job"),
            analysis_fingerprint("job", "resume")
        );
    }
}
