//! Experience and seniority matcher: pulls "N years" figures and seniority
//! vocabulary out of normalized text and scores the resume against the job
//! requirement with tiered bonuses.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // "5 years", "5+ yrs", "seven years" is out of scope; digits only.
    static ref YEARS_RE: Regex = Regex::new(r"\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").unwrap();
}

/// Seniority tiers, lowest to highest. Later entries win when several
/// keywords appear.
static SENIORITY_TIERS: &[(u8, &[&str])] = &[
    (0, &["entry level", "entry-level", "junior", "intern", "internship", "graduate"]),
    (1, &["mid level", "mid-level", "intermediate"]),
    (2, &["senior", "sr engineer", "sr developer"]),
    (3, &["lead", "principal", "staff engineer", "tech lead", "architect"]),
    (4, &["director", "vp", "vice president", "head of engineering", "cto", "chief"]),
];

/// Tier used when a document carries no seniority vocabulary at all.
pub const DEFAULT_SENIORITY: u8 = 1;

/// Years figures above this are treated as extraction noise.
const MAX_PLAUSIBLE_YEARS: u32 = 40;

const BASE_SCORE: f64 = 50.0;

/// Experience signal for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceSignal {
    pub years: Option<u32>,
    pub seniority: u8,
}

fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    let padded = format!(" {normalized} ");
    padded.contains(&format!(" {phrase} "))
}

fn extract_years(normalized: &str) -> Option<u32> {
    YEARS_RE
        .captures_iter(normalized)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .filter(|years| *years <= MAX_PLAUSIBLE_YEARS)
        .max()
}

fn extract_seniority(normalized: &str) -> u8 {
    SENIORITY_TIERS
        .iter()
        .rev()
        .find(|(_, keywords)| keywords.iter().any(|kw| contains_phrase(normalized, kw)))
        .map(|(tier, _)| *tier)
        .unwrap_or(DEFAULT_SENIORITY)
}

/// Extract the maximum years figure and the highest seniority tier present.
pub fn extract_experience(normalized: &str) -> ExperienceSignal {
    ExperienceSignal {
        years: extract_years(normalized),
        seniority: extract_seniority(normalized),
    }
}

/// Score resume experience against the job requirement.
///
/// Starts at a neutral base of 50. Years add up to 30 (full credit when the
/// resume meets the requirement, partial at 70% and 50% of it; a job without
/// a stated requirement gives neutral credit). Seniority adds 20 when the
/// resume is at or above the required tier, 10 when exactly one tier below.
pub fn experience_score(resume: &ExperienceSignal, job: &ExperienceSignal) -> f64 {
    let mut score = BASE_SCORE;

    score += match (resume.years, job.years) {
        (Some(actual), Some(required)) if required > 0 => {
            let ratio = actual as f64 / required as f64;
            if ratio >= 1.0 {
                30.0
            } else if ratio >= 0.7 {
                20.0
            } else if ratio >= 0.5 {
                10.0
            } else {
                0.0
            }
        }
        (Some(_), Some(_)) => 30.0,
        (_, None) => 15.0,
        (None, Some(_)) => 0.0,
    };

    if resume.seniority >= job.seniority {
        score += 20.0;
    } else if resume.seniority + 1 == job.seniority {
        score += 10.0;
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_text;

    fn signal(text: &str) -> ExperienceSignal {
        extract_experience(&normalize_text(text))
    }

    #[test]
    fn extracts_maximum_years_figure() {
        let sig = signal("2 years of Go, then 7+ years of backend experience, 1 yr of ML");
        assert_eq!(sig.years, Some(7));
    }

    #[test]
    fn ignores_implausible_years() {
        assert_eq!(signal("founded in 1998, 99 years of history").years, None);
        assert_eq!(signal("no numbers here").years, None);
    }

    #[test]
    fn seniority_defaults_to_mid() {
        assert_eq!(signal("software engineer who ships").seniority, DEFAULT_SENIORITY);
    }

    #[test]
    fn highest_tier_keyword_wins() {
        assert_eq!(signal("junior developer").seniority, 0);
        assert_eq!(signal("senior engineer, former junior").seniority, 2);
        assert_eq!(signal("principal engineer and tech lead").seniority, 3);
        assert_eq!(signal("director of engineering").seniority, 4);
    }

    #[test]
    fn meeting_requirements_earns_full_credit() {
        let resume = signal("senior engineer with 8 years of experience");
        let job = signal("senior role requiring 5+ years of experience");
        assert_eq!(experience_score(&resume, &job), 100.0);
    }

    #[test]
    fn partial_years_earn_partial_credit() {
        let resume = ExperienceSignal { years: Some(4), seniority: 1 };
        let job = ExperienceSignal { years: Some(5), seniority: 1 };
        // 4/5 = 0.8 -> 20 year-points + 20 seniority-points.
        assert_eq!(experience_score(&resume, &job), 90.0);

        let resume = ExperienceSignal { years: Some(3), seniority: 1 };
        // 3/5 = 0.6 -> 10 year-points.
        assert_eq!(experience_score(&resume, &job), 80.0);
    }

    #[test]
    fn one_tier_below_earns_half_seniority_credit() {
        let resume = ExperienceSignal { years: None, seniority: 2 };
        let job = ExperienceSignal { years: None, seniority: 3 };
        // 50 base + 15 (no years requirement) + 10 (one tier below).
        assert_eq!(experience_score(&resume, &job), 75.0);
    }

    #[test]
    fn score_is_always_in_bounds() {
        let low = ExperienceSignal { years: None, seniority: 0 };
        let high = ExperienceSignal { years: Some(40), seniority: 4 };
        let demanding = ExperienceSignal { years: Some(15), seniority: 4 };
        assert!(experience_score(&low, &demanding) >= 0.0);
        assert!(experience_score(&high, &demanding) <= 100.0);
    }
}
