//! Skill matcher: partitions job-side skills into matched vs missing against
//! the resume-side skills. Matching precedence is exact canonical equality,
//! then variant-table resolution, then fuzzy similarity; the first rule that
//! fires wins and nothing is double counted.

use serde::Serialize;

use crate::catalog::same_canonical;
use crate::extraction::{skill_weight, ExtractedSkill};
use crate::matching::similarity::Similarity;

/// Which rule satisfied a job-side skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Variant,
    Fuzzy,
}

/// One satisfied job requirement, with the resume term that satisfied it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub skill: ExtractedSkill,
    pub resume_term: String,
    pub kind: MatchKind,
}

/// Partition of the job's extracted skills. Invariant: every job skill
/// appears in exactly one of `matched` or `missing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub matched: Vec<SkillMatch>,
    pub missing: Vec<ExtractedSkill>,
}

impl MatchOutcome {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Matched / (matched + missing); 0.0 when the job names no skills.
    pub fn match_ratio(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / total as f64
    }
}

fn find_match(
    job_skill: &ExtractedSkill,
    resume_skills: &[ExtractedSkill],
    similarity: &dyn Similarity,
    fuzzy_threshold: f64,
) -> Option<(String, MatchKind)> {
    // Rule 1: exact canonical-term equality.
    for resume_skill in resume_skills {
        if resume_skill.term == job_skill.term {
            return Some((resume_skill.term.clone(), MatchKind::Exact));
        }
    }

    // Rule 2: variant-table resolution in either direction. Catalog terms
    // arrive already canonical, so this mostly bridges statistical terms
    // against catalog spellings ("postgres" vs "postgresql").
    for resume_skill in resume_skills {
        if same_canonical(&resume_skill.term, &job_skill.term) {
            return Some((resume_skill.term.clone(), MatchKind::Variant));
        }
    }

    // Rule 3: fuzzy similarity above the configured threshold. Best score
    // wins; ties break on term order for determinism.
    let mut best: Option<(&ExtractedSkill, f64)> = None;
    for resume_skill in resume_skills {
        let score = similarity.similarity(&resume_skill.term, &job_skill.term);
        if score < fuzzy_threshold {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_skill, best_score)) => {
                score > best_score || (score == best_score && resume_skill.term < best_skill.term)
            }
        };
        if better {
            best = Some((resume_skill, score));
        }
    }

    best.map(|(skill, _)| (skill.term.clone(), MatchKind::Fuzzy))
}

/// Pair resume skills against job skills. Job skills are processed in a
/// deterministic order (importance weight, then term), so a fixed input
/// always yields the identical partition.
pub fn match_skills(
    resume_skills: &[ExtractedSkill],
    job_skills: &[ExtractedSkill],
    similarity: &dyn Similarity,
    fuzzy_threshold: f64,
) -> MatchOutcome {
    let mut ordered: Vec<&ExtractedSkill> = job_skills.iter().collect();
    ordered.sort_by(|a, b| {
        skill_weight(b)
            .partial_cmp(&skill_weight(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });

    let mut outcome = MatchOutcome::default();
    for job_skill in ordered {
        match find_match(job_skill, resume_skills, similarity, fuzzy_threshold) {
            Some((resume_term, kind)) => outcome.matched.push(SkillMatch {
                skill: job_skill.clone(),
                resume_term,
                kind,
            }),
            None => outcome.missing.push(job_skill.clone()),
        }
    }

    outcome
}

/// Category-weighted skills-match score in `[0, 100]`. A job with no
/// extracted skills scores a neutral 50: nothing to match is not a miss.
pub fn skills_match_score(outcome: &MatchOutcome) -> f64 {
    let matched_weight: f64 = outcome.matched.iter().map(|m| skill_weight(&m.skill)).sum();
    let missing_weight: f64 = outcome.missing.iter().map(skill_weight).sum();
    let total = matched_weight + missing_weight;

    if total == 0.0 {
        return 50.0;
    }

    (matched_weight / total * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract_skills;
    use crate::matching::similarity::JaroWinkler;
    use crate::normalize::normalize_text;

    const THRESHOLD: f64 = 0.85;

    fn skills_of(text: &str) -> Vec<ExtractedSkill> {
        extract_skills(&normalize_text(text))
    }

    fn run(resume: &str, job: &str) -> MatchOutcome {
        match_skills(&skills_of(resume), &skills_of(job), &JaroWinkler, THRESHOLD)
    }

    #[test]
    fn partitions_job_skills_completely() {
        let job_skills = skills_of("Looking for Python, Django, PostgreSQL, AWS, Docker experience.");
        let outcome = match_skills(
            &skills_of("Experienced Python developer with Django, PostgreSQL, and AWS."),
            &job_skills,
            &JaroWinkler,
            THRESHOLD,
        );

        assert_eq!(
            outcome.matched.len() + outcome.missing.len(),
            job_skills.len()
        );
        let matched: Vec<&str> = outcome.matched.iter().map(|m| m.skill.term.as_str()).collect();
        assert!(matched.contains(&"python"));
        assert!(matched.contains(&"django"));
        assert!(matched.contains(&"postgresql"));
        assert!(matched.contains(&"aws"));
        let missing: Vec<&str> = outcome.missing.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(missing, vec!["docker"]);
    }

    #[test]
    fn variant_spellings_match_across_documents() {
        let outcome = run(
            "Strong with JS, K8s, and Postgres in production.",
            "Must know JavaScript, Kubernetes, and PostgreSQL well.",
        );
        assert!(outcome.missing.is_empty());
        // Extraction already canonicalizes catalog variants, so these land
        // as exact canonical matches.
        assert!(outcome.matched.iter().all(|m| m.kind == MatchKind::Exact));
    }

    #[test]
    fn empty_resume_leaves_everything_missing() {
        let outcome = run("", "Python, Django, and AWS required for this position.");
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.missing.len(), 3);
        assert_eq!(outcome.match_ratio(), 0.0);
    }

    #[test]
    fn weighted_score_favors_important_categories() {
        // Language matched, business tool missing: score above the plain
        // 50% count ratio.
        let outcome = run(
            "Python developer writing data tooling since 2019.",
            "Python and Excel needed for reporting automation work.",
        );
        assert_eq!(outcome.matched_count(), 1);
        assert_eq!(outcome.missing_count(), 1);
        assert!(skills_match_score(&outcome) > 60.0);
    }

    #[test]
    fn no_job_skills_scores_neutral() {
        let outcome = run("Python developer", "We are a friendly bunch of people here.");
        assert_eq!(skills_match_score(&outcome), 50.0);
    }

    #[test]
    fn deterministic_partition_for_fixed_inputs() {
        let resume = "Senior Rust and Go engineer with Kafka, Redis, and Terraform.";
        let job = "Rust, Kafka, Redis, Kubernetes, Terraform, and Helm experience wanted.";
        let first = run(resume, job);
        for _ in 0..5 {
            assert_eq!(run(resume, job), first);
        }
    }
}
