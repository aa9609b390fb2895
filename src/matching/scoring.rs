//! Scoring engine: orchestrates the full pipeline (normalize, extract,
//! match, classify, score) and aggregates sub-scores into the overall
//! compatibility score with deterministic caps and penalties.

use serde::Serialize;
use tracing::debug;

use crate::extraction::{extract_skills, ExtractedSkill};
use crate::matching::domain::{classify_domain, mismatch_penalty};
use crate::matching::experience::{experience_score, extract_experience};
use crate::matching::format::{format_score, readability_score};
use crate::matching::recommendations::{build_recommendations, rank_missing};
use crate::matching::semantic::semantic_match_score;
use crate::matching::similarity::{JaroWinkler, Similarity};
use crate::matching::skills::{match_skills, skills_match_score, MatchOutcome, SkillMatch};
use crate::matching::weights::{Weights, AGGREGATE_WEIGHTS};
use crate::normalize::{cleaned_len, normalize_text};

/// Sub-scores, each in `[0, 100]`. Readability is informational and not
/// part of the weighted aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub semantic_match: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub format_quality: f64,
    pub keyword_density: f64,
    pub readability: f64,
}

/// Optional job metadata, echoed into the completion log event and carried
/// through for collaborators that render results. Inert for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisOptions {
    pub job_title: Option<String>,
    pub company: Option<String>,
    /// Never consulted by the domain classifier; domain signals come from
    /// the document text alone, and fit labels derive from the computed
    /// score and penalty.
    pub industry: Option<String>,
}

/// Result of one analysis. All fields derive deterministically from the two
/// input strings; repeated calls yield identical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<SkillMatch>,
    /// Missing job skills, capped to the top entries by category importance.
    pub missing_skills: Vec<ExtractedSkill>,
    pub recommendations: Vec<String>,
    /// 1.0 when no domain mismatch penalty was applied.
    pub domain_penalty_applied: f64,
}

fn env_fuzzy_threshold() -> f64 {
    std::env::var("CVFIT_FUZZY_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.85)
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub weights: Weights,
    pub fuzzy_threshold: f64,
    pub domain_penalty_enabled: bool,
    pub max_missing_reported: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weights: AGGREGATE_WEIGHTS,
            fuzzy_threshold: env_fuzzy_threshold(),
            domain_penalty_enabled: true,
            max_missing_reported: 10,
        }
    }
}

pub struct AnalysisEngine {
    config: AnalysisConfig,
    similarity: Box<dyn Similarity>,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// One-shot convenience over [`AnalysisEngine`] with default configuration.
pub fn analyze(resume_text: &str, job_text: &str, options: &AnalysisOptions) -> AnalysisResult {
    AnalysisEngine::default().analyze(resume_text, job_text, options)
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            similarity: Box::new(JaroWinkler),
        }
    }

    /// Swap the fuzzy-matching strategy without touching matcher logic.
    pub fn with_similarity(config: AnalysisConfig, similarity: Box<dyn Similarity>) -> Self {
        Self { config, similarity }
    }

    pub fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
        options: &AnalysisOptions,
    ) -> AnalysisResult {
        let resume_norm = normalize_text(resume_text);
        let job_norm = normalize_text(job_text);

        let resume_skills = extract_skills(&resume_norm);
        let job_skills = extract_skills(&job_norm);
        let outcome = match_skills(
            &resume_skills,
            &job_skills,
            self.similarity.as_ref(),
            self.config.fuzzy_threshold,
        );

        let domain_penalty = if self.config.domain_penalty_enabled {
            let resume_domain = classify_domain(&resume_norm);
            let job_domain = classify_domain(&job_norm);
            mismatch_penalty(&resume_domain, &job_domain)
        } else {
            1.0
        };

        // The penalty lands on the skills component before aggregation.
        let skills = skills_match_score(&outcome) * domain_penalty;

        let breakdown = ScoreBreakdown {
            semantic_match: semantic_match_score(&resume_norm, &job_norm),
            skills_match: skills.clamp(0.0, 100.0),
            experience_match: experience_score(
                &extract_experience(&resume_norm),
                &extract_experience(&job_norm),
            ),
            format_quality: format_score(resume_text, &resume_norm),
            keyword_density: keyword_density_score(&resume_norm, &job_skills),
            readability: readability_score(resume_text),
        };

        let overall_score = self.aggregate(
            &breakdown,
            &outcome,
            cleaned_len(&resume_norm),
            cleaned_len(&job_norm),
        );

        let recommendations = build_recommendations(&outcome.missing, &breakdown);
        let missing_skills = rank_missing(&outcome.missing)
            .into_iter()
            .take(self.config.max_missing_reported)
            .cloned()
            .collect();

        debug!(
            overall_score,
            matched = outcome.matched_count(),
            missing = outcome.missing_count(),
            domain_penalty,
            job_title = options.job_title.as_deref().unwrap_or(""),
            "analysis complete"
        );

        AnalysisResult {
            overall_score,
            breakdown,
            matched_skills: outcome.matched,
            missing_skills,
            recommendations,
            domain_penalty_applied: domain_penalty,
        }
    }

    /// Weighted aggregate with the deterministic guard rails, applied in
    /// order: minimal-content caps, low-match-count penalties, then the
    /// skill-match-ratio caps.
    fn aggregate(
        &self,
        breakdown: &ScoreBreakdown,
        outcome: &MatchOutcome,
        resume_len: usize,
        job_len: usize,
    ) -> u32 {
        let weights = self.config.weights;
        let mut overall = breakdown.semantic_match * weights.semantic
            + breakdown.skills_match * weights.skills
            + breakdown.experience_match * weights.experience
            + breakdown.format_quality * weights.format
            + breakdown.keyword_density * weights.keyword_density;

        if resume_len < 20 || job_len < 20 {
            overall = overall.min(5.0);
        } else if resume_len < 50 && job_len < 50 {
            overall = overall.min(15.0);
        }

        let matched = outcome.matched_count();
        let missing = outcome.missing_count();
        if matched < 3 && missing > 10 {
            overall *= 0.4;
        } else if matched < 5 && missing > 8 {
            overall *= 0.6;
        } else if matched * 2 < missing {
            overall *= 0.7;
        }

        if matched + missing > 0 {
            let ratio = outcome.match_ratio();
            if ratio < 0.3 {
                overall = overall.min(45.0);
            } else if ratio < 0.5 {
                overall = overall.min(65.0);
            }
        }

        overall.round().clamp(0.0, 100.0) as u32
    }
}

/// Keyword density: how much of the resume's vocabulary is spent on the
/// job's skill terms. Scored against a 5% ideal saturation.
pub fn keyword_density_score(resume_normalized: &str, job_skills: &[ExtractedSkill]) -> f64 {
    if job_skills.is_empty() {
        return 50.0;
    }

    let tokens: Vec<&str> = resume_normalized
        .split(' ')
        .map(|t| t.trim_matches(|c| matches!(c, '.' | '-' | '_')))
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    for token in &tokens {
        if job_skills
            .iter()
            .any(|s| s.term == *token || crate::catalog::same_canonical(&s.term, token))
        {
            hits += 1;
        }
    }

    let density = hits as f64 / tokens.len() as f64;
    (density / 0.05 * 100.0).clamp(0.0, 100.0)
}
