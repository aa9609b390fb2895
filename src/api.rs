//! Boundary DTOs: the flattened request/response view consumed by the HTTP
//! and persistence collaborators. The engine itself only ever sees the two
//! strings plus optional metadata.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::fingerprint::analysis_fingerprint;
use crate::matching::recommendations::CRITICAL_WEIGHT;
use crate::matching::scoring::{AnalysisOptions, AnalysisResult};

/// Upper bound on either input, a boundary sanity check rather than an
/// engine limit.
const MAX_INPUT_BYTES: usize = 1_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_content: String,
    pub job_description: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub resume_id: Option<String>,
}

impl AnalyzeRequest {
    /// Boundary contract check. Empty strings are valid input (they degrade
    /// into the minimal-content cap); oversized payloads are not.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.resume_content.len() > MAX_INPUT_BYTES {
            return Err(EngineError::InvalidInput(format!(
                "resume content exceeds {MAX_INPUT_BYTES} bytes"
            )));
        }
        if self.job_description.len() > MAX_INPUT_BYTES {
            return Err(EngineError::InvalidInput(format!(
                "job description exceeds {MAX_INPUT_BYTES} bytes"
            )));
        }
        Ok(())
    }

    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            job_title: self.job_title.clone(),
            company: self.company.clone(),
            industry: self.industry.clone(),
        }
    }

    /// Memoization key for callers that cache results per input pair.
    pub fn cache_key(&self) -> String {
        analysis_fingerprint(&self.resume_content, &self.job_description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresDto {
    pub overall: u32,
    /// Skills/keyword match component.
    pub keyword: f64,
    pub format: f64,
    /// Experience/content component.
    pub content: f64,
    pub semantic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub scores: ScoresDto,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub critical_missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub industry_fit: String,
    pub readability_score: f64,
    pub semantic_similarity: f64,
    pub keyword_density: f64,
}

/// Qualitative fit label for UI chips. Any domain penalty marks the fit
/// weak regardless of the residual score.
fn industry_fit_label(overall: u32, domain_penalty: f64) -> &'static str {
    if domain_penalty < 1.0 {
        "weak"
    } else if overall >= 70 {
        "strong"
    } else if overall >= 45 {
        "moderate"
    } else {
        "weak"
    }
}

impl From<&AnalysisResult> for AnalyzeResponse {
    fn from(result: &AnalysisResult) -> Self {
        let critical_missing_keywords = result
            .missing_skills
            .iter()
            .filter(|s| crate::extraction::skill_weight(s) >= CRITICAL_WEIGHT)
            .map(|s| s.term.clone())
            .collect();

        Self {
            scores: ScoresDto {
                overall: result.overall_score,
                keyword: result.breakdown.skills_match,
                format: result.breakdown.format_quality,
                content: result.breakdown.experience_match,
                semantic: result.breakdown.semantic_match,
            },
            matched_keywords: result
                .matched_skills
                .iter()
                .map(|m| m.skill.term.clone())
                .collect(),
            missing_keywords: result
                .missing_skills
                .iter()
                .map(|s| s.term.clone())
                .collect(),
            critical_missing_keywords,
            suggestions: result.recommendations.clone(),
            industry_fit: industry_fit_label(result.overall_score, result.domain_penalty_applied)
                .to_string(),
            readability_score: result.breakdown.readability,
            semantic_similarity: result.breakdown.semantic_match,
            keyword_density: result.breakdown.keyword_density,
        }
    }
}

/// Neutral default returned by collaborators when the engine call itself
/// fails at the integration boundary ("fallback analysis"). Not produced by
/// the engine; documented here so every caller falls back identically.
pub fn fallback_response() -> AnalyzeResponse {
    AnalyzeResponse {
        scores: ScoresDto {
            overall: 50,
            keyword: 50.0,
            format: 50.0,
            content: 50.0,
            semantic: 50.0,
        },
        matched_keywords: Vec::new(),
        missing_keywords: Vec::new(),
        critical_missing_keywords: Vec::new(),
        suggestions: vec![
            "Analysis is temporarily unavailable; please retry shortly".to_string()
        ],
        industry_fit: "moderate".to_string(),
        readability_score: 50.0,
        semantic_similarity: 50.0,
        keyword_density: 50.0,
    }
}
