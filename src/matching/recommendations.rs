//! Recommendation generator: turns missing skills and weak sub-scores into
//! ordered, section-targeted suggestions. Skills gap first, then format,
//! then keyword density, then experience.

use crate::extraction::{skill_weight, ExtractedSkill};
use crate::matching::scoring::ScoreBreakdown;

const FORMAT_THRESHOLD: f64 = 60.0;
const DENSITY_THRESHOLD: f64 = 50.0;
const EXPERIENCE_THRESHOLD: f64 = 60.0;

/// Missing skills surfaced in a single suggestion.
const MAX_LISTED_SKILLS: usize = 5;

/// Category weight at or above which a missing skill counts as critical.
pub const CRITICAL_WEIGHT: f64 = 0.8;

/// Rank missing skills by category importance, heaviest first, with a
/// stable alphabetical tie-break.
pub fn rank_missing(missing: &[ExtractedSkill]) -> Vec<&ExtractedSkill> {
    let mut ranked: Vec<&ExtractedSkill> = missing.iter().collect();
    ranked.sort_by(|a, b| {
        skill_weight(b)
            .partial_cmp(&skill_weight(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    ranked
}

/// Build the ordered suggestion list. When no weakness is detected, a single
/// positive acknowledgement is returned.
pub fn build_recommendations(
    missing: &[ExtractedSkill],
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let ranked = rank_missing(missing);
    if !ranked.is_empty() {
        let listed: Vec<&str> = ranked
            .iter()
            .take(MAX_LISTED_SKILLS)
            .map(|s| s.term.as_str())
            .collect();
        let critical = ranked
            .first()
            .map(|s| skill_weight(s) >= CRITICAL_WEIGHT)
            .unwrap_or(false);
        if critical {
            recommendations.push(format!(
                "Add these critical skills to your skills section: {}",
                listed.join(", ")
            ));
        } else {
            recommendations.push(format!(
                "Consider covering these skills from the posting: {}",
                listed.join(", ")
            ));
        }
    }

    if breakdown.format_quality < FORMAT_THRESHOLD {
        recommendations.push(
            "Improve resume structure with clear sections (summary, experience, \
             education, skills, projects) and bullet points"
                .to_string(),
        );
    }

    if breakdown.keyword_density < DENSITY_THRESHOLD {
        recommendations.push(
            "Include more technical keywords from the job description in your \
             experience bullets"
                .to_string(),
        );
    }

    if breakdown.experience_match < EXPERIENCE_THRESHOLD {
        recommendations.push(
            "Highlight experience that demonstrates the required years and \
             seniority level"
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations
            .push("Strong match - tailor your summary to mirror the job title and top requirements".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GENERAL_CATEGORY;

    fn skill(term: &str, category: &'static str) -> ExtractedSkill {
        ExtractedSkill {
            term: term.to_string(),
            category,
            confidence: 1.0,
        }
    }

    fn healthy_breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            semantic_match: 80.0,
            skills_match: 85.0,
            experience_match: 90.0,
            format_quality: 75.0,
            keyword_density: 70.0,
            readability: 65.0,
        }
    }

    #[test]
    fn skills_gap_comes_first_and_ranks_by_weight() {
        let missing = vec![
            skill("excel", "business_tools"),
            skill("python", "programming_languages"),
            skill("docker", "cloud_devops"),
        ];
        let recs = build_recommendations(&missing, &healthy_breakdown());

        assert!(recs[0].starts_with("Add these critical skills"));
        let python_pos = recs[0].find("python").unwrap();
        let excel_pos = recs[0].find("excel").unwrap();
        assert!(python_pos < excel_pos);
    }

    #[test]
    fn low_weight_gaps_get_softer_wording() {
        let missing = vec![skill("telemetry", GENERAL_CATEGORY)];
        let recs = build_recommendations(&missing, &healthy_breakdown());
        assert!(recs[0].starts_with("Consider covering"));
    }

    #[test]
    fn weak_subscores_emit_in_fixed_order() {
        let breakdown = ScoreBreakdown {
            semantic_match: 40.0,
            skills_match: 30.0,
            experience_match: 50.0,
            format_quality: 20.0,
            keyword_density: 25.0,
            readability: 50.0,
        };
        let missing = vec![skill("rust", "programming_languages")];
        let recs = build_recommendations(&missing, &breakdown);

        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("critical skills"));
        assert!(recs[1].contains("structure"));
        assert!(recs[2].contains("keywords"));
        assert!(recs[3].contains("experience"));
    }

    #[test]
    fn no_weakness_yields_single_positive_note() {
        let recs = build_recommendations(&[], &healthy_breakdown());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Strong match"));
    }
}
