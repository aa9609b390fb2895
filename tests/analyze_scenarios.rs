//! End-to-end scenarios over the public `analyze` surface.

use cvfit::api::{AnalyzeRequest, AnalyzeResponse};
use cvfit::{analyze, AnalysisOptions};

const RESUME: &str = "Experienced Python developer with Django, PostgreSQL, and AWS.";
const JOB: &str = "Looking for Python, Django, PostgreSQL, AWS, Docker experience.";

fn options() -> AnalysisOptions {
    AnalysisOptions::default()
}

#[test]
fn repeated_calls_are_bit_identical() {
    let first = analyze(RESUME, JOB, &options());
    for _ in 0..10 {
        let again = analyze(RESUME, JOB, &options());
        assert_eq!(again, first);
        // The serialized view must be byte-stable too.
        assert_eq!(
            serde_json::to_string(&AnalyzeResponse::from(&again)).unwrap(),
            serde_json::to_string(&AnalyzeResponse::from(&first)).unwrap()
        );
    }
}

#[test]
fn matched_and_missing_never_overlap() {
    let cases = [
        (RESUME, JOB),
        ("", JOB),
        (JOB, RESUME),
        ("React and TypeScript frontend engineer", "Rust systems role with Kafka and Redis"),
    ];
    for (resume, job) in cases {
        let result = analyze(resume, job, &options());
        for matched in &result.matched_skills {
            assert!(
                !result
                    .missing_skills
                    .iter()
                    .any(|missing| missing.term == matched.skill.term),
                "{} in both partitions",
                matched.skill.term
            );
        }
    }
}

#[test]
fn scores_are_bounded_for_hostile_input() {
    let long_job = "word ".repeat(5000);
    let long_resume = "python ".repeat(2000);
    let cases = [
        ("", ""),
        ("....", "----"),
        ("a", long_job.as_str()),
        ("🦀🦀🦀", "ラストエンジニア募集"),
        (long_resume.as_str(), "python"),
    ];
    for (resume, job) in cases {
        let result = analyze(resume, job, &options());
        assert!(result.overall_score <= 100);
        let b = &result.breakdown;
        for value in [
            b.semantic_match,
            b.skills_match,
            b.experience_match,
            b.format_quality,
            b.keyword_density,
            b.readability,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of bounds");
        }
    }
}

#[test]
fn empty_resume_is_capped_at_five() {
    let result = analyze(
        "",
        "Some job text that is comfortably longer than fifty characters total.",
        &options(),
    );
    assert!(result.overall_score <= 5);
}

#[test]
fn exact_match_scenario_lands_in_band() {
    let result = analyze(RESUME, JOB, &options());

    let matched: Vec<&str> = result
        .matched_skills
        .iter()
        .map(|m| m.skill.term.as_str())
        .collect();
    for term in ["python", "django", "postgresql", "aws"] {
        assert!(matched.contains(&term));
    }
    assert_eq!(result.missing_skills.len(), 1);
    assert_eq!(result.missing_skills[0].term, "docker");
    assert!((60..=85).contains(&result.overall_score));
}

#[test]
fn skills_gap_drives_the_first_suggestion() {
    let result = analyze(RESUME, JOB, &options());
    assert!(result.recommendations[0].contains("docker"));
}

#[test]
fn low_match_against_demanding_job_is_reduced_heavily() {
    let resume = "Marketing coordinator experienced with Excel and PowerPoint decks.";
    let job = "Hiring: python java golang rust react angular vue django flask spring \
               kubernetes docker terraform ansible postgresql mongodb redis kafka";
    let result = analyze(resume, job, &options());

    assert!(result.matched_skills.len() < 3);
    assert!(result.missing_skills.len() >= 10 || result.breakdown.skills_match < 30.0);
    assert!(result.overall_score <= 45);
}

#[test]
fn request_to_response_roundtrip() {
    let request = AnalyzeRequest {
        resume_content: RESUME.into(),
        job_description: JOB.into(),
        job_title: Some("Backend Engineer".into()),
        company: Some("Acme".into()),
        industry: Some("fintech".into()),
        resume_id: None,
    };
    request.validate().unwrap();

    let result = analyze(&request.resume_content, &request.job_description, &request.options());
    let response = AnalyzeResponse::from(&result);

    let json = serde_json::to_string(&response).unwrap();
    let parsed: AnalyzeResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response);
    assert_eq!(parsed.scores.overall, result.overall_score);
}
