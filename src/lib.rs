//! Resume vs job-posting compatibility scoring.
//!
//! The engine is a pure, synchronous computation over two strings: it
//! normalizes both documents, extracts skill signals against an immutable
//! catalog, partitions job skills into matched/missing, and aggregates
//! weighted sub-scores (semantic overlap, skills, experience, format,
//! keyword density) into an overall score with deterministic caps and
//! penalties. No I/O, no network, no state between invocations.
//!
//! ```
//! use cvfit::{analyze, AnalysisOptions};
//!
//! let result = analyze(
//!     "Experienced Python developer with Django, PostgreSQL, and AWS.",
//!     "Looking for Python, Django, PostgreSQL, AWS, Docker experience.",
//!     &AnalysisOptions::default(),
//! );
//! assert!(result.overall_score >= 60);
//! assert_eq!(result.missing_skills[0].term, "docker");
//! ```

pub mod api;
pub mod catalog;
pub mod error;
pub mod extraction;
pub mod fingerprint;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod stopwords;

pub use error::EngineError;
pub use extraction::ExtractedSkill;
pub use matching::scoring::{
    analyze, AnalysisConfig, AnalysisEngine, AnalysisOptions, AnalysisResult, ScoreBreakdown,
};
pub use matching::skills::{MatchKind, MatchOutcome, SkillMatch};
