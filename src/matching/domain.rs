//! Domain classifier: buckets a document into a coarse technical domain by
//! counting signature terms, and derives the mismatch penalty multiplier
//! applied to the skills component when resume and job clearly diverge.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

/// Signature terms per domain, matched on whole tokens of normalized text.
/// Declaration order is the tie-break order, so classification stays
/// deterministic.
static DOMAIN_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "web-development",
        &[
            "react", "angular", "vue", "frontend", "front-end", "backend", "back-end", "css",
            "html", "webpack", "sass", "responsive", "browser", "website", "web", "dom",
        ],
    ),
    (
        "data-science",
        &[
            "data", "scientist", "pandas", "numpy", "tensorflow", "pytorch", "jupyter",
            "statistics", "statistical", "dataset", "datasets", "regression", "classification",
            "model", "models", "ml",
        ],
    ),
    (
        "mobile",
        &[
            "android", "ios", "swift", "kotlin", "flutter", "xcode", "mobile", "react-native",
            "reactnative", "app", "apps",
        ],
    ),
    (
        "devops",
        &[
            "kubernetes", "k8s", "docker", "terraform", "ansible", "jenkins", "cicd", "pipeline",
            "pipelines", "deployment", "infrastructure", "monitoring", "sre", "observability",
        ],
    ),
    (
        "embedded",
        &[
            "embedded", "firmware", "microcontroller", "microcontrollers", "rtos", "fpga",
            "verilog", "vhdl", "arduino", "bare-metal", "baremetal", "soc",
        ],
    ),
];

/// A document must produce at least this many signature hits before it gets
/// a domain at all.
const MIN_SIGNAL: usize = 2;

/// Both sides at or above this make a mismatch "strong".
const STRONG_SIGNAL: usize = 3;

const STRONG_MISMATCH_PENALTY: f64 = 0.4;
const MODERATE_MISMATCH_PENALTY: f64 = 0.7;

static SIGNATURE_SETS: LazyLock<Vec<(&'static str, HashSet<&'static str>)>> =
    LazyLock::new(|| {
        DOMAIN_SIGNATURES
            .iter()
            .map(|(domain, terms)| (*domain, terms.iter().copied().collect()))
            .collect()
    });

/// Dominant domain of one document plus the raw signal strength behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainProfile {
    pub domain: Option<&'static str>,
    pub signal: usize,
}

/// Count signature hits per domain over normalized text; every occurrence
/// counts, so a document saturated with one vocabulary wins decisively.
pub fn classify_domain(normalized: &str) -> DomainProfile {
    let mut best: Option<(&'static str, usize)> = None;

    for (domain, terms) in SIGNATURE_SETS.iter() {
        let count = normalized
            .split(' ')
            .map(|t| t.trim_matches(|c| matches!(c, '.' | '_')))
            .filter(|t| terms.contains(t))
            .count();

        if count >= MIN_SIGNAL {
            // Strictly greater keeps declaration order as the tie-break.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((domain, count));
            }
        }
    }

    match best {
        Some((domain, signal)) => DomainProfile {
            domain: Some(domain),
            signal,
        },
        None => DomainProfile {
            domain: None,
            signal: 0,
        },
    }
}

/// Penalty multiplier for the skills component. 1.0 means no penalty.
pub fn mismatch_penalty(resume: &DomainProfile, job: &DomainProfile) -> f64 {
    let (Some(resume_domain), Some(job_domain)) = (resume.domain, job.domain) else {
        return 1.0;
    };
    if resume_domain == job_domain {
        return 1.0;
    }

    let weaker = resume.signal.min(job.signal);
    if weaker >= STRONG_SIGNAL {
        STRONG_MISMATCH_PENALTY
    } else if weaker >= MIN_SIGNAL {
        MODERATE_MISMATCH_PENALTY
    } else {
        1.0
    }
}
