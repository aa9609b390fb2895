//! Immutable skill catalog: categories with importance weights, canonical
//! terms, and accepted spelling variants. Loaded once per process and never
//! mutated; every lookup goes through the derived maps below.

use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// One canonical skill plus the spellings that resolve to it.
#[derive(Debug)]
pub struct TermDef {
    pub canonical: &'static str,
    pub variants: &'static [&'static str],
}

/// A named category with a relative importance weight in `[0, 1]`.
#[derive(Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub weight: f64,
    pub terms: &'static [TermDef],
}

macro_rules! term {
    ($canonical:literal, [$($variant:literal),* $(,)?]) => {
        TermDef { canonical: $canonical, variants: &[$($variant),*] }
    };
}

/// Category name for statistically-derived terms absent from the catalog.
pub const GENERAL_CATEGORY: &str = "general";

/// Importance weight applied to uncatalogued (statistical) terms.
pub const GENERAL_WEIGHT: f64 = 0.3;

/// スキルカタログ（起動時に一度構築、以後不変）
pub static CATALOG: &[SkillCategory] = &[
    SkillCategory {
        name: "programming_languages",
        weight: 1.0,
        terms: &[
            term!("javascript", ["js", "java script", "ecmascript", "es6", "es2015"]),
            term!("typescript", ["ts", "type script"]),
            term!("python", ["python3", "python 3", "py"]),
            term!("java", ["java8", "java11", "java17", "openjdk"]),
            term!("csharp", ["c#", "c sharp", "dotnet", ".net"]),
            term!("cplusplus", ["c++", "cpp", "c plus plus"]),
            term!("golang", ["go", "go lang"]),
            term!("rust", ["rust lang", "rust language"]),
            term!("php", ["php7", "php8"]),
            term!("ruby", ["ruby lang"]),
            term!("swift", ["ios swift"]),
            term!("kotlin", ["kotlin jvm"]),
            term!("scala", []),
            term!("sql", ["structured query language"]),
        ],
    },
    SkillCategory {
        name: "frameworks",
        weight: 0.9,
        terms: &[
            term!("react", ["reactjs", "react.js", "react js"]),
            term!("angular", ["angularjs", "angular.js"]),
            term!("vue", ["vuejs", "vue.js", "vue js"]),
            term!("svelte", ["sveltejs", "svelte.js"]),
            term!("nextjs", ["next.js", "next js"]),
            term!("nodejs", ["node.js", "node js", "node"]),
            term!("django", ["django rest framework", "drf"]),
            term!("flask", ["python flask"]),
            term!("fastapi", ["fast api"]),
            term!("spring", ["spring boot", "springboot", "spring framework"]),
            term!("express", ["express.js", "expressjs", "express js"]),
            term!("laravel", ["php laravel"]),
            term!("rails", ["ruby on rails", "ror"]),
            term!("reactnative", ["react native", "react-native"]),
            term!("flutter", ["dart flutter"]),
        ],
    },
    SkillCategory {
        name: "data_ml",
        weight: 0.9,
        terms: &[
            term!("pandas", ["python pandas"]),
            term!("numpy", ["numerical python"]),
            term!("tensorflow", ["tensor flow", "tf"]),
            term!("pytorch", ["py torch", "torch"]),
            term!("scikit-learn", ["sklearn", "scikit learn"]),
            term!("jupyter", ["jupyter notebook", "jupyter notebooks"]),
            term!("spark", ["apache spark", "pyspark"]),
            term!("hadoop", ["apache hadoop"]),
            term!("kafka", ["apache kafka"]),
            term!("machine-learning", ["machine learning", "ml"]),
            term!("deep-learning", ["deep learning", "neural networks"]),
            term!("nlp", ["natural language processing"]),
        ],
    },
    SkillCategory {
        name: "databases",
        weight: 0.8,
        terms: &[
            term!("postgresql", ["postgres", "postgre sql", "psql"]),
            term!("mysql", ["my sql", "mariadb"]),
            term!("mongodb", ["mongo", "mongo db"]),
            term!("redis", ["redis cache"]),
            term!("elasticsearch", ["elastic search"]),
            term!("sqlite", ["sqlite3", "sql lite"]),
            term!("dynamodb", ["dynamo db"]),
            term!("cassandra", ["apache cassandra"]),
            term!("oracle", ["oracle db", "oracle database"]),
        ],
    },
    SkillCategory {
        name: "cloud_devops",
        weight: 0.8,
        terms: &[
            term!("aws", ["amazon web services", "amazon aws", "aws cloud"]),
            term!("gcp", ["google cloud platform", "google cloud"]),
            term!("azure", ["microsoft azure", "ms azure", "azure cloud"]),
            term!("docker", ["docker container", "containerization"]),
            term!("kubernetes", ["k8s", "kube"]),
            term!("terraform", ["infrastructure as code", "iac"]),
            term!("ansible", ["configuration management"]),
            term!("jenkins", ["jenkins ci"]),
            term!("cicd", ["ci cd", "ci-cd", "continuous integration", "continuous delivery"]),
            term!("git", ["github", "gitlab", "version control"]),
            term!("linux", ["unix", "gnu linux"]),
        ],
    },
    SkillCategory {
        name: "apis_architecture",
        weight: 0.7,
        terms: &[
            term!("rest", ["rest api", "restful", "rest apis", "restful api"]),
            term!("graphql", ["graph ql"]),
            term!("grpc", ["g rpc"]),
            term!("microservices", ["micro services", "microservice"]),
            term!("websockets", ["websocket", "web sockets"]),
            term!("oauth", ["oauth2", "open authorization"]),
            term!("soap", ["soap api"]),
        ],
    },
    SkillCategory {
        name: "testing",
        weight: 0.6,
        terms: &[
            term!("jest", ["jest testing"]),
            term!("pytest", ["py test", "python testing"]),
            term!("junit", ["junit testing"]),
            term!("cypress", ["cypress testing"]),
            term!("selenium", ["selenium webdriver"]),
            term!("mocha", ["mochajs"]),
            term!("tdd", ["test driven development", "test-driven development"]),
            term!("unit-testing", ["unit testing", "unit tests"]),
        ],
    },
    SkillCategory {
        name: "soft_skills",
        weight: 0.4,
        terms: &[
            term!("leadership", ["team leadership"]),
            term!("communication", ["communication skills"]),
            term!("teamwork", ["team work", "collaboration"]),
            term!("problem-solving", ["problem solving"]),
            term!("mentoring", ["mentorship", "coaching"]),
        ],
    },
    SkillCategory {
        name: "management_tools",
        weight: 0.4,
        terms: &[
            term!("jira", ["atlassian jira"]),
            term!("confluence", []),
            term!("agile", ["agile methodology", "agile development"]),
            term!("scrum", ["scrum master"]),
            term!("kanban", []),
            term!("trello", []),
        ],
    },
    SkillCategory {
        name: "business_tools",
        weight: 0.3,
        terms: &[
            term!("excel", ["microsoft excel", "ms excel"]),
            term!("powerpoint", ["microsoft powerpoint"]),
            term!("tableau", []),
            term!("powerbi", ["power bi"]),
            term!("salesforce", ["sales force"]),
            term!("sap", []),
        ],
    },
];

/// How a term resolved against the catalog; drives the deterministic
/// per-skill confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Canonical,
    Variant,
    Fuzzy,
}

static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for category in CATALOG {
        for term in category.terms {
            map.insert(term.canonical, term.canonical);
            for variant in term.variants {
                map.insert(*variant, term.canonical);
            }
        }
    }
    map
});

/// Separator-free keys tolerate variants like `node-js` / `nodejs` / `node.js`
/// without listing each spelling.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

static CANONICAL_TO_CATEGORY: LazyLock<HashMap<&'static str, &'static SkillCategory>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        for category in CATALOG {
            for term in category.terms {
                map.insert(term.canonical, category);
            }
        }
        map
    });

/// Longest variant measured in whitespace-separated words; bounds the n-gram
/// window the extractor scans with.
static MAX_ALIAS_WORDS: LazyLock<usize> = LazyLock::new(|| {
    ALIAS_TO_CANONICAL
        .keys()
        .map(|alias| alias.split_whitespace().count())
        .max()
        .unwrap_or(1)
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/'))
        .collect()
}

fn fuzzy_lookup(compact: &str) -> Option<&'static str> {
    // Short tokens (java, go, rust) are exact-match only; fuzzy fallback on
    // them produces far more false positives than it recovers typos.
    if compact.len() < 5 {
        return None;
    }

    // Ties on distance are broken by alias ordering so the result never
    // depends on hash-map iteration order.
    let mut best: Option<(&'static str, usize, &str)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some(*canonical);
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        let better = match best {
            None => true,
            Some((_, best_dist, best_alias)) => {
                distance < best_dist || (distance == best_dist && alias.as_str() < best_alias)
            }
        };
        if better {
            best = Some((*canonical, distance, alias.as_str()));
        }
    }

    best.map(|(canonical, _, _)| canonical)
}

/// Resolve a normalized term against the catalog. Exact canonical spellings
/// rank above variant spellings, which rank above typo-tolerant fuzzy hits.
pub fn lookup(term: &str) -> Option<(&'static str, LookupKind)> {
    let cleaned = nfkc_lower_trim(term);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(cleaned.as_str()) {
        let kind = if *canonical == cleaned {
            LookupKind::Canonical
        } else {
            LookupKind::Variant
        };
        return Some((*canonical, kind));
    }

    let compact = compact_key(&cleaned);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        let kind = if compact_key(canonical) == compact {
            LookupKind::Canonical
        } else {
            LookupKind::Variant
        };
        return Some((*canonical, kind));
    }

    fuzzy_lookup(&compact).map(|canonical| (canonical, LookupKind::Fuzzy))
}

/// Canonical spelling for a term, or `None` when the catalog does not know it.
pub fn canonicalize(term: &str) -> Option<&'static str> {
    lookup(term).map(|(canonical, _)| canonical)
}

/// Category a canonical term belongs to.
pub fn category_of(canonical: &str) -> Option<&'static SkillCategory> {
    CANONICAL_TO_CATEGORY.get(canonical).copied()
}

/// Importance weight for a category name, including the pseudo-category for
/// statistical terms.
pub fn category_weight(category_name: &str) -> f64 {
    if category_name == GENERAL_CATEGORY {
        return GENERAL_WEIGHT;
    }
    CATALOG
        .iter()
        .find(|c| c.name == category_name)
        .map(|c| c.weight)
        .unwrap_or(GENERAL_WEIGHT)
}

/// True when two distinct spellings resolve to the same canonical term.
pub fn same_canonical(a: &str, b: &str) -> bool {
    match (canonicalize(a), canonicalize(b)) {
        (Some(ca), Some(cb)) => ca == cb,
        _ => compact_key(a) == compact_key(b),
    }
}

pub fn max_alias_words() -> usize {
    *MAX_ALIAS_WORDS
}
