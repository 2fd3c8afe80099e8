//! Keyword catalogue construction
//!
//! A catalogue starts from a fixed list of generic professional terms and is
//! extended with job-target tokens, frequent job-description terms and the
//! caller's own keywords. Entries are deduplicated case-insensitively while
//! keeping the first spelling seen.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Number of job-description terms added to a catalogue
pub const JOB_DESCRIPTION_TERM_LIMIT: usize = 25;

/// Generic professional and leadership terms every resume is checked for
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "collaboration",
    "problem solving",
    "project management",
    "stakeholder management",
    "strategic planning",
    "data analysis",
    "mentoring",
    "agile",
    "scrum",
    "budget management",
    "process improvement",
    "cross-functional",
    "customer focus",
    "time management",
    "critical thinking",
    "negotiation",
    "presentation",
    "analytical",
    "innovation",
    "decision making",
    "results-driven",
    "continuous improvement",
    "risk management",
    "change management",
    "attention to detail",
    "adaptability",
    "reporting",
    "training",
];

/// Filler words that carry no signal in a job description
const JOB_DESCRIPTION_STOPWORDS: &[&str] = &[
    "with", "experience", "team", "that", "this", "from", "have", "will", "your", "their",
    "they", "them", "about", "work", "working", "ability", "able", "role", "must", "should",
    "would", "could", "years", "year", "strong", "including", "other", "into", "such", "more",
    "most", "what", "which", "where", "when", "while", "well", "also", "using", "over",
    "within", "across", "through", "required", "requirements", "preferred", "plus", "company",
    "candidate", "candidates", "responsibilities", "knowledge", "environment", "opportunity",
    "join", "looking", "skills", "each", "there", "these", "those", "been", "being", "were",
    "some", "only", "just", "very", "like", "make", "help", "based", "understanding",
];

static ALPHA_TERM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]{4,}").unwrap());

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| JOB_DESCRIPTION_STOPWORDS.iter().copied().collect());

/// Ordered, case-insensitively unique list of keywords to check a resume against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCatalogue {
    keywords: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordCatalogue {
    /// Empty catalogue, without the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue seeded with [`DEFAULT_KEYWORDS`]
    pub fn with_defaults() -> Self {
        let mut catalogue = Self::new();
        catalogue.extend(DEFAULT_KEYWORDS.iter().copied());
        catalogue
    }

    /// Build the full catalogue for one analysis
    pub fn build(
        job_target: Option<&str>,
        job_description: Option<&str>,
        custom_keywords: &[String],
    ) -> Self {
        let mut catalogue = Self::with_defaults();

        if let Some(target) = job_target {
            catalogue.extend(target.split_whitespace());
        }

        if let Some(description) = job_description {
            let terms = job_description_terms(description, JOB_DESCRIPTION_TERM_LIMIT);
            catalogue.extend(terms.iter().map(String::as_str));
        }

        catalogue.extend(custom_keywords.iter().map(String::as_str));
        catalogue
    }

    /// Append a keyword unless a case-insensitive duplicate exists.
    /// Blank entries are ignored.
    pub fn push(&mut self, keyword: &str) -> bool {
        if keyword.trim().is_empty() {
            return false;
        }

        if self.seen.insert(keyword.to_lowercase()) {
            self.keywords.push(keyword.to_string());
            true
        } else {
            false
        }
    }

    pub fn extend<'a>(&mut self, keywords: impl IntoIterator<Item = &'a str>) {
        for keyword in keywords {
            self.push(keyword);
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Most frequent 4+-letter terms of a job description, stopwords removed.
///
/// Sorted by descending count; ties keep first-seen order.
pub fn job_description_terms(description: &str, limit: usize) -> Vec<String> {
    let lowered = description.to_lowercase();

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for term in ALPHA_TERM_REGEX.find_iter(&lowered).map(|m| m.as_str()) {
        if STOPWORDS.contains(term) {
            continue;
        }

        match index.get(term) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(term.to_string(), counts.len());
                counts.push((term.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(term, _)| term)
        .collect()
}
