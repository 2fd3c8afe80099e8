//! ATS (Applicant Tracking System) keyword matching

use log::warn;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Keywords at least this long count as specific
const LONG_KEYWORD_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
    pub weight: u32,
}

/// Multi-word or long keywords weigh 2, generic single words weigh 1
pub fn keyword_weight(keyword: &str) -> u32 {
    if keyword.contains(' ') || keyword.chars().count() >= LONG_KEYWORD_CHARS {
        2
    } else {
        1
    }
}

/// Case-insensitive `\b<keyword>\b` pattern with the keyword escaped.
///
/// Boundaries apply on both sides even when the keyword starts or ends with
/// punctuation: `C++` only matches when a word character follows it.
pub fn keyword_pattern(keyword: &str) -> std::result::Result<Regex, regex::Error> {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Test every catalogue entry against the text, preserving catalogue order
pub fn match_keywords(text: &str, keywords: &[String]) -> Vec<KeywordMatch> {
    keywords
        .iter()
        .map(|keyword| KeywordMatch {
            keyword: keyword.clone(),
            found: contains_keyword(text, keyword),
            weight: keyword_weight(keyword),
        })
        .collect()
}

/// Whether `text` mentions `keyword`. A pattern that cannot be built counts
/// as not found.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    match keyword_pattern(keyword) {
        Ok(pattern) => pattern.is_match(text),
        Err(e) => {
            warn!("Skipping keyword '{}': {}", keyword, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_weights() {
        assert_eq!(keyword_weight("rust"), 1);
        assert_eq!(keyword_weight("project management"), 2);
        assert_eq!(keyword_weight("kubernetesio"), 2);
        assert_eq!(keyword_weight("kubernetes"), 1);
    }

    #[test]
    fn test_exact_matching() {
        let text = "I have experience with Python, JavaScript, and React development.";
        let matches = match_keywords(text, &keywords(&["python", "JAVASCRIPT", "java", "react"]));

        let found: Vec<bool> = matches.iter().map(|m| m.found).collect();
        assert_eq!(found, vec![true, true, false, true]);
        assert_eq!(matches[1].keyword, "JAVASCRIPT");
    }

    #[test]
    fn test_word_boundaries() {
        assert!(!contains_keyword("Scrumptious lunch", "scrum"));
        assert!(contains_keyword("Agile/Scrum teams", "scrum"));
        assert!(contains_keyword("Led cross-functional squads", "cross-functional"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(!contains_keyword("abbbc", "a.b+c*"));
        assert!(!contains_keyword("anything at all", "(unclosed[group"));
        assert!(keyword_pattern("(unclosed[group").is_ok());
    }

    #[test]
    fn test_boundaries_around_punctuation() {
        // no word character after the trailing `+`, `*` or before the `.`
        assert!(!contains_keyword("Fluent in C++ and C#", "C++"));
        assert!(!contains_keyword("Built .NET services", ".NET"));
        assert!(!contains_keyword("weird a.b+c* token", "a.b+c*"));

        assert!(contains_keyword("Modern C++17 codebase", "C++"));
        assert!(contains_keyword("ASP.NET Core APIs", ".NET"));
        assert!(contains_keyword("a.b+c*d", "a.b+c*"));
    }

    #[test]
    fn test_empty_text() {
        let matches = match_keywords("", &keywords(&["leadership", "a.b+c*"]));

        assert!(matches.iter().all(|m| !m.found));
    }
}
