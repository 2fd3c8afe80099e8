//! Lexical metrics: word and sentence counts, readability and a coarse
//! experience estimate.

use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound for the experience estimate in years
pub const MAX_EXPERIENCE_YEARS: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub readability: f64,
    pub experience_years: u32,
}

pub struct MetricsCalculator {
    vowel_group_regex: Regex,
    year_regex: Regex,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCalculator {
    pub fn new() -> Self {
        let vowel_group_regex = Regex::new(r"(?i)[aeiouy]+").expect("Invalid vowel regex");

        let year_regex = Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex");

        Self {
            vowel_group_regex,
            year_regex,
        }
    }

    /// Compute all lexical metrics over already normalized text
    pub fn compute(&self, processor: &TextProcessor, text: &str) -> LexicalMetrics {
        let words = processor.tokenize(text);
        let sentence_count = processor.sentence_count(text);

        LexicalMetrics {
            word_count: words.len(),
            sentence_count,
            readability: self.readability(&words, sentence_count),
            experience_years: self.experience_years(text),
        }
    }

    /// Flesch Reading Ease clamped to [0, 100]. No words reads as 0.
    pub fn readability(&self, words: &[&str], sentence_count: usize) -> f64 {
        if words.is_empty() {
            return 0.0;
        }

        let word_count = words.len() as f64;
        let sentences = sentence_count.max(1) as f64;
        let syllables: usize = words.iter().map(|w| self.count_syllables(w)).sum();

        let score = 206.835
            - 1.015 * (word_count / sentences)
            - 84.6 * (syllables as f64 / word_count);

        score.clamp(0.0, 100.0)
    }

    /// Vowel-group syllable estimate, at least one per word
    pub fn count_syllables(&self, word: &str) -> usize {
        let letters = word.chars().filter(|c| c.is_alphabetic()).count();
        if letters <= 3 {
            return 1;
        }

        self.vowel_group_regex.find_iter(word).count().max(1)
    }

    /// Span between the earliest and latest 19xx/20xx year mentioned.
    ///
    /// None found gives 0, a single mention gives 1, otherwise the inclusive
    /// span clamped to [1, 40]. This is not a career-history parser.
    pub fn experience_years(&self, text: &str) -> u32 {
        let years: Vec<u32> = self
            .year_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        match years.len() {
            0 => 0,
            1 => 1,
            _ => {
                let min = years.iter().copied().min().unwrap_or(0);
                let max = years.iter().copied().max().unwrap_or(0);
                (max - min + 1).clamp(1, MAX_EXPERIENCE_YEARS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_estimates() {
        let calculator = MetricsCalculator::new();

        assert_eq!(calculator.count_syllables("the"), 1);
        assert_eq!(calculator.count_syllables("rhythm"), 1);
        assert_eq!(calculator.count_syllables("engineer"), 3);
        assert_eq!(calculator.count_syllables("led"), 1);
        assert_eq!(calculator.count_syllables("nth"), 1);
        assert_eq!(calculator.count_syllables("BCDFG"), 1);
    }

    #[test]
    fn test_readability_bounds() {
        let calculator = MetricsCalculator::new();

        assert_eq!(calculator.readability(&[], 1), 0.0);

        let simple = ["I", "ran", "to", "the", "car"];
        assert_eq!(calculator.readability(&simple, 1), 100.0);

        let dense = [
            "internationalization",
            "responsibilities",
            "telecommunications",
            "interoperability",
        ];
        assert_eq!(calculator.readability(&dense, 1), 0.0);
    }

    #[test]
    fn test_readability_formula() {
        let calculator = MetricsCalculator::new();
        let words = ["Rust", "makes", "systems", "safer"];

        // 4 words, 1 sentence, syllables: rust=1, makes=2, systems=2, safer=2
        let expected = 206.835 - 1.015 * 4.0 - 84.6 * (7.0 / 4.0);
        let score = calculator.readability(&words, 1);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_experience_years() {
        let calculator = MetricsCalculator::new();

        assert_eq!(calculator.experience_years("no dates at all"), 0);
        assert_eq!(calculator.experience_years("Graduated 2015"), 1);
        assert_eq!(calculator.experience_years("2019 to 2022"), 4);
        assert_eq!(calculator.experience_years("2022 - 2019"), 4);
        assert_eq!(calculator.experience_years("1950 and 2020"), 40);
        assert_eq!(calculator.experience_years("2020, 2020"), 1);
        assert_eq!(calculator.experience_years("Room 1850, ID 20155"), 0);
    }

    #[test]
    fn test_compute_empty_text() {
        let calculator = MetricsCalculator::new();
        let processor = TextProcessor::new();
        let metrics = calculator.compute(&processor, "");

        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.readability, 0.0);
        assert_eq!(metrics.experience_years, 0);
    }
}
