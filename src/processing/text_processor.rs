//! Text normalization and tokenization

use regex::Regex;

/// Normalizes decoded document text and splits it into words and sentences.
///
/// Every method is total: garbled or empty input yields an empty string or
/// empty token list, never an error.
pub struct TextProcessor {
    blank_lines_regex: Regex,
    inline_space_regex: Regex,
    word_regex: Regex,
    sentence_break_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let blank_lines_regex = Regex::new(r"\n{3,}").expect("Invalid blank line regex");

        let inline_space_regex = Regex::new(r"[ \t]{2,}").expect("Invalid inline space regex");

        let word_regex = Regex::new(r"\b[\w'-]+\b").expect("Invalid word regex");

        let sentence_break_regex = Regex::new(r"[.!?]+").expect("Invalid sentence regex");

        Self {
            blank_lines_regex,
            inline_space_regex,
            word_regex,
            sentence_break_regex,
        }
    }

    /// Normalize raw text, keeping it otherwise as ugly as it arrived.
    ///
    /// Line endings become `\n`, anything outside tab/newline/printable ASCII
    /// is dropped, runs of 3+ newlines collapse to a blank line, runs of
    /// spaces/tabs collapse to a single space and the result is trimmed.
    pub fn normalize(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        let printable: String = unified
            .chars()
            .filter(|c| matches!(c, '\t' | '\n' | '\r' | ' '..='~'))
            .collect();

        let collapsed = self.blank_lines_regex.replace_all(&printable, "\n\n");
        let collapsed = self.inline_space_regex.replace_all(&collapsed, " ");

        collapsed.trim().to_string()
    }

    /// Word tokens in document order
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.word_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    pub fn word_count(&self, text: &str) -> usize {
        self.word_regex.find_iter(text).count()
    }

    /// Split text on runs of sentence terminators, dropping empty segments
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentence_break_regex
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Sentence count with a floor of one: unterminated text is still a sentence.
    pub fn sentence_count(&self, text: &str) -> usize {
        self.split_sentences(text).len().max(1)
    }
}
