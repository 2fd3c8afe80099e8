//! Contact detail extraction
//!
//! Each field is an independent, best-effort pattern match. Nothing is
//! validated beyond its shape and nothing is guessed when no literal match
//! exists.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum digits for a phone candidate to count
const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl ContactDetails {
    /// How many of the fields an ATS cares about (email, phone, linkedin,
    /// location) were found
    pub fn scored_field_count(&self) -> usize {
        [&self.email, &self.phone, &self.linkedin, &self.location]
            .iter()
            .filter(|field| field.is_some())
            .count()
    }
}

pub struct ContactExtractor {
    name_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    url_regex: Regex,
    location_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let name_regex = Regex::new(r"^[A-Za-z][A-Za-z ,.\-]{3,39}$").expect("Invalid name regex");

        let email_regex = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(
            r"(?:\+?\d{1,3}[ .-]?)?\(?\d{2,4}\)?[ .-]?\d{3,4}[ .-]?\d{3,4}",
        )
        .expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/[^\s,;]+")
            .expect("Invalid LinkedIn regex");

        let url_regex = Regex::new(r"(?i)https?://[^\s,;]+").expect("Invalid URL regex");

        let location_regex = Regex::new(r"\b[A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*, [A-Z]{2}\b")
            .expect("Invalid location regex");

        Self {
            name_regex,
            email_regex,
            phone_regex,
            linkedin_regex,
            url_regex,
            location_regex,
        }
    }

    /// Run every extractor independently over normalized text
    pub fn extract(&self, text: &str) -> ContactDetails {
        ContactDetails {
            name: self.extract_name(text),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            location: self.extract_location(text),
            linkedin: self.extract_linkedin(text),
            website: self.extract_website(text),
        }
    }

    /// Only the first non-empty line is ever considered a name
    pub fn extract_name(&self, text: &str) -> Option<String> {
        let first_line = text.lines().map(str::trim).find(|line| !line.is_empty())?;

        self.name_regex
            .is_match(first_line)
            .then(|| first_line.to_string())
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regex
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .find(|candidate| {
                candidate.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
            })
            .map(str::to_string)
    }

    pub fn extract_linkedin(&self, text: &str) -> Option<String> {
        self.linkedin_regex
            .find(text)
            .map(|m| trim_url(m.as_str()).to_string())
    }

    /// First http(s) URL that is not a LinkedIn profile
    pub fn extract_website(&self, text: &str) -> Option<String> {
        self.url_regex
            .find_iter(text)
            .map(|m| trim_url(m.as_str()))
            .find(|url| !url.to_ascii_lowercase().contains("linkedin.com"))
            .map(str::to_string)
    }

    pub fn extract_location(&self, text: &str) -> Option<String> {
        self.location_regex.find(text).map(|m| m.as_str().to_string())
    }
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches(['.', ')', '!', '?', '\'', '"'])
}
