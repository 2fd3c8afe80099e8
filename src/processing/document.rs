//! Canonical resume sections and coverage detection

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    /// Canonical order; coverage reports always follow it
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
    ];

    /// Fixed scoring weight. The six weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Section::Summary => 0.15,
            Section::Experience => 0.30,
            Section::Education => 0.18,
            Section::Skills => 0.18,
            Section::Projects => 0.09,
            Section::Certifications => 0.10,
        }
    }

    /// Heading words that count as this section being present
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Section::Summary => &["summary", "profile", "objective", "about me"],
            Section::Experience => &["experience", "employment", "work history"],
            Section::Education => &["education", "academic background", "qualifications"],
            Section::Skills => &["skills", "competencies", "technical proficiencies"],
            Section::Projects => &["projects", "portfolio"],
            Section::Certifications => &["certifications", "certificates", "licenses"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
        }
    }

    /// Case-insensitive lookup by canonical name
    pub fn from_name(name: &str) -> Option<Section> {
        let name = name.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCoverage {
    pub section: Section,
    pub present: bool,
    pub weight: f64,
}

static SECTION_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    Section::ALL
        .into_iter()
        .map(|section| {
            let pattern = format!(r"(?i)\b(?:{})\b", section.aliases().join("|"));
            (section, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Check every canonical section against the whole text.
///
/// Always returns exactly one entry per section, in canonical order.
pub fn detect_sections(text: &str) -> Vec<SectionCoverage> {
    SECTION_PATTERNS
        .iter()
        .map(|(section, pattern)| SectionCoverage {
            section: *section,
            present: pattern.is_match(text),
            weight: section.weight(),
        })
        .collect()
}

/// Whether `section` is marked present in a coverage list
pub fn is_present(coverage: &[SectionCoverage], section: Section) -> bool {
    coverage
        .iter()
        .any(|entry| entry.section == section && entry.present)
}
