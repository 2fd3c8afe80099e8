//! Explainable ATS compatibility score
//!
//! The score is a fixed base plus four weighted parts:
//!
//! | part        | points                                                |
//! |-------------|-------------------------------------------------------|
//! | keywords    | matched weight / total weight x 60                    |
//! | sections    | present weight / total weight x 25                    |
//! | readability | 10 at >= 60, 7 at >= 45, else 4                       |
//! | contact     | 2 per email/phone/linkedin/location, at most 12       |
//!
//! `round(35 + parts)` is clamped to [30, 100]. The lowest reachable raw
//! value is 39, so the bottom of that range is never produced; the bounds
//! are kept so scores stay comparable with stored reports.

use crate::processing::analyzer::CvStats;
use crate::processing::document::{is_present, Section};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: f64 = 35.0;
pub const KEYWORD_POINTS: f64 = 60.0;
pub const SECTION_POINTS: f64 = 25.0;
pub const MAX_CONTACT_POINTS: u32 = 12;
pub const MIN_SCORE: u32 = 30;
pub const MAX_SCORE: u32 = 100;

/// Missing keywords reported per analysis
pub const MISSING_KEYWORD_LIMIT: usize = 12;

/// Readability below this earns a readability action
const READABILITY_ACTION_THRESHOLD: f64 = 55.0;

/// Fewer scored contact fields than this earns a contact action
const CONTACT_ACTION_THRESHOLD: usize = 3;

const READABILITY_ACTION: &str =
    "Shorten long sentences and prefer plain, active wording to improve readability.";
const CONTACT_ACTION: &str =
    "Complete your contact details with an email, phone number, location and LinkedIn profile.";
const KEYWORD_ACTION: &str =
    "Work the missing keywords naturally into your summary, skills and experience bullets.";
const PROJECTS_ACTION: &str =
    "Add a Projects section that shows relevant work and its measurable outcome.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub score: u32,
    pub keywords_matched: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub section_recommendations: Vec<String>,
    pub readability: f64,
    pub evaluated_at: DateTime<Utc>,
    pub breakdown: ScoreBreakdown,
}

/// Points contributed by each part of the score, before rounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: f64,
    pub keyword: f64,
    pub section: f64,
    pub readability: f64,
    pub contact: f64,
    pub raw: i64,
}

impl ScoreBreakdown {
    pub fn compute(stats: &CvStats) -> Self {
        let keyword = keyword_points(stats);
        let section = section_points(stats);
        let readability = readability_points(stats.readability);
        let contact = contact_points(stats) as f64;
        let raw = (BASE_SCORE + keyword + section + readability + contact).round() as i64;

        Self {
            base: BASE_SCORE,
            keyword,
            section,
            readability,
            contact,
            raw,
        }
    }

    pub fn clamped(&self) -> u32 {
        self.raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u32
    }
}

/// Score one set of stats. Pure apart from the supplied timestamp.
pub fn score(stats: &CvStats, evaluated_at: DateTime<Utc>) -> AtsReport {
    let breakdown = ScoreBreakdown::compute(stats);

    let keywords_matched: Vec<String> = stats
        .keyword_matches
        .iter()
        .filter(|m| m.found)
        .map(|m| m.keyword.clone())
        .collect();

    let missing_keywords: Vec<String> = stats
        .keyword_matches
        .iter()
        .filter(|m| !m.found)
        .take(MISSING_KEYWORD_LIMIT)
        .map(|m| m.keyword.clone())
        .collect();

    let recommended_actions = recommended_actions(stats, &missing_keywords);

    let section_recommendations = stats
        .section_coverage
        .iter()
        .filter(|entry| !entry.present)
        .map(|entry| section_recommendation(entry.section).to_string())
        .collect();

    AtsReport {
        score: breakdown.clamped(),
        keywords_matched,
        missing_keywords,
        recommended_actions,
        section_recommendations,
        readability: stats.readability,
        evaluated_at,
        breakdown,
    }
}

fn keyword_points(stats: &CvStats) -> f64 {
    let total: u32 = stats.keyword_matches.iter().map(|m| m.weight).sum();
    let matched: u32 = stats
        .keyword_matches
        .iter()
        .filter(|m| m.found)
        .map(|m| m.weight)
        .sum();

    let denominator = if total == 0 { 1 } else { total };
    matched as f64 / denominator as f64 * KEYWORD_POINTS
}

fn section_points(stats: &CvStats) -> f64 {
    let total: f64 = stats.section_coverage.iter().map(|s| s.weight).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let present: f64 = stats
        .section_coverage
        .iter()
        .filter(|s| s.present)
        .map(|s| s.weight)
        .sum();

    present / total * SECTION_POINTS
}

fn readability_points(readability: f64) -> f64 {
    if readability >= 60.0 {
        10.0
    } else if readability >= 45.0 {
        7.0
    } else {
        4.0
    }
}

fn contact_points(stats: &CvStats) -> u32 {
    (2 * stats.contact.scored_field_count() as u32).min(MAX_CONTACT_POINTS)
}

/// Up to four fixed tips, in a fixed order
fn recommended_actions(stats: &CvStats, missing_keywords: &[String]) -> Vec<String> {
    let mut actions = Vec::new();

    if stats.readability < READABILITY_ACTION_THRESHOLD {
        actions.push(READABILITY_ACTION.to_string());
    }

    if stats.contact.scored_field_count() < CONTACT_ACTION_THRESHOLD {
        actions.push(CONTACT_ACTION.to_string());
    }

    if !missing_keywords.is_empty() {
        actions.push(KEYWORD_ACTION.to_string());
    }

    if !is_present(&stats.section_coverage, Section::Projects) {
        actions.push(PROJECTS_ACTION.to_string());
    }

    actions
}

fn section_recommendation(section: Section) -> &'static str {
    match section {
        Section::Summary => "Add a Summary section with a two to three sentence overview of your profile.",
        Section::Experience => "Add an Experience section listing roles, employers and dates.",
        Section::Education => "Add an Education section with degrees, institutions and graduation years.",
        Section::Skills => "Add a Skills section listing the tools and competencies you use.",
        Section::Projects => "Add a Projects section highlighting relevant work and its impact.",
        Section::Certifications => "Add a Certifications section for licenses and credentials.",
    }
}
