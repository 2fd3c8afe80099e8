//! Optimization planning: turns a scored analysis into editing suggestions

use crate::processing::analyzer::CvStats;
use crate::processing::document::{is_present, Section};
use crate::processing::scoring::{AtsReport, MAX_SCORE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keyword recommendations produced per optimization
pub const KEYWORD_RECOMMENDATION_LIMIT: usize = 10;

/// Minimum projected gain when suggestions are followed
const MIN_SCORE_GAIN: u32 = 6;

/// Projected gain per missing keyword
const GAIN_PER_MISSING_KEYWORD: f64 = 0.8;

/// Below this many years the bullets get an early-career tip
const EARLY_CAREER_YEARS: u32 = 2;

const BULLET_TIPS: &[&str] = &[
    "Start each bullet with a strong action verb such as Led, Built or Reduced.",
    "Quantify results with numbers, percentages or time saved.",
    "Keep bullets to one or two lines and describe outcomes rather than duties.",
];

const EARLY_CAREER_BULLET_TIP: &str =
    "Lean on internships, coursework and personal projects to show hands-on experience.";

const SUMMARY_TIPS: &[&str] = &[
    "Open with your target role and years of experience.",
    "Name two or three core skills that match the job description.",
    "Close with the value you bring to the team in a single sentence.",
];

const PROJECTS_SUMMARY_TIP: &str =
    "Reference a standout project in your summary and add a dedicated Projects section.";

const FORMATTING_TIPS: &[&str] = &[
    "Use standard section headings such as Summary, Experience, Education and Skills.",
    "Avoid tables, text boxes, images and multi-column layouts that ATS parsers misread.",
    "Use one common font and a consistent date format throughout.",
    "Export as a text-based PDF or DOCX so the content stays selectable.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub summary_suggestions: Vec<String>,
    pub bullet_suggestions: Vec<String>,
    pub keyword_recommendations: Vec<String>,
    pub formatting_tips: Vec<String>,
    pub raised_score: u32,
    pub updated_at: DateTime<Utc>,
}

/// Caller preferences for an optimization pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeOptions {
    #[serde(default)]
    pub emphasize_sections: Vec<String>,
    #[serde(default)]
    pub custom_keywords: Vec<String>,
}

impl OptimizeOptions {
    fn emphasizes(&self, section: Section) -> bool {
        self.emphasize_sections
            .iter()
            .any(|name| Section::from_name(name) == Some(section))
    }
}

/// Build the suggestion set for one report
pub fn plan(
    stats: &CvStats,
    report: &AtsReport,
    options: &OptimizeOptions,
    updated_at: DateTime<Utc>,
) -> OptimizationResult {
    let mut bullet_suggestions = to_strings(BULLET_TIPS);
    if stats.experience_years < EARLY_CAREER_YEARS {
        bullet_suggestions.push(EARLY_CAREER_BULLET_TIP.to_string());
    }

    let mut summary_suggestions = to_strings(SUMMARY_TIPS);
    if options.emphasizes(Section::Projects)
        && !is_present(&stats.section_coverage, Section::Projects)
    {
        summary_suggestions.push(PROJECTS_SUMMARY_TIP.to_string());
    }

    OptimizationResult {
        summary_suggestions,
        bullet_suggestions,
        keyword_recommendations: keyword_recommendations(report, options),
        formatting_tips: to_strings(FORMATTING_TIPS),
        raised_score: raised_score(report.score, report.missing_keywords.len()),
        updated_at,
    }
}

/// Projected score if the suggestions are followed. Not a guarantee.
pub fn raised_score(score: u32, missing_keyword_count: usize) -> u32 {
    let gain = (GAIN_PER_MISSING_KEYWORD * missing_keyword_count as f64).round() as u32;
    score.saturating_add(gain.max(MIN_SCORE_GAIN)).min(MAX_SCORE)
}

fn keyword_recommendations(report: &AtsReport, options: &OptimizeOptions) -> Vec<String> {
    let mut recommendations: Vec<String> = report
        .missing_keywords
        .iter()
        .take(KEYWORD_RECOMMENDATION_LIMIT)
        .map(|keyword| {
            format!(
                "Add \"{}\" to a relevant bullet or your skills list if it reflects your experience.",
                keyword
            )
        })
        .collect();

    // Custom keywords the report already accounts for need no extra line
    let mut covered: HashSet<String> = report
        .keywords_matched
        .iter()
        .chain(report.missing_keywords.iter().take(KEYWORD_RECOMMENDATION_LIMIT))
        .map(|keyword| keyword.to_lowercase())
        .collect();

    for keyword in &options.custom_keywords {
        if recommendations.len() >= KEYWORD_RECOMMENDATION_LIMIT {
            break;
        }
        if keyword.trim().is_empty() || !covered.insert(keyword.to_lowercase()) {
            continue;
        }
        recommendations.push(format!(
            "Highlight \"{}\" where you used it, ideally in a quantified achievement.",
            keyword
        ));
    }

    recommendations
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
