//! Output formatters for analysis records

use crate::config::OutputFormat;
use crate::error::{CvAnalyzerError, Result};
use crate::processing::analyzer::CvStats;
use crate::processing::optimizer::OptimizationResult;
use crate::processing::scoring::AtsReport;
use crate::record::CvRecord;
use colored::{Color, Colorize};

/// Trait for formatting analysis records
pub trait OutputFormatter {
    fn format_record(&self, record: &CvRecord) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn analysis_of(record: &CvRecord) -> Result<(&CvStats, &AtsReport)> {
    record.analysis().ok_or_else(|| {
        CvAnalyzerError::OutputFormatting(format!(
            "Document {} has no analysis to render",
            record.document_id
        ))
    })
}

fn score_label(score: u32) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "#",
            2 => "=",
            _ => "-",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let label = score_label(score);
        let color = match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_list(&self, output: &mut String, items: &[String], marker: &str) {
        for item in items {
            output.push_str(&format!("  {} {}\n", marker, item));
        }
    }

    fn format_stats(&self, output: &mut String, stats: &CvStats) {
        output.push_str(&self.format_header("Document statistics", 2));
        output.push_str(&format!(
            "  Words: {} | Sentences: {} | Experience: {} year(s)\n",
            stats.word_count, stats.sentence_count, stats.experience_years
        ));

        let contact = &stats.contact;
        let fields = [
            ("Name", &contact.name),
            ("Email", &contact.email),
            ("Phone", &contact.phone),
            ("Location", &contact.location),
            ("LinkedIn", &contact.linkedin),
            ("Website", &contact.website),
        ];
        for (label, value) in fields {
            let shown = match value {
                Some(v) => v.clone(),
                None => self.colorize("not found", Color::BrightBlack),
            };
            output.push_str(&format!("  {:<9} {}\n", format!("{}:", label), shown));
        }

        output.push_str(&self.format_header("Section coverage", 3));
        for entry in &stats.section_coverage {
            let mark = if entry.present {
                self.colorize("[x]", Color::Green)
            } else {
                self.colorize("[ ]", Color::Red)
            };
            output.push_str(&format!(
                "  {} {:<15} weight {:.2}\n",
                mark, entry.section, entry.weight
            ));
        }
    }

    fn format_optimization(&self, output: &mut String, optimization: &OptimizationResult) {
        output.push_str(&self.format_header(
            &format!("Optimization (projected score {})", optimization.raised_score),
            2,
        ));

        let groups = [
            ("Summary", &optimization.summary_suggestions),
            ("Bullets", &optimization.bullet_suggestions),
            ("Keywords", &optimization.keyword_recommendations),
            ("Formatting", &optimization.formatting_tips),
        ];
        for (title, items) in groups {
            if items.is_empty() {
                continue;
            }
            output.push_str(&self.format_header(title, 3));
            self.format_list(output, items, "-");
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &CvRecord) -> Result<String> {
        let (stats, report) = analysis_of(record)?;
        let mut output = String::new();

        output.push_str(&self.format_header("CV ANALYSIS", 1));
        output.push_str(&format!(
            "Document: {} | Evaluated: {}\n",
            record.document_id,
            report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&format!(
            "\nATS score: {} {}\n",
            self.colorize(&report.score.to_string(), Color::Cyan),
            self.format_score_badge(report.score)
        ));
        output.push_str(&format!("Readability: {:.1}\n", report.readability));

        let breakdown = &report.breakdown;
        output.push_str(&format!(
            "  base {:.0} + keywords {:.1} + sections {:.1} + readability {:.0} + contact {:.0}\n",
            breakdown.base, breakdown.keyword, breakdown.section, breakdown.readability, breakdown.contact
        ));

        if !report.keywords_matched.is_empty() {
            output.push_str(&self.format_header("Matched keywords", 2));
            output.push_str(&format!("  {}\n", report.keywords_matched.join(", ")));
        }

        if !report.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing keywords", 2));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&report.missing_keywords.join(", "), Color::Yellow)
            ));
        }

        if !report.recommended_actions.is_empty() {
            output.push_str(&self.format_header("Recommended actions", 2));
            self.format_list(&mut output, &report.recommended_actions, "*");
        }

        if !report.section_recommendations.is_empty() {
            output.push_str(&self.format_header("Sections", 2));
            self.format_list(&mut output, &report.section_recommendations, "*");
        }

        if self.detailed {
            self.format_stats(&mut output, stats);
        }

        if let Some(optimization) = &record.optimization {
            self.format_optimization(&mut output, optimization);
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &CvRecord) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(record)?)
        } else {
            Ok(serde_json::to_string(record)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_record(&self, record: &CvRecord) -> Result<String> {
        let (stats, report) = analysis_of(record)?;
        let mut output = String::new();

        output.push_str("# CV Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Document:** `{}` | **Evaluated:** {} | **Version:** {}\n\n",
                record.document_id,
                report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                record.version
            ));
        }

        output.push_str("## Score\n\n");
        output.push_str(&format!(
            "**ATS score:** {} ({})\n\n",
            report.score,
            score_label(report.score)
        ));

        let breakdown = &report.breakdown;
        output.push_str("| Component | Points |\n");
        output.push_str("|-----------|--------|\n");
        output.push_str(&format!("| Base | {:.0} |\n", breakdown.base));
        output.push_str(&format!("| Keywords | {:.1} |\n", breakdown.keyword));
        output.push_str(&format!("| Sections | {:.1} |\n", breakdown.section));
        output.push_str(&format!(
            "| Readability ({:.1}) | {:.0} |\n",
            report.readability, breakdown.readability
        ));
        output.push_str(&format!("| Contact | {:.0} |\n\n", breakdown.contact));

        output.push_str("## Sections\n\n");
        output.push_str("| Section | Present | Weight |\n");
        output.push_str("|---------|---------|--------|\n");
        for entry in &stats.section_coverage {
            output.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                entry.section,
                if entry.present { "yes" } else { "no" },
                entry.weight
            ));
        }
        output.push('\n');

        output.push_str("## Findings\n\n");
        Self::push_list(&mut output, "Matched keywords", &report.keywords_matched);
        Self::push_list(&mut output, "Missing keywords", &report.missing_keywords);
        Self::push_list(&mut output, "Recommended actions", &report.recommended_actions);
        Self::push_list(&mut output, "Section recommendations", &report.section_recommendations);

        if let Some(optimization) = &record.optimization {
            output.push_str(&format!(
                "## Optimization\n\n**Projected score:** {}\n\n",
                optimization.raised_score
            ));
            Self::push_list(&mut output, "Summary", &optimization.summary_suggestions);
            Self::push_list(&mut output, "Bullets", &optimization.bullet_suggestions);
            Self::push_list(&mut output, "Keywords", &optimization.keyword_recommendations);
            Self::push_list(&mut output, "Formatting", &optimization.formatting_tips);
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, record: &CvRecord, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_record(record),
            OutputFormat::Json => self.json_formatter.format_record(record),
            OutputFormat::Markdown => self.markdown_formatter.format_record(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::{AnalysisEngine, AnalysisInput};
    use crate::processing::optimizer::OptimizeOptions;

    fn analyzed_record() -> CvRecord {
        let engine = AnalysisEngine::new();
        let analysis = engine.analyze(&AnalysisInput::new(
            "Jane Doe\njane@example.com\nExperience\nLed agile delivery from 2019 to 2022.",
        ));
        let optimization = engine.optimize(&analysis.stats, &analysis.report, &OptimizeOptions::default());

        let mut record = CvRecord::new("jane");
        record.apply_analysis(0, analysis).unwrap();
        record.apply_optimization(1, optimization).unwrap();
        record
    }

    #[test]
    fn test_console_plain_output() {
        let record = analyzed_record();
        let output = ConsoleFormatter::new(false, true).format_record(&record).unwrap();

        assert!(output.contains("CV ANALYSIS"));
        assert!(output.contains("Document: jane"));
        assert!(output.contains("agile"));
        assert!(output.contains("jane@example.com"));
        assert!(output.contains("Optimization (projected score"));
    }

    #[test]
    fn test_json_round_trips() {
        let record = analyzed_record();
        let json = JsonFormatter::new(false).format_record(&record).unwrap();
        let parsed: CvRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        assert!(json.contains("\"missingKeywords\""));
        assert!(json.contains("\"evaluatedAt\""));
    }

    #[test]
    fn test_markdown_sections() {
        let record = analyzed_record();
        let output = MarkdownFormatter::new(true).format_record(&record).unwrap();

        assert!(output.starts_with("# CV Analysis Report"));
        assert!(output.contains("| Experience | yes | 0.30 |"));
        assert!(output.contains("| Projects | no | 0.09 |"));
        assert!(output.contains("## Optimization"));
    }

    #[test]
    fn test_unanalyzed_record_is_an_error() {
        let record = CvRecord::new("empty");
        let generator = ReportGenerator::with_options(false, false, true, true);

        assert!(generator.generate_report(&record, &OutputFormat::Console).is_err());
        assert!(generator.generate_report(&record, &OutputFormat::Markdown).is_err());
        assert!(generator.generate_report(&record, &OutputFormat::Json).is_ok());
    }
}
