//! CLI interface for the CV analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-analyzer")]
#[command(about = "Explainable ATS scoring for resumes")]
#[command(long_about = "Score a resume against an ATS keyword catalogue, explain the score, and plan improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume and print its ATS report
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job title, added to the keyword catalogue
        #[arg(short = 't', long)]
        job_target: Option<String>,

        /// Path to a job description file (TXT, MD) to mine for keywords
        #[arg(short, long)]
        job_description: Option<PathBuf>,

        /// Extra keyword to look for (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Also plan improvements for the analyzed resume
        #[arg(long)]
        optimize: bool,

        /// Section to emphasize in the improvement plan (repeatable)
        #[arg(short, long = "emphasize")]
        emphasize: Vec<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the document record as JSON
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include document statistics in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Plan improvements for a previously saved record
    Optimize {
        /// Path to a record saved with `analyze --save`
        #[arg(short, long)]
        record: PathBuf,

        /// Section to emphasize (repeatable)
        #[arg(short, long = "emphasize")]
        emphasize: Vec<String>,

        /// Extra keyword to recommend (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.TXT"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["txt"]).is_err());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "cv-analyzer",
            "analyze",
            "--resume",
            "cv.md",
            "--keyword",
            "Rust",
            "--keyword",
            "C++",
            "--emphasize",
            "Projects",
            "--optimize",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                resume,
                keywords,
                emphasize,
                optimize,
                output,
                ..
            } => {
                assert_eq!(resume, PathBuf::from("cv.md"));
                assert_eq!(keywords, vec!["Rust", "C++"]);
                assert_eq!(emphasize, vec!["Projects"]);
                assert!(optimize);
                assert!(output.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cv-analyzer", "config", "path", "--verbose"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::Path)
            }
        ));
    }
}
