//! CV analyzer: explainable ATS scoring for resumes

use clap::Parser;
use cv_analyzer::cli::{self, Cli, Commands, ConfigAction};
use cv_analyzer::config::{Config, OutputFormat};
use cv_analyzer::error::{CvAnalyzerError, Result};
use cv_analyzer::input::InputManager;
use cv_analyzer::output::formatter::ReportGenerator;
use cv_analyzer::processing::analyzer::{AnalysisEngine, AnalysisInput};
use cv_analyzer::processing::optimizer::OptimizeOptions;
use cv_analyzer::record::CvRecord;
use log::{error, info, warn};
use std::path::Path;
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job_target,
            job_description,
            keywords,
            optimize,
            emphasize,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, INPUT_EXTENSIONS)
                .map_err(|e| CvAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(path) = &job_description {
                cli::validate_file_extension(path, INPUT_EXTENSIONS).map_err(|e| {
                    CvAnalyzerError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }
            let output_format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = match &job_description {
                Some(path) => Some(input_manager.extract_text(path).await?),
                None => None,
            };

            let custom_keywords = merged(&config.analysis.custom_keywords, keywords);
            let mut input = AnalysisInput::new(resume_text).with_custom_keywords(custom_keywords.clone());
            if let Some(target) = job_target {
                input = input.with_job_target(target);
            }
            if let Some(text) = job_text {
                input = input.with_job_description(text);
            }

            info!("Analyzing {}", resume.display());
            let engine = AnalysisEngine::new();
            let analysis = engine.analyze(&input);

            let mut record = open_record(&resume, save.as_deref())?;
            let loaded_version = record.version;
            let version = record.apply_analysis(loaded_version, analysis.clone())?;

            if optimize {
                let options = OptimizeOptions {
                    emphasize_sections: merged(&config.analysis.emphasize_sections, emphasize),
                    custom_keywords,
                };
                let optimization = engine.optimize(&analysis.stats, &analysis.report, &options);
                record.apply_optimization(version, optimization)?;
            }

            if let Some(path) = &save {
                record.save(path, loaded_version)?;
                info!("Record saved to {}", path.display());
            }

            print_record(&record, &output_format, &config, detailed)
        }

        Commands::Optimize {
            record: record_path,
            emphasize,
            keywords,
            output,
        } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let mut record = CvRecord::load(&record_path)?;
            let loaded_version = record.version;

            let (stats, report) = record.analysis().ok_or_else(|| {
                CvAnalyzerError::InvalidInput(format!(
                    "Record {} holds no analysis; run analyze first",
                    record_path.display()
                ))
            })?;

            let options = OptimizeOptions {
                emphasize_sections: merged(&config.analysis.emphasize_sections, emphasize),
                custom_keywords: merged(&config.analysis.custom_keywords, keywords),
            };
            let optimization = AnalysisEngine::new().optimize(stats, report, &options);

            record.apply_optimization(loaded_version, optimization)?;
            record.save(&record_path, loaded_version)?;
            info!("Record {} updated to version {}", record.document_id, record.version);

            print_record(&record, &output_format, &config, false)
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    CvAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("# {}", config_path.display());
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(CvAnalyzerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Config defaults first, then command-line values
fn merged(defaults: &[String], extra: Vec<String>) -> Vec<String> {
    defaults.iter().cloned().chain(extra).collect()
}

/// Reuse the saved record when re-analyzing, otherwise start a fresh one
fn open_record(resume: &Path, save: Option<&Path>) -> Result<CvRecord> {
    let document_id = resume
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());

    match save {
        Some(path) if path.exists() => {
            let record = CvRecord::load(path)?;
            if record.document_id != document_id {
                warn!(
                    "Overwriting record for {} with analysis of {}",
                    record.document_id, document_id
                );
            }
            Ok(record)
        }
        _ => Ok(CvRecord::new(document_id)),
    }
}

fn print_record(record: &CvRecord, format: &OutputFormat, config: &Config, detailed: bool) -> Result<()> {
    let generator = ReportGenerator::with_options(
        config.output.color_output,
        detailed || config.output.detailed,
        true,
        true,
    );
    let rendered = generator.generate_report(record, format)?;
    println!("{}", rendered);
    Ok(())
}
