//! CV analyzer library: explainable ATS scoring for resumes

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod record;

pub use config::Config;
pub use error::{CvAnalyzerError, Result};
pub use processing::analyzer::{Analysis, AnalysisEngine, AnalysisInput, CvStats};
pub use processing::optimizer::{OptimizationResult, OptimizeOptions};
pub use processing::scoring::AtsReport;
pub use record::CvRecord;
