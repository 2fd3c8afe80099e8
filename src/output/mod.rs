//! Report rendering for analysis records

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
