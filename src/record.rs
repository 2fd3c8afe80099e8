//! Persisted document record
//!
//! A record owns at most one current stats/report/optimization triple for a
//! document. Each part is replaced wholesale, never merged. Every update and
//! every save is guarded by an optimistic version check: a writer passes the
//! version it loaded, and the save is refused if the file on disk has moved
//! on since, so one of two concurrent re-analyses fails instead of silently
//! dropping the other.

use crate::error::{CvAnalyzerError, Result};
use crate::processing::analyzer::{Analysis, CvStats};
use crate::processing::optimizer::OptimizationResult;
use crate::processing::scoring::AtsReport;
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvRecord {
    pub document_id: String,
    pub version: u64,
    #[serde(default)]
    pub stats: Option<CvStats>,
    #[serde(default)]
    pub report: Option<AtsReport>,
    #[serde(default)]
    pub optimization: Option<OptimizationResult>,
}

impl CvRecord {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            version: 0,
            stats: None,
            report: None,
            optimization: None,
        }
    }

    /// Replace the stats and report. The previous optimization was planned
    /// from the old report, so it is dropped.
    pub fn apply_analysis(&mut self, expected_version: u64, analysis: Analysis) -> Result<u64> {
        self.check_version(expected_version)?;

        self.stats = Some(analysis.stats);
        self.report = Some(analysis.report);
        self.optimization = None;

        Ok(self.bump())
    }

    /// Replace the optimization. Requires an analysis to optimize from.
    pub fn apply_optimization(
        &mut self,
        expected_version: u64,
        optimization: OptimizationResult,
    ) -> Result<u64> {
        self.check_version(expected_version)?;

        if self.report.is_none() {
            return Err(CvAnalyzerError::InvalidInput(format!(
                "Document {} has not been analyzed yet",
                self.document_id
            )));
        }

        self.optimization = Some(optimization);
        Ok(self.bump())
    }

    /// Current stats and report, if the document was analyzed
    pub fn analysis(&self) -> Option<(&CvStats, &AtsReport)> {
        self.stats.as_ref().zip(self.report.as_ref())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record {}", path.display()))?;
        let record: CvRecord = serde_json::from_str(&content)?;
        debug!(
            "Loaded record {} (version {}) from {}",
            record.document_id,
            record.version,
            path.display()
        );
        Ok(record)
    }

    /// Write the record as JSON, replacing any existing file in one rename.
    ///
    /// `expected_version` is the version this copy was loaded at (0 for a
    /// record that was never saved). The write fails with `VersionConflict`
    /// when the file currently at `path` holds a different version.
    pub fn save(&self, path: &Path, expected_version: u64) -> Result<()> {
        let on_disk = if path.exists() {
            Self::load(path)?.version
        } else {
            0
        };
        if on_disk != expected_version {
            return Err(CvAnalyzerError::VersionConflict {
                expected: expected_version,
                actual: on_disk,
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, content)?;
        std::fs::rename(&staging, path)?;

        debug!(
            "Saved record {} (version {}) to {}",
            self.document_id,
            self.version,
            path.display()
        );
        Ok(())
    }

    fn check_version(&self, expected: u64) -> Result<()> {
        if self.version == expected {
            Ok(())
        } else {
            Err(CvAnalyzerError::VersionConflict {
                expected,
                actual: self.version,
            })
        }
    }

    fn bump(&mut self) -> u64 {
        self.version += 1;
        self.version
    }
}
