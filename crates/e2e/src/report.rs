//! Per-case results, suite aggregation and the JSON report.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::HarnessResult;

/// Which collection a case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Positive,
    Negative,
    Ui,
}

impl Group {
    /// Classify a fixture by its id prefix; UI cases carry `_UI_`.
    pub fn from_tc_id(tc_id: &str) -> Group {
        if tc_id.contains("_UI_") {
            Group::Ui
        } else if tc_id.starts_with("Neg_") {
            Group::Negative
        } else {
            Group::Positive
        }
    }
}

/// Outcome of a single fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub tc_id: String,
    /// Display name, `<tc_id> - <name>`.
    pub name: String,
    pub group: Group,
    pub passed: bool,
    pub duration_ms: u64,
    pub expected: String,
    /// Rendered text, when the session got far enough to read it.
    pub actual: Option<String>,
    pub error: Option<String>,
}

/// Aggregated result of a suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<CaseResult>,
}

impl SuiteResult {
    pub fn from_cases(
        started_at: DateTime<Utc>,
        duration_ms: u64,
        results: Vec<CaseResult>,
    ) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            started_at,
            total: results.len(),
            passed,
            failed: results.len() - passed,
            duration_ms,
            results,
        }
    }

    /// Write the pretty-printed JSON report into `output_dir`.
    pub fn write(&self, output_dir: &Path) -> HarnessResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("results written to {}", path.display());
        Ok(path)
    }
}
