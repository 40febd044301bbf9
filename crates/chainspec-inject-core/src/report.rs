//! Persistence for injection reports.
//!
//! Saves an [`InjectionReport`] as pretty-printed JSON when the CLI is asked
//! for one, and loads it back for tooling that wants to inspect a past run.

use std::path::Path;

use crate::error::{InjectError, Result};
use crate::inject::InjectionReport;

/// Save an injection report as pretty JSON at `path`.
pub fn save(report: &InjectionReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| InjectError::ReportSerialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| InjectError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Load an injection report from `path`.
pub fn load(path: &Path) -> Result<InjectionReport> {
    let contents = std::fs::read_to_string(path).map_err(|e| InjectError::InputNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    let report: InjectionReport =
        serde_json::from_str(&contents).map_err(|e| InjectError::ReportSerialize {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(report)
}
