//! Index file persistence: pretty JSON with atomic writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::IndexReport;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp: OsString = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// Serialize the report as two-space indented JSON
pub fn to_json(report: &IndexReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize package index")
}

/// Save the index atomically (temp file + rename)
pub fn save_index(path: &Path, report: &IndexReport) -> Result<()> {
    let json = to_json(report)?;

    let temp = temp_path_for(path);
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to rename index temp file to {}", path.display()))?;

    tracing::debug!(path = %path.display(), packages = report.total_count, "Saved package index");
    Ok(())
}

/// Load a previously saved index
pub fn load_index(path: &Path) -> Result<IndexReport> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index file: {}", path.display()))
}
