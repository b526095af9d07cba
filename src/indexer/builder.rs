//! Index builder for a packages directory.
//!
//! # Error Handling Strategy
//!
//! - **Root-level errors**: A missing root, or a root that cannot be listed, fails the
//!   whole run before any output is produced.
//! - **Package-level errors**: A package directory that cannot be listed is reported as a
//!   warning on stderr and left out of the index; the remaining packages are still indexed.
//! - **README errors**: Absorbed inside the inspector; the package is indexed without a
//!   description.

use std::path::Path;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::indexer::inspector::inspect_package;
use crate::models::{IndexReport, PackageInfo};

/// Build the package index for every direct subdirectory of `root`
///
/// Subdirectories are visited in file name order and each is inspected with
/// [`inspect_package`]. Non-directory entries are ignored; symlinks to
/// directories count as packages.
///
/// # Errors
///
/// Returns an error if `root` does not exist, is not a directory, or cannot be listed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use package_indexer::build_report;
///
/// let report = build_report(Path::new("packages"))?;
/// println!("Indexed {} packages", report.total_count);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_report(root: &Path) -> Result<IndexReport> {
    let (report, warnings) = build_report_with(root, inspect_package)?;
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(report)
}

/// Walk `root` with the given inspector, returning the report and one warning per
/// skipped entry
pub(crate) fn build_report_with<F>(
    root: &Path,
    mut inspect: F,
) -> Result<(IndexReport, Vec<String>)>
where
    F: FnMut(&Path) -> Result<PackageInfo>,
{
    if !root.is_dir() {
        bail!("packages directory not found: {}", root.display());
    }

    let mut packages = Vec::new();
    let mut warnings = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read packages directory: {}", root.display())
                });
            }
            Err(e) => {
                warnings.push(format!("Skipping unreadable entry in {}: {}", root.display(), e));
                continue;
            }
        };

        // Follows symlinks, unlike entry.file_type()
        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match inspect(entry.path()) {
            Ok(info) => packages.push(info),
            Err(e) => warnings.push(format!("Could not process {}: {:#}", name, e)),
        }
    }

    if !warnings.is_empty() {
        tracing::info!(
            packages = packages.len(),
            skipped = warnings.len(),
            "Indexed packages with some skipped"
        );
    }
    tracing::debug!(root = %root.display(), packages = packages.len(), "Built package index");

    Ok((IndexReport::new(packages), warnings))
}
