use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::PackageInfo;
use crate::parsers::{is_readme_name, read_description};

const CMAKE_MARKER: &str = "CMakeLists.txt";
const ROCKSPEC_SUFFIX: &str = ".rockspec";

/// List the direct entries of a directory by name, sorted
fn list_entry_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read package directory: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names)
}

/// Inspect one package directory
///
/// The directory is listed exactly once; build markers and the README candidate
/// all come from that listing. The README candidate is the first name (in sorted
/// order) starting with `readme`, case-insensitively.
///
/// # Errors
///
/// Returns an error only if the package directory itself cannot be listed.
/// README read failures are absorbed and leave `description` as `None`.
pub fn inspect_package(dir: &Path) -> Result<PackageInfo> {
    let names = list_entry_names(dir)?;

    // The name must resolve: a dangling symlink is not a build file
    let has_cmake =
        names.iter().any(|n| n == CMAKE_MARKER) && dir.join(CMAKE_MARKER).exists();
    let has_rockspec = names.iter().any(|n| n.ends_with(ROCKSPEC_SUFFIX));
    let readme = names.iter().find(|n| is_readme_name(n));

    let description = readme.and_then(|r| read_description(&dir.join(r)));

    let name = match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => dir.to_string_lossy().into_owned(),
    };

    tracing::debug!(
        package = %name,
        has_cmake,
        has_rockspec,
        readme = readme.map(String::as_str),
        "Inspected package"
    );

    Ok(PackageInfo {
        name,
        path: dir.to_string_lossy().into_owned(),
        has_cmake,
        has_rockspec,
        has_readme: readme.is_some(),
        description,
    })
}
