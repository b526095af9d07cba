use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::truncate_chars;

const README_PREFIX: &str = "readme";

/// A description line must be strictly longer than this many characters
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Descriptions are cut to this many characters
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Whether a directory entry name looks like a README (case-insensitive prefix match)
pub fn is_readme_name(name: &str) -> bool {
    name.to_lowercase().starts_with(README_PREFIX)
}

/// Pick the first line usable as a one-line package description
///
/// A line qualifies when, after trimming, it is non-empty, is not a markdown
/// heading (`#`), and is longer than 10 characters. `\n`, `\r\n` and bare `\r`
/// all end a line.
///
/// # Examples
///
/// ```
/// use package_indexer::parsers::extract_description;
///
/// let readme = "# Title\n\nThis is a short library.\n";
/// assert_eq!(extract_description(readme).as_deref(), Some("This is a short library."));
/// assert_eq!(extract_description("# Title\nshort\n"), None);
/// ```
pub fn extract_description(content: &str) -> Option<String> {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && line.chars().count() > MIN_DESCRIPTION_CHARS
        })
        .map(|line| truncate_chars(line, MAX_DESCRIPTION_CHARS).to_string())
}

/// Decode UTF-8, dropping invalid byte sequences instead of replacing them
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Read a README, skipping any bytes that are not valid UTF-8
fn read_readme(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read README: {}", path.display()))?;
    Ok(decode_ignoring_invalid(&bytes))
}

/// Best-effort description for a README file
///
/// Any failure to open or read the file yields `None`; errors never escape.
pub fn read_description(path: &Path) -> Option<String> {
    read_readme(path).ok().as_deref().and_then(extract_description)
}
