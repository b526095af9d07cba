use std::path::PathBuf;

/// Input directory scanned when no root is given
pub const DEFAULT_ROOT_DIR: &str = "packages";

/// Index file written to the current directory when no output is given
pub const DEFAULT_OUTPUT_FILE: &str = "package-index.json";

pub const DEFAULT_TITLE: &str = "Torch Monorepo Package Index";

/// Settings for one indexing run
///
/// Relative paths resolve against the working directory of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    pub root_dir: PathBuf,
    pub output_file: PathBuf,
    pub title: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
