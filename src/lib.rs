//! Package Indexer - Summarize the packages of a monorepo
//!
//! This library inspects the immediate subdirectories of a packages directory and
//! produces an index of them. It supports:
//!
//! - Detecting build-system markers (`CMakeLists.txt`, `*.rockspec`)
//! - Extracting a one-line description from each package's README
//! - Rendering a categorized, alphabetical text report
//! - Saving the full index as pretty-printed JSON
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use package_indexer::{build_report, save_index};
//!
//! let report = build_report(Path::new("packages"))?;
//! save_index(Path::new("package-index.json"), &report)?;
//! println!("Indexed {} packages", report.total_count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::IndexerConfig;
pub use index_storage::{load_index, save_index};
pub use indexer::{build_report, inspect_package};
pub use models::{IndexReport, PackageInfo};
pub use output::format_text_report;
pub use parsers::extract_description;
