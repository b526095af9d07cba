//! Data models for the package index.
//!
//! - [`PackageInfo`] - Presence flags and description for one package directory
//! - [`IndexReport`] - Sorted packages plus derived counts, serialized to the index file
//!
//! Both are built fresh each run and never mutated afterwards.

pub mod package;
pub mod report;

pub use package::{CMAKE_LABEL, LUAROCKS_LABEL, PackageInfo};
pub use report::IndexReport;
