//! Package discovery and inspection.
//!
//! [`build_report`] validates the root, walks its direct subdirectories in name order,
//! and hands each to [`inspect_package`]. One bad package produces a warning rather
//! than aborting the run.

pub mod builder;
pub mod inspector;

pub use builder::build_report;
pub use inspector::inspect_package;
