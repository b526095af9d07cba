//! README scanning.
//!
//! Description extraction is best-effort: read and decode failures degrade to
//! an absent description instead of an error.

pub mod readme;

pub use readme::{MAX_DESCRIPTION_CHARS, extract_description, is_readme_name, read_description};
