//! Structured index file storage
//!
//! The index is written as pretty-printed JSON (`package-index.json` by default)
//! containing every package record with untruncated descriptions plus the
//! derived counts. Writes go through a `.tmp` sibling and a rename.

pub mod persistence;

pub use persistence::{load_index, save_index, to_json};
