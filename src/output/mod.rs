pub mod text;

pub use text::{NO_BUILD_SYSTEM, NO_DESCRIPTION, format_text_report};
