pub mod commands;

pub use commands::{Cli, generate_index, run};
