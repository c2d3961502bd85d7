//! CLI command handlers

pub mod commands;

pub use commands::{compare, expand_globs, validate_file_lists, OutputFormat};
