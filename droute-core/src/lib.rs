//! Core utilities and types for the droute route-table generator.
//!
//! This crate provides the output sink for generated files and the string
//! helpers shared by every code generator.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, GeneratedFile, write_file};
// String utilities
pub use utils::{line_col, sanitize_identifier};
