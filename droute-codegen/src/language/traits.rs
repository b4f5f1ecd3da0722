//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use droute_core::GeneratedFile;
use droute_manifest::{Error, Result};
use tracing::info;

/// Trait for language-specific code generators.
///
/// Implement this trait to render the route table as a lookup module in a
/// new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java", "rs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Write a generated file, reporting failures as [`Error::GenerationIo`].
pub fn write_generated(file: &impl GeneratedFile, output_dir: &Path) -> Result<PathBuf> {
    let written = file
        .write(output_dir)
        .map_err(|e| Error::generation_io(file.path(output_dir), e))?;
    info!(path = %written.display(), "wrote generated file");
    Ok(written)
}
