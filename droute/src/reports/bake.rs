//! Bake command report data structures.

use std::path::PathBuf;

use droute_codegen::{Diagnostic, PreviewFile};
use droute_manifest::Error;

use super::output::{Output, Report, render_diagnostics};

/// Report data from route module generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Resolved module name.
    pub module: String,
    /// Target language identifier.
    pub language: &'static str,
    /// Number of routes in the table.
    pub routes: usize,
    /// Diagnostics from building the route table.
    pub diagnostics: Vec<Diagnostic>,
    /// Generation result.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// Nothing was generated because the table has errors.
    Withheld(Box<Error>),
}

impl BakeReport {
    /// Whether the run should fail the host build.
    pub fn has_errors(&self) -> bool {
        matches!(self.result, GenerationResult::Withheld(_))
            || self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        match &self.result {
            GenerationResult::Written(files) => {
                out.key_value(
                    "Module",
                    &format!("{} ({}, {} routes)", self.module, self.language, self.routes),
                );
                out.section("Generated");
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" }
                ));
            }
            GenerationResult::Withheld(err) => out.error(&err.to_string()),
        }
    }
}
