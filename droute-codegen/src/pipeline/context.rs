//! Result of one pipeline run.

use droute_manifest::{ActionDeclaration, Error, ModuleName, Result};

use super::diagnostic::Diagnostic;
use crate::RouteTable;

/// What to do with generated code when error diagnostics were reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Emit the artifact anyway, invalid entries included.
    #[default]
    Emit,
    /// Fail with [`Error::Validation`] and write nothing.
    Withhold,
}

/// Everything one run produced before code generation.
#[derive(Debug)]
pub struct CompilationContext {
    /// The resolved module name.
    pub module: ModuleName,
    /// Declarations in the order the sources yielded them.
    pub declarations: Vec<ActionDeclaration>,
    /// The route table, canonically ordered by path.
    pub table: RouteTable,
    /// Diagnostics collected while building the table.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Whether generated code may be emitted under the given policy.
    pub fn ensure_emittable(&self, on_error: OnError) -> Result<()> {
        match on_error {
            OnError::Withhold if self.has_errors() => Err(Box::new(Error::Validation {
                count: self.error_count(),
            })),
            _ => Ok(()),
        }
    }
}
