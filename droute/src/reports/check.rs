//! Check command report data structures.

use droute_codegen::Diagnostic;
use droute_manifest::SourceRef;
use serde::Serialize;

use super::output::{Output, Report, render_diagnostics};

/// Report data from route validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Resolved module name.
    pub module: String,
    /// Route table entries in canonical order.
    pub routes: Vec<RouteRow>,
    /// Diagnostics from building the route table.
    pub diagnostics: Vec<Diagnostic>,
}

/// One entry of the route table.
#[derive(Debug, Serialize)]
pub struct RouteRow {
    pub path: String,
    pub implementing_type: String,
    pub source: SourceRef,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ module '{}' is valid", self.module));
        out.newline();
        out.section(&format!("Routes ({})", self.routes.len()));
        for route in &self.routes {
            out.list_item(&format!("{} -> {}", route.path, route.implementing_type));
        }
    }
}
