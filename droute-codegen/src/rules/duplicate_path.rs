//! Rule for duplicate path detection.

use droute_manifest::ActionDeclaration;

use super::{Rule, RuleContext};
use crate::pipeline::{Diagnostic, DiagnosticCode};

/// Errors when a path is already present in the table.
///
/// Keyed on the full path, so two actions of the same module with different
/// paths never conflict. Each repeated insert is reported once, against the
/// later declaration.
pub struct DuplicatePathRule;

impl Rule for DuplicatePathRule {
    fn name(&self) -> &'static str {
        "duplicate-path"
    }

    fn description(&self) -> &'static str {
        "Detect actions registered under the same path"
    }

    fn check(
        &self,
        decl: &ActionDeclaration,
        cx: RuleContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(existing) = cx.table.get(decl.path()) else {
            return;
        };
        diagnostics.push(
            Diagnostic::error(
                DiagnosticCode::DuplicatePath,
                format!(
                    "duplicate action path '{}': '{}' replaces '{}' (declared at {})",
                    decl.path(),
                    decl.implementing_type(),
                    existing.implementing_type(),
                    existing.source()
                ),
            )
            .at(decl.source().clone()),
        );
    }
}
