//! Rule requiring every path to start with the module name.

use droute_manifest::ActionDeclaration;

use super::{Rule, RuleContext};
use crate::pipeline::{Diagnostic, DiagnosticCode};

/// Errors on paths that do not begin with the module name.
///
/// The comparison is an exact, case-sensitive string prefix.
pub struct PathPrefixRule;

impl Rule for PathPrefixRule {
    fn name(&self) -> &'static str {
        "path-prefix"
    }

    fn description(&self) -> &'static str {
        "Require action paths to begin with the module name"
    }

    fn check(
        &self,
        decl: &ActionDeclaration,
        cx: RuleContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if decl.path().starts_with(cx.module.as_str()) {
            return;
        }
        diagnostics.push(
            Diagnostic::error(
                DiagnosticCode::PrefixMismatch,
                format!(
                    "path '{}' of action '{}' must begin with '{}/'",
                    decl.path(),
                    decl.implementing_type(),
                    cx.module
                ),
            )
            .at(decl.source().clone()),
        );
    }
}
