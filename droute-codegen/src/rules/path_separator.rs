//! Rule for paths that run straight past the module name.

use droute_manifest::ActionDeclaration;

use super::{Rule, RuleContext};
use crate::pipeline::{Diagnostic, DiagnosticCode};

/// Warns when a path starts with the module name but not with `<module>/`.
///
/// `loginAction` in module `login` passes the prefix check, but is most
/// likely a typo for `login/Action`.
pub struct PathSeparatorRule;

impl Rule for PathSeparatorRule {
    fn name(&self) -> &'static str {
        "path-separator"
    }

    fn description(&self) -> &'static str {
        "Warn when the module name is not followed by '/'"
    }

    fn check(
        &self,
        decl: &ActionDeclaration,
        cx: RuleContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(rest) = decl.path().strip_prefix(cx.module.as_str()) else {
            return;
        };
        if rest.starts_with('/') {
            return;
        }
        diagnostics.push(
            Diagnostic::warning(
                DiagnosticCode::MissingSeparator,
                format!(
                    "path '{}' begins with module name '{}' but is not followed by '/'",
                    decl.path(),
                    cx.module
                ),
            )
            .at(decl.source().clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use droute_manifest::ModuleName;

    use super::*;
    use crate::RouteTable;

    fn check(path: &str) -> Vec<Diagnostic> {
        let module = ModuleName::sanitize("login").unwrap();
        let table = RouteTable::new();
        let decl = ActionDeclaration::new(path, "com.x", "Action");

        let mut diagnostics = Vec::new();
        PathSeparatorRule.check(
            &decl,
            RuleContext {
                module: &module,
                table: &table,
            },
            &mut diagnostics,
        );
        diagnostics
    }

    #[test]
    fn test_separator_present() {
        assert!(check("login/LoginAction").is_empty());
    }

    #[test]
    fn test_separator_missing() {
        let diagnostics = check("loginAction");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].code, DiagnosticCode::MissingSeparator);
    }

    #[test]
    fn test_bare_module_name() {
        assert_eq!(check("login").len(), 1);
    }

    #[test]
    fn test_other_prefix_left_to_prefix_rule() {
        assert!(check("shop/CartAction").is_empty());
    }
}
