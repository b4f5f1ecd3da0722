//! Per-declaration validation rules.
//!
//! Each rule looks at one declaration against the module name and the table
//! built so far, and pushes diagnostics. Rules never stop the fold.

mod duplicate_path;
mod path_prefix;
mod path_separator;

pub use duplicate_path::DuplicatePathRule;
use droute_manifest::{ActionDeclaration, ModuleName};
pub use path_prefix::PathPrefixRule;
pub use path_separator::PathSeparatorRule;

use crate::{RouteTable, pipeline::Diagnostic};

/// What a rule sees when checking one declaration.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The resolved module name.
    pub module: &'a ModuleName,
    /// Every entry inserted before this declaration.
    pub table: &'a RouteTable,
}

/// Information about a rule.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// The rule name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A check applied to every declaration before it is inserted.
pub trait Rule: Send + Sync {
    /// The name of this rule.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Check one declaration and add any diagnostics.
    fn check(
        &self,
        decl: &ActionDeclaration,
        cx: RuleContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    );

    /// Get information about this rule.
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// An ordered set of rules.
pub struct RouteRules {
    rules: Vec<Box<dyn Rule>>,
}

impl RouteRules {
    /// The built-in rules: path prefix, path separator, duplicate path.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PathPrefixRule),
                Box::new(PathSeparatorRule),
                Box::new(DuplicatePathRule),
            ],
        }
    }

    /// A rule set that accepts everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Get the names of all rules that will be run.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Get information about all rules that will be run.
    pub fn info(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(|r| r.info()).collect()
    }

    /// Run every rule against one declaration.
    pub fn check(
        &self,
        decl: &ActionDeclaration,
        cx: RuleContext<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for rule in &self.rules {
            rule.check(decl, cx, diagnostics);
        }
    }
}

impl Default for RouteRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticCode;

    struct RejectAll;

    impl Rule for RejectAll {
        fn name(&self) -> &'static str {
            "reject-all"
        }

        fn description(&self) -> &'static str {
            "Rejects every declaration"
        }

        fn check(
            &self,
            decl: &ActionDeclaration,
            _cx: RuleContext<'_>,
            diagnostics: &mut Vec<Diagnostic>,
        ) {
            diagnostics.push(
                Diagnostic::error(DiagnosticCode::PrefixMismatch, "rejected")
                    .at(decl.source().clone()),
            );
        }
    }

    #[test]
    fn test_default_rule_names() {
        assert_eq!(
            RouteRules::new().names(),
            vec!["path-prefix", "path-separator", "duplicate-path"]
        );
        assert!(RouteRules::empty().names().is_empty());
    }

    #[test]
    fn test_custom_rule_runs() {
        let rules = RouteRules::empty().with_rule(RejectAll);
        let module = ModuleName::sanitize("login").unwrap();
        let table = RouteTable::new();
        let decl = ActionDeclaration::new("login/LoginAction", "com.x", "LoginAction");

        let mut diagnostics = Vec::new();
        rules.check(
            &decl,
            RuleContext {
                module: &module,
                table: &table,
            },
            &mut diagnostics,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(rules.info()[0].description, "Rejects every declaration");
    }
}
