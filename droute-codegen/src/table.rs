//! The route table: unique action path → implementing type.

use std::collections::BTreeMap;

use droute_manifest::{ActionDeclaration, ModuleName, SourceRef};
use tracing::debug;

use crate::{
    pipeline::Diagnostic,
    rules::{RouteRules, RuleContext},
};

/// The implementing type registered under one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    implementing_type: String,
    source: SourceRef,
}

impl RouteEntry {
    pub fn implementing_type(&self) -> &str {
        &self.implementing_type
    }

    /// Source of the declaration that won this path.
    pub fn source(&self) -> &SourceRef {
        &self.source
    }
}

/// Route table for one module.
///
/// Paths are unique keys and iterate in lexicographic order, so identical
/// declaration sets always render identical code regardless of the order the
/// sources produced them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with the built-in rules.
    pub fn build<'a>(
        declarations: impl IntoIterator<Item = &'a ActionDeclaration>,
        module: &ModuleName,
    ) -> (Self, Vec<Diagnostic>) {
        Self::build_with(declarations, module, &RouteRules::new())
    }

    /// Fold declarations into a table, in input order.
    ///
    /// Every declaration is checked against `rules` and then inserted, even
    /// when a rule reported it. A repeated path replaces the earlier entry.
    pub fn build_with<'a>(
        declarations: impl IntoIterator<Item = &'a ActionDeclaration>,
        module: &ModuleName,
        rules: &RouteRules,
    ) -> (Self, Vec<Diagnostic>) {
        declarations.into_iter().fold(
            (Self::new(), Vec::new()),
            |(mut table, mut diagnostics), decl| {
                rules.check(
                    decl,
                    RuleContext {
                        module,
                        table: &table,
                    },
                    &mut diagnostics,
                );
                table.insert(decl);
                (table, diagnostics)
            },
        )
    }

    /// Insert a declaration, returning the entry it replaced.
    pub fn insert(&mut self, decl: &ActionDeclaration) -> Option<RouteEntry> {
        let entry = RouteEntry {
            implementing_type: decl.implementing_type(),
            source: decl.source().clone(),
        };
        debug!(
            path = decl.path(),
            implementing_type = entry.implementing_type(),
            "registered action"
        );
        self.routes.insert(decl.path().to_string(), entry)
    }

    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }

    /// The implementing type for `path`, or `None` if it is not registered.
    pub fn find_action_class_name(&self, path: &str) -> Option<&str> {
        self.get(path).map(RouteEntry::implementing_type)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Entries in canonical (lexicographic path) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.routes.iter().map(|(path, entry)| (path.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticCode;

    fn module(name: &str) -> ModuleName {
        ModuleName::sanitize(name).unwrap()
    }

    fn decl(path: &str, qualified: &str) -> ActionDeclaration {
        ActionDeclaration::qualified(path, qualified)
    }

    #[test]
    fn test_login_scenario() {
        let decls = [
            decl("login/LoginAction", "com.x.LoginAction"),
            decl("login/LogoutAction", "com.x.LogoutAction"),
        ];

        let (table, diagnostics) = RouteTable::build(&decls, &module("login"));

        assert!(diagnostics.is_empty());
        let entries: Vec<(&str, &str)> = table
            .iter()
            .map(|(path, entry)| (path, entry.implementing_type()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("login/LoginAction", "com.x.LoginAction"),
                ("login/LogoutAction", "com.x.LogoutAction"),
            ]
        );
        assert_eq!(
            table.find_action_class_name("login/LoginAction"),
            Some("com.x.LoginAction")
        );
        assert_eq!(table.find_action_class_name("unknown/path"), None);
    }

    #[test]
    fn test_prefix_mismatch_still_inserted() {
        let decls = [
            decl("shop/CartAction", "com.x.CartAction"),
            decl("login/LoginAction", "com.x.LoginAction"),
        ];

        let (table, diagnostics) = RouteTable::build(&decls, &module("login"));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::PrefixMismatch);
        assert!(diagnostics[0].message.contains("shop/CartAction"));
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.find_action_class_name("shop/CartAction"),
            Some("com.x.CartAction")
        );
    }

    #[test]
    fn test_duplicate_path_last_wins() {
        let decls = [
            decl("login/LoginAction", "com.x.LoginAction"),
            decl("login/LoginAction", "com.y.LoginAction"),
        ];

        let (table, diagnostics) = RouteTable::build(&decls, &module("login"));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::DuplicatePath);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.find_action_class_name("login/LoginAction"),
            Some("com.y.LoginAction")
        );
    }

    #[test]
    fn test_each_repeat_reported_once() {
        let decls = [
            decl("login/A", "com.x.A"),
            decl("login/A", "com.x.B"),
            decl("login/A", "com.x.C"),
        ];

        let (table, diagnostics) = RouteTable::build(&decls, &module("login"));

        let duplicates = diagnostics
            .iter()
            .filter(|d| d.code == DiagnosticCode::DuplicatePath)
            .count();
        assert_eq!(duplicates, 2);
        assert_eq!(table.find_action_class_name("login/A"), Some("com.x.C"));
    }

    #[test]
    fn test_many_actions_in_one_module_do_not_conflict() {
        let decls: Vec<ActionDeclaration> = (0..10)
            .map(|i| decl(&format!("login/Action{i}"), &format!("com.x.Action{i}")))
            .collect();

        let (table, diagnostics) = RouteTable::build(&decls, &module("login"));

        assert!(diagnostics.is_empty());
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_order_is_canonical() {
        let forward = [
            decl("login/B", "com.x.B"),
            decl("login/A", "com.x.A"),
            decl("login/C", "com.x.C"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let (a, _) = RouteTable::build(&forward, &module("login"));
        let (b, _) = RouteTable::build(&backward, &module("login"));

        assert_eq!(a, b);
        let paths: Vec<&str> = a.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["login/A", "login/B", "login/C"]);
    }

    #[test]
    fn test_empty_rules_accept_everything() {
        let decls = [decl("shop/CartAction", "com.x.CartAction")];

        let (table, diagnostics) =
            RouteTable::build_with(&decls, &module("login"), &RouteRules::empty());

        assert!(diagnostics.is_empty());
        assert_eq!(table.len(), 1);
    }
}
