//! Action declarations and their source attribution.

use std::fmt;

use serde::Serialize;

/// Where a declaration came from.
///
/// Only used to attribute diagnostics; the pipeline never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceRef {
    origin: String,
    line: Option<usize>,
    column: Option<usize>,
}

impl SourceRef {
    /// A reference to a whole origin (file or manifest name).
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            line: None,
            column: None,
        }
    }

    /// Declarations built in memory.
    pub fn memory() -> Self {
        Self::new("<memory>")
    }

    /// Attach a 1-based line and column.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}

/// One declared action: a route path and the type that implements it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDeclaration {
    path: String,
    scope: String,
    name: String,
    source: SourceRef,
}

impl ActionDeclaration {
    /// Create a declaration from its path, enclosing scope, and local name.
    ///
    /// `scope` is the package-qualified name of the enclosing scope and may be
    /// empty for types in the default package.
    pub fn new(path: impl Into<String>, scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope: scope.into(),
            name: name.into(),
            source: SourceRef::memory(),
        }
    }

    /// Create a declaration from a fully-qualified type name.
    ///
    /// The last `.` separates the scope from the local name.
    pub fn qualified(path: impl Into<String>, qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((scope, name)) => Self::new(path, scope, name),
            None => Self::new(path, "", qualified),
        }
    }

    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source = source;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &SourceRef {
        &self.source
    }

    /// The fully-qualified implementing type, `<scope>.<name>`.
    pub fn implementing_type(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.scope, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implementing_type() {
        let decl = ActionDeclaration::new("login/LoginAction", "com.x", "LoginAction");
        assert_eq!(decl.implementing_type(), "com.x.LoginAction");
    }

    #[test]
    fn test_default_package() {
        let decl = ActionDeclaration::new("login/LoginAction", "", "LoginAction");
        assert_eq!(decl.implementing_type(), "LoginAction");
    }

    #[test]
    fn test_qualified_splits_on_last_dot() {
        let decl = ActionDeclaration::qualified("login/LoginAction", "com.x.LoginAction");
        assert_eq!(decl.scope(), "com.x");
        assert_eq!(decl.name(), "LoginAction");

        let bare = ActionDeclaration::qualified("login/LoginAction", "LoginAction");
        assert_eq!(bare.scope(), "");
        assert_eq!(bare.implementing_type(), "LoginAction");
    }

    #[test]
    fn test_source_ref_display() {
        assert_eq!(SourceRef::memory().to_string(), "<memory>");
        assert_eq!(
            SourceRef::new("src/LoginAction.java").at(12, 1).to_string(),
            "src/LoginAction.java:12:1"
        );
    }
}
