//! Diagnostic types for the route-table pipeline.
//!
//! Diagnostics are collected, never thrown: one bad declaration does not stop
//! the remaining ones from being checked.

use droute_manifest::SourceRef;
use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The declaration is invalid; the host build should fail.
    Error,
    /// Suspicious but accepted.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// The path does not start with the module name.
    PrefixMismatch,
    /// Another declaration already registered the same path.
    DuplicatePath,
    /// The path starts with the module name but not with `<module>/`.
    MissingSeparator,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::PrefixMismatch => "prefix-mismatch",
            DiagnosticCode::DuplicatePath => "duplicate-path",
            DiagnosticCode::MissingSeparator => "missing-separator",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation finding, attributed to the declaration that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The kind of finding.
    pub code: DiagnosticCode,
    /// The diagnostic message.
    pub message: String,
    /// The offending declaration's source, if known.
    pub location: Option<SourceRef>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attribute this diagnostic to a source location.
    pub fn at(mut self, location: SourceRef) -> Self {
        self.location = Some(location);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error(DiagnosticCode::DuplicatePath, "duplicate");
        assert!(diag.severity.is_error());
        assert!(diag.location.is_none());
    }

    #[test]
    fn test_diagnostic_display_with_location() {
        let diag = Diagnostic::warning(DiagnosticCode::MissingSeparator, "missing '/'")
            .at(SourceRef::new("Login.java").at(3, 1));
        assert_eq!(
            diag.to_string(),
            "warning[missing-separator]: missing '/' (at Login.java:3:1)"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
