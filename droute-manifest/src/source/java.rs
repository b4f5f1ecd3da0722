//! Java source scanning for `@Action` annotations.
//!
//! This is a lexical scan, not a Java parser. It recognizes
//!
//! ```java
//! package com.x;
//!
//! @Action(path = "login/LoginAction")
//! public class LoginAction implements IRouterAction { ... }
//! ```
//!
//! and the single-value form `@Action("login/LoginAction")`. Comments are
//! blanked before matching so commented-out annotations are ignored. Matching
//! runs on a copy with literal contents blanked too, so text inside strings
//! never starts or ends an annotation; the path itself is read back from the
//! same offsets in the unblanked literal.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use droute_core::line_col;
use ignore::WalkBuilder;
use regex::Regex;
use tracing::{debug, warn};

use super::DeclarationSource;
use crate::{ActionDeclaration, Error, Result, SourceRef};

static PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*)\s*;")
        .expect("valid package regex")
});

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(?:[A-Za-z_$][\w$]*\.)*Action\s*\(([^)]*)\)").expect("valid annotation regex")
});

static PATH_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[\s,])path\s*=\s*"((?:[^"\\]|\\.)*)""#).expect("valid path regex")
});

static VALUE_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:value\s*=\s*)?"((?:[^"\\]|\\.)*)"\s*$"#).expect("valid value regex")
});

static TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^;{}]*?\b(?:class|interface|enum|record)\s+([A-Za-z_$][\w$]*)")
        .expect("valid type declaration regex")
});

/// Declarations found in the `*.java` files under a directory.
///
/// The walk honors `.gitignore` and skips hidden files.
#[derive(Debug, Clone)]
pub struct JavaSource {
    root: PathBuf,
    name: String,
}

impl JavaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            name: root.display().to_string(),
            root,
        }
    }

    /// Scan one compilation unit. `origin` labels the declarations' sources.
    pub fn scan_str(src: &str, origin: &str) -> Vec<ActionDeclaration> {
        let code = blank_comments(src);
        let skeleton = blank_literals(&code);
        let package = PACKAGE
            .captures(&skeleton)
            .map(|caps| caps[1].split_whitespace().collect::<String>())
            .unwrap_or_default();

        let mut declarations = Vec::new();
        for caps in ANNOTATION.captures_iter(&skeleton) {
            let (Some(annotation), Some(args)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let (line, column) = line_col(src, annotation.start());
            let source = SourceRef::new(origin).at(line, column);

            let Some(path) = annotation_path(&code[args.range()]) else {
                warn!(%source, "@Action without a path, skipping");
                continue;
            };
            let Some(name) = TYPE_DECL
                .captures(&skeleton[annotation.end()..])
                .map(|decl| decl[1].to_string())
            else {
                warn!(%source, "@Action is not attached to a type declaration, skipping");
                continue;
            };

            declarations.push(ActionDeclaration::new(path, &package, name).with_source(source));
        }
        declarations
    }

    fn java_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|path| path.is_file() && is_java_file(path))
            .collect();
        files.sort();
        files
    }
}

impl DeclarationSource for JavaSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> Result<Vec<ActionDeclaration>> {
        if !self.root.exists() {
            return Err(Error::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "source directory not found"),
            ));
        }

        let mut declarations = Vec::new();
        for path in self.java_files() {
            let src = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            let found = Self::scan_str(&src, &path.display().to_string());
            debug!(file = %path.display(), actions = found.len(), "scanned");
            declarations.extend(found);
        }
        Ok(declarations)
    }
}

fn is_java_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "java")
}

fn annotation_path(args: &str) -> Option<String> {
    PATH_ARG
        .captures(args)
        .or_else(|| VALUE_ARG.captures(args))
        .map(|caps| unescape(&caps[1]))
}

/// Undo Java string escapes that can appear in a route path.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Replace comment text with spaces, keeping byte offsets and newlines.
fn blank_comments(src: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Line,
        Block,
        Str,
        Char,
    }

    let mut out = String::with_capacity(src.len());
    let mut state = State::Code;
    let mut chars = src.chars().peekable();

    let blank = |out: &mut String, c: char| {
        if c == '\n' {
            out.push('\n');
        } else {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        }
    };

    while let Some(c) = chars.next() {
        match state {
            State::Code => match (c, chars.peek().copied()) {
                ('/', Some('/')) => {
                    state = State::Line;
                    blank(&mut out, c);
                }
                ('/', Some('*')) => {
                    state = State::Block;
                    blank(&mut out, c);
                    if let Some(star) = chars.next() {
                        blank(&mut out, star);
                    }
                }
                ('"', _) => {
                    state = State::Str;
                    out.push(c);
                }
                ('\'', _) => {
                    state = State::Char;
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::Line => {
                if c == '\n' {
                    state = State::Code;
                }
                blank(&mut out, c);
            }
            State::Block => {
                if c == '*' && chars.peek() == Some(&'/') {
                    blank(&mut out, c);
                    if let Some(slash) = chars.next() {
                        blank(&mut out, slash);
                    }
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::Str | State::Char => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if (state == State::Str && c == '"') || (state == State::Char && c == '\'')
                {
                    state = State::Code;
                }
            }
        }
    }
    out
}

/// Replace the contents of string and char literals with spaces, keeping the
/// quotes. Expects comments to be blanked already.
fn blank_literals(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut quote = None;
    let mut chars = code.chars();

    let blank = |out: &mut String, c: char| out.extend(std::iter::repeat_n(' ', c.len_utf8()));

    while let Some(c) = chars.next() {
        match quote {
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
                out.push(c);
            }
            Some(q) if c == q => {
                quote = None;
                out.push(c);
            }
            Some(_) => {
                blank(&mut out, c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        blank(&mut out, escaped);
                    }
                }
            }
        }
    }
    out
}
