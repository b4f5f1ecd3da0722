//! Shared code generation utilities for droute.
//!
//! This crate turns action declarations into a validated route table and
//! provides the abstractions used by the language-specific generators
//! (e.g., `droute-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`table`] - The route table and its fold over declarations
//! - [`rules`] - Per-declaration validation rules
//! - [`pipeline`] - Resolve → collect → build orchestration and diagnostics
//! - [`language`] - Language generator trait and output helpers

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod rules;
pub mod table;

pub use builder::{CodeBuilder, Indent};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, write_generated};
pub use pipeline::{CompilationContext, Diagnostic, DiagnosticCode, OnError, Pipeline, Severity};
pub use rules::{Rule, RuleContext, RouteRules};
pub use table::{RouteEntry, RouteTable};
