//! Rust code generator for droute.
//!
//! Renders a route table as a `RouteModule_<module>` struct implementing
//! `droute_api::RouterModule`. The module name is embedded unchanged so
//! modules differing only in case or underscores never share a file.

mod generator;
mod naming;

pub mod files;

pub use droute_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::{file_name, string_literal, struct_name};
