//! Java code generator for droute.
//!
//! Renders a route table as `com.drouter.assist.DRouter$$Module$$<module>`, a
//! class implementing `com.drouter.api.core.IRouterModule`. The package is
//! configurable with [`Generator::with_package`] for runtimes that look
//! modules up elsewhere (the original DRouter runtime uses
//! `com.drotuer.assist`).

mod generator;
mod naming;

pub mod files;

pub use droute_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::{CLASS_PREFIX, INTERFACE, PACKAGE, class_name, string_literal};
