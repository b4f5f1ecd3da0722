//! Unified language dispatch.

use clap::ValueEnum;
use droute_codegen::{CompilationContext, LanguageCodegen};
use droute_codegen_java::Generator as JavaGenerator;
use droute_codegen_rust::Generator as RustGenerator;

/// Target language of the generated route module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// `DRouter$$Module$$<module>` implementing `IRouterModule`
    #[default]
    Java,
    /// `RouteModule_<module>` implementing `droute_api::RouterModule`
    Rust,
}

impl Language {
    /// Create a generator for this language. `java_package` only affects Java.
    pub fn generator<'a>(
        self,
        ctx: &'a CompilationContext,
        java_package: &'a str,
    ) -> Box<dyn LanguageCodegen + 'a> {
        match self {
            Language::Java => {
                Box::new(JavaGenerator::from_context(ctx).with_package(java_package))
            }
            Language::Rust => Box::new(RustGenerator::from_context(ctx)),
        }
    }
}
