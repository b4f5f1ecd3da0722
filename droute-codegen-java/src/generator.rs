use std::path::Path;

use droute_codegen::{
    CompilationContext, GenerateResult, LanguageCodegen, PreviewFile, RouteTable, write_generated,
};
use droute_core::GeneratedFile;
use droute_manifest::{ModuleName, Result};
use tracing::debug;

use crate::{files::RouterModuleClass, naming::PACKAGE};

/// Java code generator that produces an `IRouterModule` implementation
pub struct Generator<'a> {
    package: &'a str,
    module: &'a ModuleName,
    table: &'a RouteTable,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let file = self.router_module();
        vec![PreviewFile {
            path: file.relative_path(),
            content: file.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        debug!(
            module = %self.module,
            package = self.package,
            routes = self.table.len(),
            "generating java"
        );
        let written = write_generated(&self.router_module(), output_dir)?;
        Ok(GenerateResult {
            written: vec![written],
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(module: &'a ModuleName, table: &'a RouteTable) -> Self {
        Self {
            package: PACKAGE,
            module,
            table,
        }
    }

    /// Place the generated class in `package` instead of [`PACKAGE`].
    ///
    /// Use this when the runtime loads modules from another package.
    pub fn with_package(mut self, package: &'a str) -> Self {
        self.package = package;
        self
    }

    /// Generator for the result of a pipeline run.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        Self::new(&ctx.module, &ctx.table)
    }

    fn router_module(&self) -> RouterModuleClass<'a> {
        RouterModuleClass::new(self.package, self.module, self.table)
    }
}
