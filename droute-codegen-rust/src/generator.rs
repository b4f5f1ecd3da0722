use std::path::Path;

use droute_codegen::{
    CompilationContext, GenerateResult, LanguageCodegen, PreviewFile, RouteTable, write_generated,
};
use droute_core::GeneratedFile;
use droute_manifest::{ModuleName, Result};
use tracing::debug;

use crate::{files::RouteModuleRs, naming::file_name};

/// Rust code generator that produces a `RouterModule` implementation
pub struct Generator<'a> {
    module: &'a ModuleName,
    table: &'a RouteTable,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: file_name(self.module),
            content: self.route_module().render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        debug!(module = %self.module, routes = self.table.len(), "generating rust");
        let written = write_generated(&self.route_module(), output_dir)?;
        Ok(GenerateResult {
            written: vec![written],
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(module: &'a ModuleName, table: &'a RouteTable) -> Self {
        Self { module, table }
    }

    /// Generator for the result of a pipeline run.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        Self::new(&ctx.module, &ctx.table)
    }

    fn route_module(&self) -> RouteModuleRs<'a> {
        RouteModuleRs::new(self.module, self.table)
    }
}
