//! Pipeline orchestrator.

use std::path::Path;

use droute_manifest::{ActionDeclaration, DeclarationSource, ModuleName, Options, Result};
use tracing::{debug, info};

use super::{CompilationContext, OnError};
use crate::{GenerateResult, LanguageCodegen, RouteRules, RouteTable};

/// The route-table pipeline.
///
/// One [`Pipeline::run`] resolves the module name, collects every source's
/// declarations, and builds the route table. Nothing is shared between runs.
pub struct Pipeline {
    options: Option<Options>,
    sources: Vec<Box<dyn DeclarationSource>>,
    rules: RouteRules,
    on_error: OnError,
}

impl Pipeline {
    /// Create a pipeline with no options, no sources, and the default rules.
    pub fn new() -> Self {
        Self {
            options: None,
            sources: Vec::new(),
            rules: RouteRules::new(),
            on_error: OnError::default(),
        }
    }

    /// Add host options. Later calls override earlier keys.
    pub fn options(mut self, options: Options) -> Self {
        match &mut self.options {
            Some(existing) => existing.merge(&options),
            None => self.options = Some(options),
        }
        self
    }

    /// Add a declaration source.
    pub fn source(mut self, source: impl DeclarationSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Replace the validation rules.
    pub fn rules(mut self, rules: RouteRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the policy for emitting code when errors were reported.
    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Run the pipeline up to (not including) code generation.
    ///
    /// # Errors
    ///
    /// Fails when the module name cannot be resolved or a source cannot be
    /// read. Validation findings are returned as diagnostics instead.
    pub fn run(&self) -> Result<CompilationContext> {
        let module = ModuleName::resolve(self.options.as_ref())?;
        info!(%module, "resolved module name");

        let declarations = self.collect()?;
        let (table, diagnostics) = RouteTable::build_with(&declarations, &module, &self.rules);
        info!(
            routes = table.len(),
            diagnostics = diagnostics.len(),
            "built route table"
        );

        Ok(CompilationContext {
            module,
            declarations,
            table,
            diagnostics,
        })
    }

    /// Write the generated code for a finished run.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Validation` when the policy is [`OnError::Withhold`]
    /// and the run reported errors, or with `Error::GenerationIo` when the
    /// artifact cannot be written.
    pub fn emit(
        &self,
        ctx: &CompilationContext,
        generator: &dyn LanguageCodegen,
        output_dir: &Path,
    ) -> Result<GenerateResult> {
        ctx.ensure_emittable(self.on_error)?;
        generator.generate(output_dir)
    }

    fn collect(&self) -> Result<Vec<ActionDeclaration>> {
        let mut declarations = Vec::new();
        for source in &self.sources {
            let found = source.collect()?;
            debug!(source = source.name(), actions = found.len(), "collected");
            declarations.extend(found);
        }
        Ok(declarations)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
