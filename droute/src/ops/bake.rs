//! Bake operation - route module generation.

use std::path::Path;

use droute_codegen::OnError;
use droute_manifest::Result;

use super::Inputs;
use crate::{
    language::Language,
    reports::{BakeReport, GenerationResult},
};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Target language.
    pub language: Language,
    /// Package of the generated Java class.
    pub java_package: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// What to do when the route table has errors.
    pub on_error: OnError,
}

/// Execute the bake operation.
///
/// Builds the route table and generates the module for the target language.
/// A withheld module is part of the report, not an error, so the diagnostics
/// that caused it are still shown.
pub fn bake(inputs: &Inputs<'_>, opts: BakeOptions<'_>) -> Result<BakeReport> {
    let pipeline = super::pipeline(inputs)?.on_error(opts.on_error);
    let ctx = pipeline.run()?;
    let generator = opts.language.generator(&ctx, opts.java_package);

    let result = match ctx.ensure_emittable(opts.on_error) {
        Err(err) => GenerationResult::Withheld(err),
        Ok(()) if opts.dry_run => GenerationResult::Preview(generator.preview()),
        Ok(()) => GenerationResult::Written(
            pipeline
                .emit(&ctx, generator.as_ref(), opts.output_dir)?
                .written,
        ),
    };

    Ok(BakeReport {
        module: ctx.module.to_string(),
        language: generator.language(),
        routes: ctx.table.len(),
        diagnostics: ctx.diagnostics.clone(),
        result,
    })
}
