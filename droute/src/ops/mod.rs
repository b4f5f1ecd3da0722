//! Core operations.
//!
//! This module contains the business logic for droute commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;

use std::path::{Path, PathBuf};

pub use bake::{BakeOptions, bake};
pub use check::check;
use droute_codegen::Pipeline;
use droute_manifest::{JavaSource, ManifestSource, Options, Result};
use tracing::debug;

/// Declaration inputs and host options for one run.
pub struct Inputs<'a> {
    /// `routes.toml` manifest, if any.
    pub manifest: Option<&'a Path>,
    /// Java source roots to scan.
    pub sources: &'a [PathBuf],
    /// Options given on the command line.
    pub options: Options,
}

/// Assemble the pipeline for `inputs`.
///
/// Manifest options are applied first so command-line options override them.
fn pipeline(inputs: &Inputs<'_>) -> Result<Pipeline> {
    let mut pipeline = Pipeline::new();

    if let Some(path) = inputs.manifest {
        let manifest = ManifestSource::open(path)?;
        debug!(path = %path.display(), options = manifest.options().len(), "loaded manifest");
        pipeline = pipeline.options(manifest.options().clone()).source(manifest);
    }

    for root in inputs.sources {
        pipeline = pipeline.source(JavaSource::new(root.clone()));
    }

    Ok(pipeline.options(inputs.options.clone()))
}
