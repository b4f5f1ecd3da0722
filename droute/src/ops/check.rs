//! Check operation - validation without code generation.

use droute_manifest::Result;

use super::Inputs;
use crate::reports::{CheckReport, RouteRow};

/// Execute the check operation.
///
/// Runs the pipeline up to the route table and reports its routes and
/// diagnostics.
pub fn check(inputs: &Inputs<'_>) -> Result<CheckReport> {
    let ctx = super::pipeline(inputs)?.run()?;

    let routes = ctx
        .table
        .iter()
        .map(|(path, entry)| RouteRow {
            path: path.to_string(),
            implementing_type: entry.implementing_type().to_string(),
            source: entry.source().clone(),
        })
        .collect();

    Ok(CheckReport {
        module: ctx.module.to_string(),
        routes,
        diagnostics: ctx.diagnostics,
    })
}
