//! Route-table pipeline.
//!
//! The [`Pipeline`] resolves the module name, collects declarations from
//! every source, and folds them into a [`RouteTable`](crate::RouteTable)
//! while collecting diagnostics:
//!
//! ```ignore
//! use droute_codegen::pipeline::{OnError, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .options(options)
//!     .source(JavaSource::new("src"))
//!     .on_error(OnError::Withhold);
//!
//! let ctx = pipeline.run()?;
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::new(&ctx.module, &ctx.table);
//! pipeline.emit(&ctx, &generator, out_dir)?;
//! ```

mod context;
mod diagnostic;
mod runner;

pub use context::{CompilationContext, OnError};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use runner::Pipeline;
