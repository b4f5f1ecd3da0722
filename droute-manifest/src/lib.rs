// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Inputs of the droute pipeline.
//!
//! - [`Options`] and [`ModuleName`] - the option map and the module name resolved from it
//! - [`ActionDeclaration`] and [`SourceRef`] - one declared action and where it came from
//! - [`source`] - declaration sources (`routes.toml` manifests, Java source trees)
//! - [`Error`] - every fatal error of a run

mod declaration;
mod error;
mod manifest;
mod options;
pub mod source;

pub use declaration::{ActionDeclaration, SourceRef};
pub use error::{Error, Result};
pub use manifest::{ActionEntry, Manifest, RoutesToml};
pub use options::{MODULE_NAME_KEY, ModuleName, Options};
pub use source::{DeclarationSource, JavaSource, ManifestSource, StaticSource};
