//! Declaration sources.
//!
//! A [`DeclarationSource`] yields every action declaration it knows about in
//! one go. The pipeline needs the whole set before validating, since path
//! uniqueness is checked across the entire run.

mod java;
mod manifest;

pub use java::JavaSource;
pub use manifest::ManifestSource;

use crate::{ActionDeclaration, Result};

/// An enumerable source of action declarations.
pub trait DeclarationSource {
    /// Short label used in logs (e.g. a file or directory path).
    fn name(&self) -> &str;

    /// Collect every declaration. No ordering is guaranteed.
    fn collect(&self) -> Result<Vec<ActionDeclaration>>;
}

/// Declarations held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    declarations: Vec<ActionDeclaration>,
}

impl StaticSource {
    pub fn new(declarations: impl IntoIterator<Item = ActionDeclaration>) -> Self {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }
}

impl DeclarationSource for StaticSource {
    fn name(&self) -> &str {
        "<memory>"
    }

    fn collect(&self) -> Result<Vec<ActionDeclaration>> {
        Ok(self.declarations.clone())
    }
}
