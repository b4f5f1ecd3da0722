use std::path::Path;

use super::DeclarationSource;
use crate::{ActionDeclaration, Options, Result, RoutesToml};

/// Declarations listed in a `routes.toml` manifest.
#[derive(Debug)]
pub struct ManifestSource {
    name: String,
    routes: RoutesToml,
}

impl ManifestSource {
    /// Open and parse the manifest at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_routes(RoutesToml::open(path)?))
    }

    pub fn from_routes(routes: RoutesToml) -> Self {
        Self {
            name: routes.path().display().to_string(),
            routes,
        }
    }

    /// Options from the manifest's `[options]` table.
    pub fn options(&self) -> &Options {
        self.routes.options()
    }
}

impl DeclarationSource for ManifestSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> Result<Vec<ActionDeclaration>> {
        Ok(self.routes.declarations())
    }
}
