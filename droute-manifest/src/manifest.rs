//! The `routes.toml` manifest.
//!
//! ```toml
//! [options]
//! moduleName = "login"
//!
//! [[action]]
//! path = "login/LoginAction"
//! class = "com.x.LoginAction"
//!
//! [[action]]
//! path = "login/LogoutAction"
//! package = "com.x"
//! class = "LogoutAction"
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use droute_core::line_col;
use serde::Deserialize;
use toml::Spanned;

use crate::{ActionDeclaration, Error, Options, Result, SourceRef};

/// Parsed contents of a `routes.toml` manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Options for the run, e.g. `moduleName`.
    #[serde(default)]
    pub options: Options,

    /// Declared actions.
    #[serde(default, rename = "action")]
    pub actions: Vec<ActionEntry>,
}

/// One `[[action]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionEntry {
    /// Route path, e.g. `login/LoginAction`.
    pub path: Spanned<String>,
    /// Implementing class; fully qualified unless `package` is given.
    pub class: Spanned<String>,
    /// Package of the implementing class.
    #[serde(default)]
    pub package: Option<String>,
}

impl ActionEntry {
    fn declaration(&self) -> ActionDeclaration {
        match &self.package {
            Some(package) => {
                ActionDeclaration::new(self.path.get_ref(), package, self.class.get_ref())
            }
            None => ActionDeclaration::qualified(self.path.get_ref(), self.class.get_ref()),
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "routes.toml")
    }
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    fn validate(&self, content: &str, filename: &str) -> Result<()> {
        for entry in &self.actions {
            let class = entry.class.get_ref();
            let span = entry.class.span();

            if class.trim().is_empty() {
                return Err(Error::invalid_action(
                    format!("action '{}' has no class", entry.path.get_ref()),
                    content,
                    filename,
                    span,
                ));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(Error::invalid_action(
                    format!("class '{}' contains whitespace", class),
                    content,
                    filename,
                    span,
                ));
            }
            if entry.package.is_some() && class.contains('.') {
                return Err(Error::invalid_action(
                    format!(
                        "class '{}' must be a simple name when 'package' is set",
                        class
                    ),
                    content,
                    filename,
                    span,
                ));
            }
        }
        Ok(())
    }
}

/// A `routes.toml` file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct RoutesToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl RoutesToml {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::parse(content, path)
    }

    /// Parse manifest content that was read elsewhere.
    pub fn parse(content: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = content.into();
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options declared in the `[options]` table.
    pub fn options(&self) -> &Options {
        &self.manifest.options
    }

    /// Declarations for every `[[action]]`, attributed to the line of their path.
    pub fn declarations(&self) -> Vec<ActionDeclaration> {
        let origin = self.path.display().to_string();
        self.manifest
            .actions
            .iter()
            .map(|entry| {
                let (line, column) = line_col(&self.content, entry.path.span().start);
                entry
                    .declaration()
                    .with_source(SourceRef::new(&origin).at(line, column))
            })
            .collect()
    }
}
