//! Option map and module name resolution.

use std::{collections::BTreeMap, fmt};

use droute_core::sanitize_identifier;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Option key that carries the module name.
pub const MODULE_NAME_KEY: &str = "moduleName";

/// Flat string-keyed options supplied by the host build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`Options::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge `other` into these options. Values from `other` win.
    pub fn merge(&mut self, other: &Options) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Parse a `key=value` assignment as given on the command line.
    ///
    /// The value may be empty (`moduleName=`); the key may not.
    pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
        match arg.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(Box::new(Error::InvalidOption {
                arg: arg.to_string(),
            })),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Sanitized module name, guaranteed to match `[0-9A-Za-z_]+`.
///
/// It is the required prefix of every action path in the module and part of
/// the generated artifact's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Resolve the module name from the host options.
    ///
    /// Fails with [`Error::MissingModuleName`] when the options are absent or
    /// empty, or when `moduleName` is missing or blank, and with
    /// [`Error::EmptyModuleName`] when nothing is left after sanitizing.
    pub fn resolve(options: Option<&Options>) -> Result<Self> {
        let raw = options
            .filter(|options| !options.is_empty())
            .and_then(|options| options.get(MODULE_NAME_KEY))
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Box::new(Error::MissingModuleName))?;

        debug!(raw, "resolving module name");
        Self::sanitize(raw)
    }

    /// Strip every character outside `[0-9A-Za-z_]` from `raw`.
    pub fn sanitize(raw: &str) -> Result<Self> {
        let name = sanitize_identifier(raw);
        if name.is_empty() {
            return Err(Box::new(Error::EmptyModuleName {
                raw: raw.to_string(),
            }));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(value: &str) -> Options {
        Options::new().with(MODULE_NAME_KEY, value)
    }

    #[test]
    fn test_resolve_plain_name() {
        let module = ModuleName::resolve(Some(&options("login"))).unwrap();
        assert_eq!(module.as_str(), "login");
    }

    #[test]
    fn test_resolve_sanitizes() {
        let module = ModuleName::resolve(Some(&options("my-module!!"))).unwrap();
        assert_eq!(module.as_str(), "mymodule");
    }

    #[test]
    fn test_resolve_sanitized_to_empty_is_fatal() {
        let err = ModuleName::resolve(Some(&options("***"))).unwrap_err();
        assert!(matches!(*err, Error::EmptyModuleName { ref raw } if raw == "***"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_resolve_absent_options() {
        let err = ModuleName::resolve(None).unwrap_err();
        assert!(matches!(*err, Error::MissingModuleName));
    }

    #[test]
    fn test_resolve_empty_options() {
        let err = ModuleName::resolve(Some(&Options::new())).unwrap_err();
        assert!(matches!(*err, Error::MissingModuleName));
    }

    #[test]
    fn test_resolve_missing_key() {
        let opts = Options::new().with("other", "value");
        let err = ModuleName::resolve(Some(&opts)).unwrap_err();
        assert!(matches!(*err, Error::MissingModuleName));
    }

    #[test]
    fn test_resolve_blank_value() {
        for value in ["", "   "] {
            let err = ModuleName::resolve(Some(&options(value))).unwrap_err();
            assert!(matches!(*err, Error::MissingModuleName), "value {value:?}");
        }
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            Options::parse_assignment("moduleName=login").unwrap(),
            ("moduleName".to_string(), "login".to_string())
        );
        assert_eq!(
            Options::parse_assignment("moduleName=").unwrap(),
            ("moduleName".to_string(), String::new())
        );
        assert_eq!(
            Options::parse_assignment("key=a=b").unwrap(),
            ("key".to_string(), "a=b".to_string())
        );
        assert!(Options::parse_assignment("moduleName").is_err());
        assert!(Options::parse_assignment("=login").is_err());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = Options::new().with(MODULE_NAME_KEY, "manifest").with("a", "1");
        base.merge(&Options::new().with(MODULE_NAME_KEY, "cli"));

        assert_eq!(base.get(MODULE_NAME_KEY), Some("cli"));
        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.len(), 2);
    }
}
