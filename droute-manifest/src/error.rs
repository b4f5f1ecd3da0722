use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for droute operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no module name configured")]
    #[diagnostic(
        code(droute::missing_module_name),
        help(
            "pass the module name as an option, e.g. `-AmoduleName=login`, or set it in routes.toml:\n\n[options]\nmoduleName = \"login\""
        )
    )]
    MissingModuleName,

    #[error("module name '{raw}' is empty after removing characters outside [0-9A-Za-z_]")]
    #[diagnostic(
        code(droute::empty_module_name),
        help("use only letters, numbers, and underscores in the module name")
    )]
    EmptyModuleName { raw: String },

    #[error("invalid option '{arg}'")]
    #[diagnostic(code(droute::invalid_option), help("options are written as key=value"))]
    InvalidOption { arg: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(droute::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse routes manifest")]
    #[diagnostic(code(droute::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(droute::invalid_action))]
    InvalidAction {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("failed to write generated file '{path}'")]
    #[diagnostic(code(droute::generation_io))]
    GenerationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("route table has {count} error(s), generated code was withheld")]
    #[diagnostic(
        code(droute::validation_failed),
        help("fix the reported actions, or drop --withhold-on-error to emit anyway")
    )]
    Validation { count: usize },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid action error pointing at a span of the manifest
    pub fn invalid_action(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidAction {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            message: message.into(),
        })
    }

    /// Create an I/O error for a file that could not be read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an I/O error for a generated file that could not be written
    pub fn generation_io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::GenerationIo {
            path: path.into(),
            source,
        })
    }

    /// Whether this error comes from missing or unusable configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingModuleName | Error::EmptyModuleName { .. } | Error::InvalidOption { .. }
        )
    }
}
