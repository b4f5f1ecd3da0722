use std::path::PathBuf;

use clap::Args;
use droute_codegen::OnError;
use droute_codegen_java::PACKAGE;
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    language::Language,
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target language
    #[arg(short, long, value_enum, default_value_t)]
    pub language: Language,

    /// Package of the generated Java class
    #[arg(long, value_name = "PACKAGE", default_value = PACKAGE, value_parser = parse_java_package)]
    pub java_package: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write nothing when any declaration is invalid
    #[arg(long)]
    pub withhold_on_error: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let on_error = if self.withhold_on_error {
            OnError::Withhold
        } else {
            OnError::Emit
        };

        let report = ops::bake(
            &self.input.inputs(),
            BakeOptions {
                output_dir: &self.output,
                language: self.language,
                java_package: &self.java_package,
                dry_run: self.dry_run,
                on_error,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Accept dotted Java identifiers such as `com.drouter.assist`.
fn parse_java_package(arg: &str) -> std::result::Result<String, String> {
    let valid = arg.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    });
    if valid {
        Ok(arg.to_string())
    } else {
        Err(format!("'{arg}' is not a dotted Java package name"))
    }
}
