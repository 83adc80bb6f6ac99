//! Command-line option parsing.

use std::path::PathBuf;

use mmq_lexer::{Dialect, LexerConfig};

use crate::emitter::ColorMode;
use crate::CliError;

/// Options shared by every subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Input path; `-` is stdin.
    pub input: Option<String>,
    pub dialect: Option<Dialect>,
    pub config: Option<PathBuf>,
    /// `--comments` / `--no-comments` override.
    pub comments: Option<bool>,
    pub color: ColorMode,
}

/// Parse the arguments that follow the subcommand name.
pub fn parse_options(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    for arg in args {
        if let Some(name) = arg.strip_prefix("--dialect=") {
            options.dialect = Some(name.parse()?);
        } else if let Some(path) = arg.strip_prefix("--config=") {
            options.config = Some(PathBuf::from(path));
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = mode.parse()?;
        } else if arg == "--comments" {
            options.comments = Some(true);
        } else if arg == "--no-comments" {
            options.comments = Some(false);
        } else if arg == "-" || !arg.starts_with('-') {
            if options.input.is_some() {
                return Err(CliError::ExtraInput(arg.clone()));
            }
            options.input = Some(arg.clone());
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }
    if options.dialect.is_some() && options.config.is_some() {
        return Err(CliError::ConflictingOptions);
    }
    Ok(options)
}

impl CliOptions {
    /// The tokenizer configuration these options select.
    ///
    /// A config file replaces the dialect preset; the comment flags apply
    /// on top of either.
    pub fn lexer_config(&self) -> Result<LexerConfig, CliError> {
        let config = match &self.config {
            Some(path) => LexerConfig::load(path)?,
            None => LexerConfig::for_dialect(self.dialect.unwrap_or_default()),
        };
        Ok(match self.comments {
            Some(enabled) => config.with_comments(enabled),
            None => config,
        })
    }
}
