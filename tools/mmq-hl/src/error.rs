//! Errors reported by the command-line tool.

use std::io;

use mmq_lexer::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid color mode `{0}` (expected `auto`, `always` or `never`)")]
    InvalidColor(String),

    #[error("missing input file (use `-` to read stdin)")]
    MissingInput,

    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraInput(String),

    #[error("`--dialect` cannot be combined with `--config`; set `dialect` in the config file")]
    ConflictingOptions,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
