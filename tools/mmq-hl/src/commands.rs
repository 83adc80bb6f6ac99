//! Subcommands: `lex`, `highlight` and `json`.

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};

use mmq_lexer::{tokenize_document, LineTokens};
use tracing::debug;

use crate::emitter::{JsonEmitter, ListingEmitter, TerminalEmitter, TokenEmitter};
use crate::{CliError, CliOptions};

/// What to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// One row per token.
    Lex,
    /// The query with ANSI colors.
    Highlight,
    /// Tokens as JSON.
    Json,
}

impl Command {
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        match name {
            "lex" => Ok(Command::Lex),
            "highlight" => Ok(Command::Highlight),
            "json" => Ok(Command::Json),
            other => Err(CliError::UnknownCommand(other.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Lex => "lex",
            Command::Highlight => "highlight",
            Command::Json => "json",
        }
    }
}

/// Read the input named by `path`; `-` is stdin.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None => Err(CliError::MissingInput),
        Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_owned(),
                    source,
                })?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Run a subcommand, writing to stdout.
#[tracing::instrument(level = "debug", skip(options), fields(input = ?options.input))]
pub fn run(command: Command, options: &CliOptions) -> Result<(), CliError> {
    let text = read_input(options.input.as_deref())?;
    let tokenizer = options.lexer_config()?.build()?;
    let lines = tokenize_document(&tokenizer, &text);
    debug!(lines = lines.len(), "tokenized input");

    let is_tty = io::stdout().is_terminal();
    let stdout = io::stdout();
    render(command, options, is_tty, &lines, BufWriter::new(stdout.lock()))?;
    Ok(())
}

/// Write `lines` in the format `command` selects.
pub fn render<W: Write>(
    command: Command,
    options: &CliOptions,
    is_tty: bool,
    lines: &[LineTokens<'_>],
    writer: W,
) -> io::Result<()> {
    match command {
        Command::Lex => emit(ListingEmitter::new(writer), lines),
        Command::Highlight => emit(
            TerminalEmitter::with_color_mode(writer, options.color, is_tty),
            lines,
        ),
        Command::Json => emit(JsonEmitter::new(writer), lines),
    }
}

fn emit(mut emitter: impl TokenEmitter, lines: &[LineTokens<'_>]) -> io::Result<()> {
    emitter.emit_all(lines)?;
    emitter.finish()
}
