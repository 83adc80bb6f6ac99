//! `mmq-hl`: highlight mailing filter queries from the command line.
//!
//! The binary is a thin wrapper; everything it does lives here so it can be
//! tested without spawning processes.

pub mod commands;
pub mod emitter;
mod error;
mod options;

pub use commands::{read_input, render, run, Command};
pub use error::CliError;
pub use options::{parse_options, CliOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
