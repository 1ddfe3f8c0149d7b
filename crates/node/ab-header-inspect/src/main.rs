//! Block header inspection CLI

mod cli;

use crate::cli::CliCommand;
use crate::cli::decode::{Decode, DecodeError};
use crate::cli::sample::{Sample, SampleError};
use crate::cli::tags::Tags;
use ab_cli_utils::{init_logger, set_exit_on_panic};
use clap::Parser;

/// Block header inspection CLI
#[derive(Debug, Parser)]
#[clap(about, version)]
enum Cli {
    /// Decode a hex-encoded header
    Decode(Decode),
    /// Print hex encoding of a sample header
    Sample(Sample),
    /// List registered header revisions
    Tags(Tags),
}

#[derive(Debug, thiserror::Error)]
enum Error {
    /// Decode error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    /// Sample error
    #[error("Sample error: {0}")]
    Sample(#[from] SampleError),
}

fn main() -> Result<(), Error> {
    set_exit_on_panic();
    init_logger();

    match Cli::parse() {
        Cli::Decode(cmd) => cmd.run(),
        Cli::Sample(cmd) => cmd.run(),
        Cli::Tags(cmd) => cmd.run(),
    }
}
