//! Substitution-cipher stream filter.
//!
//! Reads lines from stdin, applies the selected transform (ROT13 by default,
//! ROT47 with `-f`), and writes the rotated lines to stdout. Flags are
//! scanned left to right and the last selection flag wins.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rotfilter::cipher::Transform;
use rotfilter::exit_codes;
use rotfilter::render::filter_lines;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "rotfilter",
    version,
    about = "Rotate stdin lines through ROT13 (default) or ROT47",
    disable_help_flag = true
)]
struct Cli {
    /// Print usage, then keep filtering. Does not change the selection.
    #[arg(short = 'h', long = "help", overrides_with = "help")]
    help: bool,
    /// Select ROT13: rotate ASCII letters only.
    #[arg(short = 'l', overrides_with_all = ["letters", "full"])]
    letters: bool,
    /// Select ROT47: rotate the full printable-ASCII range.
    #[arg(short = 'f', overrides_with_all = ["letters", "full"])]
    full: bool,
}

impl Cli {
    fn transform(&self) -> Transform {
        if self.full {
            Transform::Rot47
        } else {
            Transform::Rot13
        }
    }
}

fn main() {
    rotfilter::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::IO);
    }
}

fn run() -> Result<()> {
    // An unrecognized argument makes `parse` print usage to stderr and exit
    // non-zero before any line processing.
    let cli = Cli::parse();

    if cli.help {
        Cli::command().print_help().context("print help")?;
    }

    let transform = cli.transform();
    debug!(?transform, "transform selected");

    let stdin = io::stdin();
    let mut output = BufWriter::new(io::stdout().lock());
    filter_lines(stdin.lock(), &mut output, transform)?;
    output.flush().context("flush stdout")?;
    Ok(())
}
