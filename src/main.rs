//! # lxbread
//!
//! Command-line reader for Luminex LXB (FCS 3.0) bead-array files.
//!
//! ## Usage
//!
//! ```bash
//! # Print events of one or more files
//! lxbread dump plate_A1.lxb plate_A2.lxb > events.tsv
//!
//! # Inspect header offsets and keywords
//! lxbread info --json plate_A1.lxb
//!
//! # Check files against the supported format
//! lxbread validate *.lxb
//!
//! # Generate a synthetic file
//! lxbread demo demo.lxb
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
