use anyhow::{bail, Context, Result};
use log::info;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use lxbread::batch::process_files;
use lxbread::output::RowWriter;

use super::config::Config;

/// Decode LXB files to stdout
pub fn run(
    files: Vec<PathBuf>,
    config: Option<PathBuf>,
    no_header: bool,
    header_prefix: Option<String>,
) -> Result<()> {
    let mut options = match config {
        Some(path) => Config::from_file(&path)?.output,
        None => Default::default(),
    };
    if no_header {
        options.header = false;
    }
    if let Some(prefix) = header_prefix {
        options.header_prefix = prefix;
    }

    let stdout = io::stdout();
    let writer = RowWriter::with_options(BufWriter::new(stdout.lock()), options);
    let (summary, _) = process_files(&files, writer).context("Failed to write output")?;

    info!("{}", summary);
    if !summary.success() {
        bail!("No input file could be decoded");
    }
    Ok(())
}
