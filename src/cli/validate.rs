use anyhow::Result;
use log::info;
use std::path::PathBuf;

use lxbread::validator::validate_lxb_file;

/// Validate LXB files, exiting non-zero if any check failed
pub fn run(files: Vec<PathBuf>) -> Result<()> {
    let mut failed = false;

    for file in &files {
        info!("Validating {}", file.display());
        match validate_lxb_file(file) {
            Ok(report) => {
                println!("{}", report.format_colored());
                failed |= report.has_failures();
            }
            Err(e) => {
                eprintln!("Validation error: {:#}", e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
