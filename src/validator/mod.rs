//! # LXB Validation Module
//!
//! Step-by-step checks of a single LXB file. Where
//! [`LxbFile::parse`](crate::lxb::LxbFile::parse) only returns the first error,
//! the report lists each stage that passed, warnings included.
//!
//! ## Validation Checklist
//!
//! 1. **Structure**: header magic and offsets, TEXT segment location and parse
//! 2. **Metadata**: `$PAR`, `$DATATYPE`, `$MODE`, `$BYTEORD`, `$P<n>B`, `$UNICODE`
//! 3. **Data**: DATA segment location and declared vs stored event count
//!
//! A failed step ends the report; later steps depend on its output.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lxbread::validator::validate_lxb_file;
//! use std::path::Path;
//!
//! let report = validate_lxb_file(Path::new("plate_A1.lxb"))?;
//! println!("{}", report);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod data;
mod metadata;
mod report;
mod structure;

/// Validate an in-memory LXB file
pub fn validate_lxb_buffer(name: impl Into<String>, buffer: &[u8]) -> ValidationReport {
    let mut report = ValidationReport::new(name);

    // 1. Structure
    let Some((offsets, text)) = structure::check_structure(buffer, &mut report) else {
        return report;
    };

    // 2. Metadata
    let Some(format) = metadata::check_metadata(&text, &mut report) else {
        return report;
    };

    // 3. Data
    data::check_data(buffer, &offsets, &text, &format, &mut report);

    report
}

/// Load and validate an LXB file from disk
pub fn validate_lxb_file(path: &Path) -> Result<ValidationReport> {
    let buffer =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(validate_lxb_buffer(path.display().to_string(), &buffer))
}
