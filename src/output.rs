//! Text output for decoded files
//!
//! ```text
//! FL1(256), FL2(1024)
//! 44	1952
//! ```
//!
//! The header line lists `label(range)` per parameter and is written once per
//! run, taken from the first file that decodes.

use std::io::{self, Write};

use serde::Deserialize;

use crate::lxb::{LxbFile, Parameter, Row};

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Write the header line
    pub header: bool,
    /// Text written before the header line
    pub header_prefix: String,
    /// Separator between values in a data row
    pub separator: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            header: true,
            header_prefix: String::new(),
            separator: "\t".to_string(),
        }
    }
}

/// Format the header line (without prefix or newline)
pub fn format_header(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{}({})", p.label(), p.range.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a data row with `separator` between values
pub fn format_row(row: &Row, separator: &str) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Streams header and rows of decoded files to a writer
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    out: W,
    options: OutputOptions,
    wrote_header: bool,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    /// Wrap `out` with default options
    pub fn new(out: W) -> Self {
        Self::with_options(out, OutputOptions::default())
    }

    /// Wrap `out` with explicit options
    pub fn with_options(out: W, options: OutputOptions) -> Self {
        Self {
            out,
            options,
            wrote_header: false,
            rows_written: 0,
        }
    }

    /// Write the header for `file` unless one was already written
    ///
    /// Returns whether a header line was emitted.
    pub fn write_header(&mut self, file: &LxbFile<'_>) -> io::Result<bool> {
        if self.wrote_header || !self.options.header {
            return Ok(false);
        }
        writeln!(
            self.out,
            "{}{}",
            self.options.header_prefix,
            format_header(&file.parameters())
        )?;
        self.wrote_header = true;
        Ok(true)
    }

    /// Write every row of `file`, returning how many were written
    pub fn write_rows(&mut self, file: &LxbFile<'_>) -> io::Result<usize> {
        let mut count = 0;
        for row in file.rows() {
            if self.options.separator == "\t" {
                writeln!(self.out, "{}", row)?;
            } else {
                writeln!(self.out, "{}", format_row(&row, &self.options.separator))?;
            }
            count += 1;
        }
        self.rows_written += count;
        Ok(count)
    }

    /// Header (if still pending) followed by all rows
    pub fn write_file(&mut self, file: &LxbFile<'_>) -> io::Result<usize> {
        self.write_header(file)?;
        self.write_rows(file)
    }

    /// Whether a header line has been written
    pub fn wrote_header(&self) -> bool {
        self.wrote_header
    }

    /// Total rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
