//! Multi-file decoding with per-file skip semantics
//!
//! Each input is decoded to completion before the next one starts. A file
//! that cannot be read or fails any check is logged and skipped; the run
//! succeeds when at least one file was fully decoded.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};

use crate::lxb::{LxbError, LxbFile, ValidationWarning};
use crate::output::RowWriter;

/// Why a file was skipped
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The file could not be loaded
    #[error("Could not read file: {0}")]
    Read(#[from] io::Error),

    /// The file is not a supported LXB file
    #[error(transparent)]
    Format(#[from] LxbError),
}

/// Result of processing one input
#[derive(Debug)]
pub enum FileStatus {
    /// All rows were written
    Decoded {
        /// Number of rows written
        rows: usize,
        /// Non-fatal validation findings
        warnings: Vec<ValidationWarning>,
    },
    /// The file was abandoned
    Skipped(FileError),
}

impl FileStatus {
    /// Whether the file was fully decoded
    pub fn is_decoded(&self) -> bool {
        matches!(self, FileStatus::Decoded { .. })
    }
}

/// Per-file record kept by [`BatchDecoder`]
#[derive(Debug)]
pub struct FileOutcome {
    /// Display name of the input
    pub name: String,
    /// What happened to it
    pub status: FileStatus,
}

/// Outcomes of a whole run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// One entry per input, in processing order
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    /// True when at least one file was fully decoded
    pub fn success(&self) -> bool {
        self.outcomes.iter().any(|o| o.status.is_decoded())
    }

    /// Number of fully decoded files
    pub fn decoded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_decoded()).count()
    }

    /// Number of skipped files
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.decoded_count()
    }

    /// Rows written across all files
    pub fn rows_written(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Decoded { rows, .. } => rows,
                FileStatus::Skipped(_) => 0,
            })
            .sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decoded {} of {} files ({} rows), skipped {}",
            self.decoded_count(),
            self.outcomes.len(),
            self.rows_written(),
            self.skipped_count()
        )
    }
}

/// Decodes a sequence of inputs into one [`RowWriter`]
///
/// Errors returned from its methods are output failures, which end the run;
/// per-file problems are recorded as [`FileStatus::Skipped`] instead.
#[derive(Debug)]
pub struct BatchDecoder<W: Write> {
    writer: RowWriter<W>,
    summary: BatchSummary,
}

impl<W: Write> BatchDecoder<W> {
    /// Start a run writing to `writer`
    pub fn new(writer: RowWriter<W>) -> Self {
        Self {
            writer,
            summary: BatchSummary::default(),
        }
    }

    /// Decode one in-memory file
    pub fn decode_buffer(
        &mut self,
        name: impl Into<String>,
        buffer: &[u8],
    ) -> io::Result<&FileOutcome> {
        let status = match LxbFile::parse(buffer) {
            Ok(file) => {
                self.writer.write_header(&file)?;
                let rows = self.writer.write_rows(&file)?;
                FileStatus::Decoded {
                    rows,
                    warnings: file.warnings().to_vec(),
                }
            }
            Err(e) => FileStatus::Skipped(e.into()),
        };
        Ok(self.record(name.into(), status))
    }

    /// Load and decode one file from disk
    pub fn decode_path(&mut self, path: &Path) -> io::Result<&FileOutcome> {
        let name = path.display().to_string();
        match std::fs::read(path) {
            Ok(buffer) => self.decode_buffer(name, &buffer),
            Err(e) => Ok(self.record(name, FileStatus::Skipped(e.into()))),
        }
    }

    fn record(&mut self, name: String, status: FileStatus) -> &FileOutcome {
        if let FileStatus::Skipped(e) = &status {
            warn!("  {}: {}", name, e);
        }
        self.summary.outcomes.push(FileOutcome { name, status });
        let last = self.summary.outcomes.len() - 1;
        &self.summary.outcomes[last]
    }

    /// Outcomes so far
    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    /// Flush output and return the summary with the writer
    pub fn finish(mut self) -> io::Result<(BatchSummary, RowWriter<W>)> {
        self.writer.flush()?;
        Ok((self.summary, self.writer))
    }
}

/// Decode `paths` in order, logging progress
pub fn process_files<W, P>(
    paths: &[P],
    writer: RowWriter<W>,
) -> io::Result<(BatchSummary, RowWriter<W>)>
where
    W: Write,
    P: AsRef<Path>,
{
    let mut batch = BatchDecoder::new(writer);
    for (i, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        info!("Processing file [{} of {}]: {}", i + 1, paths.len(), path.display());
        batch.decode_path(path)?;
    }
    batch.finish()
}
