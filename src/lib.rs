//! # lxbread - Luminex LXB Event Reader
//!
//! `lxbread` decodes Luminex LXB files, the FCS 3.0 containers written by
//! Luminex bead-array instruments, into plain text tables of per-event values.
//!
//! ## Key Features
//!
//! - **Zero-copy decoding**: [`lxb::LxbFile`] borrows segments from the loaded
//!   buffer and yields masked rows lazily.
//!
//! - **Strict subset checks**: only integral, list-mode, little-endian, 32-bit
//!   files are accepted; anything else is rejected with a typed
//!   [`lxb::LxbError`] before a single row is produced.
//!
//! - **Batch semantics**: [`batch::BatchDecoder`] skips unreadable or
//!   unsupported files and reports per-file outcomes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lxbread::batch::process_files;
//! use lxbread::output::RowWriter;
//!
//! let writer = RowWriter::new(std::io::stdout().lock());
//! let (summary, _) = process_files(&["plate_A1.lxb", "plate_A2.lxb"], writer)?;
//! eprintln!("{}", summary);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Output Format
//!
//! ```text
//! FL1(256), FL2(1024)
//! 44	1952
//! 17	88
//! ```
//!
//! One header line built from the first decodable file, then one line per
//! event with tab-separated values.
//!
//! ## Architecture
//!
//! - [`lxb`]: header, TEXT and DATA segment decoding
//! - [`output`]: header and row formatting
//! - [`batch`]: multi-file runs with skip semantics
//! - [`validator`]: step-by-step file checks with a printable report

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod lxb;
pub mod output;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{process_files, BatchDecoder, BatchSummary, FileError, FileStatus};
    pub use crate::lxb::{
        LxbBuilder, LxbError, LxbFile, MetadataMap, Parameter, ParameterMasks, Row,
        SegmentOffsets,
    };
    pub use crate::output::{OutputOptions, RowWriter};
    pub use crate::validator::{validate_lxb_buffer, validate_lxb_file, ValidationReport};
}
