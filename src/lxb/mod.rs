//! # LXB Decoder Module
//!
//! Decodes Luminex LXB files, which are FCS 3.0 containers holding list-mode
//! bead events. Only a narrow subset of FCS 3.0 is accepted: integral
//! little-endian 32-bit values in list mode with at most 99 parameters.
//!
//! ## File Structure
//!
//! ```text
//! [0, 58)       header: "FCS3.0    " + six 8-byte ASCII offsets
//! [TEXT)        delimiter byte, then key/value pairs split by it
//! [DATA)        $TOT records of $PAR little-endian i32 values
//! [ANALYSIS)    parsed from the header, otherwise ignored
//! ```
//!
//! ## Pipeline
//!
//! 1. [`SegmentOffsets::parse`] reads the header
//! 2. [`parse_text`] splits the TEXT segment into a [`MetadataMap`]
//! 3. [`validate_format`] checks the supported subset and derives
//!    [`ParameterMasks`]
//! 4. [`RecordDecoder`] walks the DATA segment yielding masked [`Row`]s
//!
//! [`LxbFile`] runs all four over one borrowed buffer.
//!
//! ```rust
//! use lxbread::lxb::{LxbBuilder, LxbFile};
//!
//! let buffer = LxbBuilder::new()
//!     .parameter("FL1", 256)
//!     .parameter("FL2", 1024)
//!     .event(&[300, 2000])
//!     .build();
//!
//! let file = LxbFile::parse(&buffer)?;
//! let rows: Vec<String> = file.rows().map(|row| row.to_string()).collect();
//! assert_eq!(rows, vec!["44\t1952"]);
//! # Ok::<(), lxbread::lxb::LxbError>(())
//! ```

mod builder;
mod error;
mod file;
mod header;
pub mod keywords;
mod mask;
mod records;
mod text;
mod validate;

pub use builder::LxbBuilder;
pub use error::{LxbError, Result, Segment};
pub use file::{data_range, read_metadata, total_events, LxbFile, Parameter};
pub use header::{parse_header, SegmentOffsets, SegmentRange, HEADER_LEN, MAGIC};
pub use keywords::{parameter_key, ParameterSuffix, MAX_PARAMETERS};
pub use mask::ParameterMasks;
pub use records::{RecordDecoder, Row, VALUE_SIZE};
pub use text::{parse_int, parse_text, MetadataMap};
pub use validate::{validate_format, ValidatedFormat, ValidationWarning};
