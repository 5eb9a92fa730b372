use std::fmt;

use super::keywords::MAX_PARAMETERS;

/// Segments addressed by the LXB header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Delimiter-framed keyword/value metadata
    Text,
    /// Fixed-width event records
    Data,
    /// Optional analysis results (parsed, never decoded)
    Analysis,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text => write!(f, "TEXT"),
            Segment::Data => write!(f, "DATA"),
            Segment::Analysis => write!(f, "ANALYSIS"),
        }
    }
}

/// Errors that abort decoding of a single LXB file
///
/// None of these are fatal to a multi-file run: the caller logs the
/// diagnostic and moves on to the next input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LxbError {
    /// Buffer is shorter than the fixed header
    #[error("Bad LXB: header data is too small ({size} bytes)")]
    TooSmall {
        /// Length of the rejected buffer
        size: usize,
    },

    /// First ten bytes are not `FCS3.0    `
    #[error("Bad LXB: magic bytes do not match")]
    BadMagic,

    /// One of the six 8-byte header fields is not a decimal integer
    #[error("Bad LXB: failed to parse segment offset {field} ({value:?})")]
    OffsetParseError {
        /// Name of the offending header field
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// A segment range is empty or lies outside the buffer
    #[error("Bad LXB: could not locate {segment} segment [{begin}, {end}) in {len} bytes")]
    SegmentOutOfBounds {
        /// Segment being located
        segment: Segment,
        /// Declared start offset
        begin: i64,
        /// Declared end offset
        end: i64,
        /// Length of the whole file buffer
        len: usize,
    },

    /// TEXT segment cannot hold a delimiter plus content
    #[error("Bad LXB: TEXT segment is too small ({size} bytes)")]
    SegmentTooSmall {
        /// Size of the TEXT segment
        size: usize,
    },

    /// `$PAR` is missing, not an integer, or above 99
    #[error("Unsupported parameter count ($PAR={value:?}, maximum {max})", max = MAX_PARAMETERS)]
    TooManyParameters {
        /// Raw `$PAR` value
        value: String,
    },

    /// `$DATATYPE` is not `I`
    #[error("Data is not integral ($DATATYPE={0})")]
    UnsupportedDatatype(String),

    /// `$MODE` is not `L`
    #[error("Data not in list format ($MODE={0})")]
    UnsupportedMode(String),

    /// `$BYTEORD` is not `1,2,3,4`
    #[error("Data not in little endian format ($BYTEORD={0})")]
    UnsupportedByteOrder(String),

    /// A parameter is not stored as a 32-bit value
    #[error("Parameter {parameter} is not 32 bits ({key}={value})")]
    UnsupportedBitWidth {
        /// 1-based parameter index
        parameter: usize,
        /// Keyword that was checked (`$P<n>B`)
        key: String,
        /// Raw keyword value
        value: String,
    },
}

/// Result alias for LXB decoding
pub type Result<T> = std::result::Result<T, LxbError>;
