//! Fixed-offset LXB header
//!
//! ```text
//! [0, 10)   "FCS3.0    "
//! [10, 18)  TEXT begin        [18, 26)  TEXT end
//! [26, 34)  DATA begin        [34, 42)  DATA end
//! [42, 50)  ANALYSIS begin    [50, 58)  ANALYSIS end
//! ```
//!
//! Each offset field is an 8-byte ASCII decimal, left- or right-justified
//! with spaces.

use log::debug;
use serde::Serialize;

use super::error::{LxbError, Result, Segment};

/// Size of the fixed header prefix
pub const HEADER_LEN: usize = 58;

/// Version token followed by four padding spaces
pub const MAGIC: &[u8; 10] = b"FCS3.0    ";

const OFFSET_WIDTH: usize = 8;

const OFFSET_FIELDS: [&str; 6] = [
    "TEXT begin",
    "TEXT end",
    "DATA begin",
    "DATA end",
    "ANALYSIS begin",
    "ANALYSIS end",
];

/// Segment offsets read from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SegmentOffsets {
    /// TEXT segment start
    pub begin_text: i64,
    /// TEXT segment end
    pub end_text: i64,
    /// DATA segment start
    pub begin_data: i64,
    /// DATA segment end
    pub end_data: i64,
    /// ANALYSIS segment start
    pub begin_analysis: i64,
    /// ANALYSIS segment end
    pub end_analysis: i64,
}

impl SegmentOffsets {
    /// Parse the header prefix of a whole-file buffer
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(LxbError::TooSmall { size: data.len() });
        }

        if &data[..MAGIC.len()] != MAGIC {
            return Err(LxbError::BadMagic);
        }

        let mut values = [0i64; 6];
        for (i, (value, field)) in values.iter_mut().zip(OFFSET_FIELDS).enumerate() {
            let start = MAGIC.len() + i * OFFSET_WIDTH;
            *value = parse_offset(field, &data[start..start + OFFSET_WIDTH])?;
        }

        let offsets = Self {
            begin_text: values[0],
            end_text: values[1],
            begin_data: values[2],
            end_data: values[3],
            begin_analysis: values[4],
            end_analysis: values[5],
        };
        debug!(
            "Header offsets: TEXT [{}, {}), DATA [{}, {}), ANALYSIS [{}, {})",
            offsets.begin_text,
            offsets.end_text,
            offsets.begin_data,
            offsets.end_data,
            offsets.begin_analysis,
            offsets.end_analysis
        );
        Ok(offsets)
    }

    /// TEXT segment range
    pub fn text(&self) -> SegmentRange {
        SegmentRange::new(Segment::Text, self.begin_text, self.end_text)
    }

    /// DATA segment range as declared in the header
    pub fn data(&self) -> SegmentRange {
        SegmentRange::new(Segment::Data, self.begin_data, self.end_data)
    }

    /// ANALYSIS segment range
    pub fn analysis(&self) -> SegmentRange {
        SegmentRange::new(Segment::Analysis, self.begin_analysis, self.end_analysis)
    }
}

/// Parse the header of a whole-file buffer
pub fn parse_header(data: &[u8]) -> Result<SegmentOffsets> {
    SegmentOffsets::parse(data)
}

fn parse_offset(field: &'static str, raw: &[u8]) -> Result<i64> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.trim_matches(|c: char| c.is_ascii_whitespace()).parse().ok())
        .ok_or_else(|| LxbError::OffsetParseError {
            field,
            value: String::from_utf8_lossy(raw).into_owned(),
        })
}

/// A `[begin, end)` byte range into the file buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRange {
    /// Which segment this range describes
    pub segment: Segment,
    /// First byte of the segment
    pub begin: i64,
    /// One past the last byte used
    pub end: i64,
}

impl SegmentRange {
    /// Create a range for `segment`
    pub fn new(segment: Segment, begin: i64, end: i64) -> Self {
        Self {
            segment,
            begin,
            end,
        }
    }

    /// Number of bytes covered, zero for inverted ranges
    pub fn len(&self) -> usize {
        self.end
            .checked_sub(self.begin)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }

    /// Whether the range covers no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the segment from `buffer`
    ///
    /// The range must be non-empty, start past offset 0 and end within the buffer.
    pub fn locate<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8]> {
        let out_of_bounds = || LxbError::SegmentOutOfBounds {
            segment: self.segment,
            begin: self.begin,
            end: self.end,
            len: buffer.len(),
        };

        if self.begin <= 0 || self.end <= self.begin {
            return Err(out_of_bounds());
        }
        let begin = usize::try_from(self.begin).map_err(|_| out_of_bounds())?;
        let end = usize::try_from(self.end).map_err(|_| out_of_bounds())?;
        if end > buffer.len() {
            return Err(out_of_bounds());
        }
        Ok(&buffer[begin..end])
    }
}
