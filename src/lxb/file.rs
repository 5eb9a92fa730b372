//! Whole-file decoding pipeline
//!
//! `bytes → header → TEXT → validation → DATA → rows`. Everything borrows from
//! the caller's buffer; masks are computed per file and live in the returned
//! [`LxbFile`].

use log::debug;

use super::error::{Result, Segment};
use super::header::{SegmentOffsets, SegmentRange};
use super::keywords::{parameter_key, ParameterSuffix, KEYWORDS};
use super::mask::ParameterMasks;
use super::records::RecordDecoder;
use super::text::{parse_text, MetadataMap};
use super::validate::{validate_format, ValidatedFormat, ValidationWarning};

/// Description of one measured channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// 1-based parameter index
    pub index: usize,
    /// `$P<n>S`
    pub short_name: Option<String>,
    /// `$P<n>N`
    pub name: Option<String>,
    /// `$P<n>B` as written
    pub bits: Option<String>,
    /// `$P<n>R` as written
    pub range: Option<String>,
    /// Mask applied to raw values
    pub mask: i64,
}

impl Parameter {
    /// Column label: short name, else long name, else empty
    pub fn label(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// A validated LXB file borrowed from its raw buffer
#[derive(Debug, Clone)]
pub struct LxbFile<'a> {
    offsets: SegmentOffsets,
    metadata: MetadataMap,
    format: ValidatedFormat,
    data: &'a [u8],
}

impl<'a> LxbFile<'a> {
    /// Decode header and TEXT, validate, and locate DATA
    pub fn parse(buffer: &'a [u8]) -> Result<Self> {
        let (offsets, metadata) = read_metadata(buffer)?;
        let format = validate_format(&metadata)?;
        let data = data_range(&offsets, &metadata).locate(buffer)?;

        Ok(Self {
            offsets,
            metadata,
            format,
            data,
        })
    }

    /// Header offsets
    pub fn offsets(&self) -> &SegmentOffsets {
        &self.offsets
    }

    /// TEXT keywords
    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    /// Masks derived for this file
    pub fn masks(&self) -> &ParameterMasks {
        &self.format.masks
    }

    /// Non-fatal validation findings
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.format.warnings
    }

    /// Declared parameter count
    pub fn parameter_count(&self) -> usize {
        self.format.parameter_count
    }

    /// Declared event count (`$TOT`); missing or invalid counts as zero
    pub fn total_events(&self) -> usize {
        total_events(&self.metadata)
    }

    /// Raw DATA segment
    pub fn data_segment(&self) -> &'a [u8] {
        self.data
    }

    /// Channel descriptions in parameter order
    pub fn parameters(&self) -> Vec<Parameter> {
        let get = |i: usize, suffix: ParameterSuffix| {
            self.metadata
                .get(&parameter_key(i, suffix))
                .map(str::to_string)
        };
        (0..self.parameter_count())
            .map(|i| Parameter {
                index: i + 1,
                short_name: get(i, ParameterSuffix::ShortName),
                name: get(i, ParameterSuffix::Name),
                bits: get(i, ParameterSuffix::Bits),
                range: get(i, ParameterSuffix::Range),
                mask: self.format.masks.get(i),
            })
            .collect()
    }

    /// Decode events from the start of the DATA segment
    pub fn rows(&self) -> RecordDecoder<'_> {
        RecordDecoder::new(self.data, &self.format.masks, self.total_events())
    }
}

/// Declared event count; missing, negative or malformed `$TOT` yields zero
pub fn total_events(metadata: &MetadataMap) -> usize {
    metadata
        .get_int(KEYWORDS::TOT)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// DATA range from the header, or from `$BEGINDATA`/`$ENDDATA` when both
/// header fields are zero
pub fn data_range(offsets: &SegmentOffsets, metadata: &MetadataMap) -> SegmentRange {
    if offsets.begin_data == 0 && offsets.end_data == 0 {
        if let (Some(begin), Some(end)) = (
            metadata.get_int(KEYWORDS::BEGINDATA),
            metadata.get_int(KEYWORDS::ENDDATA),
        ) {
            debug!("DATA offsets taken from TEXT: [{}, {})", begin, end);
            return SegmentRange::new(Segment::Data, begin, end);
        }
    }
    offsets.data()
}

/// Parse just enough of `buffer` to read its TEXT keywords
///
/// Does not validate the format; used for inspection of unsupported files.
pub fn read_metadata(buffer: &[u8]) -> Result<(SegmentOffsets, MetadataMap)> {
    let offsets = SegmentOffsets::parse(buffer)?;
    let metadata = parse_text(offsets.text().locate(buffer)?)?;
    debug!("TEXT segment: {} keywords", metadata.len());
    Ok((offsets, metadata))
}
