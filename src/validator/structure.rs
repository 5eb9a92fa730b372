use crate::lxb::{parse_text, MetadataMap, SegmentOffsets};

use super::{ValidationCheck, ValidationReport};

/// Step 1: header and TEXT segment
pub(crate) fn check_structure(
    buffer: &[u8],
    report: &mut ValidationReport,
) -> Option<(SegmentOffsets, MetadataMap)> {
    let offsets = match SegmentOffsets::parse(buffer) {
        Ok(offsets) => {
            report.add_check(ValidationCheck::ok("Header"));
            offsets
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Header", e.to_string()));
            return None;
        }
    };

    let text = match offsets.text().locate(buffer) {
        Ok(text) => {
            report.add_check(ValidationCheck::ok("TEXT segment located"));
            text
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("TEXT segment located", e.to_string()));
            return None;
        }
    };

    match parse_text(text) {
        Ok(metadata) => {
            report.add_check(ValidationCheck::ok("TEXT segment parsed"));
            Some((offsets, metadata))
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("TEXT segment parsed", e.to_string()));
            None
        }
    }
}
