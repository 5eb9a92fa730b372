use crate::lxb::{
    data_range, total_events, MetadataMap, SegmentOffsets, ValidatedFormat, VALUE_SIZE,
};

use super::{ValidationCheck, ValidationReport};

/// Step 3: DATA segment and event count
pub(crate) fn check_data(
    buffer: &[u8],
    offsets: &SegmentOffsets,
    metadata: &MetadataMap,
    format: &ValidatedFormat,
    report: &mut ValidationReport,
) {
    let data = match data_range(offsets, metadata).locate(buffer) {
        Ok(data) => {
            report.add_check(ValidationCheck::ok("DATA segment located"));
            data
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("DATA segment located", e.to_string()));
            return;
        }
    };

    let declared = total_events(metadata);
    let record_len = format.parameter_count * VALUE_SIZE;
    let stored = if record_len == 0 { 0 } else { data.len() / record_len };

    if stored >= declared {
        report.add_check(ValidationCheck::ok("Event count"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Event count",
            format!(
                "DATA segment holds {} of {} declared events ($TOT); output will stop early",
                stored, declared
            ),
        ));
    }
}
