use crate::lxb::{validate_format, MetadataMap, ValidatedFormat, ValidationWarning};

use super::{ValidationCheck, ValidationReport};

/// Step 2: supported-subset keywords
pub(crate) fn check_metadata(
    metadata: &MetadataMap,
    report: &mut ValidationReport,
) -> Option<ValidatedFormat> {
    match validate_format(metadata) {
        Ok(format) => {
            report.add_check(ValidationCheck::ok("Supported format"));
            for warning in &format.warnings {
                let name = match warning {
                    ValidationWarning::Unicode(_) => "Unicode content",
                };
                report.add_check(ValidationCheck::warning(name, warning.to_string()));
            }
            Some(format)
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Supported format", e.to_string()));
            None
        }
    }
}
