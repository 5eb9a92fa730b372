//! Checks a TEXT segment against the supported FCS 3.0 subset
//!
//! Supported: integral (`$DATATYPE=I`) list-mode (`$MODE=L`) data, little-endian
//! (`$BYTEORD=1,2,3,4`), every parameter 32 bits wide, at most
//! [`MAX_PARAMETERS`] parameters. Checks run in that order and the first
//! failure is reported.

use std::fmt;

use log::{debug, warn};

use super::error::{LxbError, Result};
use super::keywords::{
    parameter_key, ParameterSuffix, KEYWORDS, LITTLE_ENDIAN_BYTEORD, MAX_PARAMETERS,
    SUPPORTED_BIT_WIDTH,
};
use super::mask::ParameterMasks;
use super::text::{parse_int, MetadataMap};

/// Non-fatal findings; decoding proceeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// `$UNICODE` is set, so non-ASCII metadata or data may be misread
    Unicode(String),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::Unicode(value) => write!(
                f,
                "TEXT segment declares unicode content ($UNICODE={}); output may be wrong",
                value
            ),
        }
    }
}

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFormat {
    /// Declared parameter count (`$PAR`)
    pub parameter_count: usize,
    /// Masks derived for this file
    pub masks: ParameterMasks,
    /// Non-fatal findings
    pub warnings: Vec<ValidationWarning>,
}

/// Validate `metadata` and derive this file's parameter masks
pub fn validate_format(metadata: &MetadataMap) -> Result<ValidatedFormat> {
    let parameter_count = check_parameter_count(metadata)?;

    let datatype = metadata.get(KEYWORDS::DATATYPE).unwrap_or_default();
    if !datatype.eq_ignore_ascii_case("I") {
        return Err(LxbError::UnsupportedDatatype(datatype.to_string()));
    }

    let mode = metadata.get(KEYWORDS::MODE).unwrap_or_default();
    if !mode.eq_ignore_ascii_case("L") {
        return Err(LxbError::UnsupportedMode(mode.to_string()));
    }

    let byteord = metadata.get(KEYWORDS::BYTEORD).unwrap_or_default();
    if byteord != LITTLE_ENDIAN_BYTEORD {
        return Err(LxbError::UnsupportedByteOrder(byteord.to_string()));
    }

    let mut warnings = Vec::new();
    if let Some(unicode) = metadata.get(KEYWORDS::UNICODE).filter(|v| !v.is_empty()) {
        let warning = ValidationWarning::Unicode(unicode.to_string());
        warn!("  {}", warning);
        warnings.push(warning);
    }

    let masks = ParameterMasks::from_metadata(metadata, parameter_count);

    for i in 0..parameter_count {
        let key = parameter_key(i, ParameterSuffix::Bits);
        let value = metadata.get(&key).unwrap_or_default();
        if parse_int(value) != Some(SUPPORTED_BIT_WIDTH) {
            return Err(LxbError::UnsupportedBitWidth {
                parameter: i + 1,
                key,
                value: value.to_string(),
            });
        }
    }

    debug!("Format accepted: {} parameters, masks {:?}", parameter_count, masks.as_slice());

    Ok(ValidatedFormat {
        parameter_count,
        masks,
        warnings,
    })
}

/// Negative counts declare no parameters
fn check_parameter_count(metadata: &MetadataMap) -> Result<usize> {
    let raw = metadata.get(KEYWORDS::PAR).unwrap_or_default();
    match parse_int(raw) {
        Some(n) if n <= MAX_PARAMETERS as i64 => Ok(usize::try_from(n).unwrap_or(0)),
        _ => Err(LxbError::TooManyParameters {
            value: raw.to_string(),
        }),
    }
}
