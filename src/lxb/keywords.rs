//! TEXT segment keywords understood by the decoder
//!
//! FCS 3.0 keywords are case-insensitive by the standard, but LXB writers emit
//! them upper-case and lookups here are exact-match.

use std::fmt;

/// Largest parameter count the decoder accepts
pub const MAX_PARAMETERS: usize = 99;

/// The only supported per-parameter bit width
pub const SUPPORTED_BIT_WIDTH: i64 = 32;

/// `$BYTEORD` declaration for little-endian 32-bit values
pub const LITTLE_ENDIAN_BYTEORD: &str = "1,2,3,4";

/// Required and optional keywords
#[allow(non_snake_case)]
pub mod KEYWORDS {
    // =========================================================================
    // Required
    // =========================================================================

    /// Number of parameters per event
    pub const PAR: &str = "$PAR";

    /// Number of events in the DATA segment
    pub const TOT: &str = "$TOT";

    /// Value type (`I`, `F`, `D` or `A`)
    pub const DATATYPE: &str = "$DATATYPE";

    /// Acquisition mode (`L`, `C` or `U`)
    pub const MODE: &str = "$MODE";

    /// Byte order of stored values
    pub const BYTEORD: &str = "$BYTEORD";

    // =========================================================================
    // Optional
    // =========================================================================

    /// Present when some keywords or values are UTF-8 encoded
    pub const UNICODE: &str = "$UNICODE";

    /// DATA segment start when the header field overflows
    pub const BEGINDATA: &str = "$BEGINDATA";

    /// DATA segment end when the header field overflows
    pub const ENDDATA: &str = "$ENDDATA";
}

/// Per-parameter keyword suffixes (`$P<n><suffix>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSuffix {
    /// `B`: bits reserved per value
    Bits,
    /// `R`: range, one past the largest stored value
    Range,
    /// `S`: short name, used as the column label
    ShortName,
    /// `N`: long name
    Name,
}

impl ParameterSuffix {
    /// Keyword suffix character
    pub fn as_char(&self) -> char {
        match self {
            ParameterSuffix::Bits => 'B',
            ParameterSuffix::Range => 'R',
            ParameterSuffix::ShortName => 'S',
            ParameterSuffix::Name => 'N',
        }
    }
}

impl fmt::Display for ParameterSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Build the keyword for a 0-based parameter index, e.g. `(0, Range)` → `$P1R`
pub fn parameter_key(index: usize, suffix: ParameterSuffix) -> String {
    format!("$P{}{}", index + 1, suffix)
}
