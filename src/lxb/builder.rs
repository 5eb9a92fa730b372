//! Assembles LXB files in the supported subset
//!
//! Used by the `demo` command, tests and benchmarks. Segments are laid out
//! back to back after the header: TEXT at `[58, t)`, DATA at `[t, d)`.

use super::header::{HEADER_LEN, MAGIC};
use super::keywords::{
    parameter_key, ParameterSuffix, KEYWORDS, LITTLE_ENDIAN_BYTEORD, SUPPORTED_BIT_WIDTH,
};
use super::text::MetadataMap;

/// Builder for in-memory LXB files
#[derive(Debug, Clone)]
pub struct LxbBuilder {
    delimiter: u8,
    parameters: Vec<(String, i64)>,
    events: Vec<Vec<i32>>,
    extra: Vec<(String, String)>,
    data_offsets_in_text: bool,
    trailing_data: usize,
}

impl Default for LxbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LxbBuilder {
    /// Empty file with `/` as TEXT delimiter
    pub fn new() -> Self {
        Self {
            delimiter: b'/',
            parameters: Vec::new(),
            events: Vec::new(),
            extra: Vec::new(),
            data_offsets_in_text: false,
            trailing_data: 0,
        }
    }

    /// Set the TEXT delimiter byte
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Add a 32-bit parameter with short name and range
    pub fn parameter(mut self, short_name: impl Into<String>, range: i64) -> Self {
        self.parameters.push((short_name.into(), range));
        self
    }

    /// Append one event; values beyond the parameter count are still written
    pub fn event(mut self, values: &[i32]) -> Self {
        self.events.push(values.to_vec());
        self
    }

    /// Append several events
    pub fn events<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = Vec<i32>>,
    {
        self.events.extend(events);
        self
    }

    /// Set or override a keyword after the generated ones
    pub fn keyword(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Zero the header DATA offsets and store them as `$BEGINDATA`/`$ENDDATA`
    pub fn data_offsets_in_text(mut self) -> Self {
        self.data_offsets_in_text = true;
        self
    }

    /// Append zero bytes to the DATA segment after the last event
    pub fn trailing_data(mut self, bytes: usize) -> Self {
        self.trailing_data = bytes;
        self
    }

    /// Keywords that will be written to TEXT
    pub fn metadata(&self) -> MetadataMap {
        let mut m = MetadataMap::new();
        m.insert(KEYWORDS::PAR, self.parameters.len().to_string());
        for (i, (name, range)) in self.parameters.iter().enumerate() {
            m.insert(
                parameter_key(i, ParameterSuffix::Bits),
                SUPPORTED_BIT_WIDTH.to_string(),
            );
            m.insert(parameter_key(i, ParameterSuffix::Range), range.to_string());
            m.insert(parameter_key(i, ParameterSuffix::ShortName), name.as_str());
        }
        m.insert(KEYWORDS::DATATYPE, "I");
        m.insert(KEYWORDS::MODE, "L");
        m.insert(KEYWORDS::BYTEORD, LITTLE_ENDIAN_BYTEORD);
        m.insert(KEYWORDS::TOT, self.events.len().to_string());
        for (k, v) in &self.extra {
            m.insert(k.as_str(), v.as_str());
        }
        m
    }

    /// Serialize the whole file
    pub fn build(&self) -> Vec<u8> {
        let mut data: Vec<u8> = self
            .events
            .iter()
            .flatten()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        data.resize(data.len() + self.trailing_data, 0);

        let text_begin = HEADER_LEN as i64;
        let mut metadata = self.metadata();
        let mut text = metadata.to_text_segment(self.delimiter);
        if self.data_offsets_in_text {
            // Offsets change the TEXT length, so repeat until it settles
            loop {
                let begin = text_begin + text.len() as i64;
                metadata.insert(KEYWORDS::BEGINDATA, begin.to_string());
                metadata.insert(KEYWORDS::ENDDATA, (begin + data.len() as i64).to_string());
                let next = metadata.to_text_segment(self.delimiter);
                let settled = next.len() == text.len();
                text = next;
                if settled {
                    break;
                }
            }
        }

        let text_end = text_begin + text.len() as i64;
        let (data_begin, data_end) = if self.data_offsets_in_text {
            (0, 0)
        } else {
            (text_end, text_end + data.len() as i64)
        };

        let mut out = Vec::with_capacity(HEADER_LEN + text.len() + data.len());
        out.extend_from_slice(MAGIC);
        for offset in [text_begin, text_end, data_begin, data_end, 0, 0] {
            out.extend_from_slice(format!("{:>8}", offset).as_bytes());
        }
        out.extend_from_slice(&text);
        out.extend_from_slice(&data);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lxb::header::SegmentOffsets;
    use crate::lxb::text::parse_text;

    #[test]
    fn test_layout() {
        let buffer = LxbBuilder::new()
            .parameter("CL1", 65536)
            .event(&[1])
            .event(&[2])
            .build();
        let offsets = SegmentOffsets::parse(&buffer).unwrap();
        assert_eq!(offsets.begin_text, 58);
        assert_eq!(offsets.end_text, offsets.begin_data);
        assert_eq!(offsets.end_data as usize, buffer.len());
        assert_eq!(offsets.end_data - offsets.begin_data, 8);

        let text = offsets.text().locate(&buffer).unwrap();
        let metadata = parse_text(text).unwrap();
        let expected = LxbBuilder::new()
            .parameter("CL1", 65536)
            .event(&[1])
            .event(&[2])
            .metadata();
        assert_eq!(metadata, expected);
    }

    #[test]
    fn test_custom_delimiter() {
        let buffer = LxbBuilder::new()
            .delimiter(b'|')
            .parameter("FL1", 256)
            .keyword("$CYT", "Luminex 100/200")
            .event(&[300])
            .build();
        let offsets = SegmentOffsets::parse(&buffer).unwrap();
        let text = offsets.text().locate(&buffer).unwrap();
        assert_eq!(text[0], b'|');

        // `/` is an ordinary character under a `|` delimiter
        let metadata = parse_text(text).unwrap();
        assert_eq!(metadata.get("$CYT"), Some("Luminex 100/200"));
        assert_eq!(metadata.get("$P1S"), Some("FL1"));
    }

    #[test]
    fn test_keyword_override_keeps_position() {
        let m = LxbBuilder::new()
            .keyword("$PAR", "7")
            .keyword("$FIL", "x.lxb")
            .metadata();
        assert_eq!(m.iter().next(), Some(("$PAR", "7")));
        assert_eq!(m.iter().last(), Some(("$FIL", "x.lxb")));
    }

    #[test]
    fn test_data_offsets_in_text_are_consistent() {
        let buffer = LxbBuilder::new()
            .parameter("CL1", 256)
            .events((0..50).map(|i| vec![i]))
            .data_offsets_in_text()
            .build();
        let offsets = SegmentOffsets::parse(&buffer).unwrap();
        let metadata = parse_text(offsets.text().locate(&buffer).unwrap()).unwrap();
        assert_eq!(metadata.get_int("$BEGINDATA"), Some(offsets.end_text));
        assert_eq!(metadata.get_int("$ENDDATA"), Some(buffer.len() as i64));
    }
}
