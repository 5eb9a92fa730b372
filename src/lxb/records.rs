//! DATA segment record decoding
//!
//! Each event is `N` consecutive little-endian `i32` values, one per
//! parameter. Decoding stops after `$TOT` events or when the next record would
//! run past the end of the segment, whichever comes first.

use std::fmt;
use std::ops::Deref;

use byteorder::{ByteOrder, LittleEndian};

use super::mask::ParameterMasks;

/// Bytes per stored value
pub const VALUE_SIZE: usize = 4;

/// One event: masked channel values in parameter order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row(Vec<i64>);

impl Row {
    /// Wrap already-masked values
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Masked values in parameter order
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Take the values out of the row
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl Deref for Row {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the events of a DATA segment
#[derive(Debug, Clone)]
pub struct RecordDecoder<'a> {
    data: &'a [u8],
    masks: &'a ParameterMasks,
    remaining: usize,
    cursor: usize,
}

impl<'a> RecordDecoder<'a> {
    /// Decode at most `total_events` records of `masks.len()` values each
    pub fn new(data: &'a [u8], masks: &'a ParameterMasks, total_events: usize) -> Self {
        Self {
            data,
            masks,
            remaining: total_events,
            cursor: 0,
        }
    }

    /// Size in bytes of one record
    pub fn record_len(&self) -> usize {
        self.masks.len() * VALUE_SIZE
    }

    /// Number of records still to be produced
    pub fn remaining(&self) -> usize {
        let record_len = self.record_len();
        if record_len == 0 {
            return 0;
        }
        self.remaining
            .min((self.data.len() - self.cursor) / record_len)
    }
}

impl Iterator for RecordDecoder<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let end = self.cursor + self.record_len();
        let record = &self.data[self.cursor..end];
        let values = record
            .chunks_exact(VALUE_SIZE)
            .enumerate()
            .map(|(i, raw)| self.masks.apply(i, LittleEndian::read_i32(raw)))
            .collect();

        self.cursor = end;
        self.remaining -= 1;
        Some(Row(values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RecordDecoder<'_> {}
