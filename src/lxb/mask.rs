//! Per-parameter value masks derived from `$P<n>R`

use super::keywords::{parameter_key, ParameterSuffix, MAX_PARAMETERS};
use super::text::MetadataMap;

const MAX_MASK: i64 = u32::MAX as i64;

/// Bitmask per parameter, applied to each raw 32-bit channel value
///
/// The mask for parameter `n` is `$P<n>R - 1` when the range is positive and
/// zero otherwise, capped at `u32::MAX` so masked values fit a 32-bit channel. This only lines up with a bit boundary when the range is a
/// power of two; other ranges give whatever `range - 1` selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMasks {
    masks: [i64; MAX_PARAMETERS],
    len: usize,
}

impl ParameterMasks {
    /// Derive masks for the first `count` parameters
    ///
    /// `count` is clamped to [`MAX_PARAMETERS`].
    pub fn from_metadata(metadata: &MetadataMap, count: usize) -> Self {
        let len = count.min(MAX_PARAMETERS);
        let mut masks = [0i64; MAX_PARAMETERS];
        for (i, mask) in masks.iter_mut().enumerate().take(len) {
            *mask = match metadata.get_int(&parameter_key(i, ParameterSuffix::Range)) {
                Some(range) if range > 0 => (range - 1).min(MAX_MASK),
                _ => 0,
            };
        }
        Self { masks, len }
    }

    /// Mask for a 0-based parameter index, zero when out of range
    pub fn get(&self, index: usize) -> i64 {
        if index < self.len {
            self.masks[index]
        } else {
            0
        }
    }

    /// Masks for the declared parameters
    pub fn as_slice(&self) -> &[i64] {
        &self.masks[..self.len]
    }

    /// Number of declared parameters
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no parameters are declared
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Apply the mask for `index` to a raw channel value
    #[inline]
    pub fn apply(&self, index: usize, raw: i32) -> i64 {
        i64::from(raw) & self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_from_ranges() {
        let metadata: MetadataMap = [
            ("$P1R", "256"),
            ("$P2R", "1024"),
            ("$P3R", "0"),
            ("$P4R", "-8"),
            ("$P5R", "junk"),
            ("$P7R", "1000"),
        ]
        .into_iter()
        .collect();

        let masks = ParameterMasks::from_metadata(&metadata, 7);
        assert_eq!(masks.as_slice(), &[255, 1023, 0, 0, 0, 0, 999]);
        assert_eq!(masks.len(), 7);
    }

    #[test]
    fn test_out_of_range_index_is_zero() {
        let metadata: MetadataMap = [("$P1R", "16"), ("$P2R", "16")].into_iter().collect();
        let masks = ParameterMasks::from_metadata(&metadata, 1);
        assert_eq!(masks.get(0), 15);
        // $P2R exists but parameter 2 is not declared
        assert_eq!(masks.get(1), 0);
        assert_eq!(masks.get(MAX_PARAMETERS + 5), 0);
    }

    #[test]
    fn test_fresh_masks_do_not_leak_between_files() {
        let wide: MetadataMap = [("$P1R", "64"), ("$P2R", "64"), ("$P3R", "64")]
            .into_iter()
            .collect();
        let narrow: MetadataMap = [("$P1R", "8")].into_iter().collect();

        let first = ParameterMasks::from_metadata(&wide, 3);
        let second = ParameterMasks::from_metadata(&narrow, 1);
        assert_eq!(first.as_slice(), &[63, 63, 63]);
        assert_eq!(second.as_slice(), &[7]);
        assert_eq!(second.get(1), 0);
        assert_eq!(second.get(2), 0);
    }

    #[test]
    fn test_apply() {
        let metadata: MetadataMap = [("$P1R", "256"), ("$P2R", "4294967296")]
            .into_iter()
            .collect();
        let masks = ParameterMasks::from_metadata(&metadata, 2);
        assert_eq!(masks.apply(0, 300), 44);
        assert_eq!(masks.apply(0, -1), 255);
        assert_eq!(masks.apply(1, -1), 4_294_967_295);
    }

    #[test]
    fn test_wide_range_is_capped_to_32_bits() {
        let metadata: MetadataMap = [("$P1R", "8589934592"), ("$P2R", "9223372036854775807")]
            .into_iter()
            .collect();
        let masks = ParameterMasks::from_metadata(&metadata, 2);
        assert_eq!(masks.as_slice(), &[4_294_967_295, 4_294_967_295]);
        assert_eq!(masks.apply(0, -1), 4_294_967_295);
        assert_eq!(masks.apply(1, i32::MIN), 2_147_483_648);
    }

    #[test]
    fn test_count_is_clamped() {
        let masks = ParameterMasks::from_metadata(&MetadataMap::new(), 500);
        assert_eq!(masks.len(), MAX_PARAMETERS);
        assert!(masks.as_slice().iter().all(|&m| m == 0));
    }
}
