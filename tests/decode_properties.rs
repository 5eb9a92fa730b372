//! Property-based tests for the decoding pipeline

use lxbread::lxb::{
    parse_text, LxbBuilder, LxbFile, MetadataMap, ParameterMasks, SegmentOffsets,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_header_offsets_recovered(
        offsets in prop::array::uniform6(0i64..=99_999_999),
        left_justify in any::<bool>(),
    ) {
        let mut buffer = b"FCS3.0    ".to_vec();
        for offset in offsets {
            let field = if left_justify {
                format!("{:<8}", offset)
            } else {
                format!("{:>8}", offset)
            };
            buffer.extend_from_slice(field.as_bytes());
        }

        let parsed = SegmentOffsets::parse(&buffer).unwrap();
        prop_assert_eq!(
            [
                parsed.begin_text,
                parsed.end_text,
                parsed.begin_data,
                parsed.end_data,
                parsed.begin_analysis,
                parsed.end_analysis,
            ],
            offsets
        );
    }

    #[test]
    fn prop_text_segment_roundtrip(
        pairs in prop::collection::vec(("\\$[A-Z0-9]{1,8}", "[a-zA-Z0-9 ,.]{0,12}"), 1..20),
        delimiter in prop::sample::select(vec![b'/', b'|', b'\\', 0x0c]),
    ) {
        let map: MetadataMap = pairs.iter().cloned().collect();
        let parsed = parse_text(&map.to_text_segment(delimiter)).unwrap();
        prop_assert_eq!(parsed, map);
    }

    #[test]
    fn prop_mask_is_range_minus_one(range in 1i64..=(1 << 31)) {
        let map: MetadataMap = [("$P1R", range.to_string())].into_iter().collect();
        let masks = ParameterMasks::from_metadata(&map, 1);
        prop_assert_eq!(masks.get(0), range - 1);
    }

    #[test]
    fn prop_masked_value_fits_32_bits(range in 1i64..=i64::MAX, raw in any::<i32>()) {
        let map: MetadataMap = [("$P1R", range.to_string())].into_iter().collect();
        let masks = ParameterMasks::from_metadata(&map, 1);
        let value = masks.apply(0, raw);
        prop_assert!((0..=i64::from(u32::MAX)).contains(&value));
    }

    #[test]
    fn prop_nonpositive_range_masks_to_zero(range in -1000i64..=0, raw in any::<i32>()) {
        let map: MetadataMap = [("$P1R", range.to_string())].into_iter().collect();
        let masks = ParameterMasks::from_metadata(&map, 1);
        prop_assert_eq!(masks.apply(0, raw), 0);
    }

    #[test]
    fn prop_row_count_bounded_by_tot_and_data(
        parameters in 1usize..8,
        stored in 0usize..40,
        declared in 0usize..60,
        trailing in 0usize..4,
    ) {
        let mut builder = LxbBuilder::new();
        for p in 0..parameters {
            builder = builder.parameter(format!("P{}", p + 1), 1024);
        }
        let buffer = builder
            .events((0..stored).map(|i| vec![i as i32; parameters]))
            .keyword("$TOT", declared.to_string())
            .trailing_data(trailing)
            .build();

        let file = LxbFile::parse(&buffer).unwrap();
        let record_len = parameters * 4;
        let expected = declared.min(file.data_segment().len() / record_len);
        let rows: Vec<_> = file.rows().collect();
        prop_assert_eq!(rows.len(), expected);
        prop_assert!(rows.iter().all(|r| r.len() == parameters));
    }

    #[test]
    fn prop_values_stay_within_mask(
        values in prop::collection::vec(any::<i32>(), 1..50),
        range in prop::sample::select(vec![256i64, 1024, 65536]),
    ) {
        let buffer = LxbBuilder::new()
            .parameter("FL1", range)
            .events(values.iter().map(|&v| vec![v]))
            .build();
        let file = LxbFile::parse(&buffer).unwrap();
        for (row, &raw) in file.rows().zip(&values) {
            prop_assert!(row[0] >= 0 && row[0] < range);
            prop_assert_eq!(row[0], i64::from(raw) & (range - 1));
        }
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(file) = LxbFile::parse(&data) {
            let _ = file.rows().count();
        }
    }
}
