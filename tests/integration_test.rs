//! Integration tests for lxbread
//!
//! These tests run whole files through the batch decoder and validator.

use lxbread::batch::{process_files, FileError, FileStatus};
use lxbread::lxb::{LxbBuilder, LxbError, LxbFile, Segment};
use lxbread::output::{OutputOptions, RowWriter};
use lxbread::validator::validate_lxb_file;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Assemble a file by hand: header, TEXT segment, then `data`
fn hand_built(text: &str, data: &[u8]) -> Vec<u8> {
    let text_begin = 58;
    let text_end = text_begin + text.len();
    let data_end = text_end + data.len();

    let mut out = b"FCS3.0    ".to_vec();
    for offset in [text_begin, text_end, text_end, data_end, 0, 0] {
        out.extend_from_slice(format!("{:>8}", offset).as_bytes());
    }
    out.extend_from_slice(text.as_bytes());
    out.extend_from_slice(data);
    out
}

/// Two parameters, `$TOT=1`, and 32 bytes of DATA holding four records
fn two_channel_file() -> Vec<u8> {
    let text = "/$PAR/2/$TOT/1/$DATATYPE/I/$MODE/L/$BYTEORD/1,2,3,4/\
                $P1B/32/$P1R/256/$P1S/FL1/$P2B/32/$P2R/1024/$P2S/FL2/";
    let data: Vec<u8> = [300i32, 2000, 1, 2, 3, 4, 5, 6]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    hand_built(text, &data)
}

fn decode_to_string(paths: &[PathBuf]) -> (lxbread::batch::BatchSummary, String) {
    let (summary, writer) = process_files(paths, RowWriter::new(Vec::new())).unwrap();
    (summary, String::from_utf8(writer.into_inner()).unwrap())
}

#[test]
fn test_single_file_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a1.lxb");
    fs::write(&path, two_channel_file()).unwrap();

    let (summary, text) = decode_to_string(&[path]);
    assert!(summary.success());
    assert_eq!(summary.rows_written(), 1);
    assert_eq!(text, "FL1(256), FL2(1024)\n44\t1952\n");
}

#[test]
fn test_bad_magic_is_skipped() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.lxb");
    let good = dir.path().join("good.lxb");

    let mut corrupt = two_channel_file();
    corrupt[..6].copy_from_slice(b"FCS2.0");
    fs::write(&bad, corrupt).unwrap();
    fs::write(&good, two_channel_file()).unwrap();

    let (summary, text) = decode_to_string(&[bad, good]);
    assert!(summary.success());
    assert_eq!(summary.skipped_count(), 1);
    assert!(matches!(
        summary.outcomes[0].status,
        FileStatus::Skipped(FileError::Format(LxbError::BadMagic))
    ));
    assert_eq!(text, "FL1(256), FL2(1024)\n44\t1952\n");
}

#[test]
fn test_header_comes_from_first_decoded_file() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.lxb");
    let second = dir.path().join("second.lxb");
    fs::write(&first, two_channel_file()).unwrap();
    fs::write(
        &second,
        LxbBuilder::new()
            .parameter("CL1", 65536)
            .parameter("CL2", 65536)
            .event(&[70000, 5])
            .build(),
    )
    .unwrap();

    let (summary, text) = decode_to_string(&[first, second]);
    assert_eq!(summary.decoded_count(), 2);
    assert_eq!(text, "FL1(256), FL2(1024)\n44\t1952\n4464\t5\n");
}

#[test]
fn test_no_decodable_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.lxb");
    let unsupported = dir.path().join("float.lxb");
    fs::write(
        &unsupported,
        LxbBuilder::new()
            .parameter("FL1", 256)
            .event(&[1])
            .keyword("$DATATYPE", "F")
            .build(),
    )
    .unwrap();

    let (summary, text) = decode_to_string(&[missing, unsupported]);
    assert!(!summary.success());
    assert_eq!(summary.skipped_count(), 2);
    assert!(matches!(
        summary.outcomes[0].status,
        FileStatus::Skipped(FileError::Read(_))
    ));
    assert!(text.is_empty());
}

#[test]
fn test_rejected_bit_width_names_parameter() {
    let buffer = LxbBuilder::new()
        .parameter("FL1", 256)
        .parameter("FL2", 256)
        .event(&[1, 2])
        .keyword("$P2B", "16")
        .build();
    let err = LxbFile::parse(&buffer).unwrap_err();
    assert_eq!(
        err,
        LxbError::UnsupportedBitWidth {
            parameter: 2,
            key: "$P2B".to_string(),
            value: "16".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Parameter 2 is not 32 bits ($P2B=16)");
}

#[test]
fn test_truncated_data_segment() {
    let mut buffer = two_channel_file();
    buffer.truncate(buffer.len() - 4);
    assert!(matches!(
        LxbFile::parse(&buffer),
        Err(LxbError::SegmentOutOfBounds {
            segment: Segment::Data,
            ..
        })
    ));
}

#[test]
fn test_fewer_records_than_declared() {
    let buffer = LxbBuilder::new()
        .parameter("FL1", 256)
        .events((0..3).map(|i| vec![i]))
        .keyword("$TOT", "10")
        .build();
    let file = LxbFile::parse(&buffer).unwrap();
    assert_eq!(file.total_events(), 10);
    assert_eq!(file.rows().count(), 3);
}

#[test]
fn test_custom_output_options() {
    let buffer = two_channel_file();
    let file = LxbFile::parse(&buffer).unwrap();
    let options = OutputOptions {
        header: false,
        separator: ",".to_string(),
        ..OutputOptions::default()
    };
    let mut writer = RowWriter::with_options(Vec::new(), options);
    writer.write_file(&file).unwrap();
    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "44,1952\n");
}

#[test]
fn test_validate_file_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a1.lxb");
    fs::write(&path, two_channel_file()).unwrap();

    let report = validate_lxb_file(&path).unwrap();
    assert!(!report.has_failures(), "{}", report);
    assert_eq!(report.file_path, path.display().to_string());

    assert!(validate_lxb_file(&dir.path().join("missing.lxb")).is_err());
}
