use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use lxbread::lxb::keywords::KEYWORDS;
use lxbread::lxb::{
    data_range, parameter_key, read_metadata, total_events, validate_format, MetadataMap,
    ParameterSuffix, SegmentOffsets, SegmentRange, MAX_PARAMETERS,
};

#[derive(Serialize)]
struct ParameterInfo<'a> {
    index: usize,
    label: &'a str,
    bits: Option<&'a str>,
    range: Option<&'a str>,
    mask: Option<i64>,
}

#[derive(Serialize)]
struct FileInfo<'a> {
    file: String,
    size: usize,
    offsets: &'a SegmentOffsets,
    total_events: usize,
    supported: bool,
    error: Option<String>,
    parameters: Vec<ParameterInfo<'a>>,
    keywords: &'a MetadataMap,
}

/// Display header offsets, parameters and keywords of an LXB file
///
/// Unsupported files are still described as far as their TEXT segment goes.
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let buffer =
        std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let (offsets, metadata) = read_metadata(&buffer)
        .with_context(|| format!("Failed to read TEXT segment of {}", file.display()))?;

    let checked = validate_format(&metadata).and_then(|format| {
        data_range(&offsets, &metadata).locate(&buffer)?;
        Ok(format)
    });
    let (format, error) = match checked {
        Ok(format) => (Some(format), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let count = match &format {
        Some(format) => format.parameter_count,
        None => metadata
            .get_int(KEYWORDS::PAR)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
            .min(MAX_PARAMETERS),
    };
    let parameters = (0..count)
        .map(|i| {
            let get = |suffix| metadata.get(&parameter_key(i, suffix));
            ParameterInfo {
                index: i + 1,
                label: get(ParameterSuffix::ShortName)
                    .or_else(|| get(ParameterSuffix::Name))
                    .unwrap_or_default(),
                bits: get(ParameterSuffix::Bits),
                range: get(ParameterSuffix::Range),
                mask: format.as_ref().map(|f| f.masks.get(i)),
            }
        })
        .collect();

    let info = FileInfo {
        file: file.display().to_string(),
        size: buffer.len(),
        offsets: &offsets,
        total_events: total_events(&metadata),
        supported: error.is_none(),
        error,
        parameters,
        keywords: &metadata,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).context("Failed to serialize file info")?
        );
    } else {
        print_text(&info);
    }
    Ok(())
}

fn print_text(info: &FileInfo<'_>) {
    println!("LXB File Information");
    println!("====================");
    println!("File: {} ({} bytes)", info.file, info.size);
    println!();

    let o = info.offsets;
    println!("Segments:");
    for range in [o.text(), o.data(), o.analysis()] {
        println!("  {}", describe_range(&range));
    }
    println!();

    println!("Events ($TOT): {}", info.total_events);
    match &info.error {
        None => println!("Format: supported"),
        Some(e) => println!("Format: unsupported ({})", e),
    }
    println!();

    println!("Parameters:");
    for p in &info.parameters {
        println!(
            "  {:>2}  {:<12} bits={:<4} range={:<10} mask={}",
            p.index,
            p.label,
            p.bits.unwrap_or("-"),
            p.range.unwrap_or("-"),
            p.mask.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string())
        );
    }
    println!();

    println!("Keywords ({}):", info.keywords.len());
    for (key, value) in info.keywords.iter() {
        let preview = if value.chars().count() > 100 {
            let head: String = value.chars().take(100).collect();
            format!("{}... ({} bytes)", head, value.len())
        } else {
            value.to_string()
        };
        println!("  {}: {}", key, preview);
    }
}

fn describe_range(range: &SegmentRange) -> String {
    let name = format!("{}:", range.segment);
    if range.is_empty() {
        format!("{:<9} absent", name)
    } else {
        format!(
            "{:<9} [{}, {}) {} bytes",
            name,
            range.begin,
            range.end,
            range.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxbread::lxb::Segment;

    #[test]
    fn test_describe_range() {
        let data = SegmentRange::new(Segment::Data, 120, 152);
        assert_eq!(describe_range(&data), "DATA:     [120, 152) 32 bytes");

        let analysis = SegmentRange::new(Segment::Analysis, 0, 0);
        assert_eq!(describe_range(&analysis), "ANALYSIS: absent");
    }
}
