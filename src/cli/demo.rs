use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use lxbread::lxb::LxbBuilder;

/// Classifier and reporter channels of a typical bead-array acquisition
const CHANNELS: &[(&str, i64)] = &[
    ("CL1", 65536),
    ("CL2", 65536),
    ("DD", 65536),
    ("RP1", 65536),
    ("TIME", 16777216),
];

/// Write a synthetic LXB file
pub fn run(output: PathBuf, events: usize) -> Result<()> {
    info!("Generating {} events...", events);

    let mut builder = LxbBuilder::new()
        .keyword("$CYT", "Luminex 200")
        .keyword("$FIL", output.display().to_string());
    for &(name, range) in CHANNELS {
        builder = builder.parameter(name, range);
    }
    let builder = builder.events((0..events).map(mock_event));

    let buffer = builder.build();
    std::fs::write(&output, &buffer)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({} events, {} bytes)",
        output.display(),
        events,
        buffer.len()
    );
    Ok(())
}

/// Deterministic pseudo-random event; upper bits are set to exercise masking
fn mock_event(i: usize) -> Vec<i32> {
    let seed = (i as u32).wrapping_mul(2_654_435_761);
    let region = (i % 10) as i32;
    vec![
        1000 + region * 1500 + (seed & 0xff) as i32,
        800 + region * 1200 + ((seed >> 8) & 0xff) as i32,
        4000 + ((seed >> 4) & 0x3ff) as i32,
        ((seed >> 12) & 0x7fff) as i32 | 0x0100_0000,
        (i * 25) as i32,
    ]
}
