//! Convert command implementation

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use bvh_motion::parse_file;

pub fn execute(input: PathBuf, output: PathBuf) -> Result<()> {
    let skeleton =
        parse_file(&input).with_context(|| format!("Failed to parse {}", input.display()))?;

    info!(
        "parsed {}: {} joints, {} frames",
        input.display(),
        skeleton.hierarchy().non_end_count(),
        skeleton.motion().frame_count()
    );

    skeleton
        .write_to_file(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
