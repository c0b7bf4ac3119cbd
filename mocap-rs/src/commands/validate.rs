//! Validate command implementation

use anyhow::Result;
use std::path::PathBuf;

use bvh_motion::parse_file;

pub fn execute(path: PathBuf) -> Result<()> {
    match parse_file(&path) {
        Ok(skeleton) => {
            println!("{}: OK", path.display());
            println!(
                "  {} joints, {} frames, {} channels per frame",
                skeleton.hierarchy().non_end_count(),
                skeleton.motion().frame_count(),
                skeleton.hierarchy().channel_count()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{}: INVALID", path.display());
            eprintln!("  {err}");
            std::process::exit(1);
        }
    }
}
