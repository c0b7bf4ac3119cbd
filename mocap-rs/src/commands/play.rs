//! Play command implementation
//!
//! Drives the player with a synthetic clock rather than real time, so a
//! run is deterministic and finishes immediately regardless of tick count.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use bvh_motion::{Player, Tick, parse_file};

pub fn execute(path: PathBuf, rate: Option<f32>, ticks: u32, tick_rate: f32) -> Result<()> {
    if !tick_rate.is_finite() || tick_rate <= 0.0 {
        bail!("tick rate must be a positive number, got {tick_rate}");
    }

    let skeleton =
        parse_file(&path).with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut player = match rate {
        Some(fps) => Player::with_rates(skeleton, fps, tick_rate)?,
        None => Player::new(skeleton)?,
    };

    println!(
        "Playing {} at {} fps ({} ticks, {} ticks/s)",
        path.display(),
        player.rate(),
        ticks,
        tick_rate
    );

    let start = Instant::now();
    let tick_period = Duration::from_secs_f32(1.0 / tick_rate);

    for n in 0..ticks {
        let now = start + tick_period * n;
        match player.advance_at(now)? {
            Tick::Started => println!("tick {n:4}: started at frame 0"),
            Tick::Interpolated { first_frame, t } => {
                println!("tick {n:4}: frames {first_frame}..{} (t = {t:.3})", first_frame + 1);
            }
            Tick::Wrapped => println!("tick {n:4}: wrapped to frame 0"),
            Tick::Throttled => println!("tick {n:4}: throttled"),
            Tick::Idle => println!("tick {n:4}: idle"),
        }
    }

    let tree = player.skeleton().hierarchy();
    let root = tree
        .node(tree.root())
        .context("hierarchy has no root node")?;
    let translation = root.translation();
    println!(
        "Final root translation: [{:.3}, {:.3}, {:.3}]",
        translation.x, translation.y, translation.z
    );

    Ok(())
}
