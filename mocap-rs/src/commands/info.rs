//! Info command implementation

use anyhow::{Context, Result};
use std::path::PathBuf;

use bvh_motion::{JointKind, Skeleton, parse_file};

pub fn execute(path: PathBuf, detailed: bool) -> Result<()> {
    let skeleton =
        parse_file(&path).with_context(|| format!("Failed to parse {}", path.display()))?;

    println!("Motion Capture File Information");
    println!("===============================");
    println!();
    println!("File: {}", path.display());
    println!("Joints: {} (plus end sites)", skeleton.hierarchy().non_end_count());
    println!("Channels per frame: {}", skeleton.hierarchy().channel_count());
    println!("Frames: {}", skeleton.motion().frame_count());
    println!("Frame time: {} s", skeleton.motion().sample_period());
    println!(
        "Clip length: {:.3} s",
        skeleton.motion().frame_count() as f32 * skeleton.motion().sample_period()
    );
    println!();

    let rest = skeleton.rest_pose_bounds();
    let animated = skeleton.animation_bounds();
    println!("Rest pose bounds:");
    println!("  min: [{:.3}, {:.3}, {:.3}]", rest.min.x, rest.min.y, rest.min.z);
    println!("  max: [{:.3}, {:.3}, {:.3}]", rest.max.x, rest.max.y, rest.max.z);
    println!("Animated bounds:");
    println!(
        "  min: [{:.3}, {:.3}, {:.3}]",
        animated.min.x, animated.min.y, animated.min.z
    );
    println!(
        "  max: [{:.3}, {:.3}, {:.3}]",
        animated.max.x, animated.max.y, animated.max.z
    );
    println!();

    println!("Joint tree:");
    print_tree(&skeleton, detailed);

    Ok(())
}

fn print_tree(skeleton: &Skeleton, detailed: bool) {
    let tree = skeleton.hierarchy();

    for id in tree.iter_depth_first() {
        let Some(node) = tree.node(id) else { continue };

        // Walk parent links to find this node's depth
        let mut depth = 0;
        let mut current = node.parent();
        while let Some(parent) = current {
            depth += 1;
            current = tree.node(parent).and_then(|n| n.parent());
        }

        let indent = "  ".repeat(depth);
        let label = match node.kind() {
            JointKind::End => "end site".to_string(),
            _ => node.name().to_string(),
        };

        if detailed {
            let offset = node.offset();
            println!(
                "{indent}{label}  offset [{}, {}, {}]",
                offset.x, offset.y, offset.z
            );
        } else {
            println!("{indent}{label}");
        }
    }
}
