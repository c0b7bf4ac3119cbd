//! Parser, writer, and real-time playback engine for BVH-style motion
//! capture files.
//!
//! A document is a `HIERARCHY` section (a recursive joint tree with
//! per-joint rest offsets and a fixed 6/3-channel layout) followed by a
//! `MOTION` section (a frame count, a sample period, and one flat row of
//! channel values per frame). This crate parses that grammar into a
//! [`Skeleton`], plays it back in real time with spherical quaternion
//! interpolation between frames, derives spatial bounds for camera
//! framing, and writes documents back out round-trippably.
//!
//! Rendering, windowing, and camera math are deliberately out of scope:
//! a renderer walks [`JointHierarchy::iter_depth_first`] and reads the
//! per-joint offset, rotation, and root translation itself.

pub mod animation;
pub mod error;
pub mod motion;
pub mod parser;
pub mod skeleton;
pub mod writer;

// Re-export common types
pub use animation::{AngleAxis, PlaybackState, Player, Quat, Tick};
pub use error::{Error, Result};
pub use motion::{MotionFrame, MotionFrameStore};
pub use parser::{parse_file, parse_str};
pub use skeleton::{Aabb, JointHierarchy, JointId, JointKind, JointNode, Skeleton};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
