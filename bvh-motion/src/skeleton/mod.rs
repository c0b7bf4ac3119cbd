//! Skeleton data model
//!
//! [`JointHierarchy`] holds the joint tree; [`Skeleton`] pairs it with the
//! [`MotionFrameStore`](crate::motion::MotionFrameStore) parsed from the
//! same file and is the unit of ownership for playback.

mod bounds;
mod hierarchy;

pub use bounds::Aabb;
pub use hierarchy::{DepthFirstIter, JointHierarchy, JointId, JointKind, JointNode};

use crate::error::{Error, Result};
use crate::motion::MotionFrameStore;

/// A parsed hierarchy plus its motion data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skeleton {
    hierarchy: JointHierarchy,
    motion: MotionFrameStore,
}

impl Skeleton {
    /// Pair a hierarchy with its motion frames.
    ///
    /// Every appended frame must match the hierarchy's channel layout;
    /// a mismatched row fails with [`Error::InvalidDimension`] here so it
    /// can never surface mid-playback.
    pub fn new(hierarchy: JointHierarchy, motion: MotionFrameStore) -> Result<Self> {
        let expected = hierarchy.channel_count();
        for frame in motion.frames() {
            if frame.len() != expected {
                return Err(Error::InvalidDimension {
                    expected,
                    found: frame.len(),
                });
            }
        }

        Ok(Self { hierarchy, motion })
    }

    /// The joint tree
    pub fn hierarchy(&self) -> &JointHierarchy {
        &self.hierarchy
    }

    /// Mutable joint tree (pose application)
    pub fn hierarchy_mut(&mut self) -> &mut JointHierarchy {
        &mut self.hierarchy
    }

    /// The motion frame store
    pub fn motion(&self) -> &MotionFrameStore {
        &self.motion
    }

    /// Apply the given frame index verbatim to the hierarchy
    pub fn apply_frame_index(&mut self, index: usize) -> Result<()> {
        let frame = self.frame(index)?.clone();
        self.hierarchy.apply_frame(&frame)
    }

    /// Apply an interpolated pose between frames `first` and `first + 1`
    pub fn apply_interpolated(&mut self, first: usize, t: f32) -> Result<()> {
        let a = self.frame(first)?.clone();
        let b = self.frame(first + 1)?.clone();
        self.hierarchy.apply_frame_interpolated(&a, &b, t)
    }

    fn frame(&self, index: usize) -> Result<&crate::motion::MotionFrame> {
        self.motion.frame(index).ok_or(Error::FrameOutOfRange {
            index,
            len: self.motion.len(),
        })
    }
}
