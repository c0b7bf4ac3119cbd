//! Motion frame storage
//!
//! A [`MotionFrameStore`] is a capacity-bounded, append-only sequence of
//! flat channel rows plus the sampling metadata (`Frames:` count and
//! `Frame Time:` period) declared in the MOTION section of the file.

use std::io::Write;

use crate::error::{Error, Result};

/// One sampled instant of all channel values across the hierarchy.
///
/// Layout for the fixed 6/3-channel grammar: 3 root translation values
/// followed by 3 rotation values (Z, Y, X in degrees) per non-End joint
/// in depth-first order.
pub type MotionFrame = Vec<f32>;

/// Ordered collection of motion frames with declared capacity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionFrameStore {
    frame_count: usize,
    sample_period: f32,
    frames: Vec<MotionFrame>,
}

impl MotionFrameStore {
    /// Create an empty store with a declared frame capacity and sample
    /// period (seconds per frame, as authored in the file).
    ///
    /// A zero frame count is a precondition violation for playback and is
    /// rejected here rather than at tick time.
    pub fn new(frame_count: usize, sample_period: f32) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::EmptyMotion);
        }

        Ok(Self {
            frame_count,
            sample_period,
            frames: Vec::with_capacity(frame_count),
        })
    }

    /// Declared frame capacity
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Seconds per frame as authored
    pub fn sample_period(&self) -> f32 {
        self.sample_period
    }

    /// Number of frames appended so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames have been appended yet
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame in temporal order
    ///
    /// Fails with [`Error::CapacityExceeded`] once the declared count has
    /// been reached; never truncates or overwrites.
    pub fn append(&mut self, frame: MotionFrame) -> Result<()> {
        if self.frames.len() == self.frame_count {
            return Err(Error::CapacityExceeded {
                capacity: self.frame_count,
            });
        }

        self.frames.push(frame);
        Ok(())
    }

    /// Read view of the frames in insertion (temporal) order
    pub fn frames(&self) -> &[MotionFrame] {
        &self.frames
    }

    /// Frame at the given index, if appended
    pub fn frame(&self, index: usize) -> Option<&MotionFrame> {
        self.frames.get(index)
    }

    /// Write the MOTION block body: `Frames:`, `Frame Time:`, then one
    /// line of space-separated values per frame. Re-parseable by the
    /// parser byte for byte.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Frames: {}", self.frame_count)?;
        writeln!(writer, "Frame Time: {}", self.sample_period)?;

        for frame in &self.frames {
            let mut first = true;
            for value in frame {
                if first {
                    write!(writer, "{value}")?;
                    first = false;
                } else {
                    write!(writer, " {value}")?;
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}
