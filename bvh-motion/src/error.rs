//! Error types for BVH parsing and playback

use std::io;
use thiserror::Error;

/// Result type alias for BVH operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, writing, or driving a skeleton
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed grammar in the input file
    #[error("parse error at line {line_number}: expected {expected}, found {line:?}")]
    Parse {
        /// 1-based line number of the offending line
        line_number: usize,
        /// Content of the offending line
        line: String,
        /// Description of the construct the parser expected
        expected: String,
    },

    /// Motion store append beyond the declared frame count
    #[error("motion frame store is full: declared capacity is {capacity} frames")]
    CapacityExceeded {
        /// Declared frame capacity of the store
        capacity: usize,
    },

    /// A joint id that does not refer to a live node in the hierarchy
    #[error("joint {0} not found in hierarchy")]
    NodeNotFound(usize),

    /// A channel row whose value count does not match the hierarchy layout
    #[error("invalid channel dimension: expected {expected} values, found {found}")]
    InvalidDimension {
        /// Value count implied by the hierarchy channel layout
        expected: usize,
        /// Value count actually supplied
        found: usize,
    },

    /// A motion section declaring or holding zero frames
    #[error("motion data contains no frames")]
    EmptyMotion,

    /// A frame index past the end of the store
    #[error("frame index {index} out of range: store holds {len} frames")]
    FrameOutOfRange {
        /// Requested frame index
        index: usize,
        /// Number of frames actually held
        len: usize,
    },
}

impl Error {
    /// Create a parse error from a line cursor position
    pub fn parse(line_number: usize, line: impl Into<String>, expected: impl Into<String>) -> Self {
        Error::Parse {
            line_number,
            line: line.into(),
            expected: expected.into(),
        }
    }
}
